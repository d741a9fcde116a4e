//! AMD/RequireJS AST nodes.

mod define;
mod require;
mod strings;

pub use define::{DefineDeps, DefineModule};
pub use require::{LoadChain, LoadStep};
pub use strings::js_string;
