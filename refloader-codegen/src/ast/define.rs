//! `define(...)` module wrappers.

use super::js_string;
use crate::builder::{CodeFragment, Renderable};

/// `define(function (require) { ... });` around a body.
#[derive(Debug, Clone, Default)]
pub struct DefineModule {
    body: Vec<CodeFragment>,
}

impl DefineModule {
    pub fn new(body: impl Renderable) -> Self {
        Self {
            body: body.to_fragments(),
        }
    }
}

impl Renderable for DefineModule {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            "define(function (require) {",
            self.body.clone(),
            Some("});".to_string()),
        )]
    }
}

/// `define([deps...], function () {});`, a module that only pulls in dependencies.
#[derive(Debug, Clone, Default)]
pub struct DefineDeps {
    modules: Vec<String>,
}

impl DefineDeps {
    pub fn new<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }
}

impl Renderable for DefineDeps {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let deps: Vec<String> = self.modules.iter().map(|m| js_string(m)).collect();
        vec![CodeFragment::line(format!(
            "define([{}], function () {{}});",
            deps.join(", ")
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(node);
        builder.build()
    }

    #[test]
    fn test_define_deps() {
        let deps = DefineDeps::new(["./a", "./b"]);
        assert_eq!(
            render(&deps),
            "define([\"./a\", \"./b\"], function () {});\n"
        );
    }

    #[test]
    fn test_define_deps_empty() {
        assert_eq!(
            render(&DefineDeps::default()),
            "define([], function () {});\n"
        );
    }

    #[test]
    fn test_define_module_empty_body() {
        let module = DefineModule::default();
        assert_eq!(render(&module), "define(function (require) {\n});\n");
    }
}
