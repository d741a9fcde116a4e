//! The nested loader script.

use std::path::PathBuf;

use refloader_core::GeneratedFile;

use crate::{
    ast::{DefineModule, LoadChain},
    builder::CodeBuilder,
};

/// `loader.js`: every module wrapped in a chain of sequential `require` calls.
#[derive(Debug, Clone)]
pub struct LoaderJs {
    path: PathBuf,
    chain: LoadChain,
}

impl LoaderJs {
    pub fn new(path: impl Into<PathBuf>, chain: LoadChain) -> Self {
        Self {
            path: path.into(),
            chain,
        }
    }

    pub fn chain(&self) -> &LoadChain {
        &self.chain
    }
}

impl GeneratedFile for LoaderJs {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(&DefineModule::new(&self.chain));
        builder.build()
    }
}
