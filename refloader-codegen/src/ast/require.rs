//! Nested `require([...], function () { ... })` chains.

use super::js_string;
use crate::builder::{CodeFragment, Renderable};

/// One link of a load chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStep {
    /// A single module that must finish before the next step.
    Single(String),
    /// Modules loaded together, in no particular order.
    Batch(Vec<String>),
}

impl LoadStep {
    /// Module ids loaded by this step.
    pub fn modules(&self) -> &[String] {
        match self {
            LoadStep::Single(module) => std::slice::from_ref(module),
            LoadStep::Batch(modules) => modules,
        }
    }

    /// Wrap `body` so it only runs once this step has loaded.
    fn wrap(&self, body: Vec<CodeFragment>) -> CodeFragment {
        let close = Some("});".to_string());
        match self.modules() {
            [] => CodeFragment::block("require([], function () {", body, close),
            [module] => CodeFragment::block(
                format!("require([{}], function () {{", js_string(module)),
                body,
                close,
            ),
            modules => {
                let last = modules.len() - 1;
                let items = modules
                    .iter()
                    .enumerate()
                    .map(|(i, m)| {
                        let sep = if i < last { "," } else { "" };
                        CodeFragment::line(format!("{}{}", js_string(m), sep))
                    })
                    .collect();
                CodeFragment::sequence(vec![
                    CodeFragment::line("require(["),
                    CodeFragment::indent(items),
                    CodeFragment::block("], function () {", body, close),
                ])
            }
        }
    }
}

/// Load steps executed strictly one after another.
///
/// Rendered inside-out: the last step is the innermost callback, and each
/// earlier step wraps everything after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadChain {
    steps: Vec<LoadStep>,
}

impl LoadChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step to the end of the chain.
    pub fn step(mut self, step: LoadStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Append a single-module step for each module, in order.
    pub fn each<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps
            .extend(modules.into_iter().map(|m| LoadStep::Single(m.into())));
        self
    }

    /// Append one batch step, unless `modules` is empty.
    pub fn batch<I, S>(self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let modules: Vec<String> = modules.into_iter().map(Into::into).collect();
        if modules.is_empty() {
            self
        } else {
            self.step(LoadStep::Batch(modules))
        }
    }

    pub fn steps(&self) -> &[LoadStep] {
        &self.steps
    }

    /// Every module id in execution order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.steps
            .iter()
            .flat_map(|s| s.modules().iter().map(String::as_str))
    }
}

impl Renderable for LoadChain {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.steps
            .iter()
            .rfold(Vec::new(), |body, step| vec![step.wrap(body)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::CodeBuilder;

    fn render(chain: &LoadChain) -> String {
        let mut builder = CodeBuilder::javascript();
        builder.emit(chain);
        builder.build()
    }

    #[test]
    fn test_empty_chain_renders_nothing() {
        assert_eq!(render(&LoadChain::new()), "");
    }

    #[test]
    fn test_singles_nest_in_order() {
        let chain = LoadChain::new().each(["./a", "./b"]);
        assert_eq!(
            render(&chain),
            "require([\"./a\"], function () {\n  require([\"./b\"], function () {\n  });\n});\n"
        );
    }

    #[test]
    fn test_batch_lists_modules() {
        let chain = LoadChain::new().batch(["./x", "./y"]).each(["./z"]);
        insta::assert_snapshot!(render(&chain), @r#"
        require([
          "./x",
          "./y"
        ], function () {
          require(["./z"], function () {
          });
        });
        "#);
    }

    #[test]
    fn test_empty_batch_is_skipped() {
        let chain = LoadChain::new()
            .batch(Vec::<String>::new())
            .each(["./a"]);
        assert_eq!(chain.steps().len(), 1);
    }

    #[test]
    fn test_modules_in_execution_order() {
        let chain = LoadChain::new()
            .each(["./a"])
            .batch(["./b", "./c"])
            .each(["./d"]);
        let modules: Vec<&str> = chain.modules().collect();
        assert_eq!(modules, vec!["./a", "./b", "./c", "./d"]);
    }
}
