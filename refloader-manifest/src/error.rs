use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for refloader-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Human readable `file:line` location.
    pub fn location(&self, line: usize) -> String {
        format!("{}:{}", self.filename, line)
    }

    /// Create a malformed reference error for the given line.
    pub fn malformed_reference(&self, line: usize, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::MalformedReference {
            src: self.named_source(),
            span: span.into(),
            line,
        })
    }

    /// Create a config parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Config {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed reference on line {line}")]
    #[diagnostic(
        code(refloader::malformed_reference),
        help("references must look like: /// <reference path=\"relative/file.ts\" />")
    )]
    MalformedReference {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a quoted path after the reference marker")]
        span: SourceSpan,
        line: usize,
    },

    #[error("failed to parse configuration")]
    #[diagnostic(code(refloader::config_error))]
    Config {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(refloader::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        message: String,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Line number of a malformed reference, if this is one.
    pub fn malformed_line(&self) -> Option<usize> {
        match self {
            Error::MalformedReference { line, .. } => Some(*line),
            _ => None,
        }
    }
}
