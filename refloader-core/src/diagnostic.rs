//! Diagnostic types shared by every stage.
//!
//! Stages never print or log user-facing problems themselves. They collect
//! [`Diagnostic`]s and hand them back to the caller.

use std::fmt;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A fatal error that prevents further processing.
    Error,
    /// A warning that doesn't prevent processing but should be addressed.
    Warning,
    /// Informational message, e.g. a stage that was skipped.
    Info,
}

impl Severity {
    /// Returns true if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns true if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message produced by a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The stage that produced this diagnostic (e.g. "parse", "filter").
    pub stage: String,
    /// The diagnostic message.
    pub message: String,
    /// Optional location, e.g. "src/reference.ts:12".
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, stage, message)
    }

    /// Create a new info diagnostic.
    pub fn info(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, stage, message)
    }

    fn new(severity: Severity, stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            stage: stage.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Promote a warning to an error. Other severities are kept.
    pub fn escalate(mut self) -> Self {
        if self.severity.is_warning() {
            self.severity = Severity::Error;
        }
        self
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escalate_promotes_warnings_only() {
        let diag = Diagnostic::warning("parse", "region end without start")
            .at("reference.ts:4")
            .escalate();
        assert!(diag.severity.is_error());
        assert_eq!(diag.stage, "parse");
        assert_eq!(
            diag.to_string(),
            "error: region end without start (at reference.ts:4)"
        );

        let info = Diagnostic::info("check", "manifest not found").escalate();
        assert_eq!(info.severity, Severity::Info);
    }

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::warning("parse", "region end without start").at("reference.ts:4");
        assert_eq!(diag.location.as_deref(), Some("reference.ts:4"));
        assert_eq!(
            diag.to_string(),
            "warning: region end without start (at reference.ts:4)"
        );
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Info.to_string(), "info");
    }
}
