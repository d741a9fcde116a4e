//! Indentation configuration for code generation.

const SPACES: &str = "        ";

/// Width of one indent level, in spaces. Capped at eight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub u8);

impl Indent {
    /// 2-space indentation, used for the generated JavaScript.
    pub const JAVASCRIPT: Self = Self(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        &SPACES[..usize::from(self.0).min(SPACES.len())]
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVASCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::JAVASCRIPT.as_str(), "  ");
        assert_eq!(Indent(3).as_str(), "   ");
        assert_eq!(Indent(20).as_str(), SPACES);
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::JAVASCRIPT);
    }
}
