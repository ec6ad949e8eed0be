//! Style rendering error types

use thiserror::Error;

/// Style rendering result type
pub type CssResult<T> = Result<T, CssError>;

/// Style rendering errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CssError {
    /// An `@` rule was found inside a pseudo selector block
    #[error("At-rule nested in pseudo selector")]
    AtRuleNestedInPseudo {
        /// The offending at-rule key
        rule: String,
    },

    #[error("Expected a block for '{selector}'")]
    InvalidBlock {
        selector: String,
    },

    #[error("Invalid style input: {message}")]
    InvalidInput {
        message: String,
    },

    #[error("At-rules nested deeper than {depth} levels")]
    NestingTooDeep {
        depth: usize,
    },
}

impl CssError {
    pub fn at_rule_nested(rule: impl Into<String>) -> Self {
        Self::AtRuleNestedInPseudo { rule: rule.into() }
    }

    pub fn invalid_block(selector: impl Into<String>) -> Self {
        Self::InvalidBlock { selector: selector.into() }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    /// Whether this error describes an invalid shape of the style tree
    /// rather than a malformed input document
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::AtRuleNestedInPseudo { .. } | Self::NestingTooDeep { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_rule_message_is_fixed() {
        let err = CssError::at_rule_nested("@media screen");
        assert_eq!(format!("{}", err), "At-rule nested in pseudo selector");
        assert!(err.is_structural());
    }

    #[test]
    fn test_error_display() {
        let err = CssError::invalid_block("body");
        assert_eq!(format!("{}", err), "Expected a block for 'body'");
        assert!(!err.is_structural());

        let err = CssError::NestingTooDeep { depth: 64 };
        assert_eq!(format!("{}", err), "At-rules nested deeper than 64 levels");
    }
}
