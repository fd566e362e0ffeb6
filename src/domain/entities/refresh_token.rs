//! Refresh token value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Opaque refresh credential with masking.
///
/// The value is kept exactly as issued, including surrounding whitespace or
/// an empty string; the issuer owns the format.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RefreshToken {
    value: String,
}

impl RefreshToken {
    /// Wraps a raw token string unchanged.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns token as string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consumes token and returns inner string.
    #[must_use]
    pub fn into_inner(mut self) -> String {
        std::mem::take(&mut self.value)
    }

    /// Returns masked token for display.
    #[must_use]
    pub fn masked(&self) -> String {
        let len = self.value.chars().count();
        if len <= 10 {
            return "*".repeat(len);
        }

        let prefix: String = self.value.chars().take(4).collect();
        let suffix: String = self.value.chars().skip(len - 4).collect();
        format!("{prefix}...{suffix}")
    }
}

impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshToken")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_TOKEN: &str = "rt_4f9c2a7e1b8d4c0f9a6e3b2d1c7f8e9a";

    #[test]
    fn test_value_kept_verbatim() {
        assert_eq!(RefreshToken::new("  abc123\n").as_str(), "  abc123\n");
        assert_eq!(RefreshToken::new("").as_str(), "");
    }

    #[test]
    fn test_empty_token_masks_to_nothing() {
        assert_eq!(RefreshToken::new("").to_string(), "");
    }

    #[test]
    fn test_short_token_fully_masked() {
        let token = RefreshToken::new("abc123");
        assert_eq!(token.masked(), "******");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = RefreshToken::new(LONG_TOKEN);
        let debug_output = format!("{token:?}");

        assert!(!debug_output.contains(LONG_TOKEN));
        assert!(debug_output.contains("rt_4...8e9a"));
    }

    #[test]
    fn test_into_inner_returns_value() {
        let token = RefreshToken::new(LONG_TOKEN);
        assert_eq!(token.into_inner(), LONG_TOKEN);
    }
}
