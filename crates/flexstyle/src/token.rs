//! Gap scale values and the custom-property tokens they render to.
//!
//! Gap and spacing sizes use a discrete scale `0..=6`. Size `0` is a sentinel
//! that renders the literal `0`; every other size renders a reference to a
//! custom property owned by the host's design tokens:
//!
//! ```rust
//! use flexstyle::{GapSize, TokenScheme};
//!
//! let scheme = TokenScheme::default();
//! assert_eq!(scheme.token(GapSize::ZERO), "0");
//! assert_eq!(scheme.token(GapSize::new(3).unwrap()), "var(--gap-size-3)");
//!
//! let custom = TokenScheme::new().with_prefix("space");
//! assert_eq!(custom.token(GapSize::new(3).unwrap()), "var(--space-3)");
//! ```
//!
//! The library only references these properties; defining them is up to the
//! host stylesheet.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Custom-property prefix used when none is configured.
pub const DEFAULT_TOKEN_PREFIX: &str = "gap-size";

/// A value on the gap scale, `0..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct GapSize(u8);

/// Error returned when a number falls outside the gap scale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("gap size {0} is out of range (0-{max})", max = GapSize::MAX.0)]
pub struct GapSizeError(pub i64);

impl GapSize {
    /// The "no gap" sentinel.
    pub const ZERO: GapSize = GapSize(0);
    /// Largest size on the scale.
    pub const MAX: GapSize = GapSize(6);

    /// Returns the size if `value` is on the scale.
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX.0).then_some(GapSize(value))
    }

    /// Returns the raw scale value.
    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<i64> for GapSize {
    type Error = GapSizeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(GapSize::new)
            .ok_or(GapSizeError(value))
    }
}

impl fmt::Display for GapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Names the custom properties that gap sizes render to.
///
/// Hosts whose design tokens use a different namespace can load a scheme
/// from their configuration:
///
/// ```rust
/// use flexstyle::TokenScheme;
///
/// let scheme: TokenScheme = serde_yaml::from_str("prefix: spacing").unwrap();
/// assert_eq!(scheme.prefix(), "spacing");
///
/// let defaulted: TokenScheme = serde_yaml::from_str("{}").unwrap();
/// assert_eq!(defaulted, TokenScheme::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenScheme {
    prefix: String,
}

impl Default for TokenScheme {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_TOKEN_PREFIX.to_string(),
        }
    }
}

impl TokenScheme {
    /// Creates the default scheme (`var(--gap-size-<n>)`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the custom-property prefix, without the leading `--`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = prefix.trim_start_matches('-').to_string();
        self
    }

    /// Returns the custom-property prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Renders a size as a CSS value.
    pub fn token(&self, size: GapSize) -> String {
        if size.is_zero() {
            "0".to_string()
        } else {
            format!("var(--{}-{})", self.prefix, size.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_bounds() {
        assert_eq!(GapSize::new(0), Some(GapSize::ZERO));
        assert_eq!(GapSize::new(6), Some(GapSize::MAX));
        assert_eq!(GapSize::new(7), None);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(GapSize::try_from(4).map(GapSize::get), Ok(4));
        assert_eq!(GapSize::try_from(-1), Err(GapSizeError(-1)));
        assert_eq!(GapSize::try_from(300), Err(GapSizeError(300)));
        assert_eq!(
            GapSizeError(9).to_string(),
            "gap size 9 is out of range (0-6)"
        );
    }

    #[test]
    fn test_default_tokens() {
        let scheme = TokenScheme::default();
        assert_eq!(scheme.token(GapSize::ZERO), "0");
        for n in 1..=6 {
            let size = GapSize::new(n).unwrap();
            assert_eq!(scheme.token(size), format!("var(--gap-size-{})", n));
        }
    }

    #[test]
    fn test_prefix_strips_leading_dashes() {
        let scheme = TokenScheme::new().with_prefix("--space");
        assert_eq!(scheme.prefix(), "space");
        assert_eq!(scheme.token(GapSize::new(1).unwrap()), "var(--space-1)");
    }

    #[test]
    fn test_zero_ignores_prefix() {
        let scheme = TokenScheme::new().with_prefix("space");
        assert_eq!(scheme.token(GapSize::ZERO), "0");
    }
}
