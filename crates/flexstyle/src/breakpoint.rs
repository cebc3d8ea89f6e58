//! Breakpoint tiers and per-tier value tables.
//!
//! There are exactly three tiers, ordered from smallest to largest viewport:
//!
//! | Tier | Media query guard |
//! |------|-------------------|
//! | `sm` | none (baseline rule) |
//! | `md` | `(min-width: 980px)` |
//! | `lg` | `(min-width: 1280px)` |
//!
//! A [`BreakpointMap`] holds an optional value for each tier. Keys that are
//! absent mean "no override at this tier"; nothing is inherited from smaller
//! tiers when reading a map; inheritance is left to the CSS cascade.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum viewport width, in CSS pixels, at which the `md` tier applies.
pub const MD_MIN_WIDTH: u32 = 980;

/// Minimum viewport width, in CSS pixels, at which the `lg` tier applies.
pub const LG_MIN_WIDTH: u32 = 1280;

/// One of the three responsive tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Baseline tier. Its declarations form the default rule.
    Sm,
    /// Medium viewports, `min-width: 980px`.
    Md,
    /// Large viewports, `min-width: 1280px`.
    Lg,
}

impl Breakpoint {
    /// All tiers in ascending order.
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Sm, Breakpoint::Md, Breakpoint::Lg];

    /// Returns the key used for this tier in prop bags (`"sm"`, `"md"`, `"lg"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
        }
    }

    /// Returns the lower width threshold of this tier, or `None` for the
    /// baseline tier.
    pub fn min_width(self) -> Option<u32> {
        match self {
            Breakpoint::Sm => None,
            Breakpoint::Md => Some(MD_MIN_WIDTH),
            Breakpoint::Lg => Some(LG_MIN_WIDTH),
        }
    }

    /// Returns the `@media` prelude guarding this tier.
    ///
    /// ```rust
    /// use flexstyle::Breakpoint;
    ///
    /// assert_eq!(Breakpoint::Sm.media_query(), None);
    /// assert_eq!(
    ///     Breakpoint::Md.media_query().as_deref(),
    ///     Some("@media (min-width: 980px)")
    /// );
    /// ```
    pub fn media_query(self) -> Option<String> {
        self.min_width()
            .map(|width| format!("@media (min-width: {}px)", width))
    }

    /// Returns true if `key` names one of the tiers.
    pub fn is_key(key: &str) -> bool {
        key.parse::<Breakpoint>().is_ok()
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a breakpoint tier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown breakpoint '{0}' (expected sm, md or lg)")]
pub struct BreakpointParseError(pub String);

impl FromStr for Breakpoint {
    type Err = BreakpointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(Breakpoint::Sm),
            "md" => Ok(Breakpoint::Md),
            "lg" => Ok(Breakpoint::Lg),
            other => Err(BreakpointParseError(other.to_string())),
        }
    }
}

/// A table of optional per-tier values.
///
/// Serializes as a mapping containing only the tiers that are set, so
/// `BreakpointMap::sm(3)` becomes `{"sm": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakpointMap<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    sm: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    md: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lg: Option<T>,
}

impl<T> Default for BreakpointMap<T> {
    fn default() -> Self {
        Self {
            sm: None,
            md: None,
            lg: None,
        }
    }
}

impl<T> BreakpointMap<T> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map with a single baseline entry.
    pub fn sm(value: T) -> Self {
        Self::new().with(Breakpoint::Sm, value)
    }

    /// Sets the value for `tier`, returning `self` for chaining.
    pub fn with(mut self, tier: Breakpoint, value: T) -> Self {
        self.insert(tier, value);
        self
    }

    /// Sets the value for `tier`, returning the previous value if any.
    pub fn insert(&mut self, tier: Breakpoint, value: T) -> Option<T> {
        self.slot_mut(tier).replace(value)
    }

    /// Returns the value set for exactly this tier.
    pub fn get(&self, tier: Breakpoint) -> Option<&T> {
        match tier {
            Breakpoint::Sm => self.sm.as_ref(),
            Breakpoint::Md => self.md.as_ref(),
            Breakpoint::Lg => self.lg.as_ref(),
        }
    }

    /// Returns true if no tier has a value.
    pub fn is_empty(&self) -> bool {
        self.sm.is_none() && self.md.is_none() && self.lg.is_none()
    }

    /// Iterates over the tiers that have a value, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        Breakpoint::ALL
            .into_iter()
            .filter_map(move |tier| self.get(tier).map(|value| (tier, value)))
    }

    fn slot_mut(&mut self, tier: Breakpoint) -> &mut Option<T> {
        match tier {
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
        }
    }
}

impl<T> FromIterator<(Breakpoint, T)> for BreakpointMap<T> {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, T)>>(iter: I) -> Self {
        let mut map = BreakpointMap::new();
        for (tier, value) in iter {
            map.insert(tier, value);
        }
        map
    }
}
