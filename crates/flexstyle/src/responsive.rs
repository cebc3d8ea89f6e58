//! Values that may vary per breakpoint.

use serde::Serialize;

use crate::breakpoint::{Breakpoint, BreakpointMap};

/// A prop value given either once or per breakpoint tier.
///
/// A bare [`Scalar`](ResponsiveValue::Scalar) only applies at the baseline
/// tier. Normalization rewrites it to a single-entry
/// [`PerBreakpoint`](ResponsiveValue::PerBreakpoint) map so that every
/// consumer can treat the two shapes uniformly.
///
/// Serializes to the prop-bag shape: the bare value, or a `{sm, md, lg}`
/// mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    /// A single value for the baseline tier.
    Scalar(T),
    /// Explicit per-tier overrides.
    PerBreakpoint(BreakpointMap<T>),
}

impl<T> ResponsiveValue<T> {
    /// Returns the value set for exactly `tier`.
    ///
    /// A scalar counts as set only at [`Breakpoint::Sm`]. Lower tiers are
    /// never consulted for a missing map entry.
    pub fn at(&self, tier: Breakpoint) -> Option<&T> {
        match self {
            ResponsiveValue::Scalar(value) => (tier == Breakpoint::Sm).then_some(value),
            ResponsiveValue::PerBreakpoint(map) => map.get(tier),
        }
    }

    /// Returns true for the per-breakpoint shape.
    pub fn is_per_breakpoint(&self) -> bool {
        matches!(self, ResponsiveValue::PerBreakpoint(_))
    }

    /// Converts to the per-breakpoint shape, wrapping a scalar as `{sm: value}`.
    pub fn into_per_breakpoint(self) -> BreakpointMap<T> {
        match self {
            ResponsiveValue::Scalar(value) => BreakpointMap::sm(value),
            ResponsiveValue::PerBreakpoint(map) => map,
        }
    }
}

impl<T> From<BreakpointMap<T>> for ResponsiveValue<T> {
    fn from(map: BreakpointMap<T>) -> Self {
        ResponsiveValue::PerBreakpoint(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_only_applies_at_sm() {
        let value = ResponsiveValue::Scalar("row");
        assert_eq!(value.at(Breakpoint::Sm), Some(&"row"));
        assert_eq!(value.at(Breakpoint::Md), None);
        assert_eq!(value.at(Breakpoint::Lg), None);
    }

    #[test]
    fn test_map_lookup_is_exact() {
        let value: ResponsiveValue<&str> = BreakpointMap::new()
            .with(Breakpoint::Md, "row")
            .into();
        assert_eq!(value.at(Breakpoint::Sm), None);
        assert_eq!(value.at(Breakpoint::Md), Some(&"row"));
        assert_eq!(value.at(Breakpoint::Lg), None);
    }

    #[test]
    fn test_into_per_breakpoint() {
        assert_eq!(
            ResponsiveValue::Scalar(2).into_per_breakpoint(),
            BreakpointMap::sm(2)
        );
        let map = BreakpointMap::new().with(Breakpoint::Lg, 1);
        assert_eq!(
            ResponsiveValue::PerBreakpoint(map.clone()).into_per_breakpoint(),
            map
        );
    }

    #[test]
    fn test_serializes_to_prop_shape() {
        assert_eq!(
            serde_json::to_value(ResponsiveValue::Scalar("row")).unwrap(),
            serde_json::json!("row")
        );
        let mapped: ResponsiveValue<&str> = BreakpointMap::sm("row").into();
        assert_eq!(
            serde_json::to_value(mapped).unwrap(),
            serde_json::json!({ "sm": "row" })
        );
    }
}
