//! Rewriting props into the canonical per-breakpoint form.
//!
//! After [`normalize`], `gap`, `direction`, `grow` and `spacing` are either
//! absent or per-breakpoint maps:
//!
//! | Input | Output |
//! |-------|--------|
//! | scalar `v` | `{sm: v}` |
//! | spacing size `n` | `{sm: {all: n}}` |
//! | spacing definition `d` | `{sm: d}` |
//! | per-breakpoint map | unchanged |
//!
//! `alignItems` and `justifyContent` are copied as they are, so a bare value
//! for either still only applies at `sm`.

use crate::props::{FlexProps, Spacing};
use crate::responsive::ResponsiveValue;

/// Returns a normalized copy of `raw`. The input is not modified.
///
/// Normalizing twice is the same as normalizing once.
///
/// ```rust
/// use flexstyle::{normalize, Breakpoint, FlexProps, GapSize};
///
/// let props = normalize(&FlexProps::new().gap(GapSize::new(2).unwrap()));
/// let gap = props.gap.unwrap();
/// assert!(gap.is_per_breakpoint());
/// assert_eq!(gap.at(Breakpoint::Sm), GapSize::new(2).as_ref());
/// ```
pub fn normalize(raw: &FlexProps) -> FlexProps {
    FlexProps {
        gap: raw.gap.clone().map(per_breakpoint),
        direction: raw.direction.clone().map(per_breakpoint),
        grow: raw.grow.clone().map(per_breakpoint),
        spacing: raw
            .spacing
            .clone()
            .map(|spacing| Spacing::PerBreakpoint(spacing.into_per_breakpoint())),
        align_items: raw.align_items.clone(),
        justify_content: raw.justify_content.clone(),
        kind: raw.kind,
    }
}

fn per_breakpoint<T>(value: ResponsiveValue<T>) -> ResponsiveValue<T> {
    ResponsiveValue::PerBreakpoint(value.into_per_breakpoint())
}
