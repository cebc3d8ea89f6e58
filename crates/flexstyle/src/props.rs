//! The flex container prop record.
//!
//! [`FlexProps`] mirrors the prop bag a host component receives. Fields that
//! accept per-breakpoint overrides hold a [`ResponsiveValue`]; `spacing` has
//! its own [`Spacing`] enum because it accepts one extra shape (a bare size).
//!
//! Records can be built in code:
//!
//! ```rust
//! use flexstyle::{Breakpoint, FlexProps, GapSize, SpacingKind};
//!
//! let props = FlexProps::new()
//!     .direction("column")
//!     .direction_at(Breakpoint::Md, "row")
//!     .gap(GapSize::new(2).unwrap())
//!     .kind(SpacingKind::Margin);
//! ```
//!
//! or read from a prop bag with [`FlexProps::from_value`] and friends (see
//! the `reader` module).

use serde::Serialize;

use crate::breakpoint::{Breakpoint, BreakpointMap};
use crate::responsive::ResponsiveValue;
use crate::spacing::{SpacingDefinition, SpacingKind};
use crate::token::GapSize;

/// The raw shapes accepted for the `spacing` prop.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Spacing {
    /// A bare size, shorthand for `{all: size}` at the baseline tier.
    Size(GapSize),
    /// A single definition for the baseline tier.
    Definition(SpacingDefinition),
    /// Explicit per-tier definitions.
    PerBreakpoint(BreakpointMap<SpacingDefinition>),
}

impl Spacing {
    /// Returns the definition for `tier`.
    ///
    /// Only the per-breakpoint shape answers; bare sizes and definitions
    /// answer `None` at every tier until they are normalized.
    pub fn at(&self, tier: Breakpoint) -> Option<&SpacingDefinition> {
        match self {
            Spacing::PerBreakpoint(map) => map.get(tier),
            Spacing::Size(_) | Spacing::Definition(_) => None,
        }
    }

    pub fn is_per_breakpoint(&self) -> bool {
        matches!(self, Spacing::PerBreakpoint(_))
    }

    /// Converts to the per-breakpoint shape.
    pub fn into_per_breakpoint(self) -> BreakpointMap<SpacingDefinition> {
        match self {
            Spacing::Size(size) => BreakpointMap::sm(SpacingDefinition::all(size)),
            Spacing::Definition(def) => BreakpointMap::sm(def),
            Spacing::PerBreakpoint(map) => map,
        }
    }
}

/// Props of a responsive flex container.
///
/// Serializes to the camelCase prop-bag shape with unset fields omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<ResponsiveValue<GapSize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<ResponsiveValue<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grow: Option<ResponsiveValue<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    /// Not rewritten by normalization, so a scalar only ever applies at `sm`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<ResponsiveValue<String>>,
    /// Not rewritten by normalization, so a scalar only ever applies at `sm`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<ResponsiveValue<String>>,
    /// Selects padding or margin for spacing declarations.
    #[serde(rename = "type")]
    pub kind: SpacingKind,
}

impl FlexProps {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gap(mut self, size: GapSize) -> Self {
        self.gap = Some(ResponsiveValue::Scalar(size));
        self
    }

    pub fn gap_at(mut self, tier: Breakpoint, size: GapSize) -> Self {
        self.gap = Some(insert_at(self.gap.take(), tier, size));
        self
    }

    pub fn direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(ResponsiveValue::Scalar(direction.into()));
        self
    }

    pub fn direction_at(mut self, tier: Breakpoint, direction: impl Into<String>) -> Self {
        self.direction = Some(insert_at(self.direction.take(), tier, direction.into()));
        self
    }

    pub fn grow(mut self, grow: f64) -> Self {
        self.grow = Some(ResponsiveValue::Scalar(grow));
        self
    }

    pub fn grow_at(mut self, tier: Breakpoint, grow: f64) -> Self {
        self.grow = Some(insert_at(self.grow.take(), tier, grow));
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Sets the spacing definition for one tier, converting any bare spacing
    /// already present to the per-breakpoint shape first.
    pub fn spacing_at(mut self, tier: Breakpoint, def: SpacingDefinition) -> Self {
        let mut map = self
            .spacing
            .take()
            .map(Spacing::into_per_breakpoint)
            .unwrap_or_default();
        map.insert(tier, def);
        self.spacing = Some(Spacing::PerBreakpoint(map));
        self
    }

    pub fn align_items(mut self, align: impl Into<String>) -> Self {
        self.align_items = Some(ResponsiveValue::Scalar(align.into()));
        self
    }

    pub fn justify_content(mut self, justify: impl Into<String>) -> Self {
        self.justify_content = Some(ResponsiveValue::Scalar(justify.into()));
        self
    }

    pub fn kind(mut self, kind: SpacingKind) -> Self {
        self.kind = kind;
        self
    }
}

fn insert_at<T>(
    current: Option<ResponsiveValue<T>>,
    tier: Breakpoint,
    value: T,
) -> ResponsiveValue<T> {
    let mut map = current
        .map(ResponsiveValue::into_per_breakpoint)
        .unwrap_or_default();
    map.insert(tier, value);
    ResponsiveValue::PerBreakpoint(map)
}
