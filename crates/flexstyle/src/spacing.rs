//! Box spacing definitions and their padding/margin declarations.
//!
//! A [`SpacingDefinition`] can set a size for every side at once (`all`), per
//! axis (`horizontal`, `vertical`) or per side. Each side resolves
//! independently with a strict priority:
//!
//! ```text
//! side  >  axis  >  all  >  unset
//! ```
//!
//! A side that resolves to nothing emits no declaration at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::token::{GapSize, TokenScheme};

/// Which box property spacing declarations target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingKind {
    /// `padding-*` declarations.
    #[default]
    Padding,
    /// `margin-*` declarations.
    Margin,
}

impl SpacingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpacingKind::Padding => "padding",
            SpacingKind::Margin => "margin",
        }
    }
}

impl fmt::Display for SpacingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `padding` nor `margin`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown spacing type '{0}' (expected padding or margin)")]
pub struct SpacingKindParseError(pub String);

impl FromStr for SpacingKind {
    type Err = SpacingKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "padding" => Ok(SpacingKind::Padding),
            "margin" => Ok(SpacingKind::Margin),
            other => Err(SpacingKindParseError(other.to_string())),
        }
    }
}

/// One side of the box, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Sides in the order their declarations are emitted.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

/// Spacing sizes for one box, with side/axis/all overrides.
///
/// Every field is optional. Serializes with unset fields omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SpacingDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<GapSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<GapSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<GapSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<GapSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<GapSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<GapSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<GapSize>,
}

impl SpacingDefinition {
    /// Field names accepted in prop bags.
    pub const KEYS: [&'static str; 7] = [
        "all",
        "horizontal",
        "vertical",
        "top",
        "right",
        "bottom",
        "left",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// A definition applying `size` to every side.
    pub fn all(size: GapSize) -> Self {
        Self {
            all: Some(size),
            ..Self::default()
        }
    }

    /// Sets the field named `key`. Returns false if `key` is not a spacing field.
    pub fn set(&mut self, key: &str, size: GapSize) -> bool {
        let slot = match key {
            "all" => &mut self.all,
            "horizontal" => &mut self.horizontal,
            "vertical" => &mut self.vertical,
            "top" => &mut self.top,
            "right" => &mut self.right,
            "bottom" => &mut self.bottom,
            "left" => &mut self.left,
            _ => return false,
        };
        *slot = Some(size);
        true
    }

    /// Resolves the size effective for one side.
    pub fn side(&self, side: Side) -> Option<GapSize> {
        let (explicit, axis) = match side {
            Side::Top => (self.top, self.vertical),
            Side::Right => (self.right, self.horizontal),
            Side::Bottom => (self.bottom, self.vertical),
            Side::Left => (self.left, self.horizontal),
        };
        explicit.or(axis).or(self.all)
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Renders the spacing declarations for `def` with the default token scheme.
///
/// Returns an empty string when `def` is `None` or resolves no side.
///
/// ```rust
/// use flexstyle::{spacing_declarations, GapSize, SpacingDefinition, SpacingKind};
///
/// let def = SpacingDefinition {
///     all: GapSize::new(1),
///     horizontal: GapSize::new(2),
///     top: GapSize::new(3),
///     ..SpacingDefinition::default()
/// };
/// assert_eq!(
///     spacing_declarations(SpacingKind::Padding, Some(&def)),
///     "padding-top: var(--gap-size-3);\n\
///      padding-right: var(--gap-size-2);\n\
///      padding-bottom: var(--gap-size-1);\n\
///      padding-left: var(--gap-size-2);"
/// );
/// ```
pub fn spacing_declarations(kind: SpacingKind, def: Option<&SpacingDefinition>) -> String {
    spacing_declarations_with(kind, def, &TokenScheme::default())
}

/// Renders the spacing declarations for `def` with a custom token scheme.
pub fn spacing_declarations_with(
    kind: SpacingKind,
    def: Option<&SpacingDefinition>,
    scheme: &TokenScheme,
) -> String {
    let Some(def) = def else {
        return String::new();
    };

    Side::ALL
        .iter()
        .filter_map(|&side| {
            def.side(side).map(|size| {
                format!("{}-{}: {};", kind.as_str(), side.as_str(), scheme.token(size))
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}
