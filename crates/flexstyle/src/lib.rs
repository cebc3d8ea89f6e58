//! # flexstyle - Responsive Flex Container Styles
//!
//! `flexstyle` turns the props of a responsive flex container into plain CSS
//! declarations, one block per breakpoint tier. It is the style core behind a
//! layout primitive: the host component owns mounting and style injection,
//! and calls into this crate with a prop bag.
//!
//! ## Core Concepts
//!
//! - [`Breakpoint`]: the three fixed tiers `sm` (baseline), `md` (>= 980px)
//!   and `lg` (>= 1280px)
//! - [`ResponsiveValue`]: a prop given once, or per tier via a [`BreakpointMap`]
//! - [`GapSize`]: the `0..=6` spacing scale, rendered through a [`TokenScheme`]
//! - [`SpacingDefinition`]: side/axis/all spacing with side > axis > all priority
//! - [`FlexProps`]: the full prop record
//!
//! ## Pipeline
//!
//! 1. [`normalize`] rewrites every responsive field into its per-breakpoint form
//! 2. [`resolve`] emits the declarations effective at exactly one tier
//!
//! ```rust
//! use flexstyle::{normalize, resolve, Breakpoint, FlexProps};
//!
//! let props = FlexProps::from_json_str(r#"{
//!     "direction": { "sm": "column", "md": "row" },
//!     "spacing": { "md": { "horizontal": 2 } }
//! }"#).unwrap();
//!
//! let props = normalize(&props);
//! assert_eq!(
//!     resolve(Breakpoint::Md, &props),
//!     "flex-direction: row;\n\
//!      padding-right: var(--gap-size-2);\n\
//!      padding-left: var(--gap-size-2);"
//! );
//! ```
//!
//! Each tier's block is meant for a rule guarded by that tier's media query;
//! values set at smaller tiers reach larger ones through the cascade. Use
//! [`stylesheet`] to get the wrapped rules directly.
//!
//! ## Reading Props
//!
//! [`FlexProps::from_value`] reads a `serde_yaml::Value` prop bag (JSON and
//! YAML text have their own helpers). It is lenient: fields it cannot read
//! are dropped. The `_strict` variants report a [`PropsError`] instead.
//!
//! ## Errors
//!
//! Normalization and resolution never fail. Only reading text prop bags,
//! strict reading and [`parse_declarations`] return errors.

mod breakpoint;
mod declaration;
mod error;
mod normalize;
mod props;
mod reader;
mod resolve;
mod responsive;
mod spacing;
mod stylesheet;
mod token;

pub use breakpoint::{
    Breakpoint, BreakpointMap, BreakpointParseError, LG_MIN_WIDTH, MD_MIN_WIDTH,
};
pub use declaration::{parse_declarations, Declaration};
pub use error::{DeclarationError, PropsError, Result};
pub use normalize::normalize;
pub use props::{FlexProps, Spacing};
pub use resolve::{resolve, resolve_all, resolve_all_with, resolve_with, ResolvedStyles};
pub use responsive::ResponsiveValue;
pub use spacing::{
    spacing_declarations, spacing_declarations_with, Side, SpacingDefinition, SpacingKind,
    SpacingKindParseError,
};
pub use stylesheet::{render_rules, stylesheet, stylesheet_with};
pub use token::{GapSize, GapSizeError, TokenScheme, DEFAULT_TOKEN_PREFIX};
