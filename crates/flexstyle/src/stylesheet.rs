//! Wrapping resolved declarations into rules.
//!
//! The resolver deliberately emits bare declaration blocks. Hosts that inject
//! styles as text can use [`stylesheet`] to get the full fragment: the `sm`
//! block as the base rule, and the `md`/`lg` blocks each inside the media
//! query for their tier.
//!
//! ```rust
//! use flexstyle::{stylesheet, Breakpoint, FlexProps};
//!
//! let props = FlexProps::new()
//!     .direction("column")
//!     .direction_at(Breakpoint::Md, "row");
//!
//! assert_eq!(
//!     stylesheet(".toolbar", &props),
//!     ".toolbar {\n  display: flex;\n  flex-direction: column;\n}\n\
//!      @media (min-width: 980px) {\n  .toolbar {\n    flex-direction: row;\n  }\n}"
//! );
//! ```

use crate::breakpoint::Breakpoint;
use crate::props::FlexProps;
use crate::resolve::{resolve_all_with, ResolvedStyles};
use crate::token::TokenScheme;

const INDENT: &str = "  ";

/// Builds the stylesheet fragment for `selector` with the default token scheme.
///
/// `props` may be raw; it is normalized once before resolving.
pub fn stylesheet(selector: &str, props: &FlexProps) -> String {
    stylesheet_with(selector, props, &TokenScheme::default())
}

/// Builds the stylesheet fragment for `selector` with a custom token scheme.
pub fn stylesheet_with(selector: &str, props: &FlexProps, scheme: &TokenScheme) -> String {
    render_rules(selector.trim(), &resolve_all_with(props, scheme))
}

/// Renders already-resolved blocks. Tiers with an empty block are omitted.
pub fn render_rules(selector: &str, styles: &ResolvedStyles) -> String {
    styles
        .iter()
        .map(|(tier, css)| rule(selector, tier, css))
        .collect::<Vec<_>>()
        .join("\n")
}

fn rule(selector: &str, tier: Breakpoint, css: &str) -> String {
    match tier.media_query() {
        None => block(selector, css, 0),
        Some(query) => format!("{} {{\n{}\n}}", query, block(selector, css, 1)),
    }
}

fn block(selector: &str, css: &str, depth: usize) -> String {
    let outer = INDENT.repeat(depth);
    let inner = INDENT.repeat(depth + 1);
    let body = css
        .lines()
        .map(|line| format!("{}{}", inner, line))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{outer}{selector} {{\n{body}\n{outer}}}")
}
