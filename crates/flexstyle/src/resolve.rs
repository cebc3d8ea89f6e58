//! Per-breakpoint CSS declaration resolution.
//!
//! [`resolve`] computes the declarations a container needs at exactly one
//! tier. Values are not inherited from smaller tiers here: the caller places
//! each tier's block in a rule guarded by that tier's media query and lets
//! the cascade carry lower-tier values upward.
//!
//! Declarations always appear in this order, and unset fields contribute
//! nothing:
//!
//! 1. `display: flex;` (at `sm` only)
//! 2. `flex-direction`
//! 3. `align-items`
//! 4. `justify-content`
//! 5. `flex-grow` followed by `flex-basis: 0;`
//! 6. `gap`
//! 7. spacing (`padding-*` or `margin-*`)

use crate::breakpoint::{Breakpoint, BreakpointMap};
use crate::declaration::{parse_declarations, Declaration};
use crate::error::DeclarationError;
use crate::normalize::normalize;
use crate::props::{FlexProps, Spacing};
use crate::spacing::spacing_declarations_with;
use crate::token::TokenScheme;

/// Resolves the declarations for `tier` with the default token scheme.
///
/// `props` is expected to be normalized. Un-normalized scalars still resolve
/// at `sm`, but un-normalized spacing is skipped at every tier.
///
/// ```rust
/// use flexstyle::{normalize, resolve, Breakpoint, FlexProps, GapSize};
///
/// let props = normalize(&FlexProps::new().direction("row").gap(GapSize::new(2).unwrap()));
/// assert_eq!(
///     resolve(Breakpoint::Sm, &props),
///     "display: flex;\nflex-direction: row;\ngap: var(--gap-size-2);"
/// );
/// assert_eq!(resolve(Breakpoint::Md, &props), "");
/// ```
pub fn resolve(tier: Breakpoint, props: &FlexProps) -> String {
    resolve_with(tier, props, &TokenScheme::default())
}

/// Resolves the declarations for `tier` with a custom token scheme.
pub fn resolve_with(tier: Breakpoint, props: &FlexProps, scheme: &TokenScheme) -> String {
    let mut declarations = Vec::new();

    if tier == Breakpoint::Sm {
        declarations.push("display: flex;".to_string());
    }

    if let Some(direction) = props.direction.as_ref().and_then(|d| d.at(tier)) {
        declarations.push(format!("flex-direction: {};", direction));
    }
    if let Some(align) = props.align_items.as_ref().and_then(|a| a.at(tier)) {
        declarations.push(format!("align-items: {};", align));
    }
    if let Some(justify) = props.justify_content.as_ref().and_then(|j| j.at(tier)) {
        declarations.push(format!("justify-content: {};", justify));
    }
    if let Some(grow) = props.grow.as_ref().and_then(|g| g.at(tier)) {
        declarations.push(format!("flex-grow: {};", grow));
        declarations.push("flex-basis: 0;".to_string());
    }
    if let Some(gap) = props.gap.as_ref().and_then(|g| g.at(tier)) {
        declarations.push(format!("gap: {};", scheme.token(*gap)));
    }

    let spacing = match &props.spacing {
        Some(Spacing::PerBreakpoint(map)) => {
            spacing_declarations_with(props.kind, map.get(tier), scheme)
        }
        Some(_) => {
            log::trace!("skipping spacing at {}: props are not normalized", tier);
            String::new()
        }
        None => String::new(),
    };
    if !spacing.is_empty() {
        declarations.push(spacing);
    }

    declarations.join("\n")
}

/// Declaration blocks for all three tiers of one prop record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyles {
    tiers: BreakpointMap<String>,
}

impl ResolvedStyles {
    /// Returns the declaration block for `tier`. Empty if nothing applies.
    pub fn get(&self, tier: Breakpoint) -> &str {
        self.tiers.get(tier).map(String::as_str).unwrap_or_default()
    }

    /// Iterates over the tiers with a non-empty block, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &str)> {
        self.tiers
            .iter()
            .map(|(tier, css)| (tier, css.as_str()))
            .filter(|(_, css)| !css.is_empty())
    }

    /// Parses the block for `tier` into property/value pairs.
    pub fn declarations(&self, tier: Breakpoint) -> Result<Vec<Declaration>, DeclarationError> {
        parse_declarations(self.get(tier))
    }
}

/// Normalizes `props` once and resolves every tier with the default scheme.
pub fn resolve_all(props: &FlexProps) -> ResolvedStyles {
    resolve_all_with(props, &TokenScheme::default())
}

/// Normalizes `props` once and resolves every tier with a custom scheme.
pub fn resolve_all_with(props: &FlexProps, scheme: &TokenScheme) -> ResolvedStyles {
    let normalized = normalize(props);
    let tiers = Breakpoint::ALL
        .into_iter()
        .map(|tier| (tier, resolve_with(tier, &normalized, scheme)))
        .collect();
    ResolvedStyles { tiers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spacing::{SpacingDefinition, SpacingKind};
    use crate::token::GapSize;

    fn size(n: u8) -> GapSize {
        GapSize::new(n).unwrap()
    }

    #[test]
    fn test_empty_props() {
        let props = FlexProps::new();
        assert_eq!(resolve(Breakpoint::Sm, &props), "display: flex;");
        assert_eq!(resolve(Breakpoint::Md, &props), "");
        assert_eq!(resolve(Breakpoint::Lg, &props), "");
    }

    #[test]
    fn test_full_order_at_sm() {
        let props = normalize(
            &FlexProps::new()
                .spacing(Spacing::Size(size(1)))
                .gap(size(3))
                .grow(2.0)
                .justify_content("center")
                .align_items("stretch")
                .direction("column"),
        );
        assert_eq!(
            resolve(Breakpoint::Sm, &props),
            "display: flex;\n\
             flex-direction: column;\n\
             align-items: stretch;\n\
             justify-content: center;\n\
             flex-grow: 2;\n\
             flex-basis: 0;\n\
             gap: var(--gap-size-3);\n\
             padding-top: var(--gap-size-1);\n\
             padding-right: var(--gap-size-1);\n\
             padding-bottom: var(--gap-size-1);\n\
             padding-left: var(--gap-size-1);"
        );
    }

    #[test]
    fn test_no_inheritance_between_tiers() {
        let props = normalize(
            &FlexProps::new()
                .direction("column")
                .direction_at(Breakpoint::Lg, "row"),
        );
        assert_eq!(resolve(Breakpoint::Md, &props), "");
        assert_eq!(resolve(Breakpoint::Lg, &props), "flex-direction: row;");
    }

    #[test]
    fn test_alignment_scalar_only_at_sm() {
        let props = normalize(&FlexProps::new().align_items("center"));
        assert!(resolve(Breakpoint::Sm, &props).contains("align-items: center;"));
        assert!(!resolve(Breakpoint::Md, &props).contains("align-items"));
    }

    #[test]
    fn test_grow_zero_still_pairs_with_basis() {
        let props = normalize(&FlexProps::new().grow_at(Breakpoint::Md, 0.0));
        assert_eq!(
            resolve(Breakpoint::Md, &props),
            "flex-grow: 0;\nflex-basis: 0;"
        );
    }

    #[test]
    fn test_gap_zero_is_literal() {
        let props = normalize(&FlexProps::new().gap(GapSize::ZERO));
        assert_eq!(resolve(Breakpoint::Sm, &props), "display: flex;\ngap: 0;");
    }

    #[test]
    fn test_unnormalized_scalar_resolves_at_sm_only() {
        let props = FlexProps::new().direction("row");
        assert!(resolve(Breakpoint::Sm, &props).contains("flex-direction: row;"));
        assert_eq!(resolve(Breakpoint::Lg, &props), "");
    }

    #[test]
    fn test_unnormalized_spacing_is_skipped() {
        let props = FlexProps::new().spacing(Spacing::Size(size(2)));
        assert_eq!(resolve(Breakpoint::Sm, &props), "display: flex;");
        let props = FlexProps::new().spacing(Spacing::Definition(SpacingDefinition::all(size(2))));
        assert_eq!(resolve(Breakpoint::Sm, &props), "display: flex;");
    }

    #[test]
    fn test_margin_kind() {
        let props = normalize(
            &FlexProps::new()
                .kind(SpacingKind::Margin)
                .spacing_at(
                    Breakpoint::Lg,
                    SpacingDefinition {
                        bottom: Some(size(6)),
                        ..SpacingDefinition::default()
                    },
                ),
        );
        assert_eq!(
            resolve(Breakpoint::Lg, &props),
            "margin-bottom: var(--gap-size-6);"
        );
    }

    #[test]
    fn test_custom_scheme() {
        let props = normalize(&FlexProps::new().gap(size(5)));
        let scheme = TokenScheme::new().with_prefix("space");
        assert_eq!(
            resolve_with(Breakpoint::Sm, &props, &scheme),
            "display: flex;\ngap: var(--space-5);"
        );
    }

    #[test]
    fn test_resolve_all() {
        let styles = resolve_all(
            &FlexProps::new()
                .gap(size(1))
                .gap_at(Breakpoint::Lg, size(4)),
        );
        assert_eq!(styles.get(Breakpoint::Sm), "display: flex;\ngap: var(--gap-size-1);");
        assert_eq!(styles.get(Breakpoint::Md), "");
        assert_eq!(styles.get(Breakpoint::Lg), "gap: var(--gap-size-4);");

        let tiers: Vec<_> = styles.iter().map(|(tier, _)| tier).collect();
        assert_eq!(tiers, vec![Breakpoint::Sm, Breakpoint::Lg]);
    }

    #[test]
    fn test_resolved_styles_compare() {
        fn assert_eq_bound<T: Eq>(_: &T) {}

        let props = FlexProps::new().direction("row").gap(size(2));
        let styles = resolve_all(&props);
        assert_eq_bound(&styles);
        assert_eq!(styles, resolve_all(&normalize(&props)));
        assert_ne!(styles, resolve_all(&props.clone().gap(size(3))));
    }

    #[test]
    fn test_resolved_declarations() {
        let styles = resolve_all(&FlexProps::new().grow(1.5));
        let declarations = styles.declarations(Breakpoint::Sm).unwrap();
        let pairs: Vec<_> = declarations
            .iter()
            .map(|d| (d.property.as_str(), d.value.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("display", "flex"), ("flex-grow", "1.5"), ("flex-basis", "0")]
        );
    }
}
