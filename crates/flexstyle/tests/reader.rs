//! Reading host prop bags and configuration from text.

use flexstyle::{
    resolve_all, resolve_all_with, Breakpoint, FlexProps, PropsError, SpacingKind, TokenScheme,
};

const HOST_PROPS: &str = r#"{
    "className": "sidebar",
    "children": ["a", "b"],
    "onClick": null,
    "direction": { "sm": "column", "md": "row" },
    "gap": 2,
    "type": "margin",
    "spacing": { "lg": { "all": 1, "top": 0 } }
}"#;

#[test]
fn host_props_are_ignored() {
    let props = FlexProps::from_json_str_strict(HOST_PROPS).unwrap();
    assert_eq!(props.kind, SpacingKind::Margin);

    let styles = resolve_all(&props);
    assert_eq!(
        styles.get(Breakpoint::Sm),
        "display: flex;\nflex-direction: column;\ngap: var(--gap-size-2);"
    );
    assert_eq!(styles.get(Breakpoint::Md), "flex-direction: row;");
    assert_eq!(
        styles.get(Breakpoint::Lg),
        "margin-top: 0;\n\
         margin-right: var(--gap-size-1);\n\
         margin-bottom: var(--gap-size-1);\n\
         margin-left: var(--gap-size-1);"
    );
}

#[test]
fn json_and_yaml_agree() {
    let yaml = r#"
className: sidebar
direction: { sm: column, md: row }
gap: 2
type: margin
spacing:
  lg: { all: 1, top: 0 }
"#;
    assert_eq!(
        FlexProps::from_yaml_str(yaml).unwrap(),
        FlexProps::from_json_str(HOST_PROPS).unwrap()
    );
}

#[test]
fn lenient_reading_keeps_what_it_can() {
    let props = FlexProps::from_json_str(
        r#"{ "gap": -1, "grow": "fast", "direction": "row", "spacing": "wide" }"#,
    )
    .unwrap();
    assert!(props.gap.is_none());
    assert!(props.grow.is_none());
    assert!(props.spacing.is_none());
    assert_eq!(
        resolve_all(&props).get(Breakpoint::Sm),
        "display: flex;\nflex-direction: row;"
    );
}

#[test]
fn strict_reading_names_the_field() {
    let err = FlexProps::from_json_str_strict(r#"{ "spacing": { "md": { "top": 8 } } }"#)
        .unwrap_err();
    assert_eq!(
        err,
        PropsError::InvalidGapSize {
            field: "spacing.md.top".to_string(),
            value: "8".to_string(),
        }
    );
}

#[test]
fn non_mapping_bag() {
    assert_eq!(FlexProps::from_json_str("[]").unwrap(), FlexProps::default());
    assert!(matches!(
        FlexProps::from_json_str_strict("42"),
        Err(PropsError::NotAMapping { found: "a number" })
    ));
}

#[test]
fn token_scheme_from_config() {
    let scheme: TokenScheme = serde_yaml::from_str("prefix: space").unwrap();
    let props = FlexProps::from_json_str(r#"{ "gap": { "md": 4 } }"#).unwrap();
    assert_eq!(
        resolve_all_with(&props, &scheme).get(Breakpoint::Md),
        "gap: var(--space-4);"
    );
}

#[test]
fn fractional_sizes_are_rejected() {
    let props = FlexProps::from_json_str(r#"{ "gap": 2.5, "spacing": { "top": 1.5 } }"#).unwrap();
    assert!(props.gap.is_none());
    assert_eq!(resolve_all(&props).get(Breakpoint::Sm), "display: flex;");

    let err = FlexProps::from_json_str_strict(r#"{ "gap": { "md": 2.5 } }"#).unwrap_err();
    assert_eq!(
        err,
        PropsError::InvalidGapSize {
            field: "gap.md".to_string(),
            value: "2.5".to_string(),
        }
    );
}

#[test]
fn text_props_pass_through_verbatim() {
    let props = FlexProps::from_json_str(r#"{ "direction": "row;\ncolor: red" }"#).unwrap();
    assert_eq!(
        resolve_all(&props).get(Breakpoint::Sm),
        "display: flex;\nflex-direction: row;\ncolor: red;"
    );
}
