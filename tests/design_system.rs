//! End-to-end generation tests over loaded and starter profiles.

use proptest::prelude::*;
use serde_json::json;

use tokensheet::templates::{catalog, skeleton_profile, SkeletonRequest};
use tokensheet::{
    generate_component_css, generate_design_system, map_to_variable, process_value,
    resolve_reference, Profile, PropertyValue, TokenGroup,
};

fn studio_profile() -> Profile {
    serde_json::from_value(json!({
        "name": "Studio",
        "author": "Ada",
        "slug": "studio",
        "attributes": {
            "colors": {
                "accent": { "value": "#3d7aff", "weight": 1 },
                "accentLight": { "value": "#e8efff", "weight": 0.8 },
                "success": { "value": "#1f9d55", "weight": 0.5 },
                "error": { "value": "#d64545", "weight": 0.5 }
            },
            "spacing": {
                "small": { "value": "8px", "weight": 1 },
                "medium": { "value": "16px", "weight": 1 }
            },
            "typography": {
                "fontWeight": { "medium": { "value": "500", "weight": 1 } }
            }
        },
        "components": {
            "card": {
                "background": "colors.accent",
                "padding": "spacing.medium"
            },
            "button": {
                "primary": {
                    "padding": "spacing.small spacing.medium",
                    "background": "#000000"
                },
                "secondary": {
                    "padding": "spacing.small spacing.medium"
                }
            },
            "alert": {
                "borderRadius": "4px",
                "success": { "background": "colors.success", "color": "#ffffff" },
                "error": { "background": "colors.error", "color": "#ffffff" }
            }
        }
    }))
    .unwrap()
}

fn block_body<'a>(css: &'a str, selector: &str) -> &'a str {
    let header = format!("\n{selector} {{\n");
    let start = css
        .find(&header)
        .unwrap_or_else(|| panic!("no block for {selector} in:\n{css}"))
        + header.len();
    let end = start + css[start..].find("}\n").unwrap();
    &css[start..end]
}

#[test]
fn test_card_references_accent_variable() {
    let css = generate_component_css(&studio_profile(), ".card");
    assert!(css.contains("--color-accent: #3d7aff;"));
    assert_eq!(
        block_body(&css, ".card"),
        "  background: var(--color-accent);\n  padding: var(--spacing-medium);\n"
    );
}

#[test]
fn test_button_primary_uses_fixed_template() {
    let css = generate_component_css(&studio_profile(), ".button");
    let primary = block_body(&css, ".button.primary");
    assert!(primary
        .lines()
        .any(|line| line == "  padding: var(--spacing-small) var(--spacing-medium);"));
    assert!(primary.contains("  background: var(--color-accent);\n"));
    assert!(!primary.contains("#000000"));
    assert!(!primary.contains("8px"));
    assert!(block_body(&css, ".button.secondary").contains("background: var(--color-accentLight);"));
}

#[test]
fn test_alert_variant_blocks() {
    let css = generate_component_css(&studio_profile(), ".alert");
    assert_eq!(block_body(&css, ".alert"), "  border-radius: 4px;\n");
    assert_eq!(
        block_body(&css, ".alert.success"),
        "  background: var(--color-success);\n  color: #ffffff;\n"
    );
    assert_eq!(
        block_body(&css, ".alert.error"),
        "  background: var(--color-error);\n  color: #ffffff;\n"
    );
    assert!(css.contains(".alert-container {\n"));
    assert!(!css.contains(".alert.warning"));
}

#[test]
fn test_id_selector_keeps_structural_class_names() {
    let mut request = SkeletonRequest::new("Starter", "Ada", "starter");
    request.components = vec!["nav".into(), "input".into(), "modal".into()];
    let profile = skeleton_profile(&request).unwrap();

    let nav = generate_component_css(&profile, "#nav");
    assert!(nav.contains("\n#nav {\n"));
    for selector in [".nav-brand", ".nav-menu", ".nav-item", ".nav-link"] {
        assert!(nav.contains(&format!("\n{selector} {{\n")), "missing {selector}");
    }
    assert!(!nav.contains("#nav-"));

    let input = generate_component_css(&profile, "#input");
    assert!(input.contains("\n.input-wrapper label {\n"));
    assert!(!input.contains("#input-"));

    let modal = generate_component_css(&profile, "#modal");
    assert!(modal.contains("\n.modal-overlay {\n"));
    assert!(modal.contains("\n.modal-close-button {\n"));
    assert!(modal.contains("\n.modal-footer {\n"));
}

#[test]
fn test_unknown_component_yields_comment() {
    let profile = studio_profile();
    for selector in [".carousel", "#carousel", "carousel"] {
        let css = generate_component_css(&profile, selector);
        assert_eq!(css, "/* Component \"carousel\" not found in the profile */");
    }
}

#[test]
fn test_design_system_single_root_block() {
    let css = generate_design_system(&studio_profile());
    assert!(css.starts_with(":root {\n"));
    assert_eq!(css.matches(":root {").count(), 1);

    let card = css.find("\n.card {").unwrap();
    let button = css.find("\n.button.primary {").unwrap();
    let alert = css.find("\n.alert {").unwrap();
    assert!(card < button && button < alert);
}

#[test]
fn test_starter_catalog_generates_every_component() {
    let mut request = SkeletonRequest::new("Starter", "Ada", "starter");
    request.components = catalog().names().map(str::to_string).collect();
    let profile = skeleton_profile(&request).unwrap();
    assert!(profile.validate().is_ok());

    let css = generate_design_system(&profile);
    assert_eq!(css.matches(":root {").count(), 1);
    for selector in [
        ".button.primary",
        ".card",
        ".card:hover",
        ".input-wrapper label",
        ".nav-link",
        ".badge-container",
        ".modal-overlay",
        ".modal-close-button",
        ".alert.info",
        ".table th",
        ".table tr:hover",
    ] {
        assert!(
            css.contains(&format!("\n{selector} {{\n")),
            "missing {selector}"
        );
    }
    assert!(!css.contains(": ;"));
}

#[test]
fn test_load_json_and_yaml_profiles() {
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("studio.json");
    std::fs::write(&json_path, studio_profile().to_json_pretty().unwrap()).unwrap();
    let from_json = Profile::load(&json_path).unwrap();
    assert_eq!(
        generate_design_system(&from_json),
        generate_design_system(&studio_profile())
    );

    let yaml_path = dir.path().join("mini.yml");
    std::fs::write(
        &yaml_path,
        "name: Mini\nattributes:\n  colors:\n    ink:\n      value: '#111111'\ncomponents:\n  text:\n    color: colors.ink\n",
    )
    .unwrap();
    let from_yaml = Profile::load(&yaml_path).unwrap();
    let css = generate_component_css(&from_yaml, ".text");
    assert!(css.contains("--color-ink: #111111;"));
    assert!(css.contains(".text {\n  color: var(--color-ink);\n}\n"));
}

#[test]
fn test_load_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = Profile::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_documented_mappings() {
    assert_eq!(map_to_variable("colors.accent"), "var(--color-accent)");
    assert_eq!(map_to_variable("typography.fontSize.large"), "var(--font-size-large)");
    assert_eq!(map_to_variable("typography.fontSize"), "var(--font-size-base)");
    assert_eq!(
        process_value(&PropertyValue::parse("animations.duration.fast animations.easing.easeOut")),
        "var(--duration-fast) var(--easing-easeOut)"
    );
}

proptest! {
    #[test]
    fn prop_hex_literals_pass_through(hex in "#[0-9a-fA-F]{3,8}") {
        let tree = TokenGroup::new();
        prop_assert_eq!(resolve_reference(&hex, &tree), Some(hex.clone()));
        prop_assert_eq!(map_to_variable(&hex), hex);
    }

    #[test]
    fn prop_variable_calls_pass_through(name in "[a-z][a-z0-9-]{0,12}(\\.[a-z]{1,6})?") {
        let value = format!("var(--{name})");
        let tree = TokenGroup::new();
        prop_assert_eq!(resolve_reference(&value, &tree), Some(value.clone()));
        prop_assert_eq!(map_to_variable(&value), value);
    }

    #[test]
    fn prop_mapping_is_deterministic(
        category in prop::sample::select(vec!["colors", "spacing", "typography", "borders", "shadows", "animations", "layout"]),
        rest in prop::collection::vec("[a-z][a-zA-Z0-9]{0,8}", 1..3),
    ) {
        let path = format!("{category}.{}", rest.join("."));
        let first = map_to_variable(&path);
        prop_assert!(first.starts_with("var(--"));
        prop_assert_eq!(first, map_to_variable(&path));
    }

    #[test]
    fn prop_unknown_components_never_panic(name in "[a-zA-Z][a-zA-Z0-9_-]{0,16}") {
        prop_assume!(!["card", "button", "alert"].contains(&name.as_str()));
        let css = generate_component_css(&studio_profile(), &format!(".{name}"));
        prop_assert!(css.contains(&name));
    }
}
