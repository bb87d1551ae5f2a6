//! End-to-end resolution scenarios and file loading.

use std::fs;

use serde_json::json;
use tempfile::TempDir;
use varistyle::{
    alpha, nv, slots, slots_with, tokens, unique, AlphaValue, BuildParams, Definition, NvOptions,
    Selection, SlotSelection, SlotSet, StyleError, StyleMap, ThemeProvider, VariantGroup, Viewport,
};

// ============================================================================
// Helpers
// ============================================================================

fn avatar() -> Definition {
    Definition::new()
        .base(StyleMap::new().set("width", 50))
        .variant(
            "size",
            VariantGroup::new()
                .value("small", StyleMap::new().set("width", 50))
                .value("large", StyleMap::new().set("width", 100)),
        )
        .default_variant("size", "small")
}

fn tabs() -> SlotSet {
    SlotSet::new()
        .slot(
            "tab",
            Definition::new().base(StyleMap::new().set("padding", 6)),
        )
        .slot(
            "panel",
            Definition::new().base(StyleMap::new().set("padding", 14)),
        )
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Single-style scenarios
// ============================================================================

#[test]
fn size_defaults_to_small() {
    let resolver = unique(avatar());
    assert_eq!(
        resolver.resolve(&Selection::new()).to_json(),
        json!({ "width": 50 })
    );
}

#[test]
fn size_large_overrides_default() {
    let resolver = unique(avatar());
    assert_eq!(
        resolver
            .resolve(&Selection::new().with("size", "large"))
            .to_json(),
        json!({ "width": 100 })
    );
}

#[test]
fn unknown_size_falls_back_to_default() {
    let resolver = unique(avatar());
    assert_eq!(
        resolver.resolve(&Selection::new().with("size", "huge")),
        resolver.resolve(&Selection::new())
    );
}

#[test]
fn selection_order_decides_between_groups() {
    let resolver = unique(
        Definition::new()
            .variant(
                "tone",
                VariantGroup::new().value("danger", StyleMap::new().set("color", "red")),
            )
            .variant(
                "state",
                VariantGroup::new().value("disabled", StyleMap::new().set("color", "gray")),
            ),
    );

    let tone_last = Selection::new()
        .with("state", "disabled")
        .with("tone", "danger");
    let state_last = Selection::new()
        .with("tone", "danger")
        .with("state", "disabled");

    assert_eq!(
        resolver.resolve(&tone_last).get("color").and_then(|v| v.as_str()),
        Some("red")
    );
    assert_eq!(
        resolver.resolve(&state_last).get("color").and_then(|v| v.as_str()),
        Some("gray")
    );
}

#[test]
fn resolved_maps_are_independent_copies() {
    let resolver = unique(avatar());
    let mut first = resolver.resolve(&Selection::new());
    first.insert("width", 1);
    assert_eq!(
        resolver.resolve(&Selection::new()).get("width").and_then(|v| v.as_number()),
        Some(50.0)
    );
}

// ============================================================================
// Slot scenarios
// ============================================================================

#[test]
fn tabs_resolve_every_slot() {
    let resolver = slots(tabs());
    assert_eq!(
        resolver.resolve(&SlotSelection::new()).to_json(),
        json!({ "tab": { "padding": 6 }, "panel": { "padding": 14 } })
    );
}

#[test]
fn slot_output_keeps_declaration_order() {
    let resolver = slots(tabs());
    let styles = resolver.resolve(&SlotSelection::new());
    let names: Vec<&str> = styles.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["tab", "panel"]);
}

#[test]
fn slot_selection_for_unknown_slot_is_ignored() {
    let resolver = slots(tabs());
    let selection = SlotSelection::new().slot("footer", Selection::new().with("size", "lg"));
    assert_eq!(
        resolver.resolve(&selection),
        resolver.resolve(&SlotSelection::new())
    );
}

#[test]
fn themed_slots_build_from_provider() {
    struct Theme {
        accent: &'static str,
    }

    let provider = ThemeProvider::new(
        Theme {
            accent: tokens::INDIGO.get(tokens::TokenColorKey::S500),
        },
        Viewport::new(400.0, 800.0),
    );

    let resolver = provider.slots(|p| {
        SlotSet::new()
            .slot(
                "root",
                Definition::new().base(StyleMap::new().set("width", p.width(50))),
            )
            .slot(
                "indicator",
                Definition::new().base(
                    StyleMap::new().set("backgroundColor", p.theme().accent),
                ),
            )
    });

    assert_eq!(
        resolver.resolve(&SlotSelection::new()).to_json(),
        json!({
            "root": { "width": 200 },
            "indicator": { "backgroundColor": tokens::INDIGO.get(tokens::TokenColorKey::S500) },
        })
    );
}

#[test]
fn slots_with_matches_provider() {
    let theme = "#0ea5e9";
    let viewport = Viewport::new(320.0, 640.0);
    fn build(p: &BuildParams<'_, &'static str>) -> SlotSet {
        SlotSet::new().slot(
            "dot",
            Definition::new().base(
                StyleMap::new()
                    .set("backgroundColor", *p.theme())
                    .set("size", p.height(5)),
            ),
        )
    }

    let direct = slots_with(&theme, &viewport, build);
    let provided = ThemeProvider::new(theme, viewport).slots(build);
    assert_eq!(
        direct.resolve(&SlotSelection::new()),
        provided.resolve(&SlotSelection::new())
    );
}

// ============================================================================
// Legacy resolver
// ============================================================================

#[test]
fn legacy_slots_ignore_selection() {
    let resolver = nv(NvOptions::slots([
        ("tab", StyleMap::new().set("padding", 6)),
        ("panel", StyleMap::new().set("padding", 14)),
    ]));

    let plain = resolver.resolve(&Selection::new());
    let selected = resolver.resolve(&Selection::new().with("size", "lg").with("tab", "active"));
    assert_eq!(plain, selected);
    assert_eq!(
        plain.to_json(),
        json!({ "tab": { "padding": 6 }, "panel": { "padding": 14 } })
    );
}

#[test]
fn legacy_variant_honors_selection() {
    let resolver = nv(avatar());
    assert_eq!(
        resolver
            .resolve(&Selection::new().with("size", "large"))
            .to_json(),
        json!({ "width": 100 })
    );
}

// ============================================================================
// Alpha and tokens
// ============================================================================

#[test]
fn alpha_over_token_color() {
    assert_eq!(
        alpha(tokens::ZINC.get(tokens::TokenColorKey::S950), AlphaValue::P50).as_deref(),
        Some("rgba(15, 15, 16, 0.5)")
    );
}

#[test]
fn every_palette_shade_converts() {
    for name in tokens::palette_names() {
        let palette = tokens::palette(name).unwrap();
        for (key, shade) in palette.iter() {
            assert!(
                alpha(shade, AlphaValue::P100).is_some(),
                "{} {} ({}) did not convert",
                name,
                key.value(),
                shade
            );
        }
    }
}

// ============================================================================
// File loading
// ============================================================================

#[test]
fn definition_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "avatar.yaml",
        r#"
base:
  width: 50
variants:
  size:
    small:
      width: 50
    large:
      width: 100
defaultVariants:
  size: small
"#,
    );

    let definition = Definition::from_file(&path).unwrap();
    assert_eq!(definition, avatar());
    assert!(definition.validate().is_ok());
}

#[test]
fn slot_set_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "tabs.yaml",
        r#"
tab:
  base:
    padding: 6
panel:
  base:
    padding: 14
"#,
    );

    let set = SlotSet::from_file(&path).unwrap();
    assert_eq!(
        slots(set).resolve(&SlotSelection::new()).to_json(),
        json!({ "tab": { "padding": 6 }, "panel": { "padding": 14 } })
    );
}

#[test]
fn legacy_options_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "legacy.yaml",
        r#"
slots:
  tab:
    padding: 6
"#,
    );

    let options = NvOptions::from_file(&path).unwrap();
    assert!(options.is_slots());
}

#[test]
fn legacy_and_definition_agree_on_scalar_keys() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "toggle.yaml",
        r#"
variants:
  disabled:
    true: { opacity: 0.5 }
    false: { opacity: 1 }
defaultVariants:
  disabled: false
"#,
    );

    let definition = Definition::from_file(&path).unwrap();
    let options = NvOptions::from_file(&path).unwrap();
    assert!(!options.is_slots());

    let selection = Selection::new().with("disabled", "true");
    assert_eq!(
        nv(options).resolve(&selection).to_json(),
        unique(definition).resolve(&selection).to_json()
    );
}

#[test]
fn missing_file_is_load_error() {
    let dir = TempDir::new().unwrap();
    let result = Definition::from_file(dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(StyleError::Load { .. })));
}

#[test]
fn malformed_file_is_parse_error_with_path() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.yaml", "base: [unclosed");

    match Definition::from_file(&path) {
        Err(StyleError::Parse { path: Some(p), .. }) => assert_eq!(p, path),
        other => panic!("expected parse error with path, got {:?}", other),
    }
}

#[test]
fn unknown_default_is_reported_by_validate_only() {
    let definition = Definition::new()
        .variant(
            "size",
            VariantGroup::new().value("sm", StyleMap::new().set("padding", 4)),
        )
        .default_variant("size", "xl");

    assert_eq!(
        definition.validate(),
        Err(StyleError::UnknownDefault {
            group: "size".to_string(),
            value: "xl".to_string(),
        })
    );
    assert!(unique(definition).resolve(&Selection::new()).is_empty());
}
