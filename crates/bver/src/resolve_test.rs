// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use serde_json::json;

use super::*;

fn document(value: Value) -> Document {
    Document::from_value(value).expect("Should build document")
}

fn resolve(value: Value, overrides: Option<&ActiveVersions>) -> Result<Registry> {
    let mut registry = Registry::new();
    let options = ResolveOptions {
        overrides,
        ignore_addons: false,
    };
    resolve_document(&document(value), &mut registry, options)?;
    Ok(registry)
}

fn pinned(software: &str, version: &str) -> ActiveVersions {
    let mut overrides = ActiveVersions::new();
    overrides.pin(software, version);
    overrides
}

#[rstest]
fn test_scalar_declaration() {
    let registry = resolve(json!({"foo": "1.2.3"}), None).unwrap();

    let software = registry.get("foo").unwrap();
    assert_eq!(software.version(), "1.2.3");
    assert!(software.options().is_empty());
    assert_eq!(software.addon_names().count(), 0);
}

#[rstest]
fn test_object_declaration() {
    let registry = resolve(
        json!({"foo": {"version": "1.0", "options": {"bar": 10, "baz": "x"}}}),
        None,
    )
    .unwrap();

    let software = registry.get("foo").unwrap();
    assert_eq!(software.version(), "1.0");
    assert_eq!(software.option_names().collect::<Vec<_>>(), vec!["bar", "baz"]);
    assert_eq!(software.option("bar"), Some(&json!(10)));
}

#[rstest]
#[case(json!({"foo": "1.0"}))]
#[case(json!({"foo": {"version": "1.0", "options": {"a": 1}}}))]
#[case(json!({"foo": {"active": "1.0", "versions": {"1.0": {}, "2.0": {}}}}))]
fn test_override_takes_precedence(#[case] value: Value) {
    let overrides = pinned("foo", "2.0");
    let registry = resolve(value, Some(&overrides)).unwrap();
    assert_eq!(registry.get("foo").unwrap().version(), "2.0");
}

#[rstest]
fn test_override_for_other_software_is_ignored() {
    let overrides = pinned("other", "9.9");
    let registry = resolve(json!({"foo": "1.0"}), Some(&overrides)).unwrap();
    assert_eq!(registry.get("foo").unwrap().version(), "1.0");
}

#[rstest]
fn test_multi_version_uses_active() {
    let registry = resolve(
        json!({"foo": {
            "active": "1.2.5",
            "versions": {
                "1.0.0": {"options": {"old": true}},
                "1.2.5": {"options": {"new": true}}
            }
        }}),
        None,
    )
    .unwrap();

    let software = registry.get("foo").unwrap();
    assert_eq!(software.version(), "1.2.5");
    assert_eq!(software.option("new"), Some(&json!(true)));
    assert_eq!(software.option("old"), None);
}

#[rstest]
fn test_multi_version_override_selects_entry() {
    let overrides = pinned("foo", "1.0.0");
    let registry = resolve(
        json!({"foo": {
            "active": "1.2.5",
            "versions": {
                "1.0.0": {"options": {"old": true}},
                "1.2.5": {"options": {"new": true}}
            }
        }}),
        Some(&overrides),
    )
    .unwrap();

    let software = registry.get("foo").unwrap();
    assert_eq!(software.version(), "1.0.0");
    assert_eq!(software.option("old"), Some(&json!(true)));
}

#[rstest]
fn test_multi_version_skip_on_unknown_override() {
    let overrides = pinned("foo", "9.9");
    let registry = resolve(
        json!({
            "foo": {"active": "1.0", "versions": {"1.0": {"options": {"a": 1}}}},
            "bar": "2.0"
        }),
        Some(&overrides),
    )
    .expect("Skipping is not an error");

    assert!(!registry.contains("foo"));
    assert_eq!(registry.get("bar").unwrap().version(), "2.0");
}

#[rstest]
fn test_multi_version_skip_leaves_existing_software_untouched() {
    let mut registry = Registry::new();
    resolve_document(
        &document(json!({"foo": {"version": "1.0", "options": {"a": 1}}})),
        &mut registry,
        ResolveOptions::default(),
    )
    .unwrap();
    let before = registry.clone();

    let overrides = pinned("foo", "9.9");
    resolve_document(
        &document(json!({"foo": {"active": "2.0", "versions": {"2.0": {"options": {"a": 2}}}}})),
        &mut registry,
        ResolveOptions {
            overrides: Some(&overrides),
            ignore_addons: false,
        },
    )
    .unwrap();

    assert_eq!(registry, before);
}

#[rstest]
fn test_multi_version_skip_on_unknown_active() {
    let registry = resolve(
        json!({"foo": {"active": "3.0", "versions": {"1.0": {}}}}),
        None,
    )
    .unwrap();
    assert!(registry.is_empty());
}

#[rstest]
#[case(json!({"foo": {"options": {"a": 1}}}))]
#[case(json!({"foo": 12}))]
#[case(json!({"foo": null}))]
#[case(json!({"foo": ""}))]
#[case(json!({"foo": {"version": 3}}))]
#[case(json!({"foo": {"versions": {"1.0": {}}}}))]
#[case(json!({"foo": {"active": "1.0", "versions": ["1.0"]}}))]
#[case(json!({"foo": {"active": "1.0", "versions": {"1.0": "1.0"}}}))]
fn test_unresolvable_version(#[case] value: Value) {
    match resolve(value, None) {
        Err(Error::UnresolvableVersion { software }) => assert_eq!(software, "foo"),
        other => panic!("Expected UnresolvableVersion, got: {:?}", other),
    }
}

#[rstest]
fn test_override_resolves_missing_version() {
    let overrides = pinned("foo", "1.0");
    let registry = resolve(json!({"foo": {"options": {"a": 1}}}), Some(&overrides)).unwrap();
    assert_eq!(registry.get("foo").unwrap().version(), "1.0");
}

#[rstest]
fn test_malformed_options() {
    match resolve(json!({"foo": {"version": "1.0", "options": [1, 2]}}), None) {
        Err(Error::MalformedOptions { software }) => assert_eq!(software, "foo"),
        other => panic!("Expected MalformedOptions, got: {:?}", other),
    }
}

#[rstest]
fn test_addons_attached_with_options() {
    let registry = resolve(
        json!({"foo": {
            "version": "1.0",
            "addons": {
                "a": {"options": {"version": "2.0", "enabled": true}},
                "b": {"options": {"version": "3.0", "enabled": false}},
                "c": {"options": {"version": "4.0"}}
            }
        }}),
        None,
    )
    .unwrap();

    let software = registry.get("foo").unwrap();
    let a = software.addon("a").unwrap();
    assert_eq!(a.version(), "2.0");
    assert!(a.is_enabled());
    assert!(!software.addon("b").unwrap().is_enabled());
    assert!(software.addon("c").unwrap().is_enabled(), "enabled by default");
}

#[rstest]
fn test_addon_version_from_registered_software() {
    let registry = resolve(
        json!({
            "a": "1.5",
            "foo": {"version": "1.0", "addons": {"a": {}}}
        }),
        None,
    )
    .unwrap();

    let addon = registry.get("foo").unwrap().addon("a").unwrap();
    assert_eq!(addon.version(), "1.5");
    assert!(addon.is_enabled());
}

#[rstest]
fn test_unresolvable_addon_version() {
    match resolve(json!({"foo": {"version": "1.0", "addons": {"ghost": {}}}}), None) {
        Err(Error::UnresolvableAddonVersion { software, addon }) => {
            assert_eq!(software, "foo");
            assert_eq!(addon, "ghost");
        }
        other => panic!("Expected UnresolvableAddonVersion, got: {:?}", other),
    }
}

#[rstest]
#[case(json!(["a", "b"]))]
#[case(json!("a"))]
fn test_malformed_addons_collection(#[case] addons: Value) {
    let mut registry = Registry::new();
    let result = resolve_document(
        &document(json!({"foo": {"version": "1.0", "addons": addons}})),
        &mut registry,
        ResolveOptions::default(),
    );

    match result {
        Err(Error::MalformedAddonsCollection { software }) => assert_eq!(software, "foo"),
        other => panic!("Expected MalformedAddonsCollection, got: {:?}", other),
    }
    assert_eq!(registry.get("foo").unwrap().addon_names().count(), 0);
}

#[rstest]
#[case(json!({"a": {"options": {"version": "1.0"}}, "b": "1.0"}))]
#[case(json!({"a": {"options": {"version": "1.0"}}, "b": {"options": [1]}}))]
fn test_malformed_addon_entry_attaches_nothing(#[case] addons: Value) {
    let mut registry = Registry::new();
    let result = resolve_document(
        &document(json!({"foo": {"version": "1.0", "addons": addons}})),
        &mut registry,
        ResolveOptions::default(),
    );

    match result {
        Err(Error::MalformedAddonEntry { software, addon }) => {
            assert_eq!(software, "foo");
            assert_eq!(addon, "b");
        }
        other => panic!("Expected MalformedAddonEntry, got: {:?}", other),
    }
    assert_eq!(registry.get("foo").unwrap().addon_names().count(), 0);
}

#[rstest]
fn test_ignore_addons() {
    let mut registry = Registry::new();
    resolve_document(
        &document(json!({"foo": {"version": "1.0", "addons": ["not", "checked"]}})),
        &mut registry,
        ResolveOptions {
            overrides: None,
            ignore_addons: true,
        },
    )
    .expect("Addons are not inspected");

    assert_eq!(registry.get("foo").unwrap().version(), "1.0");
}

#[rstest]
fn test_failure_keeps_previous_entries() {
    let mut registry = Registry::new();
    let result = resolve_document(
        &document(json!({"a": "1.0", "b": {"options": {}}, "c": "3.0"})),
        &mut registry,
        ResolveOptions::default(),
    );

    assert!(matches!(result, Err(Error::UnresolvableVersion { .. })));
    assert!(registry.contains("a"));
    assert!(!registry.contains("c"));
}

#[rstest]
fn test_redeclaration_is_last_write_wins() {
    let documents = [
        document(json!({"foo": {"version": "1.0", "options": {"a": 1, "b": 1}}})),
        document(json!({"foo": {"version": "2.0", "options": {"b": 2}}})),
    ];
    let mut registry = Registry::new();
    resolve_documents(&documents, &mut registry, None).unwrap();

    let software = registry.get("foo").unwrap();
    assert_eq!(software.version(), "2.0");
    assert_eq!(software.option("a"), Some(&json!(1)));
    assert_eq!(software.option("b"), Some(&json!(2)));
}

#[rstest]
fn test_cross_document_addon_reference() {
    let documents = [
        document(json!({"y": {"version": "1.0", "addons": {"x": {}}}})),
        document(json!({"x": {"version": "2.0", "options": {"standalone": true}}})),
    ];

    // A single pass fails: "x" is not registered yet when "y" is resolved.
    let mut single_pass = Registry::new();
    let result = resolve_document(&documents[0], &mut single_pass, ResolveOptions::default());
    assert!(matches!(result, Err(Error::UnresolvableAddonVersion { .. })));

    let mut registry = Registry::new();
    resolve_documents(&documents, &mut registry, None).unwrap();

    let x = registry.get("x").unwrap();
    let addon = registry.get("y").unwrap().addon("x").unwrap();
    assert_eq!(addon.name(), x.name());
    assert_eq!(addon.version(), "2.0");
    assert_eq!(addon.option("standalone"), None, "addon does not share options");
    assert_eq!(x.option("enabled"), None, "software does not share addon defaults");
}

#[rstest]
fn test_two_stage_is_idempotent() {
    let overrides = pinned("z", "2.0");
    let documents = [
        document(json!({
            "x": {"version": "1.0", "options": {"a": 1}},
            "z": {"active": "1.0", "versions": {"1.0": {}, "2.0": {"addons": {"x": {}}}}}
        })),
        document(json!({"y": {"version": "1.0", "addons": {"x": {"options": {"enabled": false}}}}})),
    ];

    let mut once = Registry::new();
    resolve_documents(&documents, &mut once, Some(&overrides)).unwrap();

    let mut twice = Registry::new();
    resolve_documents(&documents, &mut twice, Some(&overrides)).unwrap();
    resolve_documents(&documents, &mut twice, Some(&overrides)).unwrap();

    assert_eq!(once, twice);
    assert_eq!(once.get("z").unwrap().version(), "2.0");
    assert!(once.get("z").unwrap().has_addon("x"));
}

#[rstest]
fn test_versions_only_stage_registers_everything() {
    let documents = [
        document(json!({"y": {"version": "1.0", "addons": {"x": {}}}})),
        document(json!({"x": "2.0"})),
    ];
    let mut registry = Registry::new();
    ingest_versions_only(&documents, &mut registry, None).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get("y").unwrap().addon_names().count(), 0);

    ingest_addons(&documents, &mut registry, None).unwrap();
    assert!(registry.get("y").unwrap().has_addon("x"));
}

#[rstest]
fn test_addon_version_follows_final_software_version() {
    let documents = [
        document(json!({"x": "1.0", "y": {"version": "1.0", "addons": {"x": {}}}})),
        document(json!({"x": "2.0"})),
    ];
    let mut registry = Registry::new();
    resolve_documents(&documents, &mut registry, None).unwrap();

    assert_eq!(registry.get("x").unwrap().version(), "2.0");
    let y = registry.get("y").unwrap();
    assert_eq!(y.addon("x").unwrap().version(), "2.0");
}
