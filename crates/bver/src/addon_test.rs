// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use serde_json::{json, Value};

use super::*;

#[rstest]
fn test_addons_default_enabled() {
    let addon = Addon::new("a", "1.0").unwrap();
    assert!(addon.is_enabled());
    assert_eq!(addon.option(ENABLED_OPTION), Some(&json!(true)));
}

#[rstest]
#[case(json!(false), false)]
#[case(json!(true), true)]
#[case(json!(1), false)]
#[case(json!("yes"), false)]
fn test_is_enabled(#[case] value: Value, #[case] expected: bool) {
    let mut addon = Addon::new("a", "1.0").unwrap();
    addon.set_option(ENABLED_OPTION, value);
    assert_eq!(addon.is_enabled(), expected);
}

#[rstest]
fn test_enabled_key() {
    let software = Software::new("Foo", "1.0").unwrap();
    let addon = Addon::new("Bar", "1.0").unwrap();
    assert_eq!(addon.enabled_key(&software), "BVER_FOO_BAR_ENABLED");
}

#[rstest]
fn test_enabled_key_only_uppercases() {
    let software = Software::new("my-tool", "1.0").unwrap();
    let addon = Addon::new("bar", "1.0").unwrap();
    assert_eq!(addon.enabled_key(&software), "BVER_MY-TOOL_BAR_ENABLED");
}
