// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Normalized keys used to name softwares and addons in the environment.

#[cfg(test)]
#[path = "./key_test.rs"]
mod key_test;

/// Prefix shared by every generated key.
pub const BVER_PREFIX: &str = "BVER";

const VERSION_SUFFIX: &str = "VERSION";
const ENABLED_SUFFIX: &str = "ENABLED";

/// Compute the version key of a software, or of one of its addons.
///
/// Names are uppercased and every character outside `[A-Z0-9]` becomes `_`:
/// `my-tool` gives `BVER_MY_TOOL_VERSION`, and with addon `addonX`
/// `BVER_MY_TOOL_ADDONX_VERSION`.
pub fn to_bver_key(name: &str, addon: Option<&str>) -> String {
    let mut key = format!("{BVER_PREFIX}_{}", normalize(name));
    if let Some(addon) = addon {
        key.push('_');
        key.push_str(&normalize(addon));
    }
    key.push('_');
    key.push_str(VERSION_SUFFIX);
    key
}

/// Compute the enabled flag key of an addon attached to a software.
///
/// Unlike [`to_bver_key`] the names are only uppercased.
pub fn to_enabled_key(software: &str, addon: &str) -> String {
    format!(
        "{BVER_PREFIX}_{}_{}_{ENABLED_SUFFIX}",
        software.to_uppercase(),
        addon.to_uppercase()
    )
}

/// Check whether a variable name follows the software version key shape.
pub fn is_version_key(name: &str) -> bool {
    name.len() > BVER_PREFIX.len() + VERSION_SUFFIX.len() + 2
        && name.starts_with(BVER_PREFIX)
        && name[BVER_PREFIX.len()..].starts_with('_')
        && name.ends_with(VERSION_SUFFIX)
        && name[..name.len() - VERSION_SUFFIX.len()].ends_with('_')
}

fn normalize(name: &str) -> String {
    name.to_uppercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
