// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Environment variables derived from resolved softwares.

use serde::Serialize;

use crate::Query;

#[cfg(test)]
#[path = "./environment_test.rs"]
mod environment_test;

/// A single variable to export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    fn new(name: String, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Version and enabled variables for every software and addon.
///
/// Each software contributes its version key, followed by the scoped version
/// key and the enabled key of each of its addons.
pub fn environment_variables(query: &Query) -> Vec<EnvVar> {
    let mut vars = Vec::new();
    for software in query.softwares() {
        vars.push(EnvVar::new(software.bver_key(), software.version()));
        for addon in software.addons() {
            vars.push(EnvVar::new(
                software.addon_bver_key(addon),
                addon.version(),
            ));
            let enabled = if addon.is_enabled() { "1" } else { "0" };
            vars.push(EnvVar::new(addon.enabled_key(software), enabled));
        }
    }
    vars
}

/// Generate a shell startup script exporting the given variables.
///
/// Variables whose name is not a valid shell identifier are left out.
pub fn generate_startup_script(vars: &[EnvVar]) -> String {
    let mut script = String::from("# Generated by bver\n");
    for var in vars {
        if !is_shell_name(&var.name) {
            tracing::warn!(name = %var.name, "skipping variable with invalid shell name");
            continue;
        }
        script.push_str(&format!("export {}=\"{}\"\n", var.name, escape(&var.value)));
    }
    script
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_shell_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
