// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Read-only lookups over a resolved list of softwares.

use std::collections::BTreeSet;

use crate::{Error, Result, Software};

#[cfg(test)]
#[path = "./query_test.rs"]
mod query_test;

/// Fixed, ordered list of softwares answering name and key lookups.
///
/// Lookups returning a single software pick the first match in list order.
#[derive(Debug, Clone, Default)]
pub struct Query {
    softwares: Vec<Software>,
}

impl Query {
    pub fn new(softwares: Vec<Software>) -> Self {
        Self { softwares }
    }

    pub fn softwares(&self) -> &[Software] {
        &self.softwares
    }

    pub fn software_names(&self) -> Vec<&str> {
        self.softwares.iter().map(|s| s.name()).collect()
    }

    pub fn software_keys(&self) -> Vec<String> {
        self.softwares.iter().map(|s| s.bver_key()).collect()
    }

    /// Union of the addon names of every software.
    pub fn addon_names(&self) -> BTreeSet<&str> {
        self.softwares.iter().flat_map(|s| s.addon_names()).collect()
    }

    /// Union of the addon keys, each scoped to its owning software.
    pub fn addon_keys(&self) -> BTreeSet<String> {
        self.softwares
            .iter()
            .flat_map(|s| s.addons().map(move |addon| s.addon_bver_key(addon)))
            .collect()
    }

    pub fn software_by_name(&self, name: &str) -> Result<&Software> {
        self.softwares
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| Error::SoftwareNotFound(name.to_string()))
    }

    pub fn software_by_key(&self, key: &str) -> Result<&Software> {
        self.softwares
            .iter()
            .find(|s| s.bver_key() == key)
            .ok_or_else(|| Error::SoftwareNotFound(key.to_string()))
    }

    /// Every software owning an addon called `name`.
    pub fn softwares_by_addon_name(&self, name: &str) -> Result<Vec<&Software>> {
        let found: Vec<&Software> = self
            .softwares
            .iter()
            .filter(|s| s.has_addon(name))
            .collect();
        non_empty(found, name)
    }

    /// Every software owning an addon whose scoped key is `key`.
    pub fn softwares_by_addon_key(&self, key: &str) -> Result<Vec<&Software>> {
        let found: Vec<&Software> = self
            .softwares
            .iter()
            .filter(|s| s.addons().any(|addon| s.addon_bver_key(addon) == key))
            .collect();
        non_empty(found, key)
    }
}

fn non_empty<'a>(found: Vec<&'a Software>, reference: &str) -> Result<Vec<&'a Software>> {
    if found.is_empty() {
        return Err(Error::AddonNotFound(reference.to_string()));
    }
    Ok(found)
}
