// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Softwares and the addons they own.

use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;
use serde::Serialize;

use crate::key::to_bver_key;
use crate::{Addon, Error, Result, Versioned};

#[cfg(test)]
#[path = "./software_test.rs"]
mod software_test;

/// A named component with a version, options and owned addons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Software {
    #[serde(flatten)]
    versioned: Versioned,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    addons: IndexMap<String, Addon>,
}

impl Software {
    pub fn new<N, V>(name: N, version: V) -> Result<Self>
    where
        N: Into<String>,
        V: Into<String>,
    {
        Ok(Self {
            versioned: Versioned::new(name, version)?,
            addons: IndexMap::new(),
        })
    }

    /// Attach an addon, replacing any addon with the same name.
    pub fn add_addon(&mut self, addon: Addon) {
        self.addons.insert(addon.name().to_string(), addon);
    }

    /// Look up an owned addon by name.
    pub fn addon(&self, name: &str) -> Result<&Addon> {
        self.addons
            .get(name)
            .ok_or_else(|| Error::AddonNotFound(name.to_string()))
    }

    pub fn has_addon(&self, name: &str) -> bool {
        self.addons.contains_key(name)
    }

    /// Names of the owned addons in insertion order.
    pub fn addon_names(&self) -> impl Iterator<Item = &str> {
        self.addons.keys().map(String::as_str)
    }

    pub fn addons(&self) -> impl Iterator<Item = &Addon> {
        self.addons.values()
    }

    /// Version key of an addon, scoped to this software.
    ///
    /// The same addon attached to two softwares yields two different keys.
    pub fn addon_bver_key(&self, addon: &Addon) -> String {
        to_bver_key(self.name(), Some(addon.name()))
    }
}

impl Deref for Software {
    type Target = Versioned;

    fn deref(&self) -> &Self::Target {
        &self.versioned
    }
}

impl DerefMut for Software {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.versioned
    }
}
