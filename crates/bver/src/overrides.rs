// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Externally supplied version pins.

use std::collections::BTreeMap;

use crate::key::{is_version_key, to_bver_key};

#[cfg(test)]
#[path = "./overrides_test.rs"]
mod overrides_test;

/// Versions pinned by key, taking precedence over document defaults.
///
/// Keys follow the `BVER_<NAME>_VERSION` convention of [`to_bver_key`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveVersions {
    versions: BTreeMap<String, String>,
}

impl ActiveVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the `BVER_*_VERSION` variables of the current process.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Collect the pairs whose name is a software version key.
    ///
    /// Empty values are ignored so an unset-by-blanking variable does not pin
    /// anything.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let versions = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, v)| is_version_key(k) && !v.is_empty())
            .collect();
        Self { versions }
    }

    /// Pin the version of a software by name.
    pub fn pin(&mut self, software: &str, version: impl Into<String>) {
        self.versions
            .insert(to_bver_key(software, None), version.into());
    }

    /// Pinned version for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.versions.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.versions.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
