// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! The named and versioned record shared by softwares and addons.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::key::to_bver_key;
use crate::{Error, Result};

#[cfg(test)]
#[path = "./versioned_test.rs"]
mod versioned_test;

/// Ordered mapping of option name to option value.
pub type Options = IndexMap<String, Value>;

/// A name, a version and arbitrary options.
///
/// The name never changes after construction, the version and options are
/// updated in place when a declaration is repeated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Versioned {
    name: String,
    version: String,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    options: Options,
}

impl Versioned {
    /// Create a record, rejecting empty names and versions.
    pub fn new<N, V>(name: N, version: V) -> Result<Self>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let version = version.into();
        if name.is_empty() {
            return Err(Error::ValidationFailed("name must not be empty".to_string()));
        }
        if version.is_empty() {
            return Err(Error::ValidationFailed(format!(
                "version of \"{name}\" must not be empty"
            )));
        }
        Ok(Self {
            name,
            version,
            options: Options::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn set_version<V: Into<String>>(&mut self, version: V) {
        self.version = version.into();
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Names of the options in insertion order.
    pub fn option_names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// Value of an option, if set.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }

    /// Value of an option, falling back to `default` when unset.
    pub fn option_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.options.get(key).unwrap_or(default)
    }

    pub fn set_option<K: Into<String>>(&mut self, key: K, value: Value) {
        self.options.insert(key.into(), value);
    }

    /// Shallow merge: each given option replaces or extends the existing ones.
    pub fn merge_options<I>(&mut self, options: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        self.options.extend(options);
    }

    /// Version key derived from the name alone.
    pub fn bver_key(&self) -> String {
        to_bver_key(&self.name, None)
    }
}
