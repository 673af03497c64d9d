// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Accumulator of the softwares built during a resolution session.

use indexmap::IndexMap;

use crate::{Addon, Error, Options, Query, Result, Software};

#[cfg(test)]
#[path = "./registry_test.rs"]
mod registry_test;

/// Softwares by name, in the order they were first declared.
///
/// A registry is passed by mutable reference into every resolution call and
/// is the only state those calls modify.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    softwares: IndexMap<String, Software>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or update a software.
    ///
    /// An existing software keeps its addons; its version is replaced and the
    /// given options are merged over the current ones.
    pub fn add_software_info(
        &mut self,
        name: &str,
        version: &str,
        options: Options,
    ) -> Result<&mut Software> {
        if version.is_empty() {
            return Err(Error::UnresolvableVersion {
                software: name.to_string(),
            });
        }
        let software = match self.softwares.entry(name.to_string()) {
            indexmap::map::Entry::Occupied(entry) => {
                let software = entry.into_mut();
                software.set_version(version);
                software
            }
            indexmap::map::Entry::Vacant(entry) => entry.insert(Software::new(name, version)?),
        };
        software.merge_options(options);
        Ok(software)
    }

    /// Attach addons to a registered software.
    pub fn add_addons<I>(&mut self, software: &str, addons: I) -> Result<()>
    where
        I: IntoIterator<Item = Addon>,
    {
        let software = self
            .softwares
            .get_mut(software)
            .ok_or_else(|| Error::SoftwareNotFound(software.to_string()))?;
        for addon in addons {
            software.add_addon(addon);
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Software> {
        self.softwares.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.softwares.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.softwares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.softwares.is_empty()
    }

    pub fn softwares(&self) -> impl Iterator<Item = &Software> {
        self.softwares.values()
    }

    pub fn into_softwares(self) -> Vec<Software> {
        self.softwares.into_values().collect()
    }

    /// Close the session and index the result for lookups.
    pub fn into_query(self) -> Query {
        Query::new(self.into_softwares())
    }
}
