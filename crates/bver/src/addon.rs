// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Optional sub-components attached to a software.

use std::ops::{Deref, DerefMut};

use serde::Serialize;
use serde_json::Value;

use crate::key::to_enabled_key;
use crate::{Result, Software, Versioned};

#[cfg(test)]
#[path = "./addon_test.rs"]
mod addon_test;

/// Name of the option holding the enabled flag.
pub const ENABLED_OPTION: &str = "enabled";

/// A versioned record owned by exactly one [`Software`].
///
/// Addons start out enabled; declared options may turn them off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Addon {
    #[serde(flatten)]
    versioned: Versioned,
}

impl Addon {
    pub fn new<N, V>(name: N, version: V) -> Result<Self>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let mut versioned = Versioned::new(name, version)?;
        versioned.set_option(ENABLED_OPTION, Value::Bool(true));
        Ok(Self { versioned })
    }

    /// Whether the `enabled` option is set to a true boolean.
    pub fn is_enabled(&self) -> bool {
        matches!(self.option(ENABLED_OPTION), Some(Value::Bool(true)))
    }

    /// Enabled flag key of this addon when attached to `software`.
    pub fn enabled_key(&self, software: &Software) -> String {
        to_enabled_key(software.name(), self.name())
    }
}

impl Deref for Addon {
    type Target = Versioned;

    fn deref(&self) -> &Self::Target {
        &self.versioned
    }
}

impl DerefMut for Addon {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.versioned
    }
}
