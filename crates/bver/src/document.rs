// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Parsed version documents.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

#[cfg(test)]
#[path = "./document_test.rs"]
mod document_test;

const IN_MEMORY_SOURCE: &str = "<memory>";

/// A version document: software names mapped to their declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: Map<String, Value>,

    /// Path to the file this was loaded from.
    pub source_path: Option<PathBuf>,
}

impl Document {
    /// Parse a document from JSON text.
    pub fn from_json<S: AsRef<str>>(json: S) -> crate::Result<Self> {
        Self::parse(json.as_ref(), IN_MEMORY_SOURCE)
    }

    /// Wrap an already decoded value, which must be an object.
    pub fn from_value(value: Value) -> crate::Result<Self> {
        Self::from_value_named(value, IN_MEMORY_SOURCE)
    }

    /// Load a document from file path.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| crate::Error::ReadFailed {
            path: path.to_path_buf(),
            error: e,
        })?;
        Self::from_source(&json, path)
    }

    /// Parse text read from `path`, recording it as the document source.
    pub(crate) fn from_source(json: &str, path: &Path) -> crate::Result<Self> {
        let mut document = Self::parse(json, &path.display().to_string())?;
        document.source_path = Some(path.to_path_buf());
        Ok(document)
    }

    fn parse(json: &str, source_name: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| crate::Error::InvalidJson {
            source_name: source_name.to_string(),
            error: e,
        })?;
        Self::from_value_named(value, source_name)
    }

    fn from_value_named(value: Value, source_name: &str) -> crate::Result<Self> {
        match value {
            Value::Object(entries) => Ok(Self {
                entries,
                source_path: None,
            }),
            _ => Err(crate::Error::MalformedRoot {
                source_name: source_name.to_string(),
            }),
        }
    }

    /// Declarations in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Human readable origin, used in logs.
    pub fn source_name(&self) -> String {
        self.source_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| IN_MEMORY_SOURCE.to_string())
    }
}
