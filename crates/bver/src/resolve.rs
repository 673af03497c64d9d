// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Resolution of document declarations into registered softwares.
//!
//! Three declaration shapes are accepted per software:
//!
//! ```json
//! {
//!     "a": "1.0.0",
//!     "b": {
//!         "version": "1.2.5",
//!         "options": { "foo": 10 },
//!         "addons": { "a": { "options": { "enabled": false } } }
//!     },
//!     "c": {
//!         "active": "1.2.5",
//!         "versions": { "1.2.5": { "addons": {} } }
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::key::to_bver_key;
use crate::{ActiveVersions, Addon, Document, Error, Options, Registry, Result};

#[cfg(test)]
#[path = "./resolve_test.rs"]
mod resolve_test;

const VERSION_FIELD: &str = "version";
const OPTIONS_FIELD: &str = "options";
const ADDONS_FIELD: &str = "addons";
const ACTIVE_FIELD: &str = "active";
const VERSIONS_FIELD: &str = "versions";

/// Options controlling a single resolution call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveOptions<'a> {
    /// Version pins that win over what documents declare.
    pub overrides: Option<&'a ActiveVersions>,

    /// Register versions and options only, leaving addons untouched.
    pub ignore_addons: bool,
}

/// Software versions as the versions stage left them, by name.
type VersionSnapshot = HashMap<String, String>;

/// The parts of a declaration that survive version selection.
#[derive(Debug, Default)]
struct Declared<'a> {
    version: Option<&'a str>,
    options: Option<&'a Value>,
    addons: Option<&'a Value>,
}

impl<'a> Declared<'a> {
    fn from_object(object: &'a Map<String, Value>) -> Self {
        Self {
            version: object.get(VERSION_FIELD).and_then(Value::as_str),
            options: object.get(OPTIONS_FIELD),
            addons: object.get(ADDONS_FIELD),
        }
    }
}

/// Resolve every declaration of a document into the registry.
///
/// Declarations are applied in document order. The first failure aborts the
/// rest of the document; softwares already applied stay registered.
pub fn resolve_document(
    document: &Document,
    registry: &mut Registry,
    options: ResolveOptions<'_>,
) -> Result<()> {
    resolve_document_with(document, registry, &options, None)
}

fn resolve_document_with(
    document: &Document,
    registry: &mut Registry,
    options: &ResolveOptions<'_>,
    snapshot: Option<&VersionSnapshot>,
) -> Result<()> {
    for (name, declaration) in document.entries() {
        resolve_software(name, declaration, registry, options, snapshot)?;
    }
    Ok(())
}

/// First stage: register the version and options of every software.
pub fn ingest_versions_only(
    documents: &[Document],
    registry: &mut Registry,
    overrides: Option<&ActiveVersions>,
) -> Result<()> {
    let options = ResolveOptions {
        overrides,
        ignore_addons: true,
    };
    ingest(documents, registry, options, None)
}

/// Second stage: re-apply every document, now attaching addons.
///
/// Run after [`ingest_versions_only`] over the same documents so that any
/// software referenced as an addon is already registered. Addons without a
/// declared version take the version their software had at the end of the
/// first stage, whatever the entry order inside the documents.
pub fn ingest_addons(
    documents: &[Document],
    registry: &mut Registry,
    overrides: Option<&ActiveVersions>,
) -> Result<()> {
    let options = ResolveOptions {
        overrides,
        ignore_addons: false,
    };
    let snapshot: VersionSnapshot = registry
        .softwares()
        .map(|s| (s.name().to_string(), s.version().to_string()))
        .collect();
    ingest(documents, registry, options, Some(&snapshot))
}

/// Run both stages over a batch of documents.
pub fn resolve_documents(
    documents: &[Document],
    registry: &mut Registry,
    overrides: Option<&ActiveVersions>,
) -> Result<()> {
    ingest_versions_only(documents, registry, overrides)?;
    ingest_addons(documents, registry, overrides)
}

fn ingest(
    documents: &[Document],
    registry: &mut Registry,
    options: ResolveOptions<'_>,
    snapshot: Option<&VersionSnapshot>,
) -> Result<()> {
    tracing::debug!(
        documents = documents.len(),
        ignore_addons = options.ignore_addons,
        "resolving documents"
    );
    for document in documents {
        resolve_document_with(document, registry, &options, snapshot).inspect_err(|err| {
            tracing::error!(source = %document.source_name(), "Error on loading version file: {err}");
        })?;
    }
    Ok(())
}

fn resolve_software(
    name: &str,
    declaration: &Value,
    registry: &mut Registry,
    options: &ResolveOptions<'_>,
    snapshot: Option<&VersionSnapshot>,
) -> Result<()> {
    let key = to_bver_key(name, None);
    let pinned = options.overrides.and_then(|o| o.get(&key));

    let Some(declared) = select_declaration(name, declaration, pinned)? else {
        tracing::debug!(
            software = name,
            pinned = ?pinned,
            "no declaration for the selected version, skipping"
        );
        return Ok(());
    };

    let version = pinned
        .or(declared.version)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::UnresolvableVersion {
            software: name.to_string(),
        })?;

    let software_options = match declared.options {
        None => Options::new(),
        Some(Value::Object(object)) => to_options(object),
        Some(_) => {
            return Err(Error::MalformedOptions {
                software: name.to_string(),
            });
        }
    };

    registry.add_software_info(name, version, software_options)?;

    if options.ignore_addons {
        return Ok(());
    }

    if let Some(addons) = declared.addons {
        let addons = parse_addons(name, addons, registry, snapshot)?;
        registry.add_addons(name, addons)?;
    }

    Ok(())
}

/// Narrow a declaration to the parts that apply.
///
/// Returns `None` when a multi-version declaration has no entry for the
/// selected version; such softwares are skipped rather than rejected.
fn select_declaration<'a>(
    name: &str,
    declaration: &'a Value,
    pinned: Option<&'a str>,
) -> Result<Option<Declared<'a>>> {
    let unresolvable = || Error::UnresolvableVersion {
        software: name.to_string(),
    };

    match declaration {
        Value::Object(object) => match object.get(VERSIONS_FIELD) {
            Some(versions) => {
                let versions = versions.as_object().ok_or_else(unresolvable)?;
                let chosen = pinned
                    .or_else(|| object.get(ACTIVE_FIELD).and_then(Value::as_str))
                    .ok_or_else(unresolvable)?;
                let Some(selected) = versions.get(chosen) else {
                    return Ok(None);
                };
                let selected = selected.as_object().ok_or_else(unresolvable)?;
                Ok(Some(Declared {
                    version: Some(chosen),
                    ..Declared::from_object(selected)
                }))
            }
            None => Ok(Some(Declared::from_object(object))),
        },
        Value::String(version) => Ok(Some(Declared {
            version: Some(version.as_str()),
            ..Default::default()
        })),
        _ => Ok(Some(Declared::default())),
    }
}

/// Validate and build the whole addons block before anything is attached.
fn parse_addons(
    software: &str,
    addons: &Value,
    registry: &Registry,
    snapshot: Option<&VersionSnapshot>,
) -> Result<Vec<Addon>> {
    let Value::Object(addons) = addons else {
        return Err(Error::MalformedAddonsCollection {
            software: software.to_string(),
        });
    };

    let mut parsed = Vec::with_capacity(addons.len());
    for (addon_name, data) in addons {
        let malformed = || Error::MalformedAddonEntry {
            software: software.to_string(),
            addon: addon_name.clone(),
        };

        let Value::Object(data) = data else {
            return Err(malformed());
        };
        let addon_options = match data.get(OPTIONS_FIELD) {
            None => Options::new(),
            Some(Value::Object(object)) => to_options(object),
            Some(_) => return Err(malformed()),
        };

        let version = addon_options
            .get(VERSION_FIELD)
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .or_else(|| snapshot.and_then(|versions| versions.get(addon_name).cloned()))
            .or_else(|| registry.get(addon_name).map(|s| s.version().to_string()))
            .ok_or_else(|| Error::UnresolvableAddonVersion {
                software: software.to_string(),
                addon: addon_name.clone(),
            })?;

        let mut addon = Addon::new(addon_name.as_str(), version)?;
        addon.merge_options(addon_options);
        parsed.push(addon);
    }
    Ok(parsed)
}

fn to_options(object: &Map<String, Value>) -> Options {
    object
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
