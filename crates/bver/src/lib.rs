// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! bver - Declarative Software Version Resolution
//!
//! This crate resolves, from a set of JSON documents, which version of each
//! named software and of its optional addons is active, and exposes the
//! result through normalized keys suitable for environment variable names.
//!
//! # Overview
//!
//! Documents are loaded in two stages: the first registers every software
//! with its version and options, the second attaches addons. A software
//! declared in one document can therefore be referenced as an addon from any
//! other document of the same batch.
//!
//! # Example
//!
//! ```json
//! {
//!     "python": "3.11.4",
//!     "maya": {
//!         "version": "2024",
//!         "options": { "location": "/opt/maya" },
//!         "addons": {
//!             "python": { "options": { "enabled": true } }
//!         }
//!     },
//!     "nuke": {
//!         "active": "14.0",
//!         "versions": {
//!             "13.2": {},
//!             "14.0": { "options": { "license": "server" } }
//!         }
//!     }
//! }
//! ```
//!
//! Setting `BVER_NUKE_VERSION=13.2` in the environment selects the other
//! declared version of `nuke`.

pub mod addon;
pub mod discovery;
pub mod document;
pub mod environment;
pub mod error;
pub mod key;
pub mod loader;
pub mod overrides;
pub mod query;
pub mod registry;
pub mod resolve;
pub mod software;
pub mod versioned;

pub use addon::Addon;
pub use discovery::{discover_sources, sources_in_directory};
pub use document::Document;
pub use environment::{environment_variables, generate_startup_script, EnvVar};
pub use error::{Error, Result};
pub use key::{to_bver_key, BVER_PREFIX};
pub use loader::Loader;
pub use overrides::ActiveVersions;
pub use query::Query;
pub use registry::Registry;
pub use resolve::{
    ingest_addons, ingest_versions_only, resolve_document, resolve_documents, ResolveOptions,
};
pub use software::Software;
pub use versioned::{Options, Versioned};

/// Extension of the documents picked up from directories.
pub const DOCUMENT_EXTENSION: &str = "json";
