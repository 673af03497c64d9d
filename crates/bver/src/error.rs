// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for bver operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with bver Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, resolving or querying softwares.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Document root is not an object
    #[error("Expecting object as root in {source_name}")]
    #[diagnostic(
        code(bver::malformed_root),
        help("A version document maps software names to declarations: {{\"name\": \"1.0.0\"}}")
    )]
    MalformedRoot { source_name: String },

    /// No version could be decoded for a software
    #[error("Could not decode version for \"{software}\"")]
    #[diagnostic(
        code(bver::unresolvable_version),
        help("Declare the version as a string, a 'version' field, or an 'active' entry of 'versions'")
    )]
    UnresolvableVersion { software: String },

    /// No version could be decided for an addon
    #[error("Could not decode version for addon \"{addon}\" of \"{software}\"")]
    #[diagnostic(
        code(bver::unresolvable_addon_version),
        help("Set 'options.version' on the addon or declare a software with the same name")
    )]
    UnresolvableAddonVersion { software: String, addon: String },

    /// Options are not an object
    #[error("Expecting object for options of \"{software}\"")]
    #[diagnostic(code(bver::malformed_options))]
    MalformedOptions { software: String },

    /// Addons are not an object
    #[error("Expecting object for addons of \"{software}\"")]
    #[diagnostic(code(bver::malformed_addons))]
    MalformedAddonsCollection { software: String },

    /// An addon declaration is not an object
    #[error("Expecting object as content for addon \"{addon}\" of \"{software}\"")]
    #[diagnostic(code(bver::malformed_addon_entry))]
    MalformedAddonEntry { software: String, addon: String },

    /// Software lookup failed
    #[error("Could not find software \"{0}\"")]
    #[diagnostic(code(bver::software_not_found))]
    SoftwareNotFound(String),

    /// Addon lookup failed
    #[error("Could not find addon \"{0}\"")]
    #[diagnostic(code(bver::addon_not_found))]
    AddonNotFound(String),

    /// Path is not an existing file
    #[error("Invalid file {0:?}")]
    #[diagnostic(code(bver::invalid_file))]
    InvalidFile(PathBuf),

    /// Path is not an existing directory
    #[error("Invalid directory {0:?}")]
    #[diagnostic(code(bver::invalid_directory))]
    InvalidDirectory(PathBuf),

    /// Invalid JSON in a version document
    #[error("Invalid version document {source_name}: {error}")]
    #[diagnostic(code(bver::invalid_json), help("Check the JSON syntax of the document"))]
    InvalidJson {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },

    /// Failed to read file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(bver::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Validation error
    #[error("Validation failed: {0}")]
    #[diagnostic(code(bver::validation_failed))]
    ValidationFailed(String),

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(bver::io_error))]
    Io(#[from] std::io::Error),
}
