// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Discovery of version documents from files and directories.

use std::path::{Path, PathBuf};

use crate::{Error, Result, DOCUMENT_EXTENSION};

#[cfg(test)]
#[path = "./discovery_test.rs"]
mod discovery_test;

/// Collect the version documents named by a list of paths.
///
/// Files are taken as-is and directories contribute their `*.json` children
/// sorted by name. Empty and nonexistent paths are skipped. The order of the
/// given paths is kept, which makes resolution deterministic.
pub fn discover_sources<I, P>(paths: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut sources = Vec::new();
    for path in paths {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            continue;
        }
        let path = expand_home(path)?;
        if path.is_file() {
            sources.push(canonical(&path)?);
        } else if path.is_dir() {
            sources.extend(sources_in_directory(&path)?);
        } else {
            tracing::debug!(path = %path.display(), "skipping missing document path");
        }
    }
    Ok(sources)
}

/// List the `*.json` documents directly inside a directory, sorted by path.
pub fn sources_in_directory<P: AsRef<Path>>(directory: P) -> Result<Vec<PathBuf>> {
    let directory = expand_home(directory.as_ref())?;
    if !directory.is_dir() {
        return Err(Error::InvalidDirectory(directory));
    }

    let base = directory.to_str().ok_or_else(|| {
        Error::ValidationFailed(format!(
            "Directory path is not valid unicode: {}",
            directory.display()
        ))
    })?;
    let pattern = format!("{}/*.{DOCUMENT_EXTENSION}", glob::Pattern::escape(base));

    let entries = glob::glob(&pattern)
        .map_err(|e| Error::ValidationFailed(format!("Invalid pattern '{pattern}': {e}")))?;

    let mut sources = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::Io(e.into_error()))?;
        if path.is_file() {
            sources.push(canonical(&path)?);
        }
    }
    sources.sort();
    Ok(sources)
}

/// Expand a leading `~` to the home directory.
pub(crate) fn expand_home(path: &Path) -> Result<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = dirs::home_dir()
        .ok_or_else(|| Error::ValidationFailed("Cannot resolve ~ without HOME".to_string()))?;
    Ok(home.join(rest))
}

fn canonical(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| Error::ReadFailed {
        path: path.to_path_buf(),
        error: e,
    })
}
