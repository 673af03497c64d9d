// Copyright (c) Contributors to the bver project.
// SPDX-License-Identifier: Apache-2.0

//! Loading of version documents from disk into a registry.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::discovery::expand_home;
use crate::{
    discover_sources, resolve_documents, sources_in_directory, ActiveVersions, Document, Error,
    Registry, Result,
};

#[cfg(test)]
#[path = "./loader_test.rs"]
mod loader_test;

/// Reads version documents and resolves them in two stages.
///
/// Raw file contents are cached by path, so repeated loads of the same
/// sources do not touch the disk again until [`Loader::clear_cache`] is
/// called.
#[derive(Debug, Default)]
pub struct Loader {
    cache: HashMap<PathBuf, String>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a single document file.
    ///
    /// The path is canonicalized like discovered sources are, so both share
    /// cache entries. A path that cannot be canonicalized is kept as given.
    pub fn load_file<P: AsRef<Path>>(
        &mut self,
        path: P,
        registry: &mut Registry,
        overrides: Option<&ActiveVersions>,
    ) -> Result<()> {
        let path = expand_home(path.as_ref())?;
        let path = dunce::canonicalize(&path).unwrap_or(path);
        self.load_sources(&[path], registry, overrides)
    }

    /// Load every `*.json` document directly inside a directory.
    pub fn load_directory<P: AsRef<Path>>(
        &mut self,
        directory: P,
        registry: &mut Registry,
        overrides: Option<&ActiveVersions>,
    ) -> Result<()> {
        let sources = sources_in_directory(directory)?;
        self.load_sources(&sources, registry, overrides)
    }

    /// Load documents from files and directories, skipping invalid paths.
    pub fn load_paths<I, P>(
        &mut self,
        paths: I,
        registry: &mut Registry,
        overrides: Option<&ActiveVersions>,
    ) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let sources = discover_sources(paths)?;
        self.load_sources(&sources, registry, overrides)
    }

    /// Read and resolve an ordered list of document files.
    ///
    /// Every document is read before any is resolved, so a parse failure
    /// leaves the registry untouched.
    pub fn load_sources(
        &mut self,
        sources: &[PathBuf],
        registry: &mut Registry,
        overrides: Option<&ActiveVersions>,
    ) -> Result<()> {
        let documents = sources
            .iter()
            .map(|path| self.read_document(path))
            .collect::<Result<Vec<_>>>()?;
        resolve_documents(&documents, registry, overrides)
    }

    /// Parse a document file, reading it from the cache when possible.
    pub fn read_document(&mut self, path: &Path) -> Result<Document> {
        if !path.is_file() {
            return Err(Error::InvalidFile(path.to_path_buf()));
        }

        if self.cache.contains_key(path) {
            tracing::trace!(path = %path.display(), "using cached document");
        } else {
            tracing::debug!(path = %path.display(), "reading document");
            let contents = std::fs::read_to_string(path).map_err(|e| Error::ReadFailed {
                path: path.to_path_buf(),
                error: e,
            })?;
            self.cache.insert(path.to_path_buf(), contents);
        }
        let contents = &self.cache[path];

        Document::from_source(contents, path).inspect_err(|err| {
            tracing::error!(path = %path.display(), "Error on loading version file: {err}");
        })
    }

    /// Whether the contents of `path` are cached.
    pub fn is_cached(&self, path: &Path) -> bool {
        self.cache.contains_key(path)
    }

    /// Forget every cached document so the next load reads from disk.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}
