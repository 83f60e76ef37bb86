//! Default directory and namespaced folder lookup.

use std::path::PathBuf;

use crate::error::{ResolveError, TriedPath};
use crate::folder::Folder;
use crate::name::ResourceName;

use super::ResolveStrategy;

/// Order in which fallback folders are searched after a namespace misses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackOrder {
    /// First registered, first searched.
    #[default]
    Registration,
    /// Last registered, first searched.
    ReverseRegistration,
}

/// Resolves names against the catalog's default directory and folders.
///
/// Unnamespaced names probe exactly one candidate, `directory/file`. Resolving
/// one without a default directory is a configuration error
/// ([`ResolveError::NoDefaultDirectory`]), reported before any probe.
///
/// Namespaced names probe, in order:
///
/// 1. the requested folder
/// 2. every other fallback-marked folder, in [`FallbackOrder`]
/// 3. the default directory, when the requested folder is itself marked
///    fallback and a default directory is configured
///
/// The first candidate that exists as a regular file wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrategy {
    fallback_order: FallbackOrder,
}

impl DefaultStrategy {
    /// Creates the strategy with registration-order fallback search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback folder search order.
    pub fn with_fallback_order(mut self, order: FallbackOrder) -> Self {
        self.fallback_order = order;
        self
    }

    /// The fallback folder search order.
    pub fn fallback_order(&self) -> FallbackOrder {
        self.fallback_order
    }

    fn candidates(&self, name: &ResourceName<'_>) -> Result<Vec<PathBuf>, ResolveError> {
        let catalog = name.catalog();

        let Some(folder) = name.folder() else {
            let directory = catalog
                .directory()
                .ok_or_else(|| ResolveError::NoDefaultDirectory {
                    name: name.raw().to_string(),
                })?;
            return Ok(vec![name.candidate_in(directory)]);
        };

        let mut candidates = vec![name.candidate_in(folder.path())];

        let others = catalog
            .folders()
            .fallbacks()
            .filter(|f| f.name() != folder.name());
        let others: Vec<&Folder> = match self.fallback_order {
            FallbackOrder::Registration => others.collect(),
            FallbackOrder::ReverseRegistration => others.rev().collect(),
        };
        candidates.extend(others.iter().map(|f| name.candidate_in(f.path())));

        if folder.fallback() {
            if let Some(directory) = catalog.directory() {
                candidates.push(name.candidate_in(directory));
            }
        }

        Ok(candidates)
    }
}

impl ResolveStrategy for DefaultStrategy {
    fn resolve(&self, name: &ResourceName<'_>) -> Result<PathBuf, ResolveError> {
        let fs = name.catalog().fs();
        let mut tried = Vec::new();

        for candidate in self.candidates(name)? {
            tracing::trace!(
                target: "contemplate_resolve::strategy",
                name = name.raw(),
                candidate = %candidate.display(),
                "probing"
            );
            if fs.is_file(&candidate) {
                tracing::debug!(
                    target: "contemplate_resolve::strategy",
                    name = name.raw(),
                    path = %candidate.display(),
                    "resolved"
                );
                return Ok(candidate);
            }
            tried.push(TriedPath::plain(candidate));
        }

        tracing::debug!(
            target: "contemplate_resolve::strategy",
            name = name.raw(),
            tried = tried.len(),
            "not found"
        );
        Err(ResolveError::TemplateNotFound {
            name: name.raw().to_string(),
            tried,
        })
    }
}
