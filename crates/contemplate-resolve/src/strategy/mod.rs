//! Pluggable path resolution.
//!
//! A [`ResolveStrategy`] turns a parsed [`ResourceName`] into an existing file
//! path, or fails with [`ResolveError::TemplateNotFound`] listing every
//! candidate it probed. Callers only ever see the trait, so the active
//! strategy can be swapped without touching them.
//!
//! Two strategies ship with the crate:
//!
//! - [`DefaultStrategy`]: default directory plus namespaced folders, with
//!   fallback folders searched after an explicit namespace misses.
//! - [`ThemeStrategy`]: an ordered [`ThemeHierarchy`](crate::ThemeHierarchy),
//!   first match wins.
//!
//! Resolution is stateless. Nothing is cached between calls; each call probes
//! the filesystem again.

mod default;
mod theme;

use std::path::PathBuf;

pub use default::{DefaultStrategy, FallbackOrder};
pub use theme::ThemeStrategy;

use crate::error::ResolveError;
use crate::name::ResourceName;

/// Resolves a parsed name to an existing file.
pub trait ResolveStrategy: Send + Sync {
    /// Returns the path of the first candidate that exists as a regular file.
    ///
    /// # Errors
    ///
    /// [`ResolveError::TemplateNotFound`] when every candidate misses, or a
    /// configuration error the strategy detects before probing.
    fn resolve(&self, name: &ResourceName<'_>) -> Result<PathBuf, ResolveError>;
}

impl<F> ResolveStrategy for F
where
    F: Fn(&ResourceName<'_>) -> Result<PathBuf, ResolveError> + Send + Sync,
{
    fn resolve(&self, name: &ResourceName<'_>) -> Result<PathBuf, ResolveError> {
        self(name)
    }
}
