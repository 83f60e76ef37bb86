//! Namespaced template folders.
//!
//! A folder binds a short namespace to a root directory so that
//! `"emails::welcome"` resolves under the `emails` folder instead of the
//! default directory. Folders are kept in registration order; that order is
//! the search order for fallback folders (see
//! [`DefaultStrategy`](crate::DefaultStrategy)).
//!
//! Registration is strict: a namespace can only be registered once, and its
//! directory must exist at the time of registration.

use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::fs::FileSystem;

/// A registered namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    name: String,
    path: PathBuf,
    fallback: bool,
}

impl Folder {
    /// The namespace.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The root directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this folder is searched when a different namespace misses.
    pub fn fallback(&self) -> bool {
        self.fallback
    }
}

/// Ordered collection of namespaced folders.
#[derive(Debug, Clone, Default)]
pub struct FolderTable {
    folders: Vec<Folder>,
}

impl FolderTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `namespace` at `directory`.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::DuplicateNamespace`] if the namespace is taken; the
    ///   existing registration is left untouched.
    /// - [`ResolveError::DirectoryNotFound`] if `directory` is not an existing
    ///   directory according to `fs`.
    pub fn register(
        &mut self,
        namespace: impl Into<String>,
        directory: impl Into<PathBuf>,
        fallback: bool,
        fs: &dyn FileSystem,
    ) -> Result<(), ResolveError> {
        let name = namespace.into();
        let path = directory.into();

        if self.contains(&name) {
            return Err(ResolveError::DuplicateNamespace { namespace: name });
        }
        if !fs.is_dir(&path) {
            return Err(ResolveError::directory_not_found(&path));
        }

        tracing::debug!(
            target: "contemplate_resolve::folder",
            namespace = %name,
            path = %path.display(),
            fallback,
            "registered folder"
        );
        self.folders.push(Folder {
            name,
            path,
            fallback,
        });
        Ok(())
    }

    /// Removes a namespace, returning its folder.
    pub fn unregister(&mut self, namespace: &str) -> Result<Folder, ResolveError> {
        let index = self
            .folders
            .iter()
            .position(|f| f.name == namespace)
            .ok_or_else(|| ResolveError::UnknownNamespace {
                namespace: namespace.to_string(),
            })?;

        tracing::debug!(target: "contemplate_resolve::folder", namespace, "unregistered folder");
        Ok(self.folders.remove(index))
    }

    /// Looks up a namespace.
    pub fn lookup(&self, namespace: &str) -> Result<&Folder, ResolveError> {
        self.folders
            .iter()
            .find(|f| f.name == namespace)
            .ok_or_else(|| ResolveError::UnknownNamespace {
                namespace: namespace.to_string(),
            })
    }

    /// Returns `true` if the namespace is registered.
    pub fn contains(&self, namespace: &str) -> bool {
        self.folders.iter().any(|f| f.name == namespace)
    }

    /// All folders in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Folder> {
        self.folders.iter()
    }

    /// Fallback-marked folders in registration order.
    pub fn fallbacks(&self) -> impl DoubleEndedIterator<Item = &Folder> {
        self.folders.iter().filter(|f| f.fallback)
    }

    /// Number of registered folders.
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    /// Returns `true` if no folders are registered.
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
