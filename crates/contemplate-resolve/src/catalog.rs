//! The configuration a name is parsed and resolved against.
//!
//! [`Catalog`] owns the default directory, the [`FileExtensionTable`], the
//! [`FolderTable`] and the [`FileSystem`] used to probe them. It is the single
//! place these tables are mutated; [`ResourceName`]s borrow it for the
//! duration of one resolution.
//!
//! Mutation takes `&mut self`, reads take `&self`, so a catalog can be shared
//! across threads for resolution once setup is finished. There is no internal
//! locking.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ResolveError;
use crate::extension::FileExtensionTable;
use crate::folder::{Folder, FolderTable};
use crate::fs::{FileSystem, OsFileSystem};
use crate::name::ResourceName;

/// Default directory, extension table and folder table, plus the filesystem
/// they are checked against.
#[derive(Clone)]
pub struct Catalog {
    fs: Arc<dyn FileSystem>,
    directory: Option<PathBuf>,
    extensions: FileExtensionTable,
    folders: FolderTable,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates a catalog over the real filesystem with no default directory
    /// and the default extension table.
    pub fn new() -> Self {
        Self::with_fs(Arc::new(OsFileSystem))
    }

    /// Creates a catalog over the given filesystem.
    pub fn with_fs(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            directory: None,
            extensions: FileExtensionTable::default(),
            folders: FolderTable::new(),
        }
    }

    /// The filesystem used for every existence check.
    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    /// A shared handle to the filesystem.
    pub fn fs_handle(&self) -> Arc<dyn FileSystem> {
        Arc::clone(&self.fs)
    }

    /// Sets or clears the default directory.
    ///
    /// # Errors
    ///
    /// [`ResolveError::DirectoryNotFound`] if `directory` is `Some` and is not
    /// an existing directory. The previous value is kept in that case.
    pub fn set_directory(&mut self, directory: Option<impl Into<PathBuf>>) -> Result<(), ResolveError> {
        let directory = directory.map(Into::into);
        if let Some(path) = &directory {
            if !self.fs.is_dir(path) {
                return Err(ResolveError::directory_not_found(path));
            }
        }
        tracing::debug!(
            target: "contemplate_resolve::catalog",
            directory = ?directory,
            "default directory set"
        );
        self.directory = directory;
        Ok(())
    }

    /// The default directory, if any.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Sets the default extension (`type_tag = None`) or a typed extension.
    pub fn set_file_extension(&mut self, extension: Option<impl Into<String>>, type_tag: Option<&str>) {
        self.extensions.set(extension, type_tag);
    }

    /// Extension for a type tag, falling back to the default.
    pub fn file_extension(&self, type_tag: Option<&str>) -> Option<&str> {
        self.extensions.get(type_tag)
    }

    /// The extension table.
    pub fn extensions(&self) -> &FileExtensionTable {
        &self.extensions
    }

    /// Replaces the extension table.
    pub fn set_extensions(&mut self, extensions: FileExtensionTable) {
        self.extensions = extensions;
    }

    /// Registers a namespaced folder. See [`FolderTable::register`].
    pub fn add_folder(
        &mut self,
        namespace: impl Into<String>,
        directory: impl Into<PathBuf>,
        fallback: bool,
    ) -> Result<(), ResolveError> {
        self.folders
            .register(namespace, directory, fallback, self.fs.as_ref())
    }

    /// Removes a namespaced folder.
    pub fn remove_folder(&mut self, namespace: &str) -> Result<Folder, ResolveError> {
        self.folders.unregister(namespace)
    }

    /// The folder table.
    pub fn folders(&self) -> &FolderTable {
        &self.folders
    }

    /// Parses `raw` against this catalog. See [`ResourceName::parse`].
    pub fn parse<'a>(&'a self, raw: &str, type_tag: Option<&str>) -> Result<ResourceName<'a>, ResolveError> {
        ResourceName::parse(raw, type_tag, self)
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("directory", &self.directory)
            .field("extensions", &self.extensions)
            .field("folders", &self.folders)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFileSystem;

    fn catalog() -> Catalog {
        Catalog::with_fs(Arc::new(
            MemoryFileSystem::new()
                .with_dir("/templates")
                .with_dir("/templates/folder"),
        ))
    }

    #[test]
    fn test_set_directory() {
        let mut catalog = catalog();
        catalog.set_directory(Some("/templates")).unwrap();
        assert_eq!(catalog.directory(), Some(Path::new("/templates")));
    }

    #[test]
    fn test_set_null_directory() {
        let mut catalog = catalog();
        catalog.set_directory(Some("/templates")).unwrap();
        catalog.set_directory(None::<PathBuf>).unwrap();
        assert_eq!(catalog.directory(), None);
    }

    #[test]
    fn test_set_invalid_directory_keeps_previous() {
        let mut catalog = catalog();
        catalog.set_directory(Some("/templates")).unwrap();
        let err = catalog.set_directory(Some("/does/not/exist")).unwrap_err();
        assert!(matches!(err, ResolveError::DirectoryNotFound { .. }));
        assert_eq!(catalog.directory(), Some(Path::new("/templates")));
    }

    #[test]
    fn test_file_extension_roundtrip() {
        let mut catalog = catalog();
        assert_eq!(catalog.file_extension(None), Some("php"));
        catalog.set_file_extension(Some("tpl"), None);
        catalog.set_file_extension(Some("get.php"), Some("__HTTP_GET__"));
        assert_eq!(catalog.file_extension(None), Some("tpl"));
        assert_eq!(catalog.file_extension(Some("__HTTP_GET__")), Some("get.php"));
    }

    #[test]
    fn test_add_and_remove_folder() {
        let mut catalog = catalog();
        catalog.add_folder("folder", "/templates/folder", false).unwrap();
        assert_eq!(
            catalog.folders().lookup("folder").unwrap().path(),
            Path::new("/templates/folder")
        );

        catalog.remove_folder("folder").unwrap();
        assert!(!catalog.folders().contains("folder"));
    }
}
