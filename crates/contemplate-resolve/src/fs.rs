//! Read-only filesystem probes.
//!
//! Resolution only ever asks two questions of the filesystem: "is this a
//! directory?" and "is this a regular file?". [`FileSystem`] captures exactly
//! that, so the same resolution rules run against the real disk
//! ([`OsFileSystem`]) or an in-memory layout ([`MemoryFileSystem`]).
//!
//! No answer is cached. Every probe hits the backing store, so files added or
//! removed between two resolutions are observed without a restart.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Existence checks used by registration and resolution.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Returns `true` if `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// The real filesystem, probed through `std::fs` metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// An in-memory directory tree.
///
/// Adding a file also adds every ancestor directory, so a layout can be
/// described by its files alone:
///
/// ```rust
/// use contemplate_resolve::{FileSystem, MemoryFileSystem};
/// use std::path::Path;
///
/// let fs = MemoryFileSystem::new()
///     .with_file("/templates/a/home.php")
///     .with_dir("/templates/b");
///
/// assert!(fs.is_dir(Path::new("/templates")));
/// assert!(fs.is_file(Path::new("/templates/a/home.php")));
/// assert!(!fs.is_file(Path::new("/templates/b/home.php")));
/// ```
///
/// Interior mutability lets tests add or remove files while an engine holds
/// the filesystem behind an `Arc`.
#[derive(Default)]
pub struct MemoryFileSystem {
    tree: RwLock<Tree>,
}

#[derive(Default)]
struct Tree {
    dirs: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
}

impl MemoryFileSystem {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory (and its ancestors), returning `self` for chaining.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path);
        self
    }

    /// Adds a file (and its ancestor directories), returning `self` for chaining.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path);
        self
    }

    /// Adds a directory and its ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut tree = self.write();
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            tree.dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Adds a file and its ancestor directories.
    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.write().files.insert(path.to_path_buf());
    }

    /// Removes a file. Directories are left in place.
    pub fn remove_file(&self, path: impl AsRef<Path>) -> bool {
        self.write().files.remove(path.as_ref())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Tree> {
        self.tree.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Tree> {
        self.tree.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        self.read().dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.read().files.contains(path)
    }
}

impl fmt::Debug for MemoryFileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.read();
        f.debug_struct("MemoryFileSystem")
            .field("dirs", &tree.dirs.len())
            .field("files", &tree.files.len())
            .finish()
    }
}
