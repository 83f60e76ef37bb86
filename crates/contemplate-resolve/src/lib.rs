//! # Contemplate Resolve - Resource Name Resolution
//!
//! `contemplate-resolve` turns a logical resource name such as `"profile"` or
//! `"emails::welcome"` into a concrete file path. It is the lookup layer of the
//! `contemplate` engine and can be used on its own.
//!
//! ## Core Concepts
//!
//! - [`Catalog`]: default directory, [`FileExtensionTable`] and
//!   [`FolderTable`], checked against a [`FileSystem`]
//! - [`ResourceName`]: a parsed `[namespace::]basename` plus the file name
//!   selected by its type tag
//! - [`ResolveStrategy`]: pluggable lookup, with [`DefaultStrategy`]
//!   (directory and folders) and [`ThemeStrategy`] (layered themes)
//! - [`ResolveError`]: every failure, with the ordered list of probed paths
//!   when nothing matched
//!
//! ## Quick Start
//!
//! ```rust
//! use contemplate_resolve::{Catalog, DefaultStrategy, MemoryFileSystem, ResolveStrategy};
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! let fs = MemoryFileSystem::new()
//!     .with_file("/app/templates/profile.php")
//!     .with_file("/app/emails/welcome.tpl.php");
//!
//! let mut catalog = Catalog::with_fs(Arc::new(fs));
//! catalog.set_directory(Some("/app/templates")).unwrap();
//! catalog.add_folder("emails", "/app/emails", false).unwrap();
//! catalog.set_file_extension(Some("tpl.php"), Some("__TEMPLATE__"));
//!
//! let strategy = DefaultStrategy::new();
//!
//! let profile = catalog.parse("profile", None).unwrap();
//! assert_eq!(strategy.resolve(&profile).unwrap(), PathBuf::from("/app/templates/profile.php"));
//!
//! let welcome = catalog.parse("emails::welcome", Some("__TEMPLATE__")).unwrap();
//! assert_eq!(strategy.resolve(&welcome).unwrap(), PathBuf::from("/app/emails/welcome.tpl.php"));
//! ```

mod catalog;
mod error;
mod extension;
mod folder;
mod fs;
mod name;
pub mod strategy;
mod theme;

pub use catalog::Catalog;
pub use error::{ResolveError, TriedPath};
pub use extension::{FileExtensionTable, DEFAULT_FILE_EXTENSION};
pub use folder::{Folder, FolderTable};
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use name::{ResourceName, NAMESPACE_SEPARATOR};
pub use strategy::{DefaultStrategy, FallbackOrder, ResolveStrategy, ThemeStrategy};
pub use theme::{Theme, ThemeHierarchy};
