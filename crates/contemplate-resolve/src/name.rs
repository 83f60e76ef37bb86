//! Resource name parsing.
//!
//! A resource name is either a bare base name or a namespaced one:
//!
//! | Raw name | Namespace | Base name | File (default extension `php`) |
//! |----------|-----------|-----------|--------------------------------|
//! | `"profile"` | none | `profile` | `profile.php` |
//! | `"emails::welcome"` | `emails` | `welcome` | `welcome.php` |
//! | `"partials/nav"` | none | `partials/nav` | `partials/nav.php` |
//! | `"a::b::c"` | parse error | | |
//!
//! Parsing validates the namespace against the catalog's folders and appends
//! the extension selected by the type tag. A [`ResourceName`] borrows the
//! [`Catalog`] it was parsed against, lives for a single resolution, and is
//! never modified after construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::ResolveError;
use crate::folder::Folder;
use crate::strategy::ResolveStrategy;

/// Separator between namespace and base name.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// A parsed, validated resource name.
#[derive(Clone)]
pub struct ResourceName<'a> {
    catalog: &'a Catalog,
    raw: String,
    folder: Option<&'a Folder>,
    base_name: String,
    type_tag: Option<String>,
    file: String,
}

impl<'a> ResourceName<'a> {
    /// Parses `raw` against `catalog`.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::MalformedName`] if `::` appears more than once
    /// - [`ResolveError::UnknownNamespace`] if the namespace is not registered
    /// - [`ResolveError::EmptyBaseName`] if the base component is empty
    pub fn parse(raw: &str, type_tag: Option<&str>, catalog: &'a Catalog) -> Result<Self, ResolveError> {
        let (folder, base_name) = match raw.matches(NAMESPACE_SEPARATOR).count() {
            0 => (None, raw),
            1 => {
                let (namespace, base) = raw
                    .split_once(NAMESPACE_SEPARATOR)
                    .ok_or_else(|| ResolveError::MalformedName { name: raw.into() })?;
                (Some(catalog.folders().lookup(namespace)?), base)
            }
            _ => return Err(ResolveError::MalformedName { name: raw.into() }),
        };

        if base_name.is_empty() {
            return Err(ResolveError::EmptyBaseName { name: raw.into() });
        }

        let file = match catalog.file_extension(type_tag) {
            Some(extension) => format!("{}.{}", base_name, extension),
            None => base_name.to_string(),
        };

        Ok(Self {
            catalog,
            raw: raw.to_string(),
            folder,
            base_name: base_name.to_string(),
            type_tag: type_tag.map(str::to_string),
            file,
        })
    }

    /// The name exactly as given.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The namespace, if the name had one.
    pub fn namespace(&self) -> Option<&str> {
        self.folder.map(Folder::name)
    }

    /// The folder the namespace refers to.
    pub fn folder(&self) -> Option<&'a Folder> {
        self.folder
    }

    /// The base component, without extension.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// The type tag the name was parsed with.
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    /// The base name with the type-appropriate extension appended.
    pub fn file(&self) -> &str {
        &self.file
    }

    /// The catalog this name was parsed against.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The candidate path for this name under `root`.
    ///
    /// The file is always appended below `root`; a leading `/` in the name
    /// does not make it absolute.
    pub fn candidate_in(&self, root: &Path) -> PathBuf {
        root.join(self.file.trim_start_matches('/'))
    }

    /// Resolves this name with `strategy`.
    pub fn resolve_with(&self, strategy: &dyn ResolveStrategy) -> Result<PathBuf, ResolveError> {
        strategy.resolve(self)
    }

    /// Re-parses the same raw name with a different type tag.
    pub fn with_type(&self, type_tag: Option<&str>) -> Result<ResourceName<'a>, ResolveError> {
        ResourceName::parse(&self.raw, type_tag, self.catalog)
    }
}

impl fmt::Debug for ResourceName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceName")
            .field("raw", &self.raw)
            .field("namespace", &self.namespace())
            .field("base_name", &self.base_name)
            .field("type_tag", &self.type_tag)
            .field("file", &self.file)
            .finish()
    }
}

impl fmt::Display for ResourceName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
