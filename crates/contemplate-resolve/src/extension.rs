//! Type-tag to file-extension mapping.
//!
//! A single name can address several resources that share a base name but
//! differ in kind: a page template, the controller that handles `GET` for it,
//! another for `POST`. The type tag selects which one, and this table maps the
//! tag to the file extension appended to the base name.
//!
//! | Type tag | Extension | `"profile"` resolves to |
//! |----------|-----------|-------------------------|
//! | (none) | `php` | `profile.php` |
//! | `__TEMPLATE__` | `tpl.php` | `profile.tpl.php` |
//! | `__HTTP_GET__` | `get.php` | `profile.get.php` |
//! | `raw` | no extension | `profile` |
//!
//! Unknown tags fall back to the default entry. A tag explicitly mapped to
//! "no extension" does not.

use std::collections::HashMap;

/// Extension used when nothing else is configured.
pub const DEFAULT_FILE_EXTENSION: &str = "php";

/// Maps optional type tags to file extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileExtensionTable {
    default: Option<String>,
    by_type: HashMap<String, Option<String>>,
}

impl Default for FileExtensionTable {
    fn default() -> Self {
        Self::new(Some(DEFAULT_FILE_EXTENSION))
    }
}

impl FileExtensionTable {
    /// Creates a table with the given default extension and no typed entries.
    ///
    /// Pass `None` to resolve untyped names without any extension.
    pub fn new(default: Option<impl Into<String>>) -> Self {
        Self {
            default: default.map(Into::into),
            by_type: HashMap::new(),
        }
    }

    /// Sets an extension.
    ///
    /// With `type_tag = None` this replaces the default entry; otherwise it
    /// sets the entry for that tag. `extension = None` means "no extension".
    pub fn set(&mut self, extension: Option<impl Into<String>>, type_tag: Option<&str>) {
        let extension = extension.map(Into::into);
        match type_tag {
            Some(tag) => {
                self.by_type.insert(tag.to_string(), extension);
            }
            None => self.default = extension,
        }
    }

    /// Builder form of [`set`](Self::set) for a typed entry.
    pub fn with_typed(mut self, type_tag: &str, extension: Option<impl Into<String>>) -> Self {
        self.set(extension, Some(type_tag));
        self
    }

    /// Returns the extension for `type_tag`.
    ///
    /// A known tag returns its own entry, which may be `None`. An unknown tag,
    /// or no tag at all, returns the default.
    pub fn get(&self, type_tag: Option<&str>) -> Option<&str> {
        match type_tag.and_then(|tag| self.by_type.get(tag)) {
            Some(entry) => entry.as_deref(),
            None => self.default.as_deref(),
        }
    }

    /// The default extension.
    pub fn default_extension(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Whether `type_tag` has its own entry.
    pub fn has_type(&self, type_tag: &str) -> bool {
        self.by_type.contains_key(type_tag)
    }
}
