//! Themes and theme hierarchies.
//!
//! A [`Theme`] is a named root directory. A [`ThemeHierarchy`] orders themes
//! from most to least specific, so a child theme listed before its parent
//! overrides any file the parent also provides:
//!
//! ```text
//! hierarchy: [child, parent, base]
//!
//! child/  home.php             ← "home" resolves here
//! parent/ home.php  nav.php    ← "nav" resolves here
//! base/   nav.php   footer.php ← "footer" resolves here
//! ```
//!
//! A hierarchy is fixed once built.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::fs::FileSystem;

/// A named root directory taking part in a hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    directory: PathBuf,
}

impl Theme {
    /// Creates a theme. The directory is checked when the hierarchy is
    /// verified, not here.
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
        }
    }

    /// The theme name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The theme's root directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.directory.display())
    }
}

/// Themes in search priority order (first = checked first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeHierarchy {
    themes: Vec<Theme>,
}

impl ThemeHierarchy {
    /// Builds a hierarchy; iteration order is priority order.
    pub fn new(themes: impl IntoIterator<Item = Theme>) -> Self {
        Self {
            themes: themes.into_iter().collect(),
        }
    }

    /// Checks that every theme directory exists.
    ///
    /// # Errors
    ///
    /// [`ResolveError::DirectoryNotFound`] naming the first missing directory.
    pub fn verify(&self, fs: &dyn FileSystem) -> Result<(), ResolveError> {
        match self.themes.iter().find(|t| !fs.is_dir(&t.directory)) {
            Some(missing) => Err(ResolveError::directory_not_found(&missing.directory)),
            None => Ok(()),
        }
    }

    /// Themes in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, Theme> {
        self.themes.iter()
    }

    /// Theme names in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.themes.iter().map(Theme::name).collect()
    }

    /// Number of themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Returns `true` for an empty hierarchy.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl FromIterator<Theme> for ThemeHierarchy {
    fn from_iter<I: IntoIterator<Item = Theme>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a ThemeHierarchy {
    type Item = &'a Theme;
    type IntoIter = std::slice::Iter<'a, Theme>;

    fn into_iter(self) -> Self::IntoIter {
        self.themes.iter()
    }
}
