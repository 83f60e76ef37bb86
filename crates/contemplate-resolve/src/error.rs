//! Error types for name parsing, registration and resolution.
//!
//! Every failure in this crate is a [`ResolveError`]. Only
//! [`ResolveError::TemplateNotFound`] is an expected outcome that callers
//! routinely branch on (see [`ResolveError::is_not_found`]); the remaining
//! variants indicate a malformed name or a configuration mistake.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A candidate path probed during resolution.
///
/// Theme-based resolution records the theme the candidate belongs to so the
/// diagnostic can pair each path with its theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriedPath {
    /// The theme that contributed this candidate, if any.
    pub theme: Option<String>,
    /// The candidate path.
    pub path: PathBuf,
}

impl TriedPath {
    /// A candidate that did not come from a theme.
    pub fn plain(path: impl Into<PathBuf>) -> Self {
        Self {
            theme: None,
            path: path.into(),
        }
    }

    /// A candidate contributed by the named theme.
    pub fn in_theme(theme: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            theme: Some(theme.into()),
            path: path.into(),
        }
    }
}

impl fmt::Display for TriedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.theme {
            Some(theme) => write!(f, "{}:{}", theme, self.path.display()),
            None => write!(f, "{}", self.path.display()),
        }
    }
}

/// Errors produced while parsing names, registering folders or resolving paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The name used the `::` separator more than once.
    #[error(
        "The template name \"{name}\" is not valid. \
         Do not use the folder namespace separator \"::\" more than once."
    )]
    MalformedName { name: String },

    /// The base component of the name was empty.
    #[error("The template name \"{name}\" is not valid. The template name cannot be empty.")]
    EmptyBaseName { name: String },

    /// The name referenced a namespace that was never registered.
    #[error("The template namespace \"{namespace}\" was not found.")]
    UnknownNamespace { namespace: String },

    /// A namespace was registered twice.
    #[error("The template namespace \"{namespace}\" is already being used.")]
    DuplicateNamespace { namespace: String },

    /// A directory given at registration or configuration time does not exist.
    #[error("The specified directory path \"{}\" does not exist.", .path.display())]
    DirectoryNotFound { path: PathBuf },

    /// An unnamespaced name was resolved without a default directory.
    #[error(
        "The template name \"{name}\" is not valid. The default directory has not been defined."
    )]
    NoDefaultDirectory { name: String },

    /// Every candidate path was probed and none exists.
    #[error("{}", not_found_message(.name, .tried))]
    TemplateNotFound { name: String, tried: Vec<TriedPath> },
}

impl ResolveError {
    /// Returns `true` for the recoverable "nothing matched" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::TemplateNotFound { .. })
    }

    /// Paths probed before giving up, in probe order.
    ///
    /// Empty for every variant other than [`ResolveError::TemplateNotFound`].
    pub fn tried_paths(&self) -> Vec<&Path> {
        match self {
            ResolveError::TemplateNotFound { tried, .. } => {
                tried.iter().map(|t| t.path.as_path()).collect()
            }
            _ => Vec::new(),
        }
    }

    pub(crate) fn directory_not_found(path: &Path) -> Self {
        ResolveError::DirectoryNotFound {
            path: path.to_path_buf(),
        }
    }
}

fn not_found_message(name: &str, tried: &[TriedPath]) -> String {
    if tried.is_empty() {
        return format!(
            "The template \"{}\" could not be found: there were no locations to search.",
            name
        );
    }

    let joined = tried
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    if tried.iter().any(|t| t.theme.is_some()) {
        format!(
            "The template \"{}\" was not found in the following themes: {}",
            name, joined
        )
    } else {
        format!("The template \"{}\" could not be found at: {}", name, joined)
    }
}
