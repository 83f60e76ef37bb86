//! Error types for the engine facade.

use std::path::PathBuf;

use contemplate_dispatch::DispatchError;
use contemplate_resolve::ResolveError;

/// Failure loading an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid YAML for an engine.
    #[error("invalid engine configuration{}: {message}", display_origin(.path))]
    Parse {
        /// Source file, when parsed from disk.
        path: Option<PathBuf>,
        message: String,
    },
}

fn display_origin(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" in {}", path.display()),
        None => String::new(),
    }
}

/// Everything that can go wrong when working through an [`Engine`](crate::Engine).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The name resolved to a path, but no controller is available for it.
    #[error("no controller is loaded for \"{}\"", .path.display())]
    ControllerNotLoaded { path: PathBuf },

    /// Raised by a controller or one of its decorators. Passed through as is.
    #[error(transparent)]
    Controller(anyhow::Error),
}

impl EngineError {
    /// Returns the resolution error, if this is one.
    pub fn as_resolve(&self) -> Option<&ResolveError> {
        match self {
            EngineError::Resolve(err) => Some(err),
            _ => None,
        }
    }

    /// Returns `true` for a resolution that tried every candidate and missed.
    pub fn is_not_found(&self) -> bool {
        self.as_resolve().is_some_and(ResolveError::is_not_found)
    }

    /// Unwraps a controller failure back into the error it raised.
    pub fn into_controller_error(self) -> Result<anyhow::Error, Self> {
        match self {
            EngineError::Controller(err) => Ok(err),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_mentions_file() {
        let err = ConfigError::Parse {
            path: Some(PathBuf::from("engine.yaml")),
            message: "expected a mapping".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid engine configuration in engine.yaml: expected a mapping"
        );

        let err = ConfigError::Parse {
            path: None,
            message: "expected a mapping".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid engine configuration: expected a mapping"
        );
    }

    #[test]
    fn test_resolve_errors_are_transparent() {
        let inner = ResolveError::MalformedName {
            name: "a::b::c".into(),
        };
        let expected = inner.to_string();
        let err = EngineError::from(inner);
        assert_eq!(err.to_string(), expected);
        assert!(!err.is_not_found());
        assert!(err.as_resolve().is_some());
    }

    #[test]
    fn test_controller_error_round_trips() {
        let err = EngineError::Controller(anyhow::anyhow!("boom"));
        assert_eq!(err.to_string(), "boom");
        let inner = err.into_controller_error().unwrap();
        assert_eq!(inner.to_string(), "boom");

        let other = EngineError::ControllerNotLoaded {
            path: PathBuf::from("/x.php"),
        };
        assert!(other.into_controller_error().is_err());
    }
}
