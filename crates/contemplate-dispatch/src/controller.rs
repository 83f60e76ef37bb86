//! Controllers: decorated targets addressed by file path.
//!
//! A controller is the code behind a resolved name. Name resolution produces
//! a file path; a [`ControllerLoader`] turns that path into a callable
//! [`Controller`], which is then invoked through its decorator chain.
//!
//! Controllers take a list of JSON values and return a JSON value. Any error
//! they raise is an [`anyhow::Error`] and reaches the caller unchanged unless
//! one of the controller's own decorators handles it.
//!
//! # Example
//!
//! ```rust
//! use contemplate_dispatch::{controller, ControllerLoader, ControllerTable};
//! use serde_json::json;
//! use std::path::Path;
//!
//! let mut table = ControllerTable::new();
//! table.register(
//!     "/site/profile.get.php",
//!     controller(|args| Ok(json!({ "user": args[0] })))
//!         .decorate(|_target, next, mut args| {
//!             args[0] = json!(args[0].as_str().unwrap_or_default().to_uppercase());
//!             next(args)
//!         }),
//! );
//!
//! let profile = table.load(Path::new("/site/profile.get.php")).unwrap();
//! let result = profile.invoke(vec![json!("ada")]).unwrap();
//! assert_eq!(result, json!({ "user": "ADA" }));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::decorator::Decorated;

/// Arguments passed to a controller.
pub type ControllerArgs = Vec<Value>;

/// What a controller produces.
pub type ControllerResult = anyhow::Result<Value>;

/// A controller with its declared decorators.
pub type Controller = Decorated<ControllerArgs, ControllerResult>;

/// Wraps a closure as an undecorated controller.
pub fn controller<F>(f: F) -> Controller
where
    F: Fn(ControllerArgs) -> ControllerResult + Send + Sync + 'static,
{
    Decorated::new(f)
}

/// Turns a resolved path into a controller.
pub trait ControllerLoader: Send + Sync {
    /// Returns the controller for `path`, or `None` if there is none.
    fn load(&self, path: &Path) -> Option<Controller>;
}

impl<F> ControllerLoader for F
where
    F: Fn(&Path) -> Option<Controller> + Send + Sync,
{
    fn load(&self, path: &Path) -> Option<Controller> {
        self(path)
    }
}

/// Controllers registered by the path they are resolved to.
#[derive(Clone, Default)]
pub struct ControllerTable {
    controllers: HashMap<PathBuf, Controller>,
}

impl ControllerTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a controller for `path`, returning the one it replaces.
    pub fn register(&mut self, path: impl Into<PathBuf>, controller: Controller) -> Option<Controller> {
        let path = path.into();
        tracing::debug!(
            target: "contemplate_dispatch::controller",
            path = %path.display(),
            decorators = controller.decorator_count(),
            "registered controller"
        );
        self.controllers.insert(path, controller)
    }

    /// Removes the controller for `path`.
    pub fn remove(&mut self, path: &Path) -> Option<Controller> {
        self.controllers.remove(path)
    }

    /// Returns `true` if a controller is registered for `path`.
    pub fn contains(&self, path: &Path) -> bool {
        self.controllers.contains_key(path)
    }

    /// Number of registered controllers.
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Returns `true` if no controllers are registered.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl ControllerLoader for ControllerTable {
    fn load(&self, path: &Path) -> Option<Controller> {
        self.controllers.get(path).cloned()
    }
}

impl fmt::Debug for ControllerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerTable")
            .field("paths", &self.controllers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_and_load() {
        let mut table = ControllerTable::new();
        assert!(table.is_empty());
        table.register("/a/page.php", controller(|_| Ok(json!("page"))));

        assert!(table.contains(Path::new("/a/page.php")));
        let loaded = table.load(Path::new("/a/page.php")).unwrap();
        assert_eq!(loaded.invoke(vec![]).unwrap(), json!("page"));
        assert!(table.load(Path::new("/a/other.php")).is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut table = ControllerTable::new();
        assert!(table
            .register("/a/page.php", controller(|_| Ok(json!(1))))
            .is_none());
        let previous = table
            .register("/a/page.php", controller(|_| Ok(json!(2))))
            .unwrap();
        assert_eq!(previous.invoke(vec![]).unwrap(), json!(1));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut table = ControllerTable::new();
        table.register("/a/page.php", controller(|_| Ok(Value::Null)));
        assert!(table.remove(Path::new("/a/page.php")).is_some());
        assert!(!table.contains(Path::new("/a/page.php")));
    }

    #[test]
    fn test_closure_loader() {
        let loader = |path: &Path| {
            let name = path.display().to_string();
            Some(controller(move |_| Ok(json!(name.clone()))))
        };
        let loaded = ControllerLoader::load(&loader, Path::new("/x.php")).unwrap();
        assert_eq!(loaded.invoke(vec![]).unwrap(), json!("/x.php"));
    }

    #[test]
    fn test_controller_error_propagates() {
        let failing = controller(|_| Err(anyhow::anyhow!("database unavailable")))
            .decorate(|_, next, args| next(args));
        let err = failing.invoke(vec![]).unwrap_err();
        assert_eq!(err.to_string(), "database unavailable");
    }
}
