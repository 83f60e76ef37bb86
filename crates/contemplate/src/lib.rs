//! # Contemplate - Namespaced Resource Resolution
//!
//! Contemplate maps short resource names such as `emails::welcome` to files on
//! disk, and dispatches the controllers those files define. It provides:
//!
//! - `[namespace::]basename` names resolved against a default directory and
//!   registered folders, with per-type file extensions
//! - Fallback folders searched when a namespaced lookup misses
//! - Theme hierarchies where the first theme that has the file wins
//! - Controllers wrapped in ordered decorator chains
//! - YAML configuration
//!
//! Resolution lives in [`contemplate_resolve`] and invocation in
//! [`contemplate_dispatch`]; this crate ties them together in an [`Engine`].
//!
//! ## Core Concepts
//!
//! - [`Engine`]: catalog, active strategy, controllers and functions
//! - [`Resolvable`]: a parsed name bound to an engine
//! - [`ResolveStrategy`]: [`DefaultStrategy`] or [`ThemeStrategy`], or your own
//! - [`Decorated`]: a target plus the decorators declared on it
//! - [`EngineConfig`]: YAML setup
//!
//! ## Quick Start
//!
//! ```rust
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! use contemplate::{Engine, EngineConfig, MemoryFileSystem, TYPE_TEMPLATE};
//!
//! let fs = MemoryFileSystem::new()
//!     .with_file("/app/templates/home.tpl.php")
//!     .with_file("/app/emails/welcome.tpl.php");
//!
//! let config = EngineConfig::from_yaml(r#"
//! directory: /app/templates
//! typed_extensions:
//!   __TEMPLATE__: tpl.php
//! folders:
//!   - { name: emails, path: /app/emails }
//! "#).unwrap();
//!
//! let engine = Engine::from_config_with_fs(&config, Arc::new(fs)).unwrap();
//!
//! let welcome = engine.resolve("emails::welcome", Some(TYPE_TEMPLATE)).unwrap();
//! assert!(welcome.exists().unwrap());
//! assert_eq!(welcome.path().unwrap(), PathBuf::from("/app/emails/welcome.tpl.php"));
//! ```
//!
//! ## Controllers
//!
//! A controller is registered under the path of the file that defines it and
//! reached by name:
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use contemplate::{controller, Engine, MemoryFileSystem, TYPE_CONTROLLER_POST};
//! use serde_json::json;
//!
//! let fs = MemoryFileSystem::new().with_file("/app/pages/signup.post.php");
//! let mut engine = Engine::with_fs(Arc::new(fs));
//! engine.set_directory(Some("/app/pages")).unwrap();
//! engine.set_file_extension(Some("post.php"), Some(TYPE_CONTROLLER_POST));
//!
//! engine.register_controller(
//!     "/app/pages/signup.post.php",
//!     controller(|args| Ok(json!({ "created": args[0] })))
//!         .decorate(|_target, next, args| {
//!             if args.is_empty() {
//!                 return Ok(json!({ "error": "missing user" }));
//!             }
//!             next(args)
//!         }),
//! );
//!
//! let created = engine
//!     .call_controller("signup", Some(TYPE_CONTROLLER_POST), vec![json!("ada")])
//!     .unwrap();
//! assert_eq!(created, json!({ "created": "ada" }));
//!
//! let rejected = engine
//!     .call_controller("signup", Some(TYPE_CONTROLLER_POST), vec![])
//!     .unwrap();
//! assert_eq!(rejected, json!({ "error": "missing user" }));
//! ```
//!
//! ## Logging
//!
//! Registration, strategy changes, probes and outcomes are reported through
//! [`tracing`](https://docs.rs/tracing) under the `contemplate*` targets. No
//! subscriber is installed.

mod config;
mod engine;
mod error;
mod resolvable;
mod tag;

pub use config::{EngineConfig, FolderConfig, ThemeConfig};
pub use engine::Engine;
pub use error::{ConfigError, EngineError};
pub use resolvable::Resolvable;
pub use tag::{TYPE_CONTROLLER_DELEGATE, TYPE_CONTROLLER_GET, TYPE_CONTROLLER_POST, TYPE_TEMPLATE};

pub use contemplate_dispatch::{
    controller, Controller, ControllerArgs, ControllerLoader, ControllerResult, ControllerTable,
    Decorated, Decorator, DispatchError, Function, FunctionTable, Next, Target,
};
pub use contemplate_resolve::{
    strategy, Catalog, DefaultStrategy, FallbackOrder, FileExtensionTable, FileSystem, Folder,
    FolderTable, MemoryFileSystem, OsFileSystem, ResolveError, ResolveStrategy, ResourceName,
    Theme, ThemeHierarchy, ThemeStrategy, TriedPath, DEFAULT_FILE_EXTENSION, NAMESPACE_SEPARATOR,
};

// Crates are re-exported for direct access.
pub use contemplate_dispatch;
pub use contemplate_resolve;
