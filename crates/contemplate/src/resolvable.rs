//! A parsed name bound to the engine that resolves it.

use std::fmt;
use std::path::PathBuf;

use contemplate_dispatch::ControllerArgs;
use contemplate_resolve::{ResolveError, ResourceName};
use serde_json::Value;

use crate::engine::Engine;
use crate::error::EngineError;

/// A name parsed once and resolved on demand with the engine's active
/// strategy.
///
/// The same raw name can be looked at under another type tag with the
/// `*_associated` methods: the template that goes with a controller, the POST
/// handler that goes with a GET handler, and so on.
pub struct Resolvable<'e> {
    engine: &'e Engine,
    name: ResourceName<'e>,
}

impl<'e> Resolvable<'e> {
    pub(crate) fn new(engine: &'e Engine, name: ResourceName<'e>) -> Self {
        Self { engine, name }
    }

    /// The parsed name.
    pub fn name(&self) -> &ResourceName<'e> {
        &self.name
    }

    /// The type tag the name was parsed with.
    pub fn type_tag(&self) -> Option<&str> {
        self.name.type_tag()
    }

    /// The engine this handle resolves through.
    pub fn engine(&self) -> &'e Engine {
        self.engine
    }

    /// Resolves the name, failing if no candidate exists.
    pub fn try_path(&self) -> Result<PathBuf, ResolveError> {
        self.name.resolve_with(self.engine.strategy())
    }

    /// Resolves the name, falling back to the first candidate tried when
    /// nothing exists.
    ///
    /// Useful for reporting where a missing resource is expected to live.
    /// Errors other than a miss still propagate.
    pub fn path(&self) -> Result<PathBuf, ResolveError> {
        match self.try_path() {
            Err(ResolveError::TemplateNotFound { name, mut tried }) if !tried.is_empty() => {
                let first = tried.swap_remove(0);
                tracing::trace!(
                    target: "contemplate::resolvable",
                    name = %name,
                    path = %first.path.display(),
                    "not found, using first candidate"
                );
                Ok(first.path)
            }
            other => other,
        }
    }

    /// Returns `true` if the name resolves to an existing file.
    pub fn exists(&self) -> Result<bool, ResolveError> {
        match self.try_path() {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// The same raw name under another type tag.
    pub fn resolve_associated(&self, type_tag: Option<&str>) -> Result<Resolvable<'e>, ResolveError> {
        Ok(Resolvable::new(self.engine, self.name.with_type(type_tag)?))
    }

    /// Resolves the associated resource strictly.
    ///
    /// Unlike [`path`](Self::path), a miss is an error: the associated file is
    /// expected to exist.
    pub fn path_associated(&self, type_tag: Option<&str>) -> Result<PathBuf, ResolveError> {
        self.resolve_associated(type_tag)?.try_path()
    }

    /// [`exists`](Self::exists) for the associated resource.
    pub fn exists_associated(&self, type_tag: Option<&str>) -> Result<bool, ResolveError> {
        self.resolve_associated(type_tag)?.exists()
    }

    /// Resolves the name strictly and invokes the controller loaded for it.
    pub fn call(&self, args: ControllerArgs) -> Result<Value, EngineError> {
        let path = self.try_path()?;
        self.engine.invoke_controller_at(path, args)
    }
}

impl fmt::Debug for Resolvable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolvable")
            .field("name", &self.name.raw())
            .field("type_tag", &self.name.type_tag())
            .finish()
    }
}

impl fmt::Display for Resolvable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.name, f)
    }
}
