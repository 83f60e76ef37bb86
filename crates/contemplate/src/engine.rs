//! The engine: a catalog, an active resolution strategy, and the controllers
//! and functions reachable through it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use contemplate_dispatch::{Controller, ControllerArgs, ControllerLoader, ControllerResult, ControllerTable, FunctionTable};
use contemplate_resolve::{
    Catalog, DefaultStrategy, FileSystem, Folder, FolderTable, ResolveError, ResolveStrategy,
    ThemeHierarchy, ThemeStrategy,
};
use serde_json::Value;

use crate::error::EngineError;
use crate::resolvable::Resolvable;
use crate::tag::TYPE_CONTROLLER_DELEGATE;

/// Resolves names and dispatches the controllers they point at.
///
/// An engine starts out with the [`DefaultStrategy`], no default directory,
/// no folders and the `php` extension. Configure it through the setters, or
/// build one from an [`EngineConfig`](crate::EngineConfig).
///
/// # Example
///
/// ```rust
/// use std::path::PathBuf;
/// use std::sync::Arc;
///
/// use contemplate::{controller, Engine, MemoryFileSystem, TYPE_CONTROLLER_GET};
/// use serde_json::json;
///
/// let fs = MemoryFileSystem::new()
///     .with_file("/site/pages/home.php")
///     .with_file("/site/pages/home.get.php");
///
/// let mut engine = Engine::with_fs(Arc::new(fs));
/// engine.set_directory(Some("/site/pages")).unwrap();
/// engine.set_file_extension(Some("get.php"), Some(TYPE_CONTROLLER_GET));
///
/// assert_eq!(engine.path("home", None).unwrap(), PathBuf::from("/site/pages/home.php"));
///
/// engine.register_controller(
///     "/site/pages/home.get.php",
///     controller(|_| Ok(json!({ "title": "Home" }))),
/// );
/// let data = engine.call_controller("home", Some(TYPE_CONTROLLER_GET), vec![]).unwrap();
/// assert_eq!(data, json!({ "title": "Home" }));
/// ```
pub struct Engine {
    catalog: Catalog,
    strategy: Box<dyn ResolveStrategy>,
    controllers: ControllerTable,
    loader: Option<Box<dyn ControllerLoader>>,
    functions: FunctionTable,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine over the real filesystem.
    pub fn new() -> Self {
        Self::from_catalog(Catalog::new())
    }

    /// Creates an engine over the given filesystem.
    pub fn with_fs(fs: Arc<dyn FileSystem>) -> Self {
        Self::from_catalog(Catalog::with_fs(fs))
    }

    /// Creates an engine around an existing catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            strategy: Box::new(DefaultStrategy::new()),
            controllers: ControllerTable::new(),
            loader: None,
            functions: FunctionTable::new(),
        }
    }

    /// Creates an engine over the real filesystem that resolves through the
    /// given themes.
    ///
    /// # Errors
    ///
    /// [`ResolveError::DirectoryNotFound`] for the first theme whose directory
    /// is missing.
    pub fn from_themes(themes: ThemeHierarchy) -> Result<Self, ResolveError> {
        let mut engine = Self::new();
        engine.set_themes(themes)?;
        Ok(engine)
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    /// The catalog names are parsed against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable access to the catalog.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Sets or clears the default directory.
    pub fn set_directory(&mut self, directory: Option<impl Into<PathBuf>>) -> Result<(), ResolveError> {
        self.catalog.set_directory(directory)
    }

    /// The default directory.
    pub fn directory(&self) -> Option<&Path> {
        self.catalog.directory()
    }

    /// Sets the extension for a type tag, or the default extension when
    /// `type_tag` is `None`.
    pub fn set_file_extension(&mut self, extension: Option<impl Into<String>>, type_tag: Option<&str>) {
        self.catalog.set_file_extension(extension, type_tag);
    }

    /// The extension used for a type tag.
    pub fn file_extension(&self, type_tag: Option<&str>) -> Option<&str> {
        self.catalog.file_extension(type_tag)
    }

    /// Registers a namespaced folder.
    pub fn add_folder(
        &mut self,
        namespace: impl Into<String>,
        directory: impl Into<PathBuf>,
        fallback: bool,
    ) -> Result<(), ResolveError> {
        self.catalog.add_folder(namespace, directory, fallback)
    }

    /// Unregisters a namespaced folder.
    pub fn remove_folder(&mut self, namespace: &str) -> Result<Folder, ResolveError> {
        self.catalog.remove_folder(namespace)
    }

    /// The registered folders.
    pub fn folders(&self) -> &FolderTable {
        self.catalog.folders()
    }

    // ------------------------------------------------------------------
    // Strategy
    // ------------------------------------------------------------------

    /// Replaces the active resolution strategy.
    pub fn set_strategy<S>(&mut self, strategy: S)
    where
        S: ResolveStrategy + 'static,
    {
        tracing::debug!(
            target: "contemplate::engine",
            strategy = std::any::type_name::<S>(),
            "resolution strategy replaced"
        );
        self.strategy = Box::new(strategy);
    }

    /// Verifies the theme directories and makes a [`ThemeStrategy`] over them
    /// the active strategy.
    ///
    /// The active strategy is left untouched when verification fails.
    pub fn set_themes(&mut self, themes: ThemeHierarchy) -> Result<(), ResolveError> {
        themes.verify(self.catalog.fs())?;
        self.set_strategy(ThemeStrategy::new(themes));
        Ok(())
    }

    /// The active resolution strategy.
    pub fn strategy(&self) -> &dyn ResolveStrategy {
        self.strategy.as_ref()
    }

    // ------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------

    /// Parses `raw` under `type_tag` into a handle bound to this engine.
    pub fn resolve(&self, raw: &str, type_tag: Option<&str>) -> Result<Resolvable<'_>, ResolveError> {
        let name = self.catalog.parse(raw, type_tag)?;
        Ok(Resolvable::new(self, name))
    }

    /// Shortcut for [`Resolvable::path`].
    pub fn path(&self, raw: &str, type_tag: Option<&str>) -> Result<PathBuf, ResolveError> {
        self.resolve(raw, type_tag)?.path()
    }

    /// Shortcut for [`Resolvable::exists`].
    pub fn exists(&self, raw: &str, type_tag: Option<&str>) -> Result<bool, ResolveError> {
        self.resolve(raw, type_tag)?.exists()
    }

    // ------------------------------------------------------------------
    // Controllers
    // ------------------------------------------------------------------

    /// Registers the controller defined by the file at `path`, returning the
    /// one it replaces.
    pub fn register_controller(&mut self, path: impl Into<PathBuf>, controller: Controller) -> Option<Controller> {
        self.controllers.register(path, controller)
    }

    /// The registered controllers.
    pub fn controllers(&self) -> &ControllerTable {
        &self.controllers
    }

    /// Installs a loader consulted for paths with no registered controller.
    pub fn set_controller_loader<L>(&mut self, loader: L)
    where
        L: ControllerLoader + 'static,
    {
        self.loader = Some(Box::new(loader));
    }

    fn load_controller(&self, path: &Path) -> Option<Controller> {
        self.controllers
            .load(path)
            .or_else(|| self.loader.as_ref().and_then(|loader| loader.load(path)))
    }

    pub(crate) fn invoke_controller_at(&self, path: PathBuf, args: ControllerArgs) -> Result<Value, EngineError> {
        let controller = self
            .load_controller(&path)
            .ok_or_else(|| EngineError::ControllerNotLoaded { path: path.clone() })?;

        tracing::debug!(
            target: "contemplate::engine",
            path = %path.display(),
            decorators = controller.decorator_count(),
            "invoking controller"
        );
        controller.invoke(args).map_err(EngineError::Controller)
    }

    /// Resolves `raw` under `type_tag` and invokes the controller found there.
    ///
    /// # Errors
    ///
    /// - resolution errors, including a miss
    /// - [`EngineError::ControllerNotLoaded`] when nothing is registered for
    ///   the resolved path
    /// - [`EngineError::Controller`] carrying whatever the controller or its
    ///   decorators raised
    pub fn call_controller(
        &self,
        raw: &str,
        type_tag: Option<&str>,
        args: ControllerArgs,
    ) -> Result<Value, EngineError> {
        self.resolve(raw, type_tag)?.call(args)
    }

    /// Calls the delegate controller for `raw`.
    pub fn delegate(&self, raw: &str, args: ControllerArgs) -> Result<Value, EngineError> {
        self.call_controller(raw, Some(TYPE_CONTROLLER_DELEGATE), args)
    }

    /// Calls the controller associated with an already resolved name.
    pub fn delegate_associated(
        &self,
        resolvable: &Resolvable<'_>,
        type_tag: Option<&str>,
        args: ControllerArgs,
    ) -> Result<Value, EngineError> {
        let associated = self.resolve(resolvable.name().raw(), type_tag)?;
        associated.call(args)
    }

    // ------------------------------------------------------------------
    // Functions
    // ------------------------------------------------------------------

    /// Registers a named function.
    pub fn register_function<F>(&mut self, name: impl Into<String>, function: F) -> Result<(), EngineError>
    where
        F: Fn(ControllerArgs) -> ControllerResult + Send + Sync + 'static,
    {
        Ok(self.functions.register(name, function)?)
    }

    /// The registered functions.
    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// Mutable access to the registered functions.
    pub fn functions_mut(&mut self) -> &mut FunctionTable {
        &mut self.functions
    }

    /// Calls a named function.
    ///
    /// An unknown name is a [`EngineError::Dispatch`]; a failure inside the
    /// function is a [`EngineError::Controller`].
    pub fn call_function(&self, name: &str, args: ControllerArgs) -> Result<Value, EngineError> {
        let function = self.functions.get(name)?;
        function.call(args).map_err(EngineError::Controller)
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("catalog", &self.catalog)
            .field("controllers", &self.controllers.len())
            .field("has_loader", &self.loader.is_some())
            .field("functions", &self.functions)
            .finish_non_exhaustive()
    }
}
