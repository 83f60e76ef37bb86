//! YAML engine configuration.
//!
//! ```yaml
//! directory: ./templates
//! file_extension: php
//! typed_extensions:
//!   __TEMPLATE__: tpl.php
//!   __RAW__: ~              # no extension for this type
//! folders:
//!   - { name: emails, path: ./emails, fallback: true }
//! themes:
//!   - { name: child, directory: ./themes/child }
//!   - { name: parent, directory: ./themes/parent }
//! fallback_order: registration
//! ```
//!
//! Every key is optional. An absent `file_extension` means `php`; an explicit
//! `null` means no extension. A `themes` list, even an empty one, makes the
//! theme strategy active; otherwise the default strategy is used with the
//! configured `fallback_order`. Paths are used exactly as written.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use contemplate_resolve::{
    DefaultStrategy, FallbackOrder, FileSystem, OsFileSystem, Theme, ThemeHierarchy,
    DEFAULT_FILE_EXTENSION,
};
use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::error::{ConfigError, EngineError};

/// Declarative engine setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub directory: Option<PathBuf>,
    pub file_extension: Option<String>,
    pub typed_extensions: BTreeMap<String, Option<String>>,
    pub folders: Vec<FolderConfig>,
    pub themes: Option<Vec<ThemeConfig>>,
    #[serde(with = "FallbackOrderDef")]
    pub fallback_order: FallbackOrder,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_extension: Some(DEFAULT_FILE_EXTENSION.to_string()),
            typed_extensions: BTreeMap::new(),
            folders: Vec::new(),
            themes: None,
            fallback_order: FallbackOrder::default(),
        }
    }
}

/// A namespaced folder entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FolderConfig {
    pub name: String,
    pub path: PathBuf,
    #[serde(default)]
    pub fallback: bool,
}

/// A theme entry. Themes are searched in the order listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub name: String,
    pub directory: PathBuf,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "FallbackOrder", rename_all = "snake_case")]
enum FallbackOrderDef {
    Registration,
    ReverseRegistration,
}

impl EngineConfig {
    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Reads and parses a YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }

    /// The theme hierarchy, if themes are configured.
    pub fn theme_hierarchy(&self) -> Option<ThemeHierarchy> {
        self.themes.as_ref().map(|themes| {
            themes
                .iter()
                .map(|theme| Theme::new(theme.name.clone(), theme.directory.clone()))
                .collect()
        })
    }
}

impl Engine {
    /// Builds an engine over the real filesystem from a configuration.
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        Self::from_config_with_fs(config, Arc::new(OsFileSystem))
    }

    /// Reads a YAML configuration file and builds an engine over the real
    /// filesystem from it.
    ///
    /// # Errors
    ///
    /// [`EngineError::Config`] when the file cannot be read or parsed, and
    /// any error [`from_config`](Self::from_config) reports.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let config = EngineConfig::from_file(path)?;
        Self::from_config(&config)
    }

    /// Builds an engine over the given filesystem from a configuration.
    ///
    /// # Errors
    ///
    /// Any registration error: a missing directory, a folder namespace listed
    /// twice, a theme directory that does not exist.
    pub fn from_config_with_fs(config: &EngineConfig, fs: Arc<dyn FileSystem>) -> Result<Self, EngineError> {
        let mut engine = Engine::with_fs(fs);

        engine.set_file_extension(config.file_extension.clone(), None);
        for (type_tag, extension) in &config.typed_extensions {
            engine.set_file_extension(extension.clone(), Some(type_tag.as_str()));
        }

        if let Some(directory) = &config.directory {
            engine.set_directory(Some(directory.clone()))?;
        }

        for folder in &config.folders {
            engine.add_folder(folder.name.clone(), folder.path.clone(), folder.fallback)?;
        }

        match config.theme_hierarchy() {
            Some(themes) => engine.set_themes(themes)?,
            None => engine.set_strategy(DefaultStrategy::new().with_fallback_order(config.fallback_order)),
        }

        tracing::debug!(
            target: "contemplate::config",
            directory = ?config.directory,
            folders = config.folders.len(),
            themes = config.themes.as_ref().map_or(0, Vec::len),
            "engine built from configuration"
        );
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contemplate_resolve::{MemoryFileSystem, ResolveError};

    fn layout() -> Arc<MemoryFileSystem> {
        Arc::new(
            MemoryFileSystem::new()
                .with_file("/app/templates/home.tpl.php")
                .with_file("/app/emails/welcome.php")
                .with_file("/app/themes/parent/home.php")
                .with_dir("/app/themes/child"),
        )
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = EngineConfig::from_yaml("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.file_extension.as_deref(), Some("php"));
        assert_eq!(config.fallback_order, FallbackOrder::Registration);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
directory: /app/templates
file_extension: php
typed_extensions:
  __TEMPLATE__: tpl.php
  __RAW__: ~
folders:
  - { name: emails, path: /app/emails, fallback: true }
  - name: blog
    path: /app/blog
fallback_order: reverse_registration
"#;
        let config = EngineConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.directory, Some(PathBuf::from("/app/templates")));
        assert_eq!(config.typed_extensions["__TEMPLATE__"].as_deref(), Some("tpl.php"));
        assert_eq!(config.typed_extensions["__RAW__"], None);
        assert_eq!(config.folders.len(), 2);
        assert!(config.folders[0].fallback);
        assert!(!config.folders[1].fallback);
        assert_eq!(config.fallback_order, FallbackOrder::ReverseRegistration);
        assert!(config.themes.is_none());
    }

    #[test]
    fn test_null_file_extension() {
        let config = EngineConfig::from_yaml("file_extension: ~").unwrap();
        assert_eq!(config.file_extension, None);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = EngineConfig::from_yaml("directroy: /app").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn test_bad_fallback_order() {
        assert!(EngineConfig::from_yaml("fallback_order: sideways").is_err());
    }

    #[test]
    fn test_build_engine() {
        let config = EngineConfig::from_yaml(
            r#"
directory: /app/templates
typed_extensions:
  __TEMPLATE__: tpl.php
folders:
  - { name: emails, path: /app/emails }
"#,
        )
        .unwrap();
        let engine = Engine::from_config_with_fs(&config, layout()).unwrap();

        assert_eq!(
            engine.path("home", Some("__TEMPLATE__")).unwrap(),
            PathBuf::from("/app/templates/home.tpl.php")
        );
        assert!(engine.exists("emails::welcome", None).unwrap());
    }

    #[test]
    fn test_build_engine_with_themes() {
        let config = EngineConfig::from_yaml(
            r#"
themes:
  - { name: child, directory: /app/themes/child }
  - { name: parent, directory: /app/themes/parent }
"#,
        )
        .unwrap();
        let engine = Engine::from_config_with_fs(&config, layout()).unwrap();
        assert_eq!(
            engine.path("home", None).unwrap(),
            PathBuf::from("/app/themes/parent/home.php")
        );
    }

    #[test]
    fn test_build_engine_missing_directory() {
        let config = EngineConfig::from_yaml("directory: /nowhere").unwrap();
        let err = Engine::from_config_with_fs(&config, layout()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Resolve(ResolveError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_build_engine_duplicate_folder() {
        let config = EngineConfig::from_yaml(
            r#"
folders:
  - { name: emails, path: /app/emails }
  - { name: emails, path: /app/templates }
"#,
        )
        .unwrap();
        let err = Engine::from_config_with_fs(&config, layout()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Resolve(ResolveError::DuplicateNamespace { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.yaml");
        std::fs::write(&path, "file_extension: html\n").unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config.file_extension.as_deref(), Some("html"));

        std::fs::write(&path, "folders: nope\n").unwrap();
        match EngineConfig::from_file(&path).unwrap_err() {
            ConfigError::Parse { path: Some(p), .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_engine_from_config_file_reports_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.yaml");

        let err = Engine::from_config_file(&path).unwrap_err();
        assert!(matches!(err, EngineError::Config(ConfigError::Read { .. })));

        std::fs::write(&path, "fallback_order: sideways\n").unwrap();
        let err = Engine::from_config_file(&path).unwrap_err();
        assert!(matches!(err, EngineError::Config(ConfigError::Parse { .. })));

        std::fs::create_dir_all(dir.path().join("pages")).unwrap();
        std::fs::write(
            &path,
            format!("directory: {}\n", dir.path().join("pages").display()),
        )
        .unwrap();
        let engine = Engine::from_config_file(&path).unwrap();
        assert_eq!(engine.directory(), Some(dir.path().join("pages").as_path()));
    }

    #[test]
    fn test_from_missing_file() {
        let err = EngineConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
