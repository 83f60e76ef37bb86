//! Layered theme lookup.

use std::path::PathBuf;

use crate::error::{ResolveError, TriedPath};
use crate::name::ResourceName;
use crate::theme::ThemeHierarchy;

use super::ResolveStrategy;

/// Searches a [`ThemeHierarchy`] in priority order; first match wins.
///
/// Namespaces and the default directory play no part here: the candidate for
/// each theme is `theme.directory/file`. Once a theme provides the file, later
/// themes are never probed, which is what lets a child theme override its
/// parent.
///
/// ```rust
/// use contemplate_resolve::{Catalog, MemoryFileSystem, ResolveStrategy, Theme, ThemeHierarchy, ThemeStrategy};
/// use std::path::PathBuf;
/// use std::sync::Arc;
///
/// let fs = MemoryFileSystem::new()
///     .with_file("/themes/child/home.php")
///     .with_file("/themes/parent/home.php")
///     .with_file("/themes/parent/nav.php");
/// let catalog = Catalog::with_fs(Arc::new(fs));
///
/// let strategy = ThemeStrategy::new(ThemeHierarchy::new([
///     Theme::new("child", "/themes/child"),
///     Theme::new("parent", "/themes/parent"),
/// ]));
///
/// let home = catalog.parse("home", None).unwrap();
/// assert_eq!(strategy.resolve(&home).unwrap(), PathBuf::from("/themes/child/home.php"));
///
/// let nav = catalog.parse("nav", None).unwrap();
/// assert_eq!(strategy.resolve(&nav).unwrap(), PathBuf::from("/themes/parent/nav.php"));
/// ```
#[derive(Debug, Clone)]
pub struct ThemeStrategy {
    hierarchy: ThemeHierarchy,
}

impl ThemeStrategy {
    /// Creates the strategy over `hierarchy`.
    pub fn new(hierarchy: ThemeHierarchy) -> Self {
        Self { hierarchy }
    }

    /// The hierarchy searched by this strategy.
    pub fn hierarchy(&self) -> &ThemeHierarchy {
        &self.hierarchy
    }
}

impl ResolveStrategy for ThemeStrategy {
    fn resolve(&self, name: &ResourceName<'_>) -> Result<PathBuf, ResolveError> {
        let fs = name.catalog().fs();
        let mut tried = Vec::with_capacity(self.hierarchy.len());

        for theme in &self.hierarchy {
            let candidate = name.candidate_in(theme.directory());
            tracing::trace!(
                target: "contemplate_resolve::strategy",
                name = name.raw(),
                theme = theme.name(),
                candidate = %candidate.display(),
                "probing"
            );
            if fs.is_file(&candidate) {
                tracing::debug!(
                    target: "contemplate_resolve::strategy",
                    name = name.raw(),
                    theme = theme.name(),
                    path = %candidate.display(),
                    "resolved"
                );
                return Ok(candidate);
            }
            tried.push(TriedPath::in_theme(theme.name(), candidate));
        }

        tracing::debug!(
            target: "contemplate_resolve::strategy",
            name = name.raw(),
            themes = tried.len(),
            "not found in any theme"
        );
        Err(ResolveError::TemplateNotFound {
            name: name.raw().to_string(),
            tried,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::fs::MemoryFileSystem;
    use crate::theme::Theme;
    use std::path::Path;
    use std::sync::Arc;

    fn strategy() -> ThemeStrategy {
        ThemeStrategy::new(ThemeHierarchy::new([
            Theme::new("A", "/templates/a"),
            Theme::new("B", "/templates/b"),
        ]))
    }

    fn catalog(fs: MemoryFileSystem) -> Catalog {
        let mut catalog = Catalog::with_fs(Arc::new(fs));
        catalog.set_file_extension(Some("tpl.php"), Some("__TEMPLATE__"));
        catalog.set_file_extension(Some("get.php"), Some("__HTTP_GET__"));
        catalog
    }

    #[test]
    fn test_untyped_name() {
        let catalog = catalog(
            MemoryFileSystem::new()
                .with_file("/templates/a/untyped.php")
                .with_dir("/templates/b"),
        );
        let name = catalog.parse("untyped", None).unwrap();
        assert_eq!(
            strategy().resolve(&name).unwrap(),
            PathBuf::from("/templates/a/untyped.php")
        );
    }

    #[test]
    fn test_typed_name() {
        let catalog = catalog(
            MemoryFileSystem::new()
                .with_file("/templates/a/thing1.get.php")
                .with_file("/templates/a/thing1.tpl.php"),
        );
        let name = catalog.parse("thing1", Some("__TEMPLATE__")).unwrap();
        assert_eq!(
            strategy().resolve(&name).unwrap(),
            PathBuf::from("/templates/a/thing1.tpl.php")
        );
    }

    #[test]
    fn test_first_theme_wins() {
        let catalog = catalog(
            MemoryFileSystem::new()
                .with_file("/templates/a/page.php")
                .with_file("/templates/b/page.php"),
        );
        let name = catalog.parse("page", None).unwrap();
        assert_eq!(
            strategy().resolve(&name).unwrap(),
            PathBuf::from("/templates/a/page.php")
        );
    }

    #[test]
    fn test_falls_through_to_parent() {
        let catalog = catalog(
            MemoryFileSystem::new()
                .with_dir("/templates/a")
                .with_file("/templates/b/page.php"),
        );
        let name = catalog.parse("page", None).unwrap();
        assert_eq!(
            strategy().resolve(&name).unwrap(),
            PathBuf::from("/templates/b/page.php")
        );
    }

    #[test]
    fn test_not_found_names_every_theme() {
        let catalog = catalog(
            MemoryFileSystem::new()
                .with_dir("/templates/a")
                .with_dir("/templates/b"),
        );
        let name = catalog.parse("missing", None).unwrap();
        let err = strategy().resolve(&name).unwrap_err();

        match &err {
            ResolveError::TemplateNotFound { name, tried } => {
                assert_eq!(name, "missing");
                assert_eq!(
                    tried,
                    &vec![
                        TriedPath::in_theme("A", "/templates/a/missing.php"),
                        TriedPath::in_theme("B", "/templates/b/missing.php"),
                    ]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "The template \"missing\" was not found in the following themes: \
             A:/templates/a/missing.php, B:/templates/b/missing.php"
        );
    }

    #[test]
    fn test_leading_slash_stays_under_theme() {
        let catalog = catalog(
            MemoryFileSystem::new()
                .with_dir("/templates/a")
                .with_dir("/templates/b")
                .with_file("/secret/keys.php"),
        );
        let name = catalog.parse("/secret/keys", None).unwrap();
        let err = strategy().resolve(&name).unwrap_err();
        assert_eq!(
            err.tried_paths(),
            vec![
                Path::new("/templates/a/secret/keys.php"),
                Path::new("/templates/b/secret/keys.php"),
            ]
        );
    }

    #[test]
    fn test_empty_hierarchy_never_matches() {
        let catalog = catalog(MemoryFileSystem::new());
        let name = catalog.parse("page", None).unwrap();
        let err = ThemeStrategy::new(ThemeHierarchy::default())
            .resolve(&name)
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.tried_paths().is_empty());
        assert_eq!(
            err.to_string(),
            "The template \"page\" could not be found: there were no locations to search."
        );
    }
}
