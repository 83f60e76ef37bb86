//! Property tests for name resolution through the engine.

use std::path::PathBuf;
use std::sync::Arc;

use contemplate::{Engine, MemoryFileSystem, ResolveError};
use proptest::prelude::*;

fn engine(fs: MemoryFileSystem) -> Engine {
    let mut engine = Engine::with_fs(Arc::new(fs.with_dir("/site/pages").with_dir("/site/shared")));
    engine.set_directory(Some("/site/pages")).unwrap();
    engine.add_folder("shared", "/site/shared", true).unwrap();
    engine
}

proptest! {
    #[test]
    fn missing_names_point_at_the_default_directory(base in "[a-z][a-z0-9_]{0,12}") {
        let engine = engine(MemoryFileSystem::new());

        prop_assert!(!engine.exists(&base, None).unwrap());
        prop_assert_eq!(
            engine.path(&base, None).unwrap(),
            PathBuf::from(format!("/site/pages/{base}.php"))
        );
    }

    #[test]
    fn exists_agrees_with_strict_resolution(
        base in "[a-z][a-z0-9_]{0,12}",
        in_pages in any::<bool>(),
        in_shared in any::<bool>(),
    ) {
        let mut fs = MemoryFileSystem::new();
        if in_pages {
            fs = fs.with_file(format!("/site/pages/{base}.php"));
        }
        if in_shared {
            fs = fs.with_file(format!("/site/shared/{base}.php"));
        }
        let engine = engine(fs);

        for raw in [base.clone(), format!("shared::{base}")] {
            let resolvable = engine.resolve(&raw, None).unwrap();
            let exists = resolvable.exists().unwrap();
            prop_assert_eq!(exists, resolvable.try_path().is_ok());
        }

        // A fallback folder reaches the default directory.
        prop_assert_eq!(
            engine.exists(&format!("shared::{base}"), None).unwrap(),
            in_pages || in_shared
        );
    }

    #[test]
    fn extra_separators_never_resolve(parts in prop::collection::vec("[a-z]{1,6}", 3..6)) {
        let engine = engine(MemoryFileSystem::new());
        let raw = parts.join("::");
        let is_malformed = matches!(engine.resolve(&raw, None), Err(ResolveError::MalformedName { .. }));
        prop_assert!(is_malformed);
    }
}
