//! Startup resolution of the catalog to display.

use anyhow::Context as _;
use bloomgrid::Catalog;
use std::path::{Path, PathBuf};

/// A catalog plus the directory its relative image paths refer to.
pub struct GallerySource {
    pub catalog: Catalog,
    pub base_dir: PathBuf,
}

/// Loads the catalog file at `path`, or the built-in catalog when `None`.
///
/// Built-in image paths resolve against the working directory.
pub fn load_catalog(path: Option<&Path>) -> anyhow::Result<GallerySource> {
    match path {
        Some(path) => {
            let catalog = Catalog::load(path)
                .with_context(|| format!("cannot open catalog {}", path.display()))?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            Ok(GallerySource { catalog, base_dir })
        }
        None => {
            let catalog = Catalog::builtin();
            tracing::info!(flowers = catalog.len(), "using built-in catalog");
            let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Ok(GallerySource { catalog, base_dir })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_when_no_path() {
        let source = load_catalog(None).unwrap();
        assert_eq!(source.catalog.len(), Catalog::builtin().len());
    }

    #[test]
    fn test_file_catalog_uses_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flowers.json");
        std::fs::write(&path, r#"[{"id": 3, "name": "Poppy", "imageUrl": "poppy.png"}]"#).unwrap();

        let source = load_catalog(Some(&path)).unwrap();
        assert_eq!(source.catalog.len(), 1);
        assert_eq!(source.base_dir, dir.path());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let error = load_catalog(Some(Path::new("/nonexistent/flowers.json")))
            .err()
            .unwrap();
        assert!(format!("{error:#}").contains("/nonexistent/flowers.json"));
    }
}
