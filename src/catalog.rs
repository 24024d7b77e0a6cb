//! Flower catalog consumed read-only by the gallery.
//!
//! A catalog is an ordered list of [`Flower`] records. It is either the
//! built-in collection or a JSON array loaded from disk:
//!
//! ```json
//! [
//!   { "id": 1, "name": "Rose", "imageUrl": "images/rose.png" }
//! ]
//! ```
//!
//! Entries are not validated beyond id uniqueness. An empty or unreachable
//! image is left for the card renderer to deal with.

use crate::error::CatalogError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A single gallery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flower {
    pub id: u32,
    pub name: String,
    #[serde(rename = "imageUrl", alias = "image_url", default)]
    pub image_url: String,
}

impl Flower {
    pub fn new(id: u32, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: image_url.into(),
        }
    }

    /// Returns true if the image location points at a remote resource.
    ///
    /// Remote images are never fetched.
    pub fn is_remote_image(&self) -> bool {
        let url = self.image_url.trim();
        url.starts_with("http://") || url.starts_with("https://")
    }

    /// Resolves the image location to a local path.
    ///
    /// Relative locations are joined onto `base_dir` (the directory of the
    /// catalog file). Returns `None` for empty or remote locations.
    ///
    /// # Arguments
    /// * `base_dir` - Directory relative image paths are resolved against
    pub fn resolve_image_path(&self, base_dir: &Path) -> Option<PathBuf> {
        let url = self.image_url.trim();
        if url.is_empty() || self.is_remote_image() {
            return None;
        }

        let url = url.strip_prefix("file://").unwrap_or(url);
        let path = Path::new(url);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(base_dir.join(path))
        }
    }
}

static BUILTIN_FLOWERS: Lazy<Vec<Flower>> = Lazy::new(|| {
    const NAMES: [(&str, &str); 24] = [
        ("Rose", "rose"),
        ("Tulip", "tulip"),
        ("Peony", "peony"),
        ("Ranunculus", "ranunculus"),
        ("Anemone", "anemone"),
        ("Dahlia", "dahlia"),
        ("Hydrangea", "hydrangea"),
        ("Lisianthus", "lisianthus"),
        ("Sweet Pea", "sweet-pea"),
        ("Cosmos", "cosmos"),
        ("Delphinium", "delphinium"),
        ("Freesia", "freesia"),
        ("Gerbera", "gerbera"),
        ("Hellebore", "hellebore"),
        ("Iris", "iris"),
        ("Lilac", "lilac"),
        ("Magnolia", "magnolia"),
        ("Narcissus", "narcissus"),
        ("Orchid", "orchid"),
        ("Poppy", "poppy"),
        ("Scabiosa", "scabiosa"),
        ("Snapdragon", "snapdragon"),
        ("Sunflower", "sunflower"),
        ("Zinnia", "zinnia"),
    ];

    NAMES
        .iter()
        .zip(1u32..)
        .map(|(&(name, slug), id)| Flower::new(id, name, format!("images/{slug}.png")))
        .collect()
});

/// Ordered, immutable collection of flowers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    flowers: Vec<Flower>,
}

impl Catalog {
    /// Builds a catalog from a list of flowers, rejecting duplicate ids.
    pub fn new(flowers: Vec<Flower>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(flowers.len());
        for flower in &flowers {
            if !seen.insert(flower.id) {
                return Err(CatalogError::DuplicateId(flower.id));
            }
        }
        Ok(Self { flowers })
    }

    /// The collection shipped with the application.
    pub fn builtin() -> Self {
        Self {
            flowers: BUILTIN_FLOWERS.clone(),
        }
    }

    /// Parses a catalog from a JSON array of flowers.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let flowers: Vec<Flower> = serde_json::from_str(json)?;
        Self::new(flowers)
    }

    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), flowers = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn flowers(&self) -> &[Flower] {
        &self.flowers
    }

    pub fn get(&self, index: usize) -> Option<&Flower> {
        self.flowers.get(index)
    }

    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }
}
