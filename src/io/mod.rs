//! I/O modules for catalog resolution and image decoding.

pub mod catalog_source;
pub mod image_cache;

// Re-export commonly used types
pub use catalog_source::{load_catalog, GallerySource};
pub use image_cache::ImageCache;
