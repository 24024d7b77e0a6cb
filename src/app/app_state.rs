//! Centralized application state for the gallery viewer.
//!
//! Composes the focused pieces the page shell needs: the read-only catalog,
//! the grid geometry, the single scroll surface hosting the grid, the image
//! cache and the theme.

use crate::app::RepaintScheduler;
use crate::io::{GallerySource, ImageCache};
use crate::state::ThemeState;
use bloomgrid::{Catalog, GalleryConfig, GridLayout, ScrollSurface, Viewport};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Flowers shown in the grid, in catalog order
    pub catalog: Catalog,

    /// Card grid geometry
    pub layout: GridLayout,

    /// Drag/wheel/momentum scrolling of the grid
    pub surface: ScrollSurface<RepaintScheduler>,

    /// Decoded card images
    pub images: ImageCache,

    /// Theme and styling state
    pub theme: ThemeState,
}

impl AppState {
    /// Creates the state for a freshly opened window.
    ///
    /// The scroll surface is mounted immediately; its extent is filled in by
    /// the gallery panel once the window size is known.
    pub fn new(ctx: &egui::Context, config: &GalleryConfig, source: GallerySource) -> Self {
        let mut surface = ScrollSurface::new(RepaintScheduler::new(ctx.clone()));
        surface.mount(Viewport::new());

        Self {
            catalog: source.catalog,
            layout: GridLayout::with_columns(config.columns),
            surface,
            images: ImageCache::new(source.base_dir),
            theme: ThemeState::with_theme(config.theme.clone()),
        }
    }
}
