//! Flower Gallery GUI Application
//!
//! Presents a flower catalog as a card grid that can be panned by dragging
//! with the mouse or with the wheel, gliding to a stop after input ends.
//! A floating header and a pinned footer frame the grid.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state, coordinators and the repaint-driven frame scheduler
//! - `state/` - UI-only state (theme)
//! - `io/` - Catalog resolution and background image decoding
//! - `ui/` - Page composition, panels, card painting and input handling
//!
//! Logging goes through `tracing`; set `RUST_LOG` (e.g. `RUST_LOG=bloomgrid=debug`)
//! to see interaction transitions.

use anyhow::Context as _;
use bloomgrid::GalleryConfig;
use clap::Parser;
use eframe::egui;
use std::path::PathBuf;

mod app;
mod io;
mod state;
mod ui;

use app::{AppState, GalleryCoordinator, ThemeCoordinator};
use ui::panel_manager::PanelManager;

/// Flower gallery with drag and wheel momentum scrolling
#[derive(Parser, Debug)]
#[command(name = "bloomgrid-gui")]
#[command(about = "Flower gallery with drag and wheel momentum scrolling", long_about = None)]
struct Cli {
    /// Catalog JSON file (defaults to the built-in collection)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme name (Stone, Dusk)
    #[arg(short, long)]
    theme: Option<String>,

    /// Number of grid columns
    #[arg(long)]
    columns: Option<usize>,
}

impl Cli {
    /// Loads the configuration file, if any, and applies flag overrides.
    fn resolve_config(&self) -> anyhow::Result<GalleryConfig> {
        let mut config = match &self.config {
            Some(path) => GalleryConfig::load(path)
                .with_context(|| format!("cannot load config {}", path.display()))?,
            None => GalleryConfig::default(),
        };

        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Main application entry point that initializes logging and launches the gallery window.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    let source = io::load_catalog(config.catalog.as_deref())?;

    tracing::info!(
        flowers = source.catalog.len(),
        theme = %config.theme,
        columns = config.columns,
        "starting gallery"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.title.clone()),
        ..Default::default()
    };

    let app_name = config.title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(GalleryApp::new(cc, &config, source)))),
    )
    .map_err(|e| anyhow::anyhow!("gallery window failed: {e}"))
}

/// The gallery application.
///
/// Delegates to coordinators:
/// - `GalleryCoordinator` handles image completion and navigation requests
/// - `ThemeCoordinator` applies the palette
/// - `PanelManager` lays out and renders the page
struct GalleryApp {
    /// Centralized application state
    state: AppState,
}

impl GalleryApp {
    fn new(cc: &eframe::CreationContext, config: &GalleryConfig, source: io::GallerySource) -> Self {
        Self {
            state: AppState::new(&cc.egui_ctx, config, source),
        }
    }
}

impl eframe::App for GalleryApp {
    /// Main update loop.
    ///
    /// 1. Upload images decoded since the last frame
    /// 2. Apply the theme
    /// 3. Render the page (momentum ticks and input run inside the gallery panel)
    /// 4. Handle navigation requests
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        GalleryCoordinator::check_image_completion(ctx, &mut self.state);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            GalleryCoordinator::handle_interaction(&mut self.state, interaction);
        }
    }
}

impl Drop for GalleryApp {
    fn drop(&mut self) {
        // Release any capture or pending momentum tick before the context goes away
        self.state.surface.unmount();
        tracing::info!("gallery closed");
    }
}
