//! Panel orchestration and layout management.
//!
//! Composes the page: the gallery fills the window, the header floats over
//! its top edge and the footer is pinned over its bottom edge.

use crate::app::AppState;
use crate::ui::{footer, gallery_panel, header};

/// Destinations offered by the header buttons and footer links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    NewArrival,
    Collections,
    GridView,
    AboutUs,
    ShippingPolicy,
    ContactUs,
}

impl NavTarget {
    /// Text shown on the button or link.
    pub fn label(self) -> &'static str {
        match self {
            NavTarget::NewArrival => "new arrival",
            NavTarget::Collections => "collections",
            NavTarget::GridView => "grid view",
            NavTarget::AboutUs => "About us",
            NavTarget::ShippingPolicy => "Shipping policy",
            NavTarget::ContactUs => "Contact us",
        }
    }
}

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelInteraction {
    /// A header button or footer link was clicked
    NavigationRequested(NavTarget),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders the whole page.
    ///
    /// This is the main entry point for rendering the UI, called from the
    /// eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let theme_colors = state.theme.colors().clone();

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme_colors.background))
            .show(ctx, |ui| {
                gallery_panel::render_gallery_panel(ui, state, &theme_colors);
            });

        let header_click = header::render_header(ctx, &theme_colors);
        let footer_click = footer::render_footer(ctx, &theme_colors);

        header_click
            .or(footer_click)
            .map(PanelInteraction::NavigationRequested)
    }
}
