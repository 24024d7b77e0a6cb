//! Application-level coordination for the gallery page.
//!
//! Handles per-frame housekeeping and the interactions reported by the
//! header and footer.

use crate::app::AppState;
use crate::ui::panel_manager::PanelInteraction;

/// Coordinates application-level operations.
///
/// This struct is responsible for:
/// - Collecting finished background image decodes once per frame
/// - Handling navigation requests from the page chrome
pub struct GalleryCoordinator;

impl GalleryCoordinator {
    /// Uploads images decoded since the last frame.
    ///
    /// Returns the number of images that finished (successfully or not).
    pub fn check_image_completion(ctx: &egui::Context, state: &mut AppState) -> usize {
        state.images.poll(ctx)
    }

    /// Handles an interaction reported by the panels.
    ///
    /// The page chrome links have no destination; requests are logged so the
    /// shell can be wired to real pages later.
    pub fn handle_interaction(state: &mut AppState, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::NavigationRequested(target) => {
                tracing::info!(
                    destination = target.label(),
                    offset = ?state.surface.offset(),
                    "navigation requested"
                );
            }
        }
    }
}
