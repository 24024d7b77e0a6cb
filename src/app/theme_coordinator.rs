//! Theme application.

use crate::app::AppState;

/// Applies the active theme to the egui context.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Applies the current theme to the egui context.
    ///
    /// Called every frame so visuals survive any reset by the integration.
    pub fn apply_current_theme(ctx: &egui::Context, state: &AppState) {
        let theme = state
            .theme
            .theme_manager()
            .theme_or_default(state.theme.current_theme_name());

        let mut visuals = if state.theme.is_light() {
            egui::Visuals::light()
        } else {
            egui::Visuals::dark()
        };

        state.theme.theme_manager().apply_theme(theme, &mut visuals);
        ctx.set_visuals(visuals);
    }
}
