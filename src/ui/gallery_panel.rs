//! Gallery panel UI rendering
//!
//! Fills the whole window behind the header and footer with the flower
//! grid and hosts the scroll surface. Each frame it:
//! 1. Updates the surface's scrollable extent from the window size
//! 2. Runs momentum ticks that came due since the last frame
//! 3. Applies new pointer and wheel input
//! 4. Paints the cards intersecting the viewport

use crate::app::AppState;
use crate::ui::flower_card;
use crate::ui::input::gallery_input_handler;
use bloomgrid::{ThemeColors, Viewport};

/// Renders the gallery into the full rect of `ui`.
pub fn render_gallery_panel(ui: &mut egui::Ui, state: &mut AppState, theme_colors: &ThemeColors) {
    let canvas_rect = ui.max_rect();
    let canvas_response = ui.interact(canvas_rect, ui.id().with("gallery_canvas"), egui::Sense::drag());

    let count = state.catalog.len();
    let max_offset = state.layout.max_offset(count, canvas_rect.size());
    match state.surface.viewport_mut() {
        Some(viewport) => viewport.set_max_offset(max_offset),
        None => state.surface.mount(Viewport::with_max_offset(max_offset)),
    }

    state.surface.run_due_frames();
    gallery_input_handler::handle_gallery_input(ui.ctx(), &canvas_response, &mut state.surface);

    let offset = state.surface.offset();
    let painter = ui.painter_at(canvas_rect);
    let screen_shift = canvas_rect.min.to_vec2() - offset;

    for index in state.layout.visible_cards(offset, canvas_rect.size(), count) {
        let Some(flower) = state.catalog.get(index) else {
            continue;
        };
        let card = state.layout.card_rect(index).translate(screen_shift);
        let texture = state.images.texture_for(ui.ctx(), flower);
        flower_card::paint_flower_card(&painter, &state.layout, card, flower, texture, theme_colors);
    }

    if state.images.is_loading() {
        ui.ctx().request_repaint_after(std::time::Duration::from_millis(100));
    }
}
