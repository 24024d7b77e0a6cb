//! Header UI rendering
//!
//! The header floats over the top of the gallery: logo and title on the
//! left, pill-shaped navigation buttons on the right. Only the two clusters
//! take pointer input, so the gallery stays draggable between them.

use crate::ui::gem_logo;
use crate::ui::panel_manager::NavTarget;
use bloomgrid::ThemeColors;
use egui::{Align2, FontId, Id, Order, RichText, Sense, Stroke};

/// Header buttons, left to right.
const NAV_BUTTONS: [NavTarget; 3] = [NavTarget::NewArrival, NavTarget::Collections, NavTarget::GridView];

/// Offset of both clusters from the window edges.
const EDGE_MARGIN: egui::Vec2 = egui::vec2(32.0, 16.0);

/// Renders the floating header.
///
/// # Arguments
/// * `ctx` - The egui context the header areas are placed in
/// * `colors` - The active palette
///
/// # Returns
/// * `Option<NavTarget>` - The navigation button clicked this frame, if any
pub fn render_header(ctx: &egui::Context, colors: &ThemeColors) -> Option<NavTarget> {
    egui::Area::new(Id::new("header_brand"))
        .order(Order::Foreground)
        .anchor(Align2::LEFT_TOP, EDGE_MARGIN)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 16.0;
                gem_logo::gem_logo(ui, 48.0);
                glowing_title(ui, "Flowers", colors);
            });
        });

    let mut clicked = None;

    egui::Area::new(Id::new("header_nav"))
        .order(Order::Foreground)
        .anchor(Align2::RIGHT_TOP, egui::vec2(-EDGE_MARGIN.x, EDGE_MARGIN.y + 8.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 8.0;
                for target in NAV_BUTTONS {
                    let button = egui::Button::new(
                        RichText::new(target.label()).size(14.0).color(colors.pill_text),
                    )
                    .fill(colors.pill_fill)
                    .stroke(Stroke::new(1.0, colors.pill_border))
                    .corner_radius(egui::CornerRadius::same(18))
                    .min_size(egui::vec2(0.0, 34.0));

                    if ui.add(button).clicked() {
                        clicked = Some(target);
                    }
                }
            });
        });

    clicked
}

/// Paints the page title with a soft halo so it stays legible over cards.
fn glowing_title(ui: &mut egui::Ui, text: &str, colors: &ThemeColors) {
    let font = FontId::proportional(36.0);
    let galley = ui.painter().layout_no_wrap(text.to_owned(), font.clone(), colors.title);
    let (rect, _) = ui.allocate_exact_size(galley.size(), Sense::hover());

    let painter = ui.painter();
    for offset in [(-1.5, 0.0), (1.5, 0.0), (0.0, -1.5), (0.0, 1.5), (-1.0, -1.0), (1.0, 1.0)] {
        painter.text(
            rect.min + egui::vec2(offset.0, offset.1),
            Align2::LEFT_TOP,
            text,
            font.clone(),
            colors.title_glow,
        );
    }
    painter.text(rect.min, Align2::LEFT_TOP, text, font, colors.title);
}
