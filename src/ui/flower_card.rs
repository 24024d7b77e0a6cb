//! Flower card painting.
//!
//! A card is an image box with the flower name centered underneath. Images
//! are scaled down (never up) to fit the box, keeping their aspect ratio.

use bloomgrid::{Flower, GridLayout, ThemeColors};
use egui::{pos2, Align2, Color32, FontId, Rect, Vec2};
use std::f32::consts::TAU;

/// Paints one card at its on-screen rect.
pub fn paint_flower_card(
    painter: &egui::Painter,
    layout: &GridLayout,
    card: Rect,
    flower: &Flower,
    texture: Option<&egui::TextureHandle>,
    colors: &ThemeColors,
) {
    let image_box = layout.image_rect(card);

    match texture {
        Some(texture) => {
            let rect = fit_within(image_box, texture.size_vec2());
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
        None => paint_placeholder(painter, image_box, colors),
    }

    painter.text(
        layout.caption_anchor(card),
        Align2::CENTER_TOP,
        &flower.name,
        FontId::proportional(20.0),
        colors.caption,
    );
}

/// Largest rect with `size`'s aspect ratio that fits in `bounds`, centered.
///
/// Images smaller than `bounds` keep their natural size.
pub fn fit_within(bounds: Rect, size: Vec2) -> Rect {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Rect::from_center_size(bounds.center(), Vec2::ZERO);
    }

    let scale = (bounds.width() / size.x).min(bounds.height() / size.y).min(1.0);
    Rect::from_center_size(bounds.center(), size * scale)
}

/// Simple five-petal blossom drawn where an image is missing.
fn paint_placeholder(painter: &egui::Painter, image_box: Rect, colors: &ThemeColors) {
    let center = image_box.center();
    let radius = image_box.width().min(image_box.height()) / 6.0;

    for petal in 0..5 {
        let angle = petal as f32 / 5.0 * TAU - TAU / 4.0;
        let petal_center = center + Vec2::angled(angle) * radius * 1.1;
        painter.circle_filled(petal_center, radius, colors.placeholder_petal);
    }
    painter.circle_filled(center, radius * 0.6, colors.placeholder);
}
