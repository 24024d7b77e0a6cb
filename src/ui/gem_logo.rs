//! Faceted gem logo shown in the header and footer.
//!
//! The gem is a hexagon split into shaded facets, defined on a 100x100 grid
//! and scaled to the target rect.

use egui::{pos2, Color32, Pos2, Rect, Sense, Shape, Stroke, Vec2};
use bloomgrid::{hex_to_color32, with_alpha};

/// Facets in paint order: (outline on the 100x100 grid, fill).
const FACETS: [(&[(f32, f32)], &str); 9] = [
    (&[(50.0, 0.0), (100.0, 25.0), (100.0, 75.0), (50.0, 100.0), (0.0, 75.0), (0.0, 25.0)], "#0099ff"),
    (&[(50.0, 0.0), (100.0, 25.0), (50.0, 20.0)], "#00a2d3"),
    (&[(50.0, 0.0), (0.0, 25.0), (50.0, 20.0)], "#00b4e6"),
    (&[(0.0, 25.0), (0.0, 75.0), (50.0, 80.0)], "#008ac4"),
    (&[(100.0, 25.0), (100.0, 75.0), (50.0, 80.0)], "#007ab4"),
    (&[(0.0, 75.0), (50.0, 100.0), (50.0, 80.0)], "#00699f"),
    (&[(100.0, 75.0), (50.0, 100.0), (50.0, 80.0)], "#00578a"),
    (&[(50.0, 20.0), (50.0, 80.0), (0.0, 75.0), (0.0, 25.0)], "#009cd9"),
    (&[(50.0, 20.0), (50.0, 80.0), (100.0, 75.0), (100.0, 25.0)], "#008fcc"),
];

/// Maps a point on the 100x100 design grid into `rect`.
fn to_rect(rect: Rect, (x, y): (f32, f32)) -> Pos2 {
    pos2(
        rect.left() + x / 100.0 * rect.width(),
        rect.top() + y / 100.0 * rect.height(),
    )
}

/// Paints the gem into `rect`.
pub fn paint_gem_logo(painter: &egui::Painter, rect: Rect) {
    for (outline, fill) in FACETS {
        let points = outline.iter().map(|&p| to_rect(rect, p)).collect();
        painter.add(Shape::convex_polygon(points, hex_to_color32(fill), Stroke::NONE));
    }

    // Highlight edges
    let edge = Stroke::new(1.0, with_alpha(Color32::WHITE, 51));
    let rim = [(50.0, 0.0), (100.0, 25.0), (50.0, 100.0), (0.0, 75.0), (50.0, 0.0)];
    for pair in rim.windows(2) {
        painter.line_segment([to_rect(rect, pair[0]), to_rect(rect, pair[1])], edge);
    }
    painter.line_segment([to_rect(rect, (0.0, 25.0)), to_rect(rect, (100.0, 75.0))], edge);
    painter.line_segment([to_rect(rect, (50.0, 0.0)), to_rect(rect, (50.0, 100.0))], edge);
}

/// Allocates a square of `size` points in `ui` and paints the gem there.
pub fn gem_logo(ui: &mut egui::Ui, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    if ui.is_rect_visible(rect) {
        paint_gem_logo(ui.painter(), rect);
    }
    response
}
