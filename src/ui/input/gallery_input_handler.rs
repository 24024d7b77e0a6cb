//! Gallery input handling for drag and wheel scrolling.
//!
//! Translates raw egui events into scroll surface operations:
//! - Primary press on the gallery canvas starts a drag
//! - Pointer moves and the release are tracked window-wide while the
//!   surface holds the pointer capture, so drags may leave the canvas
//! - Wheel input over the canvas feeds the momentum glide; egui's own
//!   scroll handling never sees it
//!
//! Events are processed in arrival order so every pointer move within a
//! frame contributes its own delta, as separate mouse-move events would.

use bloomgrid::{FrameScheduler, ScrollSurface};
use egui::{Event, MouseWheelUnit, PointerButton, Vec2};

/// Points per wheel "line" for line-based wheel devices.
///
/// One notch on a line-based wheel is one line; browsers report about 100
/// pixels of `deltaY` for it.
const LINE_HEIGHT_POINTS: f32 = 100.0;

/// Handles all gallery input for this frame.
///
/// # Arguments
/// * `ctx` - The egui context for input access
/// * `canvas_response` - Interaction response covering the gallery canvas
/// * `surface` - The scroll surface receiving the operations
pub fn handle_gallery_input<S: FrameScheduler>(
    ctx: &egui::Context,
    canvas_response: &egui::Response,
    surface: &mut ScrollSurface<S>,
) {
    let canvas_rect = canvas_response.rect;
    let hovered = canvas_response.hovered() || canvas_response.contains_pointer();
    let events = ctx.input(|i| i.events.clone());
    let mut wheel_consumed = false;

    for event in &events {
        match event {
            Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } if hovered && canvas_rect.contains(*pos) => {
                surface.on_pointer_down(*pos);
            }
            Event::PointerMoved(pos) if surface.captures_pointer() => {
                surface.on_pointer_move(*pos);
            }
            Event::PointerButton {
                button: PointerButton::Primary,
                pressed: false,
                ..
            } if surface.captures_pointer() => {
                surface.on_pointer_up();
            }
            Event::MouseWheel { unit, delta, .. } if hovered => {
                let delta_y = wheel_delta_points(*unit, *delta, canvas_rect.height());
                if delta_y != 0.0 {
                    surface.on_wheel(delta_y);
                }
                wheel_consumed = true;
            }
            _ => {}
        }
    }

    // Release missed (e.g. button let go outside the window)
    if surface.captures_pointer() && !ctx.input(|i| i.pointer.primary_down()) {
        tracing::debug!("primary button up without release event, ending drag");
        surface.on_pointer_up();
    }

    if wheel_consumed {
        ctx.input_mut(|i| {
            i.raw_scroll_delta = Vec2::ZERO;
            i.smooth_scroll_delta = Vec2::ZERO;
        });
    }

    if hovered || surface.captures_pointer() {
        ctx.set_cursor_icon(surface.cursor());
    }
}

/// Converts an egui wheel delta into a vertical delta in points where
/// positive means "scroll down".
///
/// egui reports the direction content should move, which is the inverse.
pub fn wheel_delta_points(unit: MouseWheelUnit, delta: Vec2, page_height: f32) -> f32 {
    let scale = match unit {
        MouseWheelUnit::Point => 1.0,
        MouseWheelUnit::Line => LINE_HEIGHT_POINTS,
        MouseWheelUnit::Page => page_height,
    };
    -delta.y * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloomgrid::{FrameQueue, Viewport, WHEEL_GAIN};
    use egui::{pos2, vec2, Modifiers, Pos2, RawInput, Rect, Sense};

    /// Inside the canvas.
    const INSIDE: Pos2 = pos2(200.0, 200.0);
    /// Outside the canvas but inside the window.
    const OUTSIDE: Pos2 = pos2(700.0, 550.0);

    /// Headless egui context hosting a 300x300 canvas at (100, 100).
    struct Harness {
        ctx: egui::Context,
        surface: ScrollSurface<FrameQueue>,
    }

    impl Harness {
        fn new() -> Self {
            let mut viewport = Viewport::with_max_offset(vec2(5_000.0, 5_000.0));
            viewport.scroll_to(vec2(1_000.0, 1_000.0));
            let mut surface = ScrollSurface::new(FrameQueue::new());
            surface.mount(viewport);
            Self {
                ctx: egui::Context::default(),
                surface,
            }
        }

        /// Runs one pass with `events` as the frame's raw input.
        fn frame(&mut self, events: Vec<Event>) {
            let raw_input = RawInput {
                events,
                ..Default::default()
            };
            let surface = &mut self.surface;
            let _ = self.ctx.run(raw_input, |ctx| {
                egui::CentralPanel::default()
                    .frame(egui::Frame::NONE)
                    .show(ctx, |ui| {
                        let canvas = Rect::from_min_size(pos2(100.0, 100.0), vec2(300.0, 300.0));
                        let response = ui.interact(canvas, ui.id().with("canvas"), Sense::drag());
                        handle_gallery_input(ctx, &response, surface);
                    });
            });
        }

        /// Hovers `pos` for one pass so the canvas is known to hit testing.
        fn hover(&mut self, pos: Pos2) {
            self.frame(vec![Event::PointerMoved(pos)]);
        }
    }

    fn primary(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_drag_keeps_tracking_outside_canvas() {
        let mut harness = Harness::new();
        harness.hover(INSIDE);
        harness.frame(vec![primary(INSIDE, true)]);
        assert!(harness.surface.captures_pointer());

        harness.frame(vec![Event::PointerMoved(OUTSIDE)]);
        assert_eq!(harness.surface.offset(), vec2(500.0, 650.0));
        assert_eq!(harness.surface.interaction().velocity(), vec2(-500.0, -350.0));

        harness.frame(vec![primary(OUTSIDE, false)]);
        assert!(!harness.surface.interaction().is_dragging());
        assert!(!harness.surface.captures_pointer());
        assert!(harness.surface.interaction().is_animating());
    }

    #[test]
    fn test_moves_without_press_are_ignored() {
        let mut harness = Harness::new();
        harness.hover(INSIDE);
        harness.frame(vec![Event::PointerMoved(pos2(250.0, 260.0))]);
        harness.frame(vec![Event::PointerMoved(OUTSIDE)]);

        assert_eq!(harness.surface.offset(), vec2(1_000.0, 1_000.0));
        assert!(!harness.surface.interaction().is_dragging());
        assert!(!harness.surface.captures_pointer());
    }

    #[test]
    fn test_press_outside_canvas_does_not_capture() {
        let mut harness = Harness::new();
        harness.hover(OUTSIDE);
        harness.frame(vec![primary(OUTSIDE, true)]);

        assert!(!harness.surface.captures_pointer());
        assert!(!harness.surface.interaction().is_dragging());
    }

    #[test]
    fn test_missed_release_ends_drag() {
        let mut harness = Harness::new();
        harness.hover(INSIDE);

        // Capture held, but egui never saw the button go down or up
        harness.surface.on_pointer_down(INSIDE);
        assert!(harness.surface.captures_pointer());
        harness.frame(Vec::new());

        assert!(!harness.surface.interaction().is_dragging());
        assert!(!harness.surface.captures_pointer());
        assert!(harness.surface.interaction().is_animating());
    }

    #[test]
    fn test_wheel_over_canvas_feeds_momentum_and_is_consumed() {
        let mut harness = Harness::new();
        harness.hover(INSIDE);
        harness.frame(vec![Event::MouseWheel {
            unit: MouseWheelUnit::Point,
            delta: vec2(0.0, -20.0),
            modifiers: Modifiers::NONE,
        }]);

        assert_eq!(harness.surface.interaction().velocity(), vec2(0.0, 20.0 * WHEEL_GAIN));
        assert!(harness.surface.interaction().is_animating());
        assert_eq!(harness.ctx.input(|i| i.raw_scroll_delta), Vec2::ZERO);
    }

    #[test]
    fn test_wheel_outside_canvas_is_ignored() {
        let mut harness = Harness::new();
        harness.hover(OUTSIDE);
        harness.frame(vec![Event::MouseWheel {
            unit: MouseWheelUnit::Point,
            delta: vec2(0.0, -20.0),
            modifiers: Modifiers::NONE,
        }]);

        assert_eq!(harness.surface.interaction().velocity(), Vec2::ZERO);
        assert!(!harness.surface.interaction().is_animating());
    }

    #[test]
    fn test_wheel_down_is_positive() {
        assert_eq!(wheel_delta_points(MouseWheelUnit::Point, vec2(0.0, -12.0), 600.0), 12.0);
    }

    #[test]
    fn test_wheel_units_scaled() {
        assert_eq!(wheel_delta_points(MouseWheelUnit::Line, vec2(0.0, -1.0), 600.0), 100.0);
        assert_eq!(wheel_delta_points(MouseWheelUnit::Page, vec2(0.0, 1.0), 600.0), -600.0);
    }

    #[test]
    fn test_horizontal_wheel_ignored() {
        assert_eq!(wheel_delta_points(MouseWheelUnit::Point, vec2(30.0, 0.0), 600.0), 0.0);
    }
}
