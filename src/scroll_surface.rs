//! Drag- and wheel-driven scrolling with momentum.
//!
//! A [`ScrollSurface`] turns pointer and wheel input into scroll offset
//! changes on its [`Viewport`], then keeps the content gliding after release
//! by decaying the last velocity every frame:
//!
//! - Pointer down cancels any glide and starts tracking
//! - Pointer move scrolls opposite to the pointer delta, so content follows
//!   the pointer, and records the negated delta as velocity
//! - Pointer up starts the glide with that velocity
//! - Wheel input adds `delta_y * 0.5` to the vertical velocity and
//!   (re)starts the glide
//! - Each frame applies the velocity, multiplies it by 0.95, and reschedules
//!   while either component is above 0.5
//!
//! Window-wide move/up events are only meaningful while a drag is active.
//! The surface exposes that as a scoped [`PointerCapture`], and hosts should
//! forward move/up events only while [`ScrollSurface::captures_pointer`]
//! is true.

use crate::interaction::InteractionState;
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::viewport::Viewport;
use egui::{CursorIcon, Pos2, Vec2};

/// Per-frame velocity multiplier during a glide.
pub const FRICTION: f32 = 0.95;
/// Velocity magnitude at or below which a glide stops.
pub const STOP_THRESHOLD: f32 = 0.5;
/// Scale applied to wheel deltas before they are added to velocity.
pub const WHEEL_GAIN: f32 = 0.5;

/// Window-wide pointer subscription held for the duration of one drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerCapture {
    /// Where the drag started
    origin: Pos2,
}

impl PointerCapture {
    pub fn origin(&self) -> Pos2 {
        self.origin
    }
}

/// A scrollable region with drag, wheel and momentum handling.
///
/// All operations are no-ops while the surface has no mounted viewport.
#[derive(Debug)]
pub struct ScrollSurface<S: FrameScheduler> {
    viewport: Option<Viewport>,
    interaction: InteractionState,
    capture: Option<PointerCapture>,
    scheduler: S,
}

impl<S: FrameScheduler> ScrollSurface<S> {
    /// Creates an unmounted surface driven by `scheduler`.
    pub fn new(scheduler: S) -> Self {
        Self {
            viewport: None,
            interaction: InteractionState::new(),
            capture: None,
            scheduler,
        }
    }

    // ===== Lifecycle =====

    /// Attaches a viewport. Any previous viewport is replaced.
    pub fn mount(&mut self, viewport: Viewport) {
        tracing::debug!(offset = ?viewport.offset(), "scroll surface mounted");
        self.viewport = Some(viewport);
    }

    /// Detaches the viewport and releases the capture and any pending tick.
    ///
    /// Returns the detached viewport, if one was mounted.
    pub fn unmount(&mut self) -> Option<Viewport> {
        self.cancel_momentum();
        self.release_capture();
        self.interaction.reset();
        let viewport = self.viewport.take();
        if viewport.is_some() {
            tracing::debug!("scroll surface unmounted");
        }
        viewport
    }

    pub fn is_mounted(&self) -> bool {
        self.viewport.is_some()
    }

    // ===== Queries =====

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Mutable viewport access for the host, e.g. to update the extent.
    pub fn viewport_mut(&mut self) -> Option<&mut Viewport> {
        self.viewport.as_mut()
    }

    /// Current scroll offset, or zero when unmounted.
    pub fn offset(&self) -> Vec2 {
        self.viewport.map(|v| v.offset()).unwrap_or(Vec2::ZERO)
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Returns true while window-wide move/up events should be forwarded.
    pub fn captures_pointer(&self) -> bool {
        self.capture.is_some()
    }

    pub fn capture(&self) -> Option<PointerCapture> {
        self.capture
    }

    /// Cursor to show over the surface.
    pub fn cursor(&self) -> CursorIcon {
        if self.interaction.is_dragging() {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Grab
        }
    }

    // ===== Input =====

    /// Begins a drag at `pos`, halting any glide in progress.
    pub fn on_pointer_down(&mut self, pos: Pos2) {
        if self.viewport.is_none() {
            return;
        }

        self.interaction.begin_drag(pos);
        self.cancel_momentum();
        self.capture = Some(PointerCapture { origin: pos });
        tracing::debug!(?pos, "drag started");
    }

    /// Scrolls by the negated pointer delta. Ignored unless dragging.
    pub fn on_pointer_move(&mut self, pos: Pos2) {
        if !self.interaction.is_dragging() {
            return;
        }
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };

        let delta = self.interaction.track_pointer(pos);
        viewport.scroll_by(-delta);
        self.interaction.set_velocity(-delta);
    }

    /// Ends the drag and starts the glide. Ignored unless dragging.
    pub fn on_pointer_up(&mut self) {
        if !self.interaction.is_dragging() {
            return;
        }

        self.interaction.end_drag();
        self.release_capture();
        tracing::debug!(velocity = ?self.interaction.velocity(), "drag released");
        self.begin_momentum();
    }

    /// Feeds a wheel delta (positive = scroll down) into the glide.
    ///
    /// Deltas accumulate onto the current velocity, so quick successive
    /// wheel events compound. While a drag is active the drag keeps exclusive
    /// control of the offset and wheel input is dropped.
    pub fn on_wheel(&mut self, delta_y: f32) {
        if self.viewport.is_none() || self.interaction.is_dragging() {
            return;
        }

        self.cancel_momentum();
        self.interaction.add_velocity(Vec2::new(0.0, delta_y * WHEEL_GAIN));
        self.begin_momentum();
    }

    // ===== Momentum =====

    /// Runs one momentum tick for `handle`.
    ///
    /// Handles other than the one currently scheduled are stale (cancelled or
    /// superseded) and are ignored.
    pub fn on_animation_frame(&mut self, handle: FrameHandle) {
        if self.interaction.animation() != Some(handle) {
            tracing::trace!(handle = handle.id(), "ignoring stale frame");
            return;
        }
        self.interaction.set_animation(None);

        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };

        let velocity = self.interaction.velocity();
        viewport.scroll_by(velocity);

        let decayed = velocity * FRICTION;
        self.interaction.set_velocity(decayed);

        if decayed.x.abs() > STOP_THRESHOLD || decayed.y.abs() > STOP_THRESHOLD {
            let next = self.scheduler.request_frame();
            self.interaction.set_animation(Some(next));
        } else {
            tracing::debug!(offset = ?viewport.offset(), "momentum settled");
        }
    }

    /// Delivers every due frame from the scheduler and returns how many
    /// were delivered.
    pub fn run_due_frames(&mut self) -> usize {
        let due = self.scheduler.take_due();
        let count = due.len();
        for handle in due {
            self.on_animation_frame(handle);
        }
        count
    }

    /// Stops any glide in progress. Safe to call when idle.
    pub fn cancel_momentum(&mut self) {
        if let Some(handle) = self.interaction.take_animation() {
            self.scheduler.cancel_frame(handle);
        }
    }

    fn begin_momentum(&mut self) {
        self.cancel_momentum();
        let handle = self.scheduler.request_frame();
        self.interaction.set_animation(Some(handle));
    }

    fn release_capture(&mut self) {
        if self.capture.take().is_some() {
            tracing::trace!("pointer capture released");
        }
    }
}

impl<S: FrameScheduler> Drop for ScrollSurface<S> {
    fn drop(&mut self) {
        self.cancel_momentum();
        self.release_capture();
    }
}
