//! Transient pointer interaction state for a scroll surface.
//!
//! This module encapsulates the state of an ongoing drag and the glide that
//! follows it. Nothing here is persisted; the state lives exactly as long as
//! the surface that owns it.

use crate::scheduler::FrameHandle;
use egui::{Pos2, Vec2};

/// State of the drag/momentum interaction.
///
/// Invariants:
/// - `animation` is `Some` only while a momentum tick is scheduled
/// - `dragging` is true only between a press and its matching release
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    /// Whether the primary button is held on the surface
    dragging: bool,
    /// Last observed pointer position during a drag
    last_pointer: Pos2,
    /// Glide velocity in scroll units per frame
    velocity: Vec2,
    /// In-flight momentum tick, if any
    animation: Option<FrameHandle>,
}

impl InteractionState {
    /// Creates an idle interaction state.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn last_pointer(&self) -> Pos2 {
        self.last_pointer
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn animation(&self) -> Option<FrameHandle> {
        self.animation
    }

    /// Returns true while a momentum tick is scheduled.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    // ===== Mutations (driven by the owning surface) =====

    /// Starts a drag at `pos` with no carried-over velocity.
    pub(crate) fn begin_drag(&mut self, pos: Pos2) {
        self.dragging = true;
        self.last_pointer = pos;
        self.velocity = Vec2::ZERO;
    }

    /// Records a pointer move and returns the delta from the previous position.
    pub(crate) fn track_pointer(&mut self, pos: Pos2) -> Vec2 {
        let delta = pos - self.last_pointer;
        self.last_pointer = pos;
        delta
    }

    pub(crate) fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub(crate) fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub(crate) fn add_velocity(&mut self, delta: Vec2) {
        self.velocity += delta;
    }

    pub(crate) fn set_animation(&mut self, handle: Option<FrameHandle>) {
        self.animation = handle;
    }

    pub(crate) fn take_animation(&mut self) -> Option<FrameHandle> {
        self.animation.take()
    }

    /// Returns every field to idle.
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_track_pointer_reports_delta_and_moves_anchor() {
        let mut state = InteractionState::new();
        state.begin_drag(pos2(100.0, 100.0));
        assert_eq!(state.last_pointer(), pos2(100.0, 100.0));

        assert_eq!(state.track_pointer(pos2(90.0, 110.0)), vec2(-10.0, 10.0));
        assert_eq!(state.last_pointer(), pos2(90.0, 110.0));
        assert_eq!(state.track_pointer(pos2(95.0, 110.0)), vec2(5.0, 0.0));
    }

    #[test]
    fn test_begin_drag_clears_velocity() {
        let mut state = InteractionState::new();
        state.add_velocity(vec2(3.0, 4.0));
        state.begin_drag(pos2(0.0, 0.0));

        assert!(state.is_dragging());
        assert_eq!(state.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut state = InteractionState::new();
        state.begin_drag(pos2(7.0, 7.0));
        state.set_velocity(vec2(1.0, 1.0));
        state.reset();
        assert_eq!(state, InteractionState::new());
    }
}
