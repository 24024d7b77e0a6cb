//! Scroll position of the gallery viewport.
//!
//! Mirrors a native scroll container: the offset is the distance the content
//! has been scrolled left/up, and it never leaves `[0, max_offset]` on either
//! axis.

use egui::Vec2;

/// Scroll offset plus the extent it is clamped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Current scroll offset (x = scroll left, y = scroll top)
    offset: Vec2,
    /// Largest reachable offset; `None` until the content extent is known
    max_offset: Option<Vec2>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates a viewport at the origin with no upper bound.
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            max_offset: None,
        }
    }

    /// Creates a viewport at the origin bounded by `max_offset`.
    pub fn with_max_offset(max_offset: Vec2) -> Self {
        let mut viewport = Self::new();
        viewport.set_max_offset(max_offset);
        viewport
    }

    // ===== Queries =====

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn max_offset(&self) -> Option<Vec2> {
        self.max_offset
    }

    // ===== Mutations =====

    /// Updates the scrollable extent, e.g. after a window resize.
    ///
    /// The current offset is re-clamped so it stays reachable.
    pub fn set_max_offset(&mut self, max_offset: Vec2) {
        self.max_offset = Some(max_offset.max(Vec2::ZERO));
        self.offset = self.clamp(self.offset);
    }

    /// Moves to an absolute offset, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: Vec2) {
        self.offset = self.clamp(offset);
    }

    /// Moves by a relative amount and returns the delta actually applied.
    ///
    /// The applied delta differs from `delta` only when an edge is hit.
    pub fn scroll_by(&mut self, delta: Vec2) -> Vec2 {
        let before = self.offset;
        self.offset = self.clamp(self.offset + delta);
        self.offset - before
    }

    fn clamp(&self, offset: Vec2) -> Vec2 {
        let offset = offset.max(Vec2::ZERO);
        match self.max_offset {
            Some(max) => offset.min(max),
            None => offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn test_scroll_by_accumulates() {
        let mut viewport = Viewport::new();
        viewport.scroll_by(vec2(10.0, 20.0));
        viewport.scroll_by(vec2(5.0, -5.0));
        assert_eq!(viewport.offset(), vec2(15.0, 15.0));
    }

    #[test]
    fn test_offset_never_negative() {
        let mut viewport = Viewport::new();
        let applied = viewport.scroll_by(vec2(-30.0, 12.0));
        assert_eq!(viewport.offset(), vec2(0.0, 12.0));
        assert_eq!(applied, vec2(0.0, 12.0));
    }

    #[test]
    fn test_offset_clamped_to_extent() {
        let mut viewport = Viewport::with_max_offset(vec2(100.0, 50.0));
        viewport.scroll_to(vec2(500.0, 500.0));
        assert_eq!(viewport.offset(), vec2(100.0, 50.0));
    }

    #[test]
    fn test_shrinking_extent_reclamps_offset() {
        let mut viewport = Viewport::with_max_offset(vec2(400.0, 400.0));
        viewport.scroll_to(vec2(300.0, 300.0));
        viewport.set_max_offset(vec2(200.0, -10.0));
        assert_eq!(viewport.offset(), vec2(200.0, 0.0));
        assert_eq!(viewport.max_offset(), Some(vec2(200.0, 0.0)));
    }
}
