//! Card grid geometry for the gallery.
//!
//! This module provides pure functions for:
//! - Placing each card of the catalog in content coordinates
//! - Computing the total content size and the scrollable extent
//! - Culling cards outside the visible region
//!
//! Content coordinates start at the top-left of the scrollable content; the
//! screen position of a card is its content rect shifted by the scroll offset.

use egui::{pos2, vec2, Rect, Vec2};
use std::ops::Range;

/// Default number of card columns.
pub const DEFAULT_COLUMNS: usize = 6;

/// Fixed grid geometry in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    /// Outer size of one card
    pub card_size: Vec2,
    /// Square image box at the top of each card
    pub image_size: Vec2,
    /// Inner padding of a card around the image and caption
    pub card_padding: f32,
    /// Space between the image box and the caption
    pub caption_gap: f32,
    pub column_gap: f32,
    pub row_gap: f32,
    /// Content padding; top/bottom leave room for the floating header and footer
    pub padding_top: f32,
    pub padding_bottom: f32,
    pub padding_x: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            card_size: vec2(288.0, 256.0),
            image_size: vec2(192.0, 192.0),
            card_padding: 16.0,
            caption_gap: 16.0,
            column_gap: 64.0,
            row_gap: 32.0,
            padding_top: 160.0,
            padding_bottom: 160.0,
            padding_x: 32.0,
        }
    }
}

impl GridLayout {
    /// Default geometry with a different column count (at least one).
    pub fn with_columns(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
            ..Self::default()
        }
    }

    fn column_pitch(&self) -> f32 {
        self.card_size.x + self.column_gap
    }

    fn row_pitch(&self) -> f32 {
        self.card_size.y + self.row_gap
    }

    /// Number of rows needed for `count` cards.
    pub fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    /// Content-space rectangle of the card at `index`.
    pub fn card_rect(&self, index: usize) -> Rect {
        let column = index % self.columns;
        let row = index / self.columns;
        let min = pos2(
            self.padding_x + column as f32 * self.column_pitch(),
            self.padding_top + row as f32 * self.row_pitch(),
        );
        Rect::from_min_size(min, self.card_size)
    }

    /// Image box inside a card rect, centered horizontally below the padding.
    pub fn image_rect(&self, card: Rect) -> Rect {
        let min = pos2(
            card.center().x - self.image_size.x / 2.0,
            card.top() + self.card_padding,
        );
        Rect::from_min_size(min, self.image_size)
    }

    /// Anchor (center-top) of the caption inside a card rect.
    pub fn caption_anchor(&self, card: Rect) -> egui::Pos2 {
        pos2(card.center().x, self.image_rect(card).bottom() + self.caption_gap)
    }

    /// Total content size for `count` cards, padding included.
    pub fn content_size(&self, count: usize) -> Vec2 {
        let columns = self.columns.min(count.max(1));
        let width = 2.0 * self.padding_x + columns as f32 * self.card_size.x
            + columns.saturating_sub(1) as f32 * self.column_gap;

        let rows = self.rows(count);
        let height = self.padding_top
            + self.padding_bottom
            + rows as f32 * self.card_size.y
            + rows.saturating_sub(1) as f32 * self.row_gap;

        vec2(width, height)
    }

    /// Largest scroll offset that keeps content covering the viewport.
    pub fn max_offset(&self, count: usize, viewport_size: Vec2) -> Vec2 {
        (self.content_size(count) - viewport_size).max(Vec2::ZERO)
    }

    /// Range of rows intersecting the visible region.
    pub fn visible_rows(&self, offset: Vec2, viewport_size: Vec2, count: usize) -> Range<usize> {
        let rows = self.rows(count);
        let top = offset.y - self.padding_top;
        let bottom = top + viewport_size.y;

        let first = (top / self.row_pitch()).floor().max(0.0) as usize;
        let last = if bottom <= 0.0 {
            0
        } else {
            ((bottom / self.row_pitch()).ceil() as usize).min(rows)
        };
        first.min(last)..last
    }

    /// Indices of the cards intersecting the visible region, in catalog order.
    pub fn visible_cards(&self, offset: Vec2, viewport_size: Vec2, count: usize) -> Vec<usize> {
        let visible = Rect::from_min_size(offset.to_pos2(), viewport_size);
        self.visible_rows(offset, viewport_size, count)
            .flat_map(|row| {
                let start = row * self.columns;
                start..(start + self.columns).min(count)
            })
            .filter(|&index| self.card_rect(index).intersects(visible))
            .collect()
    }
}
