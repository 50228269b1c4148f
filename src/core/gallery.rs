//! Clamped gallery carousel.
//!
//! Pages through `item_count` thumbnails, `items_per_view` at a time, one
//! thumbnail per step. Stepping past either end jumps to the opposite end
//! instead of stopping, so the strip never looks stuck without duplicating
//! any content.

/// Position state of the gallery strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryCarousel {
    current: usize,
    item_count: usize,
    items_per_view: usize,
}

impl GalleryCarousel {
    /// Creates a carousel at the first position.
    ///
    /// An `items_per_view` of zero is treated as one.
    pub fn new(item_count: usize, items_per_view: usize) -> Self {
        Self {
            current: 0,
            item_count,
            items_per_view: items_per_view.max(1),
        }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    /// Last valid position. Zero when everything fits in one view.
    #[inline]
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.items_per_view)
    }

    /// Advance one thumbnail, wrapping to the start after the last position.
    pub fn next(&mut self) {
        if self.current < self.max_index() {
            self.current += 1;
        } else {
            self.current = 0;
        }
    }

    /// Go back one thumbnail, wrapping to the last position from the start.
    pub fn prev(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        } else {
            self.current = self.max_index();
        }
    }

    /// Apply a new responsive width, keeping the position in range.
    pub fn set_items_per_view(&mut self, items_per_view: usize) {
        self.items_per_view = items_per_view.max(1);
        self.current = self.current.min(self.max_index());
    }

    /// Horizontal offset of the track as a percentage of its width.
    pub fn offset_percent(&self) -> f64 {
        if self.current == 0 {
            return 0.0;
        }
        -(self.current as f64) * (100.0 / self.items_per_view as f64)
    }

    /// CSS `transform` value for the track.
    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }
}
