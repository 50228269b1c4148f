//! Looping news carousel.
//!
//! The track holds the `N` original cards followed by a copy of all of
//! them, so `2N` physical slots render a logical ring of `N`. The carousel
//! animates forward into the copy and, once the slide into slot `N` has
//! finished, snaps back to slot 0, which shows the same cards. Going back
//! from slot 0 does the reverse: snap to `N`, then animate to `N - 1`.
//!
//! The state machine emits [`TrackFrame`]s. The caller applies them in
//! order, flushing layout between a snap and the animation that follows it.

/// One position update for the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackFrame {
    /// Physical slot to show at the left edge.
    pub index: usize,
    /// Whether to move with the CSS transition or jump instantly.
    pub animate: bool,
}

impl TrackFrame {
    #[inline]
    fn snap(index: usize) -> Self {
        Self { index, animate: false }
    }

    #[inline]
    fn slide(index: usize) -> Self {
        Self { index, animate: true }
    }
}

/// Measured geometry of one slide on the track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlideMetrics {
    pub slide_width: f64,
    pub gap: f64,
}

impl SlideMetrics {
    /// Distance between the left edges of two neighbouring slides.
    #[inline]
    pub fn step(&self) -> f64 {
        self.slide_width + self.gap
    }

    /// Pixel offset of the track when `index` is at the left edge.
    pub fn offset(&self, index: usize) -> f64 {
        if index == 0 {
            return 0.0;
        }
        -(index as f64) * self.step()
    }

    /// CSS `transform` value for the track.
    pub fn transform(&self, index: usize) -> String {
        format!("translateX({}px)", self.offset(index))
    }
}

/// Parse a computed CSS length such as `"24px"` into pixels.
///
/// Takes the leading number like `parseFloat` does. Values without one
/// (`"normal"`, empty) are zero.
pub fn parse_css_px(value: &str) -> f64 {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);
    value[..end].parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Position state of the looping news track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsCarousel {
    current: usize,
    original_count: usize,
    /// Ticket of the wrap reset waiting on the current slide to finish.
    pending_reset: Option<u64>,
    next_ticket: u64,
}

impl NewsCarousel {
    /// Creates a carousel over `original_count` cards (before cloning).
    pub fn new(original_count: usize) -> Self {
        Self {
            current: 0,
            original_count,
            pending_reset: None,
            next_ticket: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// Number of slots on the track once the copy is appended.
    #[inline]
    pub fn physical_len(&self) -> usize {
        self.original_count * 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.original_count == 0
    }

    /// Ticket of the pending wrap reset, if any.
    #[inline]
    pub fn pending_reset(&self) -> Option<u64> {
        self.pending_reset
    }

    /// The current position without animation.
    pub fn current_frame(&self) -> TrackFrame {
        TrackFrame::snap(self.current)
    }

    /// Advance one card.
    pub fn next(&mut self) -> Vec<TrackFrame> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut frames = Vec::with_capacity(2);
        if self.current >= self.original_count {
            // Still sitting on the copy: finish the wrap before moving on.
            self.pending_reset = None;
            self.current = 0;
            frames.push(TrackFrame::snap(0));
        }

        self.current += 1;
        frames.push(TrackFrame::slide(self.current));

        if self.current >= self.original_count {
            self.pending_reset = Some(self.take_ticket());
        }
        frames
    }

    /// Go back one card.
    pub fn prev(&mut self) -> Vec<TrackFrame> {
        if self.is_empty() {
            return Vec::new();
        }

        self.pending_reset = None;
        if self.current == 0 {
            self.current = self.original_count - 1;
            return vec![
                TrackFrame::snap(self.original_count),
                TrackFrame::slide(self.current),
            ];
        }

        self.current -= 1;
        vec![TrackFrame::slide(self.current)]
    }

    /// Signal that the slide armed with `ticket` has finished.
    ///
    /// Returns the snap back to the start when that slide ended on the copy.
    /// Stale or repeated tickets are ignored.
    pub fn transition_finished(&mut self, ticket: u64) -> Option<TrackFrame> {
        if self.pending_reset != Some(ticket) {
            return None;
        }
        self.pending_reset = None;
        self.current = 0;
        Some(TrackFrame::snap(0))
    }

    /// Finish whatever wrap reset is pending.
    pub fn settle(&mut self) -> Option<TrackFrame> {
        let ticket = self.pending_reset?;
        self.transition_finished(ticket)
    }

    /// Re-sync after the viewport size changed.
    pub fn resize(&mut self) -> TrackFrame {
        if self.current >= self.original_count {
            self.pending_reset = None;
            self.current = 0;
        }
        TrackFrame::snap(self.current)
    }

    fn take_ticket(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: SlideMetrics = SlideMetrics {
        slide_width: 300.0,
        gap: 24.0,
    };

    fn last(frames: &[TrackFrame]) -> TrackFrame {
        *frames.last().expect("at least one frame")
    }

    #[test]
    fn test_parse_css_px() {
        assert_eq!(parse_css_px("24px"), 24.0);
        assert_eq!(parse_css_px(" 1.5px "), 1.5);
        assert_eq!(parse_css_px("32"), 32.0);
        assert_eq!(parse_css_px("-4px"), -4.0);
        assert_eq!(parse_css_px("normal"), 0.0);
        assert_eq!(parse_css_px(""), 0.0);
        assert_eq!(parse_css_px("24px 12px"), 24.0);
    }

    #[test]
    fn test_metrics_offset() {
        assert_eq!(METRICS.step(), 324.0);
        assert_eq!(METRICS.offset(0), 0.0);
        assert_eq!(METRICS.offset(2), -648.0);
        assert_eq!(METRICS.transform(0), "translateX(0px)");
        assert_eq!(METRICS.transform(1), "translateX(-324px)");
    }

    #[test]
    fn test_physical_len_is_doubled() {
        assert_eq!(NewsCarousel::new(5).physical_len(), 10);
        assert_eq!(NewsCarousel::new(0).physical_len(), 0);
    }

    #[test]
    fn test_next_animates_forward() {
        let mut carousel = NewsCarousel::new(4);
        let frames = carousel.next();
        assert_eq!(frames, vec![TrackFrame { index: 1, animate: true }]);
        assert_eq!(carousel.pending_reset(), None);
    }

    #[test]
    fn test_full_loop_returns_to_start() {
        let n = 5;
        let mut carousel = NewsCarousel::new(n);
        let start = METRICS.offset(carousel.current_frame().index);

        let mut shown = carousel.current_frame();
        for _ in 0..n {
            shown = last(&carousel.next());
            if let Some(frame) = carousel.settle() {
                shown = frame;
            }
        }

        assert_eq!(carousel.current(), 0);
        assert_eq!(shown, TrackFrame { index: 0, animate: false });
        assert_eq!(METRICS.offset(shown.index), start);
    }

    #[test]
    fn test_reaching_copy_arms_reset() {
        let mut carousel = NewsCarousel::new(2);
        carousel.next();
        let frames = carousel.next();
        assert_eq!(frames, vec![TrackFrame { index: 2, animate: true }]);

        let ticket = carousel.pending_reset().expect("reset armed");
        assert_eq!(
            carousel.transition_finished(ticket),
            Some(TrackFrame { index: 0, animate: false })
        );
        assert_eq!(carousel.current(), 0);

        // Fallback timer firing after transitionend already handled it.
        assert_eq!(carousel.transition_finished(ticket), None);
    }

    #[test]
    fn test_next_during_pending_reset_snaps_first() {
        let mut carousel = NewsCarousel::new(2);
        carousel.next();
        carousel.next();
        let stale = carousel.pending_reset().unwrap();

        let frames = carousel.next();
        assert_eq!(
            frames,
            vec![
                TrackFrame { index: 0, animate: false },
                TrackFrame { index: 1, animate: true },
            ]
        );
        assert_eq!(carousel.transition_finished(stale), None);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_prev_from_start_goes_through_copy() {
        let mut carousel = NewsCarousel::new(4);
        let frames = carousel.prev();
        assert_eq!(
            frames,
            vec![
                TrackFrame { index: 4, animate: false },
                TrackFrame { index: 3, animate: true },
            ]
        );
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn test_prev_cancels_pending_reset() {
        let mut carousel = NewsCarousel::new(1);
        carousel.next();
        let ticket = carousel.pending_reset().unwrap();

        let frames = carousel.prev();
        assert_eq!(frames, vec![TrackFrame { index: 0, animate: true }]);
        assert_eq!(carousel.transition_finished(ticket), None);
    }

    #[test]
    fn test_next_then_prev_round_trip() {
        let mut carousel = NewsCarousel::new(3);
        for _ in 0..7 {
            carousel.next();
            carousel.settle();
        }
        for _ in 0..7 {
            carousel.prev();
        }
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_resize_resets_out_of_range() {
        let mut carousel = NewsCarousel::new(2);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.resize(), TrackFrame { index: 0, animate: false });
        assert_eq!(carousel.pending_reset(), None);

        carousel.next();
        assert_eq!(carousel.resize(), TrackFrame { index: 1, animate: false });
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = NewsCarousel::new(0);
        assert!(carousel.next().is_empty());
        assert!(carousel.prev().is_empty());
        assert_eq!(carousel.settle(), None);
        assert_eq!(carousel.resize(), TrackFrame { index: 0, animate: false });
    }
}
