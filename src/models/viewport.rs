//! Responsive viewport classification.

/// Viewport size class derived from the window's inner width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Viewport {
    /// Up to 768px wide.
    Mobile,
    /// 769px to 1024px wide.
    Tablet,
    #[default]
    Desktop,
}

impl Viewport {
    /// Classify from the two breakpoint media query results.
    pub fn from_queries(is_mobile: bool, is_tablet_or_smaller: bool) -> Self {
        if is_mobile {
            Self::Mobile
        } else if is_tablet_or_smaller {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// Number of gallery thumbnails visible at once.
    pub fn gallery_items_per_view(self) -> usize {
        match self {
            Self::Mobile => 1,
            Self::Tablet => 3,
            Self::Desktop => 4,
        }
    }

    /// Number of news cards visible at once.
    pub fn news_items_per_view(self) -> usize {
        match self {
            Self::Mobile => 1,
            Self::Tablet | Self::Desktop => 3,
        }
    }
}
