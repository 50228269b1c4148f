//! Navbar, menu and in-page anchor logic.

use crate::config::navbar;

/// Open/closed state of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Navbar shadow depth selected by scroll position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarShadow {
    Resting,
    Raised,
}

impl NavbarShadow {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > navbar::SCROLL_THRESHOLD {
            Self::Raised
        } else {
            Self::Resting
        }
    }

    /// CSS `box-shadow` value.
    pub fn css(self) -> &'static str {
        match self {
            Self::Resting => navbar::SHADOW_RESTING,
            Self::Raised => navbar::SHADOW_RAISED,
        }
    }
}

/// Element id targeted by a same-page link, e.g. `"#contact"` -> `"contact"`.
///
/// A bare `#` or anything that is not a plain fragment yields `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() || id.contains(char::is_whitespace) {
        return None;
    }
    Some(id)
}

/// Scroll position that puts `target_top` just below the fixed navbar.
pub fn scroll_target_top(target_top: f64, navbar_height: f64) -> f64 {
    (target_top - navbar_height).max(0.0)
}
