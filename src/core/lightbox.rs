//! Lightbox navigation state.

use crate::models::LightboxItem;

/// Keys the lightbox reacts to while open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Close,
    Prev,
    Next,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Full-size image viewer over the gallery's images.
///
/// Unlike the gallery strip, prev/next wrap around the ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    items: Vec<LightboxItem>,
    current: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(items: Vec<LightboxItem>) -> Self {
        Self {
            items,
            current: 0,
            open: false,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&LightboxItem> {
        self.items.get(index)
    }

    /// The image currently selected.
    pub fn current_item(&self) -> Option<&LightboxItem> {
        self.items.get(self.current)
    }

    /// Open on the image at `index`.
    ///
    /// Returns `false` and leaves the state untouched if `index` is out of range.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.current = index;
        self.open = true;
        true
    }

    /// Close the viewer. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn show_prev(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.current = (self.current + len - 1) % len;
    }

    pub fn show_next(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        self.current = (self.current + 1) % len;
    }

    /// Apply a key press. Keys are ignored while closed.
    ///
    /// Returns whether the key was handled.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.open {
            return false;
        }
        match key {
            LightboxKey::Close => {
                self.close();
            }
            LightboxKey::Prev => self.show_prev(),
            LightboxKey::Next => self.show_next(),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<LightboxItem> {
        (0..count)
            .map(|i| LightboxItem {
                src: format!("img/{i}.jpg"),
                alt: format!("Photo {i}"),
            })
            .collect()
    }

    #[test]
    fn test_starts_closed() {
        let lightbox = Lightbox::new(items(3));
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current(), 0);
    }

    #[test]
    fn test_open_selects_item() {
        let mut lightbox = Lightbox::new(items(3));
        assert!(lightbox.open(2));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_item().unwrap().src, "img/2.jpg");
    }

    #[test]
    fn test_open_out_of_range_is_ignored() {
        let mut lightbox = Lightbox::new(items(3));
        assert!(!lightbox.open(3));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut lightbox = Lightbox::new(items(2));
        lightbox.open(1);
        assert!(lightbox.close());
        assert!(!lightbox.close());
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current(), 1);
    }

    #[test]
    fn test_wraparound() {
        let mut lightbox = Lightbox::new(items(3));
        lightbox.open(0);
        lightbox.show_prev();
        assert_eq!(lightbox.current(), 2);
        lightbox.show_next();
        assert_eq!(lightbox.current(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 1..=6 {
            for start in 0..len {
                let mut lightbox = Lightbox::new(items(len));
                lightbox.open(start);
                for _ in 0..len {
                    lightbox.show_next();
                }
                assert_eq!(lightbox.current(), start);
                for _ in 0..len {
                    lightbox.show_prev();
                }
                assert_eq!(lightbox.current(), start);
            }
        }
    }

    #[test]
    fn test_empty_is_inert() {
        let mut lightbox = Lightbox::new(Vec::new());
        assert!(!lightbox.open(0));
        lightbox.show_next();
        lightbox.show_prev();
        assert_eq!(lightbox.current_item(), None);
        assert!(!lightbox.handle_key(LightboxKey::Next));
    }

    #[test]
    fn test_keys_only_while_open() {
        let mut lightbox = Lightbox::new(items(3));
        assert!(!lightbox.handle_key(LightboxKey::Next));
        assert_eq!(lightbox.current(), 0);

        lightbox.open(0);
        assert!(lightbox.handle_key(LightboxKey::Next));
        assert_eq!(lightbox.current(), 1);
        assert!(lightbox.handle_key(LightboxKey::Prev));
        assert_eq!(lightbox.current(), 0);
        assert!(lightbox.handle_key(LightboxKey::Close));
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(LightboxKey::from_key("Escape"), Some(LightboxKey::Close));
        assert_eq!(LightboxKey::from_key("ArrowLeft"), Some(LightboxKey::Prev));
        assert_eq!(LightboxKey::from_key("ArrowRight"), Some(LightboxKey::Next));
        assert_eq!(LightboxKey::from_key("Enter"), None);
    }
}
