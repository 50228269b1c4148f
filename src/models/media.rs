//! Gallery image descriptors.

/// An image the lightbox can display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxItem {
    /// URL loaded into the lightbox image.
    pub src: String,
    pub alt: String,
}

impl LightboxItem {
    /// Build an item from a gallery thumbnail.
    ///
    /// Uses the full-size URL when present and non-blank, otherwise the
    /// thumbnail's own source.
    pub fn from_thumbnail(fullsize: Option<String>, thumbnail_src: String, alt: String) -> Self {
        let src = fullsize
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(thumbnail_src);
        Self { src, alt }
    }
}
