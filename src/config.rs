//! Application configuration.
//!
//! Centralizes the constants used by the page controllers. Deployment
//! settings that differ between sites (the contact relay) live in
//! `assets/site.toml`, which is compiled in with `include_str!` and parsed
//! at startup.

use serde::Deserialize;

use crate::models::SubmitMode;

// =============================================================================
// Site Settings (loaded at compile time)
// =============================================================================

/// Raw site settings, parsed by [`SiteConfig::load`].
pub const SITE_TOML: &str = include_str!("../assets/site.toml");

// =============================================================================
// Viewport Breakpoints
// =============================================================================

/// Viewport width breakpoints in CSS pixels (inclusive upper bounds).
pub mod breakpoints {
    /// Widths up to this value are treated as mobile.
    pub const MOBILE_MAX: f64 = 768.0;
    /// Widths up to this value (and above mobile) are treated as tablet.
    pub const TABLET_MAX: f64 = 1024.0;

    /// Media query matching the mobile range.
    pub const MOBILE_QUERY: &str = "(max-width: 768px)";
    /// Media query matching mobile and tablet.
    pub const TABLET_QUERY: &str = "(max-width: 1024px)";
}

// =============================================================================
// Timing
// =============================================================================

/// Timer durations in milliseconds.
pub mod timing {
    /// How long a contact form status message stays visible.
    pub const STATUS_MESSAGE_MS: u32 = 5000;
    /// Quiet period before the news carousel reacts to a resize.
    pub const RESIZE_DEBOUNCE_MS: u32 = 100;
    /// Duration of the news track slide transition.
    pub const NEWS_TRANSITION_MS: u32 = 400;
    /// Upper bound to wait for `transitionend` before finishing a slide anyway.
    pub const TRANSITION_FALLBACK_MS: u32 = 450;
}

// =============================================================================
// Navbar
// =============================================================================

/// Navbar scroll shadow settings.
pub mod navbar {
    /// Scroll offset (px) beyond which the navbar gets the deeper shadow.
    pub const SCROLL_THRESHOLD: f64 = 50.0;
    /// Shadow while the page is scrolled.
    pub const SHADOW_RAISED: &str = "0 4px 12px rgba(0, 0, 0, 0.15)";
    /// Shadow at the top of the page.
    pub const SHADOW_RESTING: &str = "0 4px 6px rgba(0, 0, 0, 0.1)";
}

// =============================================================================
// DOM Hooks
// =============================================================================

/// Element ids, classes and selectors the controllers bind to.
pub mod selectors {
    pub const NAV_TOGGLE: &str = "navToggle";
    pub const NAV_MENU: &str = ".nav-menu";
    pub const NAV_LINKS: &str = ".nav-menu a";
    pub const NAVBAR: &str = ".navbar";
    pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";

    pub const CONTACT_FORM: &str = "contactForm";
    pub const FORM_MESSAGE: &str = "formMessage";

    pub const GALLERY_TRACK: &str = ".gallery-track";
    pub const GALLERY_ITEMS: &str = ".gallery-item";
    pub const GALLERY_PREV: &str = "prevSlide";
    pub const GALLERY_NEXT: &str = "nextSlide";

    pub const NEWS_TRACK: &str = ".news-track";
    pub const NEWS_ITEMS: &str = ".news-item";
    pub const NEWS_PREV: &str = "prevNewsSlide";
    pub const NEWS_NEXT: &str = "nextNewsSlide";

    pub const LIGHTBOX: &str = "lightbox";
    pub const LIGHTBOX_IMAGE: &str = "lightboxImage";
    pub const LIGHTBOX_CLOSE: &str = "lightboxClose";
    pub const LIGHTBOX_PREV: &str = "lightboxPrev";
    pub const LIGHTBOX_NEXT: &str = "lightboxNext";
    /// Attribute on a gallery item holding the full-size image URL.
    pub const FULLSIZE_ATTR: &str = "data-fullsize";

    /// Class toggled on menus and overlays while they are shown.
    pub const ACTIVE_CLASS: &str = "active";
}

/// Contact form field ids, in the order they are logged.
pub mod contact_fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const INQUIRY_TYPE: &str = "inquiry-type";
    pub const MESSAGE: &str = "message";
}

// =============================================================================
// Contact Form
// =============================================================================

/// User-facing contact form messages.
pub mod messages {
    pub const RELAY_SUCCESS: &str = "Thanks for reaching out!";
    pub const SIMULATED_SUCCESS: &str = "Thank you for your message! We'll get back to you soon.";
    pub const FAILURE: &str = "Something went wrong. Please try again.";
}

/// Default relay endpoint for remote form submission.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

// =============================================================================
// SiteConfig
// =============================================================================

/// Deployment settings parsed from `assets/site.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SiteConfig {
    pub contact: SubmitMode,
}

#[derive(Deserialize)]
struct RawSiteConfig {
    #[serde(default)]
    contact: RawContact,
}

#[derive(Deserialize, Default)]
struct RawContact {
    #[serde(default)]
    mode: RawMode,
    endpoint: Option<String>,
    access_key: Option<String>,
}

#[derive(Deserialize, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum RawMode {
    #[default]
    Relay,
    Simulated,
}

impl SiteConfig {
    /// Parse site settings from TOML text.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let raw: RawSiteConfig = toml::from_str(text)?;
        let contact = match raw.contact.mode {
            RawMode::Simulated => SubmitMode::Simulated,
            RawMode::Relay => SubmitMode::Relay {
                endpoint: raw
                    .contact
                    .endpoint
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string()),
                access_key: raw.contact.access_key.filter(|k| !k.trim().is_empty()),
            },
        };
        Ok(Self { contact })
    }

    /// Load the compiled-in settings, falling back to defaults on error.
    pub fn load() -> Self {
        Self::parse(SITE_TOML).unwrap_or_else(|e| {
            leptos::logging::warn!("site.toml is invalid, using defaults: {e}");
            Self::default()
        })
    }
}
