//! Page widget state machines.
//!
//! Pure state types with no DOM access. The components layer owns one of
//! each and applies what they report to the page.

pub mod contact;
pub mod error;
pub mod gallery;
pub mod lightbox;
pub mod navigation;
pub mod news;

pub use contact::ContactFormState;
pub use gallery::GalleryCarousel;
pub use lightbox::{Lightbox, LightboxKey};
pub use navigation::{NavMenu, NavbarShadow};
pub use news::{NewsCarousel, SlideMetrics, TrackFrame};
