//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Viewport`] - Responsive size classes and items-per-view policy
//! - [`LightboxItem`] - Images shown in the lightbox
//! - [`ContactSubmission`], [`RelayResponse`], [`FormStatus`], [`SubmitMode`] - Contact form

mod contact;
mod media;
mod viewport;

pub use contact::{ContactSubmission, FormStatus, RelayResponse, SubmitMode};
pub use media::LightboxItem;
pub use viewport::Viewport;
