//! Page controllers.
//!
//! Each controller binds to markup already on the page and returns whether it
//! found what it needs. Missing markup switches that controller off.
//!
//! - [`nav`] - Mobile menu, smooth anchor scrolling, navbar shadow
//! - [`contact`] - Contact form submission and status line
//! - [`gallery`] - Clamped gallery strip
//! - [`news`] - Looping news carousel
//! - [`lightbox`] - Full-size image overlay

pub mod contact;
pub mod gallery;
pub mod lightbox;
pub mod nav;
pub mod news;
