//! Interactive behaviour for a static marketing page, compiled to WebAssembly.
//!
//! - [`core`] - Widget state machines (carousels, lightbox, contact form)
//! - [`components`] - Controllers binding those state machines to the DOM
//! - [`models`] - Shared data types
//! - [`config`] - Constants and compiled-in site settings
//! - [`utils`] - Browser API helpers

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
