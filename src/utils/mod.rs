//! Utility modules for browser APIs.
//!
//! Provides:
//! - [`dom`] - Element lookup, listeners, styling, scrolling
//! - [`post_form`] - Contact relay submission
//! - [`Debouncer`], [`timer::after`] - `gloo-timers` wrappers

pub mod dom;
mod fetch;
pub mod timer;

pub use fetch::post_form;
pub use timer::Debouncer;
