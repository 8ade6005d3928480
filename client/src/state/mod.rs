//! Screen-local state models.
//!
//! DESIGN
//! ======
//! Each screen owns one plain state struct with synchronous mutators. Pages
//! wrap it in an `RwSignal` and call the mutators from event handlers, so
//! every transition is testable without a browser.

pub mod auth;
pub mod dashboard;
pub mod streamer_setup;
pub mod viewer_setup;
