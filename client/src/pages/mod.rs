//! Page modules for the top-level views.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its view-scoped state signal and delegates rendering
//! details to `components`.

pub mod auth;
pub mod dashboard;
pub mod landing;
pub mod streamer_setup;
pub mod viewer_setup;
