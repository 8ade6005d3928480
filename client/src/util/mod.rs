//! Browser access and pure helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `clipboard`, `delay`, `location` and `time` are the only modules that
//! touch `web-sys`/`js-sys`; each has a no-op or fallback path when compiled
//! for server rendering.

pub mod clipboard;
pub mod delay;
pub mod location;
pub mod time;
pub mod validate;
