//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and controls. They take the page's state
//! signal or plain props and report user actions through callbacks.

pub mod brand_header;
pub mod confirm_modal;
pub mod connection_card;
pub mod queue_list;
pub mod role_card;
pub mod session_panel;
pub mod status_pill;
pub mod step_indicator;
pub mod text_field;
pub mod view_link;
