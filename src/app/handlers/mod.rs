//! Message handlers organized by domain
//!
//! Each handler takes the application state plus the message payload and
//! returns the follow-up [`iced::Task`], if any. `State::update` only routes.

pub mod filters;
pub mod posts;
pub mod ui_state;

#[cfg(test)]
pub mod test_utils;

// Re-export all handlers for clean imports in app/mod.rs
pub(crate) use filters::*;
pub(crate) use posts::*;
pub(crate) use ui_state::*;
