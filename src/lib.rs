//! Postboard - a desktop and command-line client for a posts REST API
//!
//! Browses, filters, sorts, paginates and edits posts served by a
//! JSONPlaceholder-compatible backend.
//!
//! # Architecture
//!
//! - [`core`] - Post model, the filter/sort/paginate pipeline, the post store
//!   and the REST client
//! - [`app`] - iced GUI: state, messages, handlers and views
//! - [`journal`] - Store event journal and optional on-disk event log
//! - [`toast`] - Transient notifications
//! - [`validators`] - Post form validation and sanitization
//! - [`config`] - Configuration persistence
//! - [`theme`] - Light and dark palettes
//! - [`utils`] - Utility functions (XDG directories, text helpers)
//!
//! # Data flow
//!
//! Every change to the post collection or its view parameters goes through
//! [`core::store::PostStore`]. Network requests run outside the store and
//! report their outcome back to it, so the pipeline always works on the last
//! successfully loaded collection.

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_lifetimes)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::missing_errors_doc)]

pub mod app;
pub mod config;
pub mod core;
pub mod journal;
pub mod theme;
pub mod toast;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use core::error::{Error, Result};
pub use core::post::{NewPost, Post, User};
pub use core::store::PostStore;
