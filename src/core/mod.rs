//! Core post management functionality
//!
//! This module contains the types and logic behind the post list. It provides:
//!
//! - [`post`]: Post and user records
//! - [`query`]: The filter/sort/paginate pipeline
//! - [`pagination`]: Page-window math for the pagination bar
//! - [`store`]: The state container all mutations go through
//! - [`api`]: REST client for the posts backend
//! - [`debounce`]: Search-input debouncing
//! - [`error`]: Error types for core operations

pub mod api;
pub mod debounce;
pub mod error;
pub mod pagination;
pub mod post;
pub mod query;
pub mod store;
