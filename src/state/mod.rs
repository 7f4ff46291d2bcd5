//! State management for the catalog
//!
//! This module contains the application state and the messages that
//! change it:
//! - `app_state`: Root state value and the `update` reducer
//! - `message`: Messages produced by data loading and visitor input

mod app_state;
mod message;

pub use app_state::*;
pub use message::*;
