//! Data models

mod api;

pub use api::*;
