//! atelier-ui - View components for the portfolio site
//!
//! Components take plain props and report interactions through callbacks;
//! routing and data loading live in atelier-web.

pub mod components;
pub mod wasm_utils;

pub use components::*;
