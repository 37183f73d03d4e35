//! reel-ui - Pure view components for reel
//!
//! Props-based components with no I/O; the web crate's pages wire them to
//! app state and HTTP.

pub mod components;

pub use components::*;
