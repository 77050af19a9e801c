//! Presentation primitives shared by every page of the app.

pub mod components;

pub use components::*;
