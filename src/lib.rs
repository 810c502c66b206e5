//! Huekit - harmonious, accessible palettes from one seed color.
//!
//! The color math lives in `hue-core`. This crate adds what a front end
//! needs around it: configuration, color naming, display formatting and
//! the interactive palette session.

pub mod error;
pub mod models;
pub mod output;
pub mod services;
