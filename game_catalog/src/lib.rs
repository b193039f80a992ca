//! # Game Catalog
//!
//! The read-only list of video games the chatbot can talk about.
//! This crate owns the data model and the loading of the `productos` file;
//! it contains no language handling.

pub mod catalog;
pub mod record;

pub use catalog::*;
pub use record::*;
