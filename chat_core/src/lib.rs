//! # Chat Core
//!
//! The rule-based interpretation pipeline of the video game chatbot. This
//! crate reads from the `game_catalog` crate and turns a free-text message
//! into a templated reply.
//!
//! ## Core Components
//!
//! - **normalizer**: Lower-casing and word tokenization behind a small trait
//! - **intent**: Exact keyword matching into information/price/recommendation/greeting
//! - **entity**: Substring recognition of catalog game names
//! - **response**: Ordered template selection
//! - **processor**: The pipeline wired together over an injected catalog

pub mod entity;
pub mod intent;
pub mod normalizer;
pub mod processor;
pub mod response;

pub use entity::*;
pub use intent::*;
pub use normalizer::*;
pub use processor::*;
pub use response::*;
