//! # Chat Server
//!
//! HTTP surface of the video game chatbot: a static chat page, the
//! `POST /chat` endpoint and a health check, all backed by one shared
//! `chat_core::QueryProcessor`.
//!
//! The catalog is read from `videojuegos.json` next to the executable. The
//! build script copies `data/videojuegos.json` into the target profile
//! directory, so `cargo run -p chat_server` finds it; a deployed binary needs
//! the file copied alongside it.

pub mod config;
pub mod routes;

pub use config::*;
pub use routes::*;
