//! Language identification for file paths.
//!
//! A static registry of language specifications is compiled once into reverse
//! lookup indexes; [`language_from_path`] and [`monaco_language_from_path`]
//! query them. The crate also ships a small HTTP sidecar ([`server`]) that
//! exposes the same lookups to the frontend.

pub mod config;
pub mod registry;
pub mod resolver;
pub mod routes;
pub mod server;

pub use resolver::{language_from_path, monaco_language_from_path};
