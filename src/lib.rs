// Library root — exposes internals for integration tests and future crate consumers.
// The binary entry point is src/main.rs.

pub mod bootstrap;
pub mod catalog;
pub mod core;
pub mod llm;
pub mod scheme;
pub mod server;

pub use self::core::{config, error};
