//! # Docket Server
//!
//! HTTP API for the in-memory item store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod server;

pub use server::{Server, ServerConfig};
