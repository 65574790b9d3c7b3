//! # Docket Core
//!
//! Core types for the docket service.
//!
//! This crate provides the foundational pieces shared by the server and CLI:
//! - The [`Item`] domain type
//! - The in-memory, append-only [`ItemStore`]
//! - Common error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod item;
pub mod store;

pub use error::{Error, Result};
pub use item::Item;
pub use store::ItemStore;
