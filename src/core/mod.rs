//! Core components of the `finviz-sentiment` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`FvClient`] and its builder.
//! - The primary [`FvError`] type.

/// The main client (`FvClient`), builder, and configuration.
pub mod client;
/// The primary error type (`FvError`) for the crate.
pub mod error;

// convenient re-exports so most code can just `use crate::core::FvClient`
pub use client::{FvClient, FvClientBuilder};
pub use error::FvError;
