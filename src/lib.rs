//! Campaign Studio Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod operation;
pub mod state;
pub mod upstream;
