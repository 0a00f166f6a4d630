//! API module
//!
//! Contains HTTP request handlers for the generation and landing-page
//! endpoints.

pub mod generate;
pub mod page;
