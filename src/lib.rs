//! QuickKart customer-support chat backend.
//!
//! Keyword-driven replies over a small axum HTTP surface.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
