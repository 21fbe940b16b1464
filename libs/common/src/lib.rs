//! Common library for the media catalog service
//!
//! This crate provides shared functionality used by the API service,
//! including environment-based configuration, seed data loading, and
//! the related error types.

pub mod config;
pub mod error;
pub mod seed;
