//! Integration test utilities for the movies API
//!
//! This crate provides helpers for running end-to-end tests against
//! a real server backed by MySQL.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
