//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Child process execution
//! - The registry-backed appearance store and its configuration
//! - Error types

pub mod command;
pub mod config;
pub mod error;
pub mod store;

#[cfg(test)]
pub mod fake;
