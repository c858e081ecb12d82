//! Configuration module for the contact book
//!
//! This module provides configuration management including:
//! - Base directory resolution (environment override or platform default)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ContactPaths;
pub use settings::Settings;
