//! Configuration module for Poupe
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PoupePaths;
pub use settings::Settings;
