//! Configuration module for Pocketbook
//!
//! This module provides configuration management including:
//! - Platform path resolution with an environment override
//! - User settings persistence
//! - Budget alert thresholds

pub mod paths;
pub mod settings;

pub use paths::PocketbookPaths;
pub use settings::{AlertThresholds, Settings};
