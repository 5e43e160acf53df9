//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, ChatConfig, ProvisioningConfig)
//! - [`defaults`]: serde default value functions
//! - [`validation`]: startup checks that report every problem at once

mod defaults;
mod types;
pub mod validation;

pub use types::{ChatConfig, Config, ConfigError, ProvisioningConfig};
pub use validation::{ValidationError, validate};
