//! Configuration system for z4term.
//!
//! This crate provides configuration loading, saving, validation and default
//! values for the terminal shell. It includes:
//!
//! - The `Config` struct and its YAML persistence
//! - The fourteen default keybindings and the merge of user overrides
//! - The built-in color theme table

pub mod config;
pub mod defaults;
pub mod error;
pub mod themes;
mod types;

pub use config::Config;
pub use config::persistence::{create_private_dir, write_private};
pub use error::ConfigError;
pub use themes::{Color, Theme};
pub use types::KeyBinding;
