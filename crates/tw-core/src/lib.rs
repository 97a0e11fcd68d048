// ABOUTME: Shared types and configuration for tileworks.
// ABOUTME: Defines colors, content cards, and config file handling.

pub mod color;
pub mod config;
pub mod content;

pub use color::Color;
pub use config::{Config, ConfigError};
pub use content::{ContentCard, ContentId, ContentTable};
