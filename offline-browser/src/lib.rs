pub mod address;
pub mod config;
pub mod error;
pub mod models;
pub mod navigator;
pub mod site;
pub mod ui;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use error::NavigatorError;
pub use models::{Command, Notice, NoticeLevel};
pub use navigator::{Chrome, Engine, Navigator};
