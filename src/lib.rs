pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ConsoleTerminal;
pub use config::{toml_config::ShelterConfig, LogFormat, SessionSettings};
pub use core::{CommandLoop, RecordStore};
pub use utils::error::{Result, ShelterError};
