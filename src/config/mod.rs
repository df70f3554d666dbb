pub mod toml_config;

use serde::Deserialize;
#[cfg(feature = "cli")]
use std::path::PathBuf;
use toml_config::ShelterConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "pet-shelter")]
#[command(about = "Interactive adoption fee records for a pet shelter")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format (overrides the config file)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}

/// Effective session settings after merging the config file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub verbose: bool,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
    pub show_banner: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            verbose: false,
            log_level: None,
            log_format: LogFormat::Compact,
            show_banner: true,
        }
    }
}

impl SessionSettings {
    pub fn from_config(config: Option<&ShelterConfig>) -> Self {
        let defaults = Self::default();
        match config {
            Some(config) => Self {
                log_level: config.log_level().map(str::to_string),
                log_format: config.log_format(),
                show_banner: config.show_banner(),
                ..defaults
            },
            None => defaults,
        }
    }

    /// CLI flags win over file values; absent flags leave them alone.
    pub fn with_overrides(
        mut self,
        verbose: bool,
        log_format: Option<LogFormat>,
        no_banner: bool,
    ) -> Self {
        self.verbose |= verbose;
        if let Some(format) = log_format {
            self.log_format = format;
        }
        if no_banner {
            self.show_banner = false;
        }
        self
    }
}
