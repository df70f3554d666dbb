use crate::config::LogFormat;
use crate::utils::error::{Result, ShelterError};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShelterConfig {
    pub logging: Option<LoggingConfig>,
    pub session: Option<SessionConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionConfig {
    pub show_banner: Option<bool>,
}

impl ShelterConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ShelterError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShelterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShelterError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }

    pub fn show_banner(&self) -> bool {
        self.session
            .as_ref()
            .and_then(|s| s.show_banner)
            .unwrap_or(true)
    }
}

impl Validate for ShelterConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validate_non_empty_string("logging.level", level)?;
            validate_one_of("logging.level", &level.to_lowercase(), &LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[logging]
level = "debug"
format = "json"

[session]
show_banner = false
"#;

        let config = ShelterConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.log_level(), Some("debug"));
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(!config.show_banner());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ShelterConfig::from_toml_str("").unwrap();

        assert_eq!(config.log_level(), None);
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert!(config.show_banner());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PET_SHELTER_TEST_LEVEL", "warn");

        let config =
            ShelterConfig::from_toml_str("[logging]\nlevel = \"${PET_SHELTER_TEST_LEVEL}\"\n")
                .unwrap();
        assert_eq!(config.log_level(), Some("warn"));

        std::env::remove_var("PET_SHELTER_TEST_LEVEL");
    }

    #[test]
    fn test_unknown_env_var_left_in_place() {
        let config =
            ShelterConfig::from_toml_str("[logging]\nlevel = \"${PET_SHELTER_UNSET_VAR}\"\n")
                .unwrap();
        assert_eq!(config.log_level(), Some("${PET_SHELTER_UNSET_VAR}"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let blank = ShelterConfig::from_toml_str("[logging]\nlevel = \"  \"\n").unwrap();
        assert!(blank.validate().is_err());

        let unknown = ShelterConfig::from_toml_str("[logging]\nlevel = \"chatty\"\n").unwrap();
        assert!(matches!(
            unknown.validate(),
            Err(ShelterError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_unknown_format_fails_to_parse() {
        let err = ShelterConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ShelterError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[session]\nshow_banner = false\n")
            .unwrap();

        let config = ShelterConfig::from_file(temp_file.path()).unwrap();
        assert!(!config.show_banner());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ShelterConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ShelterError::ConfigError { .. }));
    }
}
