use std::path::Path;

use crate::config::schema::QaConfig;
use crate::error::ConfigError;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<QaConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<QaConfig, ConfigError> {
    let config: QaConfig = serde_json::from_str(content)?;

    validate_config(&config)?;

    Ok(config)
}

pub fn validate_config(config: &QaConfig) -> Result<(), ConfigError> {
    require_non_empty("root_path", &config.root_path)?;
    require_non_empty("target_directory", &config.target_directory)?;
    require_non_empty("output_file", &config.output_file)?;

    // Output files always land directly in the target directory
    if crate::sanitize::file_name(&config.output_file) != config.output_file {
        return Err(ConfigError::Validation {
            message: format!(
                "output_file must be a bare file name, got '{}'",
                config.output_file
            ),
        });
    }

    if config.collation_locale.parse::<icu_locid::Locale>().is_err() {
        return Err(ConfigError::Validation {
            message: format!("Invalid collation locale: {}", config.collation_locale),
        });
    }

    let separator = config.csv_separator.as_bytes();
    if separator.len() != 1 || !separator[0].is_ascii() || separator[0] == b'\n' {
        return Err(ConfigError::Validation {
            message: format!(
                "csv_separator must be a single ASCII character, got '{}'",
                config.csv_separator
            ),
        });
    }

    if config.logging.level.parse::<tracing_subscriber::EnvFilter>().is_err() {
        return Err(ConfigError::Validation {
            message: format!("Invalid log level directive: {}", config.logging.level),
        });
    }

    Ok(())
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation {
            message: format!("{} must not be empty", field),
        });
    }
    Ok(())
}
