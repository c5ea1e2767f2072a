use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QaConfig {
    /// Directory holding the fixture folders.
    #[serde(default = "default_root_path")]
    pub root_path: String,
    /// Folder below `root_path` that fixtures are read from.
    #[serde(default = "default_folder")]
    pub folder: String,
    /// Where updated fixtures are written.
    #[serde(default = "default_target_directory")]
    pub target_directory: String,
    /// Name used by `rename_as_output`.
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_collation_locale")]
    pub collation_locale: String,
    #[serde(default = "default_csv_separator")]
    pub csv_separator: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_root_path() -> String {
    "src/test/resources/data/".to_string()
}

fn default_folder() -> String {
    "files".to_string()
}

fn default_target_directory() -> String {
    crate::files::Folder::Target.name().to_string()
}

fn default_output_file() -> String {
    "main-liquibase.xml".to_string()
}

fn default_collation_locale() -> String {
    crate::asserts::DEFAULT_COLLATION_LOCALE.to_string()
}

fn default_csv_separator() -> String {
    ",".to_string()
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            folder: default_folder(),
            target_directory: default_target_directory(),
            output_file: default_output_file(),
            collation_locale: default_collation_locale(),
            csv_separator: default_csv_separator(),
            logging: LoggingConfig::default(),
        }
    }
}

impl QaConfig {
    /// The CSV separator as a byte. Validation guarantees a single ASCII char.
    pub fn csv_separator_byte(&self) -> u8 {
        self.csv_separator
            .bytes()
            .next()
            .unwrap_or(crate::files::csv::DEFAULT_SEPARATOR)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
