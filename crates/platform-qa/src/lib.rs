pub mod asserts;
pub mod config;
pub mod dates;
pub mod error;
pub mod files;
pub mod logging;
pub mod naming;
pub mod sanitize;

pub use asserts::{verify, verify_with_config, Collation, Direction, LocaleCollator, OrderingMode};
pub use config::{load_config, LoggingConfig, QaConfig};
pub use error::{
    AssertError, ConfigError, CsvError, DateError, LoggingError, QaError, Result, TemplateError,
};
pub use files::{Folder, ProcessData, TestDataClient};
pub use logging::init_logging;
