use std::path::PathBuf;
use thiserror::Error;

use crate::asserts::Direction;

#[derive(Error, Debug)]
pub enum QaError {
    #[error("Assertion failed: {0}")]
    Assert(#[from] AssertError),

    #[error("Date error: {0}")]
    Date(#[from] DateError),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}

#[derive(Error, Debug)]
pub enum AssertError {
    #[error(
        "list is not sorted in {direction} order ({rule}): first mismatch at index {index}, \
         expected {expected:?}, actual {actual:?}"
    )]
    OrderingMismatch {
        rule: String,
        direction: Direction,
        index: usize,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("element {index} ('{value}') is not a valid date: {reason}")]
    DateParse {
        index: usize,
        value: String,
        reason: String,
    },

    #[error("list size mismatch: expected {expected} elements, actual {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Failed to build collator for locale '{locale}': {reason}")]
    Collator { locale: String, reason: String },
}

#[derive(Error, Debug)]
pub enum DateError {
    #[error("'{value}' does not match date pattern '{pattern}': {source}")]
    Parse {
        value: String,
        pattern: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("'{value}' does not have the shape '{expected}'")]
    Shape { value: String, expected: String },

    #[error("Invalid date pattern '{pattern}'")]
    InvalidPattern { pattern: String },
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Failed to read fixture '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list fixture directory '{path}': {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy file from '{from}' to '{to}': {source}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File already exists: {0}")]
    FileExists(PathBuf),

    #[error("Invalid replacement pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Fixture '{file}' has no {attribute} on its bpmn:process element")]
    MissingProcessAttribute { file: String, attribute: String },
}

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("Failed to open CSV file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed CSV record in '{path}' at line {line}: {source}")]
    Record {
        path: PathBuf,
        line: u64,
        #[source]
        source: csv::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    #[error("A global logger is already installed")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, QaError>;
