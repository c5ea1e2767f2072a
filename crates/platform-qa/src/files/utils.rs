//! Fixture shortcuts built on [`TestDataClient`].

use std::collections::HashMap;

use regex::Regex;

use crate::config::QaConfig;
use crate::error::TemplateError;
use crate::files::{Folder, TestDataClient};
use crate::naming;

/// Identity of the business process declared in a BPMN fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessData {
    pub process_id: String,
    pub process_name: String,
}

/// Returns the first match of `pattern` in `text`, or its first capture
/// group when the pattern has one.
pub fn search_text(text: &str, pattern: &str) -> Result<Option<String>, TemplateError> {
    let regex = Regex::new(pattern).map_err(|e| TemplateError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })?;

    Ok(regex.captures(text).and_then(|caps| {
        caps.get(1)
            .or_else(|| caps.get(0))
            .map(|m| m.as_str().to_string())
    }))
}

/// Reads `<folder>/bpmn/<bpmn_file>` and extracts the `bpmn:process` id and
/// name. An empty file name yields `None`.
pub fn process_data(config: &QaConfig, bpmn_file: &str) -> Result<Option<ProcessData>, TemplateError> {
    if bpmn_file.is_empty() {
        return Ok(None);
    }

    let folder = format!("{}/{}", config.folder, Folder::Bpmn);
    let mut client = TestDataClient::from_config(config).with_folder(&folder);
    let content = client.read_updated_file(bpmn_file)?.join("\n");

    let process = search_text(&content, r#"bpmn:process[^>]*"#)?.unwrap_or_default();
    let attribute = |name: &str, pattern: &str| -> Result<String, TemplateError> {
        search_text(&process, pattern)?.ok_or_else(|| TemplateError::MissingProcessAttribute {
            file: bpmn_file.to_string(),
            attribute: name.to_string(),
        })
    };

    Ok(Some(ProcessData {
        process_id: attribute("id", r#"\bid="([^"]+)""#)?,
        process_name: attribute("name", r#"\bname="([^"]+)""#)?,
    }))
}

/// [`process_data`] for several fixtures, keyed by file name.
pub fn process_data_for_files<S: AsRef<str>>(
    config: &QaConfig,
    bpmn_files: &[S],
) -> Result<HashMap<String, ProcessData>, TemplateError> {
    let mut processes = HashMap::new();
    for file in bpmn_files {
        let file = file.as_ref();
        if let Some(data) = process_data(config, file)? {
            processes.insert(file.to_string(), data);
        }
    }
    Ok(processes)
}

/// Form fixture with a random form key as id and path, and `form_name`
/// followed by five random letters as its name.
pub fn updated_form_file(
    config: &QaConfig,
    form_name: &str,
    form_file: &str,
) -> Result<Vec<String>, TemplateError> {
    let name = format!("{} {}", form_name, naming::random_lowercase(5));
    TestDataClient::from_config(config)
        .id(&naming::form_key())
        .name(&name)
        .path(&naming::form_key())
        .read_updated_file(form_file)
}

/// Form fixture with a random form key as id and the given technical name
/// as its path.
pub fn updated_form_file_with_technical_name(
    config: &QaConfig,
    form_name: &str,
    technical_name: &str,
    form_file: &str,
) -> Result<Vec<String>, TemplateError> {
    TestDataClient::from_config(config)
        .id(&naming::form_key())
        .name(form_name)
        .path(technical_name)
        .read_updated_file(form_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_text_returns_capture_group() {
        let found = search_text("<a id=\"x1\">", r#"id="(.+?)""#).unwrap();
        assert_eq!(found.as_deref(), Some("x1"));
    }

    #[test]
    fn test_search_text_whole_match_without_group() {
        let found = search_text("key: AUTO_DF_12", r"AUTO_DF_\d+").unwrap();
        assert_eq!(found.as_deref(), Some("AUTO_DF_12"));
    }

    #[test]
    fn test_search_text_no_match() {
        assert_eq!(search_text("nothing", "something").unwrap(), None);
    }

    #[test]
    fn test_search_text_invalid_pattern() {
        assert!(matches!(
            search_text("x", "[unclosed"),
            Err(TemplateError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_empty_attribute_is_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let bpmn_dir = dir.path().join("files/bpmn");
        std::fs::create_dir_all(&bpmn_dir).unwrap();
        std::fs::write(
            bpmn_dir.join("empty-id.bpmn"),
            "<bpmn:process id=\"\" name=\"Видача дозволу\" isExecutable=\"true\">\n",
        )
        .unwrap();
        let config = QaConfig {
            root_path: dir.path().to_string_lossy().into_owned(),
            ..QaConfig::default()
        };

        match process_data(&config, "empty-id.bpmn") {
            Err(TemplateError::MissingProcessAttribute { attribute, .. }) => {
                assert_eq!(attribute, "id")
            }
            other => panic!("Expected MissingProcessAttribute, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_bpmn_name_is_none() {
        let config = QaConfig::default();
        assert_eq!(process_data(&config, "").unwrap(), None);
    }
}
