use std::collections::{BTreeMap, HashMap};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use regex::{NoExpand, Regex};
use tracing::{debug, info_span};

use crate::config::QaConfig;
use crate::error::TemplateError;
use crate::naming::{
    self, PLACEHOLDER_DMN_KEY, PLACEHOLDER_FORM_KEY, PLACEHOLDER_ID, PLACEHOLDER_NAME,
    PLACEHOLDER_PATH,
};
use crate::sanitize::{file_name, redact_path};

#[derive(Debug, Clone)]
enum Matcher {
    Literal(String),
    Pattern(Regex),
}

#[derive(Debug, Clone)]
enum Value {
    Fixed(String),
    /// A fresh form key on every read.
    AnyFormKey,
}

#[derive(Debug, Clone)]
struct Replacement {
    matcher: Matcher,
    value: Value,
}

impl Replacement {
    fn literal(token: &str, value: Value) -> Self {
        Self {
            matcher: Matcher::Literal(token.to_string()),
            value,
        }
    }

    fn resolve(&self) -> String {
        match &self.value {
            Value::Fixed(value) => value.clone(),
            Value::AnyFormKey => naming::form_key(),
        }
    }

    fn apply(&self, line: &str, value: &str) -> String {
        match &self.matcher {
            Matcher::Literal(token) => line.replace(token.as_str(), value),
            Matcher::Pattern(regex) => regex.replace_all(line, NoExpand(value)).into_owned(),
        }
    }
}

/// Reads fixture files, substitutes placeholders and writes the results into
/// the target directory.
///
/// Fixtures are looked up as `<root_path>/<folder>/<file name>`. Only the last
/// component of a requested name is used.
#[derive(Debug, Clone)]
pub struct TestDataClient {
    root_path: PathBuf,
    folder: String,
    target_directory: PathBuf,
    output_file: String,
    replacements: BTreeMap<String, Replacement>,
    substitutions: HashMap<String, HashMap<String, String>>,
    output_content: Vec<String>,
}

impl Default for TestDataClient {
    fn default() -> Self {
        Self::from_config(&QaConfig::default())
    }
}

impl TestDataClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &QaConfig) -> Self {
        Self {
            root_path: PathBuf::from(&config.root_path),
            folder: config.folder.clone(),
            target_directory: PathBuf::from(&config.target_directory),
            output_file: config.output_file.clone(),
            replacements: BTreeMap::new(),
            substitutions: HashMap::new(),
            output_content: Vec::new(),
        }
    }

    pub fn with_root_path<P: AsRef<Path>>(mut self, root_path: P) -> Self {
        self.root_path = root_path.as_ref().to_path_buf();
        self
    }

    pub fn with_folder(mut self, folder: &str) -> Self {
        self.folder = folder.to_string();
        self
    }

    pub fn with_target_directory<P: AsRef<Path>>(mut self, target_directory: P) -> Self {
        self.target_directory = target_directory.as_ref().to_path_buf();
        self
    }

    pub fn with_output_file(mut self, output_file: &str) -> Self {
        self.output_file = output_file.to_string();
        self
    }

    /// Replaces `PLACEHOLDER_ID`.
    pub fn id(self, id: &str) -> Self {
        self.literal(PLACEHOLDER_ID, Value::Fixed(id.to_string()))
    }

    /// Replaces `PLACEHOLDER_ID` with a new random form key on every read.
    pub fn any_id(self) -> Self {
        self.literal(PLACEHOLDER_ID, Value::AnyFormKey)
    }

    /// Replaces `PLACEHOLDER_NAME`.
    pub fn name(self, name: &str) -> Self {
        self.literal(PLACEHOLDER_NAME, Value::Fixed(name.to_string()))
    }

    pub fn any_name(self) -> Self {
        self.literal(PLACEHOLDER_NAME, Value::AnyFormKey)
    }

    /// Replaces `PLACEHOLDER_PATH`.
    pub fn path(self, path: &str) -> Self {
        self.literal(PLACEHOLDER_PATH, Value::Fixed(path.to_string()))
    }

    pub fn any_path(self) -> Self {
        self.literal(PLACEHOLDER_PATH, Value::AnyFormKey)
    }

    /// Replaces `PLACEHOLDER_FORM_KEY`.
    pub fn form_key(self, key: &str) -> Self {
        self.literal(PLACEHOLDER_FORM_KEY, Value::Fixed(key.to_string()))
    }

    /// A single key fills `PLACEHOLDER_FORM_KEY`; several keys fill
    /// `PLACEHOLDER_FORM_KEY_1`, `PLACEHOLDER_FORM_KEY_2`, ... in order.
    pub fn form_keys<S: AsRef<str>>(self, keys: &[S]) -> Self {
        if let [key] = keys {
            return self.form_key(key.as_ref());
        }

        keys.iter().enumerate().fold(self, |client, (i, key)| {
            let token = format!("{}_{}", PLACEHOLDER_FORM_KEY, i + 1);
            client.literal(&token, Value::Fixed(key.as_ref().to_string()))
        })
    }

    /// Replaces `PLACEHOLDER_DMN_KEY`.
    pub fn dmn_key(self, key: &str) -> Self {
        self.literal(PLACEHOLDER_DMN_KEY, Value::Fixed(key.to_string()))
    }

    /// Replaces every match of a regular expression. `value` is inserted
    /// literally; `$` is not expanded.
    pub fn pattern(mut self, pattern: &str, value: &str) -> Result<Self, TemplateError> {
        let regex = Regex::new(pattern).map_err(|e| TemplateError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;

        self.replacements.insert(
            pattern.to_string(),
            Replacement {
                matcher: Matcher::Pattern(regex),
                value: Value::Fixed(value.to_string()),
            },
        );
        Ok(self)
    }

    fn literal(mut self, token: &str, value: Value) -> Self {
        self.replacements
            .insert(token.to_string(), Replacement::literal(token, value));
        self
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn target_directory(&self) -> &Path {
        &self.target_directory
    }

    /// Lines produced by the last `update_file` call.
    pub fn output_content(&self) -> &[String] {
        &self.output_content
    }

    /// Values substituted into `file` by the last read, keyed by placeholder.
    pub fn substitutions(&self, file: &str) -> Option<&HashMap<String, String>> {
        self.substitutions.get(file_name(file))
    }

    /// `PLACEHOLDER_ID` value used for each file read so far.
    pub fn ids(&self) -> HashMap<String, String> {
        self.resolved_for(PLACEHOLDER_ID)
    }

    /// `PLACEHOLDER_PATH` value used for each file read so far.
    pub fn paths(&self) -> HashMap<String, String> {
        self.resolved_for(PLACEHOLDER_PATH)
    }

    fn resolved_for(&self, token: &str) -> HashMap<String, String> {
        self.substitutions
            .iter()
            .filter_map(|(file, values)| values.get(token).map(|v| (file.clone(), v.clone())))
            .collect()
    }

    /// Reads a fixture and returns its lines with every placeholder replaced.
    ///
    /// Longer tokens are applied first so `PLACEHOLDER_FORM_KEY` cannot
    /// clobber the prefix of `PLACEHOLDER_FORM_KEY_1`.
    pub fn read_updated_file(&mut self, name: &str) -> Result<Vec<String>, TemplateError> {
        let mut lines = self.read_fixture(name)?;
        if self.replacements.is_empty() {
            return Ok(lines);
        }

        let mut ordered: Vec<(&String, &Replacement)> = self.replacements.iter().collect();
        ordered.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut resolved = HashMap::new();
        for (token, replacement) in ordered {
            let value = replacement.resolve();
            lines = lines
                .iter()
                .map(|line| replacement.apply(line, &value))
                .collect();
            resolved.insert(token.clone(), value);
        }

        debug!(
            fixture = file_name(name),
            replacements = resolved.len(),
            "placeholders substituted"
        );
        self.substitutions.insert(file_name(name).to_string(), resolved);

        Ok(lines)
    }

    /// Writes the updated fixture to the target directory under a random
    /// five-letter prefix and returns the output file name.
    pub fn update_file(&mut self, name: &str) -> Result<String, TemplateError> {
        let output = prefixed_name(name);
        self.update_file_as(name, &output)
    }

    pub fn update_file_as(&mut self, name: &str, output: &str) -> Result<String, TemplateError> {
        let lines = self.read_updated_file(name)?;
        self.write_output(output, &lines)?;
        self.output_content = lines;
        Ok(output.to_string())
    }

    /// Updates every file in `<folder>/<directory>`, sorted by name.
    ///
    /// The client's folder is moved into `directory` so later reads resolve
    /// relative to it.
    pub fn update_files(&mut self, directory: &str) -> Result<Vec<String>, TemplateError> {
        let span = info_span!("update_files", directory = file_name(directory));
        let _guard = span.enter();

        let files = self.list_fixtures(directory)?;
        self.folder = format!("{}/{}", self.folder, file_name(directory));

        files.iter().map(|file| self.update_file(file)).collect()
    }

    /// Copies a fixture unchanged to the target directory as the configured
    /// output file.
    pub fn rename_as_output(&self, name: &str) -> Result<String, TemplateError> {
        let lines = self.read_fixture(name)?;
        self.write_output(&self.output_file, &lines)?;
        Ok(self.output_file.clone())
    }

    /// Copies `<folder>/<name>` into the target directory under a random
    /// five-letter prefix. Fails if the destination already exists.
    pub fn copy_file<P: AsRef<Path>>(&self, folder: P, name: &str) -> Result<String, TemplateError> {
        use std::io::ErrorKind;

        let source = folder.as_ref().join(file_name(name));
        let copied = prefixed_name(name);
        let destination = self.target_directory.join(&copied);

        let copy_error = |e: std::io::Error| TemplateError::CopyFile {
            from: source.clone(),
            to: destination.clone(),
            source: e,
        };

        let mut reader = File::open(&source).map_err(copy_error)?;
        ensure_directory(&self.target_directory)?;

        let mut writer = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&destination)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(TemplateError::FileExists(destination.clone()));
            }
            Err(e) => return Err(copy_error(e)),
        };
        std::io::copy(&mut reader, &mut writer).map_err(copy_error)?;

        debug!(
            from = %redact_path(&source),
            to = %redact_path(&destination),
            "fixture copied"
        );
        Ok(copied)
    }

    fn fixture_directory(&self) -> PathBuf {
        self.root_path.join(&self.folder)
    }

    fn read_fixture(&self, name: &str) -> Result<Vec<String>, TemplateError> {
        let path = self.fixture_directory().join(file_name(name));
        let content = std::fs::read_to_string(&path)
            .map_err(|e| TemplateError::ReadFile { path, source: e })?;

        Ok(content.lines().map(str::to_string).collect())
    }

    fn list_fixtures(&self, directory: &str) -> Result<Vec<String>, TemplateError> {
        let path = self.fixture_directory().join(file_name(directory));
        let read_error = |e: std::io::Error| TemplateError::ReadDirectory {
            path: path.clone(),
            source: e,
        };

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&path).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            if entry.file_type().map_err(read_error)?.is_file() {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        files.sort();

        Ok(files)
    }

    /// Replaces any existing file of the same name.
    fn write_output(&self, output: &str, lines: &[String]) -> Result<PathBuf, TemplateError> {
        ensure_directory(&self.target_directory)?;
        let path = self.target_directory.join(file_name(output));

        if std::fs::symlink_metadata(&path).is_ok() {
            log::debug!("Replacing existing output {}", redact_path(&path));
        }

        let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        std::fs::write(&path, content).map_err(|e| TemplateError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        debug!(output = %redact_path(&path), lines = lines.len(), "fixture written");
        Ok(path)
    }
}

fn prefixed_name(name: &str) -> String {
    format!("{}{}", naming::random_alphabetic(5), file_name(name))
}

fn ensure_directory(path: &Path) -> Result<(), TemplateError> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| TemplateError::CreateDirectory {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}
