//! Configuration types and validation for form filling
//! Created: 2026-10-16

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Default input document, relative to the working directory.
pub const DEFAULT_INPUT: &str = "./form.pdf";

/// One text value destined for one named field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAssignment {
    pub field: String,
    #[serde(deserialize_with = "scalar_to_string")]
    pub value: String,
}

impl FieldAssignment {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Parses `NAME=VALUE`. The value may itself contain `=`.
    pub fn parse(arg: &str) -> Result<Self> {
        let (field, value) = arg.split_once('=').ok_or_else(|| {
            Error::ValidationError(format!("Expected NAME=VALUE, got '{}'", arg))
        })?;
        if field.is_empty() {
            return Err(Error::ValidationError(format!(
                "Empty field name in '{}'",
                arg
            )));
        }
        Ok(Self::new(field, value))
    }
}

/// Upper bound for a single `--lorem` request.
pub const MAX_LOREM_PARAGRAPHS: usize = 1_000;

/// Request to fill `field` with `paragraphs` of generated placeholder text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoremRequest<'a> {
    pub field: &'a str,
    pub paragraphs: usize,
}

impl<'a> LoremRequest<'a> {
    /// Parses `NAME=PARAGRAPHS`.
    pub fn parse(arg: &'a str) -> Result<Self> {
        let (field, count) = arg.split_once('=').ok_or_else(|| {
            Error::ValidationError(format!("Expected NAME=PARAGRAPHS, got '{}'", arg))
        })?;
        let paragraphs = count.trim().parse().map_err(|_| {
            Error::ValidationError(format!("Invalid paragraph count '{}'", count))
        })?;
        if paragraphs > MAX_LOREM_PARAGRAPHS {
            return Err(Error::ValidationError(format!(
                "Paragraph count {} exceeds the limit of {}",
                paragraphs, MAX_LOREM_PARAGRAPHS
            )));
        }
        if field.is_empty() {
            return Err(Error::ValidationError(format!(
                "Empty field name in '{}'",
                arg
            )));
        }
        Ok(Self { field, paragraphs })
    }
}

/// Everything a single load-fill-save run needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillConfig {
    pub input: PathBuf,
    /// Directory for the timestamped output; defaults to the input's directory.
    pub output_dir: Option<PathBuf>,
    /// Applied in order.
    pub fields: Vec<FieldAssignment>,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: None,
            fields: Vec::new(),
        }
    }
}

impl FillConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FieldAssignment::new(field, value));
        self
    }

    /// Loads a JSON or YAML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        parse_json_or_yaml(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(Error::ValidationError("Input path is empty".into()));
        }
        if let Some(empty) = self.fields.iter().position(|a| a.field.is_empty()) {
            return Err(Error::ValidationError(format!(
                "Field assignment #{} has an empty field name",
                empty + 1
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FieldValues {
    List(Vec<FieldAssignment>),
    Map(BTreeMap<String, ScalarValue>),
}

/// Unquoted numbers and booleans are fine for text fields.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScalarValue {
    Text(String),
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

impl From<ScalarValue> for String {
    fn from(value: ScalarValue) -> Self {
        match value {
            ScalarValue::Text(text) => text,
            ScalarValue::Bool(flag) => flag.to_string(),
            ScalarValue::Integer(n) => n.to_string(),
            ScalarValue::Unsigned(n) => n.to_string(),
            ScalarValue::Float(n) => n.to_string(),
        }
    }
}

fn scalar_to_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    ScalarValue::deserialize(deserializer).map(String::from)
}

/// Loads field values from a JSON or YAML file holding either a list of
/// `{field, value}` records or a flat `name: value` map. Map entries come
/// back sorted by field name.
pub fn load_field_values(path: &Path) -> Result<Vec<FieldAssignment>> {
    let values: FieldValues = parse_json_or_yaml(&fs::read_to_string(path)?)?;
    Ok(match values {
        FieldValues::List(list) => list,
        FieldValues::Map(map) => map
            .into_iter()
            .map(|(field, value)| FieldAssignment::new(field, value))
            .collect(),
    })
}

// Try JSON first, then YAML
fn parse_json_or_yaml<T: DeserializeOwned>(content: &str) -> Result<T> {
    serde_json::from_str(content)
        .or_else(|_| serde_yaml::from_str(content))
        .map_err(Error::from)
}
