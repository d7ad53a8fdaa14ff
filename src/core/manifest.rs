//! Purpose: Load the examples manifest (an ordered JSON array of records) into memory.
//! Exports: `Record`, `Manifest`, `REQUIRED_KEYS`.
//! Role: Load stage of the converter; every record is checked before rendering starts.
//! Invariants: Record order matches the input array order; duplicates are kept.
//! Invariants: Falsy top-level JSON (`null`, `false`, `0`, `""`, `[]`, `{}`) loads as empty.
//! Invariants: Only key presence and string type are checked; extra keys are ignored.
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::json::parse;

pub const REQUIRED_KEYS: [&str; 3] = ["fname", "title", "description"];

/// One example script entry.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct Record {
    pub fname: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Manifest {
    records: Vec<Record>,
}

impl Manifest {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Reads and decodes the manifest at `path`.
    ///
    /// Fails with `NotFound` before reading when `path` is not a regular file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.is_file() {
            return Err(Error::new(ErrorKind::NotFound)
                .with_message("can not find the manifest file")
                .with_path(path)
                .with_hint("Pass the path to examples-manifest.json as the first argument."));
        }

        let input = fs::read_to_string(path).map_err(|err| read_error(path, err))?;
        Self::from_json_str(&input).map_err(|err| {
            if err.path().is_some() {
                err
            } else {
                err.with_path(path)
            }
        })
    }

    pub fn from_json_str(input: &str) -> Result<Self, Error> {
        let value: Value = parse::from_str(input).map_err(|err| {
            let hint = parse::hint_for_error(&err, "manifest");
            Error::new(ErrorKind::Parse)
                .with_message(format!("manifest is not valid JSON: {err}"))
                .with_hint(hint)
                .with_source(err)
        })?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, Error> {
        if !is_truthy(value) {
            return Ok(Self::default());
        }
        let Value::Array(items) = value else {
            return Err(Error::new(ErrorKind::InvalidRecord)
                .with_message(format!(
                    "manifest must be a JSON array, found {}",
                    type_name(value)
                ))
                .with_hint("Wrap the records in a top-level `[...]`."));
        };

        let records = items
            .iter()
            .enumerate()
            .map(|(index, item)| decode_record(index, item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn decode_record(index: usize, item: &Value) -> Result<Record, Error> {
    let Value::Object(fields) = item else {
        return Err(Error::new(ErrorKind::InvalidRecord)
            .with_message(format!(
                "manifest record must be a JSON object, found {}",
                type_name(item)
            ))
            .with_record(index));
    };

    for key in REQUIRED_KEYS {
        match fields.get(key) {
            Some(Value::String(_)) => {}
            Some(other) => {
                return Err(Error::new(ErrorKind::InvalidRecord)
                    .with_message(format!(
                        "record {index} key `{key}` must be a string, found {}",
                        type_name(other)
                    ))
                    .with_record(index)
                    .with_key(key));
            }
            None => {
                return Err(Error::new(ErrorKind::MissingField)
                    .with_message(format!("record {index} is missing required key `{key}`"))
                    .with_record(index)
                    .with_key(key)
                    .with_hint("Every record needs `fname`, `title` and `description`."));
            }
        }
    }

    Record::deserialize(item).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to decode a checked manifest record")
            .with_record(index)
            .with_source(err)
    })
}

fn read_error(path: &Path, err: io::Error) -> Error {
    let (kind, message) = match err.kind() {
        io::ErrorKind::NotFound => (ErrorKind::NotFound, "can not find the manifest file"),
        io::ErrorKind::InvalidData => (ErrorKind::Parse, "manifest is not valid UTF-8"),
        _ => (ErrorKind::Io, "failed to read the manifest file"),
    };
    Error::new(kind)
        .with_message(message)
        .with_path(path)
        .with_source(err)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
