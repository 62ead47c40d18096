//! Load bank profile datasets from JSON
//!
//! A dataset document is a JSON array of bank profiles. Any other top-level
//! value is treated as an empty dataset.

use super::{BankProfile, ClientType};
use crate::error::LoadError;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const BUNDLED_INDIVIDUAL: &str = include_str!("../../data/bank_profiles_individual.json");
const BUNDLED_BUSINESS: &str = include_str!("../../data/bank_profiles_business.json");

/// Load bank profiles from a JSON file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<BankProfile>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profiles = load_profiles_from_reader(BufReader::new(file))?;
    log::info!("Loaded {} bank profiles from {}", profiles.len(), path.display());
    Ok(profiles)
}

/// Load bank profiles from any reader
pub fn load_profiles_from_reader<R: Read>(reader: R) -> Result<Vec<BankProfile>, LoadError> {
    let doc: Value = serde_json::from_reader(reader)?;
    profiles_from_value(doc)
}

/// Load bank profiles from a JSON string
pub fn load_profiles_from_str(json: &str) -> Result<Vec<BankProfile>, LoadError> {
    let doc: Value = serde_json::from_str(json)?;
    profiles_from_value(doc)
}

/// Sample datasets compiled into the crate
pub fn load_bundled(client_type: ClientType) -> Result<Vec<BankProfile>, LoadError> {
    match client_type {
        ClientType::Individual => load_profiles_from_str(BUNDLED_INDIVIDUAL),
        ClientType::Business => load_profiles_from_str(BUNDLED_BUSINESS),
    }
}

fn profiles_from_value(doc: Value) -> Result<Vec<BankProfile>, LoadError> {
    let entries = match doc {
        Value::Array(entries) => entries,
        other => {
            log::warn!("Dataset root is not an array (found {}), using empty dataset", json_kind(&other));
            return Ok(Vec::new());
        }
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|source| LoadError::Profile { index, source })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
