//! Simulator configuration
//!
//! Datasets are mapped to client types explicitly; nothing is inferred from
//! file names.

use crate::banks::ClientType;
use crate::error::LoadError;
use crate::fees::SepaTariff;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const BUNDLED_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Configuration for building a [`crate::Simulator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Bank profile dataset per client type
    #[serde(default = "default_datasets")]
    pub datasets: BTreeMap<ClientType, PathBuf>,

    /// SEPA fee schedule
    #[serde(default)]
    pub sepa: SepaTariff,
}

fn default_datasets() -> BTreeMap<ClientType, PathBuf> {
    let dir = Path::new(BUNDLED_DATA_DIR);
    BTreeMap::from([
        (ClientType::Individual, dir.join("bank_profiles_individual.json")),
        (ClientType::Business, dir.join("bank_profiles_business.json")),
    ])
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::bundled()
    }
}

impl SimulatorConfig {
    /// Config pointing at the sample datasets shipped in `data/`
    pub fn bundled() -> Self {
        Self {
            datasets: default_datasets(),
            sepa: SepaTariff::default(),
        }
    }

    /// Read a JSON config file.
    ///
    /// Relative dataset paths are resolved against the config file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = serde_json::from_str(&text)?;

        if let Some(base) = path.parent() {
            for dataset in config.datasets.values_mut() {
                if dataset.is_relative() {
                    *dataset = base.join(&*dataset);
                }
            }
        }
        Ok(config)
    }

    /// Override the dataset for one client type
    pub fn with_dataset(mut self, client_type: ClientType, path: impl Into<PathBuf>) -> Self {
        self.datasets.insert(client_type, path.into());
        self
    }
}
