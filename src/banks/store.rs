//! Read-only store of bank profiles keyed by client type

use super::{loader, BankProfile, ClientType};
use crate::config::SimulatorConfig;
use crate::error::LoadError;
use std::collections::HashMap;

/// Bank profiles for each client category, immutable once built
#[derive(Debug, Clone, Default)]
pub struct BankStore {
    datasets: HashMap<ClientType, Vec<BankProfile>>,
}

impl BankStore {
    /// Empty store; every lookup returns nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the dataset for a client type, replacing any previous one
    pub fn with_dataset(mut self, client_type: ClientType, banks: Vec<BankProfile>) -> Self {
        self.datasets.insert(client_type, banks);
        self
    }

    /// Build from the explicit client-type -> file mapping in the config
    pub fn from_config(config: &SimulatorConfig) -> Result<Self, LoadError> {
        let mut store = Self::new();
        for (&client_type, path) in &config.datasets {
            let banks = loader::load_profiles(path)?;
            store = store.with_dataset(client_type, banks);
        }
        Ok(store)
    }

    /// Store backed by the sample datasets compiled into the crate
    pub fn bundled() -> Result<Self, LoadError> {
        let mut store = Self::new();
        for client_type in ClientType::ALL {
            store = store.with_dataset(client_type, loader::load_bundled(client_type)?);
        }
        Ok(store)
    }

    /// All banks published for a client type, empty if none
    pub fn list_banks(&self, client_type: ClientType) -> &[BankProfile] {
        self.datasets
            .get(&client_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Exact-name lookup within a client type
    pub fn find_bank(&self, name: &str, client_type: ClientType) -> Option<&BankProfile> {
        self.list_banks(client_type).iter().find(|b| b.name == name)
    }
}
