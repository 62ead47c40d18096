//! Bank fee profile data structures
//!
//! Field names follow the camelCase keys of the published bank datasets.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Client category a dataset is published for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    Individual,
    Business,
}

impl ClientType {
    pub const ALL: [ClientType; 2] = [ClientType::Individual, ClientType::Business];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientType::Individual => "individual",
            ClientType::Business => "business",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" => Ok(ClientType::Individual),
            "business" => Ok(ClientType::Business),
            other => Err(format!("unknown client type '{other}' (expected individual or business)")),
        }
    }
}

/// Residency status of the client with respect to the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Residency {
    Resident,
    NonResident,
}

/// SWIFT charge-bearer option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwiftOption {
    /// Shared: each side pays its own bank
    #[serde(rename = "SHA")]
    Sha,
    /// Sender covers all charges
    #[serde(rename = "OUR")]
    Our,
    /// Beneficiary covers all charges
    #[serde(rename = "BEN")]
    Ben,
}

impl SwiftOption {
    pub const ALL: [SwiftOption; 3] = [SwiftOption::Sha, SwiftOption::Our, SwiftOption::Ben];

    /// Key used in a bank's transfer-out table
    pub fn as_str(&self) -> &'static str {
        match self {
            SwiftOption::Sha => "SHA",
            SwiftOption::Our => "OUR",
            SwiftOption::Ben => "BEN",
        }
    }
}

impl fmt::Display for SwiftOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwiftOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SHA" => Ok(SwiftOption::Sha),
            "OUR" => Ok(SwiftOption::Our),
            "BEN" => Ok(SwiftOption::Ben),
            other => Err(format!("unknown SWIFT option '{other}' (expected SHA, OUR or BEN)")),
        }
    }
}

/// How a rule turns an amount into a fee.
///
/// Datasets carry this as an open string; anything other than `fixed` and
/// `percentage` is kept verbatim and priced like a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FeeType {
    Fixed,
    Percentage,
    Other(String),
}

impl From<String> for FeeType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "fixed" => FeeType::Fixed,
            "percentage" => FeeType::Percentage,
            _ => FeeType::Other(s),
        }
    }
}

impl From<FeeType> for String {
    fn from(t: FeeType) -> Self {
        match t {
            FeeType::Fixed => "fixed".to_string(),
            FeeType::Percentage => "percentage".to_string(),
            FeeType::Other(s) => s,
        }
    }
}

/// One amount-banded pricing tier, optionally scoped to a settlement speed.
///
/// Fields are read leniently: a value of the wrong JSON type is treated as
/// absent, so one malformed field never unprices the whole rule array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRule {
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,

    /// Absent or null means no upper bound
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,

    #[serde(default, deserialize_with = "lenient_fee_type", skip_serializing_if = "Option::is_none")]
    pub fee_type: Option<FeeType>,

    /// Flat amount for fixed rules, rate (0.001 = 0.1%) otherwise
    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub fee_value: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub min_fee: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub max_fee: Option<f64>,

    #[serde(default, deserialize_with = "lenient_f64", skip_serializing_if = "Option::is_none")]
    pub additional_fee: Option<f64>,

    /// Settlement speed this tier applies to (e.g. "T+1"); non-strings count as untagged
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub settlement: Option<String>,
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| v.as_f64()))
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|v| match v {
        Value::String(s) => Some(s),
        _ => None,
    }))
}

fn lenient_fee_type<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<FeeType>, D::Error> {
    Ok(lenient_string(deserializer)?.map(FeeType::from))
}

impl FeeRule {
    /// Fixed-fee tier covering `(min, max]`
    pub fn fixed(min_amount: f64, max_amount: Option<f64>, fee_value: f64) -> Self {
        Self {
            min_amount: Some(min_amount),
            max_amount,
            fee_type: Some(FeeType::Fixed),
            fee_value: Some(fee_value),
            additional_fee: Some(0.0),
            ..Default::default()
        }
    }

    /// Percentage tier covering `(min, max]`
    pub fn percentage(min_amount: f64, max_amount: Option<f64>, rate: f64) -> Self {
        Self {
            min_amount: Some(min_amount),
            max_amount,
            fee_type: Some(FeeType::Percentage),
            fee_value: Some(rate),
            additional_fee: Some(0.0),
            ..Default::default()
        }
    }

    pub fn with_clamp(mut self, min_fee: f64, max_fee: f64) -> Self {
        self.min_fee = Some(min_fee);
        self.max_fee = Some(max_fee);
        self
    }

    pub fn with_additional_fee(mut self, additional_fee: f64) -> Self {
        self.additional_fee = Some(additional_fee);
        self
    }

    pub fn with_settlement(mut self, settlement: impl Into<String>) -> Self {
        self.settlement = Some(settlement.into());
        self
    }
}

/// Informational object standing in for a rule array (option not priced)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionNotice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Value stored under an option key of a transfer-out table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionEntry {
    Rules(Vec<FeeRule>),
    Notice(OptionNotice),
    Other(Value),
}

/// Per-bank mapping from transfer option to its pricing rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransferOutTable {
    /// Settlement speed -> flat surcharge, in document order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub options: BTreeMap<String, OptionEntry>,
}

impl TransferOutTable {
    /// Rule array for an option, if the bank prices it
    pub fn rules(&self, option: SwiftOption) -> Option<&[FeeRule]> {
        match self.options.get(option.as_str()) {
            Some(OptionEntry::Rules(rules)) => Some(rules),
            _ => None,
        }
    }

    /// Notice text for an option the bank lists but does not price
    pub fn notice(&self, option: SwiftOption) -> Option<&str> {
        match self.options.get(option.as_str()) {
            Some(OptionEntry::Notice(n)) => n.notice.as_deref(),
            _ => None,
        }
    }

    pub fn insert_rules(&mut self, option: SwiftOption, rules: Vec<FeeRule>) {
        self.options.insert(option.as_str().to_string(), OptionEntry::Rules(rules));
    }

    pub fn has_special(&self) -> bool {
        self.special.is_some()
    }

    /// Keys of the `special` map in document order
    pub fn special_keys(&self) -> impl Iterator<Item = &str> {
        self.special.iter().flat_map(|m| m.keys().map(String::as_str))
    }

    /// Flat surcharge for a settlement speed; non-numeric entries are ignored
    pub fn surcharge(&self, settlement: &str) -> Option<f64> {
        self.special.as_ref()?.get(settlement)?.as_f64()
    }

    pub fn set_surcharge(&mut self, settlement: impl Into<String>, amount: f64) {
        self.special
            .get_or_insert_with(Map::new)
            .insert(settlement.into(), Value::from(amount));
    }
}

/// Residency-specific override of a bank's table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidencyProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_out: Option<TransferOutTable>,
}

/// One bank's published fee schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankProfile {
    pub name: String,

    #[serde(default)]
    pub transfer_out: TransferOutTable,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident: Option<ResidencyProfile>,

    #[serde(default, rename = "non-resident", skip_serializing_if = "Option::is_none")]
    pub non_resident: Option<ResidencyProfile>,
}

impl BankProfile {
    pub fn new(name: impl Into<String>, transfer_out: TransferOutTable) -> Self {
        Self {
            name: name.into(),
            transfer_out,
            resident: None,
            non_resident: None,
        }
    }

    /// Effective schedule for a residency status.
    ///
    /// The residency sub-profile's table wins when present; otherwise the
    /// bank's base table applies. `None` always selects the base table.
    pub fn schedule(&self, residency: Option<Residency>) -> FeeSchedule<'_> {
        let sub = match residency {
            Some(Residency::Resident) => self.resident.as_ref(),
            Some(Residency::NonResident) => self.non_resident.as_ref(),
            None => None,
        };
        let transfer_out = sub
            .and_then(|p| p.transfer_out.as_ref())
            .unwrap_or(&self.transfer_out);

        FeeSchedule {
            bank_name: &self.name,
            transfer_out,
        }
    }
}

/// Borrowed view of the table used to price one bank for one residency
#[derive(Debug, Clone, Copy)]
pub struct FeeSchedule<'a> {
    pub bank_name: &'a str,
    pub transfer_out: &'a TransferOutTable,
}

impl<'a> FeeSchedule<'a> {
    pub fn new(bank_name: &'a str, transfer_out: &'a TransferOutTable) -> Self {
        Self { bank_name, transfer_out }
    }
}
