//! SEPA credit transfer tariff
//!
//! SEPA pricing is a flat schedule: a promotional micro-fee for the first
//! small transfer of the day, otherwise a per-channel fee that steps up above
//! the standard cap.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Channel a SEPA payment is submitted through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SepaChannel {
    /// Online / mobile banking
    Digital,
    /// Bank counter
    Branch,
}

impl fmt::Display for SepaChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SepaChannel::Digital => f.write_str("digital"),
            SepaChannel::Branch => f.write_str("branch"),
        }
    }
}

impl FromStr for SepaChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "digital" => Ok(SepaChannel::Digital),
            "branch" => Ok(SepaChannel::Branch),
            other => Err(format!("unknown SEPA channel '{other}' (expected digital or branch)")),
        }
    }
}

/// SEPA fee schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SepaTariff {
    /// Amounts up to this qualify for the first-transfer-of-day promotion
    #[serde(default = "default_promo_cap")]
    pub promo_cap: f64,

    #[serde(default = "default_promo_fee")]
    pub promo_fee: f64,

    /// Amounts up to this pay the standard channel fee
    #[serde(default = "default_standard_cap")]
    pub standard_cap: f64,

    #[serde(default = "default_digital_fee")]
    pub digital_fee: f64,

    #[serde(default = "default_digital_fee_above_cap")]
    pub digital_fee_above_cap: f64,

    #[serde(default = "default_branch_fee")]
    pub branch_fee: f64,

    #[serde(default = "default_branch_fee_above_cap")]
    pub branch_fee_above_cap: f64,
}

fn default_promo_cap() -> f64 { 200.0 }
fn default_promo_fee() -> f64 { 0.02 }
fn default_standard_cap() -> f64 { 20_000.0 }
fn default_digital_fee() -> f64 { 1.99 }
fn default_digital_fee_above_cap() -> f64 { 25.0 }
fn default_branch_fee() -> f64 { 3.99 }
fn default_branch_fee_above_cap() -> f64 { 50.0 }

impl Default for SepaTariff {
    fn default() -> Self {
        Self {
            promo_cap: default_promo_cap(),
            promo_fee: default_promo_fee(),
            standard_cap: default_standard_cap(),
            digital_fee: default_digital_fee(),
            digital_fee_above_cap: default_digital_fee_above_cap(),
            branch_fee: default_branch_fee(),
            branch_fee_above_cap: default_branch_fee_above_cap(),
        }
    }
}

impl SepaTariff {
    /// Fee for one SEPA transfer
    pub fn fee(&self, amount: f64, channel: SepaChannel, first_of_day: bool) -> f64 {
        if first_of_day && amount <= self.promo_cap {
            return self.promo_fee;
        }

        let within_cap = amount <= self.standard_cap;
        match channel {
            SepaChannel::Digital if within_cap => self.digital_fee,
            SepaChannel::Digital => self.digital_fee_above_cap,
            SepaChannel::Branch if within_cap => self.branch_fee,
            SepaChannel::Branch => self.branch_fee_above_cap,
        }
    }
}

/// SEPA fee under the standard tariff
pub fn sepa_fee(amount: f64, channel: SepaChannel, first_of_day: bool) -> f64 {
    SepaTariff::default().fee(amount, channel, first_of_day)
}
