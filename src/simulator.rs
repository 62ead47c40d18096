//! Quote orchestration
//!
//! Resolves a client's selections (client type, residency, bank, channel,
//! settlement) against the bank store and prices SEPA plus all three SWIFT
//! options in one pass.

use crate::banks::{BankProfile, BankStore, ClientType, Residency, SwiftOption};
use crate::config::SimulatorConfig;
use crate::error::LoadError;
use crate::fees::{
    default_settlement, resolve_settlement_speed, round2, settlement_options, swift_fee, FeeResult,
    SepaChannel, SepaTariff, SettlementChoice,
};
use serde::{Deserialize, Serialize};

/// Client selections for one quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(default = "default_amount")]
    pub amount: f64,

    #[serde(default = "default_client_type")]
    pub client_type: ClientType,

    #[serde(default = "default_residency")]
    pub residency: Residency,

    /// Falls back to the first bank of the dataset when absent or unknown
    #[serde(default)]
    pub bank: Option<String>,

    #[serde(default = "default_channel")]
    pub channel: SepaChannel,

    /// First transfer of the day (SEPA promotion)
    #[serde(default = "default_first_of_day")]
    pub first_of_day: bool,

    /// Falls back to the bank's default when absent or not offered
    #[serde(default)]
    pub settlement: Option<SettlementChoice>,
}

fn default_amount() -> f64 { 250.0 }
fn default_client_type() -> ClientType { ClientType::Individual }
fn default_residency() -> Residency { Residency::Resident }
fn default_channel() -> SepaChannel { SepaChannel::Digital }
fn default_first_of_day() -> bool { true }

impl Default for QuoteRequest {
    fn default() -> Self {
        Self {
            amount: default_amount(),
            client_type: default_client_type(),
            residency: default_residency(),
            bank: None,
            channel: default_channel(),
            first_of_day: default_first_of_day(),
            settlement: None,
        }
    }
}

/// SEPA side of a quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SepaQuote {
    pub fee: f64,
    pub total: f64,
}

/// Priced result for one set of selections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub amount: f64,

    /// Bank actually priced, if the dataset had any
    pub bank: Option<String>,

    pub sepa: SepaQuote,

    /// SWIFT results; `None` means the bank publishes no pricing for the option
    pub sha: Option<FeeResult>,
    pub our: Option<FeeResult>,
    pub ben: Option<FeeResult>,

    /// Settlement choices offered for SHA, empty when the bank has none
    pub settlement_options: Vec<SettlementChoice>,

    /// Choice applied to SHA pricing
    pub settlement: Option<SettlementChoice>,
}

impl Quote {
    /// SHA result, or a zero fee when the bank has no SHA pricing
    pub fn sha_or_zero(&self) -> FeeResult {
        self.sha.unwrap_or_else(|| FeeResult::free(self.amount))
    }

    pub fn swift(&self, option: SwiftOption) -> Option<FeeResult> {
        match option {
            SwiftOption::Sha => self.sha,
            SwiftOption::Our => self.our,
            SwiftOption::Ben => self.ben,
        }
    }
}

/// Bank store plus SEPA tariff
#[derive(Debug, Clone)]
pub struct Simulator {
    store: BankStore,
    tariff: SepaTariff,
}

impl Simulator {
    pub fn new(store: BankStore, tariff: SepaTariff) -> Self {
        Self { store, tariff }
    }

    /// Load datasets and tariff from a config
    pub fn from_config(config: &SimulatorConfig) -> Result<Self, LoadError> {
        Ok(Self::new(BankStore::from_config(config)?, config.sepa.clone()))
    }

    /// Simulator over the sample datasets compiled into the crate
    pub fn bundled() -> Result<Self, LoadError> {
        Ok(Self::new(BankStore::bundled()?, SepaTariff::default()))
    }

    pub fn store(&self) -> &BankStore {
        &self.store
    }

    pub fn tariff(&self) -> &SepaTariff {
        &self.tariff
    }

    /// Named bank if published for the client type, otherwise the first one
    pub fn select_bank(&self, client_type: ClientType, name: Option<&str>) -> Option<&BankProfile> {
        name.and_then(|n| self.store.find_bank(n, client_type))
            .or_else(|| self.store.list_banks(client_type).first())
    }

    pub fn quote(&self, request: &QuoteRequest) -> Quote {
        let amount = request.amount;
        let sepa_fee = self.tariff.fee(amount, request.channel, request.first_of_day);
        let sepa = SepaQuote {
            fee: sepa_fee,
            total: round2(amount + sepa_fee),
        };

        let Some(bank) = self.select_bank(request.client_type, request.bank.as_deref()) else {
            log::debug!("No banks published for {} clients", request.client_type);
            return Quote {
                amount,
                bank: None,
                sepa,
                sha: None,
                our: None,
                ben: None,
                settlement_options: Vec::new(),
                settlement: None,
            };
        };

        let schedule = bank.schedule(Some(request.residency));
        let options = settlement_options(&schedule);

        let settlement = if options.is_empty() {
            None
        } else {
            let choice = request
                .settlement
                .clone()
                .filter(|c| options.contains(c))
                .unwrap_or_else(|| default_settlement(&schedule));
            Some(choice)
        };
        let speed = settlement
            .as_ref()
            .and_then(|choice| resolve_settlement_speed(&schedule, choice));

        log::debug!(
            "Quoting {amount} at {} ({:?}, settlement {:?})",
            bank.name,
            request.residency,
            speed
        );

        Quote {
            amount,
            bank: Some(bank.name.clone()),
            sepa,
            sha: swift_fee(amount, &schedule, SwiftOption::Sha, speed),
            our: swift_fee(amount, &schedule, SwiftOption::Our, None),
            ben: swift_fee(amount, &schedule, SwiftOption::Ben, None),
            settlement_options: options,
            settlement,
        }
    }
}

/// Parse a user-typed amount.
///
/// Keeps digits, `.` and `,`; the first `,` is a decimal separator. Empty or
/// unparseable input is zero.
pub fn parse_amount(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();
    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.replacen(',', ".", 1).parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banks::{FeeRule, TransferOutTable};
    use crate::fees::UNIVERSAL_CAPITAL_BANK;
    use approx::assert_abs_diff_eq;

    fn test_store() -> BankStore {
        let mut alpha = TransferOutTable::default();
        alpha.insert_rules(SwiftOption::Sha, vec![FeeRule::fixed(0.0, None, 10.0)]);
        alpha.insert_rules(SwiftOption::Our, vec![FeeRule::fixed(0.0, None, 30.0)]);
        alpha.set_surcharge("T+0", 15.0);
        alpha.set_surcharge("T+1", 5.0);

        let mut beta = TransferOutTable::default();
        beta.insert_rules(SwiftOption::Sha, vec![FeeRule::fixed(0.0, None, 12.0)]);

        let mut universal = TransferOutTable::default();
        universal.insert_rules(SwiftOption::Sha, vec![FeeRule::fixed(0.0, None, 8.0)]);
        universal.insert_rules(SwiftOption::Our, vec![FeeRule::fixed(0.0, None, 20.0)]);

        BankStore::new()
            .with_dataset(
                ClientType::Individual,
                vec![
                    BankProfile::new("Alpha", alpha),
                    BankProfile::new("Beta", beta),
                    BankProfile::new(UNIVERSAL_CAPITAL_BANK, universal),
                ],
            )
            .with_dataset(ClientType::Business, Vec::new())
    }

    fn simulator() -> Simulator {
        Simulator::new(test_store(), SepaTariff::default())
    }

    #[test]
    fn test_quote_defaults_to_first_bank() {
        let quote = simulator().quote(&QuoteRequest::default());

        assert_eq!(quote.bank.as_deref(), Some("Alpha"));
        assert_eq!(quote.sepa.fee, 1.99);
        assert_abs_diff_eq!(quote.sepa.total, 251.99, epsilon = 1e-9);

        // Partial named speeds: Standard offered and pre-selected
        assert_eq!(quote.settlement, Some(SettlementChoice::Standard));
        assert_eq!(quote.settlement_options.len(), 3);
        assert_eq!(quote.sha.unwrap().sender_fee, 10.0);
        assert_eq!(quote.our.unwrap().sender_fee, 30.0);
        assert!(quote.ben.is_none());
    }

    #[test]
    fn test_quote_with_settlement_surcharge() {
        let request = QuoteRequest {
            amount: 1000.0,
            settlement: Some(SettlementChoice::Speed("T+0".to_string())),
            ..Default::default()
        };
        let quote = simulator().quote(&request);

        assert_eq!(quote.sha.unwrap().sender_fee, 25.0);
        assert_eq!(quote.sha.unwrap().sender_pays_total, 1025.0);
        // OUR and BEN never take a settlement speed
        assert_eq!(quote.our.unwrap().sender_fee, 30.0);
    }

    #[test]
    fn test_quote_ignores_unoffered_settlement() {
        let request = QuoteRequest {
            settlement: Some(SettlementChoice::Speed("T+9".to_string())),
            ..Default::default()
        };
        let quote = simulator().quote(&request);
        assert_eq!(quote.settlement, Some(SettlementChoice::Standard));
        assert_eq!(quote.sha.unwrap().sender_fee, 10.0);
    }

    #[test]
    fn test_quote_named_bank() {
        let request = QuoteRequest {
            bank: Some("Beta".to_string()),
            amount: 5000.0,
            ..Default::default()
        };
        let quote = simulator().quote(&request);

        assert_eq!(quote.bank.as_deref(), Some("Beta"));
        assert!(quote.settlement_options.is_empty());
        assert!(quote.settlement.is_none());
        assert_eq!(quote.sha.unwrap().sender_fee, 12.0);
        assert!(quote.our.is_none());
    }

    #[test]
    fn test_quote_unknown_bank_falls_back() {
        let request = QuoteRequest {
            bank: Some("Nobody".to_string()),
            ..Default::default()
        };
        assert_eq!(simulator().quote(&request).bank.as_deref(), Some("Alpha"));
    }

    #[test]
    fn test_quote_override_bank() {
        let request = QuoteRequest {
            bank: Some(UNIVERSAL_CAPITAL_BANK.to_string()),
            amount: 400.0,
            ..Default::default()
        };
        let quote = simulator().quote(&request);
        assert_eq!(quote.sha.unwrap().sender_fee, 8.0);
        assert_eq!(quote.our.unwrap().sender_fee, 28.0);
    }

    #[test]
    fn test_quote_empty_dataset() {
        let request = QuoteRequest {
            client_type: ClientType::Business,
            amount: 25_000.0,
            channel: SepaChannel::Branch,
            ..Default::default()
        };
        let quote = simulator().quote(&request);

        assert!(quote.bank.is_none());
        assert_eq!(quote.sepa.fee, 50.0);
        assert_eq!(quote.sha_or_zero(), FeeResult::free(25_000.0));
    }

    #[test]
    fn test_quote_request_from_json() {
        let request: QuoteRequest =
            serde_json::from_str(r#"{ "amount": 900, "residency": "non-resident", "settlement": "T+1" }"#).unwrap();
        assert_eq!(request.amount, 900.0);
        assert_eq!(request.residency, Residency::NonResident);
        assert_eq!(request.settlement, Some(SettlementChoice::Speed("T+1".to_string())));
        assert!(request.first_of_day);
    }

    #[test]
    fn test_bundled_simulator() {
        let sim = Simulator::bundled().unwrap();
        for client_type in ClientType::ALL {
            let request = QuoteRequest {
                client_type,
                amount: 1500.0,
                ..Default::default()
            };
            let quote = sim.quote(&request);
            assert!(quote.bank.is_some());
            assert!(quote.sha.is_some());
        }
    }

    #[test]
    fn test_bundled_quotes() {
        let sim = Simulator::bundled().unwrap();
        let quote_for = |bank: &str, amount: f64, residency: Residency, settlement: Option<&str>| {
            sim.quote(&QuoteRequest {
                bank: Some(bank.to_string()),
                amount,
                residency,
                settlement: settlement.map(|s| SettlementChoice::from(s.to_string())),
                ..Default::default()
            })
        };

        // 1500 * 0.25% + 2 lifted to the 12 floor; non-resident table: 1500 * 0.4% + 5 lifted to 20
        let quote = quote_for("Adriatic Commerce Bank", 1500.0, Residency::Resident, None);
        assert_eq!(quote.sha.unwrap().sender_fee, 12.0);
        let quote = quote_for("Adriatic Commerce Bank", 1500.0, Residency::NonResident, None);
        assert_eq!(quote.sha.unwrap().sender_fee, 20.0);
        assert!(quote.settlement_options.is_empty());

        // All named speeds offered, T+2 pre-selected
        let quote = quote_for("Lovcen Savings Bank", 500.0, Residency::Resident, None);
        assert_eq!(quote.settlement, Some(SettlementChoice::Speed("T+2".to_string())));
        assert_eq!(quote.sha.unwrap().sender_fee, 9.0);
        let quote = quote_for("Lovcen Savings Bank", 500.0, Residency::Resident, Some("T+0"));
        assert_eq!(quote.sha.unwrap().sender_fee, 25.0);

        // Combined override: SHA fixed 10 + OUR fixed 20
        let quote = quote_for(UNIVERSAL_CAPITAL_BANK, 3000.0, Residency::Resident, None);
        assert_eq!(quote.our.unwrap().sender_fee, 30.0);
        assert_eq!(quote.our.unwrap().sender_pays_total, 3030.0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("250"), 250.0);
        assert_eq!(parse_amount("1250,50"), 1250.5);
        assert_eq!(parse_amount("007"), 7.0);
        assert_eq!(parse_amount("€ 99.9"), 99.9);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("1.2.3"), 0.0);
    }
}
