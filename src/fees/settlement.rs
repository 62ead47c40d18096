//! Settlement speed discovery for SHA transfers
//!
//! Offered choices come from the keys of a bank's `special` surcharge map.

use crate::banks::FeeSchedule;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Settlement speeds with a fixed display order
pub const NAMED_SPEEDS: [&str; 3] = ["T+0", "T+1", "T+2"];

const STANDARD_LABEL: &str = "Standard";

/// A settlement choice offered to the client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SettlementChoice {
    /// Bank's regular settlement, no surcharge
    Standard,
    /// Named speed, e.g. "T+0"
    Speed(String),
}

impl SettlementChoice {
    pub fn speed(&self) -> Option<&str> {
        match self {
            SettlementChoice::Standard => None,
            SettlementChoice::Speed(s) => Some(s),
        }
    }
}

impl From<String> for SettlementChoice {
    fn from(s: String) -> Self {
        if s == STANDARD_LABEL {
            SettlementChoice::Standard
        } else {
            SettlementChoice::Speed(s)
        }
    }
}

impl From<SettlementChoice> for String {
    fn from(choice: SettlementChoice) -> Self {
        match choice {
            SettlementChoice::Standard => STANDARD_LABEL.to_string(),
            SettlementChoice::Speed(s) => s,
        }
    }
}

impl FromStr for SettlementChoice {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SettlementChoice::from(s.to_string()))
    }
}

impl fmt::Display for SettlementChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettlementChoice::Standard => f.write_str(STANDARD_LABEL),
            SettlementChoice::Speed(s) => f.write_str(s),
        }
    }
}

/// Settlement choices to offer for a schedule.
///
/// When all of T+0, T+1 and T+2 are priced there is no standard option.
/// Otherwise "Standard" comes first, followed by the named speeds present and
/// then any extra keys in document order. No keys at all means no choice.
pub fn settlement_options(schedule: &FeeSchedule<'_>) -> Vec<SettlementChoice> {
    let keys: Vec<&str> = schedule.transfer_out.special_keys().collect();

    let named: Vec<&str> = NAMED_SPEEDS
        .iter()
        .copied()
        .filter(|k| keys.contains(k))
        .collect();
    let extra: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|k| !NAMED_SPEEDS.contains(k))
        .collect();

    if named.is_empty() && extra.is_empty() {
        return Vec::new();
    }

    let mut options = Vec::with_capacity(named.len() + extra.len() + 1);
    if named.len() < NAMED_SPEEDS.len() {
        options.push(SettlementChoice::Standard);
    }
    options.extend(
        named
            .into_iter()
            .chain(extra)
            .map(|k| SettlementChoice::Speed(k.to_string())),
    );
    options
}

/// Pre-selected choice: the slowest named speed when all are offered
pub fn default_settlement(schedule: &FeeSchedule<'_>) -> SettlementChoice {
    let all_named = NAMED_SPEEDS
        .iter()
        .all(|k| schedule.transfer_out.special_keys().any(|key| key == *k));

    if all_named {
        SettlementChoice::Speed(NAMED_SPEEDS[2].to_string())
    } else {
        SettlementChoice::Standard
    }
}

/// Speed to pass to SWIFT pricing; only banks with a `special` map take one
pub fn resolve_settlement_speed<'a>(
    schedule: &FeeSchedule<'_>,
    choice: &'a SettlementChoice,
) -> Option<&'a str> {
    if schedule.transfer_out.has_special() {
        choice.speed()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banks::TransferOutTable;

    fn table(special: &str) -> TransferOutTable {
        serde_json::from_str(&format!(r#"{{ "special": {special} }}"#)).unwrap()
    }

    fn labels(table: &TransferOutTable) -> Vec<String> {
        settlement_options(&FeeSchedule::new("Bank", table))
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_all_named_speeds() {
        let t = table(r#"{ "T+2": 0, "T+0": 20, "T+1": 10 }"#);
        assert_eq!(labels(&t), vec!["T+0", "T+1", "T+2"]);
        assert_eq!(
            default_settlement(&FeeSchedule::new("Bank", &t)),
            SettlementChoice::Speed("T+2".to_string())
        );
    }

    #[test]
    fn test_all_named_speeds_with_extra() {
        let t = table(r#"{ "Express": 40, "T+0": 20, "T+1": 10, "T+2": 0 }"#);
        assert_eq!(labels(&t), vec!["T+0", "T+1", "T+2", "Express"]);
    }

    #[test]
    fn test_partial_named_speeds() {
        let t = table(r#"{ "T+1": 10, "Weekend": 5, "T+0": 20 }"#);
        assert_eq!(labels(&t), vec!["Standard", "T+0", "T+1", "Weekend"]);
        assert_eq!(default_settlement(&FeeSchedule::new("Bank", &t)), SettlementChoice::Standard);
    }

    #[test]
    fn test_only_extra_keys() {
        let t = table(r#"{ "Same day": 15 }"#);
        assert_eq!(labels(&t), vec!["Standard", "Same day"]);
    }

    #[test]
    fn test_no_choice() {
        assert!(labels(&table("{}")).is_empty());
        assert!(labels(&TransferOutTable::default()).is_empty());
    }

    #[test]
    fn test_resolve_speed() {
        let with_special = table(r#"{ "T+1": 10 }"#);
        let without_special = TransferOutTable::default();
        let speed = SettlementChoice::Speed("T+1".to_string());

        let schedule = FeeSchedule::new("Bank", &with_special);
        assert_eq!(resolve_settlement_speed(&schedule, &speed), Some("T+1"));
        assert_eq!(resolve_settlement_speed(&schedule, &SettlementChoice::Standard), None);

        let schedule = FeeSchedule::new("Bank", &without_special);
        assert_eq!(resolve_settlement_speed(&schedule, &speed), None);
    }

    #[test]
    fn test_choice_labels() {
        assert_eq!("Standard".parse::<SettlementChoice>().unwrap(), SettlementChoice::Standard);
        assert_eq!(
            "T+0".parse::<SettlementChoice>().unwrap(),
            SettlementChoice::Speed("T+0".to_string())
        );
        assert_eq!(SettlementChoice::Speed("T+1".to_string()).to_string(), "T+1");
    }
}
