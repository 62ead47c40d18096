//! SWIFT fee resolution
//!
//! Given a bank's transfer-out table, a charge-bearer option and an optional
//! settlement speed, select the matching rule tier and compute the sender fee.
//!
//! Tier selection runs in priority order:
//! 1. Settlement-tagged rules, when the caller asked for a speed. Band test is
//!    inclusive on both ends: `min <= amount <= max`.
//! 2. First rule of any settlement whose band contains the amount. Band test is
//!    exclusive on the minimum: `min < amount <= max`, and the rule must carry a
//!    `minAmount`.
//!
//! The two band tests differ and published datasets depend on both.

use super::strategy::{combined_sha_our_fee, FeeStrategy};
use crate::banks::{FeeRule, FeeSchedule, FeeType, SwiftOption, TransferOutTable};
use serde::{Deserialize, Serialize};

/// Sender-side cost of one transfer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeResult {
    pub sender_fee: f64,
    pub sender_pays_total: f64,
}

impl FeeResult {
    /// Result with both values rounded to the cent
    pub fn new(amount: f64, sender_fee: f64) -> Self {
        let sender_fee = round2(sender_fee);
        Self {
            sender_fee,
            sender_pays_total: round2(amount + sender_fee),
        }
    }

    /// No fee charged
    pub fn free(amount: f64) -> Self {
        Self::new(amount, 0.0)
    }
}

/// Round half-up to 2 decimal places
pub fn round2(n: f64) -> f64 {
    (n * 100.0 + 0.5).floor() / 100.0
}

/// Resolve the SWIFT fee for one option.
///
/// Returns `None` when the bank has no rule array for the option or no tier
/// matches the amount.
pub fn swift_fee(
    amount: f64,
    schedule: &FeeSchedule<'_>,
    option: SwiftOption,
    settlement: Option<&str>,
) -> Option<FeeResult> {
    match FeeStrategy::select(schedule.bank_name, option) {
        FeeStrategy::CombinedShaOur => {
            log::debug!("{}: {} priced as combined SHA+OUR", schedule.bank_name, option);
            Some(combined_sha_our_fee(amount, schedule.transfer_out))
        }
        FeeStrategy::Standard => standard_fee(amount, schedule.transfer_out, option, settlement),
    }
}

/// Rule-table pricing shared by all banks
pub fn standard_fee(
    amount: f64,
    table: &TransferOutTable,
    option: SwiftOption,
    settlement: Option<&str>,
) -> Option<FeeResult> {
    let rules = table.rules(option)?;
    let tagged = rules.iter().any(|r| r.settlement.is_some());
    let settlement = settlement.filter(|s| !s.is_empty());

    let rule = select_rule(rules, amount, tagged, settlement)?;
    let mut fee = rule_fee(rule, amount);

    if !tagged {
        if let Some(speed) = settlement {
            fee += settlement_surcharge(table, speed);
        }
    }

    Some(FeeResult::new(amount, fee))
}

fn select_rule<'a>(
    rules: &'a [FeeRule],
    amount: f64,
    tagged: bool,
    settlement: Option<&str>,
) -> Option<&'a FeeRule> {
    if tagged {
        if let Some(speed) = settlement {
            let exact = rules
                .iter()
                .find(|r| r.settlement.as_deref() == Some(speed) && in_settlement_band(r, amount));
            if exact.is_some() {
                return exact;
            }
            log::debug!("No {speed} tier for {amount}, falling back to standard bands");
        }
    }

    rules.iter().find(|r| in_standard_band(r, amount))
}

/// `min <= amount <= max`, either bound optional
fn in_settlement_band(rule: &FeeRule, amount: f64) -> bool {
    let min_ok = rule.min_amount.map_or(true, |min| amount >= min);
    let max_ok = rule.max_amount.map_or(true, |max| amount <= max);
    min_ok && max_ok
}

/// `min < amount <= max`; a rule without `minAmount` never matches
pub(crate) fn in_standard_band(rule: &FeeRule, amount: f64) -> bool {
    match rule.min_amount {
        Some(min) => amount > min && amount <= rule.max_amount.unwrap_or(f64::INFINITY),
        None => false,
    }
}

/// Fee for a selected tier, clamped to `[minFee, maxFee]` when both are set.
///
/// A rule missing `feeValue` or `additionalFee` prices at zero.
fn rule_fee(rule: &FeeRule, amount: f64) -> f64 {
    let (Some(value), Some(additional)) = (rule.fee_value, rule.additional_fee) else {
        return 0.0;
    };

    let fee = match rule.fee_type {
        Some(FeeType::Fixed) => value + additional,
        _ => amount * value + additional,
    };

    match (rule.min_fee, rule.max_fee) {
        (Some(min_fee), Some(max_fee)) => clamp_fee(fee, min_fee, max_fee),
        _ => fee,
    }
}

/// A non-positive `max_fee` means uncapped; the cap wins over the floor
fn clamp_fee(fee: f64, min_fee: f64, max_fee: f64) -> f64 {
    if max_fee > 0.0 && fee > max_fee {
        max_fee
    } else if fee < min_fee {
        min_fee
    } else {
        fee
    }
}

fn settlement_surcharge(table: &TransferOutTable, speed: &str) -> f64 {
    match table.surcharge(speed) {
        Some(surcharge) => surcharge,
        None => {
            if table.special_keys().any(|k| k == speed) {
                log::warn!("Ignoring non-numeric {speed} surcharge");
            }
            0.0
        }
    }
}
