//! Bank-specific pricing strategies
//!
//! Most banks are priced straight from their rule tables. A bank listed here
//! overrides that for a specific option.

use super::swift::{in_standard_band, FeeResult};
use crate::banks::{FeeRule, FeeType, SwiftOption, TransferOutTable};

/// Bank whose OUR transfers cost its SHA tier plus its OUR tier
pub const UNIVERSAL_CAPITAL_BANK: &str = "Universal Capital Bank AD";

/// How a bank/option pair is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeStrategy {
    /// Single rule lookup in the option's table
    Standard,
    /// Sum of the SHA and OUR tiers resolved independently
    CombinedShaOur,
}

impl FeeStrategy {
    pub fn select(bank_name: &str, option: SwiftOption) -> Self {
        match (bank_name, option) {
            (UNIVERSAL_CAPITAL_BANK, SwiftOption::Our) => FeeStrategy::CombinedShaOur,
            _ => FeeStrategy::Standard,
        }
    }
}

/// Combined SHA+OUR fee.
///
/// Both tiers use the `min < amount <= max` band test and are not clamped.
/// If either tier is missing the transfer is treated as free.
pub fn combined_sha_our_fee(amount: f64, table: &TransferOutTable) -> FeeResult {
    let find_tier = |option: SwiftOption| {
        table
            .rules(option)
            .and_then(|rules| rules.iter().find(|r| in_standard_band(r, amount)))
    };

    match (find_tier(SwiftOption::Sha), find_tier(SwiftOption::Our)) {
        (Some(sha), Some(our)) => FeeResult::new(amount, tier_fee(sha, amount) + tier_fee(our, amount)),
        _ => FeeResult::free(amount),
    }
}

/// Unclamped tier fee; missing values default to zero and missing type to percentage
fn tier_fee(rule: &FeeRule, amount: f64) -> f64 {
    let value = rule.fee_value.unwrap_or(0.0);
    let additional = rule.additional_fee.unwrap_or(0.0);
    match rule.fee_type {
        Some(FeeType::Fixed) => value + additional,
        _ => amount * value + additional,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banks::FeeSchedule;
    use crate::fees::swift_fee;
    use approx::assert_abs_diff_eq;

    fn universal_table() -> TransferOutTable {
        let mut table = TransferOutTable::default();
        table.insert_rules(
            SwiftOption::Sha,
            vec![
                FeeRule::fixed(0.0, Some(1000.0), 5.0).with_additional_fee(1.0),
                FeeRule::percentage(1000.0, None, 0.001),
            ],
        );
        table.insert_rules(
            SwiftOption::Our,
            vec![FeeRule::percentage(0.0, None, 0.002)
                .with_additional_fee(3.0)
                .with_clamp(50.0, 80.0)],
        );
        table
    }

    #[test]
    fn test_strategy_selection() {
        assert_eq!(FeeStrategy::select(UNIVERSAL_CAPITAL_BANK, SwiftOption::Our), FeeStrategy::CombinedShaOur);
        assert_eq!(FeeStrategy::select(UNIVERSAL_CAPITAL_BANK, SwiftOption::Sha), FeeStrategy::Standard);
        assert_eq!(FeeStrategy::select(UNIVERSAL_CAPITAL_BANK, SwiftOption::Ben), FeeStrategy::Standard);
        assert_eq!(FeeStrategy::select("Other Bank", SwiftOption::Our), FeeStrategy::Standard);
    }

    #[test]
    fn test_combined_fee() {
        let table = universal_table();

        // SHA fixed 5 + 1, OUR 500 * 0.002 + 3 (floor of 50 not applied)
        let result = combined_sha_our_fee(500.0, &table);
        assert_abs_diff_eq!(result.sender_fee, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.sender_pays_total, 510.0, epsilon = 1e-9);

        // SHA 5000 * 0.001, OUR 5000 * 0.002 + 3
        let result = combined_sha_our_fee(5000.0, &table);
        assert_abs_diff_eq!(result.sender_fee, 18.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.sender_pays_total, 5018.0, epsilon = 1e-9);
    }

    #[test]
    fn test_combined_fee_needs_both_tiers() {
        let mut table = TransferOutTable::default();
        table.insert_rules(SwiftOption::Sha, vec![FeeRule::fixed(0.0, None, 5.0)]);

        assert_eq!(combined_sha_our_fee(500.0, &table), FeeResult::free(500.0));

        // Exclusive minimum: zero matches neither tier
        assert_eq!(combined_sha_our_fee(0.0, &universal_table()), FeeResult::free(0.0));
    }

    #[test]
    fn test_swift_fee_dispatch() {
        let table = universal_table();
        let universal = FeeSchedule::new(UNIVERSAL_CAPITAL_BANK, &table);
        let other = FeeSchedule::new("Other Bank", &table);

        let combined = swift_fee(500.0, &universal, SwiftOption::Our, None).unwrap();
        assert_abs_diff_eq!(combined.sender_fee, 10.0, epsilon = 1e-9);

        // Same table through the standard path: OUR tier alone, clamped to 50
        let standard = swift_fee(500.0, &other, SwiftOption::Our, None).unwrap();
        assert_eq!(standard.sender_fee, 50.0);

        // SHA at the override bank is priced normally
        let sha = swift_fee(500.0, &universal, SwiftOption::Sha, None).unwrap();
        assert_eq!(sha.sender_fee, 6.0);
    }

    #[test]
    fn test_combined_present_without_our_rules() {
        let table = TransferOutTable::default();
        let universal = FeeSchedule::new(UNIVERSAL_CAPITAL_BANK, &table);
        assert_eq!(
            swift_fee(250.0, &universal, SwiftOption::Our, None),
            Some(FeeResult::free(250.0))
        );

        let result = swift_fee(1234.567, &universal, SwiftOption::Our, None).unwrap();
        assert_eq!(result.sender_fee, 0.0);
        assert_abs_diff_eq!(result.sender_pays_total, 1234.57, epsilon = 1e-9);
    }
}
