//! Fee calculation: SEPA tariff, SWIFT rule resolution and settlement choices

pub mod sepa;
pub mod settlement;
pub mod strategy;
pub mod swift;

pub use sepa::{sepa_fee, SepaChannel, SepaTariff};
pub use settlement::{default_settlement, resolve_settlement_speed, settlement_options, SettlementChoice};
pub use strategy::{combined_sha_our_fee, FeeStrategy, UNIVERSAL_CAPITAL_BANK};
pub use swift::{round2, standard_fee, swift_fee, FeeResult};
