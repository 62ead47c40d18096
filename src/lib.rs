//! Fee Simulator - SEPA and SWIFT transfer cost estimation from bank fee rule tables
//!
//! This library provides:
//! - Bank fee profile datasets partitioned by client type
//! - SEPA flat-tariff fee calculation
//! - SWIFT fee resolution (tier selection, formulas, clamping, settlement surcharges)
//! - Bank-specific pricing strategies
//! - Settlement option discovery and full quote orchestration

pub mod banks;
pub mod config;
pub mod error;
pub mod fees;
pub mod simulator;

// Re-export commonly used types
pub use banks::{BankProfile, BankStore, ClientType, FeeRule, FeeSchedule, Residency, SwiftOption};
pub use config::SimulatorConfig;
pub use error::LoadError;
pub use fees::{sepa_fee, swift_fee, FeeResult, SepaChannel, SepaTariff};
pub use simulator::{parse_amount, Quote, QuoteRequest, Simulator};
