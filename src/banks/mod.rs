//! Bank fee profiles, dataset loading and the client-type store

mod data;
pub mod loader;
pub mod store;

pub use data::{
    BankProfile, ClientType, FeeRule, FeeSchedule, FeeType, OptionEntry, OptionNotice, Residency,
    ResidencyProfile, SwiftOption, TransferOutTable,
};
pub use loader::{load_bundled, load_profiles, load_profiles_from_reader, load_profiles_from_str};
pub use store::BankStore;
