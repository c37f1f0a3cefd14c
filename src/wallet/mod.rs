//! Wallet derivation
//!
//! The pipeline only talks to [`WalletDeriver`]; [`MnemonicDeriver`] is the
//! alloy-backed implementation used by the CLI.

mod deriver;

pub use deriver::{DerivationError, DerivedWallet, MnemonicDeriver, WalletDeriver, DEFAULT_DERIVATION_PATH};
