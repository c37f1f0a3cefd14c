//! Seed Phrase Converter Library
//!
//! Converts files of BIP-39 seed phrases into Ethereum wallets in one pass:
//!
//! 1. **Batch conversion**: every non-blank line is checked for a valid word
//!    count and derived on `m/44'/60'/0'/0/0`. Bad lines are counted and
//!    skipped; they never stop the batch.
//!
//! 2. **Wallet table**: results export as `Seed Phrase,Address,Private Key`
//!    and the same table can be read back to pull out the private keys.

pub mod codec;
pub mod config;
pub mod pipeline;
pub mod session;
pub mod types;
pub mod wallet;

pub use codec::{decode, encode, extract, extract_keys};
pub use config::Config;
pub use pipeline::BatchProcessor;
pub use session::{ExportFile, Exportable, Session, SessionError, SessionState};
pub use types::{BatchResult, ExtractionResult, LineOutcome, RejectReason, Rejection, TableRow, WalletRecord};
pub use wallet::{DerivationError, DerivedWallet, MnemonicDeriver, WalletDeriver};
