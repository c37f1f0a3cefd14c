//! Mnemonic to wallet derivation using alloy

use alloy::signers::local::{
    coins_bip39::{English, Wordlist},
    MnemonicBuilder,
};
use serde::Serialize;
use thiserror::Error;

/// Default Ethereum path, first account, first address
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

/// Raised when a phrase fails the derivation library's own checks.
/// An expected outcome, not a fault.
///
/// Variants never carry phrase text; library error messages quote the
/// input and are dropped.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivationError {
    /// Word at this 1-based position is not in the English wordlist
    #[error("unknown word at position {0}")]
    UnknownWord(usize),
    #[error("bad checksum")]
    BadChecksum,
    #[error("derivation failed")]
    DerivationFailed,
}

/// Address and private key for one derived wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedWallet {
    /// EIP-55 checksummed address (0x prefixed)
    pub address: String,
    /// Private key in hex format (0x prefixed)
    pub private_key: String,
}

/// Turns an already word-count-checked phrase into a wallet
pub trait WalletDeriver {
    fn derive(&self, phrase: &str) -> Result<DerivedWallet, DerivationError>;
}

/// BIP-39 English wordlist, BIP-32 derivation on [`DEFAULT_DERIVATION_PATH`]
#[derive(Debug, Clone, Copy, Default)]
pub struct MnemonicDeriver;

impl MnemonicDeriver {
    pub fn new() -> Self {
        Self
    }
}

impl WalletDeriver for MnemonicDeriver {
    fn derive(&self, phrase: &str) -> Result<DerivedWallet, DerivationError> {
        // The wordlist lookup is lowercase with single-space separators
        let words: Vec<String> = phrase.split_whitespace().map(str::to_lowercase).collect();

        if let Some(position) = words.iter().position(|w| English::get_index(w).is_err()) {
            return Err(DerivationError::UnknownWord(position + 1));
        }

        // Every word is known, so a build failure can only be the checksum
        let signer = MnemonicBuilder::<English>::default()
            .phrase(words.join(" "))
            .derivation_path(DEFAULT_DERIVATION_PATH)
            .map_err(|_| DerivationError::DerivationFailed)?
            .build()
            .map_err(|_| DerivationError::BadChecksum)?;

        Ok(DerivedWallet {
            address: signer.address().to_checksum(None),
            private_key: format!("0x{}", hex::encode(signer.to_bytes())),
        })
    }
}
