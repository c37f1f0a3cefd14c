//! Core types for the seed phrase converter

use crate::wallet::DerivationError;
use serde::Serialize;
use std::fmt;

/// One successfully converted seed phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletRecord {
    /// Trimmed seed phrase exactly as it appeared in the input
    pub seed_phrase: String,
    /// Checksummed Ethereum address (0x prefixed)
    pub address: String,
    /// Private key in hex format (0x prefixed)
    pub private_key: String,
}

/// Why a line was skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RejectReason {
    /// Word count not in the allowed set (carries the count found)
    WordCount(usize),
    /// The derivation library refused the phrase (bad word, bad checksum)
    Derivation(DerivationError),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::WordCount(n) => write!(f, "unsupported word count ({})", n),
            RejectReason::Derivation(e) => write!(f, "invalid mnemonic ({})", e),
        }
    }
}

/// A skipped line. Never carries the line content itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// 1-based position among the non-blank lines of the input
    pub line_number: usize,
    pub reason: RejectReason,
}

/// Result of processing a single non-blank line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Accepted(WalletRecord),
    Rejected(Rejection),
}

/// Aggregate result of one batch run.
///
/// `total_lines == records.len() + skipped_count` always holds, and
/// `records` keeps the order of the source lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub records: Vec<WalletRecord>,
    pub total_lines: usize,
    pub skipped_count: usize,
    pub rejections: Vec<Rejection>,
}

impl BatchResult {
    /// Fold one line outcome into the result
    pub fn push(&mut self, outcome: LineOutcome) {
        self.total_lines += 1;
        match outcome {
            LineOutcome::Accepted(record) => self.records.push(record),
            LineOutcome::Rejected(rejection) => {
                self.skipped_count += 1;
                self.rejections.push(rejection);
            }
        }
    }

    /// "No valid entries found"
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn converted_count(&self) -> usize {
        self.records.len()
    }
}

/// One decoded row of tabular text, cells in column order
pub type TableRow = Vec<String>;

/// Private keys pulled out of a table, in row order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub keys: Vec<String>,
}

impl ExtractionResult {
    /// "Nothing to export"
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// One key per line
    pub fn to_text(&self) -> String {
        self.keys.join("\n")
    }
}
