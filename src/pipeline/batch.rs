//! Batch conversion of seed phrase files
//!
//! Every non-blank line becomes exactly one [`LineOutcome`]. A bad line is
//! recorded as a rejection and processing moves on; nothing aborts the batch.

use super::lines::split_lines;
use super::validator::validate_word_count;
use crate::types::{BatchResult, LineOutcome, RejectReason, Rejection, WalletRecord};
use crate::wallet::WalletDeriver;
use tracing::{debug, info, warn};

/// Characters of a skipped line that may appear in logs
pub const DEFAULT_PREVIEW_CHARS: usize = 12;

/// Upper bound for the preview length, whatever the configuration says
pub const MAX_PREVIEW_CHARS: usize = 16;

/// Runs split -> word count check -> derivation over a whole file
pub struct BatchProcessor<D> {
    deriver: D,
    preview_chars: usize,
}

impl<D: WalletDeriver> BatchProcessor<D> {
    pub fn new(deriver: D) -> Self {
        Self {
            deriver,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }

    /// Limit how much of a skipped line is echoed into the log
    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars.min(MAX_PREVIEW_CHARS);
        self
    }

    /// Convert one line. `line_number` is 1-based among non-blank lines.
    pub fn process_line(&self, line_number: usize, line: &str) -> LineOutcome {
        let reason = match validate_word_count(line) {
            Err(reason) => reason,
            Ok(()) => match self.deriver.derive(line) {
                Ok(wallet) => {
                    return LineOutcome::Accepted(WalletRecord {
                        seed_phrase: line.to_string(),
                        address: wallet.address,
                        private_key: wallet.private_key,
                    });
                }
                Err(e) => RejectReason::Derivation(e),
            },
        };

        warn!(
            "[Batch] Skipping line {} ({}): {}",
            line_number,
            reason,
            preview(line, self.preview_chars)
        );
        LineOutcome::Rejected(Rejection { line_number, reason })
    }

    /// Convert a whole file's text
    pub fn process(&self, text: &str) -> BatchResult {
        let result = split_lines(text)
            .enumerate()
            .map(|(i, line)| self.process_line(i + 1, line))
            .fold(BatchResult::default(), |mut acc, outcome| {
                acc.push(outcome);
                acc
            });

        if result.is_empty() {
            info!("[Batch] No valid seed phrases in {} lines", result.total_lines);
        } else {
            info!(
                "[Batch] Converted {} of {} lines ({} skipped)",
                result.converted_count(),
                result.total_lines,
                result.skipped_count
            );
        }
        debug!("[Batch] Rejections: {:?}", result.rejections);

        result
    }
}

/// Leading characters of `line`, at most `max_chars` and never more than
/// half the line, followed by `...` when anything was cut
pub fn preview(line: &str, max_chars: usize) -> String {
    let total = line.chars().count();
    let shown = max_chars.min(MAX_PREVIEW_CHARS).min(total / 2);
    let head: String = line.chars().take(shown).collect();
    if shown < total {
        format!("{}...", head)
    } else {
        head
    }
}
