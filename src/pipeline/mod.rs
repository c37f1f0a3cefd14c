//! Seed phrase batch pipeline
//!
//! Splits raw file text into lines, screens each line by word count and
//! hands the survivors to a [`WalletDeriver`](crate::wallet::WalletDeriver).

mod batch;
mod lines;
mod validator;

pub use batch::{preview, BatchProcessor, DEFAULT_PREVIEW_CHARS, MAX_PREVIEW_CHARS};
pub use lines::split_lines;
pub use validator::{is_valid_word_count, validate_word_count, word_count, ALLOWED_WORD_COUNTS};
