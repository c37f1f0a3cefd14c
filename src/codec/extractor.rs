//! Private key extraction from decoded wallet tables

use super::table::decode;
use crate::types::{ExtractionResult, TableRow};
use tracing::{debug, info};

/// Prefix a last-column value needs to count as a key
pub const KEY_PREFIX: &str = "0x";

/// Take the trimmed last cell of each row when it starts with [`KEY_PREFIX`]
pub fn extract(rows: &[TableRow]) -> ExtractionResult {
    let keys: Vec<String> = rows
        .iter()
        .filter_map(|row| row.last())
        .map(|cell| cell.trim())
        .filter(|cell| cell.starts_with(KEY_PREFIX))
        .map(str::to_string)
        .collect();

    debug!(
        "[Extractor] {} of {} rows had a key in the last column",
        keys.len(),
        rows.len()
    );

    ExtractionResult { keys }
}

/// Decode table text and extract its keys
pub fn extract_keys(text: &str) -> ExtractionResult {
    let rows = decode(text);
    let result = extract(&rows);
    info!("[Extractor] Extracted {} private keys", result.len());
    result
}
