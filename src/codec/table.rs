//! Comma-separated wallet table
//!
//! Export layout is `Seed Phrase,Address,Private Key` with the seed phrase
//! quoted. Decoding is a two-state quote toggle: `"` flips the state and is
//! dropped, a comma outside quotes ends the cell.

use crate::types::{TableRow, WalletRecord};

pub const HEADER: &str = "Seed Phrase,Address,Private Key";

/// Text that marks a first line as the header when decoding
pub const HEADER_MARKER: &str = "Private Key";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    InQuotes,
}

/// Header line, then one line per record, joined with `\n`.
///
/// A `"` inside a seed phrase is doubled. The decoder drops quote
/// characters, so such a phrase comes back without them while the address
/// and key columns stay intact.
pub fn encode(records: &[WalletRecord]) -> String {
    std::iter::once(HEADER.to_string())
        .chain(records.iter().map(|r| {
            format!(
                "\"{}\",{},{}",
                r.seed_phrase.replace('"', "\"\""),
                r.address,
                r.private_key
            )
        }))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split one line into cells
pub fn parse_line(line: &str) -> TableRow {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut state = ScanState::Normal;

    for ch in line.chars() {
        match (ch, state) {
            ('"', ScanState::Normal) => state = ScanState::InQuotes,
            ('"', ScanState::InQuotes) => state = ScanState::Normal,
            (',', ScanState::Normal) => cells.push(std::mem::take(&mut cell)),
            _ => cell.push(ch),
        }
    }

    // Last cell, even if empty or still inside quotes
    cells.push(cell);
    cells
}

/// Decode table text into data rows.
///
/// Blank lines are skipped. The first line is treated as a header and left
/// out when one of its cells contains [`HEADER_MARKER`]; a data row holding
/// that text in its first line is misread the same way.
pub fn decode(text: &str) -> Vec<TableRow> {
    let mut lines = text.lines();

    let first = match lines.next() {
        Some(line) => line,
        None => return Vec::new(),
    };

    let mut rows = Vec::new();
    if !first.trim().is_empty() {
        let cells = parse_line(first);
        if !cells.iter().any(|c| c.contains(HEADER_MARKER)) {
            rows.push(cells);
        }
    }

    rows.extend(
        lines
            .filter(|line| !line.trim().is_empty())
            .map(parse_line),
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(phrase: &str, n: usize) -> WalletRecord {
        WalletRecord {
            seed_phrase: phrase.to_string(),
            address: format!("0x{:040x}", n),
            private_key: format!("0x{:064x}", n * 7),
        }
    }

    #[test]
    fn test_encode_layout() {
        let text = encode(&[record("alpha beta", 1)]);
        let lines: Vec<_> = text.split('\n').collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Seed Phrase,Address,Private Key");
        assert_eq!(
            lines[1],
            format!("\"alpha beta\",0x{:040x},0x{:064x}", 1, 7)
        );
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), HEADER);
        assert!(decode(&encode(&[])).is_empty());
    }

    #[test]
    fn test_decode_reverses_encode() {
        let records = vec![
            record("abandon ability able", 1),
            record("zoo zone zero", 2),
            record("one two three", 3),
        ];
        let rows = decode(&encode(&records));

        assert_eq!(rows.len(), records.len());
        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(row, &vec![
                record.seed_phrase.clone(),
                record.address.clone(),
                record.private_key.clone(),
            ]);
        }
    }

    #[test]
    fn test_quoted_comma_preserved() {
        assert_eq!(
            parse_line("\"a, b\",0xABC,0xDEF"),
            vec!["a, b", "0xABC", "0xDEF"]
        );
    }

    #[test]
    fn test_trailing_empty_cell() {
        assert_eq!(parse_line("a,b,"), vec!["a", "b", ""]);
        assert_eq!(parse_line(""), vec![""]);
    }

    #[test]
    fn test_line_ends_in_quotes() {
        assert_eq!(parse_line("x,\"open, cell"), vec!["x", "open, cell"]);
    }

    #[test]
    fn test_embedded_quote_keeps_columns() {
        let records = vec![record("say \"hi\", then go", 9)];
        let text = encode(&records);
        assert!(text.contains("\"say \"\"hi\"\", then go\""));

        let rows = decode(&text);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "say hi, then go");
        assert_eq!(rows[0][1], records[0].address);
        assert_eq!(rows[0][2], records[0].private_key);
    }

    #[test]
    fn test_decode_without_header() {
        let rows = decode("\"p one\",0xA1,0xK1\r\n\r\n\"p two\",0xA2,0xK2\r\n");
        assert_eq!(rows, vec![
            vec!["p one", "0xA1", "0xK1"],
            vec!["p two", "0xA2", "0xK2"],
        ]);
    }

    #[test]
    fn test_header_heuristic_misreads_data_row() {
        let rows = decode("\"Private Key words\",0xA1,0xK1\n\"p\",0xA2,0xK2");
        assert_eq!(rows, vec![vec!["p", "0xA2", "0xK2"]]);
    }

    #[test]
    fn test_marker_only_checked_on_first_line() {
        let rows = decode("a,b,0x1\nPrivate Key,x,0x2");
        assert_eq!(rows.len(), 2);
    }
}
