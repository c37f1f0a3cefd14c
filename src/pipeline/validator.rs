//! Word count screening before derivation

use crate::types::RejectReason;

/// BIP-39 phrase lengths
pub const ALLOWED_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

pub fn word_count(line: &str) -> usize {
    line.split_whitespace().count()
}

pub fn is_valid_word_count(line: &str) -> bool {
    ALLOWED_WORD_COUNTS.contains(&word_count(line))
}

/// Accept a line whose word count is allowed. Word spelling and checksum
/// are left to the deriver.
pub fn validate_word_count(line: &str) -> Result<(), RejectReason> {
    let count = word_count(line);
    if ALLOWED_WORD_COUNTS.contains(&count) {
        Ok(())
    } else {
        Err(RejectReason::WordCount(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_allowed_counts_accepted() {
        for n in ALLOWED_WORD_COUNTS {
            assert!(is_valid_word_count(&words(n)), "{} words should pass", n);
            assert!(validate_word_count(&words(n)).is_ok());
        }
    }

    #[test]
    fn test_other_counts_rejected() {
        for n in [0, 1, 11, 13, 14, 16, 17, 19, 20, 22, 23, 25, 30] {
            assert!(!is_valid_word_count(&words(n)), "{} words should fail", n);
            assert_eq!(validate_word_count(&words(n)), Err(RejectReason::WordCount(n)));
        }
    }

    #[test]
    fn test_runs_of_whitespace() {
        let line = "a  b\tc   d e f g h i j k\t\tl";
        assert_eq!(word_count(line), 12);
        assert!(is_valid_word_count(line));
    }
}
