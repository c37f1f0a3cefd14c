//! Wallet table encoding and private key extraction

pub mod extractor;
pub mod table;

pub use extractor::{extract, extract_keys, KEY_PREFIX};
pub use table::{decode, encode, parse_line, HEADER};
