//! Per-screen interaction state
//!
//! A session walks `NoFileLoaded -> FileLoaded -> Extracted`. The pipeline
//! and codec stay pure; only the session knows what has been loaded and
//! whether there is anything to export.

use crate::codec::encode;
use crate::types::{BatchResult, ExtractionResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const WALLET_EXPORT_FILE: &str = "wallet_addresses.csv";
pub const KEYS_EXPORT_FILE: &str = "Private_Keys.txt";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Failed to read {}: {kind}", path.display())]
    Io { path: PathBuf, kind: ErrorKind },
    #[error("Please load a file first.")]
    NoFileLoaded,
    #[error("Nothing has been processed yet.")]
    NotProcessed,
    #[error("{0}")]
    NothingToExport(&'static str),
}

/// Output that can be saved as a file
pub trait Exportable {
    /// Default file name for the export
    const FILE_NAME: &'static str;
    /// Shown when there is nothing to save
    const EMPTY_MESSAGE: &'static str;

    fn is_empty(&self) -> bool;
    fn render(&self) -> String;
}

impl Exportable for BatchResult {
    const FILE_NAME: &'static str = WALLET_EXPORT_FILE;
    const EMPTY_MESSAGE: &'static str = "No valid seed phrases found.";

    fn is_empty(&self) -> bool {
        BatchResult::is_empty(self)
    }

    fn render(&self) -> String {
        encode(&self.records)
    }
}

impl Exportable for ExtractionResult {
    const FILE_NAME: &'static str = KEYS_EXPORT_FILE;
    const EMPTY_MESSAGE: &'static str = "No private keys to export.";

    fn is_empty(&self) -> bool {
        ExtractionResult::is_empty(self)
    }

    fn render(&self) -> String {
        self.to_text()
    }
}

/// A file ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoFileLoaded,
    FileLoaded,
    Extracted,
}

#[derive(Debug, Clone)]
pub struct Session<T> {
    content: Option<String>,
    output: Option<T>,
}

impl<T> Default for Session<T> {
    fn default() -> Self {
        Self {
            content: None,
            output: None,
        }
    }
}

impl<T: Exportable> Session<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match (&self.content, &self.output) {
            (None, _) => SessionState::NoFileLoaded,
            (Some(_), None) => SessionState::FileLoaded,
            (Some(_), Some(_)) => SessionState::Extracted,
        }
    }

    /// Replace whatever was loaded; any previous output is discarded
    pub fn load(&mut self, content: String) {
        debug!("[Session] Loaded {} bytes", content.len());
        self.content = Some(content);
        self.output = None;
    }

    /// Read `path` and load it. On failure the session is left as it was.
    pub async fn load_file(&mut self, path: &Path) -> Result<(), SessionError> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SessionError::Io {
                path: path.to_path_buf(),
                kind: e.kind(),
            })?;
        self.load(content);
        Ok(())
    }

    /// Run `f` over the loaded content and keep its output
    pub fn run<F>(&mut self, f: F) -> Result<&T, SessionError>
    where
        F: FnOnce(&str) -> T,
    {
        let content = self.content.as_deref().ok_or(SessionError::NoFileLoaded)?;
        let output = f(content);
        Ok(self.output.insert(output))
    }

    /// The file to save, if there is anything in it
    pub fn export(&self) -> Result<ExportFile, SessionError> {
        match (&self.content, &self.output) {
            (None, _) => Err(SessionError::NoFileLoaded),
            (Some(_), None) => Err(SessionError::NotProcessed),
            (Some(_), Some(output)) if output.is_empty() => {
                Err(SessionError::NothingToExport(T::EMPTY_MESSAGE))
            }
            (Some(_), Some(output)) => Ok(ExportFile {
                file_name: T::FILE_NAME,
                content: output.render(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::extract_keys;
    use crate::types::{LineOutcome, WalletRecord};

    #[test]
    fn test_run_requires_file() {
        let mut session: Session<ExtractionResult> = Session::new();
        assert_eq!(session.state(), SessionState::NoFileLoaded);
        assert_eq!(session.run(extract_keys).unwrap_err(), SessionError::NoFileLoaded);
        assert_eq!(session.export().unwrap_err(), SessionError::NoFileLoaded);
    }

    #[test]
    fn test_export_requires_run() {
        let mut session: Session<ExtractionResult> = Session::new();
        session.load("a,b,0x1".to_string());
        assert_eq!(session.state(), SessionState::FileLoaded);
        assert_eq!(session.export().unwrap_err(), SessionError::NotProcessed);
    }

    #[test]
    fn test_extract_then_export() {
        let mut session: Session<ExtractionResult> = Session::new();
        session.load("Seed Phrase,Address,Private Key\n\"p\",0xA,0xK1\n\"q\",0xB,0xK2".to_string());

        let keys = session.run(extract_keys).unwrap();
        assert_eq!(keys.len(), 2);

        let file = session.export().unwrap();
        assert_eq!(file.file_name, "Private_Keys.txt");
        assert_eq!(file.content, "0xK1\n0xK2");
    }

    #[test]
    fn test_empty_output_not_exported() {
        let mut session: Session<ExtractionResult> = Session::new();
        session.load("a,b,c".to_string());
        session.run(extract_keys).unwrap();

        assert_eq!(session.state(), SessionState::Extracted);
        assert_eq!(
            session.export().unwrap_err(),
            SessionError::NothingToExport("No private keys to export.")
        );
    }

    #[test]
    fn test_reload_discards_output() {
        let mut session: Session<ExtractionResult> = Session::new();
        session.load("a,b,0x1".to_string());
        session.run(extract_keys).unwrap();
        session.load("a,b,0x2".to_string());

        assert_eq!(session.state(), SessionState::FileLoaded);
        assert_eq!(session.run(extract_keys).unwrap().keys, vec!["0x2"]);
    }

    #[test]
    fn test_batch_export_is_csv() {
        let mut session: Session<BatchResult> = Session::new();
        session.load("ignored".to_string());
        session
            .run(|_| {
                let mut result = BatchResult::default();
                result.push(LineOutcome::Accepted(WalletRecord {
                    seed_phrase: "a b".into(),
                    address: "0xA".into(),
                    private_key: "0xK".into(),
                }));
                result
            })
            .unwrap();

        let file = session.export().unwrap();
        assert_eq!(file.file_name, "wallet_addresses.csv");
        assert_eq!(file.content, "Seed Phrase,Address,Private Key\n\"a b\",0xA,0xK");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("seedphrase-converter-missing-input.txt");
        let _ = std::fs::remove_file(&path);

        let mut session: Session<BatchResult> = Session::new();
        let err = session.load_file(&path).await.unwrap_err();

        assert_eq!(
            err,
            SessionError::Io {
                path: path.clone(),
                kind: ErrorKind::NotFound,
            }
        );
        assert!(err.to_string().starts_with("Failed to read"));
        assert_eq!(session.state(), SessionState::NoFileLoaded);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_file() {
        let mut session: Session<ExtractionResult> = Session::new();
        session.load("a,b,0x1".to_string());

        let path = std::env::temp_dir().join("seedphrase-converter-also-missing.csv");
        let _ = std::fs::remove_file(&path);
        assert!(session.load_file(&path).await.is_err());

        assert_eq!(session.state(), SessionState::FileLoaded);
        assert_eq!(session.run(extract_keys).unwrap().keys, vec!["0x1"]);
    }

    #[tokio::test]
    async fn test_load_file_reads_content() {
        let path = std::env::temp_dir().join(format!(
            "seedphrase-converter-keys-{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, "\"p\",0xA,0xK1\n").unwrap();

        let mut session: Session<ExtractionResult> = Session::new();
        session.load_file(&path).await.unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(session.state(), SessionState::FileLoaded);
        assert_eq!(session.run(extract_keys).unwrap().keys, vec!["0xK1"]);
    }
}
