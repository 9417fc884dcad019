use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during PDF import and validation operations
#[derive(Error, Debug)]
pub enum ImportError {
    /// No text could be extracted from a PDF file
    #[error("Could not extract text from {0}")]
    Extraction(PathBuf),

    /// Input directory does not exist
    #[error("Input directory '{0}' does not exist")]
    InputDirNotFound(PathBuf),

    /// Input directory contains no PDF files
    #[error("No PDF files found in '{0}'")]
    NoPdfFiles(PathBuf),

    /// Filesystem error while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
