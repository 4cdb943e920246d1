//! Error types for ITT document handling.

use thiserror::Error;

/// Conversion error variants, one per failure stage.
///
/// Caption paragraphs missing timing attributes are not errors; they are
/// dropped during extraction and only visible at debug log level.
#[derive(Debug, Error)]
pub enum Error {
    /// Input is not well-formed XML
    #[error(transparent)]
    Parse(#[from] roxmltree::Error),

    /// IO error reading the input document
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;
