//! Error types for layout loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`LayoutParser::fetch`](crate::LayoutParser::fetch).
///
/// The variant is chosen by where the layout came from, not by what went
/// wrong. The underlying failure is available through `source()`.
#[derive(Error, Debug)]
pub enum Error {
    /// A user-supplied layout file could not be read or parsed.
    #[error("{message}")]
    FileRead {
        path: PathBuf,
        message: String,
        #[source]
        source: ReadFailure,
    },

    /// The built-in layout resource could not be read or parsed.
    #[error("{message}")]
    ResourceRead {
        resource: String,
        message: String,
        #[source]
        source: ReadFailure,
    },
}

impl Error {
    /// Returns the failure that caused this error.
    pub fn cause(&self) -> &ReadFailure {
        match self {
            Error::FileRead { source, .. } | Error::ResourceRead { source, .. } => source,
        }
    }
}

/// Low-level failure while reading a layout stream.
#[derive(Error, Debug)]
pub enum ReadFailure {
    /// I/O error opening or reading the stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// XML error from quick-xml.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Undecodable name or invalid attribute.
    #[error("XML parse error: {0}")]
    Malformed(String),

    /// Input ended while an element was still open.
    #[error("Unexpected end of document: <{0}> is not closed")]
    UnclosedElement(String),

    /// Input contained no element at all.
    #[error("Premature end of file: no root element")]
    NoElements,
}
