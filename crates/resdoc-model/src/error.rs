//! Error types for model loading.

use std::path::PathBuf;

/// Error while loading a provider document.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ModelError {
    /// Input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// XML syntax error.
    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    /// XML attribute syntax error.
    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    /// Encoding error during XML parsing.
    #[error("encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// Document has no root element.
    #[error("document has no root element")]
    MissingRoot,

    /// Document ended inside an element.
    #[error("unexpected end of document inside <{element}>")]
    UnexpectedEof {
        /// Name of the unclosed element.
        element: String,
    },

    /// Boolean attribute with an unrecognized value.
    #[error("invalid boolean value {value:?} for attribute {attribute}")]
    InvalidBool {
        /// Attribute name.
        attribute: String,
        /// Offending value.
        value: String,
    },
}
