//! Error types for rendering.

/// Error while rendering a document.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Rich text could not be tokenized.
    #[error("malformed rich text: {0}")]
    Markup(#[from] quick_xml::Error),

    /// Rich-text tag carries a malformed attribute.
    #[error("malformed rich-text attribute: {0}")]
    MarkupAttr(#[from] quick_xml::events::attributes::AttrError),

    /// Rich text is not valid in its encoding.
    #[error("encoding error in rich text: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// Example source has no baseline line.
    #[error("example source needs at least 2 lines, found {lines}")]
    MalformedExample {
        /// Number of lines present.
        lines: usize,
    },

    /// Rendering a resource failed.
    #[error("resource {resource}: {source}")]
    Resource {
        /// Resource name.
        resource: String,
        /// Underlying error.
        source: Box<RenderError>,
    },
}
