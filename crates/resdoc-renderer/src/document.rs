//! Document renderer trait.
//!
//! Abstracts the differences between the man page and Markdown outputs so the
//! caller can drive every format through one loop.

use resdoc_model::{Argument, Resource};

use crate::error::RenderError;

/// A fully rendered document, ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedDocument {
    /// File name relative to the format's output directory.
    pub file_name: String,
    /// Complete document content.
    pub content: String,
}

/// Renders one output document per resource.
///
/// Rendering is done entirely in memory, so a resource that fails to render
/// never leaves a partial file behind.
pub trait DocumentRenderer {
    /// Short format label used in logs (e.g. "man", "markdown").
    fn format(&self) -> &'static str;

    /// File name for the resource's document.
    fn file_name(&self, resource: &Resource) -> String;

    /// Render the resource's document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a rich-text field is malformed or an example
    /// has fewer than two lines.
    fn render(&self, resource: &Resource) -> Result<String, RenderError>;

    /// Render a resource into a named document.
    ///
    /// Errors are wrapped with the resource name.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Resource`] if rendering fails.
    fn render_document(&self, resource: &Resource) -> Result<RenderedDocument, RenderError> {
        tracing::debug!(format = self.format(), resource = %resource.name, "Rendering");
        let content = self.render(resource).map_err(|e| RenderError::Resource {
            resource: resource.name.clone(),
            source: Box::new(e),
        })?;
        Ok(RenderedDocument {
            file_name: self.file_name(resource),
            content,
        })
    }
}

/// Flag labels for an argument, in fixed order.
///
/// Both renderers describe arguments with this vocabulary; each appends the
/// default value in its own notation.
pub(crate) fn argument_flags(arg: &Argument) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if arg.required {
        flags.push("Required");
    }
    if arg.force_new {
        flags.push("Change forces new resource");
    }
    if arg.computed {
        flags.push("Computed");
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_flags_order() {
        let arg = Argument {
            required: true,
            force_new: true,
            computed: true,
            default: "x".to_owned(),
            ..Argument::default()
        };
        assert_eq!(
            argument_flags(&arg),
            vec!["Required", "Change forces new resource", "Computed"]
        );
        assert!(argument_flags(&Argument::default()).is_empty());
    }
}
