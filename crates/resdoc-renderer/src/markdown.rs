//! Static-site Markdown renderer.
//!
//! Produces pages with YAML front matter for a documentation site generator.
//! Links stay inline, so no link registry is involved.

use std::fmt::Write;

use resdoc_model::Resource;

use crate::document::{DocumentRenderer, argument_flags};
use crate::error::RenderError;
use crate::example::reformat;
use crate::target::Target;
use crate::transcode::transcode;

/// Front matter settings shared by every generated page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Site layout name.
    pub layout: String,
    /// Section name prefixed to the page title.
    pub section_name: String,
    /// Sidebar entry to highlight.
    pub sidebar_current: String,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            layout: "triton".to_owned(),
            section_name: "Triton".to_owned(),
            sidebar_current: "docs-triton-firewall".to_owned(),
        }
    }
}

/// Renders one Markdown page per resource.
#[derive(Clone, Debug, Default)]
pub struct MarkdownRenderer {
    options: MarkdownOptions,
}

impl MarkdownRenderer {
    /// Create a renderer with the given front matter settings.
    #[must_use]
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    fn front_matter(&self, resource: &Resource, out: &mut String) {
        let opts = &self.options;
        let _ = write!(
            out,
            "---\nlayout: \"{}\"\npage_title: \"{}: {}\"\nsidebar_current: \"{}\"\ndescription: |-\n    {} \n---\n\n",
            opts.layout,
            opts.section_name,
            resource.name,
            opts.sidebar_current,
            indent_block(&resource.description),
        );
    }
}

impl DocumentRenderer for MarkdownRenderer {
    fn format(&self) -> &'static str {
        "markdown"
    }

    fn file_name(&self, resource: &Resource) -> String {
        format!("{}.html.markdown", resource.name)
    }

    fn render(&self, resource: &Resource) -> Result<String, RenderError> {
        let mut out = String::with_capacity(4096);
        self.front_matter(resource, &mut out);

        let _ = write!(out, "# {}\n\n", resource.name.replace('_', "\\_"));
        let description = transcode(&resource.description, Target::Markdown, None)?;
        let _ = write!(out, "{description}\n\n");

        // Argument and attribute sections hang off the examples section.
        if resource.examples.is_empty() {
            return Ok(out);
        }

        out.push_str("## Example Usages\n\n");
        for example in &resource.examples {
            let lines = reformat(&example.text)?;
            let caption = transcode(&example.description, Target::Markdown, None)?;
            let _ = write!(out, "{caption}\n\n");
            out.push_str("\n```\n");
            for line in lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str("```\n");
        }

        out.push_str("\n## Argument Reference\n\nThe following arguments are supported:\n\n");
        for arg in &resource.arguments {
            let mut labels = vec![arg.type_name.as_str()];
            labels.extend(argument_flags(arg));
            let _ = write!(out, "* `{}` - ({})", arg.name, labels.join(", "));
            if let Some(default) = arg.default_value() {
                let _ = write!(out, "  Default: `{default}`");
            }
            let description = transcode(&arg.description, Target::Markdown, None)?;
            let _ = write!(out, "\n    {description}\n\n");
        }

        if !resource.attributes.is_empty() {
            out.push_str("## Attribute Reference\n\nThe following attributes are exported:\n\n");
            for attr in &resource.attributes {
                let description = transcode(&attr.description, Target::Markdown, None)?;
                let _ = writeln!(
                    out,
                    "* `{}` - ({}) - {description} ",
                    attr.name, attr.type_name
                );
            }
        }

        Ok(out)
    }
}

/// Indent continuation lines so a multi-line value stays inside a YAML block scalar.
fn indent_block(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join("\n    ")
}
