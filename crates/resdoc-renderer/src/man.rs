//! Man page (troff) renderer.
//!
//! Anchors in rich text become numbered footnotes. The [`LinkRegistry`] lives
//! for exactly one resource render and feeds its `REFERENCES` section.

use std::fmt::Write;

use resdoc_model::Resource;

use crate::document::{DocumentRenderer, argument_flags};
use crate::error::RenderError;
use crate::example::reformat;
use crate::links::LinkRegistry;
use crate::target::Target;
use crate::transcode::transcode;

/// Title block settings shared by every generated page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManPageOptions {
    /// Manual name shown in the page header (e.g. "Terraform Manual").
    pub manual_name: String,
    /// Command name in the `.TH` line (e.g. "TERRAFORM").
    pub command_name: String,
    /// Date shown in the page footer.
    pub date: String,
    /// Manual section number.
    pub section: u8,
}

impl Default for ManPageOptions {
    fn default() -> Self {
        Self {
            manual_name: "Terraform Manual".to_owned(),
            command_name: "TERRAFORM".to_owned(),
            date: "Feb 11, 2016".to_owned(),
            section: 1,
        }
    }
}

/// Renders one troff manual page per resource.
#[derive(Clone, Debug, Default)]
pub struct ManPageRenderer {
    options: ManPageOptions,
}

impl ManPageRenderer {
    /// Create a renderer with the given title block settings.
    #[must_use]
    pub fn new(options: ManPageOptions) -> Self {
        Self { options }
    }
}

impl DocumentRenderer for ManPageRenderer {
    fn format(&self) -> &'static str {
        "man"
    }

    fn file_name(&self, resource: &Resource) -> String {
        format!("{}.{}", resource.name, self.options.section)
    }

    fn render(&self, resource: &Resource) -> Result<String, RenderError> {
        let mut links = LinkRegistry::new();
        let mut out = String::with_capacity(4096);
        let name = &resource.name;
        let opts = &self.options;

        let _ = writeln!(
            out,
            r#".TH {} {} "{}" "{}" "{name}""#,
            opts.command_name, opts.section, opts.date, opts.manual_name
        );
        let description = transcode(&resource.description, Target::ManPage, Some(&mut links))?;
        let _ = write!(out, ".SH NAME\n{name}\\ \\- {description}\n\n");

        out.push_str(".SH SYNOPSIS\n");
        let _ = writeln!(out, r#"resource "\fB{name}\fR" "\fIname\fR" {{"#);
        out.push_str("    \\fIoptions\\fR\n.br\n}\n\n");

        out.push_str(".SH ARGUMENT REFERENCE\n");
        out.push_str("The following arguments are supported:\n");
        for arg in &resource.arguments {
            out.push_str(".TP\n");
            let _ = writeln!(out, r".BR {}\ (\fI{}\fR)", arg.name, arg.type_name);
            let mut flags = argument_flags(arg).join(",");
            if let Some(default) = arg.default_value() {
                if !flags.is_empty() {
                    flags.push(',');
                }
                let _ = write!(flags, "Default: {default}");
            }
            let _ = writeln!(out, "{flags}");
            out.push_str(".br\n");
            let description = transcode(&arg.description, Target::ManPage, Some(&mut links))?;
            let _ = writeln!(out, "{description}");
        }

        if !resource.attributes.is_empty() {
            out.push_str("\n\n.SH ATTRIBUTE REFERENCE\n");
            out.push_str("The following attributes are exported:\n");
            for attr in &resource.attributes {
                out.push_str(".TP\n");
                let _ = writeln!(out, r".BR {}\ (\fI{}\fR)", attr.name, attr.type_name);
                out.push_str(".br\n");
                let description =
                    transcode(&attr.description, Target::ManPage, Some(&mut links))?;
                let _ = writeln!(out, "{description}");
            }
        }

        if !resource.examples.is_empty() {
            out.push_str("\n\n.SH EXAMPLES\n");
            let _ = write!(
                out,
                "The following examples demonstrate the use of the {name} resource.\n\n.br\n"
            );
            for (index, example) in resource.examples.iter().enumerate() {
                let lines = reformat(&example.text)?;
                let caption = transcode(&example.description, Target::ManPage, Some(&mut links))?;
                let _ = writeln!(out, "{}: {caption}:", index + 1);
                out.push_str(".PP\n.nf\n.RS\n");
                for line in lines {
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str("\n.RE\n.fi\n.PP\n");
            }
        }

        if !links.is_empty() {
            out.push_str("\n\n.SH REFERENCES\n");
            for (number, url) in links.iter() {
                let _ = writeln!(out, r".BR {number}\ -\ \fI{url}\fR");
            }
        }

        Ok(out)
    }
}
