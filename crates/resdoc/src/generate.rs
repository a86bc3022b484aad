//! Document generation: render every resource and write the results.
//!
//! Each document is rendered completely in memory before its file is
//! written. A failure stops the run; documents written earlier stay on disk.

use std::path::Path;

use resdoc_config::Config;
use resdoc_model::Provider;
use resdoc_renderer::{
    DocumentRenderer, ManPageOptions, ManPageRenderer, MarkdownOptions, MarkdownRenderer,
};

use crate::error::CliError;

/// Output formats selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Formats {
    pub(crate) man: bool,
    pub(crate) markdown: bool,
}

impl Formats {
    /// Both formats unless one of the `--*-only` flags narrows the selection.
    pub(crate) fn from_flags(man_only: bool, markdown_only: bool) -> Self {
        Self {
            man: !markdown_only,
            markdown: !man_only,
        }
    }
}

/// Number of documents written per format.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) man_pages: usize,
    pub(crate) markdown_pages: usize,
}

impl Summary {
    pub(crate) fn total(&self) -> usize {
        self.man_pages + self.markdown_pages
    }
}

/// Render every resource of every provider in the selected formats.
pub(crate) fn generate(
    config: &Config,
    providers: &[Provider],
    formats: Formats,
) -> Result<Summary, CliError> {
    let man_dir = config.man_dir();
    let markdown_dir = config.markdown_dir();
    if formats.man {
        create_dir(&man_dir)?;
    }
    if formats.markdown {
        create_dir(&markdown_dir)?;
    }

    let mut summary = Summary::default();
    if formats.man {
        let renderer = ManPageRenderer::new(man_options(config));
        summary.man_pages = write_documents(&renderer, &man_dir, providers)?;
    }
    if formats.markdown {
        let renderer = MarkdownRenderer::new(markdown_options(config));
        summary.markdown_pages = write_documents(&renderer, &markdown_dir, providers)?;
    }
    Ok(summary)
}

fn man_options(config: &Config) -> ManPageOptions {
    ManPageOptions {
        manual_name: config.man.manual_name.clone(),
        command_name: config.man.command_name.clone(),
        date: config.man.date.clone(),
        section: config.man.section,
    }
}

fn markdown_options(config: &Config) -> MarkdownOptions {
    MarkdownOptions {
        layout: config.markdown.layout.clone(),
        section_name: config.markdown.section_name.clone(),
        sidebar_current: config.markdown.sidebar_current.clone(),
    }
}

fn create_dir(dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(dir).map_err(|source| CliError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_documents(
    renderer: &dyn DocumentRenderer,
    dir: &Path,
    providers: &[Provider],
) -> Result<usize, CliError> {
    let mut written = 0;
    for provider in providers {
        for resource in &provider.resources {
            let document = renderer.render_document(resource)?;
            let path = dir.join(&document.file_name);
            std::fs::write(&path, &document.content).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::info!(
                format = renderer.format(),
                provider = %provider.name,
                path = %path.display(),
                "Wrote document"
            );
            written += 1;
        }
    }
    Ok(written)
}
