//! Run reporting on stderr.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};

use crate::generate::Summary;

/// Reports the config in use and the outcome of a run.
pub(crate) struct Reporter {
    term: Term,
    done: Style,
    failed: Style,
    note: Style,
}

impl Reporter {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            done: Style::new().green().bold(),
            failed: Style::new().red().bold(),
            note: Style::new().dim(),
        }
    }

    pub(crate) fn config(&self, path: &Path) {
        let line = format!("Using config {}", path.display());
        self.line(&self.note.apply_to(line).to_string());
    }

    pub(crate) fn finished(&self, summary: &Summary, output_dir: &Path) {
        let line = format!(
            "Wrote {} documents ({} man, {} markdown) to {}",
            summary.total(),
            summary.man_pages,
            summary.markdown_pages,
            output_dir.display()
        );
        self.line(&self.done.apply_to(line).to_string());
    }

    pub(crate) fn failed(&self, err: &impl Display) {
        let line = format!("Error: {err}");
        self.line(&self.failed.apply_to(line).to_string());
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}
