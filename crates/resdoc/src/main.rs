//! resdoc CLI - provider reference documentation generator.
//!
//! Reads provider XML documents and writes one troff manual page and one
//! static-site Markdown page per resource.

mod error;
mod generate;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use resdoc_config::{CliSettings, Config};
use tracing_subscriber::EnvFilter;

use error::CliError;
use generate::Formats;
use report::Reporter;

/// resdoc - render provider resources as man pages and Markdown.
#[derive(Parser)]
#[command(name = "resdoc", version, about)]
struct Cli {
    /// Provider XML documents, rendered in the given order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Base output directory (overrides config, default: output/).
    #[arg(short, long)]
    output_path: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover resdoc.toml).
    #[arg(short, long, env = "RESDOC_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output (shows each written document).
    #[arg(long)]
    verbose: bool,

    /// Only generate man pages.
    #[arg(long, conflicts_with = "markdown_only")]
    man_only: bool,

    /// Only generate Markdown pages.
    #[arg(long)]
    markdown_only: bool,
}

impl Cli {
    fn execute(self, reporter: &Reporter) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            output_dir: self.output_path,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            reporter.config(path);
        }

        let providers = resdoc_model::load_files(&self.inputs)?;
        let formats = Formats::from_flags(self.man_only, self.markdown_only);
        let summary = generate::generate(&config, &providers, formats)?;

        reporter.finished(&summary, &config.output_dir);
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let reporter = Reporter::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.execute(&reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            reporter.failed(&err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsString;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "resdoc",
            "-o",
            "docs",
            "--man-only",
            "triton.xml",
            "extra.xml",
        ])
        .unwrap();
        assert_eq!(
            cli.inputs,
            vec![PathBuf::from("triton.xml"), PathBuf::from("extra.xml")]
        );
        assert_eq!(cli.output_path, Some(PathBuf::from("docs")));
        assert!(cli.man_only);
        assert!(!cli.markdown_only);
    }

    #[test]
    fn test_inputs_required() {
        assert!(Cli::try_parse_from(["resdoc"]).is_err());
    }

    #[test]
    fn test_format_flags_conflict() {
        assert!(Cli::try_parse_from(["resdoc", "--man-only", "--markdown-only", "a.xml"]).is_err());
    }

    #[test]
    fn test_execute_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("triton.xml");
        std::fs::write(
            &input,
            r#"<provider name="triton">
  <resources>
    <resource name="triton_key">
      <description>An SSH &lt;b&gt;key&lt;/b&gt;.</description>
      <arguments>
        <argument name="key" type="string" required="true">The public key.</argument>
      </arguments>
      <examples>
        <example description="A key">
          resource "triton_key" "example" {
            key = "ssh-rsa AAAA"
          }
        </example>
      </examples>
    </resource>
  </resources>
</provider>"#,
        )
        .unwrap();
        let config = dir.path().join("resdoc.toml");
        std::fs::write(&config, "[output]\ndir = \"generated\"\n").unwrap();

        let cli = Cli::try_parse_from([
            OsString::from("resdoc"),
            OsString::from("--config"),
            config.into_os_string(),
            input.into_os_string(),
        ])
        .unwrap();
        cli.execute(&Reporter::new()).unwrap();

        let man = std::fs::read_to_string(dir.path().join("generated/man/triton_key.1")).unwrap();
        assert!(man.contains(".SH NAME\ntriton_key\\ \\- An SSH _key_.\n"));
        let markdown = std::fs::read_to_string(
            dir.path().join("generated/markdown/triton_key.html.markdown"),
        )
        .unwrap();
        assert!(markdown.contains("* `key` - (string, Required)\n    The public key.\n"));
    }

    fn cli_in(dir: &std::path::Path, config: PathBuf) -> Cli {
        Cli {
            inputs: vec![dir.join("missing.xml")],
            output_path: Some(dir.join("out")),
            config: Some(config),
            verbose: false,
            man_only: false,
            markdown_only: false,
        }
    }

    #[test]
    fn test_execute_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_in(dir.path(), dir.path().join("absent.toml"));
        let err = cli.execute(&Reporter::new()).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn test_execute_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("resdoc.toml");
        std::fs::write(&config, "").unwrap();
        let cli = cli_in(dir.path(), config);
        let err = cli.execute(&Reporter::new()).unwrap_err();
        assert!(matches!(err, CliError::Model(_)));
        assert!(err.to_string().contains("missing.xml"));
        assert!(!dir.path().join("out").exists());
    }
}
