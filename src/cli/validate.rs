use std::path::PathBuf;

use clap::Parser;
use reqcheck::ValidationResult;
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Validate a requirements document")]
pub struct Validate {
    /// Path to the document JSON; reads stdin when omitted
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress all output except errors
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
    Summary,
}

impl Validate {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        let document = super::load_document(self.file.as_deref())?;
        let result = document.validate();

        match self.output {
            OutputFormat::Table => self.output_table(&result),
            OutputFormat::Json => Self::output_json(&result)?,
            OutputFormat::Summary => Self::output_summary(&result),
        }

        // Exit with a distinct code when the document must not proceed
        if !result.is_valid {
            std::process::exit(2);
        }

        Ok(())
    }

    fn output_table(&self, result: &ValidationResult) {
        if self.quiet {
            for error in &result.errors {
                eprintln!("{error}");
            }
            return;
        }

        println!("Validating requirements document...\n");

        if result.errors.is_empty() {
            println!("{}", "✓ Errors:    none".success());
        } else {
            println!(
                "{}",
                format!("✗ Errors:    {} found", result.errors.len()).error()
            );
            for error in &result.errors {
                println!("  • {error}");
            }
        }

        if result.warnings.is_empty() {
            println!("{}", "✓ Warnings:  none".success());
        } else {
            println!(
                "{}",
                format!("! Warnings:  {} found", result.warnings.len()).warning()
            );
            for warning in &result.warnings {
                println!("  • {warning}");
            }
        }

        println!();
        if result.is_valid {
            println!("{}", "Document is ready for estimation".success());
        } else {
            println!(
                "{}",
                format!("Summary: {} blocking issues found", result.errors.len()).warning()
            );
            println!(
                "{}",
                "Run 'reqcheck issues' to get review items for the project record".dim()
            );
        }
    }

    fn output_json(result: &ValidationResult) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(result)?);
        Ok(())
    }

    fn output_summary(result: &ValidationResult) {
        println!(
            "errors={} warnings={}",
            result.errors.len(),
            result.warnings.len()
        );
    }
}
