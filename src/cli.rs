use std::{io::Read, path::Path};

use anyhow::Context;
use clap::ArgAction;
use reqcheck::Document;

mod issues;
mod terminal;
mod validate;

use issues::Issues;
use validate::Validate;

/// Reads a document from a file path, or from stdin when no path is given.
///
/// This is a CLI boundary function: I/O and JSON decoding failures are
/// command errors here, never validation findings.
fn load_document(path: Option<&Path>) -> anyhow::Result<Document> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read document from stdin")?;
            buffer
        }
    };

    Document::from_json(&text).context("failed to parse document")
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.run()
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Validate a requirements document
    Validate(Validate),

    /// Print open issues derived from validation findings
    ///
    /// Open issues are the formatted review items stored against a project
    /// record: errors first, then warnings.
    Issues(Issues),
}

impl Command {
    fn run(self) -> anyhow::Result<()> {
        match self {
            Self::Validate(command) => command.run(),
            Self::Issues(command) => command.run(),
        }
    }
}
