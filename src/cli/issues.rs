use std::path::PathBuf;

use clap::Parser;
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Print open issues derived from validation findings")]
pub struct Issues {
    /// Path to the document JSON; reads stdin when omitted
    file: Option<PathBuf>,
}

impl Issues {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        let document = super::load_document(self.file.as_deref())?;
        let result = document.validate();

        for issue in reqcheck::open_issues(&result) {
            println!("{issue}");
        }

        if !result.is_valid {
            std::process::exit(2);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::Issues;

    #[test]
    fn run_succeeds_when_only_warnings_remain() {
        // An empty categories array produces warnings at most, so `run`
        // returns instead of exiting.
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"categories": [], "nonFunctionalRequirements": []}"#)
            .unwrap();

        let issues = Issues {
            file: Some(file.path().to_path_buf()),
        };

        issues.run().expect("warning-only document should succeed");
    }
}
