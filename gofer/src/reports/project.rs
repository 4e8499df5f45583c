//! Project command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from project scaffolding.
#[derive(Debug)]
pub struct ProjectReport {
    /// Project folder name.
    pub project: String,
    /// Files where the placeholder was replaced.
    pub updated: Vec<PathBuf>,
    /// Whether `.env` was created from the example file.
    pub env_promoted: bool,
}

impl Report for ProjectReport {
    fn render(&self, out: &mut dyn Output) {
        let rows: Vec<Vec<String>> = self
            .updated
            .iter()
            .enumerate()
            .map(|(i, path)| {
                vec![
                    (i + 1).to_string(),
                    path.display().to_string(),
                    "\u{2714}".to_string(),
                ]
            })
            .collect();
        out.table(&["#", "File", "Updated"], &rows);

        if self.env_promoted {
            out.newline();
            out.added_item(&format!("{}/.env", self.project));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::RecordingOutput;

    #[test]
    fn test_updated_files_table() {
        let report = ProjectReport {
            project: "go-casino".to_string(),
            updated: vec![PathBuf::from("go-casino/go.mod")],
            env_promoted: true,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "# | File | Updated",
                "1 | go-casino/go.mod | \u{2714}",
                "",
                "+ go-casino/.env",
            ]
        );
    }
}
