use std::path::PathBuf;

use crate::error::Result;
use crate::export;
use crate::github::GitHubClient;
use crate::models::{IssueRecord, ProjectEntry};
use crate::projects::split_repo_url;
use crate::transform::transform;

#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// Issue state requested from the API (open, closed, all).
    pub state: String,
    pub output_dir: PathBuf,
    pub aggregate_file: String,
}

/// Runs the collection end to end: one project at a time, in input order,
/// each page awaited before the next request starts.
pub struct Collector {
    github: GitHubClient,
    config: CollectorConfig,
}

impl Collector {
    pub fn new(github: GitHubClient, config: CollectorConfig) -> Self {
        Self { github, config }
    }

    pub async fn run(&self, projects: &[ProjectEntry]) -> Result<()> {
        let mut all_records: Vec<IssueRecord> = Vec::new();

        for project in projects {
            let (owner, repo) = split_repo_url(&project.github_url)?;
            tracing::info!("Collecting issues for {}/{}...", owner, repo);

            let issues = self
                .github
                .fetch_all_issues(&owner, &repo, &self.config.state, None)
                .await?;

            let mut project_records = Vec::new();
            for issue in &issues {
                if let Some(record) = transform(issue, &project.project_name, &project.framework)? {
                    project_records.push(record);
                }
            }

            tracing::info!(
                "{}: {} of {} issues matched the target labels",
                project.project_name,
                project_records.len(),
                issues.len()
            );

            // A project with no matching issues produces no per-project file.
            if !project_records.is_empty() {
                let path =
                    export::project_csv_path(&self.config.output_dir, &project.project_name);
                export::write_records(&path, &project_records)?;
                tracing::info!("Wrote {}", path.display());
            }

            all_records.extend(project_records);
        }

        let aggregate_path = self.config.output_dir.join(&self.config.aggregate_file);
        export::write_records(&aggregate_path, &all_records)?;
        tracing::info!(
            "Issue collection complete. Data saved to {}",
            aggregate_path.display()
        );

        Ok(())
    }
}
