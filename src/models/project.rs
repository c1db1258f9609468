use serde::Deserialize;

/// One row of the `projects.csv` input.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEntry {
    pub project_name: String,
    pub github_url: String,
    pub framework: String,
}
