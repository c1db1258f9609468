use std::path::Path;

use crate::error::{Error, Result};
use crate::models::ProjectEntry;

/// Reads the project list CSV. Columns: project_name, github_url, framework.
/// A missing or malformed file is fatal; there is no partial-read recovery.
pub fn read_projects(path: &Path) -> Result<Vec<ProjectEntry>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut projects = Vec::new();
    for row in reader.deserialize() {
        projects.push(row?);
    }
    Ok(projects)
}

/// Extracts (owner, repo) from the last two path segments of a GitHub URL.
pub fn split_repo_url(github_url: &str) -> Result<(String, String)> {
    let mut parts = github_url.trim_end_matches('/').rsplit('/');
    let repo = parts.next().filter(|s| !s.is_empty());
    let owner = parts.next().filter(|s| !s.is_empty());

    match (owner, repo) {
        (Some(owner), Some(repo)) => Ok((owner.to_string(), repo.to_string())),
        _ => Err(Error::RepoUrl(github_url.to_string())),
    }
}
