use serde::{Deserialize, Serialize};

/// The subset of the GitHub issue payload this tool consumes.
///
/// Timestamps stay as strings here; they are parsed with a strict format
/// during transformation rather than at deserialize time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawIssue {
    pub number: u64,
    pub title: String,
    pub state: String,
    pub created_at: Option<String>,
    pub closed_at: Option<String>,
    pub comments: u64,
    pub html_url: String,
    #[serde(default)]
    pub labels: Vec<IssueLabel>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueLabel {
    pub name: String,
}
