use serde::Serialize;

/// Column order of every exported CSV. `IssueRecord`'s field order must
/// stay in sync with this list.
pub const CSV_COLUMNS: [&str; 12] = [
    "project_name",
    "framework",
    "issue_id",
    "issue_title",
    "issue_type",
    "state",
    "created_at",
    "closed_at",
    "time_to_close_days",
    "labels",
    "comments",
    "url",
];

/// A filtered issue projected into one flat export row.
#[derive(Debug, Clone, Serialize)]
pub struct IssueRecord {
    pub project_name: String,
    pub framework: String,
    pub issue_id: u64,
    pub issue_title: String,
    pub issue_type: IssueType,
    pub state: String,
    pub created_at: Option<String>,
    pub closed_at: Option<String>,
    pub time_to_close_days: Option<f64>,
    /// Comma-joined label names, in API order.
    pub labels: String,
    pub comments: u64,
    pub url: String,
}

/// Primary category of an issue, assigned by first match in priority order
/// bug > security > performance.
///
/// `Other` and `NotApplicable` cannot currently be produced: the label
/// filter runs before classification, so at least one of the three target
/// labels is always present. Both variants are kept intentionally — dropping
/// them would change behavior if the filter is ever loosened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IssueType {
    #[serde(rename = "bug")]
    Bug,
    #[serde(rename = "security")]
    Security,
    #[serde(rename = "performance")]
    Performance,
    #[serde(rename = "other")]
    Other,
    #[serde(rename = "N/A")]
    NotApplicable,
}
