use chrono::NaiveDateTime;

use crate::error::Result;
use crate::models::{IssueRecord, IssueType, RawIssue};

/// Labels that make an issue eligible for export, in classification
/// priority order.
pub const TARGET_LABELS: [&str; 3] = ["bug", "security", "performance"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Projects one raw issue into an export record, or `None` when none of the
/// target labels is present.
///
/// Timestamps must match `YYYY-MM-DDTHH:MM:SSZ` exactly; a mismatch is a
/// fatal parse error with no fallback format.
pub fn transform(
    issue: &RawIssue,
    project_name: &str,
    framework: &str,
) -> Result<Option<IssueRecord>> {
    let label_names: Vec<&str> = issue.labels.iter().map(|l| l.name.as_str()).collect();

    if !TARGET_LABELS.iter().any(|t| label_names.contains(t)) {
        return Ok(None);
    }

    let time_to_close_days = match (&issue.created_at, &issue.closed_at) {
        (Some(created), Some(closed)) => Some(days_between(created, closed)?),
        _ => None,
    };

    Ok(Some(IssueRecord {
        project_name: project_name.to_string(),
        framework: framework.to_string(),
        issue_id: issue.number,
        issue_title: issue.title.clone(),
        issue_type: classify(&label_names),
        state: issue.state.clone(),
        created_at: issue.created_at.clone(),
        closed_at: issue.closed_at.clone(),
        time_to_close_days,
        labels: label_names.join(", "),
        comments: issue.comments,
        url: issue.html_url.clone(),
    }))
}

/// First match in priority order bug > security > performance. The `Other`
/// fallthrough is unreachable while the target-label filter runs first; it
/// stays because removing it would change behavior if the filter is loosened.
fn classify(labels: &[&str]) -> IssueType {
    if labels.contains(&"bug") {
        IssueType::Bug
    } else if labels.contains(&"security") {
        IssueType::Security
    } else if labels.contains(&"performance") {
        IssueType::Performance
    } else {
        IssueType::Other
    }
}

fn days_between(created: &str, closed: &str) -> Result<f64> {
    let created = NaiveDateTime::parse_from_str(created, TIMESTAMP_FORMAT)?.and_utc();
    let closed = NaiveDateTime::parse_from_str(closed, TIMESTAMP_FORMAT)?.and_utc();
    Ok((closed - created).num_seconds() as f64 / SECONDS_PER_DAY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IssueLabel;

    fn issue(labels: &[&str], created: Option<&str>, closed: Option<&str>) -> RawIssue {
        RawIssue {
            number: 42,
            title: "flaky shutdown".to_string(),
            state: "closed".to_string(),
            created_at: created.map(String::from),
            closed_at: closed.map(String::from),
            comments: 3,
            html_url: "https://github.com/o/r/issues/42".to_string(),
            labels: labels
                .iter()
                .map(|name| IssueLabel {
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_skips_issue_without_target_label() {
        let issue = issue(&["enhancement", "help wanted"], None, None);
        assert!(transform(&issue, "proj", "fw").unwrap().is_none());
    }

    #[test]
    fn test_skips_issue_without_labels() {
        let issue = issue(&[], None, None);
        assert!(transform(&issue, "proj", "fw").unwrap().is_none());
    }

    #[test]
    fn test_classification_priority() {
        let issue = issue(&["performance", "security", "bug"], None, None);
        let record = transform(&issue, "proj", "fw").unwrap().unwrap();
        assert_eq!(record.issue_type, IssueType::Bug);

        let issue = self::issue(&["performance", "security"], None, None);
        let record = transform(&issue, "proj", "fw").unwrap().unwrap();
        assert_eq!(record.issue_type, IssueType::Security);

        let issue = self::issue(&["wontfix", "performance"], None, None);
        let record = transform(&issue, "proj", "fw").unwrap().unwrap();
        assert_eq!(record.issue_type, IssueType::Performance);
    }

    #[test]
    fn test_time_to_close_fractional_days() {
        let issue = issue(
            &["bug"],
            Some("2024-01-01T00:00:00Z"),
            Some("2024-01-02T12:00:00Z"),
        );
        let record = transform(&issue, "proj", "fw").unwrap().unwrap();
        assert_eq!(record.time_to_close_days, Some(1.5));
    }

    #[test]
    fn test_open_issue_has_no_close_latency() {
        let issue = issue(&["bug"], Some("2024-01-01T00:00:00Z"), None);
        let record = transform(&issue, "proj", "fw").unwrap().unwrap();
        assert_eq!(record.time_to_close_days, None);
        assert_eq!(record.closed_at, None);
    }

    #[test]
    fn test_malformed_timestamp_is_fatal() {
        // Fractional seconds are not part of the expected format.
        let issue = issue(
            &["bug"],
            Some("2024-01-01T00:00:00.000Z"),
            Some("2024-01-02T00:00:00Z"),
        );
        assert!(transform(&issue, "proj", "fw").is_err());
    }

    #[test]
    fn test_labels_joined_in_api_order() {
        let issue = issue(
            &["regression", "bug", "performance"],
            Some("2024-03-01T08:00:00Z"),
            Some("2024-03-03T08:00:00Z"),
        );
        let record = transform(&issue, "Actix Web", "web").unwrap().unwrap();
        assert_eq!(record.labels, "regression, bug, performance");
        assert_eq!(record.project_name, "Actix Web");
        assert_eq!(record.framework, "web");
        assert_eq!(record.time_to_close_days, Some(2.0));
    }
}
