use reqwest::{header, Client};

use crate::error::Result;
use crate::github::paginator::Paginator;
use crate::models::RawIssue;

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("token {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("issuecollector/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: "https://api.github.com".to_string(),
        })
    }

    /// Fetches every issue of the repository in the requested state,
    /// following pagination until exhausted.
    ///
    /// `labels` narrows the request server-side when given; the collector
    /// currently always passes `None` and filters client-side instead.
    pub async fn fetch_all_issues(
        &self,
        owner: &str,
        repo: &str,
        state: &str,
        labels: Option<&[String]>,
    ) -> Result<Vec<RawIssue>> {
        let url = format!("{}/repos/{}/{}/issues", self.base_url, owner, repo);

        let mut query = vec![
            ("state".to_string(), state.to_string()),
            ("per_page".to_string(), "100".to_string()),
        ];
        if let Some(labels) = labels {
            query.push(("labels".to_string(), labels.join(",")));
        }

        let paginator = Paginator::new(&self.client);
        tracing::debug!("Fetching issues for {}/{}", owner, repo);
        paginator.fetch_all(&url, query).await
    }
}
