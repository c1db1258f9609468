use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::Result;

pub struct Paginator<'a> {
    client: &'a Client,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches every page starting at `first_url`, accumulating all items.
    ///
    /// The query parameters are only sent with the first request; once the
    /// `Link` header hands back a `rel="next"` URL, that URL is used verbatim
    /// because it already encodes them. Fetching stops when a page has no
    /// next link or an empty body.
    ///
    /// A non-success status stops pagination and returns whatever was
    /// accumulated so far, so a failing repository does not abort the whole
    /// run. Transport errors still propagate.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        first_url: &str,
        query: Vec<(String, String)>,
    ) -> Result<Vec<T>> {
        let mut all_items = Vec::new();
        let mut url = first_url.to_string();
        let mut query = query;

        loop {
            tracing::debug!("Fetching: {}", url);
            let response = self.client.get(&url).query(&query).send().await?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                tracing::error!("Error fetching {}: {} - {}", url, status, body);
                break;
            }

            let next = response
                .headers()
                .get("link")
                .and_then(|v| v.to_str().ok())
                .and_then(next_link_url);

            let items: Vec<T> = response.json().await?;
            if items.is_empty() {
                break;
            }
            all_items.extend(items);

            match next {
                Some(next_url) => {
                    url = next_url;
                    query.clear();
                }
                None => break,
            }
        }

        Ok(all_items)
    }
}

/// Extracts the `rel="next"` URL from an RFC-5988-style `Link` header value,
/// e.g. `<https://api.github.com/...?page=2>; rel="next", <...>; rel="last"`.
pub fn next_link_url(header: &str) -> Option<String> {
    header
        .split(", ")
        .find(|entry| entry.contains("rel=\"next\""))
        .and_then(|entry| entry.split(';').next())
        .map(|url| url.trim().trim_start_matches('<').trim_end_matches('>').to_string())
}
