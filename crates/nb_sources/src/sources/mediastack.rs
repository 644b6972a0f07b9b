use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, warn};

use nb_core::{Article, Result};

use super::NewsSource;

const API_SOURCE: &str = "MediaStack";

/// Client for the MediaStack live-news endpoint.
///
/// MediaStack reports source names as plain strings and never includes
/// article bodies, so `content` is always empty.
pub struct MediaStackSource {
    api_key: Option<String>,
    client: reqwest::Client,
}

impl MediaStackSource {
    const ENDPOINT: &'static str = "http://api.mediastack.com/v1/news";

    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Value>,
}

#[derive(Deserialize, Default)]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    source: Option<String>,
    published_at: Option<String>,
}

fn parse_articles(items: Vec<Value>) -> Vec<Article> {
    let mut articles = Vec::new();
    for item in items {
        match serde_json::from_value::<RawArticle>(item) {
            Ok(raw) => articles.push(Article {
                title: raw.title.unwrap_or_default(),
                description: raw.description.unwrap_or_default(),
                content: String::new(),
                url: raw.url.unwrap_or_default(),
                source: raw.source.unwrap_or_default(),
                published_at: raw.published_at.unwrap_or_default(),
                api_source: API_SOURCE.to_string(),
            }),
            Err(e) => warn!("MediaStack: skipping article due to parsing error: {}", e),
        }
    }
    articles
}

#[async_trait]
impl NewsSource for MediaStackSource {
    fn name(&self) -> &'static str {
        API_SOURCE
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch(&self, topic: &str) -> Result<Vec<Article>> {
        let api_key = match self.api_key.as_deref() {
            Some(key) => key,
            None => {
                warn!("MEDIASTACK_API_KEY not set, skipping MediaStack");
                return Ok(Vec::new());
            }
        };

        let response = self
            .client
            .get(Self::ENDPOINT)
            .query(&[
                ("access_key", api_key),
                ("keywords", topic),
                ("languages", "en"),
                ("countries", "us"),
                ("limit", "20"),
                ("sort", "published_desc"),
            ])
            .timeout(Duration::from_secs(10))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("MediaStack rate limit reached, skipping this source");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            error!("MediaStack error {}", status);
            return Ok(Vec::new());
        }

        let body: SearchResponse = response.json().await?;
        Ok(parse_articles(body.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_articles_normalizes_fields() {
        let body: SearchResponse = serde_json::from_str(
            r#"{
                "pagination": {"limit": 20, "offset": 0},
                "data": [{
                    "title": "Committee hearing recap",
                    "description": "A description",
                    "url": "https://example.com/c",
                    "source": "hillreporter",
                    "published_at": "2025-06-03T17:45:00+00:00"
                }]
            }"#,
        )
        .unwrap();

        let articles = parse_articles(body.data);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].source, "hillreporter");
        assert_eq!(articles[0].published_at, "2025-06-03T17:45:00+00:00");
        assert_eq!(articles[0].api_source, "MediaStack");
    }

    #[test]
    fn test_content_is_always_empty() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"data": [{"title": "No body provided", "content": "ignored"}]}"#,
        )
        .unwrap();

        let articles = parse_articles(body.data);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].content, "");
    }
}
