use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, warn};

use nb_core::{Article, Result};

use super::NewsSource;

const API_SOURCE: &str = "NewsAPI";

/// Client for the NewsAPI.org `everything` search endpoint.
pub struct NewsApiSource {
    api_key: Option<String>,
    client: reqwest::Client,
}

impl NewsApiSource {
    const ENDPOINT: &'static str = "https://newsapi.org/v2/everything";

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
    articles: Vec<Value>,
}

#[derive(Deserialize, Default)]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    url: Option<String>,
    source: Option<RawSource>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Deserialize, Default)]
struct RawSource {
    name: Option<String>,
}

fn parse_articles(items: Vec<Value>) -> Vec<Article> {
    let mut articles = Vec::new();
    for item in items {
        match serde_json::from_value::<RawArticle>(item) {
            Ok(raw) => articles.push(Article {
                title: raw.title.unwrap_or_default(),
                description: raw.description.unwrap_or_default(),
                content: raw.content.unwrap_or_default(),
                url: raw.url.unwrap_or_default(),
                source: raw.source.unwrap_or_default().name.unwrap_or_default(),
                published_at: raw.published_at.unwrap_or_default(),
                api_source: API_SOURCE.to_string(),
            }),
            Err(e) => warn!("NewsAPI: skipping article due to parsing error: {}", e),
        }
    }
    articles
}

#[async_trait]
impl NewsSource for NewsApiSource {
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
                warn!("NEWSAPI_KEY not set, skipping NewsAPI");
                return Ok(Vec::new());
            }
        };

        let response = self
            .client
            .get(Self::ENDPOINT)
            .query(&[
                ("q", topic),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", "20"),
                ("apiKey", api_key),
            ])
            .timeout(Duration::from_secs(10))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("NewsAPI rate limit reached, skipping this source");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            error!("NewsAPI error {}", status);
            return Ok(Vec::new());
        }

        let body: SearchResponse = response.json().await?;
        Ok(parse_articles(body.articles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_articles_normalizes_fields() {
        let body: SearchResponse = serde_json::from_str(
            r#"{
                "status": "ok",
                "totalResults": 1,
                "articles": [{
                    "source": {"id": "reuters", "name": "Reuters"},
                    "title": "Senate vote scheduled",
                    "description": "A description",
                    "content": "Full content",
                    "url": "https://example.com/a",
                    "publishedAt": "2025-06-01T12:00:00Z"
                }]
            }"#,
        )
        .unwrap();

        let articles = parse_articles(body.articles);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].source, "Reuters");
        assert_eq!(articles[0].published_at, "2025-06-01T12:00:00Z");
        assert_eq!(articles[0].api_source, "NewsAPI");
    }

    #[test]
    fn test_parse_articles_defaults_missing_and_null_fields() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"articles": [{"title": "Only a title", "content": null}]}"#,
        )
        .unwrap();

        let articles = parse_articles(body.articles);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Only a title");
        assert_eq!(articles[0].content, "");
        assert_eq!(articles[0].source, "");
    }

    #[test]
    fn test_parse_articles_skips_malformed_entries() {
        let items = vec![
            serde_json::json!("not an object"),
            serde_json::json!({"title": "Survives"}),
        ];

        let articles = parse_articles(items);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Survives");
    }

    #[tokio::test]
    async fn test_unconfigured_source_yields_nothing() {
        let source = NewsApiSource::new(None);
        assert!(!source.is_configured());
        let articles = source.fetch("election").await.unwrap();
        assert!(articles.is_empty());
    }
}
