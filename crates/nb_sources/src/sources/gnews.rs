use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, warn};

use nb_core::{Article, Result};

use super::NewsSource;

const API_SOURCE: &str = "GNews";

/// Client for the GNews search endpoint.
pub struct GNewsSource {
    api_key: Option<String>,
    client: reqwest::Client,
}

impl GNewsSource {
    const ENDPOINT: &'static str = "https://gnews.io/api/v4/search";

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
            Err(e) => warn!("GNews: skipping article due to parsing error: {}", e),
        }
    }
    articles
}

#[async_trait]
impl NewsSource for GNewsSource {
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
                warn!("GNEWS_API_KEY not set, skipping GNews");
                return Ok(Vec::new());
            }
        };

        let response = self
            .client
            .get(Self::ENDPOINT)
            .query(&[
                ("q", topic),
                ("lang", "en"),
                ("country", "us"),
                ("max", "20"),
                ("apikey", api_key),
            ])
            .timeout(Duration::from_secs(10))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("GNews rate limit reached, skipping this source");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            error!("GNews error {}", status);
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
                "totalArticles": 1,
                "articles": [{
                    "title": "Budget talks resume",
                    "description": "A description",
                    "content": "Full content",
                    "url": "https://example.com/b",
                    "publishedAt": "2025-06-02T08:30:00Z",
                    "source": {"name": "BBC News", "url": "https://bbc.co.uk"}
                }]
            }"#,
        )
        .unwrap();

        let articles = parse_articles(body.articles);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].source, "BBC News");
        assert_eq!(articles[0].api_source, "GNews");
    }

    #[test]
    fn test_parse_articles_tolerates_missing_source() {
        let body: SearchResponse =
            serde_json::from_str(r#"{"articles": [{"title": "No source"}]}"#).unwrap();

        let articles = parse_articles(body.articles);
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].source, "");
    }
}
