use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized news item as returned by one of the search APIs.
///
/// `published_at` is the provider-reported timestamp string. Providers all
/// emit ISO-8601, so ordering compares the raw strings instead of parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub source: String,
    #[serde(rename = "publishedAt", default)]
    pub published_at: String,
    #[serde(default)]
    pub api_source: String,
}

/// The merged, deduplicated result of querying all sources for a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub topic: String,
    pub time_range: String,
    pub total_articles: usize,
    pub articles: Vec<Article>,
    pub sources_used: Vec<String>,
    pub scraped_at: DateTime<Utc>,
}
