use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use futures::future::join_all;
use tracing::{info, warn};

use nb_core::{Article, ScrapeResult};

use crate::sources::{default_sources, NewsSource, SourceConfig};

/// Queries every registered source for a topic and merges the results.
///
/// A plain value: build one where needed, no process-wide instance.
pub struct SourceManager {
    sources: Vec<Box<dyn NewsSource>>,
}

impl SourceManager {
    pub fn new(sources: Vec<Box<dyn NewsSource>>) -> Self {
        Self { sources }
    }

    /// Manager over the default sources, credentials from the environment.
    pub fn from_env() -> Self {
        Self::new(default_sources(SourceConfig::from_env()))
    }

    pub fn add_source(&mut self, source: Box<dyn NewsSource>) {
        self.sources.push(source);
    }

    pub fn sources(&self) -> &[Box<dyn NewsSource>] {
        &self.sources
    }

    /// Fan out to all sources, then filter, dedup and sort the merged set.
    ///
    /// A source that fails or is rate-limited contributes nothing; the
    /// aggregation itself always produces a result. `hours`, when set,
    /// drops articles older than the cutoff.
    pub async fn scrape_topic(&self, topic: &str, hours: Option<i64>) -> ScrapeResult {
        let results = join_all(self.sources.iter().map(|s| s.fetch(topic))).await;

        let mut merged = Vec::new();
        for (source, result) in self.sources.iter().zip(results) {
            match result {
                Ok(mut articles) => {
                    info!("📰 {} returned {} articles", source.name(), articles.len());
                    merged.append(&mut articles);
                }
                Err(e) => warn!("{} failed, dropping this source: {}", source.name(), e),
            }
        }

        if let Some(hours) = hours {
            let cutoff = Utc::now() - Duration::hours(hours);
            merged.retain(|a| is_within_window(&a.published_at, cutoff));
        }

        let mut articles = dedup_by_title(merged);
        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        let sources_used = contributing_sources(&articles);

        ScrapeResult {
            topic: topic.to_string(),
            time_range: match hours {
                Some(h) => format!("Last {} hours", h),
                None => "No time limit - all available articles".to_string(),
            },
            total_articles: articles.len(),
            articles,
            sources_used,
            scraped_at: Utc::now(),
        }
    }
}

/// First occurrence of a case-insensitively identical title wins.
fn dedup_by_title(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for article in articles {
        if seen.insert(article.title.to_lowercase()) {
            unique.push(article);
        }
    }
    unique
}

/// Origin tags of surviving articles, in first-seen order.
fn contributing_sources(articles: &[Article]) -> Vec<String> {
    let mut seen = HashSet::new();
    articles
        .iter()
        .filter(|a| seen.insert(a.api_source.clone()))
        .map(|a| a.api_source.clone())
        .collect()
}

/// Timestamps that don't parse are kept; the window can't be applied to them.
fn is_within_window(published_at: &str, cutoff: DateTime<Utc>) -> bool {
    match DateTime::parse_from_rfc3339(published_at) {
        Ok(ts) => ts.with_timezone(&Utc) >= cutoff,
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nb_core::{Error, Result};

    struct StaticSource {
        name: &'static str,
        articles: Vec<Article>,
    }

    struct FailingSource;

    #[async_trait]
    impl NewsSource for StaticSource {
        fn name(&self) -> &'static str {
            self.name
        }

        fn is_configured(&self) -> bool {
            true
        }

        async fn fetch(&self, _topic: &str) -> Result<Vec<Article>> {
            Ok(self.articles.clone())
        }
    }

    #[async_trait]
    impl NewsSource for FailingSource {
        fn name(&self) -> &'static str {
            "Failing"
        }

        fn is_configured(&self) -> bool {
            true
        }

        async fn fetch(&self, _topic: &str) -> Result<Vec<Article>> {
            Err(Error::Source("connection reset".to_string()))
        }
    }

    fn article(title: &str, published_at: &str, api_source: &str) -> Article {
        Article {
            title: title.to_string(),
            description: String::new(),
            content: String::new(),
            url: String::new(),
            source: String::new(),
            published_at: published_at.to_string(),
            api_source: api_source.to_string(),
        }
    }

    #[tokio::test]
    async fn test_dedup_keeps_first_source_in_priority_order() {
        let manager = SourceManager::new(vec![
            Box::new(StaticSource {
                name: "NewsAPI",
                articles: vec![article("Senate Vote Scheduled", "2025-06-01T00:00:00Z", "NewsAPI")],
            }),
            Box::new(StaticSource {
                name: "GNews",
                articles: vec![article("SENATE VOTE SCHEDULED", "2025-06-02T00:00:00Z", "GNews")],
            }),
        ]);

        let result = manager.scrape_topic("senate", None).await;
        assert_eq!(result.total_articles, 1);
        assert_eq!(result.articles[0].api_source, "NewsAPI");
        assert_eq!(result.sources_used, vec!["NewsAPI".to_string()]);
    }

    #[tokio::test]
    async fn test_sort_is_descending_and_stable() {
        let manager = SourceManager::new(vec![Box::new(StaticSource {
            name: "NewsAPI",
            articles: vec![
                article("older", "2025-06-01T00:00:00Z", "NewsAPI"),
                article("newest", "2025-06-03T00:00:00Z", "NewsAPI"),
                article("tied first", "2025-06-02T00:00:00Z", "NewsAPI"),
                article("tied second", "2025-06-02T00:00:00Z", "NewsAPI"),
            ],
        })]);

        let result = manager.scrape_topic("anything", None).await;
        let titles: Vec<&str> = result.articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["newest", "tied first", "tied second", "older"]);
    }

    #[tokio::test]
    async fn test_failing_source_does_not_abort_aggregation() {
        let manager = SourceManager::new(vec![
            Box::new(FailingSource),
            Box::new(StaticSource {
                name: "GNews",
                articles: vec![article("Budget talks resume", "2025-06-01T00:00:00Z", "GNews")],
            }),
        ]);

        let result = manager.scrape_topic("budget", None).await;
        assert_eq!(result.total_articles, 1);
        assert_eq!(result.sources_used, vec!["GNews".to_string()]);
    }

    #[tokio::test]
    async fn test_hours_filter_drops_old_keeps_unparseable() {
        let recent = Utc::now().to_rfc3339();
        let manager = SourceManager::new(vec![Box::new(StaticSource {
            name: "NewsAPI",
            articles: vec![
                article("recent", &recent, "NewsAPI"),
                article("ancient", "2001-01-01T00:00:00Z", "NewsAPI"),
                article("undated", "not a timestamp", "NewsAPI"),
            ],
        })]);

        let result = manager.scrape_topic("anything", Some(24)).await;
        let titles: Vec<&str> = result.articles.iter().map(|a| a.title.as_str()).collect();
        assert!(titles.contains(&"recent"));
        assert!(titles.contains(&"undated"));
        assert!(!titles.contains(&"ancient"));
        assert_eq!(result.time_range, "Last 24 hours");
    }

    #[tokio::test]
    async fn test_empty_aggregation_is_a_valid_result() {
        let manager = SourceManager::new(vec![Box::new(FailingSource)]);

        let result = manager.scrape_topic("anything", None).await;
        assert_eq!(result.total_articles, 0);
        assert!(result.articles.is_empty());
        assert!(result.sources_used.is_empty());
        assert_eq!(result.time_range, "No time limit - all available articles");
    }

    #[tokio::test]
    async fn test_sources_used_in_first_seen_order() {
        let manager = SourceManager::new(vec![
            Box::new(StaticSource {
                name: "NewsAPI",
                articles: vec![
                    article("first", "2025-06-03T00:00:00Z", "NewsAPI"),
                    article("third", "2025-06-01T00:00:00Z", "NewsAPI"),
                ],
            }),
            Box::new(StaticSource {
                name: "MediaStack",
                articles: vec![article("second", "2025-06-02T00:00:00Z", "MediaStack")],
            }),
        ]);

        let result = manager.scrape_topic("anything", None).await;
        assert_eq!(
            result.sources_used,
            vec!["NewsAPI".to_string(), "MediaStack".to_string()]
        );
    }
}
