use async_trait::async_trait;
use nb_core::{Article, Result};

pub mod gnews;
pub mod mediastack;
pub mod newsapi;

pub use gnews::GNewsSource;
pub use mediastack::MediaStackSource;
pub use newsapi::NewsApiSource;

/// A news search API queried by topic.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Origin tag recorded on every article this source produces.
    fn name(&self) -> &'static str;

    /// Whether credentials for this source are present.
    fn is_configured(&self) -> bool;

    /// Fetch articles matching the topic, normalized into [`Article`].
    ///
    /// An unconfigured or rate-limited source returns an empty list rather
    /// than an error.
    async fn fetch(&self, topic: &str) -> Result<Vec<Article>>;
}

/// Credentials for the registered sources, read from the environment.
#[derive(Debug, Clone, Default)]
pub struct SourceConfig {
    pub newsapi_key: Option<String>,
    pub gnews_key: Option<String>,
    pub mediastack_key: Option<String>,
}

impl SourceConfig {
    pub fn from_env() -> Self {
        Self {
            newsapi_key: std::env::var("NEWSAPI_KEY").ok(),
            gnews_key: std::env::var("GNEWS_API_KEY").ok(),
            mediastack_key: std::env::var("MEDIASTACK_API_KEY").ok(),
        }
    }
}

/// All known sources, in merge-priority order: when two sources return the
/// same title, the earlier source here wins.
pub fn default_sources(config: SourceConfig) -> Vec<Box<dyn NewsSource>> {
    vec![
        Box::new(NewsApiSource::new(config.newsapi_key)),
        Box::new(GNewsSource::new(config.gnews_key)),
        Box::new(MediaStackSource::new(config.mediastack_key)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sources_order() {
        let sources = default_sources(SourceConfig::default());
        let names: Vec<&str> = sources.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["NewsAPI", "GNews", "MediaStack"]);
        assert!(sources.iter().all(|s| !s.is_configured()));
    }
}
