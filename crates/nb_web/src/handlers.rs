use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use nb_analysis::BiasReport;
use nb_core::{Article, ScrapeResult};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TopicQuery {
    pub topic: String,
    pub hours: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct TopicAnalysis {
    pub scrape: ScrapeResult,
    pub report: BiasReport,
}

pub async fn scrape_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TopicQuery>,
) -> Json<ScrapeResult> {
    Json(state.manager.scrape_topic(&query.topic, query.hours).await)
}

pub async fn analyze_topic(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TopicQuery>,
) -> Json<TopicAnalysis> {
    let scrape = state.manager.scrape_topic(&query.topic, query.hours).await;
    let report = state.analyzer.analyze_batch(&scrape.articles);
    Json(TopicAnalysis { scrape, report })
}

pub async fn analyze_articles(
    State(state): State<Arc<AppState>>,
    Json(articles): Json<Vec<Article>>,
) -> Json<BiasReport> {
    Json(state.analyzer.analyze_batch(&articles))
}
