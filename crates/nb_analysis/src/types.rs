use serde::{Deserialize, Serialize};
use std::fmt;

/// The literal vocabulary terms and pattern matches found in one article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasIndicators {
    pub left_wing_terms: Vec<String>,
    pub right_wing_terms: Vec<String>,
    pub emotional_terms: Vec<String>,
    pub partisan_terms: Vec<String>,
    pub loaded_language: Vec<String>,
    pub factual_claims: Vec<String>,
    pub opinion_indicators: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredibilityLevel {
    High,
    Medium,
    Low,
    Unknown,
}

impl CredibilityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            CredibilityLevel::High => "high",
            CredibilityLevel::Medium => "medium",
            CredibilityLevel::Low => "low",
            CredibilityLevel::Unknown => "unknown",
        }
    }
}

/// Tier assignment for a source name, with the base score the composite
/// calculation starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredibilityAssessment {
    pub level: CredibilityLevel,
    pub score: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasCategory {
    #[serde(rename = "Low Bias - Highly Credible")]
    LowBias,
    #[serde(rename = "Moderate Bias - Generally Reliable")]
    ModerateBias,
    #[serde(rename = "High Bias - Exercise Caution")]
    HighBias,
    #[serde(rename = "Very High Bias - Questionable Reliability")]
    VeryHighBias,
}

impl BiasCategory {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            BiasCategory::LowBias
        } else if score >= 0.6 {
            BiasCategory::ModerateBias
        } else if score >= 0.4 {
            BiasCategory::HighBias
        } else {
            BiasCategory::VeryHighBias
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BiasCategory::LowBias => "Low Bias - Highly Credible",
            BiasCategory::ModerateBias => "Moderate Bias - Generally Reliable",
            BiasCategory::HighBias => "High Bias - Exercise Caution",
            BiasCategory::VeryHighBias => "Very High Bias - Questionable Reliability",
        }
    }
}

impl fmt::Display for BiasCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full assessment of a single article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleAnalysis {
    pub article_title: String,
    pub source: String,
    pub bias_indicators: BiasIndicators,
    pub credibility: CredibilityAssessment,
    pub emotional_score: f64,
    pub partisan_score: f64,
    pub overall_bias_score: f64,
    pub bias_category: BiasCategory,
    pub recommendations: Vec<String>,
}

/// Article counts per bias category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiasDistribution {
    #[serde(rename = "Low Bias")]
    pub low_bias: usize,
    #[serde(rename = "Moderate Bias")]
    pub moderate_bias: usize,
    #[serde(rename = "High Bias")]
    pub high_bias: usize,
    #[serde(rename = "Very High Bias")]
    pub very_high_bias: usize,
}

/// How often one "{category}: {term}" indicator appeared across a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorFrequency {
    pub indicator: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    /// Sources of articles scoring at least 0.8, one entry per article.
    pub most_credible_sources: Vec<String>,
    /// Sources of articles scoring below 0.4, one entry per article.
    pub least_credible_sources: Vec<String>,
    /// Top ten indicators by frequency, ties in first-seen order.
    pub common_bias_indicators: Vec<IndicatorFrequency>,
}

/// Aggregate assessment over a batch of articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasReport {
    pub total_articles_analyzed: usize,
    pub average_bias_score: f64,
    pub bias_distribution: BiasDistribution,
    pub overall_recommendations: Vec<String>,
    pub individual_analyses: Vec<ArticleAnalysis>,
    pub analysis_summary: AnalysisSummary,
}
