pub mod analyzer;
pub mod report;
pub mod types;
pub mod vocabulary;

pub use analyzer::BiasAnalyzer;
pub use types::{
    AnalysisSummary, ArticleAnalysis, BiasCategory, BiasDistribution, BiasIndicators, BiasReport,
    CredibilityAssessment, CredibilityLevel, IndicatorFrequency,
};

#[cfg(test)]
mod tests {
    use super::*;
    use nb_core::Article;

    #[test]
    fn test_report_serializes_with_public_labels() {
        let article = Article {
            title: "Senate vote scheduled".to_string(),
            description: String::new(),
            content: String::new(),
            url: String::new(),
            source: "Reuters".to_string(),
            published_at: String::new(),
            api_source: "NewsAPI".to_string(),
        };

        let report = BiasAnalyzer::new().analyze_batch(&[article]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["bias_distribution"]["Low Bias"], 1);
        assert_eq!(json["bias_distribution"]["Very High Bias"], 0);
        assert_eq!(
            json["individual_analyses"][0]["bias_category"],
            "Low Bias - Highly Credible"
        );
        assert_eq!(json["individual_analyses"][0]["credibility"]["level"], "high");
    }
}
