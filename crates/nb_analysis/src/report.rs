use std::collections::HashMap;

use nb_core::Article;

use crate::analyzer::{round2, BiasAnalyzer};
use crate::types::{
    AnalysisSummary, ArticleAnalysis, BiasCategory, BiasDistribution, BiasReport,
    IndicatorFrequency,
};

impl BiasAnalyzer {
    /// Analyze every article in the batch and aggregate the results.
    pub fn analyze_batch(&self, articles: &[Article]) -> BiasReport {
        let individual_analyses: Vec<ArticleAnalysis> =
            articles.iter().map(|a| self.analyze_article(a)).collect();

        let mut bias_distribution = BiasDistribution::default();
        for analysis in &individual_analyses {
            match analysis.bias_category {
                BiasCategory::LowBias => bias_distribution.low_bias += 1,
                BiasCategory::ModerateBias => bias_distribution.moderate_bias += 1,
                BiasCategory::HighBias => bias_distribution.high_bias += 1,
                BiasCategory::VeryHighBias => bias_distribution.very_high_bias += 1,
            }
        }

        let total = individual_analyses.len();
        let average = if total == 0 {
            0.0
        } else {
            individual_analyses
                .iter()
                .map(|a| a.overall_bias_score)
                .sum::<f64>()
                / total as f64
        };

        let mut overall_recommendations = Vec::new();
        if average < 0.6 {
            overall_recommendations
                .push("Overall coverage shows bias - seek diverse sources".to_string());
        }
        let biased = bias_distribution.high_bias + bias_distribution.very_high_bias;
        if biased as f64 > total as f64 * 0.5 {
            overall_recommendations
                .push("Majority of articles show bias - verify information".to_string());
        }
        if bias_distribution.low_bias as f64 > total as f64 * 0.7 {
            overall_recommendations
                .push("Most articles appear credible and balanced".to_string());
        }

        let analysis_summary = AnalysisSummary {
            most_credible_sources: individual_analyses
                .iter()
                .filter(|a| a.overall_bias_score >= 0.8)
                .map(|a| a.source.clone())
                .collect(),
            least_credible_sources: individual_analyses
                .iter()
                .filter(|a| a.overall_bias_score < 0.4)
                .map(|a| a.source.clone())
                .collect(),
            common_bias_indicators: common_indicators(&individual_analyses),
        };

        BiasReport {
            total_articles_analyzed: total,
            average_bias_score: round2(average),
            bias_distribution,
            overall_recommendations,
            individual_analyses,
            analysis_summary,
        }
    }
}

/// Top ten "{category}: {term}" indicators across the batch, by descending
/// frequency; ties keep first-seen order.
fn common_indicators(analyses: &[ArticleAnalysis]) -> Vec<IndicatorFrequency> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for analysis in analyses {
        let groups: [(&str, &Vec<String>); 7] = [
            ("left_wing_terms", &analysis.bias_indicators.left_wing_terms),
            ("right_wing_terms", &analysis.bias_indicators.right_wing_terms),
            ("emotional_terms", &analysis.bias_indicators.emotional_terms),
            ("partisan_terms", &analysis.bias_indicators.partisan_terms),
            ("loaded_language", &analysis.bias_indicators.loaded_language),
            ("factual_claims", &analysis.bias_indicators.factual_claims),
            ("opinion_indicators", &analysis.bias_indicators.opinion_indicators),
        ];
        for (category, terms) in groups {
            for term in terms {
                let key = format!("{}: {}", category, term);
                let count = counts.entry(key.clone()).or_insert(0);
                if *count == 0 {
                    order.push(key);
                }
                *count += 1;
            }
        }
    }

    let mut ranked: Vec<IndicatorFrequency> = order
        .into_iter()
        .map(|indicator| {
            let count = counts[&indicator];
            IndicatorFrequency { indicator, count }
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(10);
    ranked
}
