use nb_core::Article;

use crate::types::{
    ArticleAnalysis, BiasCategory, BiasIndicators, CredibilityAssessment, CredibilityLevel,
};
use crate::vocabulary as vocab;

/// Scores articles for bias and source credibility.
///
/// Pure computation over already-fetched data: no I/O, deterministic for a
/// given input. Construct one and pass it where needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BiasAnalyzer;

impl BiasAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze_article(&self, article: &Article) -> ArticleAnalysis {
        let text = full_text(article);

        let bias_indicators = detect_indicators(&text);
        let credibility = assess_credibility(&article.source);
        let emotional_score = emotional_language_score(&text);
        let partisan_score = partisan_language_score(&text);
        let overall_bias_score =
            composite_score(&bias_indicators, &credibility, emotional_score, partisan_score);

        ArticleAnalysis {
            article_title: article.title.clone(),
            source: article.source.clone(),
            recommendations: recommendations(&bias_indicators, &credibility, overall_bias_score),
            bias_category: BiasCategory::from_score(overall_bias_score),
            bias_indicators,
            credibility,
            emotional_score,
            partisan_score,
            overall_bias_score,
        }
    }
}

/// Lower-cased title, description and content joined into one blob.
fn full_text(article: &Article) -> String {
    format!(
        "{} {} {}",
        article.title.to_lowercase(),
        article.description.to_lowercase(),
        article.content.to_lowercase()
    )
}

fn detect_indicators(text: &str) -> BiasIndicators {
    let mut indicators = BiasIndicators::default();

    // Vocabulary entries count once per article, however often they repeat.
    record_terms(text, vocab::LEFT_WING_TERMS, &mut indicators.left_wing_terms);
    record_terms(text, vocab::RIGHT_WING_TERMS, &mut indicators.right_wing_terms);
    record_terms(text, vocab::EMOTIONAL_TERMS, &mut indicators.emotional_terms);
    record_terms(text, vocab::PARTISAN_TERMS, &mut indicators.partisan_terms);

    // Pattern families record every occurrence.
    record_matches(text, &vocab::LOADED_LANGUAGE_PATTERNS, &mut indicators.loaded_language);
    record_matches(text, &vocab::FACTUAL_CLAIM_PATTERNS, &mut indicators.factual_claims);
    record_matches(text, &vocab::OPINION_PATTERNS, &mut indicators.opinion_indicators);

    indicators
}

fn record_terms(text: &str, terms: &[&str], found: &mut Vec<String>) {
    for term in terms {
        if text.contains(term) {
            found.push((*term).to_string());
        }
    }
}

fn record_matches(text: &str, patterns: &[regex::Regex], found: &mut Vec<String>) {
    for pattern in patterns {
        found.extend(pattern.find_iter(text).map(|m| m.as_str().to_string()));
    }
}

fn assess_credibility(source: &str) -> CredibilityAssessment {
    let source = source.to_lowercase();
    let tiers = [
        (CredibilityLevel::High, 0.9, vocab::HIGH_CREDIBILITY_SOURCES),
        (CredibilityLevel::Medium, 0.6, vocab::MEDIUM_CREDIBILITY_SOURCES),
        (CredibilityLevel::Low, 0.3, vocab::LOW_CREDIBILITY_SOURCES),
    ];

    for (level, score, names) in tiers {
        if names.iter().any(|name| source.contains(name)) {
            return CredibilityAssessment {
                level,
                score,
                reason: format!("Known {} credibility source", level.as_str()),
            };
        }
    }

    CredibilityAssessment {
        level: CredibilityLevel::Unknown,
        score: 0.5,
        reason: "Unknown source - requires additional verification".to_string(),
    }
}

fn emotional_language_score(text: &str) -> f64 {
    let hits = vocab::EMOTIONAL_TERMS.iter().filter(|t| text.contains(**t)).count();
    ratio_score(hits, text, 100.0)
}

fn partisan_language_score(text: &str) -> f64 {
    let hits = vocab::PARTISAN_TERMS.iter().filter(|t| text.contains(**t)).count();
    ratio_score(hits, text, 50.0)
}

fn ratio_score(hits: usize, text: &str, scale: f64) -> f64 {
    let words = text.split_whitespace().count();
    if words == 0 {
        return 0.0;
    }
    (hits as f64 / words as f64 * scale).min(1.0)
}

fn composite_score(
    indicators: &BiasIndicators,
    credibility: &CredibilityAssessment,
    emotional_score: f64,
    partisan_score: f64,
) -> f64 {
    let mut penalty = emotional_score * 0.3 + partisan_score * 0.4;
    penalty += (indicators.loaded_language.len() as f64 * 0.05).min(0.2);

    let opinion_ratio = indicators.opinion_indicators.len() as f64
        / indicators.factual_claims.len().max(1) as f64;
    penalty += (opinion_ratio * 0.2).min(0.3);

    round2((credibility.score - penalty).max(0.0))
}

fn recommendations(
    indicators: &BiasIndicators,
    credibility: &CredibilityAssessment,
    overall_bias_score: f64,
) -> Vec<String> {
    let mut recs = Vec::new();

    if overall_bias_score < 0.4 {
        recs.push("Cross-reference with multiple sources".to_string());
        recs.push("Verify factual claims independently".to_string());
        recs.push("Consider alternative viewpoints".to_string());
    }
    if indicators.emotional_terms.len() > 3 {
        recs.push("Article contains emotional language - focus on facts".to_string());
    }
    if indicators.partisan_terms.len() > 2 {
        recs.push("Article shows partisan bias - seek balanced coverage".to_string());
    }
    if credibility.level == CredibilityLevel::Unknown {
        recs.push("Source credibility unknown - verify independently".to_string());
    }
    if indicators.opinion_indicators.len() > indicators.factual_claims.len() {
        recs.push("Article contains more opinion than fact".to_string());
    }

    if recs.is_empty() {
        recs.push("Article appears balanced and credible".to_string());
    }
    recs
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
