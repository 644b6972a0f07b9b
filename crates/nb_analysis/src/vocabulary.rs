//! Fixed lexical tables backing the bias analyzer.
//!
//! All matching runs over a lower-cased text blob, so every entry here is
//! lower-cased. Vocabulary terms match as literal substrings; the pattern
//! families match on word boundaries.

use lazy_static::lazy_static;
use regex::Regex;

pub const LEFT_WING_TERMS: &[&str] = &[
    "progressive",
    "liberal agenda",
    "socialist",
    "radical left",
    "woke",
    "cancel culture",
    "defund the police",
    "open borders",
];

pub const RIGHT_WING_TERMS: &[&str] = &[
    "conservative agenda",
    "far-right",
    "alt-right",
    "maga",
    "america first",
    "traditional values",
    "pro-life",
    "gun rights",
];

pub const EMOTIONAL_TERMS: &[&str] = &[
    "outrageous",
    "shocking",
    "devastating",
    "amazing",
    "incredible",
    "terrible",
    "wonderful",
    "horrible",
    "fantastic",
    "disgusting",
];

pub const PARTISAN_TERMS: &[&str] = &[
    "democrats say",
    "republicans claim",
    "liberals argue",
    "conservatives believe",
    "the left",
    "the right",
    "blue state",
    "red state",
];

/// Source-name fragments for the high credibility tier, matched as
/// substrings of the lower-cased source name. Order matters: the first
/// matching fragment decides the assessment.
pub const HIGH_CREDIBILITY_SOURCES: &[&str] = &[
    "reuters",
    "associated press",
    "ap",
    "bbc news",
    "npr",
    "pbs",
    "c-span",
    "wall street journal",
    "new york times",
    "washington post",
    "usa today",
    "cnn",
    "fox news",
    "msnbc",
    "abc news",
    "cbs news",
    "nbc news",
    "politico",
    "roll call",
    "the hill",
];

pub const MEDIUM_CREDIBILITY_SOURCES: &[&str] = &[
    "bloomberg",
    "forbes",
    "time",
    "newsweek",
    "the atlantic",
    "the new yorker",
    "national review",
    "the nation",
    "mother jones",
];

pub const LOW_CREDIBILITY_SOURCES: &[&str] = &[
    "breitbart",
    "daily caller",
    "daily beast",
    "huffpost",
    "vox",
    "buzzfeed news",
    "vice news",
    "salon",
    "alternet",
];

lazy_static! {
    /// Absolutist or extreme wording.
    pub static ref LOADED_LANGUAGE_PATTERNS: Vec<Regex> = compile(&[
        r"\b(clearly|obviously|undoubtedly|certainly|definitely)\b",
        r"\b(always|never|everyone|nobody|all|none)\b",
        r"\b(disaster|catastrophe|miracle|revolutionary|groundbreaking)\b",
    ]);

    /// Cues that a statement is sourced or quantified.
    pub static ref FACTUAL_CLAIM_PATTERNS: Vec<Regex> = compile(&[
        r"\b(according to|data shows|study finds|research indicates)\b",
        r"\b(statistics|figures|numbers|percent|percentage)\b",
        r"\b(official|confirmed|verified|documented)\b",
    ]);

    /// Cues that a statement is opinion or hedged.
    pub static ref OPINION_PATTERNS: Vec<Regex> = compile(&[
        r"\b(i think|i believe|in my opinion|it seems|appears)\b",
        r"\b(many say|some argue|critics claim|supporters believe)\b",
        r"\b(should|could|would|might|may)\b",
    ]);
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static pattern must compile"))
        .collect()
}
