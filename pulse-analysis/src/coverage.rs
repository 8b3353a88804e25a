//! Coverage difference narration between adjacent articles
//!
//! Walks the batch pairwise and emits one comparison plus one impact line per
//! adjacent pair. The comparison leans on each article's first topic; when an
//! article carries no topics, a keyword-driven focus category stands in.

use pulse_core::{Article, CoverageDifference, Sentiment};

/// Broad editorial angle inferred from an article's topic list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusCategory {
    Financial,
    ProductInnovation,
    Regulatory,
    Leadership,
    Geopolitical,
    General,
}

impl FocusCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FocusCategory::Financial => "Financial",
            FocusCategory::ProductInnovation => "Product/Innovation",
            FocusCategory::Regulatory => "Regulatory",
            FocusCategory::Leadership => "Leadership",
            FocusCategory::Geopolitical => "Geopolitical",
            FocusCategory::General => "General",
        }
    }
}

impl std::fmt::Display for FocusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const FINANCIAL_KEYWORDS: [&str; 6] = ["revenue", "profit", "sales", "stock", "investor", "earning"];
const PRODUCT_KEYWORDS: [&str; 6] = ["launch", "product", "ai", "innovation", "technology", "fabric"];
const REGULATORY_KEYWORDS: [&str; 6] = ["tax", "law", "regulation", "ban", "compliance", "legal"];
const LEADERSHIP_KEYWORDS: [&str; 5] = ["ceo", "leadership", "chair", "executive", "founder"];
const GEOPOLITICAL_KEYWORDS: [&str; 5] = ["india", "china", "us", "global", "market"];

/// Classify a topic list into the first matching category
///
/// Keywords match as substrings of the lowercased joined topics, so "Tax Law"
/// hits "tax" and "Business" hits "us". Categories are checked in a fixed
/// order and the first hit wins.
pub fn detect_focus(topics: &[String]) -> FocusCategory {
    let joined = topics.join(" ").to_lowercase();
    let matches_any = |keywords: &[&str]| keywords.iter().any(|keyword| joined.contains(keyword));

    if matches_any(&FINANCIAL_KEYWORDS) {
        FocusCategory::Financial
    } else if matches_any(&PRODUCT_KEYWORDS) {
        FocusCategory::ProductInnovation
    } else if matches_any(&REGULATORY_KEYWORDS) {
        FocusCategory::Regulatory
    } else if matches_any(&LEADERSHIP_KEYWORDS) {
        FocusCategory::Leadership
    } else if matches_any(&GEOPOLITICAL_KEYWORDS) {
        FocusCategory::Geopolitical
    } else {
        FocusCategory::General
    }
}

/// Impact line for an adjacent sentiment pair
pub fn sentiment_shift(first: Sentiment, second: Sentiment) -> &'static str {
    match (first, second) {
        (Sentiment::Positive, Sentiment::Negative) => {
            "Shift from positive to negative news — mixed perception."
        }
        (Sentiment::Negative, Sentiment::Positive) => {
            "Shift from negative to positive news — improving outlook."
        }
        (Sentiment::Positive, Sentiment::Positive) => {
            "Consistent positive coverage — optimism reinforced."
        }
        (Sentiment::Negative, Sentiment::Negative) => {
            "Consistent negative coverage — concerns persist."
        }
        _ => "Mixed sentiment — perception varies.",
    }
}

/// Narrate each adjacent article pair
///
/// Fewer than two articles produce no entries.
pub fn coverage_differences(articles: &[Article]) -> Vec<CoverageDifference> {
    let references: Vec<String> = articles
        .iter()
        .map(|article| {
            article
                .topics
                .first()
                .cloned()
                .unwrap_or_else(|| detect_focus(&article.topics).to_string())
        })
        .collect();

    articles
        .windows(2)
        .enumerate()
        .map(|(index, pair)| CoverageDifference {
            comparison: format!(
                "Article {} highlights {} issues, whereas Article {} focuses on {}.",
                index + 1,
                references[index],
                index + 2,
                references[index + 1]
            ),
            impact: sentiment_shift(pair[0].sentiment, pair[1].sentiment).to_string(),
        })
        .collect()
}
