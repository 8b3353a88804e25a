//! End-to-end comparative analysis over a small analyzed batch
//!
//! Run with: cargo test -p pulse-analysis --test comparative

use pulse_analysis::build_comparative_report;
use pulse_core::{Article, Sentiment};

fn analyzed_article(title: &str, sentiment: Sentiment, topics: &[&str]) -> Article {
    let mut article = Article::new(title, "Summary.");
    article.sentiment = sentiment;
    article.topics = topics.iter().map(|t| t.to_string()).collect();
    article
}

fn acme_batch() -> Vec<Article> {
    vec![
        analyzed_article(
            "Acme launches AI fabric",
            Sentiment::Positive,
            &["Acme Launch"],
        ),
        analyzed_article(
            "Acme faces lawsuit over patents",
            Sentiment::Negative,
            &["Acme Lawsuit"],
        ),
        analyzed_article("Markets steady after Acme filing", Sentiment::Neutral, &["Market"]),
    ]
}

#[test]
fn balanced_batch_reads_as_mixed() {
    let report = build_comparative_report(&acme_batch(), "Acme");

    assert_eq!(report.distribution.positive, 1);
    assert_eq!(report.distribution.negative, 1);
    assert_eq!(report.distribution.neutral, 1);

    assert_eq!(report.coverage_differences.len(), 2);
    assert_eq!(
        report.coverage_differences[0].comparison,
        "Article 1 highlights Acme Launch issues, whereas Article 2 focuses on Acme Lawsuit."
    );
    assert_eq!(
        report.coverage_differences[0].impact,
        "Shift from positive to negative news — mixed perception."
    );

    assert!(report.topic_overlap.common_topics.is_empty());
    assert_eq!(report.topic_overlap.unique_topics_per_article.len(), 3);

    assert_eq!(
        report.final_sentiment_analysis,
        "The news about Acme is mixed. Opinions are divided, and the situation is evolving."
    );
    assert_eq!(
        report.localized_summary,
        "कुल 3 समाचारों का विश्लेषण: सकारात्मक 1, नकारात्मक 1, तटस्थ 1।"
    );
}

#[test]
fn shared_topic_moves_from_unique_to_common() {
    let mut batch = acme_batch();
    batch[2].topics = vec!["Acme Launch".to_string(), "Market".to_string()];

    let report = build_comparative_report(&batch, "Acme");
    assert_eq!(report.topic_overlap.common_topics, vec!["Acme Launch"]);
    assert!(report.topic_overlap.unique_topics_per_article[0].is_empty());
    assert_eq!(
        report.topic_overlap.unique_topics_per_article[2],
        vec!["Market".to_string()]
    );
}

#[test]
fn coverage_entries_track_batch_length() {
    for n in 0..5usize {
        let batch: Vec<Article> = (0..n)
            .map(|i| analyzed_article(&format!("Story {i}"), Sentiment::Neutral, &["Market"]))
            .collect();
        let report = build_comparative_report(&batch, "Acme");
        assert_eq!(report.coverage_differences.len(), n.saturating_sub(1));
    }
}

#[test]
fn report_serializes_with_display_keys() {
    let (score, verdict, localized) =
        build_comparative_report(&acme_batch(), "Acme").into_parts();
    let value = serde_json::to_value(&score).unwrap();

    let distribution = &value["Sentiment Distribution"];
    assert_eq!(distribution["Positive"], 1);
    assert_eq!(distribution["Negative"], 1);
    assert_eq!(distribution["Neutral"], 1);

    assert_eq!(value["Coverage Differences"].as_array().unwrap().len(), 2);
    assert!(value["Coverage Differences"][0]["Comparison"].is_string());
    assert!(value["Coverage Differences"][0]["Impact"].is_string());

    assert!(value["Topic Overlap"]["Common Topics"]
        .as_array()
        .unwrap()
        .is_empty());
    assert_eq!(
        value["Topic Overlap"]["Unique Topics Per Article"]
            .as_array()
            .unwrap()
            .len(),
        3
    );

    assert!(verdict.contains("Acme"));
    assert!(localized.starts_with("कुल"));
}

#[test]
fn lopsided_batches_pick_the_expected_verdict() {
    let positive: Vec<Article> = (0..7)
        .map(|i| analyzed_article(&format!("Win {i}"), Sentiment::Positive, &[]))
        .chain((0..1).map(|i| analyzed_article(&format!("Loss {i}"), Sentiment::Negative, &[])))
        .chain((0..2).map(|i| analyzed_article(&format!("Flat {i}"), Sentiment::Neutral, &[])))
        .collect();
    let report = build_comparative_report(&positive, "Acme");
    assert!(report
        .final_sentiment_analysis
        .starts_with("Most news about Acme is positive."));

    // pos=3 neg=5 neu=2 falls through every earlier branch.
    let skewed: Vec<Article> = (0..3)
        .map(|i| analyzed_article(&format!("Win {i}"), Sentiment::Positive, &[]))
        .chain((0..5).map(|i| analyzed_article(&format!("Loss {i}"), Sentiment::Negative, &[])))
        .chain((0..2).map(|i| analyzed_article(&format!("Flat {i}"), Sentiment::Neutral, &[])))
        .collect();
    let report = build_comparative_report(&skewed, "Acme");
    assert!(report.final_sentiment_analysis.contains("slightly positive"));
}
