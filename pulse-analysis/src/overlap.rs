//! Topic overlap across an article batch
//!
//! A topic counts as common when it appears in at least two different
//! articles, compared case-insensitively. Duplicates inside a single article
//! do not inflate the count.

use std::collections::{HashMap, HashSet};

use pulse_core::{text::title_case, Article, TopicOverlap};

/// Split the batch's topics into a shared set and per-article remainders
///
/// Common topics are rendered title-cased in alphabetical order; each unique
/// list keeps the article's own casing and ordering.
pub fn topic_overlap(articles: &[Article]) -> TopicOverlap {
    let per_article: Vec<HashSet<String>> = articles
        .iter()
        .map(|article| {
            article
                .topics
                .iter()
                .map(|topic| topic.to_lowercase())
                .collect()
        })
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for topics in &per_article {
        for topic in topics {
            *counts.entry(topic.as_str()).or_insert(0) += 1;
        }
    }

    let common_lower: HashSet<&str> = counts
        .iter()
        .filter(|(_, &count)| count >= 2)
        .map(|(&topic, _)| topic)
        .collect();

    let mut common_topics: Vec<String> = common_lower.iter().map(|topic| title_case(topic)).collect();
    common_topics.sort();

    let unique_topics_per_article = articles
        .iter()
        .map(|article| {
            article
                .topics
                .iter()
                .filter(|topic| !common_lower.contains(topic.to_lowercase().as_str()))
                .cloned()
                .collect()
        })
        .collect();

    TopicOverlap {
        common_topics,
        unique_topics_per_article,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_with_topics(topics: &[&str]) -> Article {
        let mut article = Article::new("Title", "Summary.");
        article.topics = topics.iter().map(|t| t.to_string()).collect();
        article
    }

    #[test]
    fn topic_in_two_articles_is_common() {
        let articles = vec![
            article_with_topics(&["Acme Launch", "Revenue"]),
            article_with_topics(&["Lawsuit"]),
            article_with_topics(&["Revenue", "Market"]),
        ];
        let overlap = topic_overlap(&articles);
        assert_eq!(overlap.common_topics, vec!["Revenue"]);
        assert_eq!(
            overlap.unique_topics_per_article,
            vec![
                vec!["Acme Launch".to_string()],
                vec!["Lawsuit".to_string()],
                vec!["Market".to_string()],
            ]
        );
    }

    #[test]
    fn comparison_ignores_case() {
        let articles = vec![
            article_with_topics(&["AI Research"]),
            article_with_topics(&["ai research"]),
        ];
        let overlap = topic_overlap(&articles);
        assert_eq!(overlap.common_topics, vec!["Ai Research"]);
        assert!(overlap.unique_topics_per_article[0].is_empty());
        assert!(overlap.unique_topics_per_article[1].is_empty());
    }

    #[test]
    fn repeats_inside_one_article_stay_unique() {
        let articles = vec![
            article_with_topics(&["Tax", "Tax"]),
            article_with_topics(&["Profit"]),
        ];
        let overlap = topic_overlap(&articles);
        assert!(overlap.common_topics.is_empty());
        assert_eq!(
            overlap.unique_topics_per_article[0],
            vec!["Tax".to_string(), "Tax".to_string()]
        );
    }

    #[test]
    fn common_topics_render_sorted() {
        let articles = vec![
            article_with_topics(&["Market", "Earnings"]),
            article_with_topics(&["Earnings", "Market"]),
        ];
        let overlap = topic_overlap(&articles);
        assert_eq!(overlap.common_topics, vec!["Earnings", "Market"]);
    }

    #[test]
    fn empty_batch_yields_empty_overlap() {
        let overlap = topic_overlap(&[]);
        assert!(overlap.common_topics.is_empty());
        assert!(overlap.unique_topics_per_article.is_empty());
    }

    #[test]
    fn disjoint_topics_produce_no_common_entries() {
        let articles = vec![
            article_with_topics(&["Launch"]),
            article_with_topics(&["Lawsuit"]),
        ];
        let overlap = topic_overlap(&articles);
        assert!(overlap.common_topics.is_empty());
        assert_eq!(overlap.unique_topics_per_article.len(), 2);
    }
}
