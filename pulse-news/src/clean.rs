//! Description cleanup for retrieved articles
//!
//! Feed descriptions arrive with tracking URLs, markup fragments and
//! irregular whitespace. Summarization and topic extraction both work on the
//! cleaned form.

use regex::Regex;
use std::sync::OnceLock;

use crate::types::RawArticle;

fn url_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"http\S+").expect("static pattern"))
}

fn noise_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9\s.,'\-]").expect("static pattern"))
}

fn whitespace_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

/// Clean a candidate's description text
///
/// Falls back to the leading content when the description is empty, then
/// strips URLs, filters to plain characters and collapses whitespace. An
/// article with nothing usable left gets a stub built from its title so the
/// downstream stages always see non-empty text.
pub fn clean_description(article: &RawArticle) -> String {
    let source_text = if article.description.is_empty() {
        article.content.as_str()
    } else {
        article.description.as_str()
    };

    let no_urls = url_pattern().replace_all(source_text, "");
    let plain = noise_pattern().replace_all(&no_urls, " ");
    let cleaned = whitespace_pattern()
        .replace_all(&plain, " ")
        .trim()
        .to_string();

    if cleaned.is_empty() {
        format!("{}. More details to follow.", article.title)
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str, description: &str, content: &str) -> RawArticle {
        RawArticle {
            title: title.to_string(),
            description: description.to_string(),
            content: content.to_string(),
            url: String::new(),
            source: String::new(),
            published_at: None,
        }
    }

    #[test]
    fn strips_urls() {
        let article = raw("T", "Read more at https://example.com/x?a=1 today", "");
        assert_eq!(clean_description(&article), "Read more at today");
    }

    #[test]
    fn filters_markup_characters() {
        let article = raw("T", "Acme's <b>profit</b> rose 20%", "");
        assert_eq!(clean_description(&article), "Acme's b profit b rose 20");
    }

    #[test]
    fn collapses_whitespace() {
        let article = raw("T", "Acme   rose \n sharply", "");
        assert_eq!(clean_description(&article), "Acme rose sharply");
    }

    #[test]
    fn falls_back_to_content_then_title() {
        let from_content = raw("Acme rises", "", "Content text here");
        assert_eq!(clean_description(&from_content), "Content text here");

        let empty = raw("Acme rises", "", "");
        assert_eq!(
            clean_description(&empty),
            "Acme rises. More details to follow."
        );
    }

    #[test]
    fn all_noise_falls_back_to_title() {
        let article = raw("Acme rises", "https://example.com/only-a-link", "");
        assert_eq!(
            clean_description(&article),
            "Acme rises. More details to follow."
        );
    }
}
