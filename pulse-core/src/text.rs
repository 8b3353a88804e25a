//! Small text helpers shared across the pipeline

/// Title-case a phrase: uppercase every letter that follows a non-letter,
/// lowercase the rest
///
/// Mirrors the casing the report renders topics in, so `"acme corp"` becomes
/// `"Acme Corp"` and `"AI-based"` becomes `"Ai-Based"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }
    out
}

/// Prefix of `text` holding at most `max` characters, never splitting a
/// multi-byte character
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("acme corp"), "Acme Corp");
        assert_eq!(title_case("ACME CORP"), "Acme Corp");
        assert_eq!(title_case("revenue"), "Revenue");
    }

    #[test]
    fn title_case_restarts_after_non_letters() {
        assert_eq!(title_case("ai-based"), "Ai-Based");
        assert_eq!(title_case("q3 earnings"), "Q3 Earnings");
    }

    #[test]
    fn title_case_empty() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hi", 10), "hi");
        // Devanagari codepoints are multi-byte; count chars, not bytes.
        assert_eq!(truncate_chars("कुल समाचार", 3), "कुल");
    }
}
