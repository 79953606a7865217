//! Movetext tokenizer for OCR output.
//!
//! Unlike a PGN reader this keeps every garbled token: anything that is not a
//! move number, result marker or comment is passed on for validation.

use std::sync::LazyLock;

use regex::Regex;

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{[^}]*\}").expect("comment pattern is valid")
});

static MOVE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.+").expect("move number pattern is valid")
});

const RESULT_MARKERS: [&str; 5] = ["1-0", "0-1", "1/2-1/2", "½-½", "*"];

/// Split movetext into an interleaved half-move token list.
///
/// `"12.Nf3"` style tokens (number glued to the move) keep the move part.
pub fn tokenize_movetext(text: &str) -> Vec<String> {
    let no_comments = COMMENT_RE.replace_all(text, " ");

    no_comments
        .split_whitespace()
        .filter(|token| !RESULT_MARKERS.contains(token))
        .filter_map(|token| {
            let rest = MOVE_NUMBER_RE.replace(token, "");
            if rest.is_empty() {
                None
            } else {
                Some(rest.into_owned())
            }
        })
        .collect()
}

/// Game result marker written at the end of the movetext, if any.
pub fn find_result(text: &str) -> Option<&'static str> {
    let last = text.split_whitespace().last()?;
    RESULT_MARKERS.iter().copied().find(|marker| *marker == last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize_movetext("1. e4 e5 2. Nf3 Nc6 1-0");
        assert_eq!(tokens, vec!["e4", "e5", "Nf3", "Nc6"]);
    }

    #[test]
    fn test_tokenize_keeps_garbled_tokens() {
        let tokens = tokenize_movetext("1.e4 e5 2.Nf9 {smudged} N c6 3... 0-0");
        assert_eq!(tokens, vec!["e4", "e5", "Nf9", "N", "c6", "0-0"]);
    }

    #[test]
    fn test_tokenize_black_continuation() {
        let tokens = tokenize_movetext("12... Qh5+ 13. g3");
        assert_eq!(tokens, vec!["Qh5+", "g3"]);
    }

    #[test]
    fn test_find_result() {
        assert_eq!(find_result("1. e4 e5 1/2-1/2"), Some("1/2-1/2"));
        assert_eq!(find_result("1. e4 e5"), None);
        assert_eq!(find_result(""), None);
    }
}
