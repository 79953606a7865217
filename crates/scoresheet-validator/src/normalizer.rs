//! Canonicalizes castling spellings produced by OCR misreads.

use std::sync::LazyLock;

use regex::Regex;

// Latin O/o, digit zero, Greek omicron and Cyrillic O in both cases; hyphen
// look-alikes include the en/em dashes and the minus sign.
static CASTLING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[Oo0ΟοОо]\s*[-‐‑–—−]\s*[Oo0ΟοОо](\s*[-‐‑–—−]\s*[Oo0ΟοОо])?\s*([+#])?$",
    )
    .expect("castling pattern is valid")
});

pub const KINGSIDE: &str = "O-O";
pub const QUEENSIDE: &str = "O-O-O";

/// Canonical form of a move token. Castling variants become `O-O`/`O-O-O`
/// with any `+`/`#` suffix kept; everything else is returned trimmed.
pub fn normalize(token: &str) -> String {
    let token = token.trim();
    let Some(caps) = CASTLING_RE.captures(token) else {
        return token.to_string();
    };

    let mut normalized = if caps.get(1).is_some() {
        QUEENSIDE.to_string()
    } else {
        KINGSIDE.to_string()
    };
    if let Some(suffix) = caps.get(2) {
        normalized.push_str(suffix.as_str());
    }
    normalized
}

pub fn is_castling(notation: &str) -> bool {
    let core = notation.trim_end_matches(['+', '#']);
    core == KINGSIDE || core == QUEENSIDE
}
