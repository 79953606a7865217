//! String-distance utilities for matching misread moves against legal ones.

/// Levenshtein edit distance; insertions, deletions and substitutions cost 1.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, val) in dp[0].iter_mut().enumerate() {
        *val = j;
    }

    for (i, a_char) in a.iter().enumerate() {
        for (j, b_char) in b.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            dp[i + 1][j + 1] = (dp[i][j + 1] + 1)
                .min(dp[i + 1][j] + 1)
                .min(dp[i][j] + cost);
        }
    }

    dp[a.len()][b.len()]
}

/// Canonical form for comparing two notations: drops `+ # x =` and
/// whitespace, upper-cases the rest.
pub fn comparison_key(notation: &str) -> String {
    notation
        .chars()
        .filter(|c| !matches!(c, '+' | '#' | 'x' | '=') && !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Last two characters of a string, if it has at least two.
pub fn last_two(s: &str) -> Option<&str> {
    let (idx, _) = s.char_indices().rev().nth(1)?;
    Some(&s[idx..])
}

/// Destination square of a SAN move (`"exd5"` -> `"d5"`, `"e8=Q+"` -> `"e8"`).
/// Castling has none.
pub fn destination_square(notation: &str) -> Option<&str> {
    let core = notation.trim().trim_end_matches(['+', '#']);
    if core.starts_with("O-O") {
        return None;
    }
    let core = match core.find('=') {
        Some(idx) => &core[..idx],
        None => core,
    };
    let square = last_two(core)?;
    let mut chars = square.chars();
    match (chars.next(), chars.next()) {
        (Some('a'..='h'), Some('1'..='8')) => Some(square),
        _ => None,
    }
}
