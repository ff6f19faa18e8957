//! Noise removal and splitting of free text into color tokens.

use std::sync::LazyLock;

use regex::Regex;

use super::modifiers::strip_hints;

/// Connector and filler words that never name a color.
static STOP_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:gradiente|fundo|cor|cores|tom|tons|de|em|para|no|na|ao|a)\b")
        .expect("valid regex")
});

/// The word "e" ("and") used as a separator.
static AND_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+e\s+").expect("valid regex"));

/// Remove stop words from lower-cased text and collapse whitespace.
pub fn remove_noise(lowered: &str) -> String {
    STOP_WORDS
        .replace_all(lowered, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split lower-cased text into color tokens, preserving input order.
///
/// Separators are `,`, `/`, `;` and the word `e`. Punctuation inside
/// parentheses does not split, so `rgb(10, 120, 30)` stays one token.
///
/// ```
/// use fundo_magico::parser::tokenize;
///
/// assert_eq!(tokenize("azul e amarelo"), ["azul", "amarelo"]);
/// assert_eq!(tokenize("gradiente de azul escuro / rgb(1, 2, 3)"), ["azul escuro", "rgb(1, 2, 3)"]);
/// assert!(tokenize("gradiente de para").is_empty());
/// ```
pub fn tokenize(lowered: &str) -> Vec<String> {
    let cleaned = remove_noise(lowered);

    split_top_level(&cleaned)
        .into_iter()
        .flat_map(|fragment| AND_SEPARATOR.split(fragment))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// The single token a color name turns into when typed as input.
///
/// Returns `None` when the name vanishes entirely or splits into several
/// tokens, since such a name could never be looked up.
///
/// ```
/// use fundo_magico::parser::name_token;
///
/// assert_eq!(name_token("Rosa   Choque").as_deref(), Some("rosa choque"));
/// assert_eq!(name_token("cor de rosa").as_deref(), Some("rosa"));
/// assert_eq!(name_token("azul e verde"), None);
/// assert_eq!(name_token("radial"), None);
/// ```
pub fn name_token(name: &str) -> Option<String> {
    let mut tokens = tokenize(&strip_hints(&name.to_lowercase())).into_iter();
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => Some(token),
        _ => None,
    }
}

/// Split on `,`, `/` and `;` outside parentheses.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' | '/' | ';' if depth == 0 => {
                fragments.push(&text[start..index]);
                start = index + ch.len_utf8();
            }
            _ => {}
        }
    }
    fragments.push(&text[start..]);

    fragments
}
