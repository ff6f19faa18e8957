//! Localized color name dictionary.

use std::sync::OnceLock;

/// Built-in Portuguese color names and their canonical hex literals.
const BUILTIN_COLORS: &[(&str, &str)] = &[
    // Neutrals
    ("preto", "#000000"),
    ("branco", "#ffffff"),
    ("cinza", "#9aa3ab"),
    ("cinza claro", "#cfd6dc"),
    ("cinza escuro", "#4b5563"),
    ("bege", "#f5f5dc"),
    ("creme", "#fffdd0"),
    ("dourado", "#d4af37"),
    ("prata", "#c0c0c0"),
    // Browns and earth tones
    ("marrom", "#8b4513"),
    ("castanho", "#7b3f00"),
    ("caramelo", "#af6f2a"),
    ("chocolate", "#d2691e"),
    ("bronze", "#cd7f32"),
    ("cobre", "#b87333"),
    ("areia", "#c2b280"),
    ("terracota", "#e2725b"),
    // Reds and pinks
    ("vermelho", "#ef4444"),
    ("vinho", "#7f1d1d"),
    ("bordo", "#800020"),
    ("magenta", "#ff00ff"),
    ("fúcsia", "#ff00ff"),
    ("pink", "#ff4da6"),
    ("salmão", "#fa8072"),
    ("coral", "#ff7f50"),
    ("pêssego", "#ffcba4"),
    ("tomate", "#ff6347"),
    // Oranges and yellows
    ("laranja", "#ffa500"),
    ("ambar", "#ffbf00"),
    ("mostarda", "#e1ad01"),
    ("amarelo", "#ffd900"),
    ("amarelo claro", "#fff176"),
    ("amarelo escuro", "#b58900"),
    // Greens
    ("verde", "#22c55e"),
    ("verde claro", "#a2ffd0"),
    ("verde escuro", "#087f5b"),
    ("limão", "#c7f000"),
    ("oliva", "#808000"),
    ("oliva escuro", "#556b2f"),
    ("menta", "#98ff98"),
    ("esmeralda", "#2ecc71"),
    ("musgo", "#556b2f"),
    // Blues, cyans and turquoises
    ("azul", "#3b82f6"),
    ("azul claro", "#8cc3ff"),
    ("azul escuro", "#1e3a8a"),
    ("marinho", "#001f3f"),
    ("anil", "#4b0082"),
    ("cobalto", "#0047ab"),
    ("celeste", "#87ceeb"),
    ("ciano", "#00ffff"),
    ("água", "#00ffff"),
    ("aqua", "#00ffff"),
    ("turquesa", "#40e0d0"),
    ("teal", "#008080"),
    // Purples and violets
    ("roxo", "#9d7cff"),
    ("lilás", "#b18cff"),
    ("violeta", "#7c3aed"),
    ("lavanda", "#e6e6fa"),
    ("púrpura", "#800080"),
];

static BUILTIN: OnceLock<ColorDictionary> = OnceLock::new();

/// Lower-case a color name and collapse internal whitespace to single spaces.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// An ordered mapping from localized color names to color literals.
///
/// Entries are kept longest name first so that a compound name such as
/// `"azul escuro"` is always tried before `"azul"`. Names with the same length
/// keep their insertion order.
///
/// # Example
///
/// ```
/// use fundo_magico::color::ColorDictionary;
///
/// let dictionary = ColorDictionary::builtin();
/// assert_eq!(dictionary.lookup("Azul   Escuro"), Some("#1e3a8a"));
/// assert_eq!(dictionary.lookup("azul"), Some("#3b82f6"));
/// assert_eq!(dictionary.lookup("sparkle"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorDictionary {
    entries: Vec<(String, String)>,
}

impl ColorDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide built-in dictionary.
    pub fn builtin() -> &'static ColorDictionary {
        BUILTIN.get_or_init(|| Self::from_entries(BUILTIN_COLORS.iter().copied()))
    }

    /// Build a dictionary from `(name, literal)` pairs. Later duplicates
    /// replace earlier ones.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut dictionary = Self::new();
        for (name, literal) in entries {
            dictionary.insert(name.as_ref(), literal);
        }
        dictionary
    }

    /// Insert or replace an entry, returning the previous literal if any.
    pub fn insert(&mut self, name: &str, literal: impl Into<String>) -> Option<String> {
        let name = normalize_name(name);
        let literal = literal.into();

        if let Some((_, existing)) = self.entries.iter_mut().find(|(key, _)| *key == name) {
            return Some(std::mem::replace(existing, literal));
        }

        self.entries.push((name, literal));
        // Stable sort keeps insertion order between names of equal length.
        self.entries
            .sort_by(|(a, _), (b, _)| b.chars().count().cmp(&a.chars().count()));
        None
    }

    /// Find the literal for `token`, trying longer names first.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        let token = normalize_name(token);
        if token.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, literal)| literal.as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in lookup order (longest name first).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, literal)| (name.as_str(), literal.as_str()))
    }
}
