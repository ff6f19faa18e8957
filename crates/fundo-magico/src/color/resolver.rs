//! Token-to-color resolution.

use std::sync::LazyLock;

use regex::Regex;

use super::ColorDictionary;
use crate::logging::targets;
use crate::types::ColorLiteral;
use crate::validate;

/// `rgb()`, `rgba()`, `hsl()` or `hsla()` with plausible arguments. Ranges are
/// not checked here; final validation catches anything malformed.
static FUNCTIONAL_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:rgba?|hsla?)\(\s*[\d.\s,%]+\)$").expect("valid regex")
});

/// How a token was recognized as a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    /// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    Hex,
    /// `rgb()`, `rgba()`, `hsl()` or `hsla()`.
    Functional,
    /// A localized name from the dictionary.
    Dictionary,
    /// Any other syntax the validator accepts, such as CSS named colors.
    Css,
}

/// Maps single tokens to color literals.
///
/// Resolution tries, in order: hex literal, functional literal, dictionary
/// name, and finally the generic color validator. The first match wins.
#[derive(Debug, Clone, Copy)]
pub struct ColorResolver<'d> {
    dictionary: &'d ColorDictionary,
}

impl Default for ColorResolver<'static> {
    fn default() -> Self {
        Self::new(ColorDictionary::builtin())
    }
}

impl<'d> ColorResolver<'d> {
    /// Create a resolver backed by `dictionary`.
    pub fn new(dictionary: &'d ColorDictionary) -> Self {
        Self { dictionary }
    }

    /// The dictionary used for name lookups.
    pub fn dictionary(&self) -> &'d ColorDictionary {
        self.dictionary
    }

    /// Resolve `token` to a color literal, or `None` if it is not a color.
    pub fn resolve(&self, token: &str) -> Option<ColorLiteral> {
        self.resolve_with_source(token).map(|(color, _)| color)
    }

    /// Like [`ColorResolver::resolve`], also reporting which rule matched.
    pub fn resolve_with_source(&self, token: &str) -> Option<(ColorLiteral, ColorSource)> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        let resolved = if token.strip_prefix('#').is_some_and(validate::is_hex_digits) {
            Some((ColorLiteral::new_unchecked(token), ColorSource::Hex))
        } else if FUNCTIONAL_COLOR.is_match(token) {
            Some((ColorLiteral::new_unchecked(token), ColorSource::Functional))
        } else if let Some(literal) = self.dictionary.lookup(token) {
            Some((ColorLiteral::new_unchecked(literal), ColorSource::Dictionary))
        } else if validate::is_valid_color(token) {
            Some((ColorLiteral::new_unchecked(token), ColorSource::Css))
        } else {
            None
        };

        match &resolved {
            Some((color, source)) => {
                tracing::trace!(target: targets::COLOR, token, %color, ?source, "resolved color");
            }
            None => tracing::debug!(target: targets::COLOR, token, "token is not a color"),
        }

        resolved
    }
}

/// Resolve `token` against the built-in dictionary.
///
/// ```
/// use fundo_magico::color::resolve;
///
/// assert_eq!(resolve("vermelho").unwrap().as_str(), "#ef4444");
/// assert_eq!(resolve("#0f0").unwrap().as_str(), "#0f0");
/// assert_eq!(resolve("red").unwrap().as_str(), "red");
/// assert!(resolve("#zzz").is_none());
/// ```
pub fn resolve(token: &str) -> Option<ColorLiteral> {
    ColorResolver::default().resolve(token)
}
