//! The background parser: free text in, validated background value out.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::modifiers::{GradientModifiers, format_angle, strip_hints};
use super::tokenize::{name_token, tokenize};
use crate::color::{ColorDictionary, ColorResolver};
use crate::config::{Config, DEFAULT_ANGLE};
use crate::error::ParseError;
use crate::logging::targets;
use crate::types::{Background, BackgroundLiteral, ColorLiteral, GradientShape};
use crate::validate;

/// A gradient function typed verbatim, e.g. `linear-gradient(45deg, red, blue)`.
static GRADIENT_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:repeating-)?(?:linear|radial|conic)-gradient\s*\(").expect("valid regex")
});

/// Turns free text into a [`Background`].
///
/// Parsing is a pure function of the input, the dictionary and the default
/// angle; a parser can be shared freely between threads.
///
/// # Example
///
/// ```
/// use fundo_magico::{Background, BackgroundParser};
///
/// let parser = BackgroundParser::default();
///
/// let solid = parser.parse("vermelho").unwrap();
/// assert_eq!(solid, Background::Solid(fundo_magico::color::resolve("#ef4444").unwrap()));
///
/// let gradient = parser.parse("azul e amarelo").unwrap();
/// assert_eq!(gradient.as_str(), "linear-gradient(90deg, #3b82f6, #ffd900)");
///
/// let failure = parser.parse("   ").unwrap_err();
/// assert_eq!(failure.to_string(), "Digite pelo menos uma cor.");
/// ```
#[derive(Debug, Clone)]
pub struct BackgroundParser {
    dictionary: Cow<'static, ColorDictionary>,
    default_angle: f64,
}

impl Default for BackgroundParser {
    fn default() -> Self {
        Self {
            dictionary: Cow::Borrowed(ColorDictionary::builtin()),
            default_angle: DEFAULT_ANGLE,
        }
    }
}

impl BackgroundParser {
    /// Create a parser from configuration.
    ///
    /// Extra color names are merged over the built-in dictionary under the
    /// token the parser produces for them; a name that already exists takes
    /// the configured literal.
    pub fn new(config: &Config) -> Self {
        let dictionary = if config.colors.is_empty() {
            Cow::Borrowed(ColorDictionary::builtin())
        } else {
            let mut dictionary = ColorDictionary::builtin().clone();
            for (name, literal) in &config.colors {
                match name_token(name) {
                    Some(key) => {
                        dictionary.insert(&key, literal.as_str());
                    }
                    None => {
                        tracing::warn!(target: targets::PARSER, %name, "color name can never match input");
                    }
                }
            }
            Cow::Owned(dictionary)
        };

        Self {
            dictionary,
            default_angle: config.default_angle,
        }
    }

    /// Create a parser with a custom dictionary in place of the built-in one.
    pub fn with_dictionary(dictionary: ColorDictionary) -> Self {
        Self {
            dictionary: Cow::Owned(dictionary),
            default_angle: DEFAULT_ANGLE,
        }
    }

    /// Set the angle used by linear gradients when the input gives none.
    pub fn with_default_angle(mut self, angle: f64) -> Self {
        self.default_angle = angle;
        self
    }

    /// The dictionary used for name lookups.
    pub fn dictionary(&self) -> &ColorDictionary {
        &self.dictionary
    }

    /// Parse free text into a background value.
    pub fn parse(&self, raw: &str) -> Result<Background, ParseError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let lowered = raw.to_lowercase();

        if GRADIENT_FUNCTION.is_match(&lowered) {
            tracing::debug!(target: targets::PARSER, input = raw, "raw gradient literal");
            return if validate::is_valid_background(raw) {
                Ok(Background::Gradient(BackgroundLiteral::new_unchecked(raw)))
            } else {
                Err(ParseError::InvalidGradient)
            };
        }

        let modifiers = GradientModifiers::detect(&lowered);
        tracing::debug!(target: targets::PARSER, ?modifiers, "gradient modifiers");

        let tokens = tokenize(&strip_hints(&lowered));
        tracing::debug!(target: targets::PARSER, ?tokens, "color tokens");
        if tokens.is_empty() {
            return Err(ParseError::NoTokens);
        }

        let resolver = ColorResolver::new(&self.dictionary);
        let colors: Vec<ColorLiteral> = tokens
            .iter()
            .filter_map(|token| resolver.resolve(token))
            .collect();

        match colors.as_slice() {
            [] => Err(ParseError::NoColors),
            [color] => {
                if validate::is_valid_color(color.as_str()) {
                    Ok(Background::Solid(color.clone()))
                } else {
                    tracing::warn!(target: targets::PARSER, %color, "resolved color failed validation");
                    Err(ParseError::InvalidColor)
                }
            }
            _ => {
                let value = assemble_gradient(&colors, &modifiers, self.default_angle);
                if validate::is_valid_background(&value) {
                    Ok(Background::Gradient(BackgroundLiteral::new_unchecked(value)))
                } else {
                    tracing::warn!(target: targets::PARSER, %value, "assembled gradient failed validation");
                    Err(ParseError::InvalidGeneratedGradient)
                }
            }
        }
    }
}

/// Build the gradient function call for two or more colors, in input order.
///
/// Radial gradients ignore the angle; conic gradients use it as the `from`
/// clause when present; linear gradients fall back to `default_angle`.
pub fn assemble_gradient(
    colors: &[ColorLiteral],
    modifiers: &GradientModifiers,
    default_angle: f64,
) -> String {
    let stops = colors
        .iter()
        .map(ColorLiteral::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let prefix = modifiers.prefix();
    let function = modifiers.shape.function_name();

    match modifiers.shape {
        GradientShape::Radial => format!("{prefix}{function}(circle at center, {stops})"),
        GradientShape::Conic => {
            let from = modifiers
                .angle
                .map(|angle| format!("from {}deg ", format_angle(angle)))
                .unwrap_or_default();
            format!("{prefix}{function}({from}at center, {stops})")
        }
        GradientShape::Linear => {
            let angle = format_angle(modifiers.angle.unwrap_or(default_angle));
            format!("{prefix}{function}({angle}deg, {stops})")
        }
    }
}

/// Parse free text with the built-in dictionary and default settings.
///
/// ```
/// use fundo_magico::parse;
///
/// assert_eq!(parse("vermelho").unwrap().as_str(), "#ef4444");
/// assert!(parse("#zzz").is_err());
/// ```
pub fn parse(raw: &str) -> Result<Background, ParseError> {
    BackgroundParser::default().parse(raw)
}
