//! Gradient hints: shape, repetition and angle.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::GradientShape;

static REPEATING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:repetindo|repetido|repeating)\b").expect("valid regex")
});

static RADIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:radial|circular)\b").expect("valid regex"));

static CONIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:c[oô]nico|conic)\b").expect("valid regex"));

/// Every hint keyword, removed before tokenizing so it cannot end up glued to
/// a color name.
static HINT_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:repetindo|repetido|repeating|radial|circular|c[oô]nico|conic|linear)\b")
        .expect("valid regex")
});

/// `45deg`, `45 degrees`, `45°`. The number must start a word.
static DEGREE_ANGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[\s,;/])(-?\d+(?:\.\d+)?)\s*(?:°|deg(?:rees?)?\b)").expect("valid regex")
});

/// `45 graus`, `1 grau`.
static WORD_ANGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[\s,;/])(-?\d+(?:\.\d+)?)\s*graus?\b").expect("valid regex")
});

/// Hints extracted from the input. Derived once per parse.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GradientModifiers {
    /// Gradient family; radial hints win over conic ones.
    pub shape: GradientShape,
    /// Emit the `repeating-` variant of the gradient function.
    pub repeating: bool,
    /// Angle in degrees, when one was given.
    pub angle: Option<f64>,
}

impl GradientModifiers {
    /// Detect modifiers in lower-cased input text.
    ///
    /// When both a `deg` and a `graus` angle are present the `graus` one wins;
    /// within each form the first occurrence is used.
    ///
    /// ```
    /// use fundo_magico::parser::GradientModifiers;
    /// use fundo_magico::GradientShape;
    ///
    /// let modifiers = GradientModifiers::detect("cônico repetindo azul e verde 30 graus");
    /// assert_eq!(modifiers.shape, GradientShape::Conic);
    /// assert!(modifiers.repeating);
    /// assert_eq!(modifiers.angle, Some(30.0));
    /// ```
    pub fn detect(lowered: &str) -> Self {
        let text = mask_nested(lowered);

        let shape = if RADIAL.is_match(&text) {
            GradientShape::Radial
        } else if CONIC.is_match(&text) {
            GradientShape::Conic
        } else {
            GradientShape::Linear
        };

        let angle = first_angle(&WORD_ANGLE, &text).or_else(|| first_angle(&DEGREE_ANGLE, &text));

        Self {
            shape,
            repeating: REPEATING.is_match(&text),
            angle,
        }
    }

    /// The `repeating-` prefix, or an empty string.
    pub fn prefix(&self) -> &'static str {
        if self.repeating { "repeating-" } else { "" }
    }
}

fn first_angle(pattern: &Regex, text: &str) -> Option<f64> {
    let captures = pattern.captures(text)?;
    let angle: f64 = captures.get(2)?.as_str().parse().ok()?;
    angle.is_finite().then_some(angle)
}

/// Remove hint keywords and angle phrases, keeping any separator that preceded
/// an angle. Text inside parentheses is never touched, so the hue of
/// `oklch(70% 0.1 250deg)` stays in place.
pub fn strip_hints(lowered: &str) -> String {
    let text = strip_top_level(&DEGREE_ANGLE, lowered);
    let text = strip_top_level(&WORD_ANGLE, &text);
    strip_top_level(&HINT_WORDS, &text)
}

/// Filler for text inside parentheses. Not a word character, not whitespace.
const NESTED: char = '\u{1}';

/// Copy of `text` with everything inside parentheses replaced by [`NESTED`],
/// one filler per byte, so match offsets line up with the original.
fn mask_nested(text: &str) -> String {
    let mut masked = String::with_capacity(text.len());
    let mut depth = 0usize;

    for ch in text.chars() {
        match ch {
            '(' => {
                depth += 1;
                masked.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                masked.push(ch);
            }
            _ if depth > 0 => masked.extend(std::iter::repeat_n(NESTED, ch.len_utf8())),
            _ => masked.push(ch),
        }
    }

    masked
}

/// Replace top-level matches of `pattern` with a space, keeping capture
/// group 1 when the pattern has one.
fn strip_top_level(pattern: &Regex, text: &str) -> String {
    let masked = mask_nested(text);
    let mut stripped = String::with_capacity(text.len());
    let mut last = 0;

    for captures in pattern.captures_iter(&masked) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        stripped.push_str(&text[last..whole.start()]);
        if let Some(lead) = captures.get(1) {
            stripped.push_str(&text[lead.range()]);
        }
        stripped.push(' ');
        last = whole.end();
    }
    stripped.push_str(&text[last..]);

    stripped
}

/// Write an angle the way a person would type it: `90`, `-45`, `22.5`.
pub(crate) fn format_angle(angle: f64) -> String {
    // Avoid printing "-0".
    let angle = if angle == 0.0 { 0.0 } else { angle };
    angle.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_plain_linear() {
        let modifiers = GradientModifiers::detect("azul e amarelo");
        assert_eq!(modifiers, GradientModifiers::default());
        assert_eq!(modifiers.prefix(), "");
    }

    #[test]
    fn shape_keywords() {
        assert_eq!(GradientModifiers::detect("radial azul").shape, GradientShape::Radial);
        assert_eq!(GradientModifiers::detect("circular azul").shape, GradientShape::Radial);
        assert_eq!(GradientModifiers::detect("conico azul").shape, GradientShape::Conic);
        assert_eq!(GradientModifiers::detect("cônico azul").shape, GradientShape::Conic);
        assert_eq!(GradientModifiers::detect("conic red").shape, GradientShape::Conic);
    }

    #[test]
    fn radial_wins_over_conic() {
        let modifiers = GradientModifiers::detect("conic radial red, blue");
        assert_eq!(modifiers.shape, GradientShape::Radial);
    }

    #[test]
    fn keywords_need_word_boundaries() {
        assert_eq!(GradientModifiers::detect("radiala").shape, GradientShape::Linear);
        assert!(!GradientModifiers::detect("repeatingly").repeating);
    }

    #[test]
    fn repeating_synonyms() {
        assert!(GradientModifiers::detect("repetindo azul").repeating);
        assert!(GradientModifiers::detect("azul repetido").repeating);
        assert_eq!(GradientModifiers::detect("repeating red").prefix(), "repeating-");
    }

    #[test]
    fn angle_forms() {
        assert_eq!(GradientModifiers::detect("azul 45deg").angle, Some(45.0));
        assert_eq!(GradientModifiers::detect("azul 45 deg").angle, Some(45.0));
        assert_eq!(GradientModifiers::detect("azul 45°").angle, Some(45.0));
        assert_eq!(GradientModifiers::detect("azul 22.5 degrees").angle, Some(22.5));
        assert_eq!(GradientModifiers::detect("azul -30 graus").angle, Some(-30.0));
        assert_eq!(GradientModifiers::detect("1 grau azul").angle, Some(1.0));
        assert_eq!(GradientModifiers::detect("azul e verde").angle, None);
    }

    #[test]
    fn word_angle_overrides_degree_angle() {
        let modifiers = GradientModifiers::detect("azul 10deg verde 20 graus");
        assert_eq!(modifiers.angle, Some(20.0));
    }

    #[test]
    fn first_angle_of_each_form_is_used() {
        assert_eq!(GradientModifiers::detect("10deg azul 20deg").angle, Some(10.0));
    }

    #[test]
    fn hue_angles_are_not_gradient_angles() {
        assert_eq!(GradientModifiers::detect("hsl(200deg 50% 40%) e azul").angle, None);
        assert_eq!(GradientModifiers::detect("hsl( 200deg 50% 40%) e azul").angle, None);
        assert_eq!(GradientModifiers::detect("oklch(70% 0.1 250deg) e azul").angle, None);
        assert_eq!(GradientModifiers::detect("lch(50% 30 90 graus), azul 15deg").angle, Some(15.0));
    }

    #[test]
    fn keywords_inside_parentheses_are_ignored() {
        assert_eq!(GradientModifiers::detect("azul (radial) verde").shape, GradientShape::Linear);
    }

    #[test]
    fn strip_hints_removes_keywords_and_angles() {
        let stripped = strip_hints("radial vermelho, verde, azul 45 graus");
        assert_eq!(stripped.split_whitespace().collect::<Vec<_>>(), ["vermelho,", "verde,", "azul"]);

        let stripped = strip_hints("azul,45deg,verde");
        assert_eq!(stripped.replace(' ', ""), "azul,,verde");
    }

    #[test]
    fn strip_hints_keeps_hue_angles() {
        assert_eq!(strip_hints("hsl(200deg 50% 40%)"), "hsl(200deg 50% 40%)");
        assert_eq!(strip_hints("hsl( 200deg 50% 40%)"), "hsl( 200deg 50% 40%)");
        assert_eq!(strip_hints("oklch(70% 0.1 250deg)"), "oklch(70% 0.1 250deg)");
        assert_eq!(strip_hints("lch(50% 30 90°)"), "lch(50% 30 90°)");
    }

    #[test]
    fn strip_hints_outside_parentheses_only() {
        let stripped = strip_hints("radial oklch(70% 0.1 250deg), azul 45 graus");
        assert_eq!(
            stripped.split_whitespace().collect::<Vec<_>>(),
            ["oklch(70%", "0.1", "250deg),", "azul"]
        );
    }

    #[test]
    fn masking_keeps_byte_offsets() {
        let text = "azul (lilás) 30deg";
        let masked = mask_nested(text);
        assert_eq!(masked.len(), text.len());
        assert_eq!(&masked[..6], "azul (");
        assert!(masked.ends_with(") 30deg"));
    }

    #[test]
    fn angle_formatting() {
        assert_eq!(format_angle(90.0), "90");
        assert_eq!(format_angle(22.5), "22.5");
        assert_eq!(format_angle(-45.0), "-45");
        assert_eq!(format_angle(-0.0), "0");
    }
}
