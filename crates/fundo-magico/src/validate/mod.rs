//! Syntax validation for colors and background values.
//!
//! A grammar check built on the `cssparser` tokenizer. It accepts the color
//! syntaxes that can appear in user input (hex, named colors, `rgb()`,
//! `hsl()` and the CSS Color 4 functions) and the gradient functions the
//! parser emits or passes through. It does not resolve values; it only answers
//! whether a string is structurally acceptable as a `background` value.
//!
//! # Example
//!
//! ```
//! use fundo_magico::validate::{is_valid_background, is_valid_color};
//!
//! assert!(is_valid_color("#ef4444"));
//! assert!(is_valid_color("rgb(10, 120, 30)"));
//! assert!(!is_valid_color("#zzz"));
//!
//! assert!(is_valid_background("linear-gradient(90deg, #3b82f6, #ffd900)"));
//! assert!(!is_valid_background("linear-gradient(90deg, red"));
//! ```

mod color;
mod gradient;
mod named;

use cssparser::{ParseError, Parser, ParserInput, Token};

pub use named::is_named_color;

pub(crate) use color::is_hex_digits;

/// Result of a grammar production. The error carries no payload; callers only
/// care whether the input was accepted.
pub(crate) type ValidationResult<'i, T> = std::result::Result<T, ParseError<'i, ()>>;

/// Check whether `value` is a single CSS color.
pub fn is_valid_color(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || !has_balanced_parentheses(value) {
        return false;
    }

    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let accepted = parser.parse_entirely(|p| color::parse_color(p)).is_ok();

    tracing::trace!(target: crate::logging::targets::VALIDATE, value, accepted, "color check");
    accepted
}

/// Check whether `value` is usable as a `background` declaration value.
///
/// Accepts either a single color or one or more comma-separated gradient
/// layers.
pub fn is_valid_background(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || !has_balanced_parentheses(value) {
        return false;
    }

    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let accepted = parser
        .parse_entirely(|p| {
            if p.try_parse(|p| parse_single_color(p)).is_ok() {
                return Ok(());
            }
            parse_gradient_layers(p)
        })
        .is_ok();

    tracing::trace!(target: crate::logging::targets::VALIDATE, value, accepted, "background check");
    accepted
}

fn parse_single_color<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, ()> {
    color::parse_color(parser)?;
    parser.expect_exhausted()?;
    Ok(())
}

fn parse_gradient_layers<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, ()> {
    parser.parse_comma_separated(|p| gradient::parse_gradient(p))?;
    Ok(())
}

/// The tokenizer silently closes unterminated blocks, so nesting is checked
/// up front.
fn has_balanced_parentheses(value: &str) -> bool {
    let mut depth = 0usize;

    for ch in value.chars() {
        match ch {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }

    depth == 0
}

pub(crate) fn is_angle_unit(unit: &str) -> bool {
    matches!(
        unit.to_ascii_lowercase().as_str(),
        "deg" | "grad" | "rad" | "turn"
    )
}

pub(crate) fn is_length_unit(unit: &str) -> bool {
    matches!(
        unit.to_ascii_lowercase().as_str(),
        "px" | "em" | "rem" | "ex" | "ch" | "lh" | "vw" | "vh" | "vmin" | "vmax" | "cm" | "mm"
            | "q" | "in" | "pt" | "pc"
    )
}

/// `<angle>`; a bare `0` is also accepted.
pub(crate) fn parse_angle<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, ()> {
    let token = parser.next()?.clone();

    match token {
        Token::Dimension { ref unit, .. } if is_angle_unit(unit) => Ok(()),
        Token::Number { value, .. } if value == 0.0 => Ok(()),
        _ => Err(parser.new_custom_error(())),
    }
}

/// `<angle> | <percentage>`, used by conic color stops.
pub(crate) fn parse_angle_percentage<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, ()> {
    if parser.try_parse(|p| parse_angle(p)).is_ok() {
        return Ok(());
    }

    let token = parser.next()?.clone();
    match token {
        Token::Percentage { .. } => Ok(()),
        _ => Err(parser.new_custom_error(())),
    }
}

/// `<length> | <percentage>`; a bare `0` is also accepted.
pub(crate) fn parse_length_percentage<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, ()> {
    let token = parser.next()?.clone();

    match token {
        Token::Percentage { .. } => Ok(()),
        Token::Dimension { ref unit, .. } if is_length_unit(unit) => Ok(()),
        Token::Number { value, .. } if value == 0.0 => Ok(()),
        _ => Err(parser.new_custom_error(())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_parentheses() {
        assert!(has_balanced_parentheses("rgb(1, 2, 3)"));
        assert!(has_balanced_parentheses("linear-gradient(red, rgb(1 2 3))"));
        assert!(!has_balanced_parentheses("rgb(1, 2, 3"));
        assert!(!has_balanced_parentheses(")("));
    }

    #[test]
    fn units_ignore_case() {
        assert!(is_angle_unit("DEG"));
        assert!(is_angle_unit("turn"));
        assert!(!is_angle_unit("px"));
        assert!(is_length_unit("PX"));
        assert!(!is_length_unit("deg"));
    }

    #[test]
    fn background_accepts_plain_colors() {
        assert!(is_valid_background("red"));
        assert!(is_valid_background("#ef4444"));
        assert!(is_valid_background("  hsl(200, 50%, 40%)  "));
    }

    #[test]
    fn background_rejects_garbage() {
        assert!(!is_valid_background(""));
        assert!(!is_valid_background("   "));
        assert!(!is_valid_background("azul e amarelo"));
        assert!(!is_valid_background("red, blue"));
        assert!(!is_valid_background("url(foo.png)"));
    }
}
