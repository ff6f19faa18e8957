//! Color grammar: hex, named and functional colors.

use cssparser::{Parser, Token};

use super::named::is_named_color;
use super::{ValidationResult, is_angle_unit};

/// Color functions understood by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorFunction {
    Rgb,
    Hsl,
    Hwb,
    Lab,
    Lch,
    Oklab,
    Oklch,
}

impl ColorFunction {
    fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => Some(Self::Rgb),
            "hsl" | "hsla" => Some(Self::Hsl),
            "hwb" => Some(Self::Hwb),
            "lab" => Some(Self::Lab),
            "lch" => Some(Self::Lch),
            "oklab" => Some(Self::Oklab),
            "oklch" => Some(Self::Oklch),
            _ => None,
        }
    }

    /// Only `rgb()` and `hsl()` keep the comma-separated legacy syntax.
    fn allows_legacy_syntax(self) -> bool {
        matches!(self, Self::Rgb | Self::Hsl)
    }

    /// Index of the channel that takes a hue angle, if any.
    fn hue_channel(self) -> Option<usize> {
        match self {
            Self::Hsl | Self::Hwb => Some(0),
            Self::Lch | Self::Oklch => Some(2),
            Self::Rgb | Self::Lab | Self::Oklab => None,
        }
    }
}

/// Check whether a hash token body is a 3, 4, 6 or 8 digit hex color.
pub(crate) fn is_hex_digits(digits: &str) -> bool {
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Consume exactly one color from the parser.
pub(crate) fn parse_color<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, ()> {
    let token = parser.next()?.clone();

    match token {
        Token::Hash(ref digits) | Token::IDHash(ref digits) if is_hex_digits(digits) => Ok(()),
        Token::Ident(ref name) if is_named_color(name) => Ok(()),
        Token::Function(ref name) => {
            let Some(function) = ColorFunction::from_name(name) else {
                return Err(parser.new_custom_error(()));
            };
            parser.parse_nested_block(|p| parse_color_arguments(p, function))
        }
        _ => Err(parser.new_custom_error(())),
    }
}

/// Parse the arguments of a color function, in either legacy or modern form.
fn parse_color_arguments<'i>(
    parser: &mut Parser<'i, '_>,
    function: ColorFunction,
) -> ValidationResult<'i, ()> {
    parse_channel(parser, function, 0)?;

    if parser.try_parse(|p| p.expect_comma()).is_ok() {
        // rgb(r, g, b[, a])
        if !function.allows_legacy_syntax() {
            return Err(parser.new_custom_error(()));
        }
        parse_channel(parser, function, 1)?;
        parser.expect_comma()?;
        parse_channel(parser, function, 2)?;
        if parser.try_parse(|p| p.expect_comma()).is_ok() {
            parse_alpha(parser)?;
        }
    } else {
        // rgb(r g b[ / a])
        parse_channel(parser, function, 1)?;
        parse_channel(parser, function, 2)?;
        if parser.try_parse(|p| p.expect_delim('/')).is_ok() {
            parse_alpha(parser)?;
        }
    }

    Ok(())
}

fn parse_channel<'i>(
    parser: &mut Parser<'i, '_>,
    function: ColorFunction,
    index: usize,
) -> ValidationResult<'i, ()> {
    let is_hue = function.hue_channel() == Some(index);
    let token = parser.next()?.clone();

    match token {
        Token::Number { .. } | Token::Percentage { .. } => Ok(()),
        Token::Dimension { ref unit, .. } if is_hue && is_angle_unit(unit) => Ok(()),
        Token::Ident(ref ident) if ident.eq_ignore_ascii_case("none") => Ok(()),
        _ => Err(parser.new_custom_error(())),
    }
}

fn parse_alpha<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, ()> {
    let token = parser.next()?.clone();

    match token {
        Token::Number { .. } | Token::Percentage { .. } => Ok(()),
        Token::Ident(ref ident) if ident.eq_ignore_ascii_case("none") => Ok(()),
        _ => Err(parser.new_custom_error(())),
    }
}

#[cfg(test)]
mod tests {
    use super::super::is_valid_color;
    use super::*;

    #[test]
    fn hex_digit_counts() {
        assert!(is_hex_digits("fff"));
        assert!(is_hex_digits("ffff"));
        assert!(is_hex_digits("3b82f6"));
        assert!(is_hex_digits("3b82f6cc"));
        assert!(!is_hex_digits("fffff"));
        assert!(!is_hex_digits("zzz"));
    }

    #[test]
    fn hex_colors() {
        assert!(is_valid_color("#0f0"));
        assert!(is_valid_color("#ef4444"));
        assert!(is_valid_color("#3B82F6"));
        assert!(is_valid_color("#00000080"));
        assert!(!is_valid_color("#zzz"));
        assert!(!is_valid_color("#12345"));
    }

    #[test]
    fn legacy_functions() {
        assert!(is_valid_color("rgb(10,120,30)"));
        assert!(is_valid_color("rgba(10, 120, 30, 0.5)"));
        assert!(is_valid_color("rgb(100%, 50%, 0%)"));
        assert!(is_valid_color("hsl(200, 50%, 40%)"));
        assert!(is_valid_color("hsla(200deg, 50%, 40%, 50%)"));
        assert!(!is_valid_color("rgb(10, 120)"));
        assert!(!is_valid_color("rgb(10, 120, 30, 1, 1)"));
        assert!(!is_valid_color("lab(50, 20, 30)"));
    }

    #[test]
    fn modern_functions() {
        assert!(is_valid_color("rgb(10 120 30)"));
        assert!(is_valid_color("rgb(10 120 30 / 50%)"));
        assert!(is_valid_color("hsl(120deg 40% 50% / 0.3)"));
        assert!(is_valid_color("oklch(70% 0.1 250)"));
        assert!(is_valid_color("lch(50% 30 90deg)"));
        assert!(!is_valid_color("rgb(10 120deg 30)"));
        assert!(!is_valid_color("rgb(10 120 30 /)"));
    }

    #[test]
    fn rejects_non_colors() {
        assert!(!is_valid_color("vermelho"));
        assert!(!is_valid_color("red blue"));
        assert!(!is_valid_color("rgb(10, 120, 30"));
        assert!(!is_valid_color("foo(1, 2, 3)"));
    }
}
