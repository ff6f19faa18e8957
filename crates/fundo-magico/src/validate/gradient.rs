//! Gradient grammar for `linear-`, `radial-` and `conic-gradient()` and their
//! repeating forms.

use cssparser::{Parser, Token};

use super::color::parse_color;
use super::{ValidationResult, is_length_unit, parse_angle, parse_angle_percentage,
    parse_length_percentage};

/// The gradient families accepted as background layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GradientKind {
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    fn from_function_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        let name = name.strip_prefix("repeating-").unwrap_or(&name);
        match name {
            "linear-gradient" => Some(Self::Linear),
            "radial-gradient" => Some(Self::Radial),
            "conic-gradient" => Some(Self::Conic),
            _ => None,
        }
    }
}

/// What a single comma-separated gradient argument turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Argument {
    /// Direction, shape or origin, only allowed first.
    Prelude,
    /// A color with up to two positions.
    Stop,
    /// A bare position between two stops.
    Hint,
}

/// Consume exactly one gradient function from the parser.
pub(crate) fn parse_gradient<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, ()> {
    let token = parser.next()?.clone();

    let Token::Function(ref name) = token else {
        return Err(parser.new_custom_error(()));
    };
    let Some(kind) = GradientKind::from_function_name(name) else {
        return Err(parser.new_custom_error(()));
    };

    parser.parse_nested_block(|p| parse_gradient_arguments(p, kind))
}

fn parse_gradient_arguments<'i>(
    parser: &mut Parser<'i, '_>,
    kind: GradientKind,
) -> ValidationResult<'i, ()> {
    let mut index = 0usize;
    let arguments = parser.parse_comma_separated(|p| {
        let argument = parse_argument(p, kind, index == 0);
        index += 1;
        argument
    })?;

    if is_well_formed(&arguments) {
        Ok(())
    } else {
        Err(parser.new_custom_error(()))
    }
}

/// At least two stops, stops at both ends, and no two hints in a row.
fn is_well_formed(arguments: &[Argument]) -> bool {
    let list = match arguments.split_first() {
        Some((Argument::Prelude, rest)) => rest,
        _ => arguments,
    };

    let stops = list.iter().filter(|a| **a == Argument::Stop).count();

    stops >= 2
        && list.first() == Some(&Argument::Stop)
        && list.last() == Some(&Argument::Stop)
        && list.iter().all(|a| *a != Argument::Prelude)
        && list
            .windows(2)
            .all(|pair| !(pair[0] == Argument::Hint && pair[1] == Argument::Hint))
}

fn parse_argument<'i>(
    parser: &mut Parser<'i, '_>,
    kind: GradientKind,
    first: bool,
) -> ValidationResult<'i, Argument> {
    if first && parser.try_parse(|p| parse_complete_prelude(p, kind)).is_ok() {
        return Ok(Argument::Prelude);
    }
    if parser.try_parse(|p| parse_color_stop(p, kind)).is_ok() {
        return Ok(Argument::Stop);
    }

    parse_stop_position(parser, kind)?;
    Ok(Argument::Hint)
}

fn parse_complete_prelude<'i>(
    parser: &mut Parser<'i, '_>,
    kind: GradientKind,
) -> ValidationResult<'i, ()> {
    match kind {
        GradientKind::Linear => parse_linear_prelude(parser)?,
        GradientKind::Radial => parse_radial_prelude(parser)?,
        GradientKind::Conic => parse_conic_prelude(parser)?,
    }
    parser.expect_exhausted()?;
    Ok(())
}

fn parse_color_stop<'i>(parser: &mut Parser<'i, '_>, kind: GradientKind) -> ValidationResult<'i, ()> {
    parse_color(parser)?;

    for _ in 0..2 {
        if parser.try_parse(|p| parse_stop_position(p, kind)).is_err() {
            break;
        }
    }

    parser.expect_exhausted()?;
    Ok(())
}

fn parse_stop_position<'i>(
    parser: &mut Parser<'i, '_>,
    kind: GradientKind,
) -> ValidationResult<'i, ()> {
    match kind {
        GradientKind::Conic => parse_angle_percentage(parser),
        GradientKind::Linear | GradientKind::Radial => parse_length_percentage(parser),
    }
}

/// `<angle>` or `to <side> [<side>]`.
fn parse_linear_prelude<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, ()> {
    if parser.try_parse(|p| parse_angle(p)).is_ok() {
        return Ok(());
    }

    parser.expect_ident_matching("to")?;
    let first = parse_side(parser)?;
    if let Ok(second) = parser.try_parse(|p| parse_side(p))
        && second == first
    {
        return Err(parser.new_custom_error(()));
    }
    Ok(())
}

/// Whether a side keyword runs along the horizontal or the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

fn parse_side<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, Axis> {
    let token = parser.next()?.clone();

    if let Token::Ident(ref ident) = token {
        match ident.to_ascii_lowercase().as_str() {
            "left" | "right" => return Ok(Axis::Horizontal),
            "top" | "bottom" => return Ok(Axis::Vertical),
            _ => {}
        }
    }
    Err(parser.new_custom_error(()))
}

/// Shape and size in any order, optionally followed by `at <position>`.
fn parse_radial_prelude<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, ()> {
    let mut components = 0usize;
    let mut lengths = 0usize;

    loop {
        if parser.try_parse(|p| p.expect_ident_matching("at")).is_ok() {
            return parse_position(parser);
        }
        if parser.is_exhausted() {
            break;
        }

        let token = parser.next()?.clone();
        match token {
            Token::Ident(ref ident) if is_radial_keyword(ident) => {}
            Token::Percentage { .. } => lengths += 1,
            Token::Dimension { ref unit, .. } if is_length_unit(unit) => lengths += 1,
            Token::Number { value, .. } if value == 0.0 => lengths += 1,
            _ => return Err(parser.new_custom_error(())),
        }
        if lengths > 2 {
            return Err(parser.new_custom_error(()));
        }
        components += 1;
    }

    if components == 0 {
        return Err(parser.new_custom_error(()));
    }
    Ok(())
}

fn is_radial_keyword(ident: &str) -> bool {
    matches!(
        ident.to_ascii_lowercase().as_str(),
        "circle"
            | "ellipse"
            | "closest-side"
            | "closest-corner"
            | "farthest-side"
            | "farthest-corner"
    )
}

/// `[from <angle>] [at <position>]`, at least one of them.
fn parse_conic_prelude<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, ()> {
    let mut matched = false;

    if parser.try_parse(|p| p.expect_ident_matching("from")).is_ok() {
        parse_angle(parser)?;
        matched = true;
    }
    if parser.try_parse(|p| p.expect_ident_matching("at")).is_ok() {
        parse_position(parser)?;
        matched = true;
    }

    if matched {
        Ok(())
    } else {
        Err(parser.new_custom_error(()))
    }
}

/// One to four keywords or lengths, e.g. `center`, `left 20%`.
fn parse_position<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, ()> {
    let mut components = 0usize;

    while components < 4 && parser.try_parse(|p| parse_position_component(p)).is_ok() {
        components += 1;
    }

    if components == 0 {
        return Err(parser.new_custom_error(()));
    }
    Ok(())
}

fn parse_position_component<'i>(parser: &mut Parser<'i, '_>) -> ValidationResult<'i, ()> {
    if parser.try_parse(|p| parse_length_percentage(p)).is_ok() {
        return Ok(());
    }

    let token = parser.next()?.clone();
    match token {
        Token::Ident(ref ident)
            if matches!(
                ident.to_ascii_lowercase().as_str(),
                "left" | "right" | "top" | "bottom" | "center"
            ) =>
        {
            Ok(())
        }
        _ => Err(parser.new_custom_error(())),
    }
}
