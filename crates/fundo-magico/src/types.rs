//! Value types produced by the parser.

use std::fmt;

use crate::validate;

/// A single CSS color as it will be written into the style sheet, such as
/// `#ef4444`, `red` or `rgb(10, 120, 30)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorLiteral(String);

impl ColorLiteral {
    pub(crate) fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the literal text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the literal, returning the text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ColorLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColorLiteral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A complete `background` value that passed validation.
///
/// Either a plain color or one or more gradient layers. Values can only be
/// built through the parser or [`BackgroundLiteral::new`], both of which
/// validate first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BackgroundLiteral(String);

impl BackgroundLiteral {
    /// Validate `value` and wrap it.
    ///
    /// Returns `None` when the text is not an acceptable background value.
    ///
    /// ```
    /// use fundo_magico::BackgroundLiteral;
    ///
    /// assert!(BackgroundLiteral::new("linear-gradient(45deg, red, blue)").is_some());
    /// assert!(BackgroundLiteral::new("linear-gradient(45deg, red").is_none());
    /// ```
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        validate::is_valid_background(&value).then_some(Self(value))
    }

    pub(crate) fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the literal text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the value contains a gradient function.
    pub fn is_gradient(&self) -> bool {
        self.0.to_ascii_lowercase().contains("gradient(")
    }

    /// Consume the literal, returning the text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BackgroundLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BackgroundLiteral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ColorLiteral> for BackgroundLiteral {
    fn from(color: ColorLiteral) -> Self {
        Self(color.0)
    }
}

/// Gradient family selected from the input's hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientShape {
    /// `linear-gradient`, the default.
    #[default]
    Linear,
    /// `radial-gradient`.
    Radial,
    /// `conic-gradient`.
    Conic,
}

impl GradientShape {
    /// CSS function name without the `repeating-` prefix.
    pub fn function_name(self) -> &'static str {
        match self {
            Self::Linear => "linear-gradient",
            Self::Radial => "radial-gradient",
            Self::Conic => "conic-gradient",
        }
    }
}

/// Successful outcome of a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    /// One color was recognized.
    Solid(ColorLiteral),
    /// Several colors were recognized, or a gradient was typed verbatim.
    Gradient(BackgroundLiteral),
}

impl Background {
    /// Short label for the outcome, `"solid"` or `"gradient"`.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Solid(_) => "solid",
            Self::Gradient(_) => "gradient",
        }
    }

    /// The CSS text of the background value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Solid(color) => color.as_str(),
            Self::Gradient(value) => value.as_str(),
        }
    }

    /// Convert into a value ready for [`render`](crate::render::render).
    pub fn into_literal(self) -> BackgroundLiteral {
        match self {
            Self::Solid(color) => color.into(),
            Self::Gradient(value) => value,
        }
    }

    /// Borrowing form of [`Background::into_literal`].
    pub fn to_literal(&self) -> BackgroundLiteral {
        self.clone().into_literal()
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
