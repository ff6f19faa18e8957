//! Error types for the background parser.

use std::path::PathBuf;

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a piece of text could not be turned into a background.
///
/// The `Display` output of each variant is the user-facing message shown by
/// the presentation layer, so it is kept in the source locale.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Nothing but whitespace was submitted.
    #[error("Digite pelo menos uma cor.")]
    EmptyInput,

    /// The input looked like a raw gradient function but did not validate.
    #[error("Gradiente inválido. Verifique a sintaxe.")]
    InvalidGradient,

    /// Every fragment was a stop word or a separator.
    #[error("Não reconheci nenhuma cor.")]
    NoTokens,

    /// Fragments were found but none of them named a color.
    #[error("Nenhuma cor reconhecida. Exemplos: '#0f0', 'rgb(10,120,30)', 'marrom'.")]
    NoColors,

    /// A single resolved color failed final validation.
    #[error("Cor inválida.")]
    InvalidColor,

    /// The gradient assembled from resolved colors failed final validation.
    #[error("Gradiente gerado ficou inválido. Revise as cores.")]
    InvalidGeneratedGradient,
}

impl ParseError {
    /// The user-facing reason for this failure.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Errors raised while loading parser configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was not valid TOML or did not match the expected layout.
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A dictionary entry maps a name to something that is not a color.
    #[error("Invalid color for '{name}': '{value}'")]
    InvalidColor { name: String, value: String },

    /// A dictionary entry has an empty name.
    #[error("Color names must not be empty")]
    EmptyColorName,

    /// A dictionary name can never come out of tokenizing input text.
    #[error(
        "Color name '{name}' cannot be typed as a single color: it is made of connector words, gradient hints or separators"
    )]
    UnreachableColorName { name: String },

    /// A numeric setting is out of range.
    #[error("Invalid value for '{setting}': {message}")]
    InvalidSetting { setting: String, message: String },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid color error.
    pub fn invalid_color(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Create an invalid setting error.
    pub fn invalid_setting(setting: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSetting {
            setting: setting.into(),
            message: message.into(),
        }
    }
}

/// Top-level error for crate operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Text could not be parsed into a background.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_messages_are_user_facing() {
        assert_eq!(ParseError::EmptyInput.reason(), "Digite pelo menos uma cor.");
        assert_eq!(ParseError::NoTokens.to_string(), "Não reconheci nenhuma cor.");
        assert!(ParseError::NoColors.reason().starts_with("Nenhuma cor reconhecida."));
    }

    #[test]
    fn crate_error_is_transparent() {
        let err: Error = ParseError::InvalidColor.into();
        assert_eq!(err.to_string(), "Cor inválida.");
    }
}
