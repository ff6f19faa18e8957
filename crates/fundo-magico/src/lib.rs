//! Natural-language to CSS background parser.
//!
//! Turns free text such as `"azul e amarelo"` or
//! `"radial vermelho, verde, azul"` into a validated CSS background value and
//! the markup/style pair needed to show it:
//!
//! - **Color resolution**: Portuguese color names, hex and functional literals,
//!   and CSS named colors
//! - **Gradient hints**: shape (linear, radial, conic), repetition and angle
//! - **Pass-through**: gradient functions typed verbatim are validated and kept
//! - **Validation**: a self-contained grammar check for colors and gradients
//! - **Rendering**: a page layer and a preview box sharing the background
//!
//! # Example
//!
//! ```
//! use fundo_magico::prelude::*;
//!
//! let background = parse("azul e amarelo")?;
//! assert_eq!(background.as_str(), "linear-gradient(90deg, #3b82f6, #ffd900)");
//!
//! let rendered = render(&background.into_literal());
//! assert!(rendered.style.contains("#page-dynamic-bg"));
//! # Ok::<(), fundo_magico::ParseError>(())
//! ```

pub mod color;
pub mod config;
pub mod logging;
pub mod parser;
pub mod render;
pub mod validate;

mod error;
mod types;

pub use error::{ConfigError, Error, ParseError, Result};
pub use parser::{BackgroundParser, parse};
pub use render::{Rendered, Renderer, render};
pub use types::{Background, BackgroundLiteral, ColorLiteral, GradientShape};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color::{ColorDictionary, ColorResolver};
    pub use crate::config::{Config, RenderConfig};
    pub use crate::parser::{BackgroundParser, GradientModifiers, parse};
    pub use crate::render::{Rendered, Renderer, render};
    pub use crate::types::{Background, BackgroundLiteral, ColorLiteral, GradientShape};
    pub use crate::{ConfigError, ParseError};
}
