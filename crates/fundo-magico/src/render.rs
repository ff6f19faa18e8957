//! Markup and style generation for a background value.
//!
//! The output is a fixed two-block template: a full-page layer
//! (`#page-dynamic-bg`) and a preview box (`.bg-generated`) that share the same
//! background declaration. Gradients additionally get a slow horizontal sweep.

use std::fmt::Write as _;

use crate::config::RenderConfig;
use crate::error::ParseError;
use crate::types::BackgroundLiteral;

/// Markup placed in the page for the preview box.
pub const PREVIEW_MARKUP: &str = r#"<div class="bg-generated" aria-hidden="true"></div>"#;

/// Markup shown in place of the preview when parsing failed.
pub const FAILURE_MARKUP: &str = "—";

/// A markup/style pair ready to be placed in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// HTML for the preview box.
    pub markup: String,
    /// CSS for the page layer and the preview box.
    pub style: String,
}

/// Builds markup/style pairs from validated background values.
#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    animation_seconds: f64,
    preview_height_px: u32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl Renderer {
    /// Create a renderer from configuration.
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            animation_seconds: config.animation_seconds,
            preview_height_px: config.preview_height_px,
        }
    }

    /// Render a background value. Rendering the same value always yields the
    /// same output.
    pub fn render(&self, background: &BackgroundLiteral) -> Rendered {
        let animation = background.is_gradient().then(|| {
            format!(
                "background-size: 200% 100%; animation: bgSweep {}s ease-in-out infinite;",
                self.animation_seconds
            )
        });

        let mut style = String::new();

        style.push_str("/* Fundo da página (camada fixa #page-dynamic-bg) */\n");
        style.push_str("#page-dynamic-bg{\n");
        let _ = writeln!(style, "  background: {background};");
        if let Some(animation) = &animation {
            let _ = writeln!(style, "  {animation}");
        }
        style.push_str("}\n\n");

        style.push_str("/* Preview pequeno dentro do card */\n");
        style.push_str(".bg-generated{\n");
        let _ = writeln!(style, "  height: {}px;", self.preview_height_px);
        style.push_str("  border-radius: 16px;\n");
        let _ = writeln!(style, "  background: {background};");
        if let Some(animation) = &animation {
            let _ = writeln!(style, "  {animation}");
        }
        style.push_str("  box-shadow: inset 0 0 0 1px rgba(255,255,255,.06);\n");
        style.push_str("}\n\n");

        style.push_str("@keyframes bgSweep{\n");
        style.push_str("  0%,100%{ background-position: 0% 50%; }\n");
        style.push_str("  50%{    background-position: 100% 50%; }\n");
        style.push('}');

        Rendered {
            markup: PREVIEW_MARKUP.to_string(),
            style,
        }
    }

    /// Render the placeholder pair shown when parsing failed: no preview and
    /// the reason as a style-sheet comment.
    pub fn render_failure(&self, error: &ParseError) -> Rendered {
        Rendered {
            markup: FAILURE_MARKUP.to_string(),
            style: format!("/* {error} */"),
        }
    }
}

/// Render a background value with the default template settings.
///
/// ```
/// use fundo_magico::{parse, render};
///
/// let background = parse("azul e amarelo").unwrap().into_literal();
/// let rendered = render(&background);
///
/// assert_eq!(rendered.markup, r#"<div class="bg-generated" aria-hidden="true"></div>"#);
/// assert!(rendered.style.contains("background: linear-gradient(90deg, #3b82f6, #ffd900);"));
/// assert!(rendered.style.contains("animation: bgSweep 8s ease-in-out infinite;"));
/// ```
pub fn render(background: &BackgroundLiteral) -> Rendered {
    Renderer::default().render(background)
}
