//! Free-text background parsing.
//!
//! The pipeline runs in a fixed order: raw gradient pass-through, modifier
//! detection, noise removal and tokenization, per-token color resolution, and
//! finally assembly and validation of the background value.

mod background;
mod modifiers;
mod tokenize;

pub use background::{BackgroundParser, assemble_gradient, parse};
pub use modifiers::{GradientModifiers, strip_hints};
pub use tokenize::{name_token, remove_noise, tokenize};
