//! Color name dictionary and token resolution.

mod dictionary;
mod resolver;

pub use dictionary::{ColorDictionary, normalize_name};
pub use resolver::{ColorResolver, ColorSource, resolve};
