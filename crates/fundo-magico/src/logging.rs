//! Tracing targets used by the parser.
//!
//! The crate only emits `tracing` events; installing a subscriber is up to the
//! application. To see the parse pipeline step by step:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("fundo_magico=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Background parser target (modifiers, tokens, assembly).
    pub const PARSER: &str = "fundo_magico::parser";
    /// Color resolution target.
    pub const COLOR: &str = "fundo_magico::color";
    /// Syntax validation target.
    pub const VALIDATE: &str = "fundo_magico::validate";
    /// Configuration loading target.
    pub const CONFIG: &str = "fundo_magico::config";
}
