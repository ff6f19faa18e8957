//! Result presentation: plain text, JSON, and file replacement.

use std::io::Write;
use std::path::{Path, PathBuf};

use fundo_magico::{Background, ParseError, Rendered};
use serde_json::{Value, json};
use thiserror::Error;

/// Errors raised while reading input or writing output.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to read input from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

impl OutputError {
    fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Plain-text form: markup, a blank line, then the style sheet.
pub fn plain(rendered: &Rendered) -> String {
    format!("{}\n\n{}\n", rendered.markup, rendered.style)
}

/// JSON object describing the outcome.
pub fn json_value(result: &Result<Background, ParseError>, rendered: &Rendered) -> Value {
    match result {
        Ok(background) => json!({
            "ok": true,
            "mode": background.mode(),
            "background": background.as_str(),
            "markup": rendered.markup,
            "style": rendered.style,
            "reason": Value::Null,
        }),
        Err(error) => json!({
            "ok": false,
            "mode": Value::Null,
            "background": Value::Null,
            "markup": rendered.markup,
            "style": rendered.style,
            "reason": error.to_string(),
        }),
    }
}

/// Replace the whole content of `path`.
///
/// The new content goes to a sibling file first and is renamed over the
/// target, so a reader never observes a half-written file.
pub fn replace_file(path: &Path, content: &str) -> Result<(), OutputError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let staging = path.with_file_name(format!(".{file_name}.fundo-tmp"));

    let written = std::fs::File::create(&staging).and_then(|mut file| {
        file.write_all(content.as_bytes())?;
        file.sync_all()
    });
    if let Err(err) = written {
        let _ = std::fs::remove_file(&staging);
        return Err(OutputError::write(path, err));
    }

    std::fs::rename(&staging, path).map_err(|err| {
        let _ = std::fs::remove_file(&staging);
        OutputError::write(path, err)
    })
}

/// Write `text` to `out`, reporting closed pipes as errors instead of
/// panicking.
pub fn emit(out: &mut impl Write, text: &str) -> Result<(), OutputError> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(OutputError::Stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundo_magico::{parse, render};

    #[test]
    fn plain_output_layout() {
        let rendered = Rendered {
            markup: "<div></div>".to_string(),
            style: "a{}".to_string(),
        };
        assert_eq!(plain(&rendered), "<div></div>\n\na{}\n");
    }

    #[test]
    fn json_for_success() {
        let result = parse("azul e amarelo");
        let rendered = render(&result.clone().unwrap().into_literal());
        let value = json_value(&result, &rendered);

        assert_eq!(value["ok"], true);
        assert_eq!(value["mode"], "gradient");
        assert_eq!(value["background"], "linear-gradient(90deg, #3b82f6, #ffd900)");
        assert!(value["reason"].is_null());
        assert_eq!(value["markup"], rendered.markup.as_str());
    }

    #[test]
    fn json_for_failure() {
        let result = parse("algo bonito");
        let error = result.clone().unwrap_err();
        let rendered = fundo_magico::Renderer::default().render_failure(&error);
        let value = json_value(&result, &rendered);

        assert_eq!(value["ok"], false);
        assert!(value["mode"].is_null());
        assert!(value["background"].is_null());
        assert_eq!(value["markup"], "—");
        assert_eq!(value["reason"], error.to_string());
        assert_eq!(value["style"], format!("/* {error} */"));
    }

    #[test]
    fn replace_file_overwrites_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.css");

        std::fs::write(&path, "old content that is longer than the new one").unwrap();
        replace_file(&path, "new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join(".preview.css.fundo-tmp").exists());
    }

    #[test]
    fn replace_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.html");

        let err = replace_file(&path, "x").unwrap_err();
        assert!(err.to_string().contains(&*path.to_string_lossy()));
    }

    #[test]
    fn emit_writes_everything() {
        let mut out = Vec::new();
        emit(&mut out, "—\n").unwrap();
        assert_eq!(out, "—\n".as_bytes());
    }
}
