//! Stylesheet compilation
//!
//! The page's SCSS source is compiled once at startup and the plain CSS is
//! written next to it. The server keeps the compiled text in memory and
//! serves it from there.

use std::path::{Path, PathBuf};

/// Stylesheet errors
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("Failed to compile stylesheet {path:?}: {message}")]
    Compile { path: PathBuf, message: String },

    #[error("Failed to write stylesheet {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Compile an SCSS file to CSS
pub fn compile(source: &Path) -> Result<String, StyleError> {
    grass::from_path(source, &grass::Options::default()).map_err(|e| StyleError::Compile {
        path: source.to_path_buf(),
        message: e.to_string(),
    })
}

/// Compile `source` and write the CSS to `output`, returning the CSS
pub fn compile_to_file(source: &Path, output: &Path) -> Result<String, StyleError> {
    let css = compile(source)?;

    std::fs::write(output, &css).map_err(|source| StyleError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        source = %source.display(),
        output = %output.display(),
        bytes = css.len(),
        "Compiled stylesheet"
    );

    Ok(css)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCSS: &str = "$accent: red;\n.card {\n  .title { color: $accent; }\n}\n";

    #[test]
    fn test_compile_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("style.scss");
        let output = dir.path().join("style.css");
        std::fs::write(&source, SCSS).unwrap();

        let css = compile_to_file(&source, &output).unwrap();
        assert!(css.contains(".card .title"));
        assert!(css.contains("color: red"));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), css);
    }

    #[test]
    fn test_unwritable_output_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("style.scss");
        std::fs::write(&source, SCSS).unwrap();

        let output = dir.path().join("missing").join("style.css");
        let err = compile_to_file(&source, &output).unwrap_err();
        assert!(matches!(err, StyleError::Write { path, .. } if path == output));
    }

    #[test]
    fn test_invalid_scss_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("style.scss");
        let output = dir.path().join("style.css");
        std::fs::write(&source, ".card { color: $undefined; }").unwrap();

        let err = compile_to_file(&source, &output).unwrap_err();
        assert!(matches!(err, StyleError::Compile { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_source_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = compile(&dir.path().join("nope.scss")).unwrap_err();
        assert!(matches!(err, StyleError::Compile { .. }));
    }

    #[test]
    fn test_bundled_stylesheet_compiles() {
        let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/style.scss");
        let css = compile(&source).unwrap();
        assert!(css.contains(".card.half"));
        assert!(css.contains("@media"));
    }
}
