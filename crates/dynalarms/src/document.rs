//! Reading and writing service documents.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{CliError, Result};

/// Path that selects stdin for input and stdout for output.
pub const STDIO_PATH: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Parses a service document from a string.
pub fn parse_service(source: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(source).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a service document from `path`, or from stdin when `path` is "-".
pub fn read_service(path: &Path) -> Result<Value> {
    let read_error = |source| CliError::Read {
        path: path.to_path_buf(),
        source,
    };
    debug!(path = %path.display(), "Reading service document");

    let source = if is_stdio(path) {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(read_error)?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(read_error)?
    };

    parse_service(&source, path)
}

/// Renders a document as pretty-printed JSON with a trailing newline.
pub fn render(document: &Value) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(document)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Writes a document to `path`, or to stdout when `path` is `None` or "-".
pub fn write_document(document: &Value, path: Option<&Path>) -> Result<()> {
    let rendered = render(document)?;
    debug!(bytes = rendered.len(), "Writing service document");

    match path {
        Some(path) if !is_stdio(path) => {
            std::fs::write(path, rendered).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| CliError::Write {
                    path: PathBuf::from(STDIO_PATH),
                    source,
                })
        }
    }
}
