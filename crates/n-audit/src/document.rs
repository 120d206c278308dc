//! Theme document loading — JSONC in, role→hex map out.
//!
//! Theme files are JSON with `//` line comments sprinkled through them, so
//! loading is a two-step affair: strip the comments without touching string
//! literals, then decode with serde. Everything outside the `"colors"`
//! object is tolerated and ignored.
//!
//! Failures here are the fatal kind: a document that cannot be read or
//! decoded is a precondition failure, not something the report engine
//! degrades around.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// The theme's color roles: role key → hex color string.
///
/// Read-only for the lifetime of a run. Arbitrary keys may be missing —
/// the report engine treats absence as "skip", never as an error.
pub type ColorMap = BTreeMap<String, String>;

/// Fatal theme-document failures.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The file could not be read at all.
    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not valid JSON after comment stripping.
    #[error("invalid theme document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The subset of a theme document the auditor cares about. Every other
/// field (name, type, tokenColors, ...) deserializes to nowhere.
#[derive(Debug, Deserialize)]
struct ThemeDocument {
    #[serde(default)]
    colors: ColorMap,
}

/// Load a theme's color map from a JSONC file.
///
/// # Errors
///
/// Returns [`AuditError::Read`] if the file cannot be read and
/// [`AuditError::Decode`] if the comment-stripped text is not valid JSON.
pub fn load_theme(path: &Path) -> Result<ColorMap, AuditError> {
    let text = fs::read_to_string(path).map_err(|source| AuditError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_theme(&text)
}

/// Parse a theme's color map from JSONC text.
///
/// A document without a `"colors"` object yields an empty map — the report
/// will simply have nothing to say about it.
///
/// # Errors
///
/// Returns [`AuditError::Decode`] if the comment-stripped text is not
/// valid JSON.
pub fn parse_theme(text: &str) -> Result<ColorMap, AuditError> {
    let stripped = strip_line_comments(text);
    let doc: ThemeDocument = serde_json::from_str(&stripped)?;
    Ok(doc.colors)
}

/// Remove `//` line comments without corrupting string literals.
///
/// A `//` inside a JSON string (think `"https://..."`) is content, not a
/// comment, so the scan tracks string state — including `\"` escapes —
/// and only drops `//` through end-of-line when outside a string. The
/// newline itself survives, keeping serde's error line numbers aligned
/// with the source document.
#[must_use]
pub fn strip_line_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
                // An escape consumes the next char verbatim, so \" cannot
                // terminate the string.
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
        } else if ch == '"' {
            in_string = true;
            out.push(ch);
        } else if ch == '/' && chars.peek() == Some(&'/') {
            for dropped in chars.by_ref() {
                if dropped == '\n' {
                    out.push('\n');
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
