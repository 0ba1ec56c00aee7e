//! Code acquisition from files, stdin and the built-in sample.

use anyhow::{Context, Result};
use std::io::{IsTerminal, Read};
use std::path::Path;

use crate::domain::DEFAULT_FILENAME;

/// Snippet with a few deliberate problems, handy for trying the service out.
pub const SAMPLE_CODE: &str = r#"function calculateTotal(items) {
  let total = 0;
  for (let i = 0; i < items.length; i++) {
    total += items[i].price;
  }
  return total;
}

// Missing input validation
const result = calculateTotal([
  { name: "Item 1", price: "25" },
  { name: "Item 2", price: 30 }
]);"#;

/// Code plus the filename it should be reviewed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
    pub code: String,
    pub filename: String,
}

impl LoadedSource {
    pub fn sample() -> Self {
        Self {
            code: SAMPLE_CODE.to_string(),
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

/// Reads a source file; the filename is the path's last component.
pub fn load_source_file(path: &Path) -> Result<LoadedSource> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let code = String::from_utf8_lossy(&bytes).into_owned();
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string());

    Ok(LoadedSource { code, filename })
}

/// Try to read code from stdin (non-destructive check)
/// Returns Some(code) if stdin is piped and has content, None otherwise
pub fn try_read_stdin_source() -> Result<Option<String>> {
    if std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    match std::io::stdin().read_to_string(&mut buffer) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(buffer)),
        Err(_) => Ok(None),
    }
}

/// Reads all of stdin (blocking - assumes stdin has content)
pub fn read_stdin_source() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}
