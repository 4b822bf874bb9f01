//! Golden data shared by the workspace-level integration tests.

use std::path::Path;

use serde::Deserialize;

/// Contents of `tests/testdata/fibonacci_golden.json`.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub values: Vec<GoldenEntry>,
}

/// One known Fibonacci value. Small entries carry the full hex (and
/// decimal) form; large ones only the ends and the sizes.
#[derive(Debug, Deserialize)]
pub struct GoldenEntry {
    pub index: u64,
    pub bytes: usize,
    #[serde(default)]
    pub hex: Option<String>,
    #[serde(default)]
    pub hex_prefix: Option<String>,
    #[serde(default)]
    pub hex_suffix: Option<String>,
    #[serde(default)]
    pub decimal: Option<String>,
    #[serde(default)]
    pub decimal_digits: Option<usize>,
}

/// Load and parse a golden file.
pub fn load_golden(path: &Path) -> Result<GoldenData, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Load the bundled golden file.
pub fn load_default_golden() -> Result<GoldenData, Box<dyn std::error::Error>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/testdata/fibonacci_golden.json");
    load_golden(&path)
}
