//! Metric types produced by the stylesheet analyzer.

use serde::Serialize;

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Stylesheet metrics bag. All counts come from line/regex scanning,
/// not a CSS parse.
pub struct StylesheetMetrics {
    pub selector_count: usize,
    pub important_count: usize,
    /// Distinct custom-property names declared via `--name:`.
    pub custom_properties: usize,
    pub media_queries: usize,
    pub keyframes: usize,
    /// Distinct color literals found outside the `:root` block.
    pub hardcoded_colors: usize,
}
