//! Metric types produced by the markup analyzer.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Markup metrics bag. `labeled_inputs` sums for-based and wrap-based
/// label counts without deduplication and may exceed `form_inputs`.
pub struct MarkupMetrics {
    pub element_counts: BTreeMap<String, usize>,
    pub total_elements: usize,
    pub form_inputs: usize,
    pub labeled_inputs: usize,
    pub scripts: usize,
    pub stylesheets: usize,
    /// Heading levels in document order (1..=6).
    pub headings: Vec<u32>,
}
