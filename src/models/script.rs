//! Metric types produced by the script analyzer.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// One detected function-like declaration. `length` always equals
/// `end_line - start_line + 1`; lines are 1-based.
pub struct FunctionRecord {
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
    pub length: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
/// An event registration site with a quoted event-name literal.
pub struct EventListener {
    pub event: String,
    pub line: usize,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
/// Script metrics bag. Averages and maxima are absent when no functions
/// were detected; `duplicate_patterns` is absent when zero.
pub struct ScriptMetrics {
    pub function_count: usize,
    pub functions: Vec<FunctionRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_function_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_function_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_function: Option<String>,
    pub global_variables: usize,
    pub global_constants: usize,
    pub event_listener_count: usize,
    pub event_listeners: Vec<EventListener>,
    pub try_catch_blocks: usize,
    pub max_nesting_depth: usize,
    pub cyclomatic_complexity: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_patterns: Option<usize>,
}
