//! Shared data models for analysis results and report summaries.

pub mod markup;
pub mod script;
pub mod stylesheet;

use serde::Serialize;

pub use markup::MarkupMetrics;
pub use script::{EventListener, FunctionRecord, ScriptMetrics};
pub use stylesheet::StylesheetMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Issue severity, used for display ranking and score deduction.
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Display rank: errors first, then warnings, then infos.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Error => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// A single heuristic finding. The message is fully interpolated at
/// creation time; `details` carries preformatted multi-line context.
pub struct Issue {
    pub severity: Severity,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Issue {
    pub fn new(severity: Severity, category: &str, message: String) -> Self {
        Issue {
            severity,
            category: category.to_string(),
            message,
            details: None,
            line: None,
        }
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

#[derive(Debug, Serialize)]
/// The uniform analyzer contract: a typed metrics bag plus the issues
/// found, in detector definition order. Absent sources produce no
/// `Analysis` at all rather than an empty one.
pub struct Analysis<M> {
    pub metrics: M,
    pub issues: Vec<Issue>,
}

pub type ScriptAnalysis = Analysis<ScriptMetrics>;
pub type MarkupAnalysis = Analysis<MarkupMetrics>;
pub type StylesheetAnalysis = Analysis<StylesheetMetrics>;

#[derive(Debug, Serialize)]
/// Aggregated score and severity counts used by printers.
pub struct Summary {
    pub score: u32,
    pub grade: char,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}
