//! Report aggregation: runs the three analyzers over the configured
//! files and folds their results into a single scored report.

use crate::config::FileSet;
use crate::models::{
    Issue, MarkupAnalysis, ScriptAnalysis, Severity, StylesheetAnalysis, Summary,
};
use crate::utils::{count_lines, file_size, read_source};
use crate::{markup, script, stylesheet};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
/// Line and size facts for one tracked file. Absent files report zero
/// for both; an empty-but-present file reports one line.
pub struct FileFacts {
    pub name: String,
    pub lines: usize,
    pub size: u64,
}

#[derive(Debug, Serialize)]
/// The three tracked files' facts, in script/markup/stylesheet order.
pub struct FileOverview {
    pub script: FileFacts,
    pub markup: FileFacts,
    pub stylesheet: FileFacts,
}

impl FileOverview {
    pub fn iter(&self) -> impl Iterator<Item = &FileFacts> {
        [&self.script, &self.markup, &self.stylesheet].into_iter()
    }

    pub fn total_lines(&self) -> usize {
        self.iter().map(|f| f.lines).sum()
    }

    pub fn total_size(&self) -> u64 {
        self.iter().map(|f| f.size).sum()
    }
}

#[derive(Debug, Serialize)]
/// One invocation's full analysis output. Built once, never persisted.
pub struct Report {
    pub timestamp: DateTime<Utc>,
    pub files: FileOverview,
    pub script: Option<ScriptAnalysis>,
    pub markup: Option<MarkupAnalysis>,
    pub stylesheet: Option<StylesheetAnalysis>,
    pub summary: Summary,
}

/// An issue paired with the file it came from, for display.
pub struct TaggedIssue<'a> {
    pub file: &'a str,
    pub issue: &'a Issue,
}

/// Read the configured files under `root` and analyze them. Returns
/// `None` when none of the three files can be read.
pub fn run_analysis(root: &Path, files: &FileSet) -> Option<Report> {
    let script_path = root.join(&files.script);
    let markup_path = root.join(&files.markup);
    let stylesheet_path = root.join(&files.stylesheet);

    let script_src = read_source(&script_path);
    let markup_src = read_source(&markup_path);
    let stylesheet_src = read_source(&stylesheet_path);
    // An empty file has nothing to analyze, so for the fatal all-absent
    // condition it counts the same as a missing one.
    let unusable = |s: &Option<String>| s.as_deref().map_or(true, str::is_empty);
    if unusable(&script_src) && unusable(&markup_src) && unusable(&stylesheet_src) {
        return None;
    }

    let overview = FileOverview {
        script: facts_for(&files.script, script_src.as_deref(), &script_path),
        markup: facts_for(&files.markup, markup_src.as_deref(), &markup_path),
        stylesheet: facts_for(&files.stylesheet, stylesheet_src.as_deref(), &stylesheet_path),
    };

    // The analyzers share no state, so joining them is observably
    // identical to running them in order.
    let (script_res, (markup_res, stylesheet_res)) = rayon::join(
        || script::analyze_script(script_src.as_deref()),
        || {
            rayon::join(
                || markup::analyze_markup(markup_src.as_deref()),
                || stylesheet::analyze_stylesheet(stylesheet_src.as_deref()),
            )
        },
    );

    Some(build_report(
        Utc::now(),
        overview,
        script_res,
        markup_res,
        stylesheet_res,
    ))
}

fn facts_for(name: &str, source: Option<&str>, path: &Path) -> FileFacts {
    FileFacts {
        name: name.to_string(),
        lines: source.map(count_lines).unwrap_or(0),
        size: file_size(path),
    }
}

/// Assemble a `Report` from already-computed analyses. Split out from
/// `run_analysis` so tests can fix the timestamp.
pub fn build_report(
    timestamp: DateTime<Utc>,
    files: FileOverview,
    script: Option<ScriptAnalysis>,
    markup: Option<MarkupAnalysis>,
    stylesheet: Option<StylesheetAnalysis>,
) -> Report {
    let mut errors = 0usize;
    let mut warnings = 0usize;
    let mut infos = 0usize;
    let all_issues = script
        .iter()
        .flat_map(|a| a.issues.iter())
        .chain(markup.iter().flat_map(|a| a.issues.iter()))
        .chain(stylesheet.iter().flat_map(|a| a.issues.iter()));
    for issue in all_issues {
        match issue.severity {
            Severity::Error => errors += 1,
            Severity::Warning => warnings += 1,
            Severity::Info => infos += 1,
        }
    }

    let score = compute_score(errors, warnings, infos);
    let summary = Summary {
        score,
        grade: grade_for(score),
        errors,
        warnings,
        infos,
    };
    Report {
        timestamp,
        files,
        script,
        markup,
        stylesheet,
        summary,
    }
}

/// Start at 100, deduct 10 per error, 3 per warning, 1 per info, and
/// clamp to 0..=100.
pub fn compute_score(errors: usize, warnings: usize, infos: usize) -> u32 {
    let deduction = (errors * 10 + warnings * 3 + infos) as i64;
    (100 - deduction).clamp(0, 100) as u32
}

pub fn grade_for(score: u32) -> char {
    match score {
        90..=100 => 'A',
        80..=89 => 'B',
        70..=79 => 'C',
        60..=69 => 'D',
        _ => 'F',
    }
}

/// All issues tagged with their file name, stably ordered by severity
/// rank only. Detection order is preserved within each severity.
pub fn display_issues(report: &Report) -> Vec<TaggedIssue<'_>> {
    let mut tagged: Vec<TaggedIssue<'_>> = Vec::new();
    if let Some(a) = &report.script {
        tagged.extend(a.issues.iter().map(|issue| TaggedIssue {
            file: report.files.script.name.as_str(),
            issue,
        }));
    }
    if let Some(a) = &report.markup {
        tagged.extend(a.issues.iter().map(|issue| TaggedIssue {
            file: report.files.markup.name.as_str(),
            issue,
        }));
    }
    if let Some(a) = &report.stylesheet {
        tagged.extend(a.issues.iter().map(|issue| TaggedIssue {
            file: report.files.stylesheet.name.as_str(),
            issue,
        }));
    }
    tagged.sort_by_key(|t| t.issue.severity.rank());
    tagged
}
