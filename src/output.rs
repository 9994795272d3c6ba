//! Report rendering.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries
//! the full report with the per-function metric compacted; the human
//! form renders the overview table, metric blocks, issues, and score.

use crate::models::Severity;
use crate::report::{display_issues, Report};
use crate::utils::format_bytes;
use chrono::SecondsFormat;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the report in the requested format.
pub fn print_report(report: &Report, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_report_json(report)).unwrap()
        ),
        _ => print_human(report, use_colors(output)),
    }
}

fn print_human(report: &Report, color: bool) {
    let banner = "=".repeat(70);
    println!();
    println!("{}", banner);
    println!("  CODE ANALYSIS REPORT");
    println!("  {}", report.timestamp.format("%Y-%m-%d %H:%M:%S"));
    println!("{}", banner);

    println!("\n--- FILE OVERVIEW ---\n");
    println!("  {:<20} {:>8} {:>10}", "File", "Lines", "Size");
    println!("  {} {} {}", "-".repeat(20), "-".repeat(8), "-".repeat(10));
    for f in report.files.iter() {
        println!(
            "  {:<20} {:>8} {:>10}",
            f.name,
            f.lines,
            format_bytes(f.size)
        );
    }
    println!("  {} {} {}", "─".repeat(20), "-".repeat(8), "-".repeat(10));
    println!(
        "  {:<20} {:>8} {:>10}",
        "TOTAL",
        report.files.total_lines(),
        format_bytes(report.files.total_size())
    );

    if let Some(a) = &report.script {
        let m = &a.metrics;
        println!("\n--- SCRIPT METRICS ---\n");
        println!("  Functions:              {}", m.function_count);
        println!(
            "  Avg function length:    {} lines",
            m.avg_function_length.unwrap_or(0)
        );
        println!(
            "  Max function length:    {} lines ({})",
            m.max_function_length.unwrap_or(0),
            m.longest_function.as_deref().unwrap_or("N/A")
        );
        println!(
            "  Global variables:       {} mutable, {} constants",
            m.global_variables, m.global_constants
        );
        println!("  Event listeners:        {}", m.event_listener_count);
        println!("  try/catch blocks:       {}", m.try_catch_blocks);
        println!("  Max nesting depth:      {}", m.max_nesting_depth);
        println!(
            "  Cyclomatic complexity:   {} (total decision points)",
            m.cyclomatic_complexity
        );
        if let Some(n) = m.duplicate_patterns {
            println!("  Duplicate patterns:     {}", n);
        }

        if !m.functions.is_empty() {
            println!("\n  Functions by size:");
            let mut sorted: Vec<_> = m.functions.iter().collect();
            sorted.sort_by(|a, b| b.length.cmp(&a.length));
            for f in sorted.iter().take(10) {
                let bar = "#".repeat(f.length.min(50));
                println!("    {:<25} {:>4} lines  {}", f.name, f.length, bar);
            }
        }
    }

    if let Some(a) = &report.markup {
        let m = &a.metrics;
        println!("\n--- MARKUP METRICS ---\n");
        println!("  Total elements:         {}", m.total_elements);
        println!("  Form inputs:            {}", m.form_inputs);
        println!("  Scripts:                {}", m.scripts);
        println!("  Stylesheets:            {}", m.stylesheets);
        if !m.headings.is_empty() {
            let levels: Vec<String> = m.headings.iter().map(|h| format!("h{}", h)).collect();
            println!("  Heading levels:         {}", levels.join(" → "));
        }
    }

    if let Some(a) = &report.stylesheet {
        let m = &a.metrics;
        println!("\n--- STYLESHEET METRICS ---\n");
        println!("  Selectors:              {}", m.selector_count);
        println!("  Custom properties:      {}", m.custom_properties);
        println!("  !important:             {}", m.important_count);
        println!("  Media queries:          {}", m.media_queries);
        println!("  Keyframe animations:    {}", m.keyframes);
        println!(
            "  Hard-coded colors:      {} (outside :root)",
            m.hardcoded_colors
        );
    }

    println!("\n--- ISSUES ---\n");
    let s = &report.summary;
    println!(
        "  Found: {} errors, {} warnings, {} info\n",
        s.errors, s.warnings, s.infos
    );
    for tagged in display_issues(report) {
        let tag = severity_tag(tagged.issue.severity, color);
        println!("  {} [{}] {}", tag, tagged.file, tagged.issue.message);
        if let Some(details) = &tagged.issue.details {
            for line in details.split('\n') {
                println!("         {}", line);
            }
        }
    }

    println!("\n--- SUMMARY ---\n");
    let filled = ((s.score as f64) / 2.0).round() as usize;
    let score_bar = format!("{}{}", "█".repeat(filled), "░".repeat(50 - filled));
    println!("  Score: {}/100 ({})", s.score, s.grade);
    println!("  {}", score_bar);

    println!("\n{}", banner);
    println!();
}

fn severity_tag(severity: Severity, color: bool) -> String {
    match severity {
        Severity::Error => {
            if color {
                "[ERROR]".red().bold().to_string()
            } else {
                "[ERROR]".to_string()
            }
        }
        Severity::Warning => {
            if color {
                "[WARN] ".yellow().bold().to_string()
            } else {
                "[WARN] ".to_string()
            }
        }
        Severity::Info => {
            if color {
                "[INFO] ".blue().bold().to_string()
            } else {
                "[INFO] ".to_string()
            }
        }
    }
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
///
/// Per-file facts are keyed by file name; absent analyses serialize as
/// null; the script `functions` metric is compacted to name/lines/start.
pub fn compose_report_json(report: &Report) -> JsonVal {
    let mut files = serde_json::Map::new();
    for f in report.files.iter() {
        files.insert(f.name.clone(), json!({ "lines": f.lines, "size": f.size }));
    }

    let script = match &report.script {
        Some(a) => {
            let mut v = serde_json::to_value(a).unwrap();
            if let Some(slot) = v.pointer_mut("/metrics/functions") {
                let compact: Vec<JsonVal> = a
                    .metrics
                    .functions
                    .iter()
                    .map(|f| json!({ "name": f.name, "lines": f.length, "start": f.start_line }))
                    .collect();
                *slot = JsonVal::Array(compact);
            }
            v
        }
        None => JsonVal::Null,
    };
    let markup = match &report.markup {
        Some(a) => serde_json::to_value(a).unwrap(),
        None => JsonVal::Null,
    };
    let stylesheet = match &report.stylesheet {
        Some(a) => serde_json::to_value(a).unwrap(),
        None => JsonVal::Null,
    };

    json!({
        "timestamp": report.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        "files": files,
        "script": script,
        "markup": markup,
        "stylesheet": stylesheet,
        "summary": serde_json::to_value(&report.summary).unwrap(),
    })
}
