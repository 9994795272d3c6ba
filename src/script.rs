//! Script analyzer: function inventory, complexity metrics, and heuristic
//! issue detectors for C-family, brace-delimited source text.
//!
//! All detection is lexical. The brace-balance scanner does not understand
//! string literals, comments, or template braces, so function extents and
//! nesting depths are approximate. That limitation is intentional and the
//! tests pin the current behavior.

use crate::models::{
    Analysis, EventListener, FunctionRecord, Issue, ScriptAnalysis, ScriptMetrics, Severity,
};
use crate::utils::join_lines;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static FUNC_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:(?:async\s+)?function\s+(\w+)|(?:const|let|var)\s+(\w+)\s*=\s*(?:async\s+)?(?:function|\([^)]*\)\s*=>|\w+\s*=>))",
    )
    .unwrap()
});
static GLOBAL_VAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:let|var)\s+(\w+)").unwrap());
static GLOBAL_CONST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^const\s+(\w+)").unwrap());
static LOOSE_EQ_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^!=]==[^=]").unwrap());
static LOOSE_NEQ_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^!]!=[^=]").unwrap());
static ALERT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\balert\s*\(").unwrap());
static CONSOLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bconsole\.\w+\s*\(").unwrap());
static TRY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\btry\s*\{").unwrap());
static EVENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\.addEventListener\s*\(\s*['"](\w+)['"]"#).unwrap());
static IF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bif\s*\(").unwrap());
static ELSE_IF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\belse\s+if\s*\(").unwrap());
static FOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bfor\s*\(").unwrap());
static WHILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bwhile\s*\(").unwrap());
static SWITCH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bswitch\s*\(").unwrap());
static CASE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bcase\s+").unwrap());

/// Analyze script text. Returns `None` when the source is absent or empty.
///
/// Issues come back in detector definition order; severity-based display
/// ordering is applied later by the aggregator.
pub fn analyze_script(source: Option<&str>) -> Option<ScriptAnalysis> {
    let source = source?;
    if source.is_empty() {
        return None;
    }
    let lines: Vec<&str> = source.split('\n').collect();
    let mut issues: Vec<Issue> = Vec::new();
    let mut metrics = ScriptMetrics::default();

    let functions = extract_functions(&lines);
    metrics.function_count = functions.len();

    for f in functions.iter().filter(|f| f.length > 30) {
        issues.push(
            Issue::new(
                Severity::Warning,
                "complexity",
                format!(
                    "Function \"{}\" is {} lines long (line {})",
                    f.name, f.length, f.start_line
                ),
            )
            .at_line(f.start_line),
        );
    }

    if !functions.is_empty() {
        let total: usize = functions.iter().map(|f| f.length).sum();
        metrics.avg_function_length = Some((total as f64 / functions.len() as f64).round() as u32);
        metrics.max_function_length = functions.iter().map(|f| f.length).max();
        // Stable max-fold: replace only on strictly greater, so the first
        // of equally long functions wins.
        metrics.longest_function = functions
            .iter()
            .fold(None::<&FunctionRecord>, |best, f| match best {
                Some(b) if b.length >= f.length => Some(b),
                _ => Some(f),
            })
            .map(|f| f.name.clone());
    }
    metrics.functions = functions;

    // Global bindings are recognized at zero indentation only.
    let mut globals: Vec<(String, usize)> = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if let Some(caps) = GLOBAL_VAR_RE.captures(line) {
            globals.push((caps[1].to_string(), i + 1));
        }
        if GLOBAL_CONST_RE.is_match(line) {
            metrics.global_constants += 1;
        }
    }
    metrics.global_variables = globals.len();
    if globals.len() > 5 {
        let details = globals
            .iter()
            .map(|(name, line)| format!("  - {} (line {})", name, line))
            .collect::<Vec<_>>()
            .join("\n");
        issues.push(
            Issue::new(
                Severity::Warning,
                "globals",
                format!(
                    "{} mutable global variables detected (let/var). Consider encapsulating state.",
                    globals.len()
                ),
            )
            .with_details(details),
        );
    }

    let loose_eq_lines: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| LOOSE_EQ_RE.is_match(line) || LOOSE_NEQ_RE.is_match(line))
        .map(|(i, _)| i + 1)
        .collect();
    if !loose_eq_lines.is_empty() {
        issues.push(
            Issue::new(
                Severity::Info,
                "quality",
                format!(
                    "{} loose equality checks (== / !=) found",
                    loose_eq_lines.len()
                ),
            )
            .with_details(format!("Lines: {}", join_lines(&loose_eq_lines))),
        );
    }

    let sink_lines: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains(".innerHTML"))
        .map(|(i, _)| i + 1)
        .collect();
    if !sink_lines.is_empty() {
        // Name-based presence check only: an `esc` helper anywhere in the
        // source downgrades the severity.
        let has_esc = source.contains("function esc(");
        issues.push(
            Issue::new(
                if has_esc {
                    Severity::Info
                } else {
                    Severity::Warning
                },
                "security",
                format!(
                    "{} innerHTML assignments found{}",
                    sink_lines.len(),
                    if has_esc {
                        " (esc() helper detected)"
                    } else {
                        " — potential XSS risk"
                    }
                ),
            )
            .with_details(format!("Lines: {}", join_lines(&sink_lines))),
        );
    }

    let alert_lines: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| ALERT_RE.is_match(line))
        .map(|(i, _)| i + 1)
        .collect();
    if !alert_lines.is_empty() {
        issues.push(
            Issue::new(
                Severity::Info,
                "ux",
                format!(
                    "{} alert() calls — consider custom notification UI",
                    alert_lines.len()
                ),
            )
            .with_details(format!("Lines: {}", join_lines(&alert_lines))),
        );
    }

    let console_lines: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| CONSOLE_RE.is_match(line))
        .map(|(i, _)| i + 1)
        .collect();
    if !console_lines.is_empty() {
        issues.push(
            Issue::new(
                Severity::Info,
                "cleanup",
                format!("{} console.* calls found", console_lines.len()),
            )
            .with_details(format!("Lines: {}", join_lines(&console_lines))),
        );
    }

    let (max_depth, max_depth_line) = max_nesting(&lines);
    metrics.max_nesting_depth = max_depth;
    if max_depth > 5 {
        issues.push(
            Issue::new(
                Severity::Warning,
                "complexity",
                format!(
                    "Max nesting depth is {} (around line {}). Consider extracting helpers.",
                    max_depth, max_depth_line
                ),
            )
            .at_line(max_depth_line),
        );
    }

    metrics.try_catch_blocks = lines
        .iter()
        .filter(|line| TRY_RE.is_match(line) || line.trim() == "try {")
        .count();

    for (i, line) in lines.iter().enumerate() {
        if let Some(caps) = EVENT_RE.captures(line) {
            metrics.event_listeners.push(EventListener {
                event: caps[1].to_string(),
                line: i + 1,
            });
        }
    }
    metrics.event_listener_count = metrics.event_listeners.len();

    metrics.cyclomatic_complexity = cyclomatic_estimate(&lines);

    let patterns = duplicate_patterns(&lines);
    if !patterns.is_empty() {
        metrics.duplicate_patterns = Some(patterns.len());
        let details = patterns
            .iter()
            .take(5)
            .map(|(code, occurrences)| {
                let snippet: String = code.chars().take(80).collect();
                format!("  Lines {}: {}...", join_lines(occurrences), snippet)
            })
            .collect::<Vec<_>>()
            .join("\n");
        issues.push(
            Issue::new(
                Severity::Info,
                "duplication",
                format!("{} duplicate code patterns detected", patterns.len()),
            )
            .with_details(details),
        );
    }

    let magic = magic_numbers(&lines);
    if magic.len() > 3 {
        let details = magic
            .iter()
            .take(5)
            .map(|(value, line)| format!("  Line {}: {}", line, value))
            .collect::<Vec<_>>()
            .join("\n");
        issues.push(
            Issue::new(
                Severity::Info,
                "maintainability",
                format!("{} potential magic numbers found", magic.len()),
            )
            .with_details(details),
        );
    }

    Some(Analysis { metrics, issues })
}

/// Find function-like declarations and their extents.
///
/// From each start line, a forward character scan tracks a signed brace
/// counter and a `started` flag; the extent ends at the first line after
/// which the counter has returned to zero or below. A start line whose
/// braces never balance keeps its end at the start line (length 1).
fn extract_functions(lines: &[&str]) -> Vec<FunctionRecord> {
    let mut functions = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let Some(caps) = FUNC_START_RE.captures(line) else {
            continue;
        };
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let mut balance: i64 = 0;
        let mut started = false;
        let mut end = i;
        for (j, scan) in lines.iter().enumerate().skip(i) {
            for ch in scan.chars() {
                if ch == '{' {
                    balance += 1;
                    started = true;
                }
                if ch == '}' {
                    balance -= 1;
                }
            }
            if started && balance <= 0 {
                end = j;
                break;
            }
        }
        functions.push(FunctionRecord {
            name,
            start_line: i + 1,
            end_line: end + 1,
            length: end - i + 1,
        });
    }
    functions
}

/// File-global brace depth: maximum reached and the line where it first
/// peaked (strictly-greater update, so the earliest peak is reported).
fn max_nesting(lines: &[&str]) -> (usize, usize) {
    let mut depth: i64 = 0;
    let mut max_depth: i64 = 0;
    let mut max_line = 0usize;
    for (i, line) in lines.iter().enumerate() {
        for ch in line.chars() {
            if ch == '{' {
                depth += 1;
            }
            if ch == '}' {
                depth -= 1;
            }
        }
        if depth > max_depth {
            max_depth = depth;
            max_line = i + 1;
        }
    }
    (max_depth as usize, max_line)
}

/// Additive decision-point estimate: each detector contributes at most
/// one point per line, and a line can match several detectors. This is
/// a deliberate overcount relative to true cyclomatic complexity.
fn cyclomatic_estimate(lines: &[&str]) -> usize {
    let mut total = 0usize;
    for line in lines {
        let trimmed = line.trim();
        if IF_RE.is_match(trimmed) {
            total += 1;
        }
        if ELSE_IF_RE.is_match(trimmed) {
            total += 1;
        }
        if FOR_RE.is_match(trimmed) {
            total += 1;
        }
        if WHILE_RE.is_match(trimmed) {
            total += 1;
        }
        if SWITCH_RE.is_match(trimmed) {
            total += 1;
        }
        if CASE_RE.is_match(trimmed) {
            total += 1;
        }
        if trimmed.contains('?') && !trimmed.starts_with("//") {
            total += 1;
        }
        if trimmed.contains("||") {
            total += 1;
        }
        if trimmed.contains("&&") {
            total += 1;
        }
    }
    total
}

/// Group significant trimmed lines (longer than 40 chars, not
/// comment-like) by exact text; groups with two or more occurrences are
/// duplicate patterns, ordered by first occurrence.
fn duplicate_patterns(lines: &[&str]) -> Vec<(String, Vec<usize>)> {
    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.chars().count() > 40 && !trimmed.starts_with("//") && !trimmed.starts_with('*') {
            groups.entry(trimmed).or_default().push(i + 1);
        }
    }
    let mut patterns: Vec<(String, Vec<usize>)> = groups
        .into_iter()
        .filter(|(_, occurrences)| occurrences.len() > 1)
        .map(|(code, occurrences)| (code.to_string(), occurrences))
        .collect();
    patterns.sort_by_key(|(_, occurrences)| occurrences[0]);
    patterns
}

fn is_word_like(ch: char) -> bool {
    ch == '\'' || ch == '"' || ch == ':' || ch == '_' || ch.is_ascii_alphanumeric()
}

/// Integer literals of three or more digits, value over 100, whose
/// neighbors are not quotes, colons, or word characters. Lines containing
/// `const`, `max=`, or `min=` are skipped entirely; that exclusion list
/// is a fixed heuristic, not a tunable.
fn magic_numbers(lines: &[&str]) -> Vec<(u64, usize)> {
    let mut found = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with('*') {
            continue;
        }
        if trimmed.contains("const") || trimmed.contains("max=") || trimmed.contains("min=") {
            continue;
        }
        let chars: Vec<char> = trimmed.chars().collect();
        let mut pos = 0;
        while pos < chars.len() {
            if !chars[pos].is_ascii_digit() {
                pos += 1;
                continue;
            }
            let start = pos;
            while pos < chars.len() && chars[pos].is_ascii_digit() {
                pos += 1;
            }
            let prev_ok = start == 0 || !is_word_like(chars[start - 1]);
            let next_ok = pos == chars.len() || !is_word_like(chars[pos]);
            if pos - start >= 3 && prev_ok && next_ok {
                if let Ok(value) = chars[start..pos].iter().collect::<String>().parse::<u64>() {
                    if value > 100 {
                        found.push((value, i + 1));
                    }
                }
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues_in_category<'a>(analysis: &'a ScriptAnalysis, category: &str) -> Vec<&'a Issue> {
        analysis
            .issues
            .iter()
            .filter(|i| i.category == category)
            .collect()
    }

    #[test]
    fn test_analyze_absent_or_empty_source() {
        assert!(analyze_script(None).is_none());
        assert!(analyze_script(Some("")).is_none());
    }

    #[test]
    fn test_function_extraction_basic() {
        let src = "function render() {\n  draw();\n}\nconst load = async () => {\n  fetchAll();\n};\n";
        let result = analyze_script(Some(src)).unwrap();
        let funcs = &result.metrics.functions;
        assert_eq!(funcs.len(), 2);
        assert_eq!(funcs[0].name, "render");
        assert_eq!(funcs[0].start_line, 1);
        assert_eq!(funcs[0].end_line, 3);
        assert_eq!(funcs[0].length, 3);
        assert_eq!(funcs[1].name, "load");
        assert_eq!(funcs[1].length, 3);
    }

    #[test]
    fn test_function_extraction_is_idempotent() {
        let src = "function a() {\n  if (x) {\n    y();\n  }\n}\nlet cb = x => x;\n";
        let first = analyze_script(Some(src)).unwrap().metrics.functions;
        let second = analyze_script(Some(src)).unwrap().metrics.functions;
        assert_eq!(first, second);
    }

    #[test]
    fn test_indented_declaration_is_extracted() {
        // The start pattern tolerates leading whitespace; only global
        // bindings are restricted to column 0.
        let src = "class App {\n    function nested() {\n      tick();\n    }\n}\n";
        let metrics = analyze_script(Some(src)).unwrap().metrics;
        assert_eq!(metrics.function_count, 1);
        assert_eq!(metrics.functions[0].name, "nested");
        assert_eq!(metrics.functions[0].start_line, 2);
        assert_eq!(metrics.functions[0].length, 3);
    }

    #[test]
    fn test_unbalanced_function_keeps_length_one() {
        let src = "function broken() {\n  open();\n";
        let funcs = analyze_script(Some(src)).unwrap().metrics.functions;
        assert_eq!(funcs[0].start_line, 1);
        assert_eq!(funcs[0].end_line, 1);
        assert_eq!(funcs[0].length, 1);
    }

    #[test]
    fn test_longest_function_tie_break_prefers_first() {
        let src = "function first() {\n  a();\n}\nfunction second() {\n  b();\n}\n";
        let metrics = analyze_script(Some(src)).unwrap().metrics;
        assert_eq!(metrics.max_function_length, Some(3));
        assert_eq!(metrics.longest_function.as_deref(), Some("first"));
    }

    #[test]
    fn test_avg_function_length_rounds_to_nearest() {
        // Lengths 3 and 4 average to 3.5 and round up to 4.
        let src = "function a() {\n  x();\n}\nfunction b() {\n  y();\n  z();\n}\n";
        let metrics = analyze_script(Some(src)).unwrap().metrics;
        assert_eq!(metrics.avg_function_length, Some(4));
    }

    #[test]
    fn test_long_function_warning_at_31_lines() {
        let mut src = String::from("function bulky() {\n");
        for _ in 0..29 {
            src.push_str("  step();\n");
        }
        src.push('}');
        let result = analyze_script(Some(&src)).unwrap();
        assert_eq!(result.metrics.functions[0].length, 31);
        let complexity = issues_in_category(&result, "complexity");
        assert_eq!(complexity.len(), 1);
        assert_eq!(complexity[0].severity, Severity::Warning);
        assert_eq!(
            complexity[0].message,
            "Function \"bulky\" is 31 lines long (line 1)"
        );
        assert_eq!(complexity[0].line, Some(1));
    }

    #[test]
    fn test_exactly_30_lines_is_not_long() {
        let mut src = String::from("function fine() {\n");
        for _ in 0..28 {
            src.push_str("  step();\n");
        }
        src.push('}');
        let result = analyze_script(Some(&src)).unwrap();
        assert_eq!(result.metrics.functions[0].length, 30);
        assert!(issues_in_category(&result, "complexity").is_empty());
    }

    #[test]
    fn test_six_mutable_globals_trigger_warning() {
        let src = "let a = 1;\nlet b = 1;\nlet c = 1;\nvar d = 1;\nvar e = 1;\nlet f = 1;\n";
        let result = analyze_script(Some(src)).unwrap();
        assert_eq!(result.metrics.global_variables, 6);
        assert_eq!(result.metrics.global_constants, 0);
        let globals = issues_in_category(&result, "globals");
        assert_eq!(globals.len(), 1);
        assert!(globals[0]
            .message
            .starts_with("6 mutable global variables"));
        let details = globals[0].details.as_deref().unwrap();
        assert!(details.contains("  - a (line 1)"));
        assert!(details.contains("  - f (line 6)"));
    }

    #[test]
    fn test_five_globals_do_not_trigger() {
        let src = "let a = 1;\nlet b = 1;\nlet c = 1;\nlet d = 1;\nlet e = 1;\n";
        let result = analyze_script(Some(src)).unwrap();
        assert!(issues_in_category(&result, "globals").is_empty());
    }

    #[test]
    fn test_indented_declarations_are_not_global() {
        let src = "  let local = 1;\n\tvar tabbed = 2;\n";
        let result = analyze_script(Some(src)).unwrap();
        assert_eq!(result.metrics.global_variables, 0);
    }

    #[test]
    fn test_loose_equality_excludes_strict_operators() {
        let strict = analyze_script(Some("if (a === b) { c(); }\n")).unwrap();
        assert!(issues_in_category(&strict, "quality").is_empty());

        let loose = analyze_script(Some("if (a == b) { c(); }\nif (x != y) { z(); }\n")).unwrap();
        let quality = issues_in_category(&loose, "quality");
        assert_eq!(quality.len(), 1);
        assert_eq!(quality[0].message, "2 loose equality checks (== / !=) found");
        assert_eq!(quality[0].details.as_deref(), Some("Lines: 1, 2"));
    }

    #[test]
    fn test_inner_html_severity_downgrade_with_esc_helper() {
        let bare = analyze_script(Some("el.innerHTML = markup;\n")).unwrap();
        let security = issues_in_category(&bare, "security");
        assert_eq!(security[0].severity, Severity::Warning);
        assert!(security[0].message.contains("potential XSS risk"));

        let guarded = analyze_script(Some(
            "function esc(s) {\n  return s;\n}\nel.innerHTML = esc(markup);\n",
        ))
        .unwrap();
        let security = issues_in_category(&guarded, "security");
        assert_eq!(security[0].severity, Severity::Info);
        assert!(security[0].message.contains("esc() helper detected"));
    }

    #[test]
    fn test_alert_and_console_detectors() {
        let src = "alert('hi');\nconsole.log('dbg');\nconsole.error('bad');\n";
        let result = analyze_script(Some(src)).unwrap();
        let ux = issues_in_category(&result, "ux");
        assert_eq!(ux[0].message, "1 alert() calls — consider custom notification UI");
        let cleanup = issues_in_category(&result, "cleanup");
        assert_eq!(cleanup[0].message, "2 console.* calls found");
        assert_eq!(cleanup[0].details.as_deref(), Some("Lines: 2, 3"));
    }

    #[test]
    fn test_nesting_depth_metric_and_warning() {
        let shallow = analyze_script(Some("if (a) {\n  b();\n}\n")).unwrap();
        assert_eq!(shallow.metrics.max_nesting_depth, 1);

        let mut src = String::new();
        for _ in 0..6 {
            src.push_str("if (x) {\n");
        }
        src.push_str("deep();\n");
        for _ in 0..6 {
            src.push_str("}\n");
        }
        let deep = analyze_script(Some(&src)).unwrap();
        assert_eq!(deep.metrics.max_nesting_depth, 6);
        let warning = deep
            .issues
            .iter()
            .find(|i| i.message.starts_with("Max nesting depth"))
            .unwrap();
        assert_eq!(warning.severity, Severity::Warning);
        assert_eq!(warning.line, Some(6));
    }

    #[test]
    fn test_try_blocks_and_event_listeners_are_metrics_only() {
        let src = "try {\n  risky();\n} catch (e) {\n}\nbtn.addEventListener('click', onClick);\nwin.addEventListener(\"resize\", onResize);\n";
        let result = analyze_script(Some(src)).unwrap();
        assert_eq!(result.metrics.try_catch_blocks, 1);
        assert_eq!(result.metrics.event_listener_count, 2);
        assert_eq!(result.metrics.event_listeners[0].event, "click");
        assert_eq!(result.metrics.event_listeners[0].line, 5);
        assert_eq!(result.metrics.event_listeners[1].event, "resize");
        assert!(result
            .issues
            .iter()
            .all(|i| i.category != "ux" || i.message.contains("alert")));
    }

    #[test]
    fn test_cyclomatic_estimate_is_additive_per_line() {
        // One line matching if + && + ternary counts three points.
        let src = "if (a && b) { c = d ? e : f; }\n";
        let result = analyze_script(Some(src)).unwrap();
        assert_eq!(result.metrics.cyclomatic_complexity, 3);
    }

    #[test]
    fn test_duplicate_patterns_report_first_five() {
        let long_line = "const payload = buildRequestPayload(record, options, flags);";
        let src = format!("{}\nother();\n{}\n", long_line, long_line);
        let result = analyze_script(Some(&src)).unwrap();
        assert_eq!(result.metrics.duplicate_patterns, Some(1));
        let dup = issues_in_category(&result, "duplication");
        assert_eq!(dup[0].message, "1 duplicate code patterns detected");
        let details = dup[0].details.as_deref().unwrap();
        assert!(details.starts_with("  Lines 1, 3: "));
        assert!(details.ends_with("..."));
    }

    #[test]
    fn test_magic_numbers_respect_exclusions() {
        // Four qualifying literals push past the > 3 threshold.
        let src = "setTimeout(tick, 1500);\ndelay(2500);\nwait(3500);\npause(4500);\nconst LIMIT = 9999;\nobj = { 200: 'key' };\n";
        let result = analyze_script(Some(src)).unwrap();
        let magic = issues_in_category(&result, "maintainability");
        assert_eq!(magic.len(), 1);
        assert_eq!(magic[0].message, "4 potential magic numbers found");
        let details = magic[0].details.as_deref().unwrap();
        assert!(details.contains("  Line 1: 1500"));
        assert!(!details.contains("9999"));
    }

    #[test]
    fn test_magic_numbers_under_threshold_stay_silent() {
        let src = "setTimeout(tick, 1500);\ndelay(2500);\nwait(3500);\n";
        let result = analyze_script(Some(src)).unwrap();
        assert!(issues_in_category(&result, "maintainability").is_empty());
    }
}
