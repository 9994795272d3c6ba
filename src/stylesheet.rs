//! Stylesheet analyzer: selector/rule statistics and consistency findings
//! via line and regex scanning. There is no CSS parse; at-rule and
//! comment-opened lines are excluded by the selector pattern itself.

use crate::models::{Analysis, Issue, Severity, StylesheetAnalysis, StylesheetMetrics};
use crate::utils::join_lines;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static SELECTOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([^@{}/\n][^{\n]*)\{").unwrap());
static CUSTOM_PROP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--([\w-]+)\s*:").unwrap());
static VAR_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var\s*\(\s*--([\w-]+)\s*\)").unwrap());
static MEDIA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@media\b").unwrap());
static KEYFRAMES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@keyframes\b").unwrap());
static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{3,8}\b").unwrap());
static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"rgba?\s*\([^)]+\)").unwrap());
static ROOT_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":root\s*\{[^}]*\}").unwrap());

/// Analyze stylesheet text. Returns `None` when the source is absent or
/// empty.
pub fn analyze_stylesheet(source: Option<&str>) -> Option<StylesheetAnalysis> {
    let source = source?;
    if source.is_empty() {
        return None;
    }
    let lines: Vec<&str> = source.split('\n').collect();
    let mut issues: Vec<Issue> = Vec::new();
    let mut metrics = StylesheetMetrics::default();

    let selectors: Vec<String> = SELECTOR_RE
        .captures_iter(source)
        .map(|caps| caps[1].trim().to_string())
        .collect();
    metrics.selector_count = selectors.len();

    let duplicates = duplicate_selectors(&selectors);
    if !duplicates.is_empty() {
        let details = duplicates
            .iter()
            .map(|(selector, count)| format!("  \"{}\" appears {} times", selector, count))
            .collect::<Vec<_>>()
            .join("\n");
        issues.push(
            Issue::new(
                Severity::Warning,
                "maintainability",
                format!("{} duplicate CSS selector(s)", duplicates.len()),
            )
            .with_details(details),
        );
    }

    let important_lines: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains("!important"))
        .map(|(i, _)| i + 1)
        .collect();
    metrics.important_count = important_lines.len();
    if important_lines.len() > 3 {
        issues.push(
            Issue::new(
                Severity::Info,
                "specificity",
                format!(
                    "{} !important declarations — may indicate specificity issues",
                    important_lines.len()
                ),
            )
            .with_details(format!("Lines: {}", join_lines(&important_lines))),
        );
    }

    // Distinct custom-property names in first-declaration order.
    let mut declared: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for caps in CUSTOM_PROP_RE.captures_iter(source) {
        let name = caps[1].to_string();
        if seen.insert(name.clone()) {
            declared.push(name);
        }
    }
    metrics.custom_properties = declared.len();

    let referenced: HashSet<String> = VAR_REF_RE
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .collect();
    let unused: Vec<&String> = declared
        .iter()
        .filter(|name| !referenced.contains(*name))
        .collect();
    if !unused.is_empty() {
        let details = unused
            .iter()
            .map(|name| format!("  --{}", name))
            .collect::<Vec<_>>()
            .join("\n");
        issues.push(
            Issue::new(
                Severity::Info,
                "cleanup",
                format!("{} potentially unused CSS custom properties", unused.len()),
            )
            .with_details(details),
        );
    }

    metrics.media_queries = MEDIA_RE.find_iter(source).count();

    let colors = hardcoded_colors(source);
    if colors.len() > 5 {
        let details = colors
            .iter()
            .take(8)
            .map(|color| format!("  {}", color))
            .collect::<Vec<_>>()
            .join("\n");
        issues.push(
            Issue::new(
                Severity::Info,
                "consistency",
                format!(
                    "{} hard-coded color values outside :root — consider using CSS variables",
                    colors.len()
                ),
            )
            .with_details(details),
        );
    }
    metrics.hardcoded_colors = colors.len();

    metrics.keyframes = KEYFRAMES_RE.find_iter(source).count();

    Some(Analysis { metrics, issues })
}

/// Selector texts occurring more than once, in first-seen order.
fn duplicate_selectors(selectors: &[String]) -> Vec<(String, usize)> {
    let mut order: Vec<&String> = Vec::new();
    let mut counts: HashMap<&String, usize> = HashMap::new();
    for selector in selectors {
        let count = counts.entry(selector).or_insert(0);
        if *count == 0 {
            order.push(selector);
        }
        *count += 1;
    }
    order
        .into_iter()
        .filter_map(|selector| {
            let count = counts[selector];
            (count > 1).then(|| (selector.clone(), count))
        })
        .collect()
}

/// Distinct color literals outside any `:root` block, in first-seen order:
/// hex values lowercased first, then `rgb(a)` literals verbatim.
fn hardcoded_colors(source: &str) -> Vec<String> {
    let outside_root = ROOT_BLOCK_RE.replace_all(source, "");
    let mut colors: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    for m in HEX_COLOR_RE.find_iter(&outside_root) {
        let value = m.as_str().to_lowercase();
        if seen.insert(value.clone()) {
            colors.push(value);
        }
    }
    for m in RGBA_RE.find_iter(&outside_root) {
        let value = m.as_str().to_string();
        if seen.insert(value.clone()) {
            colors.push(value);
        }
    }
    colors
}
