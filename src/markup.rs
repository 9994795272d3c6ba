//! Markup analyzer: element/attribute statistics and structural or
//! accessibility findings via regex matching. Markup is not assumed
//! well-formed, so there is no DOM parse.

use crate::models::{Analysis, Issue, MarkupAnalysis, MarkupMetrics, Severity};
use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<(\w+)[\s>]").unwrap());
static LANG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<html[^>]*\slang\s*=").unwrap());
static IMG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<img\b([^>]*)>").unwrap());
static ALT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\balt\s*=").unwrap());
static INPUT_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<(?:input|select|textarea)\b[^>]*\bid\s*=\s*["']([^"']+)["'][^>]*>"#).unwrap()
});
static LABEL_FOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<label\b[^>]*\bfor\s*=\s*["']([^"']+)["'][^>]*>"#).unwrap());
static LABEL_WRAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<label[^>]*>.*?<(?:input|select|textarea)").unwrap());
static STYLE_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\bstyle\s*=\s*""#).unwrap());
static VIEWPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<meta\b[^>]*viewport").unwrap());
static SCRIPT_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<script\b").unwrap());
static STYLESHEET_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<link\b[^>]*stylesheet").unwrap());
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h([1-6])\b").unwrap());

/// Analyze markup text. Returns `None` when the source is absent or empty.
pub fn analyze_markup(source: Option<&str>) -> Option<MarkupAnalysis> {
    let source = source?;
    if source.is_empty() {
        return None;
    }
    let mut issues: Vec<Issue> = Vec::new();
    let mut metrics = MarkupMetrics::default();

    for caps in TAG_RE.captures_iter(source) {
        let tag = caps[1].to_lowercase();
        *metrics.element_counts.entry(tag).or_insert(0) += 1;
        metrics.total_elements += 1;
    }

    if !LANG_RE.is_match(source) {
        issues.push(Issue::new(
            Severity::Warning,
            "accessibility",
            "Missing lang attribute on <html> tag".to_string(),
        ));
    }

    let mut total_imgs = 0usize;
    let mut imgs_without_alt = 0usize;
    for caps in IMG_RE.captures_iter(source) {
        total_imgs += 1;
        if !ALT_RE.is_match(&caps[1]) {
            imgs_without_alt += 1;
        }
    }
    if imgs_without_alt > 0 {
        issues.push(Issue::new(
            Severity::Warning,
            "accessibility",
            format!(
                "{} of {} <img> tags missing alt attribute",
                imgs_without_alt, total_imgs
            ),
        ));
    }

    let input_ids: Vec<String> = INPUT_ID_RE
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .collect();
    let label_fors: Vec<String> = LABEL_FOR_RE
        .captures_iter(source)
        .map(|caps| caps[1].to_string())
        .collect();
    let wrapped_inputs = LABEL_WRAP_RE.find_iter(source).count();
    metrics.form_inputs = input_ids.len();
    // For-based and wrap-based labels are summed, not deduplicated.
    metrics.labeled_inputs = label_fors.len() + wrapped_inputs;

    let inline_styles = STYLE_ATTR_RE.find_iter(source).count();
    if inline_styles > 0 {
        issues.push(Issue::new(
            Severity::Info,
            "maintainability",
            format!("{} inline style(s) found — prefer CSS classes", inline_styles),
        ));
    }

    if !VIEWPORT_RE.is_match(source) {
        issues.push(Issue::new(
            Severity::Warning,
            "responsive",
            "Missing viewport meta tag".to_string(),
        ));
    }

    metrics.scripts = SCRIPT_TAG_RE.find_iter(source).count();
    metrics.stylesheets = STYLESHEET_LINK_RE.find_iter(source).count();

    let headings: Vec<u32> = HEADING_RE
        .captures_iter(source)
        .filter_map(|caps| caps[1].parse().ok())
        .collect();
    for pair in headings.windows(2) {
        if pair[1] > pair[0] + 1 {
            issues.push(Issue::new(
                Severity::Info,
                "accessibility",
                format!("Heading hierarchy skip: h{} → h{}", pair[0], pair[1]),
            ));
        }
    }
    metrics.headings = headings;

    Some(Analysis { metrics, issues })
}
