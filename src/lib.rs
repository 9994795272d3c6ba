//! Sitegrade core library.
//!
//! This crate exposes programmatic APIs for analyzing a small web
//! application's script, markup, and stylesheet text, producing quality
//! metrics, heuristic issue findings, and a composite score.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `script`: Script analyzer (function inventory, complexity, detectors).
//! - `markup`: Markup analyzer (elements, accessibility, structure).
//! - `stylesheet`: Stylesheet analyzer (selectors, properties, consistency).
//! - `report`: Aggregation, scoring, and grading.
//! - `models`: Data models for issues, metrics, and summaries.
//! - `output`: Human/JSON printers for reports.
//! - `utils`: Supporting helpers.
//!
//! All analysis is lexical: regex matching and brace-balance scanning,
//! never a full parser. Findings are approximate.
pub mod cli;
pub mod config;
pub mod markup;
pub mod models;
pub mod output;
pub mod report;
pub mod script;
pub mod stylesheet;
pub mod utils;
