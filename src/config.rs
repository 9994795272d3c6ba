//! Configuration discovery and effective settings resolution.
//!
//! Sitegrade reads `sitegrade.toml|yaml|yml` from the project root (or
//! closest ancestor) and merges it with CLI flags to produce an
//! `Effective` config. Defaults:
//! - `files.script`: `app.js`
//! - `files.markup`: `index.html`
//! - `files.stylesheet`: `style.css`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// File-name overrides under `[files]`.
pub struct FilesCfg {
    pub script: Option<String>,
    pub markup: Option<String>,
    pub stylesheet: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `sitegrade.toml|yaml`.
pub struct SitegradeConfig {
    pub output: Option<String>,
    #[serde(default)]
    pub files: Option<FilesCfg>,
}

#[derive(Debug, Clone)]
/// The three analyzed file names, relative to the project root.
pub struct FileSet {
    pub script: String,
    pub markup: String,
    pub stylesheet: String,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub output: String,
    pub files: FileSet,
    pub config_found: bool,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when a `sitegrade.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_project_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("sitegrade.toml").exists()
            || cur.join("sitegrade.yaml").exists()
            || cur.join("sitegrade.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `SitegradeConfig` from `sitegrade.toml` or `sitegrade.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<SitegradeConfig> {
    let toml_path = root.join("sitegrade.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: SitegradeConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["sitegrade.yaml", "sitegrade.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: SitegradeConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_script: Option<&str>,
    cli_markup: Option<&str>,
    cli_stylesheet: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_root.unwrap_or("."));
    let root = detect_project_root(&start);
    let loaded = load_config(&root);
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let files_cfg = cfg.files.unwrap_or_default();
    let script = cli_script
        .map(|s| s.to_string())
        .or(files_cfg.script)
        .unwrap_or_else(|| "app.js".to_string());
    let markup = cli_markup
        .map(|s| s.to_string())
        .or(files_cfg.markup)
        .unwrap_or_else(|| "index.html".to_string());
    let stylesheet = cli_stylesheet
        .map(|s| s.to_string())
        .or(files_cfg.stylesheet)
        .unwrap_or_else(|| "style.css".to_string());

    Effective {
        root,
        output,
        files: FileSet {
            script,
            markup,
            stylesheet,
        },
        config_found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("sitegrade.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "json"
[files]
script = "main.js"
    "#
        )
        .unwrap();

        // Resolve using explicit root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), None, None, None, None);
        assert!(eff.config_found);
        assert_eq!(eff.output, "json");
        assert_eq!(eff.files.script, "main.js");
        // Unset file names fall back to defaults
        assert_eq!(eff.files.markup, "index.html");
        assert_eq!(eff.files.stylesheet, "style.css");
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("sitegrade.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output: human
files:
  stylesheet: theme.css
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), None, None, None, None);
        assert_eq!(eff.output, "human");
        assert_eq!(eff.files.script, "app.js");
        assert_eq!(eff.files.stylesheet, "theme.css");
    }

    #[test]
    fn test_cli_overrides_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("sitegrade.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "json"
[files]
script = "main.js"
markup = "home.html"
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), Some("app.js"), None, None, Some("human"));
        assert_eq!(eff.files.script, "app.js");
        assert_eq!(eff.files.markup, "home.html");
        assert_eq!(eff.output, "human");
    }

    #[test]
    fn test_root_detected_from_nested_start() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("sitegrade.toml"), "output = \"human\"\n").unwrap();
        let nested = root.join("src/deep");
        fs::create_dir_all(&nested).unwrap();

        let eff = resolve_effective(nested.to_str(), None, None, None, None);
        assert_eq!(eff.root, root);
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(dir.path().to_str(), None, None, None, None);
        assert!(!eff.config_found);
        assert_eq!(eff.output, "human");
        assert_eq!(eff.files.script, "app.js");
    }
}
