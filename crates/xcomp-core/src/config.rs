use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// XEP-0459 compliance suite definition.
pub const DEFAULT_COMPLIANCE_SUITE_URL: &str = "https://xmpp.org/extensions/xep-0459.xml";
/// Prosody's compliance checker build.
pub const DEFAULT_CHECKER_URL: &str = "https://prosody.im/files/compliance";
/// 10 MiB.
pub const DEFAULT_MAX_DOWNLOAD_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// How the external checker is launched (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckerConfig {
    /// Program used to run the checker script (e.g. `lua`). When unset the
    /// downloaded checker is executed directly.
    #[serde(default)]
    pub interpreter: Option<String>,
    /// Pass `-v` so the checker reports every badge, not just a summary.
    #[serde(default = "default_true")]
    pub verbose: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            interpreter: Some("lua".to_string()),
            verbose: true,
        }
    }
}

fn default_listing_categories() -> Vec<String> {
    ["clients", "libraries", "servers"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Global configuration loaded from `~/.config/xcomp/config.toml` or `--config`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XcompConfig {
    /// Staging directory for the suite, the checker and `doap_files/`.
    pub download_dir: PathBuf,
    /// Directory holding `compliance_suite.json` and the listing files.
    pub data_dir: PathBuf,
    pub compliance_suite_url: String,
    pub checker_url: String,
    /// Downloads larger than this are aborted.
    pub max_download_bytes: u64,
    pub connect_timeout_secs: u64,
    /// Listing files to enrich, as `{category}_list_doap.json` under `data_dir`.
    #[serde(default = "default_listing_categories")]
    pub listing_categories: Vec<String>,
    #[serde(default)]
    pub checker: CheckerConfig,
}

impl Default for XcompConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("downloads"),
            data_dir: PathBuf::from("data"),
            compliance_suite_url: DEFAULT_COMPLIANCE_SUITE_URL.to_string(),
            checker_url: DEFAULT_CHECKER_URL.to_string(),
            max_download_bytes: DEFAULT_MAX_DOWNLOAD_BYTES,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            listing_categories: default_listing_categories(),
            checker: CheckerConfig::default(),
        }
    }
}

impl XcompConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Reject values that would make a run meaningless before any network or
    /// subprocess work starts.
    pub fn validate(&self) -> Result<()> {
        check_http_url("compliance_suite_url", &self.compliance_suite_url)?;
        check_http_url("checker_url", &self.checker_url)?;
        if self.max_download_bytes == 0 {
            anyhow::bail!("max_download_bytes must be greater than zero");
        }
        if self.connect_timeout_secs == 0 {
            anyhow::bail!("connect_timeout_secs must be greater than zero");
        }
        if self.listing_categories.is_empty() {
            anyhow::bail!("listing_categories must name at least one listing");
        }
        if let Some(category) = self
            .listing_categories
            .iter()
            .find(|c| c.is_empty() || c.contains(['/', '\\']))
        {
            anyhow::bail!("invalid listing category {:?}", category);
        }
        Ok(())
    }
}

fn check_http_url(key: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value).with_context(|| format!("{} is not a valid URL", key))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("{} must use http or https, got {}", key, other),
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("xcomp")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<XcompConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = XcompConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<XcompConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: XcompConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        download_dir = "staging"
        data_dir = "out"
        compliance_suite_url = "https://example.org/suite.xml"
        checker_url = "https://example.org/compliancer"
        max_download_bytes = 1024
        connect_timeout_secs = 2
    "#;

    #[test]
    fn default_config_values() {
        let cfg = XcompConfig::default();
        assert_eq!(cfg.download_dir, PathBuf::from("downloads"));
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
        assert_eq!(cfg.max_download_bytes, 10 * 1024 * 1024);
        assert_eq!(cfg.connect_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.listing_categories, vec!["clients", "libraries", "servers"]);
        assert_eq!(cfg.checker.interpreter.as_deref(), Some("lua"));
        assert!(cfg.checker.verbose);
        cfg.validate().unwrap();
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = XcompConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: XcompConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.compliance_suite_url, cfg.compliance_suite_url);
        assert_eq!(parsed.checker_url, cfg.checker_url);
        assert_eq!(parsed.listing_categories, cfg.listing_categories);
        assert_eq!(parsed.checker, cfg.checker);
    }

    #[test]
    fn config_toml_minimal_uses_section_defaults() {
        let cfg: XcompConfig = toml::from_str(MINIMAL).unwrap();
        assert_eq!(cfg.download_dir, PathBuf::from("staging"));
        assert_eq!(cfg.max_download_bytes, 1024);
        assert_eq!(cfg.listing_categories.len(), 3);
        assert_eq!(cfg.checker, CheckerConfig::default());
    }

    #[test]
    fn config_toml_checker_without_interpreter() {
        let toml = format!("{}\n[checker]\nverbose = false\n", MINIMAL);
        let cfg: XcompConfig = toml::from_str(&toml).unwrap();
        assert!(cfg.checker.interpreter.is_none());
        assert!(!cfg.checker.verbose);
    }

    #[test]
    fn validate_rejects_non_http_url() {
        let mut cfg = XcompConfig::default();
        cfg.checker_url = "ftp://example.org/compliancer".to_string();
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("checker_url"));

        cfg.checker_url = "not a url".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_limits_and_bad_categories() {
        let mut cfg = XcompConfig::default();
        cfg.max_download_bytes = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = XcompConfig::default();
        cfg.connect_timeout_secs = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = XcompConfig::default();
        cfg.listing_categories.clear();
        assert!(cfg.validate().is_err());

        let mut cfg = XcompConfig::default();
        cfg.listing_categories = vec!["../clients".to_string()];
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn load_from_path_reads_file_and_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, MINIMAL).unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("out"));

        let missing = dir.path().join("absent.toml");
        let err = load_from_path(&missing).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.toml"));
    }
}
