use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::poll::PollPolicy;

/// Polling parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Maximum number of existence checks per link (including the first).
    pub max_attempts: u32,
    /// Backoff step in milliseconds; attempt n waits n times this.
    pub delay_step_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: 30,
            delay_step_ms: 25,
        }
    }
}

/// Global configuration loaded from `~/.config/uplinker/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkerConfig {
    /// Optional polling overrides; if missing, built-in defaults are used.
    #[serde(default)]
    pub poll: Option<PollConfig>,
}

impl Default for LinkerConfig {
    fn default() -> Self {
        Self {
            poll: Some(PollConfig::default()),
        }
    }
}

impl LinkerConfig {
    /// The polling policy from config, or the built-in defaults.
    pub fn poll_policy(&self) -> PollPolicy {
        self.poll
            .as_ref()
            .map(PollPolicy::from_config)
            .unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uplinker")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkerConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkerConfig::default();
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

/// Load configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<LinkerConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: LinkerConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn default_config_carries_the_builtin_schedule() {
        let cfg = LinkerConfig::default();
        let poll = cfg.poll.as_ref().unwrap();
        assert_eq!(poll.max_attempts, 30);
        assert_eq!(poll.delay_step_ms, 25);
        let policy = cfg.poll_policy();
        assert_eq!(policy.max_attempts, 30);
        assert_eq!(policy.delay_step, Duration::from_millis(25));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = LinkerConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LinkerConfig = toml::from_str(&toml).unwrap();
        let poll = parsed.poll.unwrap();
        assert_eq!(poll.max_attempts, 30);
        assert_eq!(poll.delay_step_ms, 25);
    }

    #[test]
    fn missing_poll_section_falls_back_to_defaults() {
        let cfg: LinkerConfig = toml::from_str("").unwrap();
        assert!(cfg.poll.is_none());
        let policy = cfg.poll_policy();
        assert_eq!(policy.max_attempts, 30);
        assert_eq!(policy.delay_step, Duration::from_millis(25));
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            [poll]
            max_attempts = 8
            delay_step_ms = 100
        "#;
        let cfg: LinkerConfig = toml::from_str(toml).unwrap();
        let policy = cfg.poll_policy();
        assert_eq!(policy.max_attempts, 8);
        assert_eq!(policy.delay_step, Duration::from_millis(100));
    }

    #[test]
    fn load_from_path_reads_a_config_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "[poll]\nmax_attempts = 3\ndelay_step_ms = 50").unwrap();
        let cfg = load_from_path(f.path()).unwrap();
        let poll = cfg.poll.unwrap();
        assert_eq!(poll.max_attempts, 3);
        assert_eq!(poll.delay_step_ms, 50);
    }
}
