//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use kabuki_core::parser::CatalogOrder;

/// Top-level kabuki configuration (`kabuki.toml`).
#[derive(Debug, Clone, Deserialize)]
pub struct KabukiConfig {
    /// Directory (or single file) quizzes are loaded from.
    #[serde(default = "default_quizzes_dir")]
    pub quizzes_dir: PathBuf,
    /// Directory transcripts are written to.
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    /// Player name. Asked for at the start of each session when unset.
    #[serde(default)]
    pub user: Option<String>,
    /// How quizzes from a directory are ordered in the menu.
    #[serde(default)]
    pub catalog_order: CatalogOrder,
    /// Clear the terminal before drawing each menu.
    #[serde(default = "default_true")]
    pub clear_screen: bool,
}

fn default_quizzes_dir() -> PathBuf {
    PathBuf::from("./quizzes")
}
fn default_results_dir() -> PathBuf {
    PathBuf::from("./results")
}
fn default_true() -> bool {
    true
}

impl Default for KabukiConfig {
    fn default() -> Self {
        Self {
            quizzes_dir: default_quizzes_dir(),
            results_dir: default_results_dir(),
            user: None,
            catalog_order: CatalogOrder::default(),
            clear_screen: true,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `kabuki.toml` in the current directory
/// 2. `~/.config/kabuki/config.toml`
///
/// Environment variable overrides: `KABUKI_QUIZZES_DIR`, `KABUKI_RESULTS_DIR`,
/// `KABUKI_USER`.
pub fn load_config_from(path: Option<&Path>) -> Result<KabukiConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("kabuki.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<KabukiConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => KabukiConfig::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

fn apply_env_overrides(config: &mut KabukiConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(dir) = var("KABUKI_QUIZZES_DIR") {
        config.quizzes_dir = PathBuf::from(dir);
    }
    if let Some(dir) = var("KABUKI_RESULTS_DIR") {
        config.results_dir = PathBuf::from(dir);
    }
    if let Some(user) = var("KABUKI_USER") {
        config.user = Some(user);
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("kabuki"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = KabukiConfig::default();
        assert_eq!(config.quizzes_dir, PathBuf::from("./quizzes"));
        assert_eq!(config.results_dir, PathBuf::from("./results"));
        assert_eq!(config.catalog_order, CatalogOrder::FileName);
        assert!(config.clear_screen);
        assert!(config.user.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
quizzes_dir = "/srv/quizzes"
results_dir = "/srv/results"
user = "Ada"
catalog_order = "directory"
clear_screen = false
"#;
        let config: KabukiConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.quizzes_dir, PathBuf::from("/srv/quizzes"));
        assert_eq!(config.user.as_deref(), Some("Ada"));
        assert_eq!(config.catalog_order, CatalogOrder::Directory);
        assert!(!config.clear_screen);
    }

    #[test]
    fn unknown_catalog_order_rejected() {
        assert!(toml::from_str::<KabukiConfig>(r#"catalog_order = "random""#).is_err());
    }

    #[test]
    fn env_overrides_win() {
        let mut config = KabukiConfig::default();
        apply_env_overrides(&mut config, |name| match name {
            "KABUKI_RESULTS_DIR" => Some("/tmp/out".into()),
            "KABUKI_USER" => Some("Grace".into()),
            _ => None,
        });
        assert_eq!(config.quizzes_dir, PathBuf::from("./quizzes"));
        assert_eq!(config.results_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.user.as_deref(), Some("Grace"));
    }

    #[test]
    fn explicit_missing_path_fails() {
        let err = load_config_from(Some(Path::new("/no/such/kabuki.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kabuki.toml");
        std::fs::write(&path, "results_dir = \"transcripts\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert!(config.results_dir.ends_with("transcripts"));
    }
}
