use crate::error::{Result, SisuError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DB_PATH: &str = "sisu.db";
const DEFAULT_EXPORT_DIR: &str = ".";

/// Overrides the directory holding `config.json`.
pub const HOME_ENV: &str = "SISU_HOME";
/// Overrides the database path from the config file (but not `--db`).
pub const DB_ENV: &str = "SISU_DB";

/// Configuration for sisu, stored as `config.json` in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SisuConfig {
    /// SQLite database file used when `--db` is not given
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Directory that `sisu export` writes CSV files into
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

fn default_export_dir() -> String {
    DEFAULT_EXPORT_DIR.to_string()
}

impl Default for SisuConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            export_dir: default_export_dir(),
        }
    }
}

impl SisuConfig {
    /// Keys accepted by `get`/`set`, in display order
    pub const KEYS: &'static [&'static str] = &["db_path", "export_dir"];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "db_path" => Some(self.db_path.clone()),
            "export_dir" => Some(self.export_dir.clone()),
            _ => None,
        }
    }

    /// Sets one key from its text form. Both keys are paths and must not be blank.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        let slot = match key {
            "db_path" => &mut self.db_path,
            "export_dir" => &mut self.export_dir,
            _ => return Err(format!("Unknown config key: {}", key)),
        };
        if value.is_empty() {
            return Err(format!("{} cannot be blank", key));
        }
        *slot = value.to_string();
        Ok(())
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SisuConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Picks the database path: explicit flag, then `SISU_DB`, then the config value.
    pub fn resolve_db_path(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        match std::env::var_os(DB_ENV) {
            Some(env) if !env.is_empty() => PathBuf::from(env),
            _ => PathBuf::from(&self.db_path),
        }
    }
}

/// Directory holding `config.json`: `$SISU_HOME` if set, else the platform config dir.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "sisu", "sisu")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SisuError::Config("could not determine config directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SisuConfig::default();
        assert_eq!(config.db_path, "sisu.db");
        assert_eq!(config.export_dir, ".");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = SisuConfig::load(dir.path()).unwrap();
        assert_eq!(config, SisuConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = SisuConfig {
            db_path: "/tmp/elsewhere.db".into(),
            export_dir: "out".into(),
        };
        config.save(dir.path().join("nested")).unwrap();

        let loaded = SisuConfig::load(dir.path().join("nested")).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"db_path": "mine.db"}"#).unwrap();

        let loaded = SisuConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.db_path, "mine.db");
        assert_eq!(loaded.export_dir, ".");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            SisuConfig::load(dir.path()),
            Err(SisuError::Serialization(_))
        ));
    }

    #[test]
    fn test_get_and_set_known_keys() {
        let mut config = SisuConfig::default();
        config.set("export_dir", " csv ").unwrap();

        assert_eq!(config.get("export_dir").as_deref(), Some("csv"));
        assert_eq!(config.get("db_path").as_deref(), Some("sisu.db"));
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn test_set_rejects_unknown_and_blank() {
        let mut config = SisuConfig::default();
        assert_eq!(
            config.set("colour", "red").unwrap_err(),
            "Unknown config key: colour"
        );
        assert_eq!(config.set("db_path", "  ").unwrap_err(), "db_path cannot be blank");
        assert_eq!(config, SisuConfig::default());
    }

    #[test]
    fn test_flag_wins_over_config() {
        let config = SisuConfig::default();
        let path = config.resolve_db_path(Some(Path::new("flag.db")));
        assert_eq!(path, PathBuf::from("flag.db"));
    }
}
