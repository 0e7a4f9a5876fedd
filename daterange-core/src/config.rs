use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::keywords::Keywords;

pub const DEFAULT_SEPARATOR: &str = "\n";

#[derive(Debug, Clone)]
pub struct Config {
    /// Text placed between dates when a range is printed. Default is a newline.
    pub separator: String,
    /// The day keywords such as `today` are resolved against.
    pub reference_date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    separator: Option<String>,
    /// Optional table:
    /// [synonyms]
    /// ytd = "yesterday"
    /// hoy = "today"
    synonyms: Option<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            reference_date: Local::now().date_naive(),
        }
    }
}

impl Config {
    /// Load config from disk (first XDG path, then native) and apply defaults.
    /// A broken file is reported and ignored rather than aborting.
    /// User-defined synonyms are merged into the global keyword registry.
    pub fn load() -> Self {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            tracing::warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Self::from_file_config(file_config)
    }

    /// Load config from an explicit path. Unlike [`Config::load`], errors are returned.
    pub fn load_from(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file_config =
            Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        // Extend global keyword registry once at startup.
        Self::load_synonyms(&file_config.synonyms);

        Self {
            separator: file_config
                .separator
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
            ..Self::default()
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("daterange")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("daterange").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            tracing::debug!(path = %path.display(), "reading config");
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[synonyms]` into the global Keywords registry.
    /// Omits synonyms that collide with a canonical keyword (eg. "today").
    fn load_synonyms(synonyms: &Option<HashMap<String, String>>) {
        match synonyms {
            Some(map) if !map.is_empty() => {
                let pairs: Vec<(String, String)> = map
                    .iter()
                    .filter(|(alias, _)| !Keywords::is_canonical(alias))
                    .map(|(a, t)| (a.clone(), t.clone()))
                    .collect();

                if !pairs.is_empty() {
                    Keywords::extend(&pairs);
                }
            }
            _ => {}
        }
    }
}
