use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Wayback Machine CDX source (optional `[wayback]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaybackConfig {
    pub enabled: bool,
    /// CDX search endpoint; the query string is appended to it.
    pub endpoint: String,
}

impl Default for WaybackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://web.archive.org/cdx/search/cdx".to_string(),
        }
    }
}

/// Common Crawl index source (optional `[common_crawl]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonCrawlConfig {
    pub enabled: bool,
    /// Index server base URL, without the collection name.
    pub endpoint: String,
    /// Collection to query, e.g. `CC-MAIN-2018-22-index`.
    pub index: String,
}

impl Default for CommonCrawlConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://index.commoncrawl.org".to_string(),
            index: "CC-MAIN-2018-22-index".to_string(),
        }
    }
}

/// Global configuration, read from `~/.config/archurls/config.toml` when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchurlsConfig {
    /// `User-Agent` sent to archive APIs.
    pub user_agent: String,
    pub wayback: WaybackConfig,
    pub common_crawl: CommonCrawlConfig,
}

impl Default for ArchurlsConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("archurls/", env!("CARGO_PKG_VERSION")).to_string(),
            wayback: WaybackConfig::default(),
            common_crawl: CommonCrawlConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("locate config directory: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Path of the default config file, if one exists. Nothing is created.
pub fn default_path() -> Result<Option<PathBuf>, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("archurls")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

pub fn load_from_path(path: &Path) -> Result<ArchurlsConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load configuration.
///
/// An explicit path must exist and parse. Without one, the XDG default file is
/// used if present; any problem with it falls back to built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<ArchurlsConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }

    let path = match default_path() {
        Ok(Some(path)) => path,
        Ok(None) => return Ok(ArchurlsConfig::default()),
        Err(e) => {
            tracing::debug!("no config directory: {}", e);
            return Ok(ArchurlsConfig::default());
        }
    };

    match load_from_path(&path) {
        Ok(cfg) => {
            tracing::debug!("loaded config from {}", path.display());
            Ok(cfg)
        }
        Err(e) => {
            tracing::warn!("ignoring config file: {}", e);
            Ok(ArchurlsConfig::default())
        }
    }
}
