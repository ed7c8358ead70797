//! Configuration management for ytgrab

use crate::error::ConfigError;
use crate::formats::QualityOrder;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub download: DownloadConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Path to yt-dlp binary (auto-detected if not set)
    pub yt_dlp: Option<PathBuf>,
    /// Path to FFmpeg binary, only reported by `doctor`
    pub ffmpeg: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Destination folder (defaults to ~/Downloads)
    pub directory: PathBuf,
    /// Ordering of the quality dropdown
    pub quality_order: QualityOrder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the web UI binds to
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                yt_dlp: None,
                ffmpeg: None,
            },
            download: DownloadConfig {
                directory: default_download_dir(),
                quality_order: QualityOrder::default(),
            },
            server: ServerConfig {
                listen_addr: "127.0.0.1:8501".to_string(),
            },
        }
    }
}

/// `~/Downloads`, or `./Downloads` when no home directory is known.
pub fn default_download_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Downloads")
}

impl Config {
    /// Load configuration from file and environment
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Load from default config directory
        if let Some(config_dir) = dirs::config_dir() {
            let default_config = config_dir.join("ytgrab/config.toml");
            if default_config.exists() {
                figment = figment.merge(Toml::file(&default_config));
            }
        }

        // Load from specified config file
        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ConfigError::LoadError(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("YTGRAB_").split("__"));

        figment.extract().map_err(|e| ConfigError::LoadError(e.to_string()))
    }

    /// Get yt-dlp path, auto-detecting if not configured
    pub fn yt_dlp_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(ref path) = self.paths.yt_dlp {
            Ok(path.clone())
        } else {
            which::which("yt-dlp")
                .map_err(|_| ConfigError::InvalidValue("yt-dlp not found in PATH".to_string()))
        }
    }

    /// Get FFmpeg path, auto-detecting if not configured
    pub fn ffmpeg_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(ref path) = self.paths.ffmpeg {
            Ok(path.clone())
        } else {
            which::which("ffmpeg")
                .map_err(|_| ConfigError::InvalidValue("ffmpeg not found in PATH".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.download.directory.ends_with("Downloads"));
        assert_eq!(config.download.quality_order, QualityOrder::Lexicographic);
        assert_eq!(config.server.listen_addr, "127.0.0.1:8501");
    }

    #[test]
    fn test_load_merges_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[paths]
yt_dlp = "/opt/bin/yt-dlp"

[download]
directory = "/srv/videos"
quality_order = "resolution"
"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.paths.yt_dlp, Some(PathBuf::from("/opt/bin/yt-dlp")));
        assert_eq!(config.download.directory, PathBuf::from("/srv/videos"));
        assert_eq!(config.download.quality_order, QualityOrder::Resolution);
        assert_eq!(config.yt_dlp_path().unwrap(), PathBuf::from("/opt/bin/yt-dlp"));
        // untouched sections keep their defaults
        assert_eq!(config.server.listen_addr, "127.0.0.1:8501");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = Config::load(Some(Path::new("/nonexistent/ytgrab.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn test_load_rejects_unknown_quality_order() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[download]\nquality_order = \"random\"").unwrap();

        assert!(Config::load(Some(file.path())).is_err());
    }
}
