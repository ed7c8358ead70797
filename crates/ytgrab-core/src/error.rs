//! Error types for ytgrab-core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, YtGrabError>;

#[derive(Error, Debug)]
pub enum YtGrabError {
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("Metadata fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Download failed: {0}")]
    Download(#[from] DownloadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reported by the external extraction capability.
#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("yt-dlp not found. Install with: brew install yt-dlp")]
    YtDlpNotFound,

    #[error("yt-dlp failed with exit code: {0:?}")]
    YtDlpFailed(Option<i32>),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Video unavailable or private: {0}")]
    VideoUnavailable(String),

    #[error("Failed to parse yt-dlp output: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Extractor(#[from] ExtractorError),
}

#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Failed to create download directory: {0}")]
    CreateDir(std::io::Error),

    #[error(transparent)]
    Extractor(#[from] ExtractorError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadError(String),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}
