//! Video downloads into a fixed destination directory

use crate::error::DownloadError;
use crate::extractor::Extractor;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// yt-dlp output template: `<title>.<ext>` inside the destination directory.
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

#[derive(Clone)]
pub struct Downloader {
    extractor: Arc<dyn Extractor>,
    download_dir: PathBuf,
}

impl std::fmt::Debug for Downloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Downloader")
            .field("download_dir", &self.download_dir)
            .finish_non_exhaustive()
    }
}

impl Downloader {
    pub fn new(extractor: Arc<dyn Extractor>, download_dir: PathBuf) -> Self {
        Self {
            extractor,
            download_dir,
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Download `url` in `format_id` and return the video title.
    ///
    /// The destination directory is created on demand. Nothing is cleaned up
    /// on failure; partial files are left to yt-dlp.
    pub async fn download(&self, url: &str, format_id: &str) -> Result<String, DownloadError> {
        info!("Downloading {} (format {}) to {}", url, format_id, self.download_dir.display());

        tokio::fs::create_dir_all(&self.download_dir)
            .await
            .map_err(DownloadError::CreateDir)?;

        let template = self.download_dir.join(OUTPUT_TEMPLATE);
        let info = self.extractor.download(url, format_id, &template).await?;

        let title = info
            .title
            .or(info.id)
            .unwrap_or_else(|| "video".to_string());
        debug!("Downloaded: {}", title);
        Ok(title)
    }
}
