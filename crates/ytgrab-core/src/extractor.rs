//! Bridge to the external extraction capability (yt-dlp)

use crate::error::ExtractorError;
use crate::formats::Format;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Output;
use tokio::process::Command;
use tracing::debug;

/// Subset of the `yt-dlp -J` document consumed by ytgrab.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVideoInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub duration_string: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub formats: Vec<Format>,
}

/// Metadata lookup and download, both of which may fail.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Fetch metadata for `url` without downloading any media.
    async fn extract_info(&self, url: &str) -> Result<RawVideoInfo, ExtractorError>;

    /// Download `url` using `format_id`, writing to `output_template`.
    async fn download(
        &self,
        url: &str,
        format_id: &str,
        output_template: &Path,
    ) -> Result<RawVideoInfo, ExtractorError>;
}

/// [`Extractor`] backed by the `yt-dlp` binary.
#[derive(Debug, Clone)]
pub struct YtDlp {
    yt_dlp_path: PathBuf,
}

impl YtDlp {
    pub fn new(yt_dlp_path: PathBuf) -> Self {
        Self { yt_dlp_path }
    }

    async fn run(&self, url: &str, cmd: &mut Command) -> Result<Output, ExtractorError> {
        debug!("Running: {:?}", cmd.as_std());

        let output = cmd.output().await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ExtractorError::YtDlpNotFound,
            _ => ExtractorError::Io(e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("yt-dlp stderr: {}", stderr);
            return Err(classify_failure(url, &stderr, output.status.code()));
        }

        Ok(output)
    }
}

#[async_trait]
impl Extractor for YtDlp {
    async fn extract_info(&self, url: &str) -> Result<RawVideoInfo, ExtractorError> {
        let mut cmd = Command::new(&self.yt_dlp_path);
        cmd.args(["-J", "--no-playlist", "--no-warnings", url]);

        let output = self.run(url, &mut cmd).await?;
        parse_info(&output.stdout)
    }

    async fn download(
        &self,
        url: &str,
        format_id: &str,
        output_template: &Path,
    ) -> Result<RawVideoInfo, ExtractorError> {
        let mut cmd = Command::new(&self.yt_dlp_path);
        cmd.args(["-f", format_id])
            .arg("-o")
            .arg(output_template)
            .args(["--no-playlist", "--print-json", url]);

        let output = self.run(url, &mut cmd).await?;
        parse_info(&output.stdout)
    }
}

fn parse_info(stdout: &[u8]) -> Result<RawVideoInfo, ExtractorError> {
    // --print-json may emit one document per line; the last one describes the result.
    let text = String::from_utf8_lossy(stdout);
    let doc = text
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| ExtractorError::Parse("empty output".to_string()))?;

    serde_json::from_str(doc).map_err(|e| ExtractorError::Parse(e.to_string()))
}

fn classify_failure(url: &str, stderr: &str, code: Option<i32>) -> ExtractorError {
    if stderr.contains("Video unavailable") || stderr.contains("Private video") {
        return ExtractorError::VideoUnavailable(url.to_string());
    }
    if stderr.contains("is not a valid URL") || stderr.contains("Unsupported URL") {
        return ExtractorError::InvalidUrl(url.to_string());
    }
    ExtractorError::YtDlpFailed(code)
}
