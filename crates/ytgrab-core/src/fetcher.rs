//! Metadata fetching: extractor output reduced to what the UI shows

use crate::error::FetchError;
use crate::extractor::{Extractor, RawVideoInfo};
use crate::formats::{self, Format, QualityOrder};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize)]
pub struct VideoInfo {
    pub title: Option<String>,
    pub uploader: Option<String>,
    /// Preformatted by yt-dlp (e.g. `"3:33"`), empty when unknown.
    pub duration: String,
    pub thumbnail: Option<String>,
    /// Muxed MP4 formats in extractor order.
    pub formats: Vec<Format>,
    pub available_qualities: Vec<String>,
}

impl VideoInfo {
    pub fn from_raw(raw: RawVideoInfo, order: QualityOrder) -> Self {
        let formats = formats::filter_downloadable(raw.formats);
        let available_qualities = formats::available_qualities(&formats, order);

        Self {
            title: raw.title,
            uploader: raw.uploader,
            duration: raw.duration_string.unwrap_or_default(),
            thumbnail: raw.thumbnail,
            formats,
            available_qualities,
        }
    }

    /// Format id for a quality picked from `available_qualities`.
    pub fn format_id_for(&self, quality: &str) -> &str {
        formats::resolve_format_id(&self.formats, quality)
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }
}

/// Fetch metadata for an already validated URL. No retry on failure.
pub async fn fetch_video_info(
    extractor: &dyn Extractor,
    url: &str,
    order: QualityOrder,
) -> Result<VideoInfo, FetchError> {
    info!("Fetching video info: {}", url);

    let raw = extractor.extract_info(url).await?;
    let total = raw.formats.len();
    let info = VideoInfo::from_raw(raw, order);

    debug!(
        "Kept {}/{} formats, qualities: {:?}",
        info.formats.len(),
        total,
        info.available_qualities
    );
    Ok(info)
}
