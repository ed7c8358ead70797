//! ytgrab-core: YouTube URL validation, metadata fetching and downloads via yt-dlp

pub mod config;
pub mod downloader;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod formats;
pub mod url;

pub use config::Config;
pub use downloader::Downloader;
pub use error::{Result, YtGrabError};
pub use extractor::{Extractor, YtDlp};
pub use fetcher::{fetch_video_info, VideoInfo};
pub use formats::{Format, QualityOrder, FALLBACK_FORMAT_ID};
pub use url::is_valid_youtube_url;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractorError;
    use crate::extractor::RawVideoInfo;
    use async_trait::async_trait;
    use std::path::Path;
    use std::sync::Arc;

    /// Serves a fixed format list and "downloads" by echoing the title.
    struct FakeYouTube;

    #[async_trait]
    impl Extractor for FakeYouTube {
        async fn extract_info(&self, _url: &str) -> std::result::Result<RawVideoInfo, ExtractorError> {
            Ok(RawVideoInfo {
                id: Some("abcdefghijk".to_string()),
                title: Some("Sample".to_string()),
                uploader: Some("Uploader".to_string()),
                duration_string: Some("4:20".to_string()),
                thumbnail: None,
                formats: vec![
                    Format {
                        format_id: "18".to_string(),
                        ext: Some("mp4".to_string()),
                        vcodec: Some("avc1.42001E".to_string()),
                        acodec: Some("mp4a.40.2".to_string()),
                        format_note: Some("360p".to_string()),
                    },
                    Format {
                        format_id: "251".to_string(),
                        ext: Some("webm".to_string()),
                        vcodec: Some("none".to_string()),
                        acodec: Some("opus".to_string()),
                        format_note: Some("medium".to_string()),
                    },
                ],
            })
        }

        async fn download(
            &self,
            _url: &str,
            format_id: &str,
            _output_template: &Path,
        ) -> std::result::Result<RawVideoInfo, ExtractorError> {
            assert_eq!(format_id, "18");
            Ok(RawVideoInfo {
                title: Some("Sample".to_string()),
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_validate_fetch_select_download() {
        let url = "https://www.youtube.com/watch?v=abcdefghijk";
        assert!(is_valid_youtube_url(url));

        let extractor: Arc<dyn Extractor> = Arc::new(FakeYouTube);
        let info = fetch_video_info(extractor.as_ref(), url, QualityOrder::default())
            .await
            .unwrap();
        assert!(!info.available_qualities.is_empty());

        let quality = &info.available_qualities[0];
        let format_id = info.format_id_for(quality);
        assert_ne!(format_id, FALLBACK_FORMAT_ID);

        let tmp = tempfile::tempdir().unwrap();
        let downloader = Downloader::new(extractor, tmp.path().join("Downloads"));
        let title = downloader.download(url, format_id).await.unwrap();
        assert_eq!(title, "Sample");
    }
}
