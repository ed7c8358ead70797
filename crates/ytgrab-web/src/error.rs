//! Failures shown to the user, one per pipeline stage

use axum::http::StatusCode;
use thiserror::Error;
use ytgrab_core::error::{DownloadError, FetchError};

use crate::views::Notice;

#[derive(Error, Debug)]
pub enum UserFacingError {
    #[error("Please enter a valid YouTube video URL.")]
    InvalidUrl,

    #[error("Could not retrieve video information: {0}")]
    MetadataFetch(#[from] FetchError),

    #[error("No downloadable formats found for this video.")]
    NoDownloadableFormats,

    #[error("Video download failed: {0}")]
    Download(#[from] DownloadError),
}

impl UserFacingError {
    pub fn status(&self) -> StatusCode {
        match self {
            UserFacingError::InvalidUrl => StatusCode::BAD_REQUEST,
            UserFacingError::MetadataFetch(_) | UserFacingError::Download(_) => {
                StatusCode::BAD_GATEWAY
            }
            UserFacingError::NoDownloadableFormats => StatusCode::OK,
        }
    }

    /// Banners rendered for this failure, detail first.
    pub fn notices(&self) -> Vec<Notice> {
        match self {
            UserFacingError::InvalidUrl => {
                vec![Notice::Error("🚫 Please enter a valid YouTube video URL.".to_string())]
            }
            UserFacingError::MetadataFetch(e) => vec![
                Notice::Error(format!("Error: {}", e)),
                Notice::Error(
                    "Could not retrieve video information. Please check the URL or try again later."
                        .to_string(),
                ),
            ],
            UserFacingError::NoDownloadableFormats => vec![Notice::Warning(
                "⚠️ No downloadable formats found for this video.".to_string(),
            )],
            UserFacingError::Download(e) => vec![
                Notice::Error(format!("Download failed: {}", e)),
                Notice::Error("❌ Video download failed.".to_string()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ytgrab_core::error::ExtractorError;

    #[test]
    fn test_fetch_failure_collapses_to_generic_message() {
        let err = UserFacingError::from(FetchError::from(ExtractorError::YtDlpFailed(Some(1))));
        let notices = err.notices();

        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(notices.len(), 2);
        assert!(matches!(&notices[1], Notice::Error(m) if m.starts_with("Could not retrieve")));
    }

    #[test]
    fn test_no_formats_is_a_warning() {
        let notices = UserFacingError::NoDownloadableFormats.notices();
        assert!(matches!(notices.as_slice(), [Notice::Warning(_)]));
    }
}
