//! Format descriptors, MP4 filtering and quality labels

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Format id handed to yt-dlp when no descriptor matches the chosen quality.
pub const FALLBACK_FORMAT_ID: &str = "best";

/// One entry of the `formats` array reported by yt-dlp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format {
    pub format_id: String,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub acodec: Option<String>,
    #[serde(default)]
    pub format_note: Option<String>,
}

impl Format {
    /// yt-dlp marks a missing stream with the literal codec `"none"`.
    pub fn has_video(&self) -> bool {
        self.vcodec.as_deref() != Some("none")
    }

    pub fn has_audio(&self) -> bool {
        self.acodec.as_deref() != Some("none")
    }

    pub fn is_mp4(&self) -> bool {
        self.ext.as_deref() == Some("mp4")
    }

    /// Muxed video+audio in an MP4 container.
    pub fn is_downloadable(&self) -> bool {
        self.has_video() && self.has_audio() && self.is_mp4()
    }
}

/// Ordering applied to the derived quality labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityOrder {
    /// Descending string order. `"720p"` sorts above `"1080p"`.
    #[default]
    Lexicographic,
    /// Descending by leading number, labels without one last.
    Resolution,
}

impl std::fmt::Display for QualityOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityOrder::Lexicographic => write!(f, "lexicographic"),
            QualityOrder::Resolution => write!(f, "resolution"),
        }
    }
}

/// Keep only muxed MP4 formats, preserving extractor order.
pub fn filter_downloadable(formats: Vec<Format>) -> Vec<Format> {
    formats.into_iter().filter(Format::is_downloadable).collect()
}

/// Distinct quality labels of `formats`, ordered by `order`.
pub fn available_qualities(formats: &[Format], order: QualityOrder) -> Vec<String> {
    let distinct: BTreeSet<&str> = formats
        .iter()
        .filter_map(|f| f.format_note.as_deref())
        .collect();

    let mut labels: Vec<String> = distinct.into_iter().map(String::from).collect();
    match order {
        QualityOrder::Lexicographic => labels.reverse(),
        QualityOrder::Resolution => labels.sort_by(|a, b| {
            match (leading_number(a), leading_number(b)) {
                (Some(x), Some(y)) => y.cmp(&x).then_with(|| b.cmp(a)),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => b.cmp(a),
            }
        }),
    }
    labels
}

fn leading_number(label: &str) -> Option<u32> {
    let digits: String = label.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Format id of the first descriptor labelled `quality`, or [`FALLBACK_FORMAT_ID`].
pub fn resolve_format_id<'a>(formats: &'a [Format], quality: &str) -> &'a str {
    formats
        .iter()
        .find(|f| f.format_note.as_deref() == Some(quality))
        .map(|f| f.format_id.as_str())
        .unwrap_or(FALLBACK_FORMAT_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(id: &str, ext: &str, vcodec: &str, acodec: &str, note: Option<&str>) -> Format {
        Format {
            format_id: id.to_string(),
            ext: Some(ext.to_string()),
            vcodec: Some(vcodec.to_string()),
            acodec: Some(acodec.to_string()),
            format_note: note.map(String::from),
        }
    }

    #[test]
    fn test_filter_keeps_muxed_mp4_only() {
        let formats = vec![
            format("140", "m4a", "none", "mp4a.40.2", Some("medium")),
            format("137", "mp4", "avc1.640028", "none", Some("1080p")),
            format("43", "webm", "vp8.0", "vorbis", Some("360p")),
            format("18", "mp4", "avc1.42001E", "mp4a.40.2", Some("360p")),
            format("22", "mp4", "avc1.64001F", "mp4a.40.2", Some("720p")),
        ];

        let kept = filter_downloadable(formats);
        let ids: Vec<_> = kept.iter().map(|f| f.format_id.as_str()).collect();
        assert_eq!(ids, ["18", "22"]);
    }

    #[test]
    fn test_missing_codec_field_counts_as_present() {
        let f = Format {
            format_id: "18".to_string(),
            ext: Some("mp4".to_string()),
            vcodec: None,
            acodec: None,
            format_note: None,
        };
        assert!(f.is_downloadable());

        let no_ext = Format { ext: None, ..f };
        assert!(!no_ext.is_downloadable());
    }

    #[test]
    fn test_qualities_are_deduplicated() {
        let formats = vec![
            format("22", "mp4", "avc1", "mp4a", Some("720p")),
            format("23", "mp4", "avc1", "mp4a", Some("720p")),
            format("37", "mp4", "avc1", "mp4a", Some("1080p")),
            format("38", "mp4", "avc1", "mp4a", None),
        ];

        let qualities = available_qualities(&formats, QualityOrder::Lexicographic);
        assert_eq!(qualities.len(), 2);
    }

    #[test]
    fn test_lexicographic_order_is_descending_string_order() {
        let formats = vec![
            format("1", "mp4", "avc1", "mp4a", Some("1080p")),
            format("2", "mp4", "avc1", "mp4a", Some("360p")),
            format("3", "mp4", "avc1", "mp4a", Some("720p")),
        ];

        let qualities = available_qualities(&formats, QualityOrder::Lexicographic);
        assert_eq!(qualities, ["720p", "360p", "1080p"]);
    }

    #[test]
    fn test_resolution_order_is_numeric_with_text_last() {
        let formats = vec![
            format("1", "mp4", "avc1", "mp4a", Some("medium")),
            format("2", "mp4", "avc1", "mp4a", Some("360p")),
            format("3", "mp4", "avc1", "mp4a", Some("1080p")),
            format("4", "mp4", "avc1", "mp4a", Some("720p60")),
            format("5", "mp4", "avc1", "mp4a", Some("720p")),
        ];

        let qualities = available_qualities(&formats, QualityOrder::Resolution);
        assert_eq!(qualities, ["1080p", "720p60", "720p", "360p", "medium"]);
    }

    #[test]
    fn test_resolve_picks_first_match_in_extractor_order() {
        let formats = vec![
            format("18", "mp4", "avc1", "mp4a", Some("360p")),
            format("22", "mp4", "avc1", "mp4a", Some("720p")),
            format("95", "mp4", "avc1", "mp4a", Some("720p")),
        ];

        assert_eq!(resolve_format_id(&formats, "720p"), "22");
        assert_eq!(resolve_format_id(&formats, "360p"), "18");
    }

    #[test]
    fn test_resolve_falls_back_to_best() {
        let formats = vec![format("18", "mp4", "avc1", "mp4a", Some("360p"))];

        assert_eq!(resolve_format_id(&formats, "4320p"), FALLBACK_FORMAT_ID);
        assert_eq!(resolve_format_id(&[], "360p"), "best");
    }
}
