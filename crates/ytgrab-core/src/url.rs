//! YouTube URL validation

use regex::Regex;
use std::sync::OnceLock;

const YOUTUBE_URL_PATTERN: &str =
    r"^(https?://)?(www\.)?(youtube\.com/watch\?v=|youtu\.be/)[\w-]{11}($|&|\?)";

fn youtube_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(YOUTUBE_URL_PATTERN).expect("static pattern compiles"))
}

/// Check that a string is a single-video YouTube URL.
///
/// Accepts `youtube.com/watch?v=<id>` and `youtu.be/<id>` with an optional
/// scheme and `www.` prefix, where `<id>` is exactly 11 word characters or
/// hyphens followed by end of input, `&` or `?`. Surrounding whitespace is
/// ignored. Playlists, shorts and other hosts are rejected.
pub fn is_valid_youtube_url(url: &str) -> bool {
    youtube_url_regex().is_match(url.trim())
}
