use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use ytgrab_core::{
    config::Config, fetch_video_info, is_valid_youtube_url, VideoInfo, YtDlp, YtGrabError,
};

pub async fn run(url: &str, config_path: Option<&Path>) -> Result<()> {
    let info = fetch(url, config_path).await?;

    println!("{}", info.display_title());
    println!("  Channel:  {}", info.uploader.as_deref().unwrap_or("-"));
    println!("  Duration: {}", info.duration);
    if let Some(ref thumbnail) = info.thumbnail {
        println!("  Thumbnail: {}", thumbnail);
    }

    if info.available_qualities.is_empty() {
        println!("\nNo downloadable formats found for this video.");
        return Ok(());
    }

    println!("\nQualities:");
    for quality in &info.available_qualities {
        println!("  {:<10} format {}", quality, info.format_id_for(quality));
    }
    Ok(())
}

/// Validate and fetch behind a spinner. Shared with `download`.
pub async fn fetch(url: &str, config_path: Option<&Path>) -> Result<VideoInfo> {
    if !is_valid_youtube_url(url) {
        return Err(YtGrabError::InvalidUrl(url.to_string()).into());
    }

    let config = Config::load(config_path)?;
    let extractor = YtDlp::new(config.yt_dlp_path()?);

    let pb = spinner("Fetching video information...")?;
    let result = fetch_video_info(&extractor, url.trim(), config.download.quality_order).await;
    match result {
        Ok(info) => {
            pb.finish_and_clear();
            Ok(info)
        }
        Err(e) => {
            pb.abandon_with_message("Could not retrieve video information.");
            Err(e.into())
        }
    }
}

pub fn spinner(message: &'static str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.cyan} [{elapsed_precise}] {msg}")?);
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}
