use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use super::info::{fetch, spinner};
use ytgrab_core::{config::Config, Downloader, YtDlp};

pub async fn run(
    url: &str,
    quality: Option<&str>,
    output: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<()> {
    let info = fetch(url, config_path).await?;

    let Some(first) = info.available_qualities.first() else {
        bail!("No downloadable formats found for this video.");
    };
    let quality = quality.unwrap_or(first.as_str());
    let format_id = info.format_id_for(quality);
    debug!("Quality {} resolved to format {}", quality, format_id);

    let config = Config::load(config_path)?;
    let output_dir = output.unwrap_or_else(|| config.download.directory.clone());
    let downloader = Downloader::new(Arc::new(YtDlp::new(config.yt_dlp_path()?)), output_dir);

    println!("{} [{} -> format {}]", info.display_title(), quality, format_id);
    let pb = spinner("Downloading...")?;
    match downloader.download(url.trim(), format_id).await {
        Ok(title) => {
            pb.finish_with_message(format!(
                "Video '{}' downloaded to {}",
                title,
                downloader.download_dir().display()
            ));
            Ok(())
        }
        Err(e) => {
            pb.abandon_with_message("Video download failed.");
            Err(e.into())
        }
    }
}
