use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use ytgrab_core::{config::Config, YtDlp};
use ytgrab_web::AppState;

pub async fn run(listen: Option<&str>, config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let yt_dlp = config.yt_dlp_path()?;
    debug!("Using yt-dlp at {}", yt_dlp.display());
    let listen_addr = listen.unwrap_or(&config.server.listen_addr);

    println!("YouTube Video Downloader");
    println!("  http://{}", listen_addr);
    println!("  saving to {}\n", config.download.directory.display());

    let state = AppState::new(
        Arc::new(YtDlp::new(yt_dlp)),
        config.download.directory.clone(),
        config.download.quality_order,
    );

    ytgrab_web::serve(state, listen_addr)
        .await
        .with_context(|| format!("Web UI failed on {}", listen_addr))
}
