use anyhow::Result;
use std::path::Path;
use ytgrab_core::config::Config;

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;

    println!("ytgrab configuration\n");
    print!("{}", toml::to_string_pretty(&config)?);

    if config.paths.yt_dlp.is_none() {
        println!("\n# paths.yt_dlp unset: auto-detected from PATH");
    }

    // Show config file locations
    println!("\nConfig file locations (in priority order):");
    println!("  1. Environment variables (YTGRAB_*, nested keys split on __)");
    if let Some(p) = config_path {
        println!("  2. {} (specified)", p.display());
    }
    if let Some(config_dir) = dirs::config_dir() {
        println!("  3. {}/ytgrab/config.toml", config_dir.display());
    }

    Ok(())
}
