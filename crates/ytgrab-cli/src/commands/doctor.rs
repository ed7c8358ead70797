use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::Command;
use ytgrab_core::config::Config;

pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;

    println!("ytgrab dependency check\n");

    // yt-dlp is required; ffmpeg only matters for formats yt-dlp has to merge
    let yt_dlp_ok = check("yt-dlp", config.yt_dlp_path().ok(), &["--version"], |out| {
        out.trim().to_string()
    });
    check("ffmpeg", config.ffmpeg_path().ok(), &["-version"], |out| {
        out.lines()
            .next()
            .and_then(|l| l.split_whitespace().nth(2))
            .unwrap_or("unknown")
            .to_string()
    });

    print!("download dir:  ");
    let dir = &config.download.directory;
    if dir.is_dir() {
        println!("OK ({})", dir.display());
    } else {
        println!("{} (created on first download)", dir.display());
    }

    println!();
    if yt_dlp_ok {
        println!("All required dependencies OK!");
    } else {
        println!("yt-dlp is missing. Install with: brew install yt-dlp (or pipx install yt-dlp)");
    }

    Ok(())
}

fn check(name: &str, path: Option<PathBuf>, args: &[&str], version: impl Fn(&str) -> String) -> bool {
    print!("{:<15}", format!("{}:", name));
    let Some(path) = path else {
        println!("NOT FOUND");
        return false;
    };

    match Command::new(&path).args(args).output() {
        Ok(out) if out.status.success() => {
            println!("OK ({})", version(&String::from_utf8_lossy(&out.stdout)));
            true
        }
        _ => {
            println!("FOUND at {} but failed to get version", path.display());
            false
        }
    }
}
