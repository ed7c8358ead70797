//! HTML rendering for the single page

use std::fmt::Write;
use ytgrab_core::VideoInfo;

use crate::session::Theme;

const URL_PLACEHOLDER: &str = "e.g., https://www.youtube.com/watch?v=dQw4w9WgXcQ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Notice::Success(_) => "notice success",
            Notice::Warning(_) => "notice warning",
            Notice::Error(_) => "notice error",
        }
    }

    fn text(&self) -> &str {
        match self {
            Notice::Success(t) | Notice::Warning(t) | Notice::Error(t) => t,
        }
    }
}

/// Everything one render of the page needs.
#[derive(Debug, Default)]
pub struct Page<'a> {
    pub theme: Theme,
    pub url: &'a str,
    pub video: Option<&'a VideoInfo>,
    /// Quality preselected in the dropdown.
    pub selected_quality: Option<&'a str>,
    /// Shown above the video panel.
    pub notices: Vec<Notice>,
    /// Shown below the download button.
    pub download_notices: Vec<Notice>,
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(page: &Page<'_>) -> String {
    let mut html = String::with_capacity(8 * 1024);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>YouTube Video Downloader</title>
<link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>🎥</text></svg>">
<style>{css}</style>
</head>
<body>
<div class="layout">
"#,
        theme = page.theme.as_str(),
        css = STYLE,
    );

    render_sidebar(&mut html, page.theme, page.url);

    html.push_str("<main>\n");
    html.push_str(
        "<h1>🎥 YouTube Video Downloader</h1>\n<p class=\"subtitle\">Powered by yt-dlp</p>\n",
    );

    let _ = write!(
        html,
        r#"<form method="get" action="/" class="url-form" onsubmit="this.querySelector('.spinner').hidden=false">
<label for="url">Enter YouTube Video URL</label>
<input type="text" id="url" name="url" value="{url}" placeholder="{placeholder}" title="Paste the full YouTube video URL here." autocomplete="off">
<span class="spinner" hidden>Fetching video information...</span>
</form>
"#,
        url = escape_html(page.url),
        placeholder = URL_PLACEHOLDER,
    );

    render_notices(&mut html, &page.notices);

    if let Some(video) = page.video {
        render_video(&mut html, page, video);
    }

    html.push_str("<hr>\n");
    html.push_str(HELP);
    html.push_str("<div class=\"footer\">Made with ❤️ using Rust and yt-dlp</div>\n");
    html.push_str("</main>\n</div>\n</body>\n</html>\n");
    html
}

fn render_sidebar(html: &mut String, theme: Theme, url: &str) {
    let checked = if theme.is_dark() { " checked" } else { "" };
    let carried_url = if url.trim().is_empty() {
        String::new()
    } else {
        format!(
            "<input type=\"hidden\" name=\"url\" value=\"{}\">\n",
            escape_html(url)
        )
    };
    let _ = write!(
        html,
        r#"<aside class="sidebar">
<h2>App Navigation</h2>
<nav>
<a class="button" href="/">Home</a>
<a class="button" href="/#about">About</a>
<a class="button" href="/#settings">Settings</a>
</nav>
<hr>
<h3 id="settings">Theme Settings</h3>
<form method="post" action="/theme">
{carried_url}<label><input type="checkbox" name="dark" value="on"{checked} onchange="this.form.submit()"> Enable Dark Mode</label>
<noscript><button type="submit">Apply</button></noscript>
</form>
</aside>
"#,
    );
}

fn render_notices(html: &mut String, notices: &[Notice]) {
    for notice in notices {
        let _ = writeln!(
            html,
            r#"<div class="{}">{}</div>"#,
            notice.class(),
            escape_html(notice.text())
        );
    }
}

fn render_video(html: &mut String, page: &Page<'_>, video: &VideoInfo) {
    html.push_str("<hr>\n<section class=\"video\">\n<div class=\"thumb\">\n");
    if let Some(ref thumbnail) = video.thumbnail {
        let _ = writeln!(
            html,
            r#"<figure><img src="{}" alt="Video Thumbnail"><figcaption>Video Thumbnail</figcaption></figure>"#,
            escape_html(thumbnail)
        );
    }
    html.push_str("</div>\n<div class=\"details\">\n");

    let _ = write!(
        html,
        "<h3>{title}</h3>\n<p>👤 <strong>Channel:</strong> {uploader}</p>\n<p>⏱️ <strong>Duration:</strong> {duration}</p>\n",
        title = escape_html(video.display_title()),
        uploader = escape_html(video.uploader.as_deref().unwrap_or("")),
        duration = escape_html(&video.duration),
    );

    if !video.available_qualities.is_empty() {
        let _ = write!(
            html,
            r#"<form method="post" action="/download" onsubmit="this.querySelector('.spinner').hidden=false">
<input type="hidden" name="url" value="{url}">
<label for="quality">Select Video Quality</label>
<select id="quality" name="quality" title="Choose the desired video resolution.">
"#,
            url = escape_html(page.url),
        );
        for quality in &video.available_qualities {
            let selected = if page.selected_quality == Some(quality.as_str()) {
                " selected"
            } else {
                ""
            };
            let q = escape_html(quality);
            let _ = writeln!(html, r#"<option value="{q}"{selected}>{q}</option>"#);
        }
        let _ = write!(
            html,
            r#"</select>
<hr>
<button type="submit" class="primary">⬇️ Download Video</button>
<span class="spinner" hidden>Downloading '{title}'...</span>
</form>
"#,
            title = escape_html(video.display_title()),
        );
        render_notices(html, &page.download_notices);
    }

    html.push_str("</div>\n</section>\n");
}

const HELP: &str = r#"<details class="help" id="about">
<summary>💡 How to use this app</summary>
<ol>
<li><strong>Paste a YouTube Video URL:</strong> Copy and paste the full URL of the YouTube video you want to download into the input box above.</li>
<li><strong>Fetch Video Info:</strong> The app fetches and displays details like the video title, channel, duration, and thumbnail.</li>
<li><strong>Select Quality:</strong> Choose your preferred video quality from the dropdown menu.</li>
<li><strong>Download:</strong> Click the 'Download Video' button. The video will be saved to your 'Downloads' folder.</li>
</ol>
<p><strong>Important Notes:</strong></p>
<ul>
<li>Only public YouTube videos are supported.</li>
<li>Ensure you have sufficient storage space for the download.</li>
<li>Download speeds may vary based on your internet connection and video size.</li>
</ul>
</details>
"#;

const STYLE: &str = r#"
:root {
  --primary-color: #FF4B4B;
  --background-color: #FFFFFF;
  --secondary-background-color: #F0F2F6;
  --text-color: #333333;
  --text-color-light: #666666;
  --border-color: #DDDDDD;
}
[data-theme="dark"] {
  --primary-color: #FF4B4B;
  --background-color: #1E1E1E;
  --secondary-background-color: #2D2D2D;
  --text-color: #E0E0E0;
  --text-color-light: #AAAAAA;
  --border-color: #444444;
}
html, body { margin: 0; font-family: 'Roboto', sans-serif; background: var(--background-color); color: var(--text-color); }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 16rem; padding: 1.5rem; background: var(--secondary-background-color); }
.sidebar nav .button { display: block; margin-bottom: 0.5rem; text-align: center; }
main { flex: 1; max-width: 60rem; margin: 0 auto; padding: 2rem; }
h1 { color: var(--primary-color); text-align: center; font-weight: 700; margin-bottom: 0.5rem; }
h2, h3 { color: var(--primary-color); }
.subtitle { text-align: center; color: var(--text-color-light); margin-bottom: 2rem; }
input[type=text], select { width: 100%; box-sizing: border-box; border-radius: 0.5rem; border: 1px solid var(--border-color); padding: 0.75rem 1rem; background: var(--background-color); color: var(--text-color); }
.button, button { border-radius: 0.5rem; padding: 0.75rem 1.5rem; font-weight: 600; border: 1px solid var(--border-color); background: var(--background-color); color: var(--text-color); text-decoration: none; cursor: pointer; transition: all 0.2s ease-in-out; }
.button:hover, button:hover { transform: translateY(-2px); }
button.primary { width: 100%; background: var(--primary-color); color: #FFFFFF; border: none; }
.notice { border-radius: 0.5rem; padding: 0.75rem 1rem; margin: 1rem 0; }
.notice.success { background: #D4EDDA; color: #155724; }
.notice.warning { background: #FFF3CD; color: #856404; }
.notice.error { background: #F8D7DA; color: #721C24; }
.video { display: grid; grid-template-columns: 1fr 2fr; gap: 2rem; }
.thumb img { width: 100%; border-radius: 0.5rem; }
.thumb figcaption { text-align: center; font-size: 0.85rem; color: var(--text-color-light); }
.spinner::before { content: ""; display: inline-block; width: 1em; height: 1em; margin-right: 0.5em; vertical-align: middle; border: 2px solid var(--border-color); border-top-color: var(--primary-color); border-radius: 50%; animation: spin 0.8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.help { border-radius: 0.5rem; border: 1px solid var(--border-color); padding: 1rem; background: var(--secondary-background-color); font-size: 0.9rem; line-height: 1.5; }
.footer { text-align: center; margin-top: 3rem; font-size: 0.85rem; color: var(--text-color-light); }
"#;
