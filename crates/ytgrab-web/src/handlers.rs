//! Request handlers for the single page and its two form posts

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use tracing::{info, warn};
use url::form_urlencoded;
use ytgrab_core::{fetch_video_info, is_valid_youtube_url, VideoInfo};

use crate::error::UserFacingError;
use crate::session::{Session, Theme};
use crate::views::{render_page, Notice, Page};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    pub url: String,
    pub quality: String,
}

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    /// Present (as `"on"`) only when the checkbox is ticked.
    #[serde(default)]
    pub dark: Option<String>,
    /// URL shown when the toggle was clicked, carried back after the redirect.
    #[serde(default)]
    pub url: Option<String>,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<IndexQuery>,
) -> Response {
    let session = state.sessions.resolve(&headers);
    let url = query.url.unwrap_or_default();

    if url.is_empty() {
        let page = Page {
            theme: session.theme,
            ..Default::default()
        };
        return respond(&session, StatusCode::OK, render_page(&page));
    }

    let (status, notices, video) = match lookup(&state, &url).await {
        Ok(video) if video.available_qualities.is_empty() => {
            let err = UserFacingError::NoDownloadableFormats;
            let mut notices = fetched_notice();
            notices.extend(err.notices());
            (err.status(), notices, Some(video))
        }
        Ok(video) => (StatusCode::OK, fetched_notice(), Some(video)),
        Err(err) => (err.status(), err.notices(), None),
    };

    let page = Page {
        theme: session.theme,
        url: &url,
        video: video.as_ref(),
        selected_quality: None,
        notices,
        download_notices: Vec::new(),
    };
    respond(&session, status, render_page(&page))
}

pub async fn download(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<DownloadForm>,
) -> Response {
    let session = state.sessions.resolve(&headers);

    let video = match lookup(&state, &form.url).await {
        Ok(video) => video,
        Err(err) => {
            let page = Page {
                theme: session.theme,
                url: &form.url,
                notices: err.notices(),
                ..Default::default()
            };
            return respond(&session, err.status(), render_page(&page));
        }
    };

    if video.available_qualities.is_empty() {
        let err = UserFacingError::NoDownloadableFormats;
        let page = Page {
            theme: session.theme,
            url: &form.url,
            video: Some(&video),
            notices: err.notices(),
            ..Default::default()
        };
        return respond(&session, err.status(), render_page(&page));
    }

    let format_id = video.format_id_for(&form.quality);
    info!("Quality {:?} resolved to format {}", form.quality, format_id);

    let (status, download_notices) = match state.downloader.download(form.url.trim(), format_id).await {
        Ok(title) => (
            StatusCode::OK,
            vec![Notice::Success(format!(
                "✅ Video '{}' downloaded to your Downloads folder ({}).",
                title,
                state.downloader.download_dir().display()
            ))],
        ),
        Err(e) => {
            warn!("Download failed for {}: {}", form.url, e);
            let err = UserFacingError::from(e);
            (err.status(), err.notices())
        }
    };

    let page = Page {
        theme: session.theme,
        url: &form.url,
        video: Some(&video),
        selected_quality: Some(&form.quality),
        notices: fetched_notice(),
        download_notices,
    };
    respond(&session, status, render_page(&page))
}

pub async fn set_theme(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ThemeForm>,
) -> Response {
    let session = state.sessions.resolve(&headers);
    let theme = if form.dark.is_some() {
        Theme::Dark
    } else {
        Theme::Light
    };
    state.sessions.set_theme(session.id, theme);

    let location = match form.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => {
            let query: String = form_urlencoded::byte_serialize(url.as_bytes()).collect();
            format!("/?url={}", query)
        }
        _ => "/".to_string(),
    };

    let mut response = Redirect::to(&location).into_response();
    if let Some(cookie) = session.set_cookie() {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}

/// Validate then fetch; the two failure points ahead of rendering.
async fn lookup(state: &AppState, url: &str) -> Result<VideoInfo, UserFacingError> {
    if !is_valid_youtube_url(url) {
        return Err(UserFacingError::InvalidUrl);
    }

    fetch_video_info(state.extractor.as_ref(), url.trim(), state.quality_order)
        .await
        .map_err(|e| {
            warn!("Metadata fetch failed for {}: {}", url, e);
            UserFacingError::from(e)
        })
}

fn fetched_notice() -> Vec<Notice> {
    vec![Notice::Success(
        "Video information fetched successfully!".to_string(),
    )]
}

fn respond(session: &Session, status: StatusCode, body: String) -> Response {
    let mut response = (status, Html(body)).into_response();
    if let Some(cookie) = session.set_cookie() {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}
