//! Per-session display preference

use axum::http::{header, HeaderMap, HeaderValue};
use cookie::{Cookie, SameSite};
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "ytgrab_session";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Session handle resolved for one request.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub id: Uuid,
    pub theme: Theme,
    /// The browser did not present a known session cookie.
    pub is_new: bool,
}

impl Session {
    /// `Set-Cookie` value for a freshly created session.
    pub fn set_cookie(&self) -> Option<HeaderValue> {
        if !self.is_new {
            return None;
        }
        let cookie = Cookie::build((SESSION_COOKIE, self.id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        HeaderValue::from_str(&cookie.to_string()).ok()
    }
}

/// Theme preference keyed by session id. Lives as long as the process.
///
/// Only sessions that chose a non-default theme are stored, so requests
/// that never toggle the theme leave the map untouched.
#[derive(Debug, Default)]
pub struct SessionStore {
    themes: RwLock<HashMap<Uuid, Theme>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the session named by the request cookie, minting an id if absent.
    pub fn resolve(&self, headers: &HeaderMap) -> Session {
        match session_id_from_headers(headers) {
            Some(id) => Session {
                id,
                theme: self.themes.read().get(&id).copied().unwrap_or_default(),
                is_new: false,
            },
            None => Session {
                id: Uuid::new_v4(),
                theme: Theme::default(),
                is_new: true,
            },
        }
    }

    pub fn set_theme(&self, id: Uuid, theme: Theme) {
        let mut themes = self.themes.write();
        if theme == Theme::default() {
            themes.remove(&id);
        } else {
            themes.insert(id, theme);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.themes.read().len()
    }
}

fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|c| c.name() == SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_new_session_defaults_to_light() {
        let store = SessionStore::new();
        let session = store.resolve(&HeaderMap::new());

        assert!(session.is_new);
        assert_eq!(session.theme, Theme::Light);

        let cookie = session.set_cookie().unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.starts_with("ytgrab_session="));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn test_cookieless_requests_do_not_grow_store() {
        let store = SessionStore::new();
        for _ in 0..10_000 {
            store.resolve(&HeaderMap::new());
        }
        assert_eq!(store.len(), 0);

        let session = store.resolve(&HeaderMap::new());
        store.set_theme(session.id, Theme::Dark);
        assert_eq!(store.len(), 1);

        store.set_theme(session.id, Theme::Light);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_theme_persists_across_requests() {
        let store = SessionStore::new();
        let first = store.resolve(&HeaderMap::new());
        store.set_theme(first.id, Theme::Dark);

        let headers = headers_with_cookie(&format!("other=1; {}={}", SESSION_COOKIE, first.id));
        let second = store.resolve(&headers);

        assert!(!second.is_new);
        assert_eq!(second.id, first.id);
        assert_eq!(second.theme, Theme::Dark);
        assert!(second.set_cookie().is_none());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.resolve(&HeaderMap::new());
        let b = store.resolve(&HeaderMap::new());
        store.set_theme(a.id, Theme::Dark);

        let theme_of = |id: Uuid| {
            store
                .resolve(&headers_with_cookie(&format!("{}={}", SESSION_COOKIE, id)))
                .theme
        };
        assert_eq!(theme_of(a.id), Theme::Dark);
        assert_eq!(theme_of(b.id), Theme::Light);
    }

    #[test]
    fn test_known_cookie_kept_and_garbled_cookie_replaced() {
        let store = SessionStore::new();

        let id = Uuid::new_v4();
        let untouched = store.resolve(&headers_with_cookie(&format!("{}={}", SESSION_COOKIE, id)));
        assert!(!untouched.is_new);
        assert_eq!(untouched.id, id);
        assert_eq!(untouched.theme, Theme::Light);

        let garbled = store.resolve(&headers_with_cookie("ytgrab_session=not-a-uuid"));
        assert!(garbled.is_new);
        assert_eq!(store.len(), 0);
    }
}
