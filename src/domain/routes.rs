//! Hash routes of the single-page client and the REST endpoints it calls
//!
//! The route table is a plain value: resolving a fragment yields a `Route`
//! and the caller decides which view to render for it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pages reachable through the URL fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    Login,
    Register,
    Profile,
    Logout,
    NewsDetail(u64),
}

impl Route {
    /// Resolves a URL fragment such as `#/news/12`.
    ///
    /// The empty fragment, `/` and `#/` all redirect to `Home`. Otherwise the
    /// path must start with a single `/`; one trailing `/` is ignored.
    pub fn resolve(fragment: &str) -> Result<Self> {
        let unknown = || Error::UnknownRoute(fragment.to_string());

        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        let path = match path {
            "" => path,
            _ => path.strip_prefix('/').ok_or_else(unknown)?,
        };
        let path = path
            .strip_suffix('/')
            .filter(|rest| !rest.is_empty())
            .unwrap_or(path);

        let mut segments = path.split('/');
        let route = match (segments.next(), segments.next(), segments.next()) {
            (Some("") | Some("home"), None, _) => Route::Home,
            (Some("login"), None, _) => Route::Login,
            (Some("register"), None, _) => Route::Register,
            (Some("profile"), None, _) => Route::Profile,
            (Some("logout"), None, _) => Route::Logout,
            (Some("news"), Some(id), None) if is_news_id(id) => {
                id.parse().map(Route::NewsDetail).map_err(|_| unknown())?
            }
            _ => return Err(unknown()),
        };

        Ok(route)
    }

    /// Canonical fragment for this route
    pub fn fragment(&self) -> String {
        match self {
            Route::Home => "#/home".to_string(),
            Route::Login => "#/login".to_string(),
            Route::Register => "#/register".to_string(),
            Route::Profile => "#/profile".to_string(),
            Route::Logout => "#/logout".to_string(),
            Route::NewsDetail(id) => format!("#/news/{id}"),
        }
    }

    /// Whether the page chrome (navigation, user menu) is rendered before the page.
    ///
    /// Logout only clears the session and redirects, so it renders nothing.
    pub fn renders_index(&self) -> bool {
        !matches!(self, Route::Logout)
    }
}

/// Plain decimal digits only; `parse` alone would also take a leading `+`
fn is_news_id(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fragment())
    }
}

/// REST endpoints of the news API, rooted at a configurable base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base_url: String,
}

impl ApiEndpoints {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}/", self.base_url)
    }

    pub fn login(&self) -> String {
        self.url("login")
    }

    pub fn register(&self) -> String {
        self.url("register")
    }

    pub fn profile(&self, user_id: u64) -> String {
        self.url(&format!("profile/{user_id}"))
    }

    pub fn news_list(&self) -> String {
        self.url("news")
    }

    pub fn news_detail(&self, news_id: u64) -> String {
        self.url(&format!("news/{news_id}"))
    }

    pub fn comments(&self, news_id: u64) -> String {
        self.url(&format!("news/{news_id}/comments"))
    }

    pub fn comment(&self, news_id: u64, comment_id: u64) -> String {
        self.url(&format!("news/{news_id}/comments/{comment_id}"))
    }
}
