//! Location and history access via web-sys

use smew_core::{AuthError, AuthResult};
use smew_session::BrowserSurface;
use url::Url;
use wasm_bindgen::JsValue;

/// Browser surface backed by the real window object
#[derive(Clone, Copy, Default)]
pub struct WebBrowserSurface;

impl WebBrowserSurface {
    pub fn new() -> Self {
        Self
    }
}

pub(crate) fn window() -> AuthResult<web_sys::Window> {
    web_sys::window().ok_or_else(|| AuthError::browser_unavailable("no window object"))
}

impl BrowserSurface for WebBrowserSurface {
    fn current_url(&self) -> AuthResult<Url> {
        let href = window()?
            .location()
            .href()
            .map_err(|e| AuthError::browser_unavailable(format!("location.href: {e:?}")))?;
        Url::parse(&href).map_err(|e| AuthError::browser_unavailable(e.to_string()))
    }

    fn replace_url(&self, url: &Url) -> AuthResult<()> {
        let history = window()?
            .history()
            .map_err(|e| AuthError::browser_unavailable(format!("window.history: {e:?}")))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(url.as_str()))
            .map_err(|e| AuthError::browser_unavailable(format!("replaceState: {e:?}")))
    }
}
