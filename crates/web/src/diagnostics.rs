//! Browser metadata capture

use smew_core::{AuthError, AuthResult, BrowserInfo};
use wasm_bindgen::JsValue;

use crate::browser::window;

/// Capture the user agent and viewport geometry once, for diagnostic
/// payloads
pub fn capture() -> AuthResult<BrowserInfo> {
    let window = window()?;
    let user_agent = window
        .navigator()
        .user_agent()
        .map_err(|e| AuthError::browser_unavailable(format!("navigator.userAgent: {e:?}")))?;
    Ok(BrowserInfo {
        user_agent,
        inner_width: dimension(window.inner_width())?,
        inner_height: dimension(window.inner_height())?,
        outer_width: dimension(window.outer_width())?,
        outer_height: dimension(window.outer_height())?,
    })
}

fn dimension(value: Result<JsValue, JsValue>) -> AuthResult<f64> {
    value
        .map_err(|e| AuthError::browser_unavailable(format!("viewport dimension: {e:?}")))?
        .as_f64()
        .ok_or_else(|| AuthError::browser_unavailable("viewport dimension is not a number"))
}
