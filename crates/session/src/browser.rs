//! Browser URL and history seam

use smew_core::AuthResult;
use url::Url;

/// Narrow view of the hosting browser's location and history
#[cfg_attr(test, mockall::automock)]
pub trait BrowserSurface {
    /// Current page URL
    fn current_url(&self) -> AuthResult<Url>;

    /// Replace the visible URL in place
    ///
    /// History-replacement semantics: the current history entry is mutated,
    /// no navigation occurs, no new entry is pushed.
    fn replace_url(&self, url: &Url) -> AuthResult<()>;
}

/// Propagate the locale claim into the page URL, best effort
///
/// Skipped when the URL already carries the parameter, when the claim value
/// would not survive as a query parameter, or when the browser surface
/// fails. Never escalates: bootstrap succeeds regardless.
pub(crate) fn propagate_locale(browser: &dyn BrowserSurface, param: &str, locale: &str) {
    if !is_valid_locale(locale) {
        tracing::debug!(locale, "locale claim unusable as query parameter, skipping URL rewrite");
        return;
    }
    let mut url = match browser.current_url() {
        Ok(url) => url,
        Err(err) => {
            tracing::debug!(error = %err, "page URL unreadable, skipping locale propagation");
            return;
        }
    };
    if url.query_pairs().any(|(key, _)| key == param) {
        // an explicit choice in the URL wins over the claim
        return;
    }
    url.query_pairs_mut().append_pair(param, locale);
    if let Err(err) = browser.replace_url(&url) {
        tracing::debug!(error = %err, "history replacement unavailable, keeping URL as is");
    }
}

/// A locale is propagated only if it is plain enough to ride in a query
/// parameter: ASCII alphanumerics plus `-` and `_`
fn is_valid_locale(locale: &str) -> bool {
    !locale.is_empty()
        && locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
