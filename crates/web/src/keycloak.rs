//! Bridge to the Keycloak JS adapter
//!
//! The adapter script is served by the identity provider and loaded by the
//! hosting page; this module reaches it through the `Keycloak` global and
//! drives its promise-based API. The legacy `.success/.error` chains of the
//! old adapter become plain `Result`s here.

use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use smew_core::{AuthError, AuthResult, Claims, Credential, LoginOutcome, RefreshOutcome};
use smew_session::{IdentityProvider, InitOptions};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::browser::window;

/// Identity provider backed by the Keycloak JS adapter
pub struct KeycloakProvider {
    adapter: JsValue,
    // keeps the registered expiry callback alive for the page's lifetime
    _expiry_handler: RefCell<Option<Closure<dyn Fn()>>>,
}

impl KeycloakProvider {
    /// Construct the adapter from its endpoint configuration resource
    ///
    /// The resource is passed through untouched; the adapter fetches and
    /// interprets it itself.
    pub fn from_resource(resource: &str) -> AuthResult<Self> {
        let window = window()?;
        let constructor = Reflect::get(&window, &JsValue::from_str("Keycloak"))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok())
            .ok_or_else(|| AuthError::browser_unavailable("Keycloak adapter script not loaded"))?;
        let adapter = constructor
            .call1(&JsValue::UNDEFINED, &JsValue::from_str(resource))
            .map_err(|e| {
                AuthError::browser_unavailable(format!("Keycloak adapter construction: {e:?}"))
            })?;
        Ok(Self {
            adapter,
            _expiry_handler: RefCell::new(None),
        })
    }

    fn method(&self, name: &str) -> Result<Function, String> {
        Reflect::get(&self.adapter, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok())
            .ok_or_else(|| format!("adapter has no {name} method"))
    }

    /// Read the adapter's current token state
    fn current_credential(&self) -> Credential {
        let token = Reflect::get(&self.adapter, &JsValue::from_str("token"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        let parsed =
            Reflect::get(&self.adapter, &JsValue::from_str("tokenParsed")).unwrap_or(JsValue::NULL);
        let expires_at = Reflect::get(&parsed, &JsValue::from_str("exp"))
            .ok()
            .and_then(|v| v.as_f64())
            .map(|secs| secs as i64);
        Credential::new(token, expires_at, parse_claims(parsed))
    }
}

#[async_trait(?Send)]
impl IdentityProvider for KeycloakProvider {
    async fn initialize(&self, options: InitOptions) -> LoginOutcome {
        let init = self.method("init").map_err(AuthError::login_failed)?;
        let options = serde_wasm_bindgen::to_value(&options)
            .map_err(|e| AuthError::login_failed(format!("init options: {e}")))?;
        let promise: Promise = init
            .call1(&self.adapter, &options)
            .map_err(|e| AuthError::login_failed(format!("init call: {e:?}")))?
            .dyn_into()
            .map_err(|_| AuthError::login_failed("adapter init did not return a promise"))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| AuthError::login_failed(format!("{e:?}")))?;
        Ok(self.current_credential())
    }

    async fn refresh(&self, min_validity: Duration) -> RefreshOutcome {
        let update = self.method("updateToken").map_err(AuthError::refresh_failed)?;
        let min_validity = JsValue::from_f64(min_validity.as_secs() as f64);
        let promise: Promise = update
            .call1(&self.adapter, &min_validity)
            .map_err(|e| AuthError::refresh_failed(format!("updateToken call: {e:?}")))?
            .dyn_into()
            .map_err(|_| AuthError::refresh_failed("adapter updateToken did not return a promise"))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| AuthError::refresh_failed(format!("{e:?}")))?;
        Ok(self.current_credential())
    }

    fn set_expiry_handler(&self, handler: Rc<dyn Fn()>) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn Fn()>);
        if let Err(err) = Reflect::set(
            &self.adapter,
            &JsValue::from_str("onTokenExpired"),
            closure.as_ref(),
        ) {
            tracing::warn!("could not register token expiry handler: {err:?}");
            return;
        }
        *self._expiry_handler.borrow_mut() = Some(closure);
    }
}

/// Decode the adapter's parsed-claims object, tolerating its absence
fn parse_claims(value: JsValue) -> Claims {
    if value.is_null() || value.is_undefined() {
        return Claims::default();
    }
    serde_wasm_bindgen::from_value(value).unwrap_or_default()
}
