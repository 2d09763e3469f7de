//! Window side effects used by the pages: URL handling, navigation and
//! blocking notifications.

use wasm_bindgen_futures::spawn_local;

pub trait BrowserEnv: Send + Sync {
    /// Current query string without the leading `?`
    fn query_string(&self) -> String;

    /// Current path (e.g. `/parametros-sistema`)
    fn path(&self) -> String;

    /// Rewrite the visible URL without reloading or adding a history entry
    fn replace_url(&self, url: &str);

    /// Leave the application
    fn redirect(&self, url: &str);

    fn redirect_after(&self, url: &str, delay_ms: u32);

    /// Blocking notification
    fn notify(&self, message: &str);

    fn go_back(&self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WebBrowser;

impl BrowserEnv for WebBrowser {
    fn query_string(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|s| s.trim_start_matches('?').to_string())
            .unwrap_or_default()
    }

    fn path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn replace_url(&self, url: &str) {
        if let Some(w) = web_sys::window() {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url));
            }
        }
    }

    fn redirect(&self, url: &str) {
        log::info!("Redirecting to {}", url);
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href(url);
        }
    }

    fn redirect_after(&self, url: &str, delay_ms: u32) {
        let url = url.to_string();
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            WebBrowser.redirect(&url);
        });
    }

    fn notify(&self, message: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }

    fn go_back(&self) {
        if let Some(w) = web_sys::window() {
            if let Ok(history) = w.history() {
                let _ = history.back();
            }
        }
    }
}
