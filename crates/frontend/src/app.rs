use std::sync::Arc;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::routes::routes::AppRoutes;
use crate::shared::api_client::ApiClient;
use crate::shared::browser::{BrowserEnv, WebBrowser};
use crate::shared::transport::FetchTransport;
use crate::system::tenant::{LocalStorage, TenantContext};

/// Process-wide services shared by every page through context
#[derive(Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub tenant: TenantContext,
    pub client: ApiClient,
    pub browser: Arc<dyn BrowserEnv>,
}

impl AppServices {
    /// Services backed by the browser: `localStorage`, `fetch` and `window`
    pub fn browser(config: AppConfig) -> Self {
        let tenant = TenantContext::new(Arc::new(LocalStorage), config.auth.storage_key.clone());
        let client = ApiClient::new(&config.api, tenant.clone(), Arc::new(FetchTransport));
        Self {
            config,
            tenant,
            client,
            browser: Arc::new(WebBrowser),
        }
    }
}

pub fn use_app_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices context not found")
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppServices::browser(AppConfig::load_or_default()));

    view! {
        <AppRoutes />
    }
}
