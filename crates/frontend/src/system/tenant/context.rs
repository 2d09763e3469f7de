use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::storage::TenantStorage;
use crate::shared::api_error::ApiError;
use crate::shared::browser::BrowserEnv;

/// Tenant identifier (RUC). Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantId(String);

impl TenantId {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        (!raw.is_empty()).then(|| TenantId(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The one stored tenant of the application
#[derive(Clone)]
pub struct TenantContext {
    storage: Arc<dyn TenantStorage>,
    key: String,
}

impl TenantContext {
    pub fn new(storage: Arc<dyn TenantStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Persist a tenant taken from the URL. A blank value is ignored; a valid
    /// one replaces whatever was stored.
    pub fn capture(&self, url_param: Option<&str>) -> Option<TenantId> {
        let tenant = TenantId::parse(url_param?)?;
        self.storage.set(&self.key, tenant.as_str());
        log::info!("Tenant captured from URL: {}", tenant);
        Some(tenant)
    }

    pub fn read(&self) -> Option<TenantId> {
        TenantId::parse(&self.storage.get(&self.key)?)
    }

    pub fn clear(&self) {
        self.storage.remove(&self.key);
    }

    pub fn require(&self) -> Result<TenantId, ApiError> {
        self.read().ok_or(ApiError::MissingTenant)
    }
}

impl fmt::Debug for TenantContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TenantContext").field("key", &self.key).finish()
    }
}

/// `ruc` parameter of a query string, `Some("")` when present but empty
pub fn tenant_from_query(query: &str) -> Option<String> {
    let mut params: HashMap<String, String> =
        serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();
    params.remove("ruc")
}

/// Outcome of resolving the tenant on page entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantResolution {
    Ready(TenantId),
    /// Nothing in the URL nor in storage; the browser was sent to login.
    RedirectedToLogin,
}

/// Page-entry tenant lookup: the URL wins over storage. A `ruc` parameter is
/// always stripped from the address bar, even a blank one; with no tenant
/// anywhere, the only effect is the login redirect.
pub fn resolve_tenant(
    ctx: &TenantContext,
    browser: &dyn BrowserEnv,
    login_url: &str,
) -> TenantResolution {
    let from_url = tenant_from_query(&browser.query_string());
    if from_url.is_some() {
        browser.replace_url(&browser.path());
    }
    if let Some(tenant) = ctx.capture(from_url.as_deref()) {
        return TenantResolution::Ready(tenant);
    }

    match ctx.read() {
        Some(tenant) => TenantResolution::Ready(tenant),
        None => {
            log::warn!("No tenant available, redirecting to login");
            browser.redirect(login_url);
            TenantResolution::RedirectedToLogin
        }
    }
}

/// Forget the tenant and leave for the login page
pub fn logout(ctx: &TenantContext, browser: &dyn BrowserEnv, login_url: &str) {
    log::info!("Logging out");
    ctx.clear();
    browser.redirect(login_url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::tenant::storage::MemoryStorage;
    use crate::testing::RecordingBrowser;

    const LOGIN: &str = "http://localhost:8080/auth";

    fn context(storage: MemoryStorage) -> TenantContext {
        TenantContext::new(Arc::new(storage), "current_ruc")
    }

    #[test]
    fn test_tenant_id_rejects_blank() {
        assert!(TenantId::parse("   ").is_none());
        assert_eq!(TenantId::parse(" 20123456789 ").unwrap().as_str(), "20123456789");
    }

    #[test]
    fn test_tenant_from_query() {
        assert_eq!(tenant_from_query("?ruc=20123456789").as_deref(), Some("20123456789"));
        assert_eq!(tenant_from_query("a=1&ruc=42").as_deref(), Some("42"));
        assert_eq!(tenant_from_query("ruc=").as_deref(), Some(""));
        assert_eq!(tenant_from_query(""), None);
    }

    #[test]
    fn test_capture_overwrites_stored_value() {
        let ctx = context(MemoryStorage::with("current_ruc", "111"));
        ctx.capture(Some("222"));
        assert_eq!(ctx.read().unwrap().as_str(), "222");

        ctx.capture(Some("  "));
        assert_eq!(ctx.read().unwrap().as_str(), "222");
    }

    #[test]
    fn test_require_without_tenant() {
        let ctx = context(MemoryStorage::default());
        assert_eq!(ctx.require(), Err(ApiError::MissingTenant));
    }

    #[test]
    fn test_url_tenant_is_stored_and_stripped() {
        let ctx = context(MemoryStorage::with("current_ruc", "old"));
        let browser = RecordingBrowser::at("/parametros-sistema", "ruc=20123456789");

        let resolution = resolve_tenant(&ctx, &browser, LOGIN);

        assert_eq!(
            resolution,
            TenantResolution::Ready(TenantId::parse("20123456789").unwrap())
        );
        assert_eq!(ctx.read().unwrap().as_str(), "20123456789");
        assert_eq!(browser.replaced_urls(), vec!["/parametros-sistema".to_string()]);
        assert!(browser.redirects().is_empty());
    }

    #[test]
    fn test_blank_url_tenant_is_stripped() {
        let ctx = context(MemoryStorage::with("current_ruc", "20123456789"));
        let browser = RecordingBrowser::at("/x", "ruc=");

        let resolution = resolve_tenant(&ctx, &browser, LOGIN);

        assert_eq!(
            resolution,
            TenantResolution::Ready(TenantId::parse("20123456789").unwrap())
        );
        assert_eq!(browser.replaced_urls(), vec!["/x".to_string()]);
        assert!(browser.redirects().is_empty());
    }

    #[test]
    fn test_blank_url_tenant_without_storage_redirects() {
        let ctx = context(MemoryStorage::default());
        let browser = RecordingBrowser::at("/x", "ruc=%20");

        let resolution = resolve_tenant(&ctx, &browser, LOGIN);

        assert_eq!(resolution, TenantResolution::RedirectedToLogin);
        assert_eq!(browser.replaced_urls(), vec!["/x".to_string()]);
        assert_eq!(browser.redirects(), vec![LOGIN.to_string()]);
    }

    #[test]
    fn test_stored_tenant_leaves_url_alone() {
        let ctx = context(MemoryStorage::with("current_ruc", "20123456789"));
        let browser = RecordingBrowser::at("/entidad-sistema", "");

        let resolution = resolve_tenant(&ctx, &browser, LOGIN);

        assert!(matches!(resolution, TenantResolution::Ready(_)));
        assert!(browser.replaced_urls().is_empty());
    }

    #[test]
    fn test_no_tenant_only_redirects() {
        let ctx = context(MemoryStorage::default());
        let browser = RecordingBrowser::at("/", "");

        let resolution = resolve_tenant(&ctx, &browser, LOGIN);

        assert_eq!(resolution, TenantResolution::RedirectedToLogin);
        assert_eq!(browser.redirects(), vec![LOGIN.to_string()]);
        assert!(browser.notifications().is_empty());
    }

    #[test]
    fn test_logout_clears_and_redirects() {
        let ctx = context(MemoryStorage::with("current_ruc", "20123456789"));
        let browser = RecordingBrowser::at("/", "");

        logout(&ctx, &browser, LOGIN);

        assert!(ctx.read().is_none());
        assert_eq!(browser.redirects(), vec![LOGIN.to_string()]);
    }
}
