use leptos::prelude::*;

use super::context::{resolve_tenant, TenantId, TenantResolution};
use crate::app::use_app_services;

/// Tenant of the current page, provided by [`TenantGate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTenant(pub TenantId);

pub fn use_current_tenant() -> TenantId {
    use_context::<CurrentTenant>()
        .expect("TenantGate not found in component tree")
        .0
}

/// Renders its children only once a tenant is known.
///
/// Without one the browser is already on its way to the login page and
/// nothing below this component is created, so no data load is issued.
#[component]
pub fn TenantGate(children: Children) -> impl IntoView {
    let services = use_app_services();
    let resolution = resolve_tenant(
        &services.tenant,
        services.browser.as_ref(),
        &services.config.auth.login_url,
    );

    match resolution {
        TenantResolution::Ready(tenant) => {
            provide_context(CurrentTenant(tenant));
            children().into_any()
        }
        TenantResolution::RedirectedToLogin => view! {
            <div class="page page--redirect">"Redirigiendo al inicio de sesión..."</div>
        }
        .into_any(),
    }
}
