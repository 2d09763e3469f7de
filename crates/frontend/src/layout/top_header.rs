//! TopHeader component - application top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::use_app_services;
use crate::routes::routes::{ROUTE_ELEMENTS, ROUTE_ENTITIES, ROUTE_GROUPS, ROUTE_PARAMETERS};
use crate::shared::icons::icon;
use crate::system::tenant::logout;

#[component]
pub fn TopHeader() -> impl IntoView {
    let services = use_app_services();

    let on_logout = move |_| {
        logout(
            &services.tenant,
            services.browser.as_ref(),
            &services.config.auth.login_url,
        );
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <A href="/" attr:class="top-header__title">"Panel de Administración"</A>
            </div>

            <nav class="top-header__nav">
                <A href=ROUTE_PARAMETERS attr:class="top-header__link">"Parámetros"</A>
                <A href=ROUTE_GROUPS attr:class="top-header__link">"Grupos"</A>
                <A href=ROUTE_ENTITIES attr:class="top-header__link">"Entidades"</A>
                <A href=ROUTE_ELEMENTS attr:class="top-header__link">"Elementos"</A>
            </nav>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" on:click=on_logout title="Cerrar Sesión">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
