//! Landing page: tenant banner and one card per resource.

use contracts::domain::a001_system_parameter::aggregate::SystemParameter;
use contracts::domain::a002_parameter_group::aggregate::ParameterGroup;
use contracts::domain::a003_system_entity::aggregate::SystemEntity;
use contracts::domain::a004_entity_element::aggregate::EntityElement;
use contracts::domain::common::Resource;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::app::use_app_services;
use crate::routes::routes::{ROUTE_ELEMENTS, ROUTE_ENTITIES, ROUTE_GROUPS, ROUTE_PARAMETERS};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_HOME;
use crate::system::tenant::{logout, use_current_tenant};

/// One card of the home page
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCard {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub fn resource_cards() -> Vec<ResourceCard> {
    vec![
        ResourceCard {
            title: SystemParameter::list_name(),
            description: "Configuración de parámetros globales del sistema",
            href: ROUTE_PARAMETERS,
            icon: "settings",
        },
        ResourceCard {
            title: ParameterGroup::list_name(),
            description: "Agrupación lógica de parámetros",
            href: ROUTE_GROUPS,
            icon: "folder",
        },
        ResourceCard {
            title: SystemEntity::list_name(),
            description: "Entidades sincronizables y su configuración",
            href: ROUTE_ENTITIES,
            icon: "database",
        },
        ResourceCard {
            title: EntityElement::list_name(),
            description: "Campos que componen cada entidad",
            href: ROUTE_ELEMENTS,
            icon: "list",
        },
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    let services = use_app_services();
    let tenant = use_current_tenant();

    let on_logout = move |_| {
        logout(
            &services.tenant,
            services.browser.as_ref(),
            &services.config.auth.login_url,
        );
    };

    view! {
        <PageFrame page_id="home--home" category=PAGE_CAT_HOME>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Panel de Administración"</h1>
                    <span class="page__subtitle">{format!("RUC: {}", tenant)}</span>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Secondary on_click=on_logout>
                        {icon("logout")}
                        " Cerrar Sesión"
                    </Button>
                </div>
            </div>

            <div class="home__cards">
                {resource_cards()
                    .into_iter()
                    .map(|card| view! {
                        <A href=card.href attr:class="home__card">
                            <div class="home__card-icon">{icon(card.icon)}</div>
                            <div class="home__card-title">{card.title}</div>
                            <div class="home__card-description">{card.description}</div>
                        </A>
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
