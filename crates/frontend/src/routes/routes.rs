use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_system_parameter::ui::SystemParameterList;
use crate::domain::a002_parameter_group::ui::ParameterGroupList;
use crate::domain::a003_system_entity::ui::SystemEntityList;
use crate::domain::a004_entity_element::ui::EntityElementList;
use crate::layout::home::HomePage;
use crate::layout::Shell;
use crate::system::tenant::TenantGate;

/// Client-side path of each resource page
pub const ROUTE_PARAMETERS: &str = "/parametros-sistema";
pub const ROUTE_GROUPS: &str = "/grupo-parametro";
pub const ROUTE_ENTITIES: &str = "/entidad-sistema";
pub const ROUTE_ELEMENTS: &str = "/elemento-entidad";

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <div class="page">"Página no encontrada"</div> }>
                    <Route
                        path=path!("/")
                        view=|| view! { <TenantGate><HomePage /></TenantGate> }
                    />
                    <Route
                        path=path!("/parametros-sistema")
                        view=|| view! { <TenantGate><SystemParameterList /></TenantGate> }
                    />
                    <Route
                        path=path!("/grupo-parametro")
                        view=|| view! { <TenantGate><ParameterGroupList /></TenantGate> }
                    />
                    <Route
                        path=path!("/entidad-sistema")
                        view=|| view! { <TenantGate><SystemEntityList /></TenantGate> }
                    />
                    <Route
                        path=path!("/elemento-entidad")
                        view=|| view! { <TenantGate><EntityElementList /></TenantGate> }
                    />
                </Routes>
            </Shell>
        </Router>
    }
}
