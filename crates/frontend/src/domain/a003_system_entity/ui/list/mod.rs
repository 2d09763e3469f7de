use contracts::domain::a003_system_entity::aggregate::SystemEntity;
use leptos::prelude::*;

use crate::app::use_app_services;
use crate::shared::crud::controller::{CrudController, CrudDeps};
use crate::shared::crud::page::CrudPage;

#[component]
pub fn SystemEntityList() -> impl IntoView {
    let services = use_app_services();
    let controller = CrudController::<SystemEntity>::new(CrudDeps::from_services(&services));

    view! { <CrudPage controller=controller /> }
}
