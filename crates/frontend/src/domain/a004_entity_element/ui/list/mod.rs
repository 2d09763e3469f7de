use contracts::domain::a004_entity_element::aggregate::EntityElement;
use leptos::prelude::*;

use crate::app::use_app_services;
use crate::shared::crud::controller::{CrudController, CrudDeps};
use crate::shared::crud::page::CrudPage;

#[component]
pub fn EntityElementList() -> impl IntoView {
    let services = use_app_services();
    let controller = CrudController::<EntityElement>::new(CrudDeps::from_services(&services));

    view! { <CrudPage controller=controller /> }
}
