use contracts::domain::a002_parameter_group::aggregate::ParameterGroup;
use leptos::prelude::*;

use crate::app::use_app_services;
use crate::shared::crud::controller::{CrudController, CrudDeps};
use crate::shared::crud::page::CrudPage;

#[component]
pub fn ParameterGroupList() -> impl IntoView {
    let services = use_app_services();
    let controller = CrudController::<ParameterGroup>::new(CrudDeps::from_services(&services));

    view! { <CrudPage controller=controller /> }
}
