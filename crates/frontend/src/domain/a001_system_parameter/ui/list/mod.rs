use contracts::domain::a001_system_parameter::aggregate::SystemParameter;
use leptos::prelude::*;

use crate::app::use_app_services;
use crate::shared::crud::controller::{CrudController, CrudDeps};
use crate::shared::crud::page::CrudPage;

#[component]
pub fn SystemParameterList() -> impl IntoView {
    let services = use_app_services();
    let controller = CrudController::<SystemParameter>::new(CrudDeps::from_services(&services));

    view! { <CrudPage controller=controller /> }
}
