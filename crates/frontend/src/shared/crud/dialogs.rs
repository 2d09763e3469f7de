//! Create/edit, detail and disable dialogs of a resource page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::controller::CrudController;
use super::form::{FieldKind, FieldSpec, FormMode, FormModel, USER_FIELD};
use super::page::ChildCards;
use super::view::{Cell, CrudResource};
use crate::shared::components::ui::{Badge, FormField};
use crate::shared::modal::Modal;

pub fn cell_view(cell: Cell) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <span>{text}</span> }.into_any(),
        Cell::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
        Cell::Badge { label, tone } => view! { <Badge tone=tone>{label}</Badge> }.into_any(),
        Cell::Lines(lines) => view! {
            <div class="cell-lines">
                {lines
                    .into_iter()
                    .map(|line| view! { <div class="cell-lines__line">{line}</div> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn FormDialog<R: CrudResource>(controller: CrudController<R>) -> impl IntoView {
    let mode = controller.form_mode();
    let title = match mode {
        FormMode::Create => R::create_label(),
        FormMode::Edit => format!("Editar {}", R::element_name()),
    };
    let submitting = Signal::derive(move || controller.state.with(|s| s.submitting));

    let fields = <R::Form as FormModel>::schema(mode)
        .into_iter()
        .map(|spec| {
            let key = spec.key;
            let lookup_kind = match &spec.kind {
                FieldKind::Lookup { kind, .. } => Some(*kind),
                _ => None,
            };
            view! {
                <FormField
                    spec=spec
                    value=Signal::derive(move || controller.form.with(|f| f.value(key)))
                    lookup_options=Signal::derive(move || {
                        lookup_kind.map(|kind| controller.lookup(kind)).unwrap_or_default()
                    })
                    error=Signal::derive(move || controller.errors.with(|e| e.get(key).map(String::from)))
                    on_change=Callback::new(move |value| controller.set_field(key, value))
                    disabled=submitting
                />
            }
        })
        .collect_view();

    let footer = move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| controller.close()
                disabled=submitting
            >
                "Cancelar"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| spawn_local(controller.submit())
                disabled=submitting
            >
                {move || if submitting.get() { "Guardando..." } else { "Guardar" }}
            </Button>
        }
        .into_any()
    };

    view! {
        <Modal
            title=title
            on_close=Callback::new(move |_| controller.close())
            footer=std::sync::Arc::new(footer)
        >
            <form class="form" on:submit=move |ev| {
                ev.prevent_default();
                spawn_local(controller.submit());
            }>
                {fields}
            </form>
        </Modal>
    }
}

#[component]
pub fn DetailDialog<R: CrudResource>(controller: CrudController<R>, item: R) -> impl IntoView {
    let title = format!("Detalle de {}", R::element_name());
    let rows = item
        .detail_rows()
        .into_iter()
        .map(|(label, cell)| {
            view! {
                <div class="detail-grid__row">
                    <span class="detail-grid__label">{label}</span>
                    <span class="detail-grid__value">{cell_view(cell)}</span>
                </div>
            }
        })
        .collect_view();

    let children = item.detail_children().map(|(heading, cards)| {
        view! {
            <div class="detail-children">
                <h3 class="detail-children__title">{heading}</h3>
                <ChildCards cards=cards />
            </div>
        }
    });

    let editable = R::capabilities().editable;
    let footer = move || {
        let item = item.clone();
        view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| controller.close()>
                "Cerrar"
            </Button>
            {editable.then(|| {
                let item = item.clone();
                view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| {
                            controller.close();
                            controller.open_edit(item.clone());
                        }
                    >
                        "Editar"
                    </Button>
                }
            })}
        }
        .into_any()
    };

    view! {
        <Modal
            title=title
            on_close=Callback::new(move |_| controller.close())
            footer=std::sync::Arc::new(footer)
        >
            <div class="detail-grid">{rows}</div>
            {children}
        </Modal>
    }
}

#[component]
pub fn DisableDialog<R: CrudResource>(controller: CrudController<R>, item: R) -> impl IntoView {
    let title = format!("Deshabilitar {}", R::element_name());
    let question = format!(
        "¿Está seguro de deshabilitar {} \"{}\"?",
        if R::feminine() { "la" } else { "el" },
        item.name()
    );
    let summary = item
        .disable_summary()
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="detail-grid__row">
                    <span class="detail-grid__label">{label}</span>
                    <span class="detail-grid__value">{value}</span>
                </div>
            }
        })
        .collect_view();
    let warning = item.disable_warning().map(|text| {
        view! {
            <MessageBar intent=MessageBarIntent::Warning>
                <span>{text}</span>
            </MessageBar>
        }
    });

    let submitting = Signal::derive(move || controller.state.with(|s| s.submitting));
    let blank_user =
        Signal::derive(move || controller.disable_user.with(|u| u.trim().is_empty()));
    let user_spec = FieldSpec::text(USER_FIELD, "Usuario que realiza la modificación")
        .required()
        .placeholder("Ingrese su usuario");

    let footer = move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| controller.close()
                disabled=submitting
            >
                "Cancelar"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                attr:class="button--danger"
                on_click=move |_| spawn_local(controller.confirm_disable())
                disabled=Signal::derive(move || submitting.get() || blank_user.get())
            >
                {move || if submitting.get() { "Deshabilitando..." } else { "Deshabilitar" }}
            </Button>
        }
        .into_any()
    };

    view! {
        <Modal
            title=title
            on_close=Callback::new(move |_| controller.close())
            footer=std::sync::Arc::new(footer)
        >
            <p class="modal-question">{question}</p>
            <div class="detail-grid">{summary}</div>
            {warning}
            <FormField
                spec=user_spec
                value=controller.disable_user
                error=Signal::derive(move || controller.errors.with(|e| e.get(USER_FIELD).map(String::from)))
                on_change=Callback::new(move |value| controller.set_disable_user(value))
                disabled=submitting
            />
        </Modal>
    }
}
