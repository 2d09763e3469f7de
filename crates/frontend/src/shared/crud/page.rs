//! List page shared by the four resources.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::controller::CrudController;
use super::dialogs::{cell_view, DetailDialog, DisableDialog, FormDialog};
use super::state::{LoadPhase, ModalState};
use super::view::{ChildCard, CrudResource};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::tenant::use_current_tenant;

#[component]
pub fn CrudPage<R: CrudResource>(controller: CrudController<R>) -> impl IntoView {
    let tenant = use_current_tenant();
    let capabilities = R::capabilities();

    spawn_local(controller.load());
    if !R::lookups().is_empty() {
        spawn_local(controller.load_lookups());
    }

    let loading = Memo::new(move |_| controller.state.with(|s| s.loading));
    let count = Memo::new(move |_| controller.state.with(|s| s.items.len()));
    let phase = Memo::new(move |_| controller.state.with(|s| s.phase));
    let modal = Memo::new(move |_| controller.state.with(|s| s.modal.clone()));

    view! {
        <PageFrame page_id=R::page_id() category=PAGE_CAT_LIST>
            <PageHeader title=R::list_name() subtitle=format!("RUC: {}", tenant)>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| controller.go_back()>
                    {icon("arrow-left")}
                    " Volver"
                </Button>
                <Badge>{move || count.get().to_string()}</Badge>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| spawn_local(controller.load())
                    disabled=Signal::from(loading)
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Cargando..." } else { " Actualizar" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| controller.logout()>
                    {icon("logout")}
                    " Cerrar Sesión"
                </Button>
                {capabilities.creatable.then(|| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| controller.open_create()>
                        {icon("plus")}
                        {format!(" {}", R::create_label())}
                    </Button>
                })}
            </PageHeader>

            <div class="page__content">
                {move || {
                    match phase.get() {
                        LoadPhase::Loading => view! {
                            <div class="page__loading">
                                <Spinner />
                                <span>{format!("Cargando {}...", R::list_name().to_lowercase())}</span>
                            </div>
                        }
                        .into_any(),
                        LoadPhase::LoadError => view! {
                            <div class="alert alert--error">
                                <span>"No se pudieron cargar los datos."</span>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| spawn_local(controller.load())
                                    disabled=Signal::from(loading)
                                >
                                    "Reintentar"
                                </Button>
                            </div>
                        }
                        .into_any(),
                        LoadPhase::Ready if count.get() == 0 => view! {
                            <div class="page__empty">{R::empty_text()}</div>
                        }
                        .into_any(),
                        LoadPhase::Ready => view! { <CrudTable controller=controller /> }.into_any(),
                    }
                }}
            </div>

            {move || {
                match modal.get() {
                    ModalState::Closed => ().into_any(),
                    ModalState::Viewing(item) => {
                        view! { <DetailDialog controller=controller item=item /> }.into_any()
                    }
                    ModalState::Editing(_) => view! { <FormDialog controller=controller /> }.into_any(),
                    ModalState::ConfirmingDisable(item) => {
                        view! { <DisableDialog controller=controller item=item /> }.into_any()
                    }
                }
            }}
        </PageFrame>
    }
}

/// Columns of a table row: expander, data columns and actions
pub fn column_span<R: CrudResource>() -> usize {
    R::columns().len() + 1 + usize::from(R::expandable())
}

#[component]
fn CrudTable<R: CrudResource>(controller: CrudController<R>) -> impl IntoView {
    let capabilities = R::capabilities();
    let expandable = R::expandable();
    let items = Memo::new(move |_| controller.state.with(|s| s.items.clone()));
    let span = column_span::<R>().to_string();

    view! {
        <div class="table-wrapper">
            <Table attr:id=format!("{}-table", R::page_id()) attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {expandable.then(|| view! { <TableHeaderCell>""</TableHeaderCell> })}
                        {R::columns()
                            .into_iter()
                            .map(|column| view! { <TableHeaderCell>{column}</TableHeaderCell> })
                            .collect_view()}
                        <TableHeaderCell>"Acciones"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|item| {
                                let id = item.id();
                                let is_open = Signal::derive(move || {
                                    controller.state.with(|s| s.expanded.is_open(id))
                                });
                                let children = item.children();
                                let cells = item
                                    .cells()
                                    .into_iter()
                                    .map(|cell| view! {
                                        <TableCell>
                                            <TableCellLayout>{cell_view(cell)}</TableCellLayout>
                                        </TableCell>
                                    })
                                    .collect_view();
                                let can_disable = capabilities.disableable && item.can_disable();
                                let edit_item = item.clone();
                                let disable_item = item.clone();
                                let span = span.clone();

                                view! {
                                    <TableRow>
                                        {expandable.then(|| view! {
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Transparent
                                                    size=ButtonSize::Small
                                                    on_click=move |_| controller.toggle_expanded(id)
                                                >
                                                    {move || if is_open.get() { icon("chevron-down") } else { icon("chevron-right") }}
                                                </Button>
                                            </TableCell>
                                        })}
                                        {cells}
                                        <TableCell>
                                            <Flex gap=FlexGap::Small>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    size=ButtonSize::Small
                                                    on_click=move |_| spawn_local(controller.view(id))
                                                >
                                                    {icon("eye")}
                                                </Button>
                                                {capabilities.editable.then(|| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| controller.open_edit(edit_item.clone())
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                })}
                                                {can_disable.then(|| view! {
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        size=ButtonSize::Small
                                                        on_click=move |_| controller.open_disable(disable_item.clone())
                                                    >
                                                        {icon("ban")}
                                                    </Button>
                                                })}
                                            </Flex>
                                        </TableCell>
                                    </TableRow>
                                    {move || {
                                        let children = children.clone();
                                        let span = span.clone();
                                        is_open.get().then(|| view! {
                                            <TableRow>
                                                <TableCell attr:colspan=span.clone()>
                                                    <ChildCards cards=children />
                                                </TableCell>
                                            </TableRow>
                                        })
                                    }}
                                }
                            })
                            .collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

#[component]
pub fn ChildCards(cards: Vec<ChildCard>) -> impl IntoView {
    if cards.is_empty() {
        return view! { <div class="child-cards__empty">"No hay elementos para esta entidad"</div> }
            .into_any();
    }

    view! {
        <div class="child-cards">
            {cards
                .into_iter()
                .map(|card| view! {
                    <div class="child-card" data-id=card.id.to_string()>
                        <div class="child-card__title">{card.title}</div>
                        <div class="child-card__badges">
                            {card
                                .badges
                                .into_iter()
                                .map(|(label, tone)| view! { <Badge tone=tone>{label}</Badge> })
                                .collect_view()}
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_parameter_group::aggregate::ParameterGroup;
    use contracts::domain::a003_system_entity::aggregate::SystemEntity;

    #[test]
    fn test_expanded_row_spans_every_column() {
        assert_eq!(column_span::<ParameterGroup>(), ParameterGroup::columns().len() + 1);
        assert_eq!(column_span::<SystemEntity>(), SystemEntity::columns().len() + 2);
    }
}
