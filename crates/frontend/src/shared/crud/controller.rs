//! Page controller shared by the four resource pages.
//!
//! Owns the loaded list, the open dialog and the in-flight flags of one
//! page, and runs load → render → mutate → reload against its service.

use std::collections::BTreeMap;
use std::sync::Arc;

use contracts::domain::common::Resource;
use contracts::enums::StatusFlag;
use leptos::prelude::*;

use super::form::{FieldErrors, FormMode, FormModel, LookupKind, SelectOption, USER_FIELD};
use super::state::{ModalState, PageState};
use super::view::{agree, CrudResource};
use crate::app::AppServices;
use crate::config::AuthConfig;
use crate::shared::api_client::ApiClient;
use crate::shared::api_error::ApiError;
use crate::shared::browser::BrowserEnv;
use crate::shared::resource_service::{EntityService, ParameterGroupService, ResourceService};
use crate::system::tenant::{self, TenantContext};

pub const USER_REQUIRED: &str = "Por favor, ingresa tu usuario";

/// Everything a controller talks to outside its own signals
pub struct CrudDeps<R> {
    pub service: ResourceService<R>,
    pub client: ApiClient,
    pub tenant: TenantContext,
    pub browser: Arc<dyn BrowserEnv>,
    pub auth: AuthConfig,
}

impl<R: Resource> CrudDeps<R> {
    pub fn from_services(services: &AppServices) -> Self {
        Self {
            service: ResourceService::new(services.client.clone()),
            client: services.client.clone(),
            tenant: services.tenant.clone(),
            browser: services.browser.clone(),
            auth: services.config.auth.clone(),
        }
    }
}

/// Options of a lookup select; inactive rows stay selectable but marked
pub fn lookup_options<T: Resource>(items: &[T]) -> Vec<SelectOption> {
    items
        .iter()
        .map(|item| {
            let label = if item.status().is_active() {
                item.name().to_string()
            } else {
                format!("{} (Inactivo)", item.name())
            };
            SelectOption::new(item.id().to_string(), label)
        })
        .collect()
}

pub struct CrudController<R: CrudResource> {
    pub state: RwSignal<PageState<R>>,
    pub form: RwSignal<R::Form>,
    pub errors: RwSignal<FieldErrors>,
    /// Modifying user typed into the disable dialog
    pub disable_user: RwSignal<String>,
    pub lookups: RwSignal<BTreeMap<LookupKind, Vec<SelectOption>>>,
    deps: StoredValue<CrudDeps<R>>,
}

impl<R: CrudResource> Clone for CrudController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: CrudResource> Copy for CrudController<R> {}

impl<R: CrudResource> CrudController<R> {
    pub fn new(deps: CrudDeps<R>) -> Self {
        Self {
            state: RwSignal::new(PageState::default()),
            form: RwSignal::new(R::Form::default()),
            errors: RwSignal::new(FieldErrors::default()),
            disable_user: RwSignal::new(String::new()),
            lookups: RwSignal::new(BTreeMap::new()),
            deps: StoredValue::new(deps),
        }
    }

    fn service(&self) -> ResourceService<R> {
        self.deps.with_value(|d| d.service.clone())
    }

    fn browser(&self) -> Arc<dyn BrowserEnv> {
        self.deps.with_value(|d| d.browser.clone())
    }

    // ============================================================================
    // Loading
    // ============================================================================

    /// Fetch the list. Declined while another load is pending.
    pub async fn load(self) {
        if !self.state.try_update(PageState::begin_load).unwrap_or(false) {
            log::debug!("{}: load already in progress", R::full_name());
            return;
        }

        match self.service().list().await {
            Ok(items) => {
                log::info!("{}: loaded {} rows", R::full_name(), items.len());
                self.state.update(|s| s.finish_load(items));
            }
            Err(err) => {
                self.state.update(PageState::fail_load);
                self.report(err, "No se pudieron cargar los datos");
            }
        }
    }

    /// Fill the option lists of the form. A failing list degrades to no
    /// options and is only logged.
    pub async fn load_lookups(self) {
        for kind in R::lookups() {
            let client = self.deps.with_value(|d| d.client.clone());
            let result = match kind {
                LookupKind::ParameterGroups => ParameterGroupService::new(client)
                    .list()
                    .await
                    .map(|items| lookup_options(&items)),
                LookupKind::Entities => EntityService::new(client)
                    .list()
                    .await
                    .map(|items| lookup_options(&items)),
            };
            let options = result.unwrap_or_else(|err| {
                log::warn!("{}: options {:?} unavailable: {}", R::full_name(), kind, err);
                Vec::new()
            });
            self.lookups.update(|l| {
                l.insert(kind, options);
            });
        }
    }

    pub fn lookup(&self, kind: LookupKind) -> Vec<SelectOption> {
        self.lookups
            .with(|l| l.get(&kind).cloned())
            .unwrap_or_default()
    }

    // ============================================================================
    // Dialogs
    // ============================================================================

    fn can_open(&self) -> bool {
        self.state
            .with_untracked(|s| !s.modal.is_open() && !s.submitting)
    }

    /// Fetch the record and show it. Declined while another fetch is pending.
    pub async fn view(self, id: i64) {
        if !self.can_open() {
            return;
        }
        if !self.state.try_update(PageState::begin_fetch).unwrap_or(false) {
            log::debug!("{}: detail fetch already in progress", R::full_name());
            return;
        }
        let result = self.service().get_by_id(id).await;
        self.state.update(PageState::finish_fetch);
        match result {
            Ok(item) => {
                self.state.update(|s| {
                    s.open(ModalState::Viewing(item));
                });
            }
            Err(err) => self.report(err, "No se pudo cargar el detalle"),
        }
    }

    pub fn open_create(self) {
        if !self.can_open() {
            return;
        }
        self.form.set(R::Form::for_create());
        self.errors.set(FieldErrors::default());
        self.state.update(|s| {
            s.open(ModalState::Editing(None));
        });
    }

    pub fn open_edit(self, item: R) {
        if !self.can_open() {
            return;
        }
        self.form.set(R::Form::from_item(&item));
        self.errors.set(FieldErrors::default());
        self.state.update(|s| {
            s.open(ModalState::Editing(Some(item)));
        });
    }

    pub fn open_disable(self, item: R) {
        if !self.can_open() || !item.can_disable() {
            return;
        }
        self.disable_user.set(String::new());
        self.errors.set(FieldErrors::default());
        self.state.update(|s| {
            s.open(ModalState::ConfirmingDisable(item));
        });
    }

    pub fn close(self) {
        self.state.update(|s| {
            s.close();
        });
    }

    pub fn set_field(self, key: &'static str, value: String) {
        self.form.update(|f| f.set_value(key, value));
        self.errors.update(|e| e.remove(key));
    }

    pub fn set_disable_user(self, value: String) {
        self.disable_user.set(value);
        self.errors.update(|e| e.remove(USER_FIELD));
    }

    pub fn form_mode(&self) -> FormMode {
        self.state.with(|s| match &s.modal {
            ModalState::Editing(Some(_)) => FormMode::Edit,
            _ => FormMode::Create,
        })
    }

    // ============================================================================
    // Mutations
    // ============================================================================

    /// Validate and send the open create/edit form
    pub async fn submit(self) {
        let Some(original) = self.state.with_untracked(|s| match &s.modal {
            ModalState::Editing(original) => Some(original.clone()),
            _ => None,
        }) else {
            return;
        };
        let mode = if original.is_some() {
            FormMode::Edit
        } else {
            FormMode::Create
        };

        let form = self.form.get_untracked();
        let errors = form.validate(mode);
        if !errors.is_empty() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(FieldErrors::default());

        if !self.state.try_update(PageState::begin_submit).unwrap_or(false) {
            return;
        }

        let service = self.service();
        let outcome = match &original {
            None => match form.to_create() {
                Ok(dto) => Ok(service.create(&dto).await.map(|_| "creado")),
                Err(errors) => Err(errors),
            },
            Some(item) => match form.to_update(item) {
                Ok(dto) => {
                    log::debug!("{}: update {} {:?}", R::full_name(), item.id(), dto);
                    Ok(service.update(item.id(), &dto).await.map(|_| "actualizado"))
                }
                Err(errors) => Err(errors),
            },
        };
        self.state.update(PageState::finish_submit);

        match outcome {
            Err(errors) => self.errors.set(errors),
            Ok(Ok(verb)) => self.after_mutation(verb).await,
            Ok(Err(err)) => self.report(err, "No se pudo guardar"),
        }
    }

    /// Soft-disable the record of the open confirmation dialog
    pub async fn confirm_disable(self) {
        let Some(item) = self.state.with_untracked(|s| match &s.modal {
            ModalState::ConfirmingDisable(item) => Some(item.clone()),
            _ => None,
        }) else {
            return;
        };

        let user = self.disable_user.get_untracked().trim().to_string();
        if user.is_empty() {
            self.errors.update(|e| e.add(USER_FIELD, USER_REQUIRED));
            self.browser().notify(USER_REQUIRED);
            return;
        }

        if !self.state.try_update(PageState::begin_submit).unwrap_or(false) {
            return;
        }
        let result = self.service().set_status(item.id(), user).await;
        self.state.update(PageState::finish_submit);

        match result {
            Ok(()) => self.after_mutation("deshabilitado").await,
            Err(err) => self.report(err, "No se pudo deshabilitar"),
        }
    }

    async fn after_mutation(self, verb: &str) {
        let message = format!("{} {} correctamente", R::element_name(), agree::<R>(verb));
        log::info!("{}: {}", R::full_name(), message);
        self.browser().notify(&message);
        self.close();
        self.load().await;
    }

    // ============================================================================
    // Misc
    // ============================================================================

    pub fn toggle_expanded(self, id: i64) {
        self.state.update(|s| s.expanded.toggle(id));
    }

    pub fn logout(self) {
        self.deps.with_value(|d| {
            tenant::logout(&d.tenant, d.browser.as_ref(), &d.auth.login_url)
        });
    }

    pub fn go_back(self) {
        self.browser().go_back();
    }

    /// Surface a failed call: log it, then notify or leave for login
    pub fn report(self, err: ApiError, fallback: &str) {
        log::error!("{}: {} ({})", R::full_name(), fallback, err);
        self.deps.with_value(|d| match &err {
            ApiError::MissingTenant => d.browser.redirect(&d.auth.login_url),
            ApiError::InvalidTenant { message } => {
                d.browser.notify(&format!("Error: {}", message));
                d.tenant.clear();
                d.browser
                    .redirect_after(&d.auth.login_url, d.auth.redirect_delay_ms);
            }
            ApiError::NotFound => d.browser.notify(&format!("Error: {}", err)),
            other => d
                .browser
                .notify(&format!("Error: {}", other.user_message(fallback))),
        });
        if err == ApiError::NotFound {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::state::LoadPhase;
    use crate::shared::transport::HttpMethod;
    use crate::testing::*;
    use contracts::domain::a002_parameter_group::aggregate::ParameterGroup;
    use contracts::domain::a004_entity_element::aggregate::EntityElement;
    use futures::executor::block_on;
    use serde_json::json;

    struct Harness<R: CrudResource> {
        controller: CrudController<R>,
        transport: Arc<RecordingTransport>,
        browser: Arc<RecordingBrowser>,
        tenant: TenantContext,
        _owner: Owner,
    }

    fn harness<R: CrudResource>(stored: Option<&str>) -> Harness<R> {
        let owner = Owner::new();
        owner.set();
        let transport = RecordingTransport::new();
        let browser = Arc::new(RecordingBrowser::at("/", ""));
        let tenant = tenant_context(stored);
        let controller = CrudController::new(deps(&tenant, transport.clone(), browser.clone()));
        Harness {
            controller,
            transport,
            browser,
            tenant,
            _owner: owner,
        }
    }

    fn groups() -> serde_json::Value {
        json!([group_json(3, "Ventas", "A"), group_json(4, "Compras", "E")])
    }

    #[test]
    fn test_load_fills_list() {
        let h = harness::<ParameterGroup>(Some(TENANT));
        h.transport.respond(200, groups());

        block_on(h.controller.load());

        h.controller.state.with_untracked(|s| {
            assert_eq!(s.phase, LoadPhase::Ready);
            assert_eq!(s.items.len(), 2);
            assert!(!s.loading);
        });
    }

    #[test]
    fn test_missing_tenant_only_redirects() {
        let h = harness::<ParameterGroup>(None);

        block_on(h.controller.load());

        assert!(h.transport.requests().is_empty());
        assert_eq!(h.browser.redirects(), vec!["http://localhost:8080/auth".to_string()]);
        assert!(h.browser.notifications().is_empty());
    }

    #[test]
    fn test_invalid_tenant_clears_and_redirects_later() {
        let h = harness::<ParameterGroup>(Some(TENANT));
        h.transport.respond(400, json!({ "message": "RUC no válido" }));

        block_on(h.controller.load());

        assert!(h.tenant.read().is_none());
        assert_eq!(h.browser.notifications(), vec!["Error: RUC no válido".to_string()]);
        assert_eq!(
            h.browser.delayed_redirects(),
            vec![("http://localhost:8080/auth".to_string(), 2000)]
        );
        h.controller.state.with_untracked(|s| {
            assert_eq!(s.phase, LoadPhase::LoadError);
        });
    }

    #[test]
    fn test_failed_reload_keeps_rows() {
        let h = harness::<ParameterGroup>(Some(TENANT));
        h.transport.respond(200, groups());
        h.transport.respond(500, json!({ "message": "Error interno" }));

        block_on(h.controller.load());
        block_on(h.controller.load());

        assert_eq!(h.browser.notifications(), vec!["Error: Error interno".to_string()]);
        h.controller.state.with_untracked(|s| {
            assert_eq!(s.phase, LoadPhase::Ready);
            assert_eq!(s.items.len(), 2);
        });
    }

    #[test]
    fn test_disable_group_then_reload() {
        let h = harness::<ParameterGroup>(Some(TENANT));
        h.transport.respond(200, groups());
        block_on(h.controller.load());
        let group = h.controller.state.with_untracked(|s| s.items[0].clone());

        h.controller.open_disable(group);
        h.controller.set_disable_user("admin".to_string());
        h.transport.respond(200, json!({}));
        h.transport.respond(200, json!([group_json(3, "Ventas", "E")]));
        block_on(h.controller.confirm_disable());

        let requests = h.transport.requests();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].method, HttpMethod::Patch);
        assert_eq!(
            requests[1].url,
            "http://localhost:3001/api/grupo-parametro/3/toggle-estado"
        );
        let body: serde_json::Value =
            serde_json::from_str(requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({ "indicadorEstado": "E", "usuarioModificacion": "admin" }));
        assert_eq!(requests[2].method, HttpMethod::Get);
        assert_eq!(
            h.browser.notifications(),
            vec!["Grupo de parámetro deshabilitado correctamente".to_string()]
        );
        h.controller.state.with_untracked(|s| {
            assert_eq!(s.modal, ModalState::Closed);
            assert_eq!(s.items.len(), 1);
        });
    }

    #[test]
    fn test_disable_with_blank_user_sends_nothing() {
        let h = harness::<ParameterGroup>(Some(TENANT));
        h.transport.respond(200, groups());
        block_on(h.controller.load());
        let group = h.controller.state.with_untracked(|s| s.items[0].clone());

        h.controller.open_disable(group);
        h.controller.set_disable_user("   ".to_string());
        block_on(h.controller.confirm_disable());

        assert_eq!(h.transport.requests().len(), 1);
        assert_eq!(
            h.controller.errors.get_untracked().get(USER_FIELD),
            Some(USER_REQUIRED)
        );
        h.controller.state.with_untracked(|s| {
            assert!(matches!(s.modal, ModalState::ConfirmingDisable(_)));
        });
    }

    #[test]
    fn test_disabled_rows_cannot_be_disabled_again() {
        let h = harness::<ParameterGroup>(Some(TENANT));
        h.transport.respond(200, groups());
        block_on(h.controller.load());
        let disabled = h.controller.state.with_untracked(|s| s.items[1].clone());

        h.controller.open_disable(disabled);

        h.controller.state.with_untracked(|s| {
            assert_eq!(s.modal, ModalState::Closed);
        });
    }

    #[test]
    fn test_invalid_form_is_not_sent() {
        let h = harness::<ParameterGroup>(Some(TENANT));
        h.transport.respond(200, groups());
        block_on(h.controller.load());

        h.controller.open_create();
        block_on(h.controller.submit());

        assert_eq!(h.transport.requests().len(), 1);
        assert!(!h.controller.errors.get_untracked().is_empty());
    }

    #[test]
    fn test_create_then_reload() {
        let h = harness::<ParameterGroup>(Some(TENANT));
        h.transport.respond(200, groups());
        block_on(h.controller.load());

        h.controller.open_create();
        h.controller.set_field("nombreGrupoParametro", "Logística".to_string());
        h.controller.set_field(USER_FIELD, "admin".to_string());
        h.transport.respond(201, group_json(5, "Logística", "A"));
        block_on(h.controller.submit());

        let requests = h.transport.requests();
        assert_eq!(requests[1].method, HttpMethod::Post);
        let body: serde_json::Value =
            serde_json::from_str(requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({ "nombreGrupoParametro": "Logística", "usuarioRegistro": "admin" })
        );
        assert_eq!(requests.len(), 3);
        assert_eq!(
            h.browser.notifications(),
            vec!["Grupo de parámetro creado correctamente".to_string()]
        );
    }

    #[test]
    fn test_view_not_found_notifies() {
        let h = harness::<ParameterGroup>(Some(TENANT));
        h.transport.respond(200, groups());
        block_on(h.controller.load());
        h.transport.respond(404, json!({ "message": "Not Found" }));

        block_on(h.controller.view(99));

        assert_eq!(
            h.browser.notifications(),
            vec!["Error: Registro no encontrado".to_string()]
        );
        h.controller.state.with_untracked(|s| {
            assert_eq!(s.modal, ModalState::Closed);
            assert_eq!(s.items.len(), 2);
        });
    }

    #[test]
    fn test_view_fetches_by_id() {
        let h = harness::<ParameterGroup>(Some(TENANT));
        h.transport.respond(200, groups());
        block_on(h.controller.load());
        h.transport.respond(200, group_json(3, "Ventas", "A"));

        block_on(h.controller.view(3));

        assert_eq!(
            h.transport.requests()[1].url,
            "http://localhost:3001/api/grupo-parametro/3"
        );
        h.controller.state.with_untracked(|s| {
            assert!(matches!(&s.modal, ModalState::Viewing(g) if g.id_grupo_parametro == 3));
            assert!(!s.fetching);
        });
    }

    #[test]
    fn test_second_view_waits_for_pending_fetch() {
        let h = harness::<ParameterGroup>(Some(TENANT));
        h.transport.respond(200, groups());
        block_on(h.controller.load());
        h.controller.state.update(|s| {
            s.begin_fetch();
        });

        block_on(h.controller.view(3));

        assert_eq!(h.transport.requests().len(), 1);
        h.controller.state.with_untracked(|s| {
            assert_eq!(s.modal, ModalState::Closed);
            assert!(s.fetching);
        });
    }

    #[test]
    fn test_lookup_failure_degrades_to_empty() {
        let h = harness::<EntityElement>(Some(TENANT));
        h.transport.respond(500, json!({}));

        block_on(h.controller.load_lookups());

        assert!(h.controller.lookup(LookupKind::Entities).is_empty());
        assert!(h.browser.notifications().is_empty());
        assert!(h.browser.redirects().is_empty());
    }

    #[test]
    fn test_lookup_options_mark_inactive() {
        let items: Vec<ParameterGroup> = serde_json::from_value(groups()).unwrap();
        let options = lookup_options(&items);
        assert_eq!(options[0], SelectOption::new("3", "Ventas"));
        assert_eq!(options[1], SelectOption::new("4", "Compras (Inactivo)"));
    }
}
