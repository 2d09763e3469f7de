//! In-memory fakes for the browser, the transport and storage.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contracts::domain::common::Resource;
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::shared::api_client::ApiClient;
use crate::shared::api_error::ApiError;
use crate::shared::browser::BrowserEnv;
use crate::shared::crud::controller::CrudDeps;
use crate::shared::resource_service::ResourceService;
use crate::shared::transport::{ApiRequest, ApiResponse, Transport};
use crate::system::tenant::{MemoryStorage, TenantContext};

pub const TENANT: &str = "20123456789";

/// Transport that records every request and answers from a queue
/// (`200 []` once the queue is empty).
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: Value) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_body(&self) -> Value {
        let requests = self.requests();
        let body = requests
            .last()
            .and_then(|r| r.body.clone())
            .expect("no request with a body");
        serde_json::from_str(&body).unwrap()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses.lock().unwrap().pop_front().unwrap_or(Ok(ApiResponse {
            status: 200,
            body: "[]".to_string(),
        }))
    }
}

/// Browser that records navigation and notifications
#[derive(Default)]
pub struct RecordingBrowser {
    path: String,
    query: String,
    replaced: Mutex<Vec<String>>,
    redirects: Mutex<Vec<String>>,
    delayed_redirects: Mutex<Vec<(String, u32)>>,
    notifications: Mutex<Vec<String>>,
    back: Mutex<u32>,
}

impl RecordingBrowser {
    pub fn at(path: &str, query: &str) -> Self {
        Self {
            path: path.to_string(),
            query: query.to_string(),
            ..Default::default()
        }
    }

    pub fn replaced_urls(&self) -> Vec<String> {
        self.replaced.lock().unwrap().clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }

    pub fn delayed_redirects(&self) -> Vec<(String, u32)> {
        self.delayed_redirects.lock().unwrap().clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn back_count(&self) -> u32 {
        *self.back.lock().unwrap()
    }
}

impl BrowserEnv for RecordingBrowser {
    fn query_string(&self) -> String {
        self.query.clone()
    }

    fn path(&self) -> String {
        self.path.clone()
    }

    fn replace_url(&self, url: &str) {
        self.replaced.lock().unwrap().push(url.to_string());
    }

    fn redirect(&self, url: &str) {
        self.redirects.lock().unwrap().push(url.to_string());
    }

    fn redirect_after(&self, url: &str, delay_ms: u32) {
        self.delayed_redirects
            .lock()
            .unwrap()
            .push((url.to_string(), delay_ms));
    }

    fn notify(&self, message: &str) {
        self.notifications.lock().unwrap().push(message.to_string());
    }

    fn go_back(&self) {
        *self.back.lock().unwrap() += 1;
    }
}

pub fn tenant_context(stored: Option<&str>) -> TenantContext {
    let storage = match stored {
        Some(value) => MemoryStorage::with("current_ruc", value),
        None => MemoryStorage::default(),
    };
    TenantContext::new(Arc::new(storage), "current_ruc")
}

pub fn client(tenant: &TenantContext, transport: Arc<RecordingTransport>) -> ApiClient {
    ApiClient::new(&AppConfig::default().api, tenant.clone(), transport)
}

pub fn deps<R: Resource>(
    tenant: &TenantContext,
    transport: Arc<RecordingTransport>,
    browser: Arc<RecordingBrowser>,
) -> CrudDeps<R> {
    let client = client(tenant, transport);
    CrudDeps {
        service: ResourceService::new(client.clone()),
        client,
        tenant: tenant.clone(),
        browser,
        auth: AppConfig::default().auth,
    }
}

// ============================================================================
// Wire fixtures
// ============================================================================

pub fn audit_json() -> Value {
    json!({
        "usuarioRegistro": "admin",
        "fechaRegistro": "2024-03-15T14:02:26.123Z",
        "usuarioModificacion": null,
        "fechaModificacion": null
    })
}

fn with_audit(mut value: Value) -> Value {
    if let (Some(target), Some(audit)) = (value.as_object_mut(), audit_json().as_object()) {
        for (key, field) in audit {
            target.insert(key.clone(), field.clone());
        }
    }
    value
}

pub fn parameter_json(id: i64, name: &str, status: &str) -> Value {
    with_audit(json!({
        "idParametroSistema": id,
        "nombreParametroSistema": name,
        "valorParametroSistema": "10",
        "idGrupoParametro": 1,
        "idEntidadSistema": 5,
        "indicadorEstado": status,
        "estadoSincronizacion": "0"
    }))
}

pub fn group_json(id: i64, name: &str, status: &str) -> Value {
    with_audit(json!({
        "idGrupoParametro": id,
        "nombreGrupoParametro": name,
        "indicadorEstado": status
    }))
}

pub fn element_json(id: i64, entity_id: i64, name: &str) -> Value {
    with_audit(json!({
        "id": id,
        "idEntidad": entity_id,
        "nombreElemento": name,
        "visible": "1",
        "editable": "1",
        "indicadorEstado": "A"
    }))
}

pub fn entity_json(id: i64, name: &str, elements: Vec<Value>) -> Value {
    with_audit(json!({
        "idEntidadSistema": id,
        "nombreEntidadSistema": name,
        "indicadorEstado": "A",
        "idModuloSistema": 2,
        "ultimaFechaDescarga": null,
        "ultimaFechaSubida": null,
        "numeroRegistrosPendientesIteracion": 0,
        "numeroRegistrosPendientesSincronizacion": 3,
        "modoSincronizacion": "2",
        "numeroFilasPorPagina": 20,
        "estadoImportacion": "0",
        "nombrePlantillaImportacion": null,
        "elementos": elements
    }))
}
