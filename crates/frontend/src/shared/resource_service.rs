//! One client per REST collection, driven by the `Resource` description.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use contracts::domain::a001_system_parameter::aggregate::SystemParameter;
use contracts::domain::a002_parameter_group::aggregate::ParameterGroup;
use contracts::domain::a003_system_entity::aggregate::SystemEntity;
use contracts::domain::a004_entity_element::aggregate::EntityElement;
use contracts::domain::common::Resource;

use super::api_client::ApiClient;
use super::api_error::ApiError;

pub struct ResourceService<R> {
    client: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

pub type ParameterService = ResourceService<SystemParameter>;
pub type ParameterGroupService = ResourceService<ParameterGroup>;
pub type EntityService = ResourceService<SystemEntity>;
pub type EntityElementService = ResourceService<EntityElement>;

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ResourceService<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceService").finish_non_exhaustive()
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }

    /// `GET /{path}`, with the embed flag of the resource when it has one
    pub fn list_path() -> String {
        match R::embed_param() {
            Some(flag) => {
                let query = BTreeMap::from([(flag, true)]);
                let query = serde_qs::to_string(&query).unwrap_or_default();
                format!("{}?{}", R::path(), query)
            }
            None => R::path().to_string(),
        }
    }

    pub fn item_path(id: i64) -> String {
        format!("{}/{}", R::path(), id)
    }

    pub async fn list(&self) -> Result<Vec<R>, ApiError> {
        self.client.get(&Self::list_path()).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<R, ApiError> {
        self.client.get(&Self::item_path(id)).await
    }

    pub async fn create(&self, dto: &R::Create) -> Result<R, ApiError> {
        self.client.post(R::path(), dto).await
    }

    pub async fn update(&self, id: i64, dto: &R::Update) -> Result<R, ApiError> {
        self.client.patch(&Self::item_path(id), dto).await
    }

    /// Soft-disable through `PATCH /{path}/{id}/toggle-estado`
    pub async fn set_status(&self, id: i64, usuario_modificacion: String) -> Result<(), ApiError> {
        let payload = R::disable_payload(usuario_modificacion);
        let path = format!("{}/toggle-estado", Self::item_path(id));
        self.client.patch_unit(&path, &payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::transport::HttpMethod;
    use crate::testing::*;
    use contracts::domain::a002_parameter_group::aggregate::UpdateParameterGroupDto;
    use contracts::enums::StatusFlag;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_list_paths_with_embed_flags() {
        assert_eq!(ParameterService::list_path(), "parametros-sistema");
        assert_eq!(ParameterGroupService::list_path(), "grupo-parametro");
        assert_eq!(EntityService::list_path(), "entidad-sistema?elements=true");
        assert_eq!(EntityElementService::list_path(), "elemento-entidad?relations=true");
    }

    #[test]
    fn test_list_sends_tenant_header() {
        let transport = RecordingTransport::new();
        transport.respond(200, json!([parameter_json(1, "IGV", "A")]));
        let tenant = tenant_context(Some(TENANT));
        let service = ParameterService::new(client(&tenant, transport.clone()));

        let items = block_on(service.list()).unwrap();

        assert_eq!(items.len(), 1);
        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].url, "http://localhost:3001/api/parametros-sistema");
        assert_eq!(requests[0].header("ruc"), Some(TENANT));
    }

    #[test]
    fn test_row_with_foreign_status_still_loads() {
        let transport = RecordingTransport::new();
        transport.respond(
            200,
            json!([parameter_json(1, "IGV", "A"), parameter_json(2, "ISC", "E")]),
        );
        let tenant = tenant_context(Some(TENANT));
        let service = ParameterService::new(client(&tenant, transport));

        let items = block_on(service.list()).unwrap();

        assert_eq!(items.len(), 2);
        assert!(items[0].status().is_active());
        assert!(!items[1].status().is_active());
    }

    #[test]
    fn test_missing_tenant_sends_nothing() {
        let transport = RecordingTransport::new();
        let tenant = tenant_context(None);
        let service = EntityService::new(client(&tenant, transport.clone()));

        assert_eq!(block_on(service.list()), Err(ApiError::MissingTenant));
        assert_eq!(
            block_on(service.set_status(5, "admin".to_string())),
            Err(ApiError::MissingTenant)
        );
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_disable_group_payload() {
        let transport = RecordingTransport::new();
        transport.respond(200, json!({}));
        let tenant = tenant_context(Some(TENANT));
        let service = ParameterGroupService::new(client(&tenant, transport.clone()));

        block_on(service.set_status(3, "admin".to_string())).unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, HttpMethod::Patch);
        assert_eq!(
            request.url,
            "http://localhost:3001/api/grupo-parametro/3/toggle-estado"
        );
        assert_eq!(
            transport.last_body(),
            json!({ "indicadorEstado": "E", "usuarioModificacion": "admin" })
        );
    }

    #[test]
    fn test_disable_parameter_uses_inactive_code() {
        let transport = RecordingTransport::new();
        let tenant = tenant_context(Some(TENANT));
        let service = ParameterService::new(client(&tenant, transport.clone()));

        block_on(service.set_status(8, "admin".to_string())).unwrap();

        assert_eq!(transport.last_body()["indicadorEstado"], "I");
    }

    #[test]
    fn test_update_patches_item() {
        let transport = RecordingTransport::new();
        transport.respond(200, group_json(3, "Ventas", "A"));
        let tenant = tenant_context(Some(TENANT));
        let service = ParameterGroupService::new(client(&tenant, transport.clone()));
        let dto = UpdateParameterGroupDto {
            nombre_grupo_parametro: Some("Ventas".to_string()),
            usuario_modificacion: "jdoe".to_string(),
        };

        let updated = block_on(service.update(3, &dto)).unwrap();

        assert_eq!(updated.nombre_grupo_parametro, "Ventas");
        assert_eq!(
            transport.requests()[0].url,
            "http://localhost:3001/api/grupo-parametro/3"
        );
    }

    #[test]
    fn test_error_statuses_are_translated() {
        let transport = RecordingTransport::new();
        transport.respond(400, json!({ "message": "RUC no válido" }));
        transport.respond(404, json!({ "message": "Not Found" }));
        transport.respond_raw(200, "not json");
        let tenant = tenant_context(Some(TENANT));
        let service = EntityElementService::new(client(&tenant, transport.clone()));

        assert!(matches!(
            block_on(service.list()),
            Err(ApiError::InvalidTenant { .. })
        ));
        assert_eq!(block_on(service.get_by_id(9)), Err(ApiError::NotFound));
        assert!(matches!(block_on(service.list()), Err(ApiError::Decode(_))));
    }
}
