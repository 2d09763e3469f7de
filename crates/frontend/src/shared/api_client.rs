//! Tenant-aware JSON client over a [`Transport`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_error::{translate_status, ApiError};
use super::transport::{ApiRequest, HttpMethod, Transport};
use crate::config::ApiConfig;
use crate::system::tenant::TenantContext;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    tenant_header: String,
    tenant: TenantContext,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, tenant: TenantContext, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tenant_header: config.tenant_header.clone(),
            tenant,
            transport,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build a request for `path`. Fails with `MissingTenant` before anything
    /// is sent when no tenant is stored.
    fn request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiRequest, ApiError> {
        let tenant = self.tenant.require()?;
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(ApiRequest {
            method,
            url: self.url(path),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
                (self.tenant_header.clone(), tenant.as_str().to_string()),
            ],
            body,
        })
    }

    async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let response = self.transport.execute(request).await?;
        if !response.ok() {
            return Err(translate_status(response.status, &response.body));
        }
        Ok(response.body)
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request::<()>(HttpMethod::Get, path, None)?;
        let body = self.send(request).await?;
        Self::decode(&body)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(HttpMethod::Post, path, Some(body))?;
        let body = self.send(request).await?;
        Self::decode(&body)
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.request(HttpMethod::Patch, path, Some(body))?;
        let body = self.send(request).await?;
        Self::decode(&body)
    }

    /// PATCH whose response body is not needed
    pub async fn patch_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self.request(HttpMethod::Patch, path, Some(body))?;
        self.send(request).await.map(|_| ())
    }
}
