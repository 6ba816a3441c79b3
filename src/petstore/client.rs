//! HTTP client for the pet-store API

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;
use tracing::{debug, trace};

use crate::common::config::ApiConfig;
use crate::common::{truncate_for_display, Error, Result};

use super::model::Pet;

/// Status and decoded body of an API call
///
/// Bodies that are empty or not JSON decode to `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

pub struct PetStoreClient {
    http: reqwest::Client,
    base_url: String,
    pet_endpoint: String,
}

impl PetStoreClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::Config(format!("Invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                Error::Config(format!("Invalid value for header '{}': {}", name.as_str(), e))
            })?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            pet_endpoint: config.pet_endpoint.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a pet payload
    pub async fn create_pet(&self, pet: &Pet) -> Result<ApiResponse> {
        let url = self.url(&self.pet_endpoint);
        debug!(%url, pet_id = pet.id, "POST pet");
        let response = self.http.post(&url).json(pet).send().await?;
        Self::decode(response).await
    }

    /// GET a pet by id
    pub async fn find_pet(&self, id: i64) -> Result<ApiResponse> {
        let url = self.url(&format!("{}/{}", self.pet_endpoint, id));
        debug!(%url, "GET pet");
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    /// GET the store inventory, used as a reachability probe
    pub async fn inventory(&self) -> Result<ApiResponse> {
        let url = self.url("/store/inventory");
        debug!(%url, "GET inventory");
        let response = self.http.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn decode(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        trace!(status, body = %truncate_for_display(&text, 500), "Response");

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::Null)
        };

        Ok(ApiResponse { status, body })
    }
}
