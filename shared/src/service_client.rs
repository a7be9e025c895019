//! HTTP clients for the two upstream services.
//!
//! Each client is built once at startup from [`UpstreamsConfig`] and
//! makes exactly one attempt per call; there is no retry, backoff, or
//! circuit breaking. Failures are logged with the upstream status and
//! body when present, then surfaced unchanged to the caller.

use crate::{config::UpstreamsConfig, error::AppError, models::ParsedReceipt, Result};
use reqwest::{multipart, Client, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Header carrying the per-service API key credential.
const API_KEY_HEADER: &str = "Choreo-API-Key";

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Generic JSON-over-HTTP client for one upstream service.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    client: Client,
    base_url: String,
    api_key: String,
    service_name: &'static str,
}

impl ServiceClient {
    pub fn new(base_url: &str, api_key: &str, service_name: &'static str) -> Result<Self> {
        let client = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(|e| {
                AppError::configuration(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            service_name,
        })
    }

    pub async fn get<T>(&self, endpoint: &str, fallback: &'static str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e, fallback))?;

        self.handle_response(response, fallback).await
    }

    pub async fn post<T, R>(&self, endpoint: &str, body: &T, fallback: &'static str) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e, fallback))?;

        self.handle_response(response, fallback).await
    }

    pub async fn put<T, R>(&self, endpoint: &str, body: &T, fallback: &'static str) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .put(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e, fallback))?;

        self.handle_response(response, fallback).await
    }

    pub async fn delete<T>(&self, endpoint: &str, fallback: &'static str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .delete(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e, fallback))?;

        self.handle_response(response, fallback).await
    }

    pub async fn post_multipart<T>(
        &self,
        endpoint: &str,
        form: multipart::Form,
        fallback: &'static str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e, fallback))?;

        self.handle_response(response, fallback).await
    }

    /// Deserializes a success response, or captures the upstream status
    /// and body for relaying. An empty success body deserializes as JSON
    /// `null` so callers can normalize it.
    async fn handle_response<T>(&self, response: Response, fallback: &'static str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status.is_success() {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| self.map_reqwest_error(e, fallback))?;

            let payload: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };

            serde_json::from_slice(payload).map_err(|e| {
                tracing::error!(
                    "{}: failed to deserialize response: {}",
                    self.service_name,
                    e
                );
                AppError::Transport {
                    service: self.service_name,
                    message: format!("failed to deserialize response: {}", e),
                    fallback,
                }
            })
        } else {
            let bytes = response.bytes().await.unwrap_or_default();
            let body = if bytes.is_empty() {
                None
            } else {
                // Non-JSON error bodies are relayed as a JSON string.
                match serde_json::from_slice::<Value>(&bytes) {
                    Ok(value) => Some(value),
                    Err(_) => Some(Value::String(
                        String::from_utf8_lossy(&bytes).into_owned(),
                    )),
                }
            };

            tracing::error!(
                "{} request failed: HTTP {}, body: {:?}",
                self.service_name,
                status,
                body
            );

            Err(AppError::Upstream {
                service: self.service_name,
                status: status.as_u16(),
                body,
                fallback,
            })
        }
    }

    fn map_reqwest_error(&self, error: reqwest::Error, fallback: &'static str) -> AppError {
        tracing::error!("{} request failed: {}", self.service_name, error);
        AppError::Transport {
            service: self.service_name,
            message: error.to_string(),
            fallback,
        }
    }
}

/// Client for the accounts service, which owns bill records.
#[derive(Debug, Clone)]
pub struct AccountsClient {
    client: ServiceClient,
}

impl AccountsClient {
    pub fn new(config: &UpstreamsConfig) -> Result<Self> {
        Ok(Self {
            client: ServiceClient::new(
                &config.accounts_url,
                &config.accounts_api_key,
                "accounts",
            )?,
        })
    }

    /// Lists all bills. An empty upstream body comes back as
    /// `Value::Null`; the handler turns that into `[]`.
    pub async fn list_bills(&self) -> Result<Value> {
        self.client.get("/bills", "Failed to fetch bills").await
    }

    pub async fn get_bill(&self, id: &str) -> Result<Value> {
        self.client
            .get(&format!("/bills/{}", id), "Failed to fetch bill")
            .await
    }

    pub async fn create_bill<B, R>(&self, bill: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.client.post("/bills", bill, "Failed to create bill").await
    }

    pub async fn update_bill(&self, id: &str, bill: &Value) -> Result<Value> {
        self.client
            .put(&format!("/bills/{}", id), bill, "Failed to update bill")
            .await
    }

    pub async fn delete_bill(&self, id: &str) -> Result<Value> {
        self.client
            .delete(&format!("/bills/{}", id), "Failed to delete bill")
            .await
    }
}

/// Client for the receipt parser service.
#[derive(Debug, Clone)]
pub struct ParserClient {
    client: ServiceClient,
}

impl ParserClient {
    pub fn new(config: &UpstreamsConfig) -> Result<Self> {
        Ok(Self {
            client: ServiceClient::new(&config.parser_url, &config.parser_api_key, "bill-parser")?,
        })
    }

    /// Forwards the uploaded image as a multipart form, preserving the
    /// declared filename and MIME type.
    pub async fn parse_receipt(
        &self,
        image: Vec<u8>,
        filename: String,
        content_type: &str,
    ) -> Result<ParsedReceipt> {
        let part = multipart::Part::bytes(image)
            .file_name(filename)
            .mime_str(content_type)
            .map_err(|_| {
                AppError::validation(format!("unsupported content type: {}", content_type))
            })?;
        let form = multipart::Form::new().part("image", part);

        self.client
            .post_multipart("/parse-bill", form, "Failed to parse bill")
            .await
    }
}
