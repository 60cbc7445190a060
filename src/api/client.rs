// src/api/client.rs
//! Pure HTTP client wrapper for Notion API.
//!
//! Handles authentication and request/response plumbing; parsing lives in
//! `parser` and record semantics live in `store`.

use super::parser::{parse_page_response, parse_pages_pagination};
use super::types::{ApiResponse, CreatePageRequest, PaginatedResponse, QueryRequest, UpdatePageRequest};
use crate::constants::{NOTION_API_BASE_URL, NOTION_API_VERSION};
use crate::error::AppError;
use crate::model::Page;
use crate::types::{ApiKey, DatabaseId, PageId, ValidatedUrl};
use reqwest::{header, Client, Response};
use serde::Serialize;

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: ValidatedUrl,
}

impl NotionHttpClient {
    /// Creates a client for the hosted Notion API.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        Self::with_base_url(api_key, ValidatedUrl::parse(NOTION_API_BASE_URL)?)
    }

    /// Creates a client that sends requests to `base_url` instead of the hosted API.
    pub fn with_base_url(api_key: &ApiKey, base_url: ValidatedUrl) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        let mut auth_value = header::HeaderValue::from_str(&auth_header).map_err(|e| {
            AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
        })?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_API_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint.
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = self.base_url.join_path(endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a POST request with JSON body to the specified endpoint.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.base_url.join_path(endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }

    /// Makes a PATCH request with JSON body to the specified endpoint.
    pub async fn patch<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        let url = self.base_url.join_path(endpoint);
        log::debug!("PATCH {}", url);
        Ok(self.client.patch(url).json(body).send().await?)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn query_database(
        &self,
        database: &DatabaseId,
        request: &QueryRequest,
    ) -> Result<PaginatedResponse<Page>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_hyphenated());
        let response = self.post(&endpoint, request).await?;
        let result = extract_response_text(response).await?;
        let page = parse_pages_pagination(result)?;
        log::debug!(
            "Query {} returned {} pages (has_more: {})",
            endpoint,
            page.results.len(),
            page.has_more
        );
        Ok(page)
    }

    async fn retrieve_page(&self, id: &PageId) -> Result<Page, AppError> {
        let endpoint = format!("pages/{}", id.to_hyphenated());
        let response = self.get(&endpoint).await?;
        let result = extract_response_text(response).await?;
        parse_page_response(result)
    }

    async fn create_page(&self, request: &CreatePageRequest) -> Result<Page, AppError> {
        let response = self.post("pages", request).await?;
        let result = extract_response_text(response).await?;
        parse_page_response(result)
    }

    async fn update_page(
        &self,
        id: &PageId,
        request: &UpdatePageRequest,
    ) -> Result<Page, AppError> {
        let endpoint = format!("pages/{}", id.to_hyphenated());
        let response = self.patch(&endpoint, request).await?;
        let result = extract_response_text(response).await?;
        parse_page_response(result)
    }
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    if !status.is_success() {
        log::debug!("{} responded with HTTP {}", url, status);
    }

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
