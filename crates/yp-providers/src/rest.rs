// ABOUTME: REST implementation of the directory provider using reqwest
// ABOUTME: Maps HTTP status codes onto AppError and accepts plain or paginated list payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::constants::defaults::{
    API_BASE_URL, HTTP_CONNECT_TIMEOUT_SECS, HTTP_TIMEOUT_SECS,
};
use crate::constants::service_names::DIRECTORY_BACKEND;
use crate::core::DirectoryProvider;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{Business, BusinessId, SubscriptionPlan, UserSubscription};

/// Connection settings for the REST backend
#[derive(Debug, Clone)]
pub struct RestProviderConfig {
    /// API root, e.g. `https://directory.example.com/api`
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
}

impl Default for RestProviderConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_owned(),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// List endpoints answer either with a bare array or a paginated envelope
#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Plain(Vec<T>),
    Paginated { results: Vec<T> },
}

impl<T> ListPayload<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Self::Plain(items) | Self::Paginated { results: items } => items,
        }
    }
}

/// Directory provider talking to the backend over HTTP
#[derive(Debug, Clone)]
pub struct RestDirectoryProvider {
    client: Client,
    base_url: Url,
}

impl RestDirectoryProvider {
    /// Create a provider from connection settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the base URL cannot be parsed or the HTTP
    /// client cannot be built
    pub fn new(config: &RestProviderConfig) -> AppResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| {
                AppError::config(format!("Failed to build HTTP client: {e}")).with_source(e)
            })?;

        Ok(Self { client, base_url })
    }

    /// Resolve an endpoint path relative to the base URL
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the path does not form a valid URL
    pub fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| AppError::internal(format!("Invalid endpoint '{path}': {e}")))
    }

    async fn send(&self, request: RequestBuilder, resource: &str) -> AppResult<Response> {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                AppError::external_unavailable(DIRECTORY_BACKEND, format!("{resource}: {e}"))
            } else {
                AppError::external_service(DIRECTORY_BACKEND, format!("{resource}: {e}"))
            }
        })?;

        let status = response.status();
        debug!(resource, status = status.as_u16(), "Backend responded");

        match status {
            s if s.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::auth_invalid(
                format!("{DIRECTORY_BACKEND} rejected credentials for {resource}"),
            )),
            StatusCode::NOT_FOUND => Err(AppError::not_found(resource)),
            s => {
                warn!(resource, status = s.as_u16(), "Backend returned an error status");
                Err(AppError::external_service(
                    DIRECTORY_BACKEND,
                    format!("{resource} returned status {s}"),
                ))
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        resource: &str,
    ) -> AppResult<T> {
        let mut request = self.client.get(self.endpoint(path)?);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = self.send(request, resource).await?;
        response.json::<T>().await.map_err(|e| {
            AppError::external_service(
                DIRECTORY_BACKEND,
                format!("Failed to parse {resource} response: {e}"),
            )
        })
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        resource: &str,
    ) -> AppResult<Vec<T>> {
        let payload: ListPayload<T> = self.get_json(path, token, resource).await?;
        Ok(payload.into_items())
    }
}

/// Parse the base URL and make sure it ends with `/` so `join` appends
fn normalize_base_url(raw: &str) -> AppResult<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| AppError::config(format!("Invalid API base URL '{raw}': {e}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait]
impl DirectoryProvider for RestDirectoryProvider {
    fn name(&self) -> &'static str {
        "rest"
    }

    #[instrument(skip(self), fields(provider = "rest", api_call = "list_businesses"))]
    async fn list_businesses(&self) -> AppResult<Vec<Business>> {
        self.get_list("businesses/", None, "Businesses").await
    }

    #[instrument(skip(self), fields(provider = "rest", api_call = "get_business"))]
    async fn get_business(&self, id: BusinessId) -> AppResult<Business> {
        self.get_json(&format!("businesses/{id}/"), None, &format!("Business {id}"))
            .await
            .map_err(|e| e.with_resource_id(id.to_string()))
    }

    #[instrument(skip(self, token), fields(provider = "rest", api_call = "my_businesses"))]
    async fn my_businesses(&self, token: &str) -> AppResult<Vec<Business>> {
        self.get_list("businesses/mine/", Some(token), "Owned businesses")
            .await
    }

    #[instrument(skip(self), fields(provider = "rest", api_call = "list_plans"))]
    async fn list_plans(&self) -> AppResult<Vec<SubscriptionPlan>> {
        self.get_list("subscriptions/plans/", None, "Subscription plans")
            .await
    }

    #[instrument(skip(self, token), fields(provider = "rest", api_call = "my_subscription"))]
    async fn my_subscription(&self, token: &str) -> AppResult<UserSubscription> {
        match self
            .get_json("subscriptions/me/", Some(token), "Subscription")
            .await
        {
            Err(e) if e.code == ErrorCode::ResourceNotFound => {
                debug!("No active subscription, using free tier");
                Ok(UserSubscription::default())
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BusinessLimit;
    use std::net::TcpListener;

    fn provider(base_url: &str) -> RestDirectoryProvider {
        RestDirectoryProvider::new(&RestProviderConfig {
            base_url: base_url.to_owned(),
            ..RestProviderConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let provider = provider("https://directory.example.com/api");
        assert_eq!(
            provider.endpoint("/businesses/12/").unwrap().as_str(),
            "https://directory.example.com/api/businesses/12/"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = RestDirectoryProvider::new(&RestProviderConfig {
            base_url: "not a url".to_owned(),
            ..RestProviderConfig::default()
        })
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_list_payload_accepts_plain_and_paginated() {
        let plain: ListPayload<SubscriptionPlan> = serde_json::from_str(
            r#"[{"name": "Basic", "price": 0, "business_limit": 1}]"#,
        )
        .unwrap();
        assert_eq!(plain.into_items().len(), 1);

        let paginated: ListPayload<SubscriptionPlan> = serde_json::from_str(
            r#"{"count": 2, "next": null, "results": [
                {"name": "Pro", "price": 19.99, "business_limit": 5},
                {"name": "Premium", "price": 49.0, "business_limit": -1}
            ]}"#,
        )
        .unwrap();
        let plans = paginated.into_items();
        assert_eq!(plans[1].business_limit, BusinessLimit::Unlimited);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_unavailable() {
        // Bind then drop to get a local port with nothing listening
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let provider = provider(&format!("http://127.0.0.1:{port}/api"));

        let err = provider.list_businesses().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ExternalServiceUnavailable);
    }
}
