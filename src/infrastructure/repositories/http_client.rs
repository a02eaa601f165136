use crate::domain::content::FetchError;
use async_openai::{config::OpenAIConfig, Client as OpenAiClient};
use backoff::ExponentialBackoffBuilder;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

/// Timeout applied to every content-provider call
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for one OpenAI call; transcription uploads can be up to 25 MiB
pub const OPENAI_TIMEOUT: Duration = Duration::from_secs(60);

const USER_AGENT: &str = concat!("murshid-backend/", env!("CARGO_PKG_VERSION"));

/// Shared client for the JSON content providers
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    build_http_client_with_timeout(PROVIDER_TIMEOUT)
}

pub fn build_http_client_with_timeout(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).user_agent(USER_AGENT).build()
}

/// OpenAI client with a fixed per-call timeout and SDK retries turned off.
///
/// A rate-limited or failing completion returns its error on the first attempt
/// so callers can fall back straight away.
pub fn build_openai_client(
    config: OpenAIConfig,
    timeout: Duration,
) -> Result<OpenAiClient<OpenAIConfig>, reqwest::Error> {
    let http_client = build_http_client_with_timeout(timeout)?;
    let no_retries = ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build();

    Ok(OpenAiClient::with_config(config)
        .with_http_client(http_client)
        .with_backoff(no_retries))
}

/// 404 is NotFound; other failures, including undecodable bodies, are Transport
pub(crate) async fn decode_response<T: DeserializeOwned>(
    provider: &'static str,
    url: &str,
    response: Response,
) -> Result<T, FetchError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        tracing::warn!(provider, url, "Provider returned 404");
        return Err(FetchError::NotFound(url.to_string()));
    }
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        tracing::error!(provider, url, status = status.as_u16(), body = %body, "Provider returned an error");
        return Err(FetchError::Transport(format!("{} returned status {}", provider, status)));
    }

    response.json::<T>().await.map_err(|e| {
        tracing::error!(provider, url, error = %e, "Failed to decode provider response");
        FetchError::Transport(format!("Failed to parse {} response: {}", provider, e))
    })
}

/// GET a JSON document with optional query parameters
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    provider: &'static str,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, FetchError> {
    let start = Instant::now();
    let response = client.get(url).query(query).send().await.map_err(|e| {
        tracing::error!(provider, url, error = %e, "Provider request failed");
        FetchError::Transport(format!("{} request failed: {}", provider, e))
    })?;

    tracing::debug!(
        provider,
        url,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "Provider responded"
    );

    decode_response(provider, url, response).await
}
