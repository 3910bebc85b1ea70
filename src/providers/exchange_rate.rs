//! Client for the public USD-based exchange rate table.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::core::currency::RateSource;
use crate::core::price::FetchError;
use crate::providers::{SUPPLEMENTARY_TIMEOUT, USER_AGENT};

pub struct ExchangeRateApi {
    base_url: String,
}

impl ExchangeRateApi {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApi {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeRateResponse {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

#[async_trait]
impl RateSource for ExchangeRateApi {
    async fn usd_rates(&self) -> Result<HashMap<String, f64>, FetchError> {
        let url = format!("{}/v4/latest/USD", self.base_url);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(SUPPLEMENTARY_TIMEOUT)
            .build()?;
        let response = client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let text = response.text().await?;
        let data: ExchangeRateResponse = serde_json::from_str(&text)?;
        Ok(data.rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(mock_response: &str, status_code: u16) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v4/latest/USD"))
            .respond_with(ResponseTemplate::new(status_code).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_rate_fetch() {
        let mock_response = r#"{
            "base": "USD",
            "rates": {"TRY": 34.12, "EUR": 0.92, "GBP": 0.79}
        }"#;
        let mock_server = create_mock_server(mock_response, 200).await;

        let provider = ExchangeRateApi::new(&mock_server.uri());
        let rates = provider.usd_rates().await.unwrap();

        assert_eq!(rates.get("TRY"), Some(&34.12));
        assert_eq!(rates.get("EUR"), Some(&0.92));
    }

    #[tokio::test]
    async fn test_missing_rates_key_yields_empty_table() {
        let mock_server = create_mock_server(r#"{"base": "USD"}"#, 200).await;

        let provider = ExchangeRateApi::new(&mock_server.uri());
        let rates = provider.usd_rates().await.unwrap();
        assert!(rates.is_empty());
    }

    #[tokio::test]
    async fn test_http_error_is_reported() {
        let mock_server = create_mock_server("Server Error", 500).await;

        let provider = ExchangeRateApi::new(&mock_server.uri());
        let result = provider.usd_rates().await;
        assert!(matches!(result, Err(FetchError::Status(_))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_reported() {
        let mock_server = create_mock_server("not json", 200).await;

        let provider = ExchangeRateApi::new(&mock_server.uri());
        let result = provider.usd_rates().await;
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }
}
