//! HTTP-backed listing generator.
//!
//! Posts the capture request as JSON with a bearer token to
//! `{endpoint}/generate-listing`. The response shape is loosely defined, so a
//! bare array, a `{ "listings": [...] }` wrapper and a single draft object are
//! all accepted.

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use tracing::{debug, warn};

use super::ListingGenerator;
use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, GeneratorResult};
use crate::types::{GenerateListingRequest, ListingDraft};

#[derive(Deserialize)]
#[serde(untagged)]
enum ListingPayload {
    Many(Vec<ListingDraft>),
    Wrapped { listings: Vec<ListingDraft> },
    One(ListingDraft),
}

impl From<ListingPayload> for Vec<ListingDraft> {
    fn from(payload: ListingPayload) -> Self {
        match payload {
            ListingPayload::Many(listings) | ListingPayload::Wrapped { listings } => listings,
            ListingPayload::One(listing) => vec![listing],
        }
    }
}

#[derive(Clone)]
pub struct ApiListingGenerator {
    http_client: Client,
    api_key: String,
    endpoint: String,
}

impl ApiListingGenerator {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build from injected config. Fails if no API key was configured.
    pub fn from_config(config: &GeneratorConfig) -> GeneratorResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| GeneratorError::Config("LISTING_API_KEY not set".into()))?;
        Ok(Self::new(api_key, config.endpoint.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ListingGenerator for ApiListingGenerator {
    fn name(&self) -> &'static str {
        "api"
    }

    async fn generate(&self, request: &GenerateListingRequest) -> GeneratorResult<Vec<ListingDraft>> {
        if request.category.is_none() {
            return Err(GeneratorError::InvalidRequest(
                "Please select a category".into(),
            ));
        }

        let url = format!("{}/generate-listing", self.endpoint);
        debug!(url = %url, source_type = request.source_type.as_str(), "requesting listings");

        let response = self
            .http_client
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| GeneratorError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "listing API returned error");
            return Err(GeneratorError::Api(format!("{}: {}", status, body)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeneratorError::Network(e.to_string()))?;

        let payload: ListingPayload = serde_json::from_str(&body)
            .map_err(|e| GeneratorError::Parse(format!("Failed to deserialize listings: {}", e)))?;

        Ok(payload.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAFT: &str = r#"{"title":"T","description":"D","price":25.5,"category":"Fashion"}"#;

    fn parse(body: &str) -> Vec<ListingDraft> {
        serde_json::from_str::<ListingPayload>(body).unwrap().into()
    }

    #[test]
    fn accepts_all_response_shapes() {
        assert_eq!(parse(&format!("[{},{}]", DRAFT, DRAFT)).len(), 2);
        assert_eq!(parse(&format!(r#"{{"listings":[{}]}}"#, DRAFT)).len(), 1);

        let single = parse(DRAFT);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].category, "Fashion");
        assert!(single[0].features.is_empty());
    }

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let generator = ApiListingGenerator::new("key", "https://api.example.com/v1/");
        assert_eq!(generator.endpoint(), "https://api.example.com/v1");
    }

    #[test]
    fn config_without_key_is_rejected() {
        let config = GeneratorConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            ApiListingGenerator::from_config(&config),
            Err(GeneratorError::Config(_))
        ));
    }
}
