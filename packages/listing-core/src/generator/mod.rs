//! Listing generators.
//!
//! One interface, two strategies: the dummy generator fabricates drafts
//! locally and is what the app runs on; the API generator posts the request
//! to a listing service. The strategy is picked explicitly from config.

mod dummy;
#[cfg(feature = "api")]
mod api;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, GeneratorResult};
use crate::types::{GenerateListingRequest, ListingDraft};

#[cfg(feature = "api")]
pub use api::ApiListingGenerator;
pub use dummy::*;

/// Produces listing drafts for a captured post.
#[async_trait]
pub trait ListingGenerator: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    async fn generate(&self, request: &GenerateListingRequest) -> GeneratorResult<Vec<ListingDraft>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorStrategy {
    #[default]
    Mock,
    Api,
}

impl GeneratorStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorStrategy::Mock => "mock",
            GeneratorStrategy::Api => "api",
        }
    }
}

impl fmt::Display for GeneratorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorStrategy {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" | "dummy" => Ok(GeneratorStrategy::Mock),
            "api" => Ok(GeneratorStrategy::Api),
            other => Err(GeneratorError::Config(format!(
                "unknown generator strategy '{}' (expected 'mock' or 'api')",
                other
            ))),
        }
    }
}

/// Build the generator for a strategy.
pub fn build_generator(
    strategy: GeneratorStrategy,
    config: &GeneratorConfig,
) -> GeneratorResult<Arc<dyn ListingGenerator>> {
    match strategy {
        GeneratorStrategy::Mock => Ok(Arc::new(DummyListingGenerator::new())),
        #[cfg(feature = "api")]
        GeneratorStrategy::Api => Ok(Arc::new(ApiListingGenerator::from_config(config)?)),
        #[cfg(not(feature = "api"))]
        GeneratorStrategy::Api => {
            let _ = config;
            Err(GeneratorError::Config(
                "built without the `api` feature".into(),
            ))
        }
    }
}
