//! Server functions for listing generation
//!
//! The API generator (and the key it holds) only ever lives on the server.
//! Mock drafts are made in the browser and never come through here.

use dioxus::prelude::*;
use listing_core::{GenerateListingRequest, ListingDraft};

use crate::state::Settings;

/// Delays the screens should simulate and which generator to use
#[server]
pub async fn load_settings() -> Result<Settings, ServerFnError> {
    Ok(Settings::from(&runtime::config()))
}

/// Generate listing drafts through the listing service
#[server]
pub async fn generate_listings(
    request: GenerateListingRequest,
) -> Result<Vec<ListingDraft>, ServerFnError> {
    let strategy = runtime::config().strategy;
    if strategy != listing_core::GeneratorStrategy::Api {
        tracing::warn!(strategy = %strategy, "rejected server-side generation");
        return Err(ServerFnError::new(format!(
            "server-side generation is disabled for the '{}' strategy",
            strategy
        )));
    }

    let generator = runtime::generator().map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(
        generator = generator.name(),
        source_type = request.source_type.as_str(),
        "generating listings"
    );

    generator.generate(&request).await.map_err(|e| {
        tracing::error!(error = %e, "listing generation failed");
        ServerFnError::new(e.to_string())
    })
}

/// Load configuration and install logging. Called once from `main`.
#[cfg(feature = "server")]
pub fn init() -> anyhow::Result<()> {
    runtime::init()
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

#[cfg(feature = "server")]
mod runtime {
    use std::sync::{Arc, OnceLock};

    use anyhow::Result;
    use listing_core::{build_generator, Config, GeneratorResult, ListingGenerator};
    use tracing_subscriber::EnvFilter;

    static CONFIG: OnceLock<Config> = OnceLock::new();
    static GENERATOR: OnceLock<Arc<dyn ListingGenerator>> = OnceLock::new();

    pub fn init() -> Result<()> {
        // Initialize tracing
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("listing_web=info,listing_core=info")),
            )
            .try_init();

        let config = Config::from_env()?;
        tracing::info!(
            strategy = %config.strategy,
            endpoint = %config.generator.endpoint,
            api_key = %mask(config.generator.api_key.as_deref()),
            analyze_delay_ms = config.timings.analyze_delay.as_millis() as u64,
            results_delay_ms = config.timings.results_delay.as_millis() as u64,
            "configuration loaded"
        );

        let generator = build_generator(config.strategy, &config.generator)?;
        let _ = GENERATOR.set(generator);
        let _ = CONFIG.set(config);
        Ok(())
    }

    pub fn config() -> Config {
        CONFIG.get().cloned().unwrap_or_default()
    }

    pub fn generator() -> GeneratorResult<Arc<dyn ListingGenerator>> {
        match GENERATOR.get() {
            Some(generator) => Ok(Arc::clone(generator)),
            None => {
                let config = config();
                build_generator(config.strategy, &config.generator)
            }
        }
    }

    fn mask(key: Option<&str>) -> String {
        match key {
            Some(key) if key.chars().count() > 4 => {
                format!("{}****", key.chars().take(4).collect::<String>())
            }
            Some(_) => "****".to_string(),
            None => "<unset>".to_string(),
        }
    }
}
