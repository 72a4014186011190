//! Where the results page gets its drafts from.

use listing_core::{generate_dummy_listings, GenerateListingRequest, GeneratorStrategy, ListingDraft};

use crate::server_fns::generate_listings;

/// Produce drafts for a hand-off.
///
/// The mock strategy runs in the browser so uploaded media never crosses the
/// wire; only the API strategy calls the server, which holds the key.
pub async fn generate(
    strategy: GeneratorStrategy,
    request: GenerateListingRequest,
) -> Result<Vec<ListingDraft>, String> {
    match strategy {
        GeneratorStrategy::Mock => {
            tracing::debug!("generating mock listings locally");
            Ok(generate_dummy_listings(&request.content_data, &mut rand::rng()))
        }
        GeneratorStrategy::Api => generate_listings(request).await.map_err(|e| e.to_string()),
    }
}
