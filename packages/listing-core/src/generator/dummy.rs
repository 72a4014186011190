//! Placeholder listing generation.
//!
//! Nothing here looks at the content beyond copying title, description and
//! images; price and the feature/keyword prefix lengths are random. The
//! category is always "General", whatever was picked on the capture screen.

use async_trait::async_trait;
use rand::Rng;

use super::ListingGenerator;
use crate::error::GeneratorResult;
use crate::types::{ContentData, GenerateListingRequest, ListingDraft, DEFAULT_IMAGES};

pub const DEFAULT_TITLE: &str = "Premium Product Listing";
pub const DEFAULT_DESCRIPTION: &str = "High-quality product perfect for your needs. Features premium materials and expert craftsmanship.";
pub const DEFAULT_CATEGORY: &str = "General";

pub const FEATURE_CANDIDATES: [&str; 6] = [
    "Premium quality materials",
    "Durable construction",
    "Easy to use",
    "Modern design",
    "Satisfaction guaranteed",
    "Fast shipping",
];

pub const KEYWORD_CANDIDATES: [&str; 6] = [
    "trending",
    "bestseller",
    "premium",
    "quality",
    "popular",
    "recommended",
];

/// Price bounds in cents, both inclusive.
pub const MIN_PRICE_CENTS: u32 = 1999;
pub const MAX_PRICE_CENTS: u32 = 29999;

/// Generate one draft from (possibly empty) content.
pub fn generate_dummy_listing<R: Rng>(content: &ContentData, rng: &mut R) -> ListingDraft {
    let cents = rng.random_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS);

    let images = if content.images.is_empty() {
        DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect()
    } else {
        content.images.clone()
    };

    ListingDraft {
        title: content
            .title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: content
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        price: f64::from(cents) / 100.0,
        category: DEFAULT_CATEGORY.to_string(),
        images,
        features: random_prefix(&FEATURE_CANDIDATES, rng),
        keywords: random_prefix(&KEYWORD_CANDIDATES, rng),
    }
}

/// Generate 2-4 independent drafts from the same content.
pub fn generate_dummy_listings<R: Rng>(
    content: &ContentData,
    rng: &mut R,
) -> Vec<ListingDraft> {
    let count = rng.random_range(2..=4);
    (0..count)
        .map(|_| generate_dummy_listing(content, rng))
        .collect()
}

/// First 3-5 entries of a candidate list, in order.
fn random_prefix<R: Rng>(candidates: &[&str], rng: &mut R) -> Vec<String> {
    let len = rng.random_range(3..=5);
    candidates[..len].iter().map(|s| s.to_string()).collect()
}

/// [`ListingGenerator`] backed by the placeholder functions above.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyListingGenerator;

impl DummyListingGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ListingGenerator for DummyListingGenerator {
    fn name(&self) -> &'static str {
        "dummy"
    }

    async fn generate(&self, request: &GenerateListingRequest) -> GeneratorResult<Vec<ListingDraft>> {
        Ok(generate_dummy_listings(&request.content_data, &mut rand::rng()))
    }
}
