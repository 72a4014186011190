//! Data model shared by the capture screen, the hand-off and the generators.

use serde::{Deserialize, Serialize};

// ============================================================================
// Captured content
// ============================================================================

/// Placeholder product photos used when no images were captured.
pub const DEFAULT_IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e",
    "https://images.unsplash.com/photo-1523275335684-37898b6baf30",
];

/// Raw captured input, before any listing is generated.
///
/// Every field is optional from the generator's point of view; missing
/// values fall back to fixed defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Where the captured content came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Files,
    Url,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Files => "files",
            SourceType::Url => "url",
        }
    }
}

// ============================================================================
// Listing options picked on the capture screen
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Sports,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Home => "Home & Kitchen",
            Category::Sports => "Sports & Outdoors",
        }
    }

    /// Value sent over the wire and used in form controls.
    pub fn value(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::Home => "home",
            Category::Sports => "sports",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::variants().iter().copied().find(|c| c.value() == value)
    }

    pub fn variants() -> &'static [Category] {
        &[
            Category::Electronics,
            Category::Fashion,
            Category::Home,
            Category::Sports,
        ]
    }
}

/// Which sections a generated listing should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingIncludes {
    pub images: bool,
    pub description: bool,
    pub features: bool,
    pub keywords: bool,
}

impl Default for ListingIncludes {
    fn default() -> Self {
        Self {
            images: true,
            description: true,
            features: true,
            keywords: true,
        }
    }
}

impl ListingIncludes {
    /// `(label, enabled)` pairs in display order.
    pub fn entries(&self) -> [(&'static str, bool); 4] {
        [
            ("Images", self.images),
            ("Description", self.description),
            ("Features", self.features),
            ("Keywords", self.keywords),
        ]
    }

    /// Flip the section with the given display label. Unknown labels are ignored.
    pub fn toggle(&mut self, label: &str) {
        match label {
            "Images" => self.images = !self.images,
            "Description" => self.description = !self.description,
            "Features" => self.features = !self.features,
            "Keywords" => self.keywords = !self.keywords,
            _ => {}
        }
    }
}

// ============================================================================
// Hand-off
// ============================================================================

/// One-shot payload carried from the capture screen to the results screen.
///
/// Never persisted or serialized for navigation; the results screen takes it
/// exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct HandOff {
    pub content_data: ContentData,
    pub source_type: SourceType,
    /// The submitted URL, in URL mode
    pub source: Option<String>,
    pub category: Option<Category>,
    pub includes: ListingIncludes,
}

/// Body of `POST {endpoint}/generate-listing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateListingRequest {
    pub content_data: ContentData,
    pub category: Option<Category>,
    pub includes: ListingIncludes,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl From<&HandOff> for GenerateListingRequest {
    fn from(handoff: &HandOff) -> Self {
        Self {
            content_data: handoff.content_data.clone(),
            category: handoff.category,
            includes: handoff.includes,
            source_type: handoff.source_type,
            source: match handoff.source_type {
                SourceType::Url => handoff.source.clone(),
                SourceType::Files => None,
            },
        }
    }
}

// ============================================================================
// Generated output
// ============================================================================

/// One generated e-commerce listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ListingDraft {
    /// Price formatted for display, e.g. `$149.99`.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Progress labels shown while listings are being produced.
pub const GENERATION_STEPS: [&str; 4] = [
    "Analyzing content...",
    "Extracting product details...",
    "Generating description...",
    "Creating listing...",
];

/// Where a finished draft can be turned into a real listing.
pub const MARKETPLACE_URL: &str = "https://sellercentral.amazon.com";

#[cfg(test)]
mod tests {
    use super::*;

    fn url_handoff() -> HandOff {
        HandOff {
            content_data: ContentData {
                title: Some("Trending Product from example.com".into()),
                ..Default::default()
            },
            source_type: SourceType::Url,
            source: Some("https://example.com/post/1".into()),
            category: Some(Category::Home),
            includes: ListingIncludes::default(),
        }
    }

    #[test]
    fn request_body_uses_camel_case_and_lowercase_tags() {
        let request = GenerateListingRequest::from(&url_handoff());
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["sourceType"], "url");
        assert_eq!(body["category"], "home");
        assert_eq!(body["source"], "https://example.com/post/1");
        assert_eq!(body["contentData"]["title"], "Trending Product from example.com");
        assert_eq!(body["includes"]["keywords"], true);
    }

    #[test]
    fn file_requests_drop_the_source() {
        let mut handoff = url_handoff();
        handoff.source_type = SourceType::Files;

        let body = serde_json::to_value(GenerateListingRequest::from(&handoff)).unwrap();
        assert!(body.get("source").is_none());
        assert_eq!(body["sourceType"], "files");
    }

    #[test]
    fn category_lookup_by_form_value() {
        assert_eq!(Category::from_value("sports"), Some(Category::Sports));
        assert_eq!(Category::from_value(""), None);
        assert_eq!(Category::Home.label(), "Home & Kitchen");
    }

    #[test]
    fn includes_toggle_by_label() {
        let mut includes = ListingIncludes::default();
        includes.toggle("Features");
        includes.toggle("Nonsense");

        assert!(!includes.features);
        assert!(includes.images && includes.description && includes.keywords);
    }

    #[test]
    fn display_price_keeps_two_decimals() {
        let draft = ListingDraft {
            title: "t".into(),
            description: "d".into(),
            price: 20.5,
            category: "General".into(),
            images: vec![],
            features: vec![],
            keywords: vec![],
        };
        assert_eq!(draft.display_price(), "$20.50");
        assert_eq!(draft.cover_image(), None);
    }
}
