//! Integration tests for the HTTP listing generator against a local mock API.

#![cfg(feature = "api")]

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use test_context::test_context;

use crate::common::*;
use listing_core::{
    build_generator, ApiListingGenerator, Category, ContentData, GenerateListingRequest,
    GeneratorConfig, GeneratorError, GeneratorStrategy, HandOffSlot, ListingGenerator,
    ListingIncludes, PipelineTimings, ResultsSession, ResultsState, SourceType,
};

fn url_request(category: Option<Category>) -> GenerateListingRequest {
    GenerateListingRequest {
        content_data: ContentData {
            title: Some("Trending Product from example.com".into()),
            tags: vec!["viral".into()],
            ..Default::default()
        },
        category,
        includes: ListingIncludes {
            keywords: false,
            ..Default::default()
        },
        source_type: SourceType::Url,
        source: Some("https://example.com/post/1".into()),
    }
}

fn generator_for(api: &MockListingApi) -> ApiListingGenerator {
    ApiListingGenerator::from_config(&GeneratorConfig {
        api_key: Some("test-key".into()),
        endpoint: api.endpoint(),
    })
    .unwrap()
}

// =============================================================================
// Request shape
// =============================================================================

/// The request is an authenticated JSON POST carrying the capture payload
#[test_context(MockListingApi)]
#[tokio::test]
async fn posts_bearer_authenticated_json(api: &mut MockListingApi) {
    api.respond_with(
        StatusCode::OK,
        json!([{ "title": "Lamp", "description": "Warm", "price": 49.5, "category": "Home" }]),
    );

    let listings = generator_for(api)
        .generate(&url_request(Some(Category::Home)))
        .await
        .unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].title, "Lamp");

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.authorization.as_deref(), Some("Bearer test-key"));
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(request.body["category"], "home");
    assert_eq!(request.body["sourceType"], "url");
    assert_eq!(request.body["source"], "https://example.com/post/1");
    assert_eq!(request.body["includes"]["keywords"], false);
    assert_eq!(
        request.body["contentData"]["title"],
        "Trending Product from example.com"
    );
}

/// Wrapped responses are unwrapped
#[test_context(MockListingApi)]
#[tokio::test]
async fn accepts_wrapped_listings(api: &mut MockListingApi) {
    api.respond_with(
        StatusCode::OK,
        json!({ "listings": [
            { "title": "A", "description": "a", "price": 20.0, "category": "Fashion", "features": ["Soft"] },
            { "title": "B", "description": "b", "price": 30.0, "category": "Fashion" }
        ]}),
    );

    let listings = generator_for(api)
        .generate(&url_request(Some(Category::Fashion)))
        .await
        .unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].features, vec!["Soft"]);
    assert!(listings[1].features.is_empty());
}

// =============================================================================
// Failures
// =============================================================================

/// A missing category is rejected before any request goes out
#[test_context(MockListingApi)]
#[tokio::test]
async fn missing_category_is_rejected_locally(api: &mut MockListingApi) {
    let result = generator_for(api).generate(&url_request(None)).await;

    assert!(matches!(result, Err(GeneratorError::InvalidRequest(_))));
    assert!(api.requests().is_empty());
}

/// Non-2xx responses surface as API errors
#[test_context(MockListingApi)]
#[tokio::test]
async fn server_errors_are_reported(api: &mut MockListingApi) {
    api.respond_with(StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "boom" }));

    let result = generator_for(api)
        .generate(&url_request(Some(Category::Sports)))
        .await;

    match result {
        Err(GeneratorError::Api(message)) => assert!(message.contains("500")),
        other => panic!("expected API error, got {:?}", other),
    }
}

/// Bodies that are not listings surface as parse errors
#[test_context(MockListingApi)]
#[tokio::test]
async fn unexpected_payload_is_a_parse_error(api: &mut MockListingApi) {
    api.respond_with(StatusCode::OK, json!({ "status": "queued" }));

    let result = generator_for(api)
        .generate(&url_request(Some(Category::Electronics)))
        .await;

    assert!(matches!(result, Err(GeneratorError::Parse(_))));
}

// =============================================================================
// Strategy selection
// =============================================================================

/// The API strategy plugs into the results screen like the dummy one
#[test_context(MockListingApi)]
#[tokio::test]
async fn api_strategy_drives_the_results_screen(api: &mut MockListingApi) {
    api.respond_with(
        StatusCode::OK,
        json!([{ "title": "Lamp", "description": "Warm", "price": 49.5, "category": "Home" }]),
    );

    let generator = build_generator(
        GeneratorStrategy::Api,
        &GeneratorConfig {
            api_key: Some("test-key".into()),
            endpoint: api.endpoint(),
        },
    )
    .unwrap();
    assert_eq!(generator.name(), "api");

    let slot = HandOffSlot::default();
    slot.put(listing_core::HandOff {
        content_data: ContentData::default(),
        source_type: SourceType::Files,
        source: None,
        category: Some(Category::Home),
        includes: ListingIncludes::default(),
    });

    let timings = PipelineTimings {
        analyze_delay: std::time::Duration::from_millis(1),
        results_delay: std::time::Duration::from_millis(1),
    };
    let results = ResultsSession::enter_from(&slot, Arc::clone(&generator), timings);

    for _ in 0..100 {
        if results.state() == ResultsState::Loaded {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }

    assert_eq!(results.state(), ResultsState::Loaded);
    assert_eq!(results.listings()[0].category, "Home");
    assert!(api.requests()[0].body.get("source").is_none());
}
