//! Integration tests for the travelrec search service
//!
//! Exercise the full pipeline against the fixture catalogs: file
//! loading, shape detection, matching, local-time enrichment and the
//! user-facing error paths.

use std::path::PathBuf;

use rstest::rstest;
use travelrec::loader::FileCatalogSource;
use travelrec::models::SearchType;
use travelrec::search::SearchService;
use travelrec::TravelRecError;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn grouped_service() -> SearchService {
    SearchService::new(Box::new(FileCatalogSource::new(fixture_path(
        "travel_recommendation_api.json",
    ))))
}

fn flat_service() -> SearchService {
    SearchService::new(Box::new(FileCatalogSource::new(fixture_path(
        "destinations_flat.json",
    ))))
}

#[rstest]
#[case("beach")]
#[case("Beaches")]
#[tokio::test]
async fn test_beach_keyword_returns_beaches_category(#[case] keyword: &str) {
    let outcome = grouped_service().search(keyword).await.unwrap();
    assert_eq!(outcome.response.search_type, SearchType::Beaches);
    let names: Vec<&str> = outcome
        .response
        .results
        .iter()
        .map(|card| card.destination.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Bora Bora, French Polynesia", "Copacabana Beach, Brazil"]
    );
}

#[rstest]
#[case("country")]
#[case("countries")]
#[tokio::test]
async fn test_country_keyword_concatenates_cities_in_order(#[case] keyword: &str) {
    let outcome = grouped_service().search(keyword).await.unwrap();
    assert_eq!(outcome.response.search_type, SearchType::Countries);
    let names: Vec<&str> = outcome
        .response
        .results
        .iter()
        .map(|card| card.destination.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Sydney, Australia",
            "Melbourne, Australia",
            "Tokyo, Japan",
            "Kyoto, Japan",
            "Rio de Janeiro, Brazil",
            "São Paulo, Brazil",
        ]
    );
}

#[tokio::test]
async fn test_free_text_country_search_is_case_insensitive() {
    let outcome = grouped_service().search("  JAPAN ").await.unwrap();
    assert_eq!(outcome.response.search_type, SearchType::Specific);
    let names: Vec<&str> = outcome
        .response
        .results
        .iter()
        .map(|card| card.destination.name.as_str())
        .collect();
    assert_eq!(names, vec!["Tokyo, Japan", "Kyoto, Japan"]);
}

#[tokio::test]
async fn test_results_carry_local_time_for_known_countries() {
    let outcome = grouped_service().search("temple").await.unwrap();
    assert_eq!(outcome.response.results.len(), 2);
    // Cambodia and India are both in the timezone table
    for card in &outcome.response.results {
        let local_time = card.local_time.as_deref().expect("local time missing");
        assert!(local_time.ends_with("AM") || local_time.ends_with("PM"));
    }
}

#[tokio::test]
async fn test_unknown_keyword_returns_no_results() {
    let outcome = grouped_service().search("xyz").await.unwrap();
    assert_eq!(outcome.response.search_type, SearchType::Specific);
    assert!(outcome.response.results.is_empty());
}

#[tokio::test]
async fn test_empty_keyword_is_rejected() {
    let err = grouped_service().search("   ").await.unwrap_err();
    assert!(matches!(err, TravelRecError::Validation { .. }));
    assert_eq!(err.user_message(), "Please enter a search keyword");
}

#[tokio::test]
async fn test_missing_catalog_is_data_unavailable() {
    let service = SearchService::new(Box::new(FileCatalogSource::new(fixture_path(
        "does_not_exist.json",
    ))));
    let err = service.search("beach").await.unwrap_err();
    assert!(matches!(err, TravelRecError::Data { .. }));
    assert_eq!(
        err.user_message(),
        "Error loading recommendations. Please try again."
    );
}

#[rstest]
#[case("brazil", vec!["Rio de Janeiro"])]
#[case("beach", vec!["Rio de Janeiro", "Bali"])]
#[case("temple", vec!["Angkor Wat"])]
#[case("rio", vec![])]
#[tokio::test]
async fn test_flat_catalog_matches_type_or_country_exactly(
    #[case] keyword: &str,
    #[case] expected: Vec<&str>,
) {
    let outcome = flat_service().search(keyword).await.unwrap();
    assert_eq!(outcome.response.search_type, SearchType::Specific);
    let names: Vec<&str> = outcome
        .response
        .results
        .iter()
        .map(|card| card.destination.name.as_str())
        .collect();
    assert_eq!(names, expected);
}

#[tokio::test]
async fn test_display_tracks_latest_completed_search() {
    let service = grouped_service();
    service.search("beach").await.unwrap();
    service.search("temple").await.unwrap();

    let current = service.current().await.expect("nothing displayed");
    assert_eq!(current.search_type, SearchType::Temples);
}
