//! Test filtering the listing with query parameters.

use crate::e2e_tests::helpers::*;
use crate::types::Animal;
use axum::http::StatusCode;

async fn list(server: &TestServer, query: &str) -> Vec<Animal> {
    let response = server.get(&format!("/api/animals?{query}")).await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn test_filter_by_single_trait() {
    let (server, _memory) = TestServer::seeded();

    let animals = list(&server, "personalityTraits=hungry").await;

    assert_eq!(ids(&animals), vec!["3", "5"]);
}

#[tokio::test]
async fn test_filter_by_repeated_traits_requires_all() {
    let (server, _memory) = TestServer::seeded();

    let animals = list(&server, "personalityTraits=brave&personalityTraits=loyal").await;

    assert_eq!(ids(&animals), vec!["1", "4"]);
}

#[tokio::test]
async fn test_bracketed_traits_match_repeated_traits() {
    let (server, _memory) = TestServer::seeded();

    let bracketed = list(
        &server,
        "personalityTraits%5B%5D=brave&personalityTraits%5B%5D=loyal",
    )
    .await;

    assert_eq!(ids(&bracketed), vec!["1", "4"]);
}

#[tokio::test]
async fn test_combined_filters_are_conjunctive() {
    let (server, _memory) = TestServer::seeded();

    let animals = list(&server, "diet=carnivore&personalityTraits=brave").await;
    assert_eq!(ids(&animals), vec!["1", "4"]);

    let animals = list(&server, "diet=carnivore&species=penguin&name=Jacqueline").await;
    assert_eq!(ids(&animals), vec!["4"]);

    let animals = list(&server, "diet=herbivore&species=tiger").await;
    assert!(animals.is_empty());
}

#[tokio::test]
async fn test_unmatched_species_is_empty_not_error() {
    let (server, _memory) = TestServer::seeded();

    let animals = list(&server, "species=unicorn").await;

    assert!(animals.is_empty());
}

#[tokio::test]
async fn test_unknown_and_empty_parameters_are_ignored() {
    let (server, _memory) = TestServer::seeded();

    let animals = list(&server, "color=brown&diet=&sort=name").await;

    assert_eq!(animals.len(), 6);
}

#[tokio::test]
async fn test_percent_encoded_values() {
    let (server, _memory) = TestServer::seeded();
    let created = server
        .post_json(
            "/api/animals",
            r#"{"name":"Mr Snuggles","species":"red panda","diet":"herbivore","personalityTraits":[]}"#,
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);

    let animals = list(&server, "species=red%20panda").await;
    assert_eq!(ids(&animals), vec!["6"]);

    let animals = list(&server, "name=Mr+Snuggles").await;
    assert_eq!(ids(&animals), vec!["6"]);
}

#[tokio::test]
async fn test_repeated_scalar_parameter_is_ignored() {
    let (server, _memory) = TestServer::seeded();

    let animals = list(&server, "species=tiger&species=bear").await;
    assert_eq!(animals.len(), 6);

    let animals = list(&server, "species=tiger&species=bear&diet=omnivore").await;
    assert_eq!(ids(&animals), vec!["0", "3"]);
}

#[tokio::test]
async fn test_garbled_query_string_still_lists() {
    let (server, _memory) = TestServer::seeded();

    let animals = list(&server, "%FF%FE=1&&=&personalityTraits").await;

    assert_eq!(animals.len(), 6);
}
