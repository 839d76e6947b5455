use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn test_client(base_url: &str) -> TravelpayoutsClient {
    TravelpayoutsClient::with_base_url("test-token", 30, "wingfinder-test/0.1", base_url)
        .expect("client construction should not fail")
}

fn test_ctx() -> SearchContext {
    SearchContext::new("NRT", "PRG", "2025-08-26")
}

#[test]
fn build_url_constructs_correct_query_string() {
    let client = test_client("https://api.travelpayouts.com");
    let url = client.build_url(&test_ctx());
    assert_eq!(
        url.as_str(),
        "https://api.travelpayouts.com/v1/prices/cheap?origin=NRT&destination=PRG&depart_date=2025-08-26&return_date=&adults=1&children=0&infants=0&currency=USD&locale=en&token=test-token"
    );
}

#[tokio::test]
async fn cheap_prices_parses_route_keyed_body() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "success": true,
        "data": {
            "NRT-PRG": {
                "0": {
                    "price": 312,
                    "airline": "TK",
                    "flight_number": 198,
                    "departure_time": "14:30",
                    "arrival_time": "08:15",
                    "duration": 1065,
                    "transfers": 1
                }
            }
        }
    });

    Mock::given(method("GET"))
        .and(path("/v1/prices/cheap"))
        .and(query_param("origin", "NRT"))
        .and(query_param("destination", "PRG"))
        .and(query_param("token", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let response = client
        .cheap_prices(&test_ctx())
        .await
        .expect("should parse prices body");

    assert!(response.success);
    let flight = &response.data["NRT-PRG"]["0"];
    assert_eq!(flight.price, Some(312.0));
    assert_eq!(flight.airline.as_deref(), Some("TK"));
    assert_eq!(flight.flight_number, Some(198));
}

#[tokio::test]
async fn cheap_prices_maps_401_to_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .cheap_prices(&test_ctx())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProviderError::Unauthorized {
            provider: Provider::Travelpayouts
        }
    ));
}

#[tokio::test]
async fn cheap_prices_maps_429_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .cheap_prices(&test_ctx())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProviderError::RateLimited {
            provider: Provider::Travelpayouts
        }
    ));
}

#[tokio::test]
async fn cheap_prices_surfaces_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .cheap_prices(&test_ctx())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProviderError::UnexpectedStatus { status: 503, .. }
    ));
}

#[tokio::test]
async fn cheap_prices_reports_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .cheap_prices(&test_ctx())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Deserialize { .. }));
}
