//! Fetch client tests against a local mock API.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use demodash::client::{DashboardClient, FetchError};

#[tokio::test]
async fn dashboard_parses_summary() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/demographic/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": {
                "total_patients": 248,
                "age_group_distribution": {"Geriatric": 90, "Young Adult": 120, "Infant": 38},
                "gender_distribution": {"male": 130, "female": 110, "other": 8}
            }
        })))
        .mount(&server)
        .await;

    let client = DashboardClient::new(server.uri());
    let resp = client.fetch_dashboard().await.unwrap();
    assert_eq!(resp.summary.total_patients, Some(248));
    assert_eq!(resp.summary.age_group_distribution["Geriatric"], 90);
    assert_eq!(resp.summary.gender_distribution["other"], 8);
}

#[tokio::test]
async fn analysis_endpoints_send_their_query_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/demographic/analysis"))
        .and(query_param("analysis_type", "gender_comparison"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gender_comparisons": {
                "heart_rate": {"male_mean": 82.3, "female_mean": 79.1, "p_value": 0.021}
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/demographic/analysis"))
        .and(query_param("analysis_type", "population_risk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "high_risk_demographics": [
                {"demographic": "Geriatric M", "mean_risk": 6.2}
            ]
        })))
        .mount(&server)
        .await;

    let client = DashboardClient::new(server.uri());

    let gender = client.fetch_gender_analysis().await.unwrap();
    let hr = &gender.gender_comparisons["heart_rate"];
    assert_eq!(hr.male_mean, Some(82.3));
    assert!(hr.significant());

    let risk = client.fetch_population_risk().await.unwrap();
    assert_eq!(risk.high_risk_demographics[0].demographic, "Geriatric M");
}

#[tokio::test]
async fn missing_fields_deserialize_to_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/demographic/analysis"))
        .and(query_param("analysis_type", "age_group_trends"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "age_group_counts": {"Toddler": 4}
        })))
        .mount(&server)
        .await;

    let client = DashboardClient::new(server.uri());
    let trends = client.fetch_age_group_trends().await.unwrap();
    assert_eq!(trends.age_group_counts["Toddler"], 4);
    assert!(trends.age_group_means.is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/demographic/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = DashboardClient::new(server.uri());
    let err = client.fetch_dashboard().await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)), "got {:?}", err);
}

#[tokio::test]
async fn server_error_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/demographic/dashboard"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = DashboardClient::new(server.uri());
    let err = client.fetch_dashboard().await.unwrap_err();
    assert!(matches!(err, FetchError::Status(s) if s.as_u16() == 500));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Grab a port that is free, then release it before connecting.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = DashboardClient::new(uri);
    let err = client.fetch_dashboard().await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "got {:?}", err);
}
