use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use crate::fixtures::{completion_response, image_results};

pub async fn setup_completion_mock(content: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_response(content)))
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_flaky_completion_mock(failures: u64, content: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {"message": "overloaded", "type": "server_error"}
        })))
        .up_to_n_times(failures)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_response(content)))
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_error_mock(status_code: u16) -> MockServer {
    let mock_server = MockServer::start().await;

    let error_body: Value = json!({
        "error": {"message": "Internal server error", "type": "internal_error"}
    });

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(status_code).set_body_json(error_body))
        .mount(&mock_server)
        .await;

    mock_server
}

pub async fn setup_image_mock(urls: &[&str]) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(image_results(urls)))
        .mount(&mock_server)
        .await;

    mock_server
}
