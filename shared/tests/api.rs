use shared::api::{ApiClient, ApiError};
use shared::types::GenerateRequest;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hello_request() -> GenerateRequest {
    GenerateRequest {
        text: "Hello".to_string(),
        lang: "en".to_string(),
    }
}

#[tokio::test]
async fn successful_generation_is_parsed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-audio"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"text": "Hello", "lang": "en"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "audio_url": "/static/audio/tts_1.mp3",
            "remaining_credits": 4,
            "history": [{
                "text_preview": "Hello",
                "lang": "en",
                "timestamp": "2025-11-21 10:00",
                "audio_url": "/static/audio/tts_1.mp3"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let response = client.generate_audio(&hello_request()).await.unwrap();

    assert_eq!(response.audio_url.as_deref(), Some("/static/audio/tts_1.mp3"));
    assert_eq!(response.remaining_credits, Some(4));
    assert_eq!(response.history.map(|history| history.len()), Some(1));
    assert_eq!(response.error, None);
}

#[tokio::test]
async fn http_error_with_body_message_uses_that_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-audio"))
        .respond_with(
            ResponseTemplate::new(402)
                .set_body_json(serde_json::json!({"error": "Insufficient credits"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let error = client.generate_audio(&hello_request()).await.unwrap_err();

    assert!(matches!(error, ApiError::Server(_)));
    assert_eq!(error.to_string(), "Insufficient credits");
}

#[tokio::test]
async fn http_error_without_message_is_generic() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-audio"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let error = client.generate_audio(&hello_request()).await.unwrap_err();

    assert!(matches!(error, ApiError::ServerFailure));
    assert_eq!(error.to_string(), "Server error while generating audio.");
}

#[tokio::test]
async fn ok_body_with_error_field_is_not_an_err() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-audio"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"error": "Language not supported"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let response = client.generate_audio(&hello_request()).await.unwrap();

    assert_eq!(response.error.as_deref(), Some("Language not supported"));
    assert_eq!(response.audio_url, None);
}

#[tokio::test]
async fn non_json_body_is_a_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-audio"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let error = client.generate_audio(&hello_request()).await.unwrap_err();

    assert!(matches!(error, ApiError::InvalidJson));
    assert_eq!(error.to_string(), "Invalid JSON response from server");
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Port 1 is never listening
    let client = ApiClient::new("http://127.0.0.1:1");
    let error = client.generate_audio(&hello_request()).await.unwrap_err();

    assert!(matches!(error, ApiError::Http(_)));
}

#[tokio::test]
async fn fetch_audio_resolves_relative_urls() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/static/audio/tts_1.mp3"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ID3fake-mp3".to_vec()))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let bytes = client.fetch_audio("/static/audio/tts_1.mp3").await.unwrap();

    assert_eq!(&bytes[..], b"ID3fake-mp3");
}

#[tokio::test]
async fn fetch_audio_reports_http_failures() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/static/audio/missing.mp3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let result = client.fetch_audio("/static/audio/missing.mp3").await;

    assert!(matches!(result, Err(ApiError::Http(_))));
}
