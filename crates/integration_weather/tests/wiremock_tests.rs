//! Integration tests for the OpenWeatherMap client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! ensuring proper handling of various response scenarios.
#![allow(clippy::expect_used, clippy::unwrap_used)]

use integration_weather::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError};
use secrecy::SecretString;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample OpenWeatherMap response for testing
fn london_response() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
        "base": "stations",
        "main": {
            "temp": 15.0,
            "feels_like": 14.0,
            "temp_min": 13.9,
            "temp_max": 16.1,
            "pressure": 1012,
            "humidity": 60
        },
        "visibility": 10000,
        "wind": {"speed": 3.6, "deg": 250},
        "clouds": {"all": 0},
        "dt": 1_717_000_000,
        "sys": {"country": "GB", "sunrise": 1_716_954_000, "sunset": 1_717_013_000},
        "timezone": 3600,
        "id": 2_643_743,
        "name": "London",
        "cod": 200
    })
}

fn client_for(server: &MockServer) -> OpenWeatherMapClient {
    let config = WeatherConfig {
        base_url: server.uri(),
        timeout_secs: 5,
    };
    OpenWeatherMapClient::new(config, SecretString::from("secret-key".to_string()))
        .expect("client creation should succeed")
}

#[tokio::test]
async fn fetch_success_parses_reading() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "London"))
        .and(query_param("appid", "secret-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_response()))
        .expect(1)
        .mount(&server)
        .await;

    let reading = client_for(&server)
        .current_by_city("London")
        .await
        .expect("should fetch");

    assert_eq!(reading.city, "London");
    assert_eq!(reading.country, "GB");
    assert_eq!(reading.condition, "clear sky");
    assert!((reading.temperature_c - 15.0).abs() < f64::EPSILON);
    assert!((reading.feels_like_c - 14.0).abs() < f64::EPSILON);
    assert_eq!(reading.humidity.value(), 60);
    assert_eq!(reading.pressure_hpa, 1012);
    assert!((reading.wind_speed_ms - 3.6).abs() < f64::EPSILON);
    assert!((reading.visibility_km - 10.0).abs() < f64::EPSILON);
    assert_eq!(reading.observed_at_epoch, 1_717_000_000);
}

#[tokio::test]
async fn resolved_name_may_differ_from_input() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "london"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_response()))
        .mount(&server)
        .await;

    let reading = client_for(&server).current_by_city("london").await.unwrap();
    assert_eq!(reading.city, "London");
}

#[tokio::test]
async fn not_found_carries_provider_message_and_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .current_by_city("Atlantis")
        .await
        .unwrap_err();

    match err {
        WeatherError::Upstream { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "city not found");
        },
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_passes_status_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key. Please see https://openweathermap.org/faq#error401 for more info."
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).current_by_city("Paris").await.unwrap_err();
    assert!(matches!(err, WeatherError::Upstream { status: 401, .. }));
}

#[tokio::test]
async fn error_without_message_uses_generic_text() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server).current_by_city("Paris").await.unwrap_err();
    match err {
        WeatherError::Upstream { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "Unknown error");
        },
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_required_field_is_malformed() {
    let server = MockServer::start().await;

    let mut body = london_response();
    body["main"]
        .as_object_mut()
        .expect("main is an object")
        .remove("temp");

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let err = client_for(&server).current_by_city("London").await.unwrap_err();
    assert!(matches!(err, WeatherError::MalformedResponse(ref m) if m.contains("main.temp")));
}

#[tokio::test]
async fn non_json_success_body_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).current_by_city("London").await.unwrap_err();
    assert!(matches!(err, WeatherError::MalformedResponse(_)));
}

#[tokio::test]
async fn minimal_payload_uses_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "London",
            "sys": {"country": "GB"},
            "weather": [{"description": "clear sky"}],
            "main": {"temp": 15.0, "feels_like": 14.0, "humidity": 60, "pressure": 1012}
        })))
        .mount(&server)
        .await;

    let reading = client_for(&server).current_by_city("London").await.unwrap();
    assert!(reading.wind_speed_ms.abs() < f64::EPSILON);
    assert!(reading.visibility_km.abs() < f64::EPSILON);
    assert_eq!(reading.observed_at_epoch, 0);
}

#[tokio::test]
async fn slow_provider_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(london_response())
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = WeatherConfig {
        base_url: server.uri(),
        timeout_secs: 1,
    };
    let client =
        OpenWeatherMapClient::new(config, SecretString::from("k".to_string())).unwrap();

    let err = client.current_by_city("London").await.unwrap_err();
    assert!(matches!(err, WeatherError::Timeout(1)));
}

#[tokio::test]
async fn unreachable_provider_is_not_an_upstream_status() {
    let config = WeatherConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
    };
    let client =
        OpenWeatherMapClient::new(config, SecretString::from("k".to_string())).unwrap();

    let err = client.current_by_city("London").await.unwrap_err();
    assert!(matches!(
        err,
        WeatherError::ConnectionFailed(_) | WeatherError::RequestFailed(_)
    ));
}

#[tokio::test]
async fn connection_error_does_not_leak_api_key() {
    let config = WeatherConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout_secs: 2,
    };
    let key = SecretString::from("SUPER-SECRET-KEY".to_string());
    let client = OpenWeatherMapClient::new(config, key).unwrap();

    let err = client.current_by_city("London").await.unwrap_err();
    let text = err.to_string();
    assert!(!text.contains("SUPER-SECRET-KEY"), "key leaked: {text}");
    assert!(!text.contains("appid"), "query string leaked: {text}");
}

#[tokio::test]
async fn truncated_body_does_not_leak_api_key() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 2048];
        let _ = socket.read(&mut buf).await;
        // Promise more bytes than are sent, then hang up.
        let head = concat!(
            "HTTP/1.1 200 OK\r\n",
            "content-type: application/json\r\n",
            "content-length: 500\r\n\r\n",
        );
        let _ = socket.write_all(head.as_bytes()).await;
        let _ = socket.write_all(br#"{"name":"#).await;
        let _ = socket.shutdown().await;
    });

    let config = WeatherConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: 5,
    };
    let key = SecretString::from("SUPER-SECRET-KEY".to_string());
    let client = OpenWeatherMapClient::new(config, key).unwrap();

    let err = client.current_by_city("London").await.unwrap_err();
    assert!(
        matches!(err, WeatherError::RequestFailed(_) | WeatherError::ConnectionFailed(_)),
        "unexpected error: {err:?}"
    );
    assert!(!err.to_string().contains("SUPER-SECRET-KEY"));
}
