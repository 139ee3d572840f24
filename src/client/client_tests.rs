//! Tests for client

use super::*;
use crate::patient::samples::sample_patients;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::JoinHandle;

/// Serve exactly one canned HTTP response on a local port
///
/// Returns the base URL and a handle yielding the raw request text.
fn one_shot_server(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&request);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let lower = line.to_ascii_lowercase();
                        lower
                            .strip_prefix("content-length:")
                            .and_then(|v| v.trim().parse::<usize>().ok())
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&request).to_string()
    });

    (format!("http://{}", addr), handle)
}

fn client_for(base_url: &str) -> CarePlanClient {
    CarePlanClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    })
    .unwrap()
}

#[test]
fn test_extract_detail_string() {
    assert_eq!(
        extract_detail(r#"{"detail": "Patient name is required"}"#),
        Some("Patient name is required".to_string())
    );
}

#[test]
fn test_extract_detail_validation_list() {
    let body = r#"{"detail": [{"loc": ["body", "age"], "msg": "value is not a valid integer"}]}"#;
    assert_eq!(
        extract_detail(body),
        Some("value is not a valid integer".to_string())
    );
}

#[test]
fn test_extract_detail_missing_or_malformed() {
    assert_eq!(extract_detail(r#"{"error": "x"}"#), None);
    assert_eq!(extract_detail(r#"{"detail": 42}"#), None);
    assert_eq!(extract_detail(r#"{"detail": []}"#), None);
    assert_eq!(extract_detail("<html>502</html>"), None);
}

#[test]
fn test_user_messages() {
    let api = ClientError::Api {
        code: 422,
        message: "Invalid age".to_string(),
    };
    assert_eq!(api.user_message(), "Invalid age");
    assert_eq!(
        ClientError::NoResponse("refused".to_string()).user_message(),
        NO_RESPONSE
    );
    assert_eq!(
        ClientError::Unexpected("bad json".to_string()).user_message(),
        UNEXPECTED
    );
}

#[test]
fn test_url_joins_without_double_slash() {
    let client = client_for("http://localhost:8000/");
    assert_eq!(client.base_url(), "http://localhost:8000");
    assert_eq!(
        client.url("/generate-care-plan"),
        "http://localhost:8000/generate-care-plan"
    );
}

#[test]
fn test_unreachable_server_is_no_response() {
    let client = client_for("http://127.0.0.1:1");
    let record = sample_patients().remove(0);

    let result = block_on(client.generate_care_plan(&record)).unwrap();

    match result {
        Err(e) => assert_eq!(e.user_message(), NO_RESPONSE),
        Ok(_) => panic!("Expected failure"),
    }
}

#[test]
fn test_generate_success_decodes_plan() {
    let body = r#"{"patient_name":"John Doe","care_plan_html":"<h1>Plan</h1>","generated_at":"2024-01-15T10:30:00"}"#;
    let (base_url, server) = one_shot_server("200 OK", body);
    let client = client_for(&base_url);
    let record = sample_patients().remove(0);

    let plan = block_on(client.generate_care_plan(&record))
        .unwrap()
        .unwrap();

    assert_eq!(plan.patient_name, "John Doe");
    assert_eq!(plan.care_plan_html, "<h1>Plan</h1>");

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /generate-care-plan"));
    assert!(request.contains(r#""name":"John Doe""#));
}

#[test]
fn test_generate_error_uses_detail() {
    let (base_url, _server) =
        one_shot_server("400 Bad Request", r#"{"detail": "Facility is required"}"#);
    let client = client_for(&base_url);
    let record = sample_patients().remove(0);

    let err = block_on(client.generate_care_plan(&record))
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, ClientError::Api { code: 400, .. }));
    assert_eq!(err.user_message(), "Facility is required");
}

#[test]
fn test_generate_error_without_detail_falls_back() {
    let (base_url, _server) = one_shot_server("500 Internal Server Error", "{}");
    let client = client_for(&base_url);
    let record = sample_patients().remove(0);

    let err = block_on(client.generate_care_plan(&record))
        .unwrap()
        .unwrap_err();

    assert_eq!(err.user_message(), GENERATION_FAILED);
}

#[test]
fn test_generate_undecodable_body_is_unexpected() {
    let (base_url, _server) = one_shot_server("200 OK", r#"{"unexpected": true}"#);
    let client = client_for(&base_url);
    let record = sample_patients().remove(0);

    let err = block_on(client.generate_care_plan(&record))
        .unwrap()
        .unwrap_err();

    assert_eq!(err.user_message(), UNEXPECTED);
}

#[test]
fn test_health_decodes_status() {
    let body = r#"{"status":"healthy","environment":"development","version":"1.0.0"}"#;
    let (base_url, server) = one_shot_server("200 OK", body);
    let client = client_for(&base_url);

    let health = block_on(client.health()).unwrap().unwrap();

    assert_eq!(health.status, "healthy");
    assert!(server.join().unwrap().starts_with("GET /health"));
}
