// Shared test helpers for standing up a fake NumbersAPI.
//
// Each integration test file pulls this in with `mod helpers;`.

use httptest::responders::{status_code, Responder};
use httptest::Server;
use serde_json::{json, Value};

use numbersapi::{Config, NumbersClient};

/// Sidecar header name as the real service spells it.
#[allow(dead_code)] // Used by other test files
pub const SIDECAR: &str = "X-Numbers-API-Number";

/// Builds a NumbersAPI-style JSON body.
#[allow(dead_code)] // Used by other test files
pub fn fact_body(text: &str, number: Value, found: bool, category: &str) -> String {
    json!({
        "text": text,
        "number": number,
        "found": found,
        "type": category,
    })
    .to_string()
}

/// A 200 response carrying the given sidecar header and body.
#[allow(dead_code)] // Used by other test files
pub fn fact_response(sidecar: &str, body: String) -> impl Responder {
    status_code(200)
        .insert_header(SIDECAR, sidecar.to_string())
        .insert_header("Content-Type", "application/json; charset=utf-8")
        .body(body)
}

/// Base URL of the fake service.
#[allow(dead_code)] // Used by other test files
pub fn base_url(server: &Server) -> String {
    server.url_str("/")
}

/// A client pointed at the fake service.
#[allow(dead_code)] // Used by other test files
pub fn client_for(server: &Server) -> NumbersClient {
    let config = Config {
        base_url: base_url(server),
        timeout_seconds: 5,
        ..Default::default()
    };
    NumbersClient::new(&config).expect("Failed to build client for test server")
}
