//! Router harness and simulated ledger server responses.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use ledgerlink_api::{router, AppContext};
use ledgerlink_domain::{Config, LedgerServerConfig};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockBuilder, ResponseTemplate};

pub fn app(ledger_server_url: &str, allow_url_override: bool) -> Router {
    let config = Config {
        ledger_server: LedgerServerConfig {
            url: ledger_server_url.to_string(),
            timeout_secs: 2,
            allow_url_override,
        },
        ..Config::default()
    };
    router(AppContext::shared(config).expect("context should build"))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

pub async fn post(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    send(app, request).await
}

pub async fn get(app: Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(path).body(Body::empty()).expect("request should build");
    send(app, request).await
}

pub fn voucher_xml(remote_id: &str, entries: &[(&str, &str)]) -> String {
    let lines: String = entries
        .iter()
        .map(|(ledger, amount)| {
            format!(
                "<ALLLEDGERENTRIES.LIST><LEDGERNAME>{ledger}</LEDGERNAME>\
                 <AMOUNT>{amount}</AMOUNT></ALLLEDGERENTRIES.LIST>"
            )
        })
        .collect();
    format!(
        "<VOUCHER REMOTEID=\"{remote_id}\" VCHTYPE=\"Payment\">\
         <DATE>20250401</DATE><VOUCHERTYPENAME>Payment</VOUCHERTYPENAME>{lines}</VOUCHER>"
    )
}

pub fn export_of(vouchers: &[String]) -> String {
    format!(
        "<ENVELOPE><BODY><DATA><COLLECTION>{}</COLLECTION></DATA></BODY></ENVELOPE>",
        vouchers.concat()
    )
}

pub fn import_result(created: u32, deleted: u32) -> String {
    format!(
        "<RESPONSE><CREATED>{created}</CREATED><ALTERED>0</ALTERED>\
         <DELETED>{deleted}</DELETED><ERRORS>0</ERRORS></RESPONSE>"
    )
}

pub fn xml(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(body)
}

pub fn list_request() -> MockBuilder {
    Mock::given(method("POST")).and(body_string_contains("<TYPE>Voucher</TYPE>"))
}

pub fn action_request(action: &str, remote_id: &str) -> MockBuilder {
    Mock::given(method("POST"))
        .and(body_string_contains(format!("ACTION=\"{action}\"")))
        .and(body_string_contains(format!("REMOTEID=\"{remote_id}\"")))
}
