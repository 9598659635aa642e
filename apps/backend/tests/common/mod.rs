#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{CONTENT_TYPE, LOCATION};
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::{
    assert_problem_details_from_parts, ProblemDetailsLike,
};

pub mod proptest_prelude;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert the problem+json contract on a test response and return the body.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;
    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        expected_status,
        expected_code,
        expected_detail_contains,
    )
}

/// Assert a 200 HTML page and return its body.
pub async fn read_html(resp: ServiceResponse<BoxBody>) -> String {
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("text/html"),
        "expected HTML, got {content_type}"
    );
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

/// Assert a 302 and return its `Location`.
pub fn redirect_location(resp: &ServiceResponse<BoxBody>) -> String {
    assert_eq!(resp.status(), StatusCode::FOUND);
    resp.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("Location header")
        .to_string()
}
