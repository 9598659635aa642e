//! Assertions for `application/problem+json` error responses.
//!
//! Operates on raw response parts so callers can use it with either
//! `actix_web::test` service responses or plain `HttpResponse`s.

use actix_web::http::header::{HeaderMap, CONTENT_TYPE};
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the backend's problem body, decoupled from backend types.
#[derive(Debug, Deserialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert the stable error contract and return the decoded body.
///
/// Checks the status, the content type, the `code`, that `detail` contains
/// `expected_detail_contains` when given, and that the `x-trace-id` header
/// matches `trace_id` in the body.
pub fn assert_problem_details_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    assert_eq!(status, expected_status, "unexpected HTTP status");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let body_str = std::str::from_utf8(body).expect("problem body should be valid UTF-8");
    let problem: ProblemDetailsLike = serde_json::from_str(body_str)
        .unwrap_or_else(|e| panic!("body is not ProblemDetails ({e}): {body_str}"));

    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(problem.code, expected_code);
    assert!(
        problem.type_.ends_with(expected_code),
        "type URI should end with the code (got {})",
        problem.type_
    );
    if let Some(fragment) = expected_detail_contains {
        assert!(
            problem.detail.contains(fragment),
            "detail {:?} should contain {:?}",
            problem.detail,
            fragment
        );
    }

    let header_trace_id = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present");
    assert_eq!(
        header_trace_id, problem.trace_id,
        "x-trace-id header should match trace_id in body"
    );

    problem
}
