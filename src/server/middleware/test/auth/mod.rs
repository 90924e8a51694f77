use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard, Permission},
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

/// Tests bearer token extraction from the authorization header.
///
/// Expected: token for `Bearer`/`bearer` schemes, None otherwise
#[test]
fn extracts_bearer_token() {
    assert_eq!(bearer_token(&headers_with("Bearer abc123")), Some("abc123"));
    assert_eq!(bearer_token(&headers_with("bearer  abc123 ")), Some("abc123"));
    assert_eq!(bearer_token(&headers_with("Basic abc123")), None);
    assert_eq!(bearer_token(&headers_with("Bearer ")), None);
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}
