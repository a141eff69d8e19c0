//! Tests for read_body.

use super::*;

/// Expect a readable body to pass through unchanged
#[test]
fn passes_readable_body() {
    let body: Result<String, String> = Ok("[]".to_string());

    assert_eq!(read_body(body), Ok("[]".to_string()));
}

/// Expect a failed read to surface as a transport error rather than an empty body
#[test]
fn unreadable_body_is_transport_error() {
    let body: Result<String, String> = Err("stream aborted".to_string());

    assert_eq!(
        read_body(body),
        Err(ClientError::Transport(
            "Failed to read response body: stream aborted".to_string()
        ))
    );
}
