//! Expectations on API responses
//!
//! Each helper returns `Error::Assertion` carrying the expected and actual
//! values, which the runner renders as a diff.

use serde_json::Value;

use crate::common::{Error, Result};

use super::client::ApiResponse;
use super::model::ApiErrorBody;

pub fn status(response: &ApiResponse, expected: u16) -> Result<()> {
    if response.status != expected {
        return Err(Error::mismatch(
            format!("HTTP status (body: {})", response.body),
            expected,
            response.status,
        ));
    }
    Ok(())
}

pub fn body_present(response: &ApiResponse) -> Result<()> {
    if response.body.is_null() {
        return Err(Error::assertion("response body was empty or not JSON"));
    }
    Ok(())
}

/// `body.<field>` is a number equal to `expected`
pub fn field_i64(response: &ApiResponse, field: &str, expected: i64) -> Result<()> {
    match response.body.get(field).and_then(Value::as_i64) {
        Some(actual) if actual == expected => Ok(()),
        _ => Err(Error::mismatch(
            format!("body.{}", field),
            expected,
            render(response.body.get(field)),
        )),
    }
}

/// `body.<field>` is a string equal to `expected`
pub fn field_str(response: &ApiResponse, field: &str, expected: &str) -> Result<()> {
    match response.body.get(field).and_then(Value::as_str) {
        Some(actual) if actual == expected => Ok(()),
        _ => Err(Error::mismatch(
            format!("body.{}", field),
            format!("\"{}\"", expected),
            render(response.body.get(field)),
        )),
    }
}

/// Body is `{ type: "error", message: <string> }`
pub fn error_body(response: &ApiResponse) -> Result<ApiErrorBody> {
    let body: ApiErrorBody = serde_json::from_value(response.body.clone()).map_err(|_| {
        Error::mismatch(
            "error body",
            "{ type, message }",
            render(Some(&response.body)),
        )
    })?;

    if body.kind != "error" {
        return Err(Error::mismatch(
            "body.type",
            "\"error\"",
            format!("\"{}\"", body.kind),
        ));
    }
    Ok(body)
}

/// Error body whose message contains `needle`
pub fn error_message_contains(response: &ApiResponse, needle: &str) -> Result<()> {
    let body = error_body(response)?;
    if !body.message.contains(needle) {
        return Err(Error::mismatch(
            "body.message",
            format!("containing \"{}\"", needle),
            format!("\"{}\"", body.message),
        ));
    }
    Ok(())
}

fn render(value: Option<&Value>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "<missing>".to_string(),
    }
}
