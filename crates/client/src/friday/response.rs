//! Upstream response classification.

use friday_core::Error;
use serde_json::Value;

use super::request::ResponseShape;
use super::transport::HttpResponse;

/// Classify an upstream response and select the payload.
///
/// Non-success statuses carry the raw body text, never parsed. A success body
/// must decode as JSON and satisfy `shape`.
pub fn interpret(shape: ResponseShape, response: HttpResponse) -> Result<Value, Error> {
    let status = response.status;

    if !status.is_success() {
        let body = String::from_utf8_lossy(&response.body).into_owned();
        return Err(Error::Upstream { status: status.as_u16(), body });
    }

    let mut value: Value = serde_json::from_slice(&response.body).map_err(|e| {
        tracing::warn!("undecodable response body ({} bytes): {}", response.body.len(), e);
        Error::MalformedResponse
    })?;

    match shape {
        ResponseShape::Any => Ok(value),
        ResponseShape::Field(field) => match value.as_object_mut().and_then(|object| object.remove(field)) {
            Some(inner) if !inner.is_null() => Ok(inner),
            _ => {
                tracing::warn!("response is missing required field `{}`", field);
                Err(Error::MalformedResponse)
            }
        },
    }
}
