//! Outbound adapter: invocation envelope -> HTTP request for the app.
//!
//! The target URL is `app.base_url` + `/` + method, with the HTTP extension
//! re-encoded as the query string. Metadata entries that are not valid HTTP
//! header names/values are skipped.

use axum::http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method, Request};
use bytes::Bytes;

use invoke_core::error::{InvokeError, Result};
use invoke_core::protocol::Verb;
use invoke_core::InvokeMethodRequest;

use crate::config::AppConfig;

/// Build the HTTP request delivering `req` to the app.
pub fn http_request_from_envelope(app: &AppConfig, req: &InvokeMethodRequest) -> Result<Request<Bytes>> {
    let msg = req.message().ok_or(InvokeError::MissingPayload)?;

    check_method_path(&msg.method)?;
    let mut url = app.parsed_base_url()?;
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{}", msg.method.trim_start_matches('/')));
    let qs = req.encode_http_query_string();
    url.set_query((!qs.is_empty()).then_some(qs.as_str()));

    let verb = match msg.http_extension.as_ref().map(|e| e.verb) {
        None | Some(Verb::None) => Verb::Post,
        Some(v) => v,
    };
    let method = Method::from_bytes(verb.as_str().as_bytes())
        .map_err(|e| InvokeError::Internal(format!("invalid http method {verb}: {e}")))?;

    let mut builder = Request::builder().method(method).uri(url.as_str());
    for (name, list) in req.metadata() {
        if name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) {
            continue;
        }
        let Ok(header) = HeaderName::from_bytes(name.as_bytes()) else {
            tracing::debug!(header = %name, "metadata key is not a valid header name");
            continue;
        };
        for value in &list.values {
            match HeaderValue::from_bytes(value.as_bytes()) {
                Ok(v) => builder = builder.header(header.clone(), v),
                Err(_) => tracing::debug!(header = %name, "metadata value is not a valid header value"),
            }
        }
    }

    let (content_type, data) = req.raw_data();
    if !content_type.is_empty() {
        builder = builder.header(CONTENT_TYPE, content_type);
    }

    builder
        .body(data.unwrap_or_default())
        .map_err(|e| InvokeError::Internal(format!("build http request failed: {e}")))
}

/// Method paths must stay below `base_url`: no `.` or `..` segments, escaped or not.
///
/// `\` counts as a separator and tabs/newlines are ignored, as the URL parser does.
fn check_method_path(method: &str) -> Result<()> {
    let escapes_base = method.split(['/', '\\']).any(|segment| {
        let segment = segment
            .replace(['\t', '\n', '\r'], "")
            .to_ascii_lowercase()
            .replace("%2e", ".");
        segment == "." || segment == ".."
    });
    if escapes_base {
        return Err(InvokeError::BadRequest(format!(
            "method path must not contain dot segments: {method}"
        )));
    }
    Ok(())
}
