//! Inbound adapter: HTTP request parts -> invocation envelope.
//!
//! Mirrors what an HTTP-facing caller sends: the verb and raw query string go
//! into the HTTP extension, the body and its `Content-Type` become the raw
//! payload, and the header set becomes metadata (one value per name).

use axum::http::{header::CONTENT_TYPE, request::Parts, HeaderMap};
use bytes::Bytes;

use invoke_core::error::{InvokeError, Result};
use invoke_core::InvokeMethodRequest;

use crate::config::InboundConfig;

/// Build the envelope for `method` from an inbound HTTP request.
pub fn envelope_from_http(
    method: &str,
    parts: &Parts,
    body: Bytes,
    cfg: &InboundConfig,
) -> Result<InvokeMethodRequest> {
    if body.len() > cfg.max_body_bytes {
        return Err(InvokeError::PayloadTooLarge {
            size: body.len(),
            max: cfg.max_body_bytes,
        });
    }

    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();
    let query = parts.uri.query().unwrap_or("");

    let req = InvokeMethodRequest::new(method)
        .with_http_extension(parts.method.as_str(), query)
        .with_raw_data(body, &content_type)
        .with_headers(header_pairs(&parts.headers, cfg));

    tracing::trace!(method, verb = %parts.method, metadata = req.metadata().len(), "inbound envelope built");
    Ok(req)
}

/// Header pairs in visit order, minus the configured skip list.
///
/// Non UTF-8 values are converted lossily.
fn header_pairs<'a>(
    headers: &'a HeaderMap,
    cfg: &'a InboundConfig,
) -> impl Iterator<Item = (String, String)> + 'a {
    headers
        .iter()
        .filter(move |(name, _)| !cfg.skips(name.as_str()))
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::http::Request;
    use invoke_core::protocol::Verb;

    fn parts(method: &str, uri: &str, headers: &[(&str, &str)]) -> Parts {
        let mut b = Request::builder().method(method).uri(uri);
        for (k, v) in headers {
            b = b.header(*k, *v);
        }
        b.body(()).unwrap().into_parts().0
    }

    #[test]
    fn builds_extension_payload_and_metadata() {
        let p = parts(
            "GET",
            "/v1/invoke/orders?page=2&page=3&sort=asc",
            &[("content-type", "text/plain"), ("x-trace", "t1"), ("host", "node-a")],
        );
        let req = envelope_from_http("orders", &p, Bytes::from_static(b"hi"), &InboundConfig::default())
            .unwrap();

        let m = req.message().unwrap();
        assert_eq!(m.method, "orders");
        let ext = m.http_extension.as_ref().unwrap();
        assert_eq!(ext.verb, Verb::Get);
        assert_eq!(ext.querystring["page"], "2");
        assert_eq!(ext.querystring["sort"], "asc");

        assert_eq!(req.raw_data(), ("text/plain", Some(Bytes::from_static(b"hi"))));
        assert_eq!(req.metadata()["x-trace"].values, vec!["t1"]);
        assert!(!req.metadata().contains_key("host"));
    }

    #[test]
    fn repeated_header_keeps_last_value() {
        let p = parts("POST", "/", &[("accept", "a"), ("accept", "b")]);
        let req = envelope_from_http("m", &p, Bytes::new(), &InboundConfig::default()).unwrap();
        assert_eq!(req.metadata()["accept"].values, vec!["b"]);
        assert_eq!(req.raw_data().0, "application/json");
    }

    #[test]
    fn oversized_body_is_rejected() {
        let cfg = InboundConfig {
            max_body_bytes: 2,
            ..InboundConfig::default()
        };
        let p = parts("POST", "/", &[]);
        let err = envelope_from_http("m", &p, Bytes::from_static(b"abc"), &cfg).unwrap_err();
        assert_eq!(err.code().as_str(), "PAYLOAD_TOO_LARGE");
    }
}
