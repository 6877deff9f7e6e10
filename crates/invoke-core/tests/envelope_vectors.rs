//! Envelope builder vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::Bytes;

use invoke_core::protocol::{InternalInvokeRequest, InvokeRequest, Verb};
use invoke_core::{ErrorCode, InvokeMethodRequest};

use vector_loader::{HttpExtensionVector, RawDataVector};

#[test]
fn http_extension_vectors() {
    let vectors: Vec<HttpExtensionVector> = vector_loader::load("http_extension.json");
    assert!(!vectors.is_empty());

    for v in vectors {
        let req = InvokeMethodRequest::new("vector").with_http_extension(&v.verb, &v.querystring);
        let ext = req
            .message()
            .and_then(|m| m.http_extension.as_ref())
            .expect("extension must be set");

        assert_eq!(Verb::from_name(&v.expect.verb), Some(ext.verb), "vector={}", v.description);
        assert_eq!(ext.querystring, v.expect.querystring, "vector={}", v.description);
    }
}

#[test]
fn raw_data_vectors() {
    let vectors: Vec<RawDataVector> = vector_loader::load("raw_data.json");

    for v in vectors {
        let mut req = InvokeMethodRequest::new("vector");
        if let Some(d) = &v.data {
            req = req.with_raw_data(Bytes::from(d.clone()), &v.content_type);
        }

        let (ct, data) = req.raw_data();
        assert_eq!(ct, v.expect.content_type, "vector={}", v.description);
        assert_eq!(
            data,
            v.expect.data.map(Bytes::from),
            "vector={}",
            v.description
        );
    }
}

#[test]
fn query_string_reencodes_to_same_params() {
    let req = InvokeMethodRequest::new("m").with_http_extension("get", "a=1&b=2");
    let encoded = req.encode_http_query_string();

    let mut parts: Vec<&str> = encoded.split('&').collect();
    parts.sort_unstable();
    assert_eq!(parts, vec!["a=1", "b=2"]);
}

#[test]
fn foreign_envelope_without_message_is_rejected() {
    let err = InvokeMethodRequest::from_internal(InternalInvokeRequest::default())
        .expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::MissingPayload);
    assert_eq!(err.code().as_str(), "MISSING_PAYLOAD");
}

#[test]
fn foreign_envelope_is_wrapped_as_is() {
    let pb = InvokeMethodRequest::new("m")
        .with_actor("cart", "7")
        .with_raw_data(Bytes::from_static(b"{\"n\":1}"), "")
        .into_proto();

    let req = InvokeMethodRequest::from_internal(pb.clone()).expect("must wrap");
    assert_eq!(req.proto(), &pb);
    assert_eq!(req.into_proto(), pb);
}

#[test]
fn envelope_dumps_to_json() {
    let req = InvokeMethodRequest::from_invoke_request(InvokeRequest::new("orders"))
        .with_http_extension("get", "page=2")
        .with_headers([("x-tenant", "acme")]);

    let v = serde_json::to_value(req.proto()).unwrap();
    assert_eq!(v["ver"], "V1");
    assert_eq!(v["message"]["method"], "orders");
    assert_eq!(v["message"]["http_extension"]["verb"], "GET");
    assert_eq!(v["message"]["http_extension"]["querystring"]["page"], "2");
    assert_eq!(v["metadata"]["x-tenant"]["values"][0], "acme");

    let back: InternalInvokeRequest = serde_json::from_value(v).unwrap();
    assert_eq!(&back, req.proto());
}
