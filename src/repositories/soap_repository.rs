use std::time::Duration;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, info};
use crate::errors::SoapError;
use crate::models::{Envelope, SoapRequest};

const SOAP_ACTION: HeaderName = HeaderName::from_static("soapaction");

#[derive(Clone)]
pub struct SoapRepository {
    client: reqwest::Client,
    endpoint_url: String,
    dump_request: bool,
}

impl SoapRepository {
    pub fn new(endpoint_url: String, timeout: Duration, dump_request: bool) -> Result<Self, SoapError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SoapError::Transport)?;
        Ok(Self {
            client,
            endpoint_url,
            dump_request,
        })
    }

    /// Wraps `payload` in a SOAP envelope and renders it indented by two spaces.
    pub fn envelope_xml<T: SoapRequest>(payload: T) -> Result<String, SoapError> {
        let envelope = Envelope::new(payload);
        let mut xml = String::new();
        let mut serializer = quick_xml::se::Serializer::new(&mut xml);
        serializer.indent(' ', 2);
        envelope.serialize(serializer).map_err(SoapError::Serialization)?;
        Ok(xml)
    }

    /// Posts `payload` to the endpoint and returns the response body whatever the status.
    pub async fn call<T: SoapRequest>(&self, action: &str, payload: T) -> Result<Vec<u8>, SoapError> {
        let body = Self::envelope_xml(payload)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("text/xml, multipart/related"));
        headers.insert(SOAP_ACTION, HeaderValue::from_str(action)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/xml; charset=utf-8"));

        let request = self.client
            .post(&self.endpoint_url)
            .headers(headers)
            .body(body)
            .build()
            .map_err(SoapError::Transport)?;

        if self.dump_request {
            println!("{:?}", dump_request(&request));
        }
        debug!(url = %request.url(), %action, "Sending SOAP request");

        let response = self.client
            .execute(request)
            .await
            .map_err(SoapError::Transport)?;
        info!(status = %response.status(), "SOAP response received");

        let bytes = response.bytes().await.map_err(SoapError::Io)?;
        Ok(bytes.to_vec())
    }
}

/// HTTP/1.1 wire form of an outgoing request: request line, headers, blank line, body.
///
/// Only headers set on the request itself are listed. Headers reqwest adds while sending,
/// such as `User-Agent` or `Accept-Encoding`, are not in the dump.
pub fn dump_request(request: &reqwest::Request) -> String {
    let url = request.url();
    let mut target = url.path().to_string();
    if let Some(query) = url.query() {
        target.push('?');
        target.push_str(query);
    }

    let mut dump = format!("{} {} HTTP/1.1\r\n", request.method(), target);
    if let Some(host) = url.host_str() {
        match url.port() {
            Some(port) => dump.push_str(&format!("Host: {}:{}\r\n", host, port)),
            None => dump.push_str(&format!("Host: {}\r\n", host)),
        }
    }

    let body = request.body().and_then(|b| b.as_bytes()).unwrap_or_default();
    dump.push_str(&format!("Content-Length: {}\r\n", body.len()));
    for (name, value) in request.headers() {
        dump.push_str(&format!("{}: {}\r\n", name, String::from_utf8_lossy(value.as_bytes())));
    }
    dump.push_str("\r\n");
    dump.push_str(&String::from_utf8_lossy(body));
    dump
}
