//! Blocking HTTP transport built on reqwest.
//!
//! The reqwest client is built once and reused for every request, so its
//! connection pool is shared by all calls made through the same transport.

use crate::executor::config::ExecutionConfig;
use crate::executor::error::RequestError;
use crate::executor::Transport;
use crate::models::request::{HttpMethod, HttpRequest};
use crate::models::response::HttpResponse;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Instant;

/// Transport that executes requests with `reqwest::blocking`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Builds a transport from execution settings.
    ///
    /// # Returns
    ///
    /// `Ok(ReqwestTransport)`, or `Err(RequestError::BuildError)` if the
    /// underlying client could not be constructed (e.g. no TLS backend).
    pub fn new(config: &ExecutionConfig) -> Result<Self, RequestError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout_duration())
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(!config.validate_ssl)
            .build()
            .map_err(|e| RequestError::BuildError(e.to_string()))?;

        Ok(Self { client })
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::GET => reqwest::Method::GET,
        HttpMethod::POST => reqwest::Method::POST,
        HttpMethod::PUT => reqwest::Method::PUT,
        HttpMethod::DELETE => reqwest::Method::DELETE,
    }
}

fn to_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, RequestError> {
    let mut header_map = HeaderMap::new();

    for (name, value) in headers {
        let header_name = HeaderName::from_str(name).map_err(|e| {
            RequestError::ProtocolError(format!("Invalid header name ({}): {}", name, e))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            RequestError::ProtocolError(format!("Invalid header value for {}: {}", name, e))
        })?;
        header_map.insert(header_name, header_value);
    }

    Ok(header_map)
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, RequestError> {
        let start_time = Instant::now();

        let mut req_builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url)
            .headers(to_header_map(&request.headers)?);

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let response = req_builder.send().map_err(RequestError::from)?;

        let status_code = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();

        let mut response_headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                response_headers.insert(name.as_str().to_string(), value_str.to_string());
            }
        }

        let body = response
            .bytes()
            .map_err(|e| RequestError::NetworkError(e.to_string()))?
            .to_vec();

        Ok(HttpResponse {
            status_code,
            status_text,
            headers: response_headers,
            body,
            duration: start_time.elapsed(),
        })
    }
}
