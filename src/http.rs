//! Minimal HTTP request/response plumbing for the suggest endpoint
//!
//! The hosting framework owns the server loop, routing and authentication;
//! this module only carries what the suggest handler needs: query parameter
//! access on the way in and a JSON body on the way out.

use crate::field::{FieldError, FieldResult};
use bytes::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::{HeaderMap, Method, StatusCode, Uri};
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::collections::HashMap;

/// HTTP request representation
#[derive(Debug)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub headers: HeaderMap,
	query_params: HashMap<String, String>,
}

impl Request {
	/// Create a request builder
	///
	/// # Examples
	///
	/// ```
	/// use tagfield::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/Tags/suggest?term=Tag")
	///     .build()
	///     .unwrap();
	/// assert_eq!(request.path(), "/Tags/suggest");
	/// assert_eq!(request.query_param("term"), Some("Tag".to_string()));
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// Parse query parameters from a URI
	///
	/// Splits on the first `=` only so values containing `=` survive intact.
	fn parse_query_params(uri: &Uri) -> HashMap<String, String> {
		uri.query()
			.map(|query| {
				query
					.split('&')
					.filter_map(|pair| {
						let mut parts = pair.splitn(2, '=');
						Some((
							parts.next()?.to_string(),
							parts.next().unwrap_or("").to_string(),
						))
					})
					.collect()
			})
			.unwrap_or_default()
	}

	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// URL-decoded value of a single query parameter
	pub fn query_param(&self, name: &str) -> Option<String> {
		self.query_params
			.get(name)
			.map(|value| percent_decode_str(value).decode_utf8_lossy().to_string())
	}
}

/// Builder for [`Request`]
#[derive(Debug, Default)]
pub struct RequestBuilder {
	method: Option<Method>,
	uri: Option<String>,
	headers: HeaderMap,
}

impl RequestBuilder {
	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	pub fn build(self) -> FieldResult<Request> {
		let uri: Uri = self
			.uri
			.unwrap_or_else(|| "/".to_string())
			.parse()
			.map_err(|e| FieldError::Validation(format!("Invalid request URI: {}", e)))?;
		let query_params = Request::parse_query_params(&uri);

		Ok(Request {
			method: self.method.unwrap_or(Method::GET),
			uri,
			headers: self.headers,
			query_params,
		})
	}
}

/// HTTP response representation
#[derive(Debug)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new response with the given status code
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Create a response with HTTP 200 OK status
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Create a 200 response carrying a JSON body
	///
	/// Encoding failures propagate; nothing is written on error.
	///
	/// # Examples
	///
	/// ```
	/// use tagfield::Response;
	/// use hyper::header::CONTENT_TYPE;
	/// use serde_json::json;
	///
	/// let response = Response::json(&json!({ "items": [] })).unwrap();
	/// assert_eq!(response.headers[CONTENT_TYPE], "application/json");
	/// assert_eq!(&response.body[..], br#"{"items":[]}"#);
	/// ```
	pub fn json<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
		let body = serde_json::to_vec(value)?;
		let mut response = Self::ok();
		response
			.headers
			.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		response.body = Bytes::from(body);
		Ok(response)
	}
}

/// Join URL segments without doubling slashes
///
/// Empty segments are skipped; the leading slash of the first segment is
/// preserved.
///
/// # Examples
///
/// ```
/// use tagfield::join_links;
///
/// assert_eq!(join_links(["/admin/Tags/", "suggest"]), "/admin/Tags/suggest");
/// assert_eq!(join_links(["/Tags", "", "suggest"]), "/Tags/suggest");
/// ```
pub fn join_links<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
	let mut result = String::new();
	for segment in segments {
		if segment.is_empty() {
			continue;
		}
		if result.is_empty() {
			result.push_str(segment.trim_end_matches('/'));
		} else {
			result.push('/');
			result.push_str(segment.trim_matches('/'));
		}
	}
	result
}
