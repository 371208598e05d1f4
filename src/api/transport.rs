//! HTTP transports.
//!
//! The client builds plain [`HttpRequest`] values and hands them to a
//! [`Transport`]. In the browser that is `fetch`; during server-side
//! rendering it is reqwest. One attempt per request, no timeout.

use async_trait::async_trait;

use super::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outgoing request, fully resolved (absolute URL, headers, JSON body).
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever the server answered.
///
/// Non-2xx statuses are NOT errors at this level; only failures to get a
/// response at all are.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Transport for the current build target.
pub fn default_transport() -> std::rc::Rc<dyn Transport> {
    #[cfg(target_arch = "wasm32")]
    {
        std::rc::Rc::new(FetchTransport)
    }
    #[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
    {
        std::rc::Rc::new(ReqwestTransport::new())
    }
    #[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
    {
        std::rc::Rc::new(NoTransport)
    }
}

// =============================================================================
// Browser fetch
// =============================================================================

#[cfg(target_arch = "wasm32")]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    use wasm_bindgen::JsCast;

    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ApiError::Transport(message)
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;

        let init = web_sys::RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let req = web_sys::Request::new_with_str_and_init(&request.url, &init).map_err(js_error)?;
        let headers = req.headers();
        for (name, value) in &request.headers {
            headers.set(name, value).map_err(js_error)?;
        }

        let window = web_sys::window()
            .ok_or_else(|| ApiError::Transport("no browser window".to_string()))?;
        let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}

// =============================================================================
// reqwest (server-side rendering)
// =============================================================================

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
#[derive(Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Placeholder for native builds without the `server` feature.
#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
pub struct NoTransport;

#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
#[async_trait(?Send)]
impl Transport for NoTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
        Err(ApiError::Transport(
            "no HTTP transport in this build".to_string(),
        ))
    }
}

// =============================================================================
// Test double
// =============================================================================
