//! API client for the Uplokal backend
//!
//! Every call goes through one request core: build the URL from the
//! resolved base, attach the session cookie jar, send, then normalise the
//! response into an [`ApiPayload`] or an [`ApiError`]. Typed helpers
//! deserialise the JSON payload into the endpoint's wire type.
//!
//! A 401 from any call triggers the injected [`SessionExpiryHandler`]
//! exactly once before the error is returned.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use uplokal_core::session::{IgnoreSessionExpiry, SessionExpiryHandler};
use uplokal_domain::config::ApiConfig;
use uplokal_domain::constants::{DOWNLOAD_FAILED_MESSAGE, GENERIC_ERROR_MESSAGE, OCTET_STREAM};

use super::errors::ApiError;
use super::query::encode_query;
use crate::http::HttpClient;

const APPLICATION_JSON: &str = "application/json";

/// Normalised successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    /// Parsed JSON body; `Null` when the body was empty or not JSON.
    Json(Value),
    /// Raw `application/octet-stream` body.
    Binary(Vec<u8>),
}

impl ApiPayload {
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Binary(_) => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            Self::Json(_) => None,
        }
    }

    /// Deserialise a JSON payload into `T`.
    ///
    /// # Errors
    /// `UnexpectedBinary` for a binary payload, `Decode` on a shape mismatch.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            Self::Json(value) => serde_json::from_value(value)
                .map_err(|e| ApiError::Decode(format!("Failed to parse response: {e}"))),
            Self::Binary(_) => Err(ApiError::UnexpectedBinary),
        }
    }
}

/// `multipart/form-data` body for [`ApiClient::upload`].
///
/// Kept as plain data until send time so it can be inspected and logged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormPart {
    Text { name: String, value: String },
    File { name: String, file_name: String, content: Vec<u8>, mime_type: Option<String> },
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text { name: name.into(), value: value.into() });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content: Vec<u8>,
        mime_type: Option<String>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            content,
            mime_type,
        });
        self
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> Vec<&str> {
        self.parts
            .iter()
            .map(|part| match part {
                FormPart::Text { name, .. } | FormPart::File { name, .. } => name.as_str(),
            })
            .collect()
    }

    fn into_form(self) -> Result<Form, ApiError> {
        self.parts.into_iter().try_fold(Form::new(), |form, part| match part {
            FormPart::Text { name, value } => Ok(form.text(name, value)),
            FormPart::File { name, file_name, content, mime_type } => {
                let mut file = Part::bytes(content).file_name(file_name);
                if let Some(mime) = mime_type {
                    file = file
                        .mime_str(&mime)
                        .map_err(|e| ApiError::Config(format!("Invalid MIME type '{mime}': {e}")))?;
                }
                Ok(form.part(name, file))
            }
        })
    }
}

enum Body {
    Empty,
    Json(Value),
    Multipart(MultipartForm),
}

/// API client bound to one backend and one session policy.
///
/// Cloning is cheap; clones share the HTTP transport and its cookie jar.
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<HttpClient>,
    base_url: Arc<str>,
    timeout: Option<Duration>,
    session: Arc<dyn SessionExpiryHandler>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the base URL cannot be resolved or the
    /// HTTP client cannot be created.
    pub fn new(
        config: &ApiConfig,
        session: Arc<dyn SessionExpiryHandler>,
    ) -> Result<Self, ApiError> {
        let base_url = config.resolve_base_url().map_err(ApiError::from_domain)?;
        let timeout = config.timeout_secs.map(Duration::from_secs);

        let mut http = HttpClient::builder().max_attempts(config.max_attempts);
        if let Some(timeout) = timeout {
            http = http.timeout(timeout);
        }
        if let Some(agent) = &config.user_agent {
            http = http.user_agent(agent.clone());
        }
        let http = http
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?;

        info!(base_url = %base_url, "API client ready");

        Ok(Self { http: Arc::new(http), base_url: base_url.into(), timeout, session })
    }

    /// Per-request timeout, if the config set one.
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Same transport and cookies, but 401 responses no longer trigger the
    /// session policy. For background calls and session probes.
    pub fn without_session_redirect(&self) -> Self {
        self.with_session_handler(Arc::new(IgnoreSessionExpiry))
    }

    /// Same transport and cookies with a different session policy.
    pub fn with_session_handler(&self, session: Arc<dyn SessionExpiryHandler>) -> Self {
        Self { session, ..self.clone() }
    }

    /// GET with query parameters; `None` fields are left out of the query.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn get<T, P>(&self, endpoint: &str, params: &P) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.get_payload(endpoint, params).await?.decode()
    }

    /// GET returning the normalised payload, JSON or binary.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn get_payload<P>(&self, endpoint: &str, params: &P) -> Result<ApiPayload, ApiError>
    where
        P: Serialize + ?Sized,
    {
        let query = encode_query(params)?;
        self.execute(Method::GET, endpoint, &query, Body::Empty).await
    }

    /// POST a JSON body.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::POST, endpoint, &[], json_body(body)?).await?.decode()
    }

    /// POST with the empty object `{}` as body.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.post(endpoint, &empty_object()).await
    }

    /// PUT a JSON body.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn put<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::PUT, endpoint, &[], json_body(body)?).await?.decode()
    }

    /// PATCH a JSON body.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn patch<B, T>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(Method::PATCH, endpoint, &[], json_body(body)?).await?.decode()
    }

    /// PATCH with the empty object `{}` as body.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn patch_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.patch(endpoint, &empty_object()).await
    }

    /// # Errors
    /// See [`ApiError`].
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.execute(Method::DELETE, endpoint, &[], Body::Empty).await?.decode()
    }

    /// POST a `multipart/form-data` body.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn upload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: MultipartForm,
    ) -> Result<T, ApiError> {
        self.execute(Method::POST, endpoint, &[], Body::Multipart(form)).await?.decode()
    }

    /// Fetch an absolute URL (e.g. a signed download link) with the session
    /// cookies and return its raw body.
    ///
    /// Bypasses the response normaliser: any non-2xx status is a
    /// `"Download failed"` error and never triggers the session policy.
    ///
    /// # Errors
    /// `ApiError::Status` on a non-2xx response, transport errors otherwise.
    #[instrument(skip(self))]
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let request = self.http.request(Method::GET, url);
        let response = self.send_with_timeout(request).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "download failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: DOWNLOAD_FAILED_MESSAGE.to_string(),
                data: Value::Null,
            });
        }

        let bytes = response.bytes().await.map_err(read_error)?;
        debug!(len = bytes.len(), "download complete");
        Ok(bytes.to_vec())
    }

    #[instrument(skip(self, query, body))]
    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(String, String)],
        body: Body,
    ) -> Result<ApiPayload, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(url = %url, "API request");

        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }

        request = match body {
            Body::Empty => request.header(ACCEPT, APPLICATION_JSON),
            Body::Json(value) => request.header(ACCEPT, APPLICATION_JSON).json(&value),
            Body::Multipart(form) => request.multipart(form.into_form()?),
        };

        let response = self.send_with_timeout(request).await?;
        self.normalise(response).await
    }

    async fn send_with_timeout(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let Some(limit) = self.timeout else {
            return self.http.send(request).await.map_err(ApiError::from_domain);
        };
        match tokio::time::timeout(limit, self.http.send(request)).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(err)) => Err(ApiError::from_domain(err)),
            Err(_) => Err(ApiError::Timeout(limit)),
        }
    }

    async fn normalise(&self, response: Response) -> Result<ApiPayload, ApiError> {
        let status = response.status();

        if is_octet_stream(response.headers()) {
            let bytes = response.bytes().await.map_err(read_error)?;
            return Ok(ApiPayload::Binary(bytes.to_vec()));
        }

        let bytes = response.bytes().await.map_err(read_error)?;
        let data: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        if status.is_success() {
            return Ok(ApiPayload::Json(data));
        }

        let message = error_message(&data);
        if status == StatusCode::UNAUTHORIZED {
            warn!(%status, message = %message, "session rejected by backend");
            self.session.session_expired();
        } else {
            warn!(%status, message = %message, "API request failed");
        }

        Err(ApiError::Status { status: status.as_u16(), message, data })
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiConfig>,
    session: Option<Arc<dyn SessionExpiryHandler>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the policy run when the backend answers 401
    pub fn session_handler(mut self, session: Arc<dyn SessionExpiryHandler>) -> Self {
        self.session = Some(session);
        self
    }

    /// Build the API client
    ///
    /// Without a session handler, 401 responses are only reported.
    ///
    /// # Errors
    ///
    /// Returns error if client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let session = self.session.unwrap_or_else(|| Arc::new(IgnoreSessionExpiry));
        ApiClient::new(&config, session)
    }
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<Body, ApiError> {
    serde_json::to_value(body)
        .map(Body::Json)
        .map_err(|e| ApiError::Config(format!("Failed to serialize body: {e}")))
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

fn is_octet_stream(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains(OCTET_STREAM))
}

fn read_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(format!("Failed to read response body: {err}"))
}

/// Human message for a failed call: the server's `detail` when it is
/// present and non-empty, the generic message otherwise.
fn error_message(data: &Value) -> String {
    match data.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        None | Some(Value::Null | Value::Bool(false) | Value::String(_)) => {
            GENERIC_ERROR_MESSAGE.to_string()
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => GENERIC_ERROR_MESSAGE.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[derive(Default)]
    struct CountingHandler(AtomicUsize);

    impl SessionExpiryHandler for CountingHandler {
        fn session_expired(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::builder().config(ApiConfig::with_base_url(server.uri())).build().unwrap()
    }

    #[test]
    fn detail_extraction() {
        assert_eq!(error_message(&json!({ "detail": "Email already registered" })), "Email already registered");
        assert_eq!(error_message(&json!({ "detail": "" })), GENERIC_ERROR_MESSAGE);
        assert_eq!(error_message(&json!({ "error": "x" })), GENERIC_ERROR_MESSAGE);
        assert_eq!(error_message(&Value::Null), GENERIC_ERROR_MESSAGE);
        assert_eq!(
            error_message(&json!({ "detail": [{ "msg": "field required" }] })),
            r#"[{"msg":"field required"}]"#
        );
    }

    #[test]
    fn multipart_form_keeps_field_order() {
        let form = MultipartForm::new()
            .file("file", "npwp.pdf", vec![1, 2, 3], Some("application/pdf".into()))
            .text("category", "legal")
            .text("description", "");
        assert_eq!(form.field_names(), vec!["file", "category", "description"]);
    }

    #[test]
    fn invalid_mime_is_config_error() {
        let form = MultipartForm::new().file("file", "a.bin", vec![], Some("not a mime".into()));
        assert!(matches!(form.into_form(), Err(ApiError::Config(_))));
    }

    #[tokio::test]
    async fn get_returns_body_without_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rfq"))
            .and(query_param("limit", "5"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rfqs": [], "total": 0 })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let value: Value = client.get("/rfq", &json!({ "limit": 5, "category": null })).await.unwrap();

        assert_eq!(value, json!({ "rfqs": [], "total": 0 }));
    }

    #[tokio::test]
    async fn non_json_success_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let value: Value = client.delete("/documents/abc").await.unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn post_empty_sends_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/logout"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let value: Value = client.post_empty("/auth/logout").await.unwrap();
        assert_eq!(value["message"], "ok");
    }

    #[tokio::test]
    async fn error_status_carries_detail_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(json!({ "detail": "Business profile already exists" })),
            )
            .mount(&server)
            .await;

        let handler = Arc::new(CountingHandler::default());
        let client = ApiClient::new(&ApiConfig::with_base_url(server.uri()), handler.clone()).unwrap();
        let err = client.post::<_, Value>("/business", &json!({ "name": "x" })).await.unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "Business profile already exists");
        assert_eq!(err.data(), Some(&json!({ "detail": "Business profile already exists" })));
        assert_eq!(handler.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unauthorized_fires_handler_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "detail": "Not authenticated" })))
            .mount(&server)
            .await;

        let handler = Arc::new(CountingHandler::default());
        let client = ApiClient::new(&ApiConfig::with_base_url(server.uri()), handler.clone()).unwrap();
        let err = client.get::<Value, _>("/auth/me", &()).await.unwrap_err();

        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Not authenticated");
        assert_eq!(handler.0.load(Ordering::SeqCst), 1);

        client.without_session_redirect().get::<Value, _>("/auth/me", &()).await.unwrap_err();
        assert_eq!(handler.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn octet_stream_is_binary() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/octet-stream")
                    .set_body_bytes(b"{not json".to_vec()),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let payload = client.get_payload("/documents/abc/raw", &()).await.unwrap();
        assert_eq!(payload, ApiPayload::Binary(b"{not json".to_vec()));

        let typed = client.get::<Value, _>("/documents/abc/raw", &()).await;
        assert!(matches!(typed, Err(ApiError::UnexpectedBinary)));
    }

    #[tokio::test]
    async fn slow_backend_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let config = ApiConfig { timeout_secs: Some(1), ..ApiConfig::with_base_url(server.uri()) };
        let client = ApiClient::builder().config(config).build().unwrap();
        let err = client.get::<Value, _>("/slow", &()).await.unwrap_err();

        assert_eq!(err.category(), crate::api::ApiErrorCategory::Network);
    }

    #[tokio::test]
    async fn requests_are_unbounded_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "ok": true }))
                    .set_delay(Duration::from_millis(1500)),
            )
            .mount(&server)
            .await;

        let client = ApiClient::builder().config(ApiConfig::with_base_url(server.uri())).build().unwrap();
        assert_eq!(client.timeout(), None);

        let value: Value = client.get("/slow", &()).await.unwrap();
        assert_eq!(value, json!({ "ok": true }));
    }
}
