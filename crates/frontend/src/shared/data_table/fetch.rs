//! Remote fetch adapter.
//!
//! [`Transport`] is the seam to the REST API. [`HttpClient`] implements it on
//! top of `gloo-net`; tests substitute an in-memory transport. The free
//! functions [`fetch_page`] and [`send`] normalize the `CommonResult`
//! envelope into `Result<_, FetchError>`.

use crate::shared::api_utils::api_url;
use crate::shared::config::{use_config, ApiConfig};
use crate::system::session::SessionContext;
use contracts::shared::envelope::{CommonResult, TableResponse};
use contracts::shared::query::QueryParams;
use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Parses a verb name; anything unrecognized falls back to `GET`.
    pub fn parse(verb: &str) -> Self {
        match verb.trim().to_ascii_uppercase().as_str() {
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            _ => Self::Get,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// POST and PUT carry parameters in a JSON body, GET and DELETE in the URL.
    pub fn sends_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    Query(QueryParams),
    Json(Value),
}

impl Payload {
    /// Places list parameters where `method` expects them.
    pub fn for_params(method: HttpMethod, params: &QueryParams) -> Self {
        if method.sends_body() {
            Payload::Json(serde_json::to_value(params).unwrap_or(Value::Null))
        } else {
            Payload::Query(params.clone())
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request timed out after {0} ms, please try again later")]
    Timeout(u32),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("{message}")]
    Application { code: Option<i32>, message: String },
    #[error("Not signed in or the session has expired")]
    Unauthorized,
}

/// User-facing text for an HTTP status a list query cannot use.
pub fn check_status(status: u16) -> &'static str {
    match status {
        200..=299 => "The server returned no page data",
        401 => "Not signed in or the session has expired",
        403 => "Access denied",
        404 => "The requested resource does not exist",
        405 => "Request method not allowed",
        408 => "Request timed out",
        500 => "Internal server error",
        502 => "Bad gateway",
        503 => "Service unavailable",
        504 => "Gateway timeout",
        _ => "Bad request",
    }
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Payload,
    ) -> Result<RawResponse, FetchError>;
}

fn check_response(response: &RawResponse) -> Result<(), FetchError> {
    match response.status {
        200..=299 => Ok(()),
        401 => Err(FetchError::Unauthorized),
        status => Err(FetchError::Status {
            status,
            message: check_status(status).to_string(),
        }),
    }
}

fn application_error<T>(envelope: &CommonResult<T>, fallback: &str) -> FetchError {
    let message = match envelope.message() {
        "" => fallback.to_string(),
        msg => msg.to_string(),
    };
    FetchError::Application {
        code: envelope.code,
        message,
    }
}

/// Requests one page of a list endpoint.
///
/// Succeeds only for HTTP 200 with an envelope that carries `data` and is not
/// flagged `success: false`.
pub async fn fetch_page<T, C>(
    client: &C,
    method: HttpMethod,
    path: &str,
    params: &QueryParams,
) -> Result<TableResponse<T>, FetchError>
where
    T: DeserializeOwned,
    C: Transport,
{
    log::debug!("{} {} {:?}", method.as_str(), path, params);
    let response = client
        .request(method, path, Payload::for_params(method, params))
        .await?;
    check_response(&response)?;
    if response.status != 200 {
        return Err(FetchError::Status {
            status: response.status,
            message: check_status(response.status).to_string(),
        });
    }
    let envelope: TableResponse<T> =
        serde_json::from_value(response.body).map_err(|e| FetchError::Decode(e.to_string()))?;
    if envelope.success == Some(false) || envelope.data.is_none() {
        return Err(application_error(&envelope, "No data returned"));
    }
    Ok(envelope)
}

/// Sends a create/update/delete style request and checks the envelope.
pub async fn send<T, C>(
    client: &C,
    method: HttpMethod,
    path: &str,
    payload: Payload,
) -> Result<CommonResult<T>, FetchError>
where
    T: DeserializeOwned,
    C: Transport,
{
    let response = client.request(method, path, payload).await?;
    check_response(&response)?;
    let envelope: CommonResult<T> =
        serde_json::from_value(response.body).map_err(|e| FetchError::Decode(e.to_string()))?;
    if !envelope.is_ok() {
        return Err(application_error(&envelope, "Operation failed"));
    }
    Ok(envelope)
}

/// `gloo-net` transport used by the running console.
#[derive(Clone)]
pub struct HttpClient {
    base_path: String,
    timeout_ms: u32,
    session: Option<SessionContext>,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_path: config.base_path.clone(),
            timeout_ms: config.timeout_ms,
            session: None,
        }
    }

    pub fn with_session(mut self, session: SessionContext) -> Self {
        self.session = Some(session);
        self
    }

    /// Client built from the configuration and session in context.
    pub fn from_context() -> Self {
        let client = Self::new(&use_config().api);
        match use_context::<SessionContext>() {
            Some(session) => client.with_session(session),
            None => client,
        }
    }

    fn url(&self, path: &str, query: Option<&QueryParams>) -> Result<String, FetchError> {
        let url = api_url(&self.base_path, path);
        let pairs: BTreeMap<String, String> = match query {
            Some(params) => params.to_pairs().into_iter().collect(),
            None => BTreeMap::new(),
        };
        if pairs.is_empty() {
            return Ok(url);
        }
        let qs = serde_qs::to_string(&pairs).map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(format!("{}?{}", url, qs))
    }

    fn builder(&self, method: HttpMethod, url: &str) -> RequestBuilder {
        let builder = match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
        };
        match self.session.and_then(|s| s.token()) {
            Some(token) => builder.header("Authorization", &token),
            None => builder,
        }
    }

    async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Payload,
    ) -> Result<RawResponse, FetchError> {
        let request = match payload {
            Payload::Empty => self
                .builder(method, &self.url(path, None)?)
                .build()
                .map_err(|e| FetchError::Network(e.to_string()))?,
            Payload::Query(params) => self
                .builder(method, &self.url(path, Some(&params))?)
                .build()
                .map_err(|e| FetchError::Network(e.to_string()))?,
            Payload::Json(body) => self
                .builder(method, &self.url(path, None)?)
                .json(&body)
                .map_err(|e| FetchError::Network(e.to_string()))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Ok(RawResponse { status, body })
    }
}

impl Transport for HttpClient {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Payload,
    ) -> Result<RawResponse, FetchError> {
        let call = Box::pin(self.dispatch(method, path, payload));
        let timer = Box::pin(TimeoutFuture::new(self.timeout_ms));
        let result = match select(call, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                log::error!("{} {} timed out", method.as_str(), path);
                Err(FetchError::Timeout(self.timeout_ms))
            }
        };
        if let (Ok(RawResponse { status: 401, .. }), Some(session)) = (&result, self.session) {
            session.expire();
        }
        result
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Transport that records requests and replays canned responses.
    #[derive(Default)]
    pub struct MockTransport {
        pub requests: RefCell<Vec<(HttpMethod, String, Payload)>>,
        pub responses: RefCell<VecDeque<Result<RawResponse, FetchError>>>,
    }

    impl MockTransport {
        pub fn respond(self, status: u16, body: Value) -> Self {
            self.responses
                .borrow_mut()
                .push_back(Ok(RawResponse { status, body }));
            self
        }

        pub fn fail(self, error: FetchError) -> Self {
            self.responses.borrow_mut().push_back(Err(error));
            self
        }

        pub fn last_payload(&self) -> Option<Payload> {
            self.requests.borrow().last().map(|(_, _, p)| p.clone())
        }
    }

    impl Transport for MockTransport {
        async fn request(
            &self,
            method: HttpMethod,
            path: &str,
            payload: Payload,
        ) -> Result<RawResponse, FetchError> {
            self.requests
                .borrow_mut()
                .push((method, path.to_string(), payload));
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Network("no canned response".into())))
        }
    }

    fn page_body(records: Vec<i32>, total: u64) -> Value {
        serde_json::json!({
            "code": 200,
            "msg": "success",
            "success": true,
            "data": { "records": records, "total": total }
        })
    }

    #[test]
    fn test_unknown_verb_defaults_to_get() {
        assert_eq!(HttpMethod::parse("post"), HttpMethod::Post);
        assert_eq!(HttpMethod::parse("PATCH"), HttpMethod::Get);
        assert_eq!(HttpMethod::parse(""), HttpMethod::Get);
    }

    #[test]
    fn test_params_placement() {
        let params = QueryParams::new().with("current", 1);
        assert!(matches!(
            Payload::for_params(HttpMethod::Get, &params),
            Payload::Query(_)
        ));
        assert!(matches!(
            Payload::for_params(HttpMethod::Delete, &params),
            Payload::Query(_)
        ));
        assert_eq!(
            Payload::for_params(HttpMethod::Post, &params),
            Payload::Json(serde_json::json!({ "current": 1 }))
        );
    }

    #[test]
    fn test_fetch_page_success() {
        let transport = MockTransport::default().respond(200, page_body(vec![1, 2], 2));
        let params = QueryParams::new().with("current", 1).with("size", 10);
        let res: TableResponse<i32> =
            block_on(fetch_page(&transport, HttpMethod::Get, "/x/page", &params)).unwrap();
        assert_eq!(res.data.unwrap().records, vec![1, 2]);
        let requests = transport.requests.borrow();
        assert_eq!(requests[0].0, HttpMethod::Get);
        assert_eq!(requests[0].1, "/x/page");
    }

    #[test]
    fn test_fetch_page_application_failure_keeps_server_message() {
        let transport = MockTransport::default().respond(
            200,
            serde_json::json!({ "code": 500, "msg": "db down", "success": false, "data": null }),
        );
        let err = block_on(fetch_page::<i32, _>(
            &transport,
            HttpMethod::Get,
            "/x/page",
            &QueryParams::new(),
        ))
        .unwrap_err();
        assert_eq!(
            err,
            FetchError::Application {
                code: Some(500),
                message: "db down".into()
            }
        );
        assert_eq!(err.to_string(), "db down");
    }

    #[test]
    fn test_fetch_page_http_errors() {
        let transport = MockTransport::default()
            .respond(401, Value::Null)
            .respond(503, Value::Null);
        let unauthorized =
            block_on(fetch_page::<i32, _>(&transport, HttpMethod::Get, "/x", &QueryParams::new()));
        assert_eq!(unauthorized.unwrap_err(), FetchError::Unauthorized);
        let unavailable =
            block_on(fetch_page::<i32, _>(&transport, HttpMethod::Get, "/x", &QueryParams::new()));
        assert_eq!(unavailable.unwrap_err().to_string(), "Service unavailable");
    }

    #[test]
    fn test_fetch_page_non_200_success_status() {
        let transport = MockTransport::default().respond(204, Value::Null);
        let err = block_on(fetch_page::<i32, _>(&transport, HttpMethod::Get, "/x", &QueryParams::new()))
            .unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                status: 204,
                message: "The server returned no page data".to_string(),
            }
        );
        assert_eq!(check_status(400), "Bad request");
    }

    #[test]
    fn test_send_checks_envelope() {
        let transport = MockTransport::default()
            .respond(200, serde_json::json!({ "code": 200, "success": true, "data": true }))
            .respond(200, serde_json::json!({ "code": 400, "success": false, "msg": "duplicate code" }));
        let ok: CommonResult<bool> =
            block_on(send(&transport, HttpMethod::Post, "/x/add", Payload::Json(Value::Null))).unwrap();
        assert_eq!(ok.data, Some(true));
        let err = block_on(send::<bool, _>(
            &transport,
            HttpMethod::Put,
            "/x/update",
            Payload::Json(Value::Null),
        ))
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate code");
    }
}
