//! HTTP transport backed by reqwest.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::Config;
use crate::credentials::{Auth, Credentials};
use crate::error::{ClientError, ClientResult};
use crate::transport::{Method, Transport};

/// Sends API calls over HTTPS.
///
/// GET and DELETE parameters go in the query string, POST and PUT parameters
/// in a JSON body. Requests carry a bearer token when a platform access token
/// is set, otherwise basic auth with the API key.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    credentials: Credentials,
}

impl HttpTransport {
    /// Creates a transport from a validated config.
    pub fn new(config: &Config, credentials: Credentials) -> ClientResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url()?,
            credentials,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Resolves a relative API path against the endpoint.
    pub fn url(&self, path: &str) -> ClientResult<Url> {
        self.endpoint
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::Config(format!("invalid request path {path:?}: {e}")))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        params: Map<String, Value>,
    ) -> ClientResult<Value> {
        let url = self.url(path)?;
        debug!(%method, path, "Sending Swiftype request");

        let mut request = self.client.request(method.into(), url);

        request = match self.credentials.auth() {
            Auth::AccessToken(token) => request.bearer_auth(token),
            Auth::ApiKey(key) => request.basic_auth(key, Some("")),
            Auth::None => request,
        };

        if !params.is_empty() {
            request = if method.uses_query() {
                request.query(&query_pairs(&params))
            } else {
                request.json(&params)
            };
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(%method, path, status = status.as_u16(), "Swiftype response");

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!(%method, path, status = status.as_u16(), "Swiftype request failed");
            return Err(ClientError::from_status(status.as_u16(), body));
        }

        decode_body(&body)
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Decodes a response body; blank bodies decode as `Null`.
pub(crate) fn decode_body(body: &[u8]) -> ClientResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(body)?)
}

/// Flattens parameters into query pairs, using bracket notation for nested
/// values (`filters[genre]=scifi`, `document_types[]=books`). Nulls are dropped.
pub(crate) fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        push_pairs(key.clone(), value, &mut pairs);
    }
    pairs
}

fn push_pairs(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for item in items {
                push_pairs(format!("{key}[]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                push_pairs(format!("{key}[{sub}]"), item, pairs);
            }
        }
    }
}
