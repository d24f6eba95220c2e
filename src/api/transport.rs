use std::error::Error;
use std::fmt;

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::error::AdminApiError;
use crate::api::{ClientConfig, Credentials};

/// A single GraphQL operation ready to send.
#[derive(Debug, Clone)]
pub struct GraphQlRequest {
    /// Field name of the operation, used for logging and result extraction.
    pub operation: &'static str,
    /// GraphQL document text.
    pub document: &'static str,
    /// Operation variables.
    pub variables: Value,
}

/// One entry of a GraphQL response `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlErrorDetail {
    /// Service error code, present when the error is a typed business error.
    #[serde(default)]
    pub error_type: Option<String>,
    /// Human readable message.
    #[serde(default)]
    pub message: String,
}

impl GraphQlErrorDetail {
    /// Code used for error mapping: `errorType` when present, otherwise the
    /// message.
    pub fn code(&self) -> &str {
        self.error_type.as_deref().unwrap_or(&self.message)
    }
}

/// Wire response of a query or mutation. `data` may be absent independently
/// of whether `errors` is populated.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse {
    /// Response data, keyed by operation field name.
    #[serde(default)]
    pub data: Option<Value>,
    /// GraphQL errors returned alongside, or instead of, data.
    #[serde(default)]
    pub errors: Vec<GraphQlErrorDetail>,
}

/// Failure raised by the transport before a well-formed GraphQL response
/// body was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Network layer failure - connect, timeout, DNS, TLS
    Network {
        /// Underlying failure description
        message: String,
    },
    /// The server rejected the request with GraphQL errors outside a
    /// normal response
    GraphQl {
        /// The rejected request's error list
        errors: Vec<GraphQlErrorDetail>,
    },
    /// The failure carries a service error code directly
    ErrorType {
        /// Service error code
        error_type: String,
        /// Human readable message
        message: String,
    },
    /// Anything else
    Other {
        /// Underlying failure description
        message: String,
    },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransportError::Network { message } => {
                write!(f, "network failure: {}", message)
            }
            TransportError::GraphQl { errors } => match errors.first() {
                Some(detail) => write!(f, "GraphQL failure: {}", detail.code()),
                None => write!(f, "GraphQL failure"),
            },
            TransportError::ErrorType { error_type, .. } => {
                write!(f, "service failure: {}", error_type)
            }
            TransportError::Other { message } => {
                write!(f, "transport failure: {}", message)
            }
        }
    }
}

impl Error for TransportError {}

impl TransportError {
    fn from_reqwest(error: reqwest::Error) -> TransportError {
        if error.is_connect() || error.is_timeout() || error.is_request() {
            TransportError::Network {
                message: error.to_string(),
            }
        } else {
            TransportError::Other {
                message: error.to_string(),
            }
        }
    }
}

/// GraphQL transport collaborator.
///
/// One implementation over `reqwest` is provided; tests and deployments
/// needing request signing inject their own. Implementations must not cache
/// responses: queries always reach the network and mutations never touch a
/// local store.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// Execute a query operation.
    async fn query(&self, request: GraphQlRequest) -> Result<GraphQlResponse, TransportError>;

    /// Execute a mutation operation.
    async fn mutate(&self, request: GraphQlRequest) -> Result<GraphQlResponse, TransportError>;
}

/// Default transport posting GraphQL documents over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGraphQlTransport {
    client: reqwest::Client,
    url: url::Url,
}

impl HttpGraphQlTransport {
    /// Creates a transport for the configured endpoint.
    ///
    /// Only API key credentials are supported here. IAM credentials require
    /// a transport that signs requests; supply one via
    /// [`crate::EntitlementsAdmin::with_transport`].
    pub fn new(
        config: &ClientConfig,
        credentials: &Credentials,
    ) -> Result<HttpGraphQlTransport, AdminApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        match credentials {
            Credentials::ApiKey(key) => {
                let value = HeaderValue::from_str(key).map_err(|_| {
                    AdminApiError::Configuration("api key is not a valid header value".to_string())
                })?;
                headers.insert("x-api-key", value);
            }
            Credentials::Iam(_) => {
                return Err(AdminApiError::Configuration(
                    "IAM credentials require a request-signing transport".to_string(),
                ));
            }
        }
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AdminApiError::Configuration(e.to_string()))?;
        Ok(HttpGraphQlTransport {
            client,
            url: config.api_url.clone(),
        })
    }

    async fn execute(&self, request: GraphQlRequest) -> Result<GraphQlResponse, TransportError> {
        debug!("executing GraphQL operation {}", request.operation);
        let body = serde_json::json!({
            "query": request.document,
            "variables": request.variables,
        });
        let response = self
            .client
            .post(self.url.clone())
            .json(&body)
            .send()
            .await
            .map_err(TransportError::from_reqwest)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(TransportError::from_reqwest)?;
        if !status.is_success() {
            // Error responses may still carry a GraphQL errors array.
            if let Ok(parsed) = serde_json::from_str::<GraphQlResponse>(&text) {
                if !parsed.errors.is_empty() {
                    return Err(TransportError::GraphQl {
                        errors: parsed.errors,
                    });
                }
            }
            return Err(TransportError::Other {
                message: format!("HTTP status {}: {}", status, truncate(&text)),
            });
        }
        serde_json::from_str(&text).map_err(|e| TransportError::Other {
            message: format!("undecodable response body: {}", e),
        })
    }
}

#[async_trait]
impl GraphQlTransport for HttpGraphQlTransport {
    async fn query(&self, request: GraphQlRequest) -> Result<GraphQlResponse, TransportError> {
        self.execute(request).await
    }

    async fn mutate(&self, request: GraphQlRequest) -> Result<GraphQlResponse, TransportError> {
        self.execute(request).await
    }
}

fn truncate(body: &str) -> String {
    const MAX_LEN: usize = 4096;
    if body.len() <= MAX_LEN {
        return body.to_string();
    }
    // Cut must land on a char boundary or multibyte bodies would panic.
    let mut cut = MAX_LEN;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    let mut body = body[..cut].to_string();
    body.push('…');
    body
}
