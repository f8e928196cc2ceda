use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::error::Error;
use std::time::Duration;
use tracing::debug;

/// The kind of SPARQL protocol operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Sent as the `query` parameter of a `GET` request.
    Query,
    /// Sent as the `update` field of a form-encoded `POST` request.
    Update,
}

/// Everything a [`Transport`] needs to perform one request.
#[derive(Debug, Clone, Copy)]
pub struct SparqlRequest<'a> {
    pub operation: Operation,
    pub endpoint: &'a str,
    /// The query or update text.
    pub text: &'a str,
    pub accept: &'a str,
    pub user_agent: &'a str,
    pub timeout: Duration,
}

/// An HTTP response as received, before any status or content type check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// The `Content-Type` header, if any.
    pub content_type: Option<String>,
    pub body: String,
}

/// Performs SPARQL protocol requests.
///
/// [`HttpTransport`] is the implementation used by default. Other implementations are useful to
/// talk to an endpoint through a custom HTTP stack or to answer requests from memory.
pub trait Transport {
    fn execute(&self, request: &SparqlRequest<'_>) -> Result<RawResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &SparqlRequest<'_>) -> Result<RawResponse, TransportError> {
        (**self).execute(request)
    }
}

/// The request could not be performed: connection failure, timeout, undecodable body...
#[derive(Debug, thiserror::Error)]
#[error("Error while calling the SPARQL endpoint: {source}")]
pub struct TransportError {
    #[source]
    source: Box<dyn Error + Send + Sync + 'static>,
}

impl TransportError {
    pub fn new(source: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Did the request time out?
    pub fn is_timeout(&self) -> bool {
        self.source
            .downcast_ref::<reqwest::Error>()
            .is_some_and(reqwest::Error::is_timeout)
    }
}

impl From<reqwest::Error> for TransportError {
    #[inline]
    fn from(error: reqwest::Error) -> Self {
        Self::new(error)
    }
}

/// A [`Transport`] on top of a blocking [`reqwest`] client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self {
            client: Client::builder().build()?,
        })
    }

    /// Reuses an already configured client, e.g. one with proxies or custom certificates.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &SparqlRequest<'_>) -> Result<RawResponse, TransportError> {
        debug!(
            "Sending a SPARQL {:?} to {} with Accept: {}",
            request.operation, request.endpoint, request.accept
        );
        let builder = match request.operation {
            Operation::Query => self
                .client
                .get(request.endpoint)
                .query(&[("query", request.text)]),
            Operation::Update => self
                .client
                .post(request.endpoint)
                .form(&[("update", request.text)]),
        };
        let response = builder
            .header(USER_AGENT, request.user_agent)
            .header(ACCEPT, request.accept)
            .timeout(request.timeout)
            .send()?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);
        // Decoded with the charset of the Content-Type header, UTF-8 by default
        let body = response.text()?;
        debug!(
            "Received HTTP {status} with {} bytes of {}",
            body.len(),
            content_type.as_deref().unwrap_or("unknown content")
        );
        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}
