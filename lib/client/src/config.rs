use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = concat!("sparql-client/", env!("CARGO_PKG_VERSION"));
/// Every format the client knows how to handle, in order of preference.
pub const DEFAULT_ACCEPT: &str = "application/sparql-results+xml, text/tab-separated-values, application/rdf+xml, text/turtle";

/// Holds the configuration of a [`SparqlClient`](crate::SparqlClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// The URL queries are sent to.
    pub query_endpoint: String,
    /// The URL updates are sent to. Updates are refused if it is not set.
    pub update_endpoint: Option<String>,
    /// Applies to a whole request, from connecting to reading the last byte of the body.
    pub timeout: Duration,
    pub user_agent: String,
    /// The `Accept` header sent with queries and updates.
    pub accept: String,
}

impl ClientConfig {
    pub fn new(query_endpoint: impl Into<String>) -> Self {
        Self {
            query_endpoint: query_endpoint.into(),
            update_endpoint: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_owned(),
            accept: DEFAULT_ACCEPT.to_owned(),
        }
    }

    #[must_use]
    pub fn with_update_endpoint(mut self, update_endpoint: impl Into<String>) -> Self {
        self.update_endpoint = Some(update_endpoint.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }
}
