use crate::dispatch::{interpret_response, parse_boolean, parse_solutions};
use crate::{
    ClientConfig, ContentType, HttpTransport, Operation, QueryError, QueryOutcome, SparqlRequest,
    SparqlResponse, Transport,
};
use sparql_client_results::ResultSet;
use tracing::debug;

/// A client for a SPARQL endpoint.
///
/// ```no_run
/// use sparql_client::{ClientConfig, QueryOutcome, SparqlClient};
///
/// let client = SparqlClient::new(ClientConfig::new("http://localhost:7878/query"))?;
/// if let QueryOutcome::Solutions(solutions) = client.query("SELECT * WHERE { ?s ?p ?o } LIMIT 10")? {
///     for row in &solutions {
///         println!("{:?}", row?.get("s"));
///     }
/// }
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct SparqlClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl SparqlClient<HttpTransport> {
    /// Builds a client talking HTTP.
    pub fn new(config: ClientConfig) -> Result<Self, QueryError> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }
}

impl<T: Transport> SparqlClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Executes any query and interprets the response based on its media type and, to tell
    /// `ASK` answers apart, on the query text.
    ///
    /// See [`interpret_response`](crate::interpret_response) for the details.
    pub fn query(&self, query: &str) -> Result<QueryOutcome, QueryError> {
        let response = self.send_query(query, &self.config.accept)?;
        interpret_response(response, query)
    }

    /// Executes a `SELECT` query.
    pub fn select(&self, query: &str) -> Result<ResultSet, QueryError> {
        parse_solutions(self.send_query(query, &self.config.accept)?)
    }

    /// Executes an `ASK` query.
    pub fn ask(&self, query: &str) -> Result<bool, QueryError> {
        parse_boolean(&self.send_query(query, &self.config.accept)?)
    }

    /// Executes a `CONSTRUCT` query and returns the serialized graph.
    pub fn construct(&self, query: &str) -> Result<String, QueryError> {
        self.construct_with_accept(query, &self.config.accept)
    }

    pub fn construct_with_accept(&self, query: &str, accept: &str) -> Result<String, QueryError> {
        Ok(self.send_query(query, accept)?.body)
    }

    /// Executes a `DESCRIBE` query and returns the serialized graph.
    pub fn describe(&self, query: &str) -> Result<String, QueryError> {
        self.describe_with_accept(query, &self.config.accept)
    }

    pub fn describe_with_accept(&self, query: &str, accept: &str) -> Result<String, QueryError> {
        Ok(self.send_query(query, accept)?.body)
    }

    /// Executes a query and returns the response without interpreting it.
    ///
    /// The status code and the media type are still checked.
    pub fn query_raw(
        &self,
        query: &str,
        accept: Option<&str>,
    ) -> Result<SparqlResponse, QueryError> {
        self.send_query(query, accept.unwrap_or(&self.config.accept))
    }

    /// Executes an update against the update endpoint.
    ///
    /// Any media type is accepted in the response.
    pub fn update(&self, update: &str) -> Result<SparqlResponse, QueryError> {
        let endpoint = self
            .config
            .update_endpoint
            .as_deref()
            .ok_or(QueryError::MissingUpdateEndpoint)?;
        self.send(Operation::Update, endpoint, update, &self.config.accept)
    }

    fn send_query(&self, query: &str, accept: &str) -> Result<SparqlResponse, QueryError> {
        let response = self.send(Operation::Query, &self.config.query_endpoint, query, accept)?;
        if !response.content_type.is_known() {
            return Err(QueryError::UnrecognizedContentType(
                response.content_type.mime_type().to_owned(),
            ));
        }
        Ok(response)
    }

    fn send(
        &self,
        operation: Operation,
        endpoint: &str,
        text: &str,
        accept: &str,
    ) -> Result<SparqlResponse, QueryError> {
        let response = self.transport.execute(&SparqlRequest {
            operation,
            endpoint,
            text,
            accept,
            user_agent: &self.config.user_agent,
            timeout: self.config.timeout,
        })?;
        if !(200..300).contains(&response.status) {
            debug!("{endpoint} answered with HTTP {}", response.status);
            return Err(QueryError::HttpStatus(response.status));
        }
        Ok(SparqlResponse {
            content_type: ContentType::parse(response.content_type.as_deref()),
            body: response.body,
        })
    }
}
