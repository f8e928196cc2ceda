use crate::TransportError;
use sparql_client_results::ResultsParseError;

/// An error returned by [`SparqlClient`](crate::SparqlClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The endpoint answered with a status code outside of the `2xx` range. The body is not read.
    #[error("The SPARQL endpoint answered with HTTP status {0}")]
    HttpStatus(u16),
    /// The request could not be performed.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// The response media type is neither a SPARQL results format nor an RDF serialization.
    #[error("Media type returned by the SPARQL endpoint not recognized: {0}")]
    UnrecognizedContentType(String),
    /// The media type is known but there is no parser for it here.
    #[error("No results parser available for {0}")]
    UnsupportedFormat(String),
    /// An `ASK` answer was expected but the response holds no unambiguous `<boolean>` element.
    #[error("The response is not the result of an ASK query")]
    NotAnAskResponse,
    /// An update was requested but no update endpoint is configured.
    #[error("No SPARQL update endpoint configured")]
    MissingUpdateEndpoint,
    /// The response body could not be parsed.
    #[error(transparent)]
    Parse(#[from] ResultsParseError),
}
