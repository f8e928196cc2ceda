use crate::{QueryError, SparqlResponse};
use regex::Regex;
use sparql_client_results::{
    read_tsv_results, read_xml_results, QueryResultsFormat, ResultSet, XmlResults,
};
use std::sync::LazyLock;
use tracing::debug;

/// What an endpoint answered to a query.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    /// The serialization of an RDF graph, as received (`CONSTRUCT` and `DESCRIBE` queries).
    Graph(String),
    /// The answer to an `ASK` query.
    Boolean(bool),
    /// The solutions of a `SELECT` query.
    Solutions(ResultSet),
}

/// Guesses from its text if a query is an `ASK` query: `ASK` as a word followed by `{`.
///
/// This is a heuristic. It does not parse the query so `ASK {` in a comment or a string literal
/// also matches.
pub fn is_ask_query(query: &str) -> bool {
    #[allow(clippy::expect_used, reason = "The regex is a constant")]
    static ASK: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(?i)\bASK\s*\{").expect("valid ASK regex"));
    ASK.is_match(query)
}

/// Turns a successful response to `query` into a [`QueryOutcome`].
///
/// 1. RDF serializations are returned verbatim.
/// 2. Media types that are not SPARQL results formats are rejected.
/// 3. If `query` looks like an `ASK` query and the response has a single `<boolean>` element,
///    it is the answer. Otherwise the response is read as solutions.
/// 4. Solutions are parsed from XML or TSV. JSON and CSV are not supported.
pub fn interpret_response(
    response: SparqlResponse,
    query: &str,
) -> Result<QueryOutcome, QueryError> {
    let content_type = &response.content_type;
    if let Some(format) = content_type.graph_format() {
        debug!("Returning the {format} graph as is");
        return Ok(QueryOutcome::Graph(response.body));
    }
    let Some(format) = content_type.results_format() else {
        return Err(QueryError::UnrecognizedContentType(
            content_type.mime_type().to_owned(),
        ));
    };

    if is_ask_query(query) {
        if format == QueryResultsFormat::Xml {
            let results = XmlResults::parse(&response.body)?;
            if let Some(value) = results.boolean() {
                debug!("Read the ASK answer {value}");
                return Ok(QueryOutcome::Boolean(value));
            }
            debug!("The query looks like an ASK query but there is no boolean, reading solutions");
            return Ok(QueryOutcome::Solutions(results.into_result_set()));
        }
        debug!("The query looks like an ASK query but booleans are only read from XML, reading {format} solutions");
    }

    Ok(QueryOutcome::Solutions(parse_solutions(response)?))
}

/// Parses the body of a response as solutions, according to its media type.
pub fn parse_solutions(response: SparqlResponse) -> Result<ResultSet, QueryError> {
    match response.content_type.results_format() {
        Some(QueryResultsFormat::Xml) => Ok(read_xml_results(&response.body)?),
        Some(QueryResultsFormat::Tsv) => Ok(read_tsv_results(response.body)?),
        Some(QueryResultsFormat::Json | QueryResultsFormat::Csv) | None => Err(
            QueryError::UnsupportedFormat(response.content_type.mime_type().to_owned()),
        ),
    }
}

/// Reads the answer of an `ASK` query.
///
/// Fails with [`QueryError::NotAnAskResponse`] if there is not exactly one `<boolean>` element.
pub fn parse_boolean(response: &SparqlResponse) -> Result<bool, QueryError> {
    if response.content_type.results_format() != Some(QueryResultsFormat::Xml) {
        return Err(QueryError::UnsupportedFormat(
            response.content_type.mime_type().to_owned(),
        ));
    }
    XmlResults::parse(&response.body)?
        .boolean()
        .ok_or(QueryError::NotAnAskResponse)
}
