#![cfg(test)]

use sparql_client::model::{Iri, Literal, Term};
use sparql_client::{
    ClientConfig, Operation, QueryError, QueryOutcome, RawResponse, SparqlClient, SparqlRequest,
    Transport, TransportError,
};
use std::cell::RefCell;
use std::error::Error;
use std::time::Duration;

/// Answers every request with the same response and records what was sent.
struct CannedTransport {
    status: u16,
    content_type: Option<&'static str>,
    body: &'static str,
    requests: RefCell<Vec<(Operation, String, String, String)>>,
}

impl CannedTransport {
    fn new(content_type: Option<&'static str>, body: &'static str) -> Self {
        Self {
            status: 200,
            content_type,
            body,
            requests: RefCell::default(),
        }
    }

    fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }
}

impl Transport for CannedTransport {
    fn execute(&self, request: &SparqlRequest<'_>) -> Result<RawResponse, TransportError> {
        self.requests.borrow_mut().push((
            request.operation,
            request.endpoint.to_owned(),
            request.text.to_owned(),
            request.accept.to_owned(),
        ));
        Ok(RawResponse {
            status: self.status,
            content_type: self.content_type.map(ToOwned::to_owned),
            body: self.body.to_owned(),
        })
    }
}

struct FailingTransport;

impl Transport for FailingTransport {
    fn execute(&self, _: &SparqlRequest<'_>) -> Result<RawResponse, TransportError> {
        Err(TransportError::new("connection refused"))
    }
}

fn client<T: Transport>(transport: T) -> SparqlClient<T> {
    SparqlClient::with_transport(
        ClientConfig::new("http://example.com/sparql")
            .with_update_endpoint("http://example.com/update")
            .with_timeout(Duration::from_secs(1)),
        transport,
    )
}

const TSV: &str = "?s\t?label\n<http://example.com/a>\t\"A\"@en\n<http://example.com/b>\n";

#[test]
fn select_tsv() -> Result<(), Box<dyn Error>> {
    let transport = CannedTransport::new(Some("text/tab-separated-values; charset=utf-8"), TSV);
    let solutions = client(&transport).select("SELECT ?s ?label WHERE { ?s rdfs:label ?label }")?;
    assert_eq!(solutions.variables(), ["s", "label"]);

    let rows = solutions.collect_rows()?;
    assert_eq!(rows.len(), 2);
    assert_eq!(
        rows[0].get("label"),
        Some(&Term::from(Literal::new_language_tagged_literal("A", "en")))
    );
    assert_eq!(
        rows[1].get("s"),
        Some(&Term::from(Iri::new("http://example.com/b")))
    );
    assert_eq!(rows[1].get("label"), None);

    let requests = transport.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].0, Operation::Query);
    assert_eq!(requests[0].1, "http://example.com/sparql");
    Ok(())
}

#[test]
fn missing_content_type_is_read_as_xml() -> Result<(), Box<dyn Error>> {
    let transport = CannedTransport::new(
        None,
        r#"<sparql xmlns="http://www.w3.org/2005/sparql-results#"><head/><boolean>false</boolean></sparql>"#,
    );
    assert!(!client(&transport).ask("ASK { ?s ?p ?o }")?);
    assert!(matches!(
        client(&transport).query("ASK { ?s ?p ?o }")?,
        QueryOutcome::Boolean(false)
    ));
    Ok(())
}

#[test]
fn http_error_status() {
    let transport = CannedTransport::new(Some("text/plain"), "Parse error").with_status(400);
    assert!(matches!(
        client(&transport).query("SELECT"),
        Err(QueryError::HttpStatus(400))
    ));
    assert!(matches!(
        client(&transport).update("INSERT DATA {"),
        Err(QueryError::HttpStatus(400))
    ));
}

#[test]
fn transport_failure() {
    assert!(matches!(
        client(FailingTransport).select("SELECT * {}"),
        Err(QueryError::Transport(_))
    ));
}

#[test]
fn unknown_media_type_is_rejected_for_queries() {
    let transport = CannedTransport::new(Some("text/html"), "<html></html>");
    assert!(matches!(
        client(&transport).construct("CONSTRUCT WHERE { ?s ?p ?o }"),
        Err(QueryError::UnrecognizedContentType(mime)) if mime == "text/html"
    ));
    assert!(matches!(
        client(&transport).query_raw("SELECT * {}", None),
        Err(QueryError::UnrecognizedContentType(_))
    ));
}

#[test]
fn construct_with_accept() -> Result<(), Box<dyn Error>> {
    let transport =
        CannedTransport::new(Some("text/turtle"), "<http://a> <http://b> <http://c> .\n");
    let graph = client(&transport)
        .construct_with_accept("CONSTRUCT WHERE { ?s ?p ?o }", "text/turtle")?;
    assert_eq!(graph, "<http://a> <http://b> <http://c> .\n");
    assert_eq!(transport.requests.borrow()[0].3, "text/turtle");

    client(&transport).describe("DESCRIBE <http://a>")?;
    assert_eq!(
        transport.requests.borrow()[1].3,
        sparql_client::DEFAULT_ACCEPT
    );
    Ok(())
}

#[test]
fn query_raw_keeps_the_body() -> Result<(), Box<dyn Error>> {
    let transport = CannedTransport::new(Some("application/sparql-results+json"), "{\"head\":{}}");
    let response = client(&transport)
        .query_raw("SELECT * {}", Some("application/sparql-results+json"))?;
    assert_eq!(response.body, "{\"head\":{}}");
    assert_eq!(
        response.content_type.mime_type(),
        "application/sparql-results+json"
    );
    assert!(matches!(
        client(&transport).select("SELECT * {}"),
        Err(QueryError::UnsupportedFormat(_))
    ));
    Ok(())
}

#[test]
fn update() -> Result<(), Box<dyn Error>> {
    let transport = CannedTransport::new(Some("text/html; charset=UTF-8"), "<p>Done</p>");
    let response = client(&transport).update("INSERT DATA { <http://a> <http://b> <http://c> }")?;
    assert_eq!(response.body, "<p>Done</p>");
    assert_eq!(response.content_type.raw(), "text/html; charset=UTF-8");

    let requests = transport.requests.borrow();
    assert_eq!(requests[0].0, Operation::Update);
    assert_eq!(requests[0].1, "http://example.com/update");
    Ok(())
}

#[test]
fn update_without_endpoint() {
    let transport = CannedTransport::new(None, "");
    let client =
        SparqlClient::with_transport(ClientConfig::new("http://example.com/sparql"), &transport);
    assert!(matches!(
        client.update("CLEAR ALL"),
        Err(QueryError::MissingUpdateEndpoint)
    ));
    assert!(transport.requests.borrow().is_empty());
}

#[test]
fn ask_on_select_response() {
    let transport = CannedTransport::new(Some("text/tab-separated-values"), TSV);
    assert!(matches!(
        client(&transport).ask("ASK { ?s ?p ?o }"),
        Err(QueryError::UnsupportedFormat(_))
    ));
}

#[test]
fn row_errors_are_recoverable() -> Result<(), Box<dyn Error>> {
    let transport = CannedTransport::new(
        Some("text/tab-separated-values"),
        "?v\n1\nnot-a-term\n2\n",
    );
    let solutions = client(&transport).select("SELECT ?v {}")?;
    let outcomes = solutions
        .rows()
        .map(|row| row.map(|row| row.get("v").map(Term::to_string)).map_err(|e| e.to_string()))
        .collect::<Vec<_>>();
    insta::assert_debug_snapshot!(outcomes, @r#"
    [
        Ok(
            Some(
                "\"1\"^^<http://www.w3.org/2001/XMLSchema#integer>",
            ),
        ),
        Err(
            "Unable to parse term 'not-a-term': matches no term syntax",
        ),
        Ok(
            Some(
                "\"2\"^^<http://www.w3.org/2001/XMLSchema#integer>",
            ),
        ),
    ]
    "#);
    Ok(())
}
