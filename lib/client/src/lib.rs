//! A client for the [SPARQL 1.1 protocol](https://www.w3.org/TR/sparql11-protocol/).
//!
//! [`SparqlClient`] sends queries and updates to an endpoint and turns the heterogeneous responses
//! (RDF serializations, `ASK` booleans, XML and TSV solutions) into a [`QueryOutcome`].
//!
//! The HTTP layer sits behind the [`Transport`] trait. [`HttpTransport`] implements it with a
//! blocking [`reqwest`] client.

mod client;
mod config;
mod content_type;
mod dispatch;
mod error;
mod transport;

pub use client::SparqlClient;
pub use config::{ClientConfig, DEFAULT_ACCEPT, DEFAULT_TIMEOUT, USER_AGENT};
pub use content_type::{ContentType, SparqlResponse};
pub use dispatch::{interpret_response, is_ask_query, parse_boolean, parse_solutions, QueryOutcome};
pub use error::QueryError;
pub use transport::{
    HttpTransport, Operation, RawResponse, SparqlRequest, Transport, TransportError,
};

pub use sparql_client_model as model;
pub use sparql_client_results as results;
