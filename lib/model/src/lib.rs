//! The term and solution model of the SPARQL client.
//!
//! Terms are kept exactly as an endpoint reported them: no IRI, blank node identifier or language
//! tag validation happens on construction. Use the [`TryFrom`] conversions into [`oxrdf::Term`] if
//! a validated term is needed.

mod error;
mod escape;
mod rdf;
mod row;

pub use error::*;
pub use escape::{escape_for_query, unescape_tsv_literal};
pub use rdf::*;
pub use row::Row;

pub mod vocab {
    pub use oxrdf::vocab::*;
}
