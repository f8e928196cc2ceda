//! Parsers turning the body of a SPARQL endpoint response into [`ResultSet`]s.
//!
//! Two formats are supported:
//! * [SPARQL Query Results XML](https://www.w3.org/TR/rdf-sparql-XMLres/), parsed eagerly by
//!   [`XmlResults`].
//! * [SPARQL Query Results TSV](https://www.w3.org/TR/sparql11-results-csv-tsv/), parsed lazily
//!   one row at a time by [`read_tsv_results`].

mod error;
mod format;
mod solutions;
mod tsv;
mod xml;

pub use error::{MalformedResultError, ResultsParseError};
pub use format::{QueryResultsFormat, RdfGraphFormat};
pub use solutions::{ResultSet, Rows};
pub use tsv::{parse_tsv_term, read_tsv_results};
pub use xml::{read_xml_results, XmlResults};
