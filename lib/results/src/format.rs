use std::fmt;

/// A SPARQL query results format.
///
/// Only [`Xml`](Self::Xml) and [`Tsv`](Self::Tsv) can be parsed. The others are recognized so
/// that they can be reported as unsupported instead of unknown.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum QueryResultsFormat {
    /// [SPARQL Query Results XML Format](https://www.w3.org/TR/rdf-sparql-XMLres/)
    Xml,
    /// [SPARQL Query Results JSON Format](https://www.w3.org/TR/sparql11-results-json/)
    Json,
    /// [SPARQL Query Results CSV Format](https://www.w3.org/TR/sparql11-results-csv-tsv/)
    Csv,
    /// [SPARQL Query Results TSV Format](https://www.w3.org/TR/sparql11-results-csv-tsv/)
    Tsv,
}

impl QueryResultsFormat {
    pub const ALL: [Self; 4] = [Self::Xml, Self::Json, Self::Csv, Self::Tsv];

    #[inline]
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Xml => "application/sparql-results+xml",
            Self::Json => "application/sparql-results+json",
            Self::Csv => "text/csv",
            Self::Tsv => "text/tab-separated-values",
        }
    }

    /// Looks up a format from a lower-cased media type without parameters.
    ///
    /// ```
    /// use sparql_client_results::QueryResultsFormat;
    ///
    /// assert_eq!(
    ///     QueryResultsFormat::from_media_type("text/tab-separated-values"),
    ///     Some(QueryResultsFormat::Tsv)
    /// );
    /// ```
    #[inline]
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.media_type() == media_type)
    }
}

impl fmt::Display for QueryResultsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Xml => "SPARQL Results in XML",
            Self::Json => "SPARQL Results in JSON",
            Self::Csv => "SPARQL Results in CSV",
            Self::Tsv => "SPARQL Results in TSV",
        })
    }
}

/// An RDF serialization an endpoint may answer a `CONSTRUCT` or `DESCRIBE` query with.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum RdfGraphFormat {
    /// [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/)
    RdfXml,
    /// [Turtle](https://www.w3.org/TR/turtle/)
    Turtle,
    /// [N-Triples](https://www.w3.org/TR/n-triples/)
    NTriples,
}

impl RdfGraphFormat {
    #[inline]
    pub fn media_type(self) -> &'static str {
        match self {
            Self::RdfXml => "application/rdf+xml",
            Self::Turtle => "text/turtle",
            Self::NTriples => "text/plain",
        }
    }

    /// Looks up a format from a lower-cased media type without parameters.
    ///
    /// N-Triples is served both as `text/plain` and `application/n-triples`.
    #[inline]
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type {
            "application/rdf+xml" => Some(Self::RdfXml),
            "text/turtle" => Some(Self::Turtle),
            "text/plain" | "application/n-triples" => Some(Self::NTriples),
            _ => None,
        }
    }
}

impl fmt::Display for RdfGraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RdfXml => "RDF/XML",
            Self::Turtle => "Turtle",
            Self::NTriples => "N-Triples",
        })
    }
}
