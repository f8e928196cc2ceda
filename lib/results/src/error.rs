use sparql_client_model::MalformedEscapeError;
use std::io;

/// An error raised while parsing a results document.
#[derive(Debug, thiserror::Error)]
pub enum ResultsParseError {
    /// A TSV term matches none of the term syntaxes or its numeric value cannot be parsed.
    #[error("Unable to parse term '{term}': {reason}")]
    MalformedTerm {
        /// The raw text of the term.
        term: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// A TSV literal contains an unknown escape sequence.
    #[error(transparent)]
    MalformedEscape(#[from] MalformedEscapeError),
    /// The document as a whole cannot be read.
    #[error(transparent)]
    MalformedResult(#[from] MalformedResultError),
}

impl ResultsParseError {
    pub(crate) fn malformed_term(term: &str, reason: &'static str) -> Self {
        Self::MalformedTerm {
            term: term.to_owned(),
            reason,
        }
    }
}

impl From<quick_xml::Error> for ResultsParseError {
    #[inline]
    fn from(error: quick_xml::Error) -> Self {
        Self::MalformedResult(error.into())
    }
}

impl From<ResultsParseError> for io::Error {
    #[inline]
    fn from(error: ResultsParseError) -> Self {
        Self::new(io::ErrorKind::InvalidData, error)
    }
}

/// An error returned if a results document is structurally broken: a missing TSV header line or
/// an XML document that cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct MalformedResultError(#[from] MalformedResultErrorKind);

#[derive(Debug, thiserror::Error)]
enum MalformedResultErrorKind {
    #[error("{0}")]
    Msg(String),
    #[error("Error parsing the XML results document: {0}")]
    Xml(#[source] quick_xml::Error),
}

impl MalformedResultError {
    /// Builds an error from a printable error message.
    #[inline]
    pub fn msg(msg: impl Into<String>) -> Self {
        Self(MalformedResultErrorKind::Msg(msg.into()))
    }
}

impl From<quick_xml::Error> for MalformedResultError {
    #[inline]
    fn from(error: quick_xml::Error) -> Self {
        Self(MalformedResultErrorKind::Xml(error))
    }
}
