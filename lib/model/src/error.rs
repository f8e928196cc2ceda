use oxrdf::{BlankNodeIdParseError, IriParseError, LanguageTagParseError};

/// A backslash escape in a TSV literal that is not one of `\\`, `\"`, `\r`, `\t` or `\n`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unexpected string escape in: {literal}")]
pub struct MalformedEscapeError {
    /// The full text of the literal that contained the escape.
    pub literal: String,
}

/// An error raised while converting a [`Term`](crate::Term) into an [`oxrdf::Term`].
#[derive(Debug, thiserror::Error)]
pub enum TermConversionError {
    /// The IRI (or literal datatype) is not a valid absolute IRI.
    #[error("Invalid IRI '{iri}': {error}")]
    Iri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
    /// The blank node identifier is not valid in Turtle syntax.
    #[error("Invalid blank node identifier '{id}': {error}")]
    BlankNode {
        /// The identifier itself.
        id: String,
        /// The parsing error.
        #[source]
        error: BlankNodeIdParseError,
    },
    /// The language tag is not a valid BCP47 tag.
    #[error("Invalid language tag '{language}': {error}")]
    LanguageTag {
        /// The language tag itself.
        language: String,
        /// The parsing error.
        #[source]
        error: LanguageTagParseError,
    },
}
