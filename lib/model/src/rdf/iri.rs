use crate::TermConversionError;
use std::fmt;

/// An IRI as reported by an endpoint, absolute or relative.
///
/// The value is not validated. Its canonical form is `<value>`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Iri {
    iri: String,
}

impl Iri {
    pub fn new(iri: impl Into<String>) -> Self {
        Self { iri: iri.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.iri
    }

    pub fn into_string(self) -> String {
        self.iri
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.iri)
    }
}

impl TryFrom<Iri> for oxrdf::NamedNode {
    type Error = TermConversionError;

    fn try_from(value: Iri) -> Result<Self, Self::Error> {
        oxrdf::NamedNode::new(value.iri.clone()).map_err(|error| TermConversionError::Iri {
            iri: value.iri,
            error,
        })
    }
}
