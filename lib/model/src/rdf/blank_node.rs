use crate::TermConversionError;
use std::fmt;

/// A blank node identifier, scoped to a single result document.
///
/// The identifier is stored without the `_:` prefix. The canonical form reuses the IRI form
/// `<id>`, which is what existing consumers of the rendered rows expect.
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct BlankNode {
    id: String,
}

impl BlankNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }

    pub fn into_string(self) -> String {
        self.id
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.id)
    }
}

impl TryFrom<BlankNode> for oxrdf::BlankNode {
    type Error = TermConversionError;

    fn try_from(value: BlankNode) -> Result<Self, Self::Error> {
        oxrdf::BlankNode::new(value.id.clone()).map_err(|error| TermConversionError::BlankNode {
            id: value.id,
            error,
        })
    }
}
