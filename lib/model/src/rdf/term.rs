use crate::{BlankNode, Iri, Literal, TermConversionError};
use std::fmt;

/// A value bound to a variable in a solution.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Term {
    Iri(Iri),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl Term {
    pub fn is_iri(&self) -> bool {
        matches!(self, Self::Iri(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Self::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// The IRI, the blank node identifier or the lexical value of the literal.
    pub fn value(&self) -> &str {
        match self {
            Self::Iri(iri) => iri.as_str(),
            Self::BlankNode(node) => node.as_str(),
            Self::Literal(literal) => literal.value(),
        }
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Self::BlankNode(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => fmt::Display::fmt(iri, f),
            Self::BlankNode(node) => fmt::Display::fmt(node, f),
            Self::Literal(literal) => fmt::Display::fmt(literal, f),
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Self::BlankNode(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl TryFrom<Term> for oxrdf::Term {
    type Error = TermConversionError;

    fn try_from(value: Term) -> Result<Self, Self::Error> {
        Ok(match value {
            Term::Iri(iri) => oxrdf::NamedNode::try_from(iri)?.into(),
            Term::BlankNode(node) => oxrdf::BlankNode::try_from(node)?.into(),
            Term::Literal(literal) => oxrdf::Literal::try_from(literal)?.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_with_equal_values_differ() {
        let iri = Term::from(Iri::new("x"));
        let node = Term::from(BlankNode::new("x"));
        let literal = Term::from(Literal::new_simple_literal("x"));
        assert_ne!(iri, node);
        assert_ne!(node, iri);
        assert_ne!(iri, literal);
        assert_ne!(literal, iri);
        assert_ne!(node, literal);
        assert_eq!(iri.value(), node.value());
        assert_eq!(iri.value(), literal.value());
    }

    #[test]
    fn capability_checks() {
        let iri = Term::from(Iri::new("http://example.com/"));
        assert!(iri.is_iri());
        assert!(!iri.is_literal());
        assert!(!iri.is_blank_node());
        assert!(iri.as_literal().is_none());
        assert_eq!(iri.as_iri().map(Iri::as_str), Some("http://example.com/"));
    }

    #[test]
    fn canonical_forms() {
        insta::assert_snapshot!(Term::from(Iri::new("http://example.com/s")), @"<http://example.com/s>");
        insta::assert_snapshot!(Term::from(BlankNode::new("b0")), @"<b0>");
        insta::assert_snapshot!(Term::from(Literal::new_language_tagged_literal("hi", "en")), @r#""hi"@en"#);
    }

    #[test]
    fn into_oxrdf() -> Result<(), TermConversionError> {
        assert_eq!(
            oxrdf::Term::try_from(Term::from(Iri::new("http://example.com/s")))?,
            oxrdf::Term::from(oxrdf::NamedNode::new_unchecked("http://example.com/s"))
        );
        assert_eq!(
            oxrdf::Term::try_from(Term::from(BlankNode::new("b0")))?,
            oxrdf::Term::from(oxrdf::BlankNode::new_unchecked("b0"))
        );
        assert!(matches!(
            oxrdf::Term::try_from(Term::from(Iri::new("not an iri"))),
            Err(TermConversionError::Iri { .. })
        ));
        Ok(())
    }
}
