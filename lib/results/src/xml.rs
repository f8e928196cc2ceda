//! Implementation of [SPARQL Query Results XML Format](https://www.w3.org/TR/rdf-sparql-XMLres/)

use crate::{MalformedResultError, ResultSet, ResultsParseError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use sparql_client_model::{BlankNode, Iri, Literal, Row, Term};
use std::collections::BTreeMap;
use tracing::debug;

/// Parses a SPARQL Query Results XML document into [`ResultSet`].
///
/// Shortcut for `XmlResults::parse(xml)?.into_result_set()`.
pub fn read_xml_results(xml: &str) -> Result<ResultSet, ResultsParseError> {
    Ok(XmlResults::parse(xml)?.into_result_set())
}

/// A fully parsed SPARQL Query Results XML document.
///
/// The document is read in one pass and everything is kept in memory: the declared variables,
/// the solutions and the content of every `boolean` element. The same parse can then be used
/// both to answer an `ASK` query and, if there is no usable boolean, as a table.
///
/// The reader is lenient about structure:
/// * `variable` elements are collected wherever they appear, in document order.
/// * Inside a `binding`, the first `uri`, `literal` or `bnode` child wins and the others are
///   ignored.
/// * A `binding` without a term child leaves the variable unbound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlResults {
    variables: Vec<String>,
    rows: Vec<Row>,
    booleans: Vec<String>,
}

impl XmlResults {
    pub fn parse(xml: &str) -> Result<Self, ResultsParseError> {
        let mut reader = Reader::from_str(xml);
        reader.expand_empty_elements(true);

        let mut depth = 0_usize;
        let mut has_root = false;
        let mut variables = Vec::new();
        let mut rows = Vec::new();
        let mut booleans = Vec::new();
        let mut boolean: Option<String> = None;
        let mut row: Option<BTreeMap<String, Term>> = None;
        let mut binding: Option<Binding> = None;
        let mut term: Option<PendingTerm> = None;

        loop {
            match reader.read_event()? {
                Event::Start(event) => {
                    depth += 1;
                    has_root = true;
                    if term.is_some() {
                        // Markup inside of a term only contributes its text
                        continue;
                    }
                    match event.local_name().as_ref() {
                        b"variable" => variables.push(name_attribute(&reader, &event, "variable")?),
                        b"boolean" => boolean = Some(String::new()),
                        b"result" => row = Some(BTreeMap::new()),
                        b"binding" if row.is_some() => {
                            binding = Some(Binding {
                                name: name_attribute(&reader, &event, "binding")?,
                                term: None,
                            })
                        }
                        kind @ (b"uri" | b"bnode" | b"literal") => {
                            if binding.as_ref().is_some_and(|b| b.term.is_none()) {
                                term = Some(PendingTerm::start(&reader, &event, kind, depth)?);
                            } else if binding.is_some() {
                                debug!("Ignoring an extra term element in a binding");
                            }
                        }
                        _ => (),
                    }
                }
                Event::Text(event) => {
                    let text = event.unescape()?;
                    if let Some(term) = &mut term {
                        term.text.push_str(&text);
                    } else if let Some(boolean) = &mut boolean {
                        boolean.push_str(&text);
                    }
                }
                Event::CData(event) => {
                    let text = reader.decoder().decode(&event)?;
                    if let Some(term) = &mut term {
                        term.text.push_str(&text);
                    } else if let Some(boolean) = &mut boolean {
                        boolean.push_str(&text);
                    }
                }
                Event::End(event) => {
                    if let Some(pending) = term.take_if(|term| term.depth == depth) {
                        if let Some(binding) = &mut binding {
                            binding.term = Some(pending.finish());
                        }
                    } else if term.is_none() {
                        match event.local_name().as_ref() {
                            b"boolean" => booleans.extend(boolean.take()),
                            b"binding" => {
                                if let Some(Binding {
                                    name,
                                    term: Some(term),
                                }) = binding.take()
                                {
                                    if let Some(row) = &mut row {
                                        row.insert(name, term);
                                    }
                                }
                            }
                            b"result" => rows.extend(row.take().map(Row::new)),
                            _ => (),
                        }
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Eof => break,
                _ => (),
            }
        }

        if !has_root {
            return Err(
                MalformedResultError::msg("No root element found in the XML results").into(),
            );
        }
        if depth != 0 {
            return Err(MalformedResultError::msg(format!(
                "Unexpected end of the XML results: {depth} elements are not closed"
            ))
            .into());
        }
        debug!(
            "Parsed XML results with {} variables, {} results and {} boolean elements",
            variables.len(),
            rows.len(),
            booleans.len()
        );
        Ok(Self {
            variables,
            rows,
            booleans,
        })
    }

    /// The answer of an `ASK` query.
    ///
    /// Returns `Some` only if the document contains exactly one `boolean` element. Its value is
    /// `true` if the element content is exactly `true` and `false` for anything else.
    pub fn boolean(&self) -> Option<bool> {
        match self.booleans.as_slice() {
            [value] => Some(value == "true"),
            _ => None,
        }
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn into_result_set(self) -> ResultSet {
        ResultSet::new(self.variables, self.rows)
    }
}

struct Binding {
    name: String,
    term: Option<Term>,
}

enum TermKind {
    Iri,
    BlankNode,
    Literal {
        datatype: Option<String>,
        language: Option<String>,
    },
}

struct PendingTerm {
    kind: TermKind,
    text: String,
    depth: usize,
}

impl PendingTerm {
    fn start(
        reader: &Reader<&[u8]>,
        event: &BytesStart<'_>,
        kind: &[u8],
        depth: usize,
    ) -> Result<Self, ResultsParseError> {
        let kind = match kind {
            b"uri" => TermKind::Iri,
            b"bnode" => TermKind::BlankNode,
            _ => {
                let mut datatype = None;
                let mut language = None;
                for attribute in event.attributes() {
                    let attribute = attribute.map_err(quick_xml::Error::from)?;
                    if attribute.key.as_ref() == b"xml:lang" {
                        language = Some(attribute.decode_and_unescape_value(reader)?.into_owned());
                    } else if attribute.key.local_name().as_ref() == b"datatype" {
                        datatype = Some(attribute.decode_and_unescape_value(reader)?.into_owned());
                    }
                }
                TermKind::Literal {
                    datatype: datatype.filter(|d| !d.is_empty()),
                    language: language.filter(|l| !l.is_empty()),
                }
            }
        };
        Ok(Self {
            kind,
            text: String::new(),
            depth,
        })
    }

    fn finish(self) -> Term {
        match self.kind {
            TermKind::Iri => Iri::new(self.text).into(),
            TermKind::BlankNode => BlankNode::new(self.text).into(),
            TermKind::Literal { datatype, language } => {
                Literal::new(self.text, datatype, language).into()
            }
        }
    }
}

fn name_attribute(
    reader: &Reader<&[u8]>,
    event: &BytesStart<'_>,
    element: &str,
) -> Result<String, ResultsParseError> {
    for attribute in event.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        if attribute.key.local_name().as_ref() == b"name" {
            return Ok(attribute.decode_and_unescape_value(reader)?.into_owned());
        }
    }
    let message = format!("No name attribute found for the <{element}> tag");
    Err(MalformedResultError::msg(message).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparql_client_model::vocab::xsd;

    const SELECT: &str = r#"<?xml version="1.0"?>
<sparql xmlns="http://www.w3.org/2005/sparql-results#">
  <head>
    <variable name="s"/>
    <variable name="label"/>
    <variable name="unused"/>
  </head>
  <results>
    <result>
      <binding name="s"><uri>http://example.com/a</uri></binding>
      <binding name="label"><literal xml:lang="en">A &amp; B</literal></binding>
    </result>
    <result>
      <binding name="s"><bnode>b0</bnode></binding>
      <binding name="label"><literal datatype="http://www.w3.org/2001/XMLSchema#integer">42</literal></binding>
    </result>
  </results>
</sparql>"#;

    #[test]
    fn select() -> Result<(), ResultsParseError> {
        let results = XmlResults::parse(SELECT)?;
        assert_eq!(results.variables(), ["s", "label", "unused"]);
        assert_eq!(results.boolean(), None);

        let rows = results.into_result_set().collect_rows()?;
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].get("s"),
            Some(&Term::from(Iri::new("http://example.com/a")))
        );
        assert_eq!(
            rows[0].get("label"),
            Some(&Term::from(Literal::new_language_tagged_literal(
                "A & B", "en"
            )))
        );
        assert_eq!(rows[1].get("s"), Some(&Term::from(BlankNode::new("b0"))));
        assert_eq!(
            rows[1].get("label"),
            Some(&Term::from(Literal::new_typed_literal(
                "42",
                xsd::INTEGER.as_str()
            )))
        );
        assert!(!rows[0].contains("unused"));
        Ok(())
    }

    #[test]
    fn literal_with_datatype_and_language() -> Result<(), ResultsParseError> {
        let rows = read_xml_results(
            r#"<sparql><head><variable name="x"/></head><results><result>
            <binding name="x"><literal datatype="http://example.com/dt" xml:lang="fr">v</literal></binding>
            </result></results></sparql>"#,
        )?
        .collect_rows()?;
        let Some(Term::Literal(literal)) = rows[0].get("x") else {
            panic!("expected a literal, got {:?}", rows[0].get("x"));
        };
        assert_eq!(literal.datatype(), Some("http://example.com/dt"));
        assert_eq!(literal.language(), Some("fr"));
        insta::assert_snapshot!(literal, @r#""v"^^<http://example.com/dt>"#);
        Ok(())
    }

    #[test]
    fn empty_literal_is_bound() -> Result<(), ResultsParseError> {
        let rows = read_xml_results(
            r#"<sparql><head><variable name="x"/><variable name="y"/></head><results><result>
            <binding name="x"><literal/></binding><binding name="y"/>
            </result></results></sparql>"#,
        )?
        .collect_rows()?;
        assert_eq!(
            rows[0].get("x"),
            Some(&Term::from(Literal::new_simple_literal("")))
        );
        assert_eq!(rows[0].get("y"), None);
        Ok(())
    }

    #[test]
    fn first_term_wins() -> Result<(), ResultsParseError> {
        let rows = read_xml_results(
            r#"<sparql><head><variable name="x"/></head><results><result>
            <binding name="x"><uri>http://example.com/first</uri><literal>second</literal></binding>
            </result></results></sparql>"#,
        )?
        .collect_rows()?;
        assert_eq!(
            rows[0].get("x"),
            Some(&Term::from(Iri::new("http://example.com/first")))
        );
        Ok(())
    }

    #[test]
    fn boolean() -> Result<(), ResultsParseError> {
        let parse = |value: &str| {
            XmlResults::parse(&format!(
                "<sparql><head/><boolean>{value}</boolean></sparql>"
            ))
            .map(|results| results.boolean())
        };
        assert_eq!(parse("true")?, Some(true));
        assert_eq!(parse("false")?, Some(false));
        assert_eq!(parse("TRUE")?, Some(false));
        assert_eq!(parse(" true ")?, Some(false));
        Ok(())
    }

    #[test]
    fn two_booleans_are_not_an_answer() -> Result<(), ResultsParseError> {
        let results = XmlResults::parse(
            "<sparql><head/><boolean>true</boolean><boolean>true</boolean></sparql>",
        )?;
        assert_eq!(results.boolean(), None);
        Ok(())
    }

    #[test]
    fn missing_binding_name() {
        assert!(matches!(
            read_xml_results(
                "<sparql><head/><results><result><binding><uri>x</uri></binding></result></results></sparql>"
            ),
            Err(ResultsParseError::MalformedResult(_))
        ));
    }

    #[test]
    fn not_xml() {
        for document in [
            "",
            "   ",
            "not xml at all",
            "<sparql><head></sparql>",
            "<sparql><head><variable name=\"s\"/></head>",
            "<sparql><head><variable name=\"s\"/></head><results><result><binding name=\"s\"><uri>http://a</uri></binding></result>",
        ] {
            assert!(
                matches!(
                    read_xml_results(document),
                    Err(ResultsParseError::MalformedResult(_))
                ),
                "{document:?} should be rejected"
            );
        }
    }

    #[test]
    fn malformed_name_attribute() {
        assert!(matches!(
            read_xml_results(r#"<sparql><head><variable novalue name="s"/></head></sparql>"#),
            Err(ResultsParseError::MalformedResult(_))
        ));
    }
}
