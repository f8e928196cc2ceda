//! Implementation of [SPARQL Query Results TSV Format](https://www.w3.org/TR/sparql11-results-csv-tsv/)

use crate::{MalformedResultError, ResultSet, ResultsParseError};
use oxsdatatypes::{Double, Integer};
use regex::Regex;
use sparql_client_model::vocab::xsd;
use sparql_client_model::{unescape_tsv_literal, BlankNode, Iri, Literal, Row, Term};
use std::collections::BTreeMap;
use std::num::IntErrorKind;
use std::str::{FromStr, Lines};
use std::sync::LazyLock;
use tracing::warn;

/// Reads the header line of a TSV results document and keeps the rest of `body` to be parsed
/// lazily.
///
/// Every header cell must be a variable: `?name` or `$name`.
pub fn read_tsv_results(body: String) -> Result<ResultSet, ResultsParseError> {
    let (header, data_start) = match body.find('\n') {
        Some(end) => (&body[..end], end + 1),
        None if body.is_empty() => {
            return Err(MalformedResultError::msg("No variables line found in TSV output").into())
        }
        None => (body.as_str(), body.len()),
    };
    let header = header.strip_suffix('\r').unwrap_or(header);

    let variables = header
        .split('\t')
        .map(|cell| {
            cell.strip_prefix(['?', '$'])
                .filter(|name| !name.is_empty())
                .map(ToOwned::to_owned)
                .ok_or_else(|| {
                    MalformedResultError::msg(format!("Could not parse variables line: {header}"))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResultSet::from_tsv(variables, body, data_start))
}

/// Forward-only cursor over the data lines of a TSV document.
pub(crate) struct TsvRows<'a> {
    lines: Lines<'a>,
    variables: &'a [String],
}

impl<'a> TsvRows<'a> {
    pub(crate) fn new(data: &'a str, variables: &'a [String]) -> Self {
        Self {
            lines: data.lines(),
            variables,
        }
    }
}

impl Iterator for TsvRows<'_> {
    type Item = Result<Row, ResultsParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        Some(parse_row(line, self.variables))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

fn parse_row(line: &str, variables: &[String]) -> Result<Row, ResultsParseError> {
    let mut terms = line.split('\t').collect::<Vec<_>>();
    // Unbound trailing variables
    while terms.last().is_some_and(|term| term.is_empty()) {
        terms.pop();
    }
    if terms.len() > variables.len() {
        warn!(
            "Ignoring {} TSV terms beyond the {} declared variables",
            terms.len() - variables.len(),
            variables.len()
        );
    }

    let mut bindings = BTreeMap::new();
    for (variable, term) in variables.iter().zip(terms) {
        bindings.insert(variable.clone(), parse_tsv_term(term)?);
    }
    Ok(Row::new(bindings))
}

/// Parses a single term of a TSV results row.
///
/// The term syntaxes are tried in order:
/// 1. `<iri>`
/// 2. `_:id`
/// 3. `"literal"` or `'literal'`
/// 4. `"literal"^^<datatype>`, split at the last `^^`
/// 5. `"literal"@language`, split at the last `@`
/// 6. `true` or `false`, as `xsd:boolean`
/// 7. without a `.`: an `xsd:integer`
/// 8. without an `e`: an `xsd:double`
/// 9. otherwise an `xsd:decimal`
///
/// ```
/// use sparql_client_results::parse_tsv_term;
///
/// let term = parse_tsv_term("\"chat\"@fr")?;
/// assert_eq!(term.value(), "chat");
/// assert_eq!(term.as_literal().and_then(|l| l.language()), Some("fr"));
/// # Ok::<_, sparql_client_results::ResultsParseError>(())
/// ```
pub fn parse_tsv_term(term: &str) -> Result<Term, ResultsParseError> {
    if let Some(iri) = term.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        return Ok(Iri::new(iri).into());
    }

    if let Some(id) = term.strip_prefix("_:") {
        return Ok(BlankNode::new(id).into());
    }

    if (term.starts_with('"') && term.ends_with('"'))
        || (term.starts_with('\'') && term.ends_with('\''))
    {
        let value = term
            .get(1..term.len() - 1)
            .ok_or_else(|| ResultsParseError::malformed_term(term, "invalid literal"))?;
        return Ok(Literal::new_simple_literal(unescape_tsv_literal(value)?).into());
    }

    if term.ends_with('>') {
        let caret = term
            .rfind("^^")
            .ok_or_else(|| ResultsParseError::malformed_term(term, "invalid typed literal"))?;
        let (value, datatype) = caret
            .checked_sub(1)
            .and_then(|end| term.get(1..end))
            .zip(term.get(caret + 3..term.len() - 1))
            .ok_or_else(|| ResultsParseError::malformed_term(term, "invalid typed literal"))?;
        return Ok(Literal::new_typed_literal(unescape_tsv_literal(value)?, datatype).into());
    }

    if let Some(at) = term.rfind('@') {
        let value = at
            .checked_sub(1)
            .and_then(|end| term.get(1..end))
            .ok_or_else(|| {
                ResultsParseError::malformed_term(term, "invalid language-tagged literal")
            })?;
        let language = &term[at + 1..];
        return Ok(
            Literal::new_language_tagged_literal(unescape_tsv_literal(value)?, language).into(),
        );
    }

    if term == "true" || term == "false" {
        return Ok(Literal::new_typed_literal(term, xsd::BOOLEAN.as_str()).into());
    }

    let (valid, datatype) = if !term.contains('.') {
        (is_integer(term), xsd::INTEGER)
    } else if !term.contains('e') {
        (Double::from_str(trim_whitespace(term)).is_ok(), xsd::DOUBLE)
    } else {
        (is_decimal(term), xsd::DECIMAL)
    };
    if valid {
        Ok(Literal::new_typed_literal(term, datatype.as_str()).into())
    } else {
        Err(ResultsParseError::malformed_term(term, "matches no term syntax"))
    }
}

/// Only the lexical form matters: integers beyond the 64 bits range are valid.
fn is_integer(term: &str) -> bool {
    let term = trim_whitespace(term);
    match Integer::from_str(term) {
        Ok(_) => true,
        // Overflow is reported before the remaining characters are read
        Err(error) => {
            matches!(
                error.kind(),
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
            ) && term
                .strip_prefix(['+', '-'])
                .unwrap_or(term)
                .bytes()
                .all(|b| b.is_ascii_digit())
        }
    }
}

/// Arbitrary precision decimals, with an optional exponent.
fn is_decimal(term: &str) -> bool {
    #[allow(clippy::expect_used, reason = "The regex is a constant")]
    static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
            .expect("valid decimal regex")
    });
    DECIMAL.is_match(trim_whitespace(term))
}

fn trim_whitespace(term: &str) -> &str {
    term.trim_matches([' ', '\t', '\n', '\r'])
}
