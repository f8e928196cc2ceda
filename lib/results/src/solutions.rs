use crate::tsv::TsvRows;
use crate::ResultsParseError;
use sparql_client_model::Row;
use std::slice;

/// The solutions of a `SELECT` query: the declared variables (the head) and the rows.
///
/// The head may list variables that are never bound in any row.
///
/// Rows are either materialized up front (XML results) or kept as the unparsed response body
/// (TSV results). In the latter case every call to [`ResultSet::rows`] starts a new cursor at the
/// first data line that parses one line per call to [`Iterator::next`].
#[derive(Debug, Clone)]
pub struct ResultSet {
    variables: Vec<String>,
    rows: RowSource,
}

#[derive(Debug, Clone)]
enum RowSource {
    Materialized(Vec<Row>),
    Tsv { body: String, data_start: usize },
}

impl ResultSet {
    /// Builds a result set from already parsed rows.
    pub fn new(variables: Vec<String>, rows: Vec<Row>) -> Self {
        Self {
            variables,
            rows: RowSource::Materialized(rows),
        }
    }

    /// Builds a result set whose rows are the lines of `body` starting at byte `data_start`.
    pub(crate) fn from_tsv(variables: Vec<String>, body: String, data_start: usize) -> Self {
        Self {
            variables,
            rows: RowSource::Tsv { body, data_start },
        }
    }

    /// The declared variables, in column order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Returns a new forward-only cursor over the rows.
    ///
    /// A row that fails to parse is returned as an error, but the cursor has already moved past
    /// it: calling `next` again continues with the following row.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            inner: match &self.rows {
                RowSource::Materialized(rows) => RowsInner::Materialized(rows.iter()),
                RowSource::Tsv { body, data_start } => RowsInner::Tsv(TsvRows::new(
                    body.get(*data_start..).unwrap_or_default(),
                    &self.variables,
                )),
            },
        }
    }

    /// Parses all the rows, failing on the first row that does not parse.
    pub fn collect_rows(&self) -> Result<Vec<Row>, ResultsParseError> {
        self.rows().collect()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = Result<Row, ResultsParseError>;
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}

/// A cursor over the rows of a [`ResultSet`].
pub struct Rows<'a> {
    inner: RowsInner<'a>,
}

enum RowsInner<'a> {
    Materialized(slice::Iter<'a, Row>),
    Tsv(TsvRows<'a>),
}

impl Iterator for Rows<'_> {
    type Item = Result<Row, ResultsParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            RowsInner::Materialized(rows) => rows.next().cloned().map(Ok),
            RowsInner::Tsv(rows) => rows.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            RowsInner::Materialized(rows) => rows.size_hint(),
            RowsInner::Tsv(rows) => rows.size_hint(),
        }
    }
}
