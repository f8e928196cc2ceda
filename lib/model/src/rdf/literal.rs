use crate::{escape_for_query, Iri, TermConversionError};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// A literal with an optional datatype and an optional language tag.
///
/// Endpoints are expected to set at most one of both, but a literal carrying a datatype *and* a
/// language tag is kept as is. Neither is validated.
///
/// The canonical form is the escaped value followed by `^^<datatype>` or, if there is no
/// datatype, by `@language`. It is computed on first use and cached.
#[derive(Clone)]
pub struct Literal {
    value: String,
    datatype: Option<String>,
    language: Option<String>,
    canonical: OnceLock<String>,
}

impl Literal {
    pub fn new(
        value: impl Into<String>,
        datatype: Option<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            value: value.into(),
            datatype,
            language,
            canonical: OnceLock::new(),
        }
    }

    /// Builds a literal with neither datatype nor language tag.
    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        Self::new(value, None, None)
    }

    pub fn new_typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::new(value, Some(datatype.into()), None)
    }

    pub fn new_language_tagged_literal(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self::new(value, None, Some(language.into()))
    }

    /// The lexical value, already unescaped.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn canonical_str(&self) -> &str {
        self.canonical.get_or_init(|| {
            let escaped = escape_for_query(&self.value);
            match (&self.datatype, &self.language) {
                (Some(datatype), _) => format!("{escaped}^^<{datatype}>"),
                (None, Some(language)) => format!("{escaped}@{language}"),
                (None, None) => escaped,
            }
        })
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.datatype == other.datatype
            && self.language == other.language
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.datatype.hash(state);
        self.language.hash(state);
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Literal")
            .field("value", &self.value)
            .field("datatype", &self.datatype)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_str())
    }
}

impl TryFrom<Literal> for oxrdf::Literal {
    type Error = TermConversionError;

    /// The datatype wins over the language tag if both are set.
    fn try_from(value: Literal) -> Result<Self, Self::Error> {
        match (value.datatype, value.language) {
            (Some(datatype), _) => Ok(oxrdf::Literal::new_typed_literal(
                value.value,
                oxrdf::NamedNode::try_from(Iri::new(datatype))?,
            )),
            (None, Some(language)) => {
                oxrdf::Literal::new_language_tagged_literal(value.value, language.clone())
                    .map_err(|error| TermConversionError::LanguageTag { language, error })
            }
            (None, None) => Ok(oxrdf::Literal::new_simple_literal(value.value)),
        }
    }
}
