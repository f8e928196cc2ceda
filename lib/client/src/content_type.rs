use sparql_client_results::{QueryResultsFormat, RdfGraphFormat};

/// The parsed `Content-Type` header of an endpoint response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    mime_type: String,
    charset: Option<String>,
    raw: String,
}

impl ContentType {
    /// Parses a `Content-Type` header value.
    ///
    /// The media type is lower-cased and trimmed. A missing or blank header is read as
    /// `application/sparql-results+xml`.
    ///
    /// ```
    /// use sparql_client::ContentType;
    ///
    /// let content_type = ContentType::parse(Some("Text/Tab-Separated-Values ; Charset=UTF-8"));
    /// assert_eq!(content_type.mime_type(), "text/tab-separated-values");
    /// assert_eq!(content_type.charset(), Some("utf-8"));
    /// ```
    pub fn parse(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Self::default();
        };
        let mut parts = header.split(';');
        let mime_type = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
        if mime_type.is_empty() {
            return Self::default();
        }
        let charset = parts.find_map(|parameter| {
            let (key, value) = parameter.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().to_ascii_lowercase())
        });
        Self {
            mime_type,
            charset,
            raw: header.to_owned(),
        }
    }

    /// The lower-cased media type, without parameters.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn charset(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// The header as received, or the default media type if there was none.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn results_format(&self) -> Option<QueryResultsFormat> {
        QueryResultsFormat::from_media_type(&self.mime_type)
    }

    pub fn graph_format(&self) -> Option<RdfGraphFormat> {
        RdfGraphFormat::from_media_type(&self.mime_type)
    }

    /// Is it a media type a SPARQL endpoint is expected to answer with?
    pub fn is_known(&self) -> bool {
        self.results_format().is_some() || self.graph_format().is_some()
    }
}

impl Default for ContentType {
    fn default() -> Self {
        let mime_type = QueryResultsFormat::Xml.media_type();
        Self {
            mime_type: mime_type.to_owned(),
            charset: None,
            raw: mime_type.to_owned(),
        }
    }
}

/// The body of an endpoint response with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparqlResponse {
    pub body: String,
    pub content_type: ContentType,
}
