//! Document descriptor view types.
//!
//! A descriptor is owned by the surrounding chat state. Components only read
//! it and recompute their output on every render.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PreviewError, Result};

/// File type of a previewed document.
///
/// The four known types get dedicated icons. Anything else arriving over the
/// wire is kept verbatim in `Other` so the card can still render.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentFileType {
    Csv,
    Pdf,
    Docx,
    Txt,
    Other(String),
}

impl DocumentFileType {
    /// Parse a raw type string. The empty string means "no type".
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            None
        } else {
            Some(Self::from(raw))
        }
    }

    /// Lowercase wire name, or the raw string for unrecognized types.
    pub fn label(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
            Self::Other(raw) => raw,
        }
    }

    /// Uppercased label used in headings ("PDF", "DOCX").
    pub fn upper_label(&self) -> String {
        self.label().to_uppercase()
    }

    /// Whether this is one of the four recognized types.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// An empty raw type, which renders as if no type were given.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Other(raw) if raw.is_empty())
    }
}

impl From<&str> for DocumentFileType {
    fn from(raw: &str) -> Self {
        match raw {
            "csv" => Self::Csv,
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "txt" => Self::Txt,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for DocumentFileType {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<DocumentFileType> for String {
    fn from(file_type: DocumentFileType) -> Self {
        file_type.label().to_string()
    }
}

impl fmt::Display for DocumentFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extra metadata attached to a document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// External document identifiers, in display order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refs: Option<Vec<String>>,
}

/// A document attached to a chat message or composer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    pub filename: String,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesize: Option<u64>,
    #[serde(
        default,
        deserialize_with = "deserialize_file_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub filetype: Option<DocumentFileType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,
}

impl DocumentDescriptor {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, bytes: u64) -> Self {
        self.filesize = Some(bytes);
        self
    }

    pub fn with_type(mut self, file_type: DocumentFileType) -> Self {
        self.filetype = Some(file_type).filter(|t| !t.is_empty());
        self
    }

    /// The file type, treating an empty raw type as absent.
    pub fn file_type(&self) -> Option<&DocumentFileType> {
        self.filetype.as_ref().filter(|t| !t.is_empty())
    }

    pub fn with_refs<I, S>(mut self, refs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata = Some(DocumentMetadata {
            refs: Some(refs.into_iter().map(Into::into).collect()),
        });
        self
    }

    /// Reference identifiers, only when present and non-empty.
    pub fn refs(&self) -> Option<&[String]> {
        self.metadata
            .as_ref()
            .and_then(|m| m.refs.as_deref())
            .filter(|refs| !refs.is_empty())
    }

    /// True when the document is already resolved to external references.
    pub fn has_refs(&self) -> bool {
        self.refs().is_some()
    }

    /// References joined with ", " in their original order.
    pub fn joined_refs(&self) -> Option<String> {
        self.refs().map(|refs| refs.join(", "))
    }

    /// The subset of fields the card renders.
    pub fn card_file(&self) -> CardFile {
        CardFile {
            filename: self.filename.clone(),
            filesize: self.filesize,
            filetype: self.filetype.clone(),
        }
    }

    /// Decode a single descriptor from chat JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let descriptor: Self = serde_json::from_str(json)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Decode a JSON array of descriptors.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let descriptors: Vec<Self> = serde_json::from_str(json)?;
        for descriptor in &descriptors {
            descriptor.validate()?;
        }
        Ok(descriptors)
    }

    fn validate(&self) -> Result<()> {
        if self.filename.is_empty() {
            return Err(PreviewError::EmptyFilename);
        }
        if let Some(file_type) = self.filetype.as_ref().filter(|t| !t.is_known()) {
            tracing::warn!(
                filename = %self.filename,
                filetype = %file_type,
                "unrecognized document type, using default icon"
            );
        }
        Ok(())
    }
}

/// Card-facing view of a document: name, size and type only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardFile {
    pub filename: String,
    pub filesize: Option<u64>,
    pub filetype: Option<DocumentFileType>,
}

impl CardFile {
    /// The file type, treating an empty raw type as absent.
    pub fn file_type(&self) -> Option<&DocumentFileType> {
        self.filetype.as_ref().filter(|t| !t.is_empty())
    }
}

impl From<&DocumentDescriptor> for CardFile {
    fn from(descriptor: &DocumentDescriptor) -> Self {
        descriptor.card_file()
    }
}

fn deserialize_file_type<'de, D>(deserializer: D) -> std::result::Result<Option<DocumentFileType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(DocumentFileType::parse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(DocumentFileType::parse("csv"), Some(DocumentFileType::Csv));
        assert_eq!(DocumentFileType::parse("pdf"), Some(DocumentFileType::Pdf));
        assert_eq!(DocumentFileType::parse("docx"), Some(DocumentFileType::Docx));
        assert_eq!(DocumentFileType::parse("txt"), Some(DocumentFileType::Txt));
    }

    #[test]
    fn test_parse_unknown_and_empty() {
        assert_eq!(
            DocumentFileType::parse("xlsx"),
            Some(DocumentFileType::Other("xlsx".into()))
        );
        assert_eq!(DocumentFileType::parse(""), None);
    }

    #[test]
    fn test_empty_type_is_absent() {
        let empty = DocumentFileType::from("");
        assert!(empty.is_empty());
        assert!(!DocumentFileType::Txt.is_empty());

        let doc = DocumentDescriptor::new("a").with_type(DocumentFileType::from(""));
        assert_eq!(doc.filetype, None);

        let doc = DocumentDescriptor {
            filetype: Some(DocumentFileType::Other(String::new())),
            ..DocumentDescriptor::new("a")
        };
        assert_eq!(doc.file_type(), None);
        assert_eq!(doc.card_file().file_type(), None);
    }

    #[test]
    fn test_upper_label() {
        assert_eq!(DocumentFileType::Docx.upper_label(), "DOCX");
        assert_eq!(DocumentFileType::Other("md".into()).upper_label(), "MD");
    }

    #[test]
    fn test_refs_empty_is_absent() {
        let doc = DocumentDescriptor::new("a.txt").with_refs(Vec::<String>::new());
        assert!(!doc.has_refs());
        assert_eq!(doc.joined_refs(), None);

        let doc = DocumentDescriptor {
            metadata: Some(DocumentMetadata { refs: None }),
            ..DocumentDescriptor::new("a.txt")
        };
        assert!(!doc.has_refs());
    }

    #[test]
    fn test_joined_refs_keeps_order() {
        let doc = DocumentDescriptor::new("a.txt").with_refs(["z", "a", "m"]);
        assert_eq!(doc.joined_refs().as_deref(), Some("z, a, m"));
    }

    #[test]
    fn test_from_json_wire_shape() {
        let doc = DocumentDescriptor::from_json(
            r#"{"filename":"report.pdf","filesize":204800,"filetype":"pdf","metadata":{"refs":["a","b"]}}"#,
        )
        .unwrap();
        assert_eq!(doc.filename, "report.pdf");
        assert_eq!(doc.filesize, Some(204800));
        assert_eq!(doc.filetype, Some(DocumentFileType::Pdf));
        assert_eq!(doc.refs().map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_from_json_degrades_filetype() {
        let doc = DocumentDescriptor::from_json(r#"{"filename":"x","filetype":""}"#).unwrap();
        assert_eq!(doc.filetype, None);

        let doc = DocumentDescriptor::from_json(r#"{"filename":"x","filetype":"PDF"}"#).unwrap();
        assert_eq!(doc.filetype, Some(DocumentFileType::Other("PDF".into())));

        let doc = DocumentDescriptor::from_json(r#"{"filename":"x","filetype":null}"#).unwrap();
        assert_eq!(doc.filetype, None);
    }

    #[test]
    fn test_from_json_rejects_empty_filename() {
        let err = DocumentDescriptor::from_json(r#"{"filename":""}"#).unwrap_err();
        assert!(matches!(err, PreviewError::EmptyFilename));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = DocumentDescriptor::from_json("{").unwrap_err();
        assert!(matches!(err, PreviewError::Decode(_)));
    }

    #[test]
    fn test_serialize_round_trip_shape() {
        let doc = DocumentDescriptor::new("notes.txt").with_type(DocumentFileType::Txt);
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(json, r#"{"filename":"notes.txt","filetype":"txt"}"#);
    }
}
