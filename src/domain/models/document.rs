use serde::{Deserialize, Serialize};

/// File extensions offered by the upload picker.
/// Only a picker filter: drag & drop can still hand over anything.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[
    "pdf", "txt", "csv", "doc", "docx", "md", "html", "htm",
];

/// Document known to the backend, as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique key, shown to the user
    pub filename: String,
    /// Size in bytes
    pub size: u64,
}

/// A file picked by the user, read into memory before upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        let content_type = content_type.into();
        self.content_type = (!content_type.is_empty()).then_some(content_type);
        self
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Value for the `accept` attribute of the file input (".pdf,.txt,...")
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_attribute() {
        assert_eq!(
            accept_attribute(),
            ".pdf,.txt,.csv,.doc,.docx,.md,.html,.htm"
        );
    }

    #[test]
    fn test_document_deserialize() {
        let docs: Vec<Document> =
            serde_json::from_str(r#"[{"filename":"report.pdf","size":1536}]"#).unwrap();
        assert_eq!(docs, vec![Document { filename: "report.pdf".into(), size: 1536 }]);
    }

    #[test]
    fn test_empty_content_type_is_dropped() {
        let file = DocumentFile::new("a.txt", b"hi".to_vec()).with_content_type("");
        assert_eq!(file.content_type, None);
        assert_eq!(file.size(), 2);
    }
}
