use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Page value used by the backend when a source has no page number
pub const NO_PAGE: &str = "N/A";

/// Who authored a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Document passage cited by an assistant answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default = "unknown_source")]
    pub source: String,
    #[serde(default = "no_page", deserialize_with = "page_as_string")]
    pub page: String,
}

impl Source {
    pub fn new(source: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            page: page.into(),
        }
    }

    pub fn has_page(&self) -> bool {
        self.page != NO_PAGE
    }
}

fn unknown_source() -> String {
    "Unknown".to_string()
}

fn no_page() -> String {
    NO_PAGE.to_string()
}

/// The backend sends pages either as numbers or as strings
fn page_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Page {
        Text(String),
        Number(serde_json::Number),
        Missing(()),
    }

    Ok(match Page::deserialize(deserializer)? {
        Page::Text(text) => text,
        Page::Number(number) => number.to_string(),
        Page::Missing(()) => no_page(),
    })
}

/// One turn of the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: content.into(),
            sources,
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Body of the question endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub content: String,
}

/// Answer returned by the question endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Option<Vec<Source>>,
}

impl AskResponse {
    /// Turn the answer into an assistant message; missing sources become empty
    pub fn into_message(self) -> ChatMessage {
        ChatMessage::assistant(self.answer, self.sources.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_accepts_numbers_and_strings() {
        let sources: Vec<Source> = serde_json::from_str(
            r#"[{"source":"a.pdf","page":3},{"source":"b.txt","page":"N/A"},{"source":"c.md"}]"#,
        )
        .unwrap();

        assert_eq!(sources[0].page, "3");
        assert!(sources[0].has_page());
        assert!(!sources[1].has_page());
        assert_eq!(sources[2].page, NO_PAGE);
    }

    #[test]
    fn test_null_page_is_sentinel() {
        let source: Source = serde_json::from_str(r#"{"source":"a.pdf","page":null}"#).unwrap();
        assert_eq!(source.page, NO_PAGE);
    }

    #[test]
    fn test_missing_source_name() {
        let source: Source = serde_json::from_str(r#"{"page":1}"#).unwrap();
        assert_eq!(source.source, "Unknown");
    }

    #[test]
    fn test_answer_without_sources() {
        let response: AskResponse = serde_json::from_str(r#"{"answer":"42"}"#).unwrap();
        let message = response.into_message();
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.content, "42");
        assert!(message.sources.is_empty());

        let response: AskResponse =
            serde_json::from_str(r#"{"answer":"42","sources":null}"#).unwrap();
        assert!(response.into_message().sources.is_empty());
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), r#""assistant""#);
    }
}
