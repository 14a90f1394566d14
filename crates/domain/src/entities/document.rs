//! Historical background documents used as retrieval context.

use serde::{Deserialize, Serialize};

/// A short labeled historical text record.
///
/// Loaded once at startup and never mutated afterwards. The serialized shape
/// matches the `historical_documents.json` format (`title`, `text`, `tags`,
/// `region`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    title: String,
    text: String,
    #[serde(default)]
    tags: Vec<String>,
    region: String,
}

impl Document {
    /// Build a document. Duplicate tags are dropped, first occurrence wins.
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
        region: impl Into<String>,
    ) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for tag in tags.into_iter().map(Into::into) {
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }

        Self {
            title: title.into(),
            text: text.into(),
            tags: unique,
            region: region.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Whether a filterable field equals `expected`. For tags, any tag
    /// equal to `expected` matches.
    pub fn matches(&self, field: DocumentField, expected: &str) -> bool {
        match field {
            DocumentField::Title => self.title == expected,
            DocumentField::Text => self.text == expected,
            DocumentField::Region => self.region == expected,
            DocumentField::Tags => self.tags.iter().any(|tag| tag == expected),
        }
    }
}

/// Document fields that retrieval filters may match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentField {
    Title,
    Text,
    Region,
    Tags,
}

impl DocumentField {
    /// Parse a filter key. Keys that are not declared fields yield `None`
    /// and are skipped by the retriever.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "title" => Some(Self::Title),
            "text" => Some(Self::Text),
            "region" => Some(Self::Region),
            "tags" => Some(Self::Tags),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_tags_are_collapsed_in_order() {
        let doc = Document::new("T", "body", ["b", "a", "b"], "England");
        assert_eq!(doc.tags(), &["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn field_matching_is_exact() {
        let doc = Document::new("Title", "Body", ["x", "forest law"], "Europe");
        assert!(doc.matches(DocumentField::Title, "Title"));
        assert!(doc.matches(DocumentField::Text, "Body"));
        assert!(doc.matches(DocumentField::Region, "Europe"));
        assert!(!doc.matches(DocumentField::Region, "europe"));
    }

    #[test]
    fn tag_filter_matches_any_whole_tag() {
        let doc = Document::new("Title", "Body", ["x", "forest law"], "Europe");
        assert!(doc.matches(DocumentField::Tags, "forest law"));
        assert!(doc.matches(DocumentField::Tags, "x"));
        assert!(!doc.matches(DocumentField::Tags, "forest"));
    }

    #[test]
    fn unknown_filter_keys_are_not_fields() {
        assert_eq!(DocumentField::from_key("region"), Some(DocumentField::Region));
        assert_eq!(DocumentField::from_key("tags"), Some(DocumentField::Tags));
        assert_eq!(DocumentField::from_key("era"), None);
    }

    #[test]
    fn deserializes_original_document_shape() {
        let json = r#"{
            "title": "Medieval Taverns",
            "text": "Ale was the common drink.",
            "tags": ["tavern", "ale"],
            "region": "England"
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.title(), "Medieval Taverns");
        assert_eq!(doc.tags().len(), 2);
    }
}
