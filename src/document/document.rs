//! Document structure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A document: an identifier and a collection of named text fields.
///
/// What gets indexed are normalized versions of the fields. The raw fields
/// are kept here to preserve the original presentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    document_id: u32,
    fields: HashMap<String, String>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(document_id: u32) -> Self {
        Document {
            document_id,
            fields: HashMap::new(),
        }
    }

    /// Create a builder for constructing documents.
    pub fn builder(document_id: u32) -> DocumentBuilder {
        DocumentBuilder::new(document_id)
    }

    /// The document's unique identifier.
    pub fn document_id(&self) -> u32 {
        self.document_id
    }

    /// Set a field value.
    pub fn set_field<S: Into<String>, T: Into<String>>(&mut self, name: S, value: T) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field value.
    pub fn get_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|s| s.as_str())
    }

    /// Get a field value, or `default` if the document lacks the field.
    pub fn get_field_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get_field(name).unwrap_or(default)
    }

    /// Get all field names.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// The named fields joined by single spaces. Missing fields count as empty.
    pub fn joined_fields(&self, names: &[&str]) -> String {
        names
            .iter()
            .map(|name| self.get_field_or(name, ""))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Serialize this document as JSON.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new(document_id: u32) -> Self {
        DocumentBuilder {
            document: Document::new(document_id),
        }
    }

    /// Add a text field to the document.
    pub fn add_text<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.document.set_field(name, value);
        self
    }

    /// Build the document.
    pub fn build(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_fields() {
        let document = Document::builder(7)
            .add_text("title", "Frukt")
            .add_text("body", "eple og drue")
            .build();

        assert_eq!(document.document_id(), 7);
        assert_eq!(document.get_field("title"), Some("Frukt"));
        assert_eq!(document.get_field("missing"), None);
        assert_eq!(document.get_field_or("missing", "-"), "-");

        let mut names = document.field_names();
        names.sort();
        assert_eq!(names, vec!["body", "title"]);
    }

    #[test]
    fn test_joined_fields() {
        let document = Document::builder(0)
            .add_text("a", "This subject is")
            .add_text("b", "Great")
            .build();

        assert_eq!(document.joined_fields(&["a", "b"]), "This subject is Great");
        assert_eq!(document.joined_fields(&["b", "c"]), "Great ");
    }

    #[test]
    fn test_json_roundtrip() {
        let document = Document::builder(3).add_text("body", "hei").build();
        let parsed: Document = serde_json::from_str(&document.to_json().unwrap()).unwrap();
        assert_eq!(parsed, document);
    }
}
