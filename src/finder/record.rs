//! Match records emitted by a scan.

use serde::Serialize;

use crate::error::Result;

/// One dictionary entry found in a buffer.
///
/// `span` is the half-open character range of the match in the scanned
/// buffer; `byte_span` is the same range in bytes, suitable for slicing.
/// `surface` is the buffer text in that range with whitespace runs collapsed
/// to single spaces. `matched` is the normalized dictionary form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchRecord<'t, M> {
    pub surface: String,
    pub span: (usize, usize),
    pub byte_span: (usize, usize),
    #[serde(rename = "match")]
    pub matched: String,
    pub meta: Option<&'t M>,
}

impl<M: Serialize> MatchRecord<'_, M> {
    /// Serialize this record as a JSON object with keys `surface`, `span`,
    /// `byte_span`, `match` and `meta`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Replace every whitespace run with one space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("drue   appelsin  rosin"), "drue appelsin rosin");
        assert_eq!(collapse_whitespace(" Norsk \n\t ØRRET "), "Norsk ØRRET");
        assert_eq!(collapse_whitespace("EPLE"), "EPLE");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_to_json() {
        let meta = "Smith".to_string();
        let record = MatchRecord {
            surface: "Smithe".to_string(),
            span: (27, 33),
            byte_span: (27, 33),
            matched: "S530".to_string(),
            meta: Some(&meta),
        };

        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(value["surface"], "Smithe");
        assert_eq!(value["match"], "S530");
        assert_eq!(value["meta"], "Smith");
        assert_eq!(value["span"], serde_json::json!([27, 33]));
    }

    #[test]
    fn test_to_json_without_meta() {
        let record: MatchRecord<'_, ()> = MatchRecord {
            surface: "EPLE".to_string(),
            span: (3, 7),
            byte_span: (3, 7),
            matched: "eple".to_string(),
            meta: None,
        };

        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert!(value["meta"].is_null());
    }
}
