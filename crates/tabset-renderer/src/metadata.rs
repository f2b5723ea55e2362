//! Tab title metadata.
//!
//! The first line of a `tab` directive is either a bare title or a
//! single-line JSON record:
//!
//! ```text
//! ::: tab Unix
//! ::: tab {"tab_name": "Custom", "tab_id": "c1", "classes": ["x"]}
//! ```

use serde::Deserialize;

use crate::error::TabsError;

/// Structured tab record. Keys other than these are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TabRecord {
    /// Display title.
    pub tab_name: String,
    /// Explicit id; must be unique within its tabs block.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub tab_id: Option<String>,
    /// Extra panel classes, in order.
    #[serde(default)]
    pub classes: Vec<String>,
}

/// Decoded tab first line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TabTitle {
    /// Plain title text.
    Bare(String),
    /// JSON record.
    Structured(TabRecord),
}

impl TabTitle {
    /// Decode a first line.
    ///
    /// A line starting with `{` must be a valid record with a non-empty
    /// `tab_name`; anything else is a bare title.
    ///
    /// # Errors
    ///
    /// Returns [`TabsError::MalformedMetadata`] if the record does not decode.
    pub fn parse(line: &str) -> Result<Self, TabsError> {
        let line = line.trim();
        if !line.starts_with('{') {
            return Ok(Self::Bare(line.to_owned()));
        }

        let record: TabRecord =
            serde_json::from_str(line).map_err(|e| TabsError::MalformedMetadata {
                reason: e.to_string(),
            })?;
        if record.tab_name.trim().is_empty() {
            return Err(TabsError::MalformedMetadata {
                reason: "tab_name cannot be empty".to_owned(),
            });
        }
        Ok(Self::Structured(record))
    }
}

/// Accept ids written as strings or integers.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|id| match id {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bare_title() {
        assert_eq!(
            TabTitle::parse("Unix").unwrap(),
            TabTitle::Bare("Unix".to_owned())
        );
    }

    #[test]
    fn test_multi_word_bare_title() {
        let title = TabTitle::parse("  Mac OS X ").unwrap();
        assert_eq!(title, TabTitle::Bare("Mac OS X".to_owned()));
    }

    #[test]
    fn test_structured_record() {
        let title =
            TabTitle::parse(r#"{"tab_name": "Custom", "tab_id": "c1", "classes": ["x"]}"#).unwrap();
        assert_eq!(
            title,
            TabTitle::Structured(TabRecord {
                tab_name: "Custom".to_owned(),
                tab_id: Some("c1".to_owned()),
                classes: vec!["x".to_owned()],
            })
        );
    }

    #[test]
    fn test_structured_optional_fields() {
        let title = TabTitle::parse(r#"{"tab_name": "Only name"}"#).unwrap();
        let TabTitle::Structured(record) = title else {
            panic!("expected structured record");
        };
        assert_eq!(record.tab_id, None);
        assert!(record.classes.is_empty());
    }

    #[test]
    fn test_numeric_id() {
        let TabTitle::Structured(record) =
            TabTitle::parse(r#"{"tab_name": "N", "tab_id": 7}"#).unwrap()
        else {
            panic!("expected structured record");
        };
        assert_eq!(record.tab_id.as_deref(), Some("7"));
    }

    #[test]
    fn test_missing_tab_name() {
        let err = TabTitle::parse(r#"{"tab_id": "c1"}"#).unwrap_err();
        assert!(matches!(err, TabsError::MalformedMetadata { .. }));
        assert!(err.to_string().contains("tab_name"));
    }

    #[test]
    fn test_empty_tab_name() {
        let err = TabTitle::parse(r#"{"tab_name": "  "}"#).unwrap_err();
        assert!(matches!(err, TabsError::MalformedMetadata { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = TabTitle::parse(r#"{"tab_name": "x""#).unwrap_err();
        assert!(matches!(err, TabsError::MalformedMetadata { .. }));
    }

    #[test]
    fn test_extra_keys_ignored() {
        let title = TabTitle::parse(r#"{"tab_name": "x", "colour": "red", "tab_id": "c"}"#).unwrap();
        assert_eq!(
            title,
            TabTitle::Structured(TabRecord {
                tab_name: "x".to_owned(),
                tab_id: Some("c".to_owned()),
                classes: Vec::new(),
            })
        );
    }
}
