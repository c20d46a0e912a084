//! Per-item dynamic attributes
//!
//! An ordered string-keyed bag whose values are either a single string or a
//! list of strings. Iteration follows insertion order, which for catalogs
//! loaded from JSON is document order.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

/// Separator placed between the elements of a list value when rendered
pub const LIST_SEPARATOR: &str = "|";

/// Attribute value: scalar text or a sequence of strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    List(Vec<String>),
}

impl AttributeValue {
    /// Render as a single cell; list elements are joined with [`LIST_SEPARATOR`]
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::List(values) => Cow::Owned(values.join(LIST_SEPARATOR)),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(String::from).collect())
    }
}

/// Insertion-ordered attribute map
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: Vec<(String, AttributeValue)>,
    index: HashMap<String, usize>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. An existing key keeps its position and gets the new value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Attributes {}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (key, value) in iter {
            attributes.insert(key, value);
        }
        attributes
    }
}

// =============================================================================
// Deserialization
// =============================================================================

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AttributesVisitor)
    }
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
    type Value = Attributes;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of attribute names to values")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Attributes, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut attributes = Attributes::new();
        while let Some((key, value)) = map.next_entry::<String, AttributeValue>()? {
            attributes.insert(key, value);
        }
        Ok(attributes)
    }
}

impl<'de> Deserialize<'de> for AttributeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AttributeValueVisitor)
    }
}

struct AttributeValueVisitor;

impl<'de> Visitor<'de> for AttributeValueVisitor {
    type Value = AttributeValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean, null, or a list of those")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<AttributeValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(Scalar(value)) = seq.next_element()? {
            values.push(value);
        }
        Ok(AttributeValue::List(values))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<AttributeValue, E> {
        ScalarVisitor.visit_str(v).map(AttributeValue::Text)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<AttributeValue, E> {
        Ok(AttributeValue::Text(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<AttributeValue, E> {
        ScalarVisitor.visit_bool(v).map(AttributeValue::Text)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<AttributeValue, E> {
        ScalarVisitor.visit_i64(v).map(AttributeValue::Text)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<AttributeValue, E> {
        ScalarVisitor.visit_u64(v).map(AttributeValue::Text)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<AttributeValue, E> {
        ScalarVisitor.visit_f64(v).map(AttributeValue::Text)
    }

    fn visit_unit<E: de::Error>(self) -> Result<AttributeValue, E> {
        ScalarVisitor.visit_unit().map(AttributeValue::Text)
    }

    fn visit_none<E: de::Error>(self) -> Result<AttributeValue, E> {
        self.visit_unit()
    }
}

/// A single scalar rendered as text
struct Scalar(String);

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor).map(Scalar)
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean, or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut attrs = Attributes::new();
        attrs.insert("size", "L");
        attrs.insert("color", "blue");
        attrs.insert("material", "cotton");

        let keys: Vec<&str> = attrs.keys().collect();
        assert_eq!(keys, vec!["size", "color", "material"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut attrs = Attributes::new();
        attrs.insert("size", "L");
        attrs.insert("color", "blue");
        let previous = attrs.insert("size", "XL");

        assert_eq!(previous, Some(AttributeValue::from("L")));
        assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["size", "color"]);
        assert_eq!(attrs.get("size"), Some(&AttributeValue::from("XL")));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_render_list_joins_with_pipe() {
        let value = AttributeValue::from(vec!["red", "green", "blue"]);
        assert_eq!(value.render(), "red|green|blue");
        assert_eq!(AttributeValue::List(vec![]).render(), "");
    }

    #[test]
    fn test_deserialize_keeps_document_order() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"zeta": "1", "alpha": "2", "mid": "3"}"#).unwrap();
        assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_deserialize_value_kinds() {
        let attrs: Attributes = serde_json::from_str(
            r#"{"tags": ["a", "b"], "weight": 1.5, "stock": 12, "featured": true, "note": null}"#,
        )
        .unwrap();

        assert_eq!(
            attrs.get("tags"),
            Some(&AttributeValue::List(vec!["a".into(), "b".into()]))
        );
        assert_eq!(attrs.get("weight").unwrap().render(), "1.5");
        assert_eq!(attrs.get("stock").unwrap().render(), "12");
        assert_eq!(attrs.get("featured").unwrap().render(), "true");
        assert_eq!(attrs.get("note").unwrap().render(), "");
    }

    #[test]
    fn test_deserialize_rejects_nested_objects() {
        let result: Result<Attributes, _> = serde_json::from_str(r#"{"dims": {"w": 1}}"#);
        assert!(result.is_err());

        let result: Result<Attributes, _> = serde_json::from_str(r#"{"dims": [[1, 2]]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_iterator() {
        let attrs: Attributes = [("color", "red"), ("size", "M")].into_iter().collect();
        assert!(attrs.contains_key("color"));
        assert!(!attrs.contains_key("weight"));
    }
}
