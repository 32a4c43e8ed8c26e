//! Metadata types

use std::fmt;

/// A single metadata value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    /// Rendered verbatim
    String(String),

    /// Rendered as `["a", "b"]`
    Array(Vec<MetadataValue>),

    /// Rendered as `["key": "value"]`
    Dictionary(Metadata),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::String(s) => f.write_str(s),
            MetadataValue::Array(values) => {
                let items: Vec<String> = values
                    .iter()
                    .map(|v| format!("{:?}", v.to_string()))
                    .collect();
                write!(f, "[{}]", items.join(", "))
            }
            MetadataValue::Dictionary(map) => {
                if map.is_empty() {
                    return f.write_str("[:]");
                }
                let items: Vec<String> = map
                    .iter()
                    .map(|(k, v)| format!("{:?}: {:?}", k, v.to_string()))
                    .collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::String(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::String(value.to_string())
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for MetadataValue {
                fn from(value: $ty) -> Self {
                    MetadataValue::String(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: Into<MetadataValue>> From<Vec<T>> for MetadataValue {
    fn from(values: Vec<T>) -> Self {
        MetadataValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<Metadata> for MetadataValue {
    fn from(map: Metadata) -> Self {
        MetadataValue::Dictionary(map)
    }
}

impl From<serde_json::Value> for MetadataValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(s) => MetadataValue::String(s),
            Value::Array(items) => {
                MetadataValue::Array(items.into_iter().map(MetadataValue::from).collect())
            }
            Value::Object(map) => MetadataValue::Dictionary(
                map.into_iter()
                    .map(|(k, v)| (k, MetadataValue::from(v)))
                    .collect(),
            ),
            other => MetadataValue::String(other.to_string()),
        }
    }
}

/// Insertion-ordered metadata mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, MetadataValue)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value, returning the previous one.
    /// A replaced key keeps its original position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Option<MetadataValue> {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<MetadataValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as `key = value` pairs joined by a single space, `None` when empty
    pub fn render(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let pairs: Vec<String> = self
            .entries
            .iter()
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        Some(pairs.join(" "))
    }
}

impl<K: Into<String>, V: Into<MetadataValue>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Metadata::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<MetadataValue>> Extend<(K, V)> for Metadata {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Metadata {
    type Item = (String, MetadataValue);
    type IntoIter = std::vec::IntoIter<(String, MetadataValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
