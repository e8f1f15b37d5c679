use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use super::OAuthFlows;

/// Value stored under one fragment key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentValue {
    Text(String),
    Flows(OAuthFlows),
}

impl FragmentValue {
    /// The text value, if this is not a flows entry
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FragmentValue::Text(s) => Some(s),
            FragmentValue::Flows(_) => None,
        }
    }

    pub fn as_flows(&self) -> Option<&OAuthFlows> {
        match self {
            FragmentValue::Flows(f) => Some(f),
            FragmentValue::Text(_) => None,
        }
    }
}

impl Serialize for FragmentValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FragmentValue::Text(s) => serializer.serialize_str(s),
            FragmentValue::Flows(f) => f.serialize(serializer),
        }
    }
}

/// Ordered `components.securitySchemes` entry for one descriptor
///
/// Keys are OpenAPI field names and always appear in the order
/// `type, description, name, in, scheme, bearerFormat, flows, openIdConnectUrl`
/// (absent keys skipped). Serializing goes through `Serialize` as a map, so
/// JSON and YAML writers keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeFragment {
    entries: Vec<(&'static str, FragmentValue)>,
}

impl SchemeFragment {
    pub(crate) fn push(&mut self, key: &'static str, value: FragmentValue) {
        self.entries.push((key, value));
    }

    pub(crate) fn push_text(&mut self, key: &'static str, value: &str) {
        self.push(key, FragmentValue::Text(value.to_string()));
    }

    pub fn get(&self, key: &str) -> Option<&FragmentValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FragmentValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert to a JSON value for embedding into a larger document
    ///
    /// `serde_json::Value` objects do not preserve insertion order; serialize
    /// the fragment directly when key order matters.
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Serialize for SchemeFragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
