use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Per-identifier rejection reasons, keyed by credential field.
pub type ErrorMap = HashMap<String, String>;

/// Credentials presented by a caller.
///
/// An opaque field -> value mapping. The chain never interprets the fields;
/// each identifier picks the ones it understands.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Credentials {
    fields: HashMap<String, Value>,
}

impl Credentials {
    /// Create an empty credential set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field (builder style).
    ///
    /// Values that cannot be represented as JSON are skipped.
    pub fn with(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.fields.insert(key.to_string(), json_value);
        }
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl ToString, value: Value) -> Option<Value> {
        self.fields.insert(key.to_string(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get a field as a string slice (convenience method).
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: ToString> FromIterator<(K, Value)> for Credentials {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }
}

/// Identity resolved by a successful identifier.
///
/// Opaque to the chain: whatever the identifier returns is handed back to
/// the caller untouched. An empty identity is still a successful one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Identity {
    attributes: HashMap<String, Value>,
}

impl Identity {
    /// Create an identity without attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute (builder style).
    pub fn with(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.attributes.insert(key.to_string(), json_value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Get an attribute as a string slice (convenience method).
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(|v| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Consume the identity and return its raw attributes.
    pub fn into_inner(self) -> HashMap<String, Value> {
        self.attributes
    }
}

impl From<HashMap<String, Value>> for Identity {
    fn from(attributes: HashMap<String, Value>) -> Self {
        Self { attributes }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_credentials_builder() {
        let credentials = Credentials::new()
            .with("username", "alice")
            .with("password", "secret")
            .with("remember", true);

        assert_eq!(credentials.len(), 3);
        assert_eq!(credentials.get_str("username"), Some("alice"));
        assert_eq!(credentials.get("remember"), Some(&json!(true)));
        assert!(credentials.get_str("remember").is_none());
        assert!(!credentials.contains("token"));
    }

    #[test]
    fn test_credentials_keys_are_unique() {
        let mut credentials = Credentials::new().with("token", "first");
        let previous = credentials.insert("token", json!("second"));

        assert_eq!(previous, Some(json!("first")));
        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials.get_str("token"), Some("second"));
    }

    #[test]
    fn test_credentials_deserialize_from_json_object() {
        let credentials: Credentials =
            serde_json::from_value(json!({ "api_key": "abc", "scope": ["read"] }))
                .expect("Failed to deserialize credentials");

        assert_eq!(credentials.get_str("api_key"), Some("abc"));
        assert_eq!(credentials.get("scope"), Some(&json!(["read"])));
    }

    #[test]
    fn test_empty_identity() {
        let identity = Identity::new();
        assert!(identity.is_empty());
        assert!(identity.into_inner().is_empty());
    }

    #[test]
    fn test_identity_attributes() {
        let identity = Identity::new().with("id", 42).with("role", "admin");

        assert_eq!(identity.get("id"), Some(&json!(42)));
        assert_eq!(identity.get_str("role"), Some("admin"));
        assert_eq!(
            serde_json::to_value(&identity).expect("Failed to serialize identity"),
            json!({ "id": 42, "role": "admin" })
        );
    }
}
