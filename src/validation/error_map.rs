use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A mapping of field names to their validation error messages.
///
/// Entries keep the order in which they were first recorded, so anything
/// rendered from this map comes out in the order the validating layer
/// reported the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(String, Vec<String>)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Record one more message for a field, creating the entry on first use.
    pub fn add_error(&mut self, field: &str, message: String) {
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field.to_string(), vec![message])),
        }
    }

    /// Fold another set of errors into this one, appending messages field
    /// by field. Fields new to this map keep their position after the
    /// existing ones.
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, mut messages) in other.entries {
            match self.entries.iter_mut().find(|(name, _)| *name == field) {
                Some((_, existing)) => existing.append(&mut messages),
                None => self.entries.push((field, messages)),
            }
        }
    }

    /// The messages recorded for a field, if the field has an entry at all.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Whether the field has an entry of its own, with or without messages.
    /// Distinct from [`has_error`](Self::has_error): a field can be present
    /// but clean.
    pub fn contains_field(&self, field: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == field)
    }

    /// True when at least one message has been recorded for the field.
    /// A field with an empty entry counts as error-free, as does a field
    /// with no entry.
    pub fn has_error(&self, field: &str) -> bool {
        self.get(field).map_or(false, |messages| !messages.is_empty())
    }

    /// All messages for a field joined with `", "`, or the empty string
    /// when the field is clean. A missing field is not an error condition.
    pub fn message_for(&self, field: &str) -> String {
        match self.get(field) {
            Some(messages) if !messages.is_empty() => messages.join(", "),
            _ => String::new(),
        }
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .entries
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
            .collect::<Vec<&str>>()
            .join(", ");
        f.write_str(&joined)
    }
}

impl FromIterator<(String, Vec<String>)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ValidationErrors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ErrorMapVisitor;

        impl<'de> Visitor<'de> for ErrorMapVisitor {
            type Value = ValidationErrors;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of field names to lists of error messages")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut errors = ValidationErrors::new();
                while let Some((field, messages)) = access.next_entry::<String, Vec<String>>()? {
                    errors.entries.push((field, messages));
                }
                Ok(errors)
            }
        }

        deserializer.deserialize_map(ErrorMapVisitor)
    }
}
