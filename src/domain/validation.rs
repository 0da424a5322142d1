//! Validation outcome types.
//!
//! A validator maps an input struct to `Ok(())` (accepted) or
//! `Err(FieldErrors)` (rejected with a field -> message mapping). All field
//! violations are collected in one pass; only the first violation per field
//! is reported, matching form display behavior.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use validator::{Validate, ValidationErrors};

/// Ordered field -> message mapping produced by a rejected validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. Later inserts for the same field are
    /// ignored; the first violation wins.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.entries.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(name, message)| (*name, message.as_str()))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .entries
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}

/// Validation with field -> message rejection semantics.
///
/// Builds on the `validator` crate's derived rules; implementors declare
/// their fields in order so that rejection output is deterministic and uses
/// wire names (`termsAccepted`, not `terms_accepted`).
pub trait ValidateFields: Validate {
    /// `(rust field name, wire field name)` pairs in declaration order.
    const FIELDS: &'static [(&'static str, &'static str)];

    /// Run all field rules, collecting the first violation per field.
    fn validate_fields(&self) -> Result<(), FieldErrors> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => Err(collect_field_errors(&errors, Self::FIELDS)),
        }
    }
}

/// Flatten `ValidationErrors` into an ordered field -> message mapping.
fn collect_field_errors(
    errors: &ValidationErrors,
    fields: &[(&'static str, &'static str)],
) -> FieldErrors {
    let by_field = errors.field_errors();
    let mut out = FieldErrors::new();

    for (rust_name, wire_name) in fields.iter().copied() {
        if let Some(violations) = by_field.get(rust_name) {
            let message = violations
                .first()
                .and_then(|v| v.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{} is invalid", wire_name));
            out.insert(wire_name, message);
        }
    }

    out
}
