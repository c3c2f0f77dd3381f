// OBX Result Model
//
// This module defines the result and validation types produced by the OBX
// extraction pipeline.

use serde::de::Error as SerdeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The fixed OBX addresses collected by the extractor
///
/// Each variant knows its dotted-path key (the shape used in result
/// mappings and reports) and its (field, component) address inside an OBX
/// segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObxField {
    /// OBX-15 component 1: producer/performer institution identifier
    ProducerInstitution,

    /// OBX-15 component 2: producer/performer name
    ProducerName,

    /// OBX-23 component 1: performing process identifier
    ProcessId,
}

impl ObxField {
    /// All collected fields, in canonical key order
    pub const ALL: [ObxField; 3] = [
        ObxField::ProducerInstitution,
        ObxField::ProducerName,
        ObxField::ProcessId,
    ];

    /// Dotted-path key used in result mappings and reports
    pub fn key(&self) -> &'static str {
        match self {
            ObxField::ProducerInstitution => "OBX.15.1",
            ObxField::ProducerName => "OBX.15.2",
            ObxField::ProcessId => "OBX.23.1",
        }
    }

    /// The (field, component) address inside an OBX segment, both 1-indexed
    pub fn address(&self) -> (usize, usize) {
        match self {
            ObxField::ProducerInstitution => (15, 1),
            ObxField::ProducerName => (15, 2),
            ObxField::ProcessId => (23, 1),
        }
    }

    /// Looks up a field by its dotted-path key
    pub fn from_key(key: &str) -> Option<ObxField> {
        ObxField::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for ObxField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for ObxField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for ObxField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        ObxField::from_key(&key)
            .ok_or_else(|| SerdeError::custom(format!("unknown OBX field key: {}", key)))
    }
}

/// Ordered values collected per fixed OBX address across one message
///
/// Each list holds one entry per OBX occurrence that carried that value, in
/// document order. All three lists are always present, even when empty, and
/// an occurrence lacking one value still contributes the others, so the
/// lists need not stay positionally aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObxResults {
    /// Values found at OBX.15.1
    #[serde(rename = "OBX.15.1", default)]
    pub producer_institution: Vec<String>,

    /// Values found at OBX.15.2
    #[serde(rename = "OBX.15.2", default)]
    pub producer_name: Vec<String>,

    /// Values found at OBX.23.1
    #[serde(rename = "OBX.23.1", default)]
    pub process_id: Vec<String>,
}

impl ObxResults {
    /// The collected values for one fixed address
    pub fn values(&self, field: ObxField) -> &[String] {
        match field {
            ObxField::ProducerInstitution => &self.producer_institution,
            ObxField::ProducerName => &self.producer_name,
            ObxField::ProcessId => &self.process_id,
        }
    }

    /// Appends a value to the list for the given address
    pub fn push(&mut self, field: ObxField, value: String) {
        match field {
            ObxField::ProducerInstitution => self.producer_institution.push(value),
            ObxField::ProducerName => self.producer_name.push(value),
            ObxField::ProcessId => self.process_id.push(value),
        }
    }

    /// True when the field collected at least one value
    pub fn has_values(&self, field: ObxField) -> bool {
        !self.values(field).is_empty()
    }

    /// True when no address collected any value
    pub fn is_empty(&self) -> bool {
        ObxField::ALL.into_iter().all(|field| self.values(field).is_empty())
    }

    /// Converts the result set to its canonical JSON mapping
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();

        for field in ObxField::ALL {
            let values = self
                .values(field)
                .iter()
                .cloned()
                .map(serde_json::Value::String)
                .collect();
            map.insert(field.key().to_string(), serde_json::Value::Array(values));
        }

        serde_json::Value::Object(map)
    }
}

/// Outcome of checking a result set against required OBX fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// True when every required field collected at least one value
    pub is_valid: bool,

    /// Required fields whose value lists are empty
    pub missing_fields: Vec<ObxField>,

    /// Count of required fields with at least one value
    pub total_present: usize,

    /// Count of required fields checked
    pub total_required: usize,
}
