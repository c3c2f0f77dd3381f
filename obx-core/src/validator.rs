// OBX Requirement Validator
//
// This module checks a collected result set against a configurable set of
// required OBX fields.

use crate::model::{ObxField, ObxResults, ValidationSummary};

/// Checks that every required OBX field collected at least one value
///
/// When `required` is `None` all three fixed fields are required. A field
/// is present when its value list is non-empty; fields outside the required
/// set are not inspected. An empty required set is vacuously valid.
pub fn validate(results: &ObxResults, required: Option<&[ObxField]>) -> ValidationSummary {
    let required = required.unwrap_or(&ObxField::ALL);

    let missing_fields: Vec<ObxField> = required
        .iter()
        .copied()
        .filter(|field| !results.has_values(*field))
        .collect();

    let total_required = required.len();
    let total_present = total_required - missing_fields.len();

    ValidationSummary {
        is_valid: missing_fields.is_empty(),
        missing_fields,
        total_present,
        total_required,
    }
}
