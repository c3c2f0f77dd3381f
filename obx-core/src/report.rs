// OBX Result Report
//
// This module renders a collected result set as a human-readable report.

use crate::model::{ObxField, ObxResults};

/// Width of the report banner rule
const RULE_WIDTH: usize = 50;

/// Renders the presence report for a collected result set
///
/// Lists, for each fixed OBX address, whether any values were collected
/// and the values themselves in document order. The wording is for human
/// consumption, not a wire contract.
pub fn report(results: &ObxResults) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
    out.push_str("OBX SUBSEGMENT ANALYSIS RESULTS\n");
    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));

    for field in ObxField::ALL {
        let values = results.values(field);

        if values.is_empty() {
            out.push_str(&format!("{}: Not present\n", field.key()));
        } else {
            let noun = if values.len() == 1 { "value" } else { "values" };
            out.push_str(&format!(
                "{}: Present ({} {})\n",
                field.key(),
                values.len(),
                noun
            ));
            for value in values {
                out.push_str(&format!("    - {}\n", value));
            }
        }
    }

    out
}
