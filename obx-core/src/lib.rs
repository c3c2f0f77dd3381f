// HL7 OBX Core Implementation
//
// This crate provides tokenization of HL7 v2 pipe-delimited messages and
// extraction and validation of the OBX producer and process identifier
// subsegments.

pub mod errors;
pub mod extractor;
pub mod model;
pub mod report;
pub mod tokenizer;
pub mod validator;

/// Version of the HL7 v2 standard the fixed field addresses follow
pub const HL7_VERSION: &str = "2.5.1";

// Re-export the main types for public use
pub use errors::Hl7Error;
pub use model::{ObxField, ObxResults, ValidationSummary};
pub use report::report;
pub use validator::validate;

/// Parses an HL7 message and collects the fixed OBX addresses
///
/// This is the composed tokenize-then-extract pipeline. It fails only when
/// the input has no recognizable segment structure at all; a well-formed
/// message without OBX segments yields all three result lists empty.
pub fn parse(message: &str) -> Result<ObxResults, Hl7Error> {
    let tokenized = tokenizer::tokenize(message)?;

    Ok(extractor::extract(&tokenized))
}
