// HL7 Parse Error Types
//
// This module defines the error types used throughout the OBX parser.

use thiserror::Error;

/// Errors that can occur while parsing an HL7 message
///
/// Only structural failure is surfaced as an error: input from which no
/// segment at all can be recovered. Garbled individual lines are skipped
/// during tokenization, and absent fields or components are modeled as
/// `None`, so the common missing-data case stays error-free.
#[derive(Error, Debug)]
pub enum Hl7Error {
    /// Input was empty or contained only whitespace
    #[error("Empty HL7 message")]
    EmptyMessage,

    /// Input yielded no recognizable segment structure
    #[error("Parse error: {0}")]
    ParseError(String),
}
