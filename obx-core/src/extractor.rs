// OBX Field Extractor
//
// This module walks the OBX segments of a tokenized message and collects
// the producer and process identifier components.

use crate::model::{ObxField, ObxResults};
use crate::tokenizer::Message;

#[cfg(feature = "trace")]
use log::trace;

/// Segment identifier for observation results
const OBX: &str = "OBX";

/// Collects the fixed OBX addresses from every OBX segment of a message
///
/// Values are appended in document order, without reordering or
/// deduplication. An occurrence whose addressed field or component is
/// missing or empty contributes nothing for that address. A message without
/// OBX segments yields all three lists empty. Runs in a single pass over
/// the segments.
pub fn extract(message: &Message) -> ObxResults {
    let mut results = ObxResults::default();

    for segment in message.segments_by_id(OBX) {
        for field in ObxField::ALL {
            let (index, component) = field.address();

            if let Some(value) = segment.component(index, component) {
                if !value.is_empty() {
                    #[cfg(feature = "trace")]
                    trace!("Collected {} value: {}", field.key(), value);

                    results.push(field, value.to_string());
                }
            }
        }
    }

    results
}
