// HL7 Message Tokenizer
//
// This module implements the lexical analysis for HL7 v2 messages: raw
// message text is split into segments and fields, with components and
// subcomponents split on demand.

use crate::errors::Hl7Error;

#[cfg(feature = "trace")]
use log::debug;

/// The HL7 encoding characters in force for a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub field: char,
    pub component: char,
    pub repetition: char,
    pub escape: char,
    pub subcomponent: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            field: '|',
            component: '^',
            repetition: '~',
            escape: '\\',
            subcomponent: '&',
        }
    }
}

impl Delimiters {
    /// Reads the delimiter set declared by an MSH segment line
    ///
    /// The field separator is the character directly after `MSH`, followed by
    /// the component, repetition, escape and subcomponent characters, then
    /// the field separator again closing MSH-2. Returns `None` when the line
    /// does not carry a well-formed declaration.
    pub fn from_msh(line: &str) -> Option<Self> {
        let mut chars = line.strip_prefix("MSH")?.chars();

        let field = chars.next()?;
        let component = chars.next()?;
        let repetition = chars.next()?;
        let escape = chars.next()?;
        let subcomponent = chars.next()?;

        if chars.next() != Some(field) {
            return None;
        }

        Some(Self {
            field,
            component,
            repetition,
            escape,
            subcomponent,
        })
    }
}

/// One segment of an HL7 message: an identifier plus its raw fields
///
/// Fields are 1-indexed relative to the identifier, matching the canonical
/// HL7 addressing scheme (`OBX.15` is the 15th `|`-delimited field after the
/// segment id). Components and subcomponents are split on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    id: String,
    fields: Vec<String>,
    delimiters: Delimiters,
}

impl Segment {
    /// Segment identifier, e.g. `"OBX"`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of data fields following the identifier
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Raw text of a field, 1-indexed
    ///
    /// Index 0 addresses the segment identifier itself. Indices beyond the
    /// fields the segment carries yield `None` rather than an error.
    pub fn field(&self, index: usize) -> Option<&str> {
        if index == 0 {
            return Some(&self.id);
        }
        self.fields.get(index - 1).map(String::as_str)
    }

    /// A component of a field, both indices 1-based
    ///
    /// A field without component separators is its own first component.
    /// Requesting a component the field does not carry yields `None`.
    pub fn component(&self, field: usize, component: usize) -> Option<&str> {
        if component == 0 {
            return None;
        }
        let raw = self.field(field)?;
        raw.split(self.delimiters.component).nth(component - 1)
    }

    /// A subcomponent of a component, all indices 1-based
    pub fn subcomponent(
        &self,
        field: usize,
        component: usize,
        subcomponent: usize,
    ) -> Option<&str> {
        if subcomponent == 0 {
            return None;
        }
        let raw = self.component(field, component)?;
        raw.split(self.delimiters.subcomponent).nth(subcomponent - 1)
    }
}

/// A tokenized HL7 message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    delimiters: Delimiters,
    segments: Vec<Segment>,
}

impl Message {
    /// The delimiter set the message was tokenized with
    pub fn delimiters(&self) -> Delimiters {
        self.delimiters
    }

    /// All segments, in document order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// All segments with the given identifier, in document order
    pub fn segments_by_id<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Segment> {
        self.segments.iter().filter(move |segment| segment.id == id)
    }
}

/// Tokenizes raw HL7 message text into a structured [`Message`]
///
/// Segments are separated by `\r`, `\n` or `\r\n`; blank lines are skipped.
/// Lines that do not look like HL7 segments (no field separator, or an
/// identifier that is not three ASCII uppercase alphanumerics) are skipped,
/// so one garbled line does not abort the rest of the message. The declared
/// MSH delimiter set is honored when present, otherwise the standard
/// `|^~\&` set applies. Input that yields no segments at all is an error.
pub fn tokenize(input: &str) -> Result<Message, Hl7Error> {
    if input.trim().is_empty() {
        return Err(Hl7Error::EmptyMessage);
    }

    // The first non-blank line may be an MSH declaring the encoding characters
    let delimiters = input
        .split(['\r', '\n'])
        .find(|line| !line.trim().is_empty())
        .and_then(Delimiters::from_msh)
        .unwrap_or_default();

    let mut segments = Vec::new();
    for line in input.split(['\r', '\n']) {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(segment) = parse_segment(line, delimiters) {
            segments.push(segment);
        } else {
            #[cfg(feature = "trace")]
            debug!("Skipping unparseable segment line: {}", line);
        }
    }

    if segments.is_empty() {
        return Err(Hl7Error::ParseError(
            "no recognizable HL7 segments in input".to_string(),
        ));
    }

    Ok(Message {
        delimiters,
        segments,
    })
}

/// Parses one line into a segment, or `None` when the line is not one
fn parse_segment(line: &str, delimiters: Delimiters) -> Option<Segment> {
    let (id, rest) = line.split_once(delimiters.field)?;
    if !is_segment_id(id) {
        return None;
    }

    Some(Segment {
        id: id.to_string(),
        fields: rest.split(delimiters.field).map(str::to_string).collect(),
        delimiters,
    })
}

/// Segment identifiers are exactly three ASCII uppercase alphanumerics
fn is_segment_id(id: &str) -> bool {
    id.len() == 3
        && id
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}
