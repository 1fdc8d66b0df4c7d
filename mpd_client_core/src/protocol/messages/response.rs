//! Response shapes and reply decoding
//!
//! MPD reply bodies come in four shapes, selected per command by the
//! catalog: opaque text, a flat list of values, a single key/value map, or
//! an ordered list of key/value records. The shape is a closed enum and the
//! parser matches it exhaustively, so a shape the parser does not understand
//! cannot be requested.

use std::collections::HashMap;

use crate::protocol::error::{ProtocolError, Result};
use crate::protocol::messages::PAIR_SEPARATOR;

/// The decoding requested for a reply body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Keep every raw line, joined by newlines
    Line,
    /// Positional values of `KEY: VALUE` lines, keys discarded
    List,
    /// Single key/value map, last occurrence wins on duplicate keys
    Map,
    /// Ordered records; a new record starts when a key repeats
    RecordList,
}

/// One key/value group within a `RecordList` reply
pub type Record = HashMap<String, String>;

/// A decoded reply body
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Raw text (`Line` shape)
    Text(String),
    /// Positional values (`List` shape)
    Values(Vec<String>),
    /// Key/value map (`Map` shape)
    Map(Record),
    /// Ordered records (`RecordList` shape)
    Records(Vec<Record>),
}

impl Reply {
    /// The shape this reply was decoded with
    pub fn shape(&self) -> ResponseShape {
        match self {
            Reply::Text(_) => ResponseShape::Line,
            Reply::Values(_) => ResponseShape::List,
            Reply::Map(_) => ResponseShape::Map,
            Reply::Records(_) => ResponseShape::RecordList,
        }
    }

    fn shape_name(&self) -> &'static str {
        match self {
            Reply::Text(_) => "text",
            Reply::Values(_) => "list",
            Reply::Map(_) => "map",
            Reply::Records(_) => "record list",
        }
    }

    /// Extract the raw text of a `Line` reply
    pub fn into_text(self) -> Result<String> {
        match self {
            Reply::Text(text) => Ok(text),
            other => Err(ProtocolError::unexpected_reply("text", other.shape_name())),
        }
    }

    /// Extract the values of a `List` reply
    pub fn into_values(self) -> Result<Vec<String>> {
        match self {
            Reply::Values(values) => Ok(values),
            other => Err(ProtocolError::unexpected_reply("list", other.shape_name())),
        }
    }

    /// Extract the map of a `Map` reply
    pub fn into_map(self) -> Result<Record> {
        match self {
            Reply::Map(map) => Ok(map),
            other => Err(ProtocolError::unexpected_reply("map", other.shape_name())),
        }
    }

    /// Extract the records of a `RecordList` reply
    pub fn into_records(self) -> Result<Vec<Record>> {
        match self {
            Reply::Records(records) => Ok(records),
            other => Err(ProtocolError::unexpected_reply(
                "record list",
                other.shape_name(),
            )),
        }
    }
}

/// Decoder for raw reply bodies
pub struct ResponseParser;

impl ResponseParser {
    /// Decode the collected reply lines per the requested shape
    ///
    /// Lines not matching the `KEY: VALUE` pattern are skipped under every
    /// shape except `Line`, which keeps all lines verbatim. Parsing is
    /// total: every input decodes to some reply of the requested shape.
    pub fn parse(lines: &[String], shape: ResponseShape) -> Reply {
        match shape {
            ResponseShape::Line => Reply::Text(lines.join("\n")),
            ResponseShape::List => {
                let values = lines
                    .iter()
                    .filter_map(|line| Self::split_pair(line))
                    .map(|(_, value)| value.to_string())
                    .collect();
                Reply::Values(values)
            }
            ResponseShape::Map => {
                let mut map = Record::new();
                for (key, value) in lines.iter().filter_map(|line| Self::split_pair(line)) {
                    // Last occurrence wins
                    map.insert(key.to_string(), value.to_string());
                }
                Reply::Map(map)
            }
            ResponseShape::RecordList => {
                let mut records = Vec::new();
                let mut current = Record::new();
                for (key, value) in lines.iter().filter_map(|line| Self::split_pair(line)) {
                    // A repeated key marks the start of the next record
                    if current.contains_key(key) {
                        records.push(std::mem::take(&mut current));
                    }
                    current.insert(key.to_string(), value.to_string());
                }
                // The trailing record is appended unconditionally, so an
                // empty input yields exactly one empty record
                records.push(current);
                Reply::Records(records)
            }
        }
    }

    /// Split a `KEY: VALUE` line at the first `": "`; the key is the
    /// shortest run before the separator, the value the remainder
    fn split_pair(line: &str) -> Option<(&str, &str)> {
        line.split_once(PAIR_SEPARATOR)
    }
}
