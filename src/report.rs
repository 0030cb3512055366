use std::io;
use std::io::Write;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::value::Value;

/// Which assertion kind failed. Stable wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailKind {
    Bool,
    Same,
    NotSame,
    Equals,
    NotEquals,
}

impl FailKind {
    pub fn tag(&self) -> &'static str {
        match self {
            FailKind::Bool => "BOOL",
            FailKind::Same => "SAME",
            FailKind::NotSame => "NOT_SAME",
            FailKind::Equals => "EQUALS",
            FailKind::NotEquals => "NOT_EQUALS",
        }
    }
}

/// Outcome of one assertion call. Serializes to the JSON array the runner
/// reads: `["ASSERT_OK"]` or
/// `["ASSERT_{TAG}_FAILED", expected, actual, message, line]`.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Ok,
    Failed {
        kind: FailKind,
        expected: Value,
        actual: Value,
        message: String,
        line: u32,
    },
}

impl Record {
    /// One newline-terminated JSON line.
    ///
    /// Serialization cannot fail: every record field maps to a plain JSON
    /// scalar (non-finite floats render as null rather than erroring).
    pub fn to_line(&self) -> String {
        let mut line = serde_json::to_string(self).expect("record serializes");
        line.push('\n');
        line
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Record::Ok => {
                let mut seq = serializer.serialize_seq(Some(1))?;
                seq.serialize_element("ASSERT_OK")?;
                seq.end()
            }
            Record::Failed {
                kind,
                expected,
                actual,
                message,
                line,
            } => {
                let mut seq = serializer.serialize_seq(Some(5))?;
                seq.serialize_element(&format!("ASSERT_{}_FAILED", kind.tag()))?;
                seq.serialize_element(expected)?;
                seq.serialize_element(actual)?;
                seq.serialize_element(message)?;
                seq.serialize_element(line)?;
                seq.end()
            }
        }
    }
}

/// Where assertion records go. The engine emits exactly one record per
/// call; the runner picks the transport.
pub trait Report {
    fn record(&mut self, rec: Record);
}

/// Streams each record as one JSON line. Write errors are dropped; a
/// broken pipe just truncates the stream the runner reads.
pub struct JsonLines<W: Write> {
    out: W,
}

impl JsonLines<io::Stdout> {
    pub fn stdout() -> Self {
        JsonLines { out: io::stdout() }
    }
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        JsonLines { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Report for JsonLines<W> {
    fn record(&mut self, rec: Record) {
        let _ = self.out.write_all(rec.to_line().as_bytes());
    }
}

/// Keeps records in memory, for in-process drivers and tests.
#[derive(Debug, Default)]
pub struct Collect {
    pub records: Vec<Record>,
}

impl Collect {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Report for Collect {
    fn record(&mut self, rec: Record) {
        self.records.push(rec);
    }
}
