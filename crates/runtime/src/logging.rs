use std::{cell::RefCell, io::Write, rc::Rc};

use core_sim::FinanceSnapshot;
use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunLogEventKind {
    StateInitialized,
    UpdateApplied,
    UpdateRejected,
    ChartRebuilt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunLogEvent {
    pub day: u64,
    pub kind: RunLogEventKind,
    pub history_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<FinanceSnapshot>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected_fields: Vec<String>,
}

impl RunLogEvent {
    pub fn new(day: u64, kind: RunLogEventKind, history_len: usize) -> Self {
        Self {
            day,
            kind,
            history_len,
            snapshot: None,
            rejected_fields: Vec::new(),
        }
    }

    pub fn with_snapshot(mut self, snapshot: FinanceSnapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn with_rejected_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rejected_fields = fields.into_iter().map(Into::into).collect();
        self
    }
}

pub trait RunLogWriter {
    fn write(&mut self, event: RunLogEvent);
}

/// Keeps events in memory behind a shared handle.
///
/// Clones share one buffer, so a clone kept outside a `Box<dyn RunLogWriter>`
/// can still read what the boxed writer recorded.
#[derive(Debug, Default, Clone)]
pub struct InMemoryRunLogWriter {
    events: Rc<RefCell<Vec<RunLogEvent>>>,
}

impl InMemoryRunLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RunLogEvent> {
        self.events.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<RunLogEventKind> {
        self.events.borrow().iter().map(|event| event.kind).collect()
    }
}

impl RunLogWriter for InMemoryRunLogWriter {
    fn write(&mut self, event: RunLogEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullRunLogWriter;

impl RunLogWriter for NullRunLogWriter {
    fn write(&mut self, _event: RunLogEvent) {}
}

#[derive(Serialize)]
struct TimestampedEvent<'a> {
    ts: String,
    #[serde(flatten)]
    event: &'a RunLogEvent,
}

/// Writes one JSON object per event, one event per line.
///
/// After the first I/O failure the writer stays silent for the rest of the run.
pub struct JsonLinesRunLogWriter<W: Write> {
    writer: W,
    failed: bool,
}

impl<W: Write> JsonLinesRunLogWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, event: &RunLogEvent) -> std::io::Result<()> {
        let ts = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(std::io::Error::other)?;
        serde_json::to_writer(&mut self.writer, &TimestampedEvent { ts, event })?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl<W: Write> RunLogWriter for JsonLinesRunLogWriter<W> {
    fn write(&mut self, event: RunLogEvent) {
        if self.failed {
            return;
        }
        if self.write_line(&event).is_err() {
            self.failed = true;
        }
    }
}
