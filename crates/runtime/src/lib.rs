pub mod logging;

pub use logging::{
    InMemoryRunLogWriter, JsonLinesRunLogWriter, NullRunLogWriter, RunLogEvent, RunLogEventKind,
    RunLogWriter,
};

pub fn module_ready() -> bool {
    true
}
