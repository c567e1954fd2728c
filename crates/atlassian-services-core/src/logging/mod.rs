//! Logging abstractions for runtime-agnostic logging

mod traits;
mod noop;
mod console;
mod tracing_logger;
mod memory;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use tracing_logger::TracingLogger;
pub use memory::{LogEntry, LogLevel, MemoryLogger};
