//! Output formatting for score reports

pub mod formatter;

pub use formatter::{ConsoleFormatter, JsonFormatter, OutputFormatter};
