//! Lab report cover page builder.
//!
//! One record of report metadata, persisted as a single JSON blob in a local
//! SQLite store, edited through a two-pane web page (form + live preview) and
//! printable via the browser's print dialog. The same record operations are
//! exposed on the command line.

pub mod api;
pub mod cli;
pub mod errors;
pub mod models;
pub mod render;
pub mod store;

pub use errors::LabReportError;
