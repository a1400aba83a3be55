pub mod types;

pub use types::LabReportError;
