pub mod record;

pub use record::{Field, ReportRecord};
