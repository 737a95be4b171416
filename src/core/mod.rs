pub mod engine;
pub mod queries;
pub mod registry;
pub mod report;

pub use crate::domain::ports::{ParamSource, ReportSink};
pub use crate::utils::error::Result;
