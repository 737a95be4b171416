use crate::config::QueryParams;
use crate::utils::error::Result;

/// Where finished reports go: console, files, or a test buffer.
pub trait ReportSink {
    fn publish(&mut self, title: &str, report: &str) -> Result<()>;
}

/// Resolves the tunable query parameters (thresholds, price bands).
pub trait ParamSource {
    fn query_params(&self) -> Result<QueryParams>;
}
