use crate::domain::ports::ReportSink;
use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Prints each report to stdout under a title banner.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn publish(&mut self, title: &str, report: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "=== Exercise {} ===", title)?;
        stdout.write_all(report.as_bytes())?;
        writeln!(stdout)?;
        Ok(())
    }
}

/// Writes one text file per exercise under a base directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    base_path: String,
}

impl DirectorySink {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl ReportSink for DirectorySink {
    fn publish(&mut self, title: &str, report: &str) -> Result<()> {
        let dir = Path::new(&self.base_path);
        fs::create_dir_all(dir)?;

        let file_path = dir.join(format!("exercise-{}.txt", title));
        fs::write(file_path, report)?;
        Ok(())
    }
}
