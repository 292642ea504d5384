use std::path::PathBuf;

/// Configuration for one rendered report.
///
/// The output path is an explicit value here; there is deliberately no
/// module-level default destination.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Where the workbook is written. Parent directories are created.
    pub output_path: PathBuf,
    /// Worksheet name.
    pub sheet_name: String,
    /// Title text; the current date is appended at render time.
    pub title_prefix: String,
}

impl ReportConfig {
    /// A config with the conventional sheet name and title.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            sheet_name: "Monitoring".to_string(),
            title_prefix: "Monitoring tool".to_string(),
        }
    }

    /// Override the worksheet name.
    pub fn with_sheet_name(mut self, name: impl Into<String>) -> Self {
        self.sheet_name = name.into();
        self
    }
}
