pub mod table;

pub use table::render_table;

use crate::migration::{MigrationFile, MigrationReportRow, resolve};
use anyhow::Result;
use console::style;

pub const NO_MIGRATIONS_NOTICE: &str = "No new alembic migrations found in this branch.";

/// Output format for the branch report
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Styled table for terminals
    #[default]
    Table,
    /// JSON array for piping to jq
    Json,
}

/// Result of resolving every discovered migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationReport {
    /// Nothing was added on this branch
    Empty,
    Rows(Vec<MigrationReportRow>),
}

impl MigrationReport {
    pub fn rows(&self) -> &[MigrationReportRow] {
        match self {
            MigrationReport::Empty => &[],
            MigrationReport::Rows(rows) => rows.as_slice(),
        }
    }
}

/// Resolve each file in discovery order; no re-sorting
pub fn build_report(files: &[MigrationFile]) -> MigrationReport {
    if files.is_empty() {
        return MigrationReport::Empty;
    }

    MigrationReport::Rows(files.iter().map(resolve).collect())
}

/// Format the report for display
pub fn format_report(report: &MigrationReport, format: ReportFormat) -> Result<String> {
    match (format, report) {
        (ReportFormat::Json, _) => Ok(serde_json::to_string_pretty(report.rows())?),
        (ReportFormat::Table, MigrationReport::Empty) => {
            Ok(style(NO_MIGRATIONS_NOTICE).yellow().to_string())
        }
        (ReportFormat::Table, MigrationReport::Rows(rows)) => Ok(render_table(rows)),
    }
}
