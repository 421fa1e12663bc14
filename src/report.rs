use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::TimeEntry;
use crate::rounding::RoundingConfig;
use crate::toggl::{Resolve, TogglError};
use crate::transform::ReportRow;

pub const HEADER: [&str; 8] = [
    "Datum",
    "Artikel",
    "Tid (timmar)",
    "Kund",
    "Projekt",
    "Aktivitet",
    "Ärendenummer",
    "Beskrivning",
];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not create {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write report")]
    Write(#[from] csv::Error),
    #[error("could not flush report")]
    Flush(#[from] io::Error),
    #[error(transparent)]
    Lookup(#[from] TogglError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub written: usize,
    pub skipped: usize,
}

pub fn write_report_file<R: Resolve>(
    path: &Path,
    entries: &[TimeEntry],
    resolver: &mut R,
    rounding: &RoundingConfig,
) -> Result<ReportSummary, ReportError> {
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_report(file, entries, resolver, rounding)
}

/// Writes the header and one row per entry that bills against a client.
pub fn write_report<W: Write, R: Resolve>(
    sink: W,
    entries: &[TimeEntry],
    resolver: &mut R,
    rounding: &RoundingConfig,
) -> Result<ReportSummary, ReportError> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(HEADER)?;

    let mut summary = ReportSummary::default();
    for entry in entries {
        let Some(project_id) = entry.project_id else {
            warn!(entry_id = entry.id, "time entry has no project, skipping");
            summary.skipped += 1;
            continue;
        };

        let project = resolver.project(entry.workspace_id, project_id)?;
        let Some(client_id) = project.client_id() else {
            debug!(entry_id = entry.id, project = %project.name, "project has no client, skipping");
            summary.skipped += 1;
            continue;
        };

        let client = resolver.client(entry.workspace_id, client_id)?;
        let row = ReportRow::build(entry, &project, &client, rounding);
        writer.write_record(row.as_record())?;
        summary.written += 1;
    }

    writer.flush()?;
    Ok(summary)
}
