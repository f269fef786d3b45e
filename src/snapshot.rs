//! Monthly snapshots. On the first day of a month (UTC wall clock) the rendered document is also
//! copied to a dated file, so a history of graphs builds up over time.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use crate::{
    config::SnapshotConfig,
    error::Result,
    fs::output::write_replace,
    utils::{clock::Clock, time::snapshot_file_name},
};

const DEFAULT_EXTENSION: &str = "svg";

pub struct Snapshotter {
    config: SnapshotConfig,
    clock: Box<dyn Clock>,
}

impl Snapshotter {
    pub fn new(config: SnapshotConfig, clock: Box<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// Where the snapshot for the current run goes, or `None` when no snapshot is due.
    pub fn snapshot_path(&self, primary: &Path) -> Option<PathBuf> {
        if !self.config.enabled {
            return None;
        }
        let today = self.clock.today();
        if today.day() != 1 {
            debug!("Skipping snapshot, {today} isn't the first day of a month");
            return None;
        }
        Some(match &self.config.path {
            Some(path) => expand_placeholders(path, today),
            None => {
                let extension = primary
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or(DEFAULT_EXTENSION);
                primary.with_file_name(snapshot_file_name(today, extension))
            }
        })
    }

    /// Writes a byte-identical copy of `document` if a snapshot is due. Must only be called after
    /// the primary output was written.
    pub async fn persist(&self, primary: &Path, document: &str) -> Result<Option<PathBuf>> {
        let Some(path) = self.snapshot_path(primary) else {
            return Ok(None);
        };
        write_replace(&path, document).await?;
        info!("Saved monthly snapshot to {path:?}");
        Ok(Some(path))
    }
}

fn expand_placeholders(path: &Path, date: NaiveDate) -> PathBuf {
    let path = path.to_string_lossy();
    if !path.contains('{') {
        return PathBuf::from(path.into_owned());
    }
    PathBuf::from(
        path.replace("{year}", &format!("{:04}", date.year()))
            .replace("{month}", &format!("{:02}", date.month())),
    )
}
