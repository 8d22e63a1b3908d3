use super::LogError;
use checkpoint_common::model::scan::{ScanRecord, LOG_HEADER};
use chrono::NaiveDate;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tempfile::NamedTempFile;

/// Location of the log for `date` under `dir`, e.g. `qr_checkpoints_20240701.csv`.
pub fn daily_log_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!("qr_checkpoints_{}.csv", date.format("%Y%m%d")))
}

/// Append-only scan log backed by a single CSV file.
///
/// Rows are loaded once, on [`ScanLog::initialize`] or on the first append,
/// and then served from memory. Every append rewrites the whole file through
/// a temporary sibling that is renamed over the target, so a failed save
/// leaves the previous file untouched. The in-memory rows are rolled back on
/// failure and always match what is on disk.
#[derive(Debug)]
pub struct ScanLog {
    path: PathBuf,
    state: Mutex<LogState>,
}

#[derive(Debug, Default)]
struct LogState {
    /// `None` until the file has been read or created.
    rows: Option<Vec<ScanRecord>>,
}

impl ScanLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: Mutex::new(LogState::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the parent directory and the file with its header if missing,
    /// otherwise loads the existing rows. Safe to call any number of times.
    pub fn initialize(&self) -> Result<(), LogError> {
        let mut state = self.lock();

        if let Some(parent) = self.parent_dir() {
            fs::create_dir_all(parent)?;
        }

        if self.path.exists() {
            if state.rows.is_none() {
                let rows = read_rows(&self.path)?;
                debug!("Loaded {} scans from {}", rows.len(), self.path.display());
                state.rows = Some(rows);
            }
            return Ok(());
        }

        let rows = state.rows.get_or_insert_with(Vec::new);
        write_atomic(&self.path, rows)?;
        info!("Created new scan log at: {}", self.path.display());
        Ok(())
    }

    /// Appends `record` and saves the log. Returns the number of scans now stored.
    pub fn append(&self, record: ScanRecord) -> Result<usize, LogError> {
        let mut state = self.lock();
        let rows = self.loaded_rows(&mut state)?;

        rows.push(record);
        if let Err(err) = write_atomic(&self.path, rows) {
            rows.pop();
            return Err(err);
        }
        Ok(rows.len())
    }

    fn loaded_rows<'a>(&self, state: &'a mut LogState) -> Result<&'a mut Vec<ScanRecord>, LogError> {
        if state.rows.is_none() {
            let rows = if self.path.exists() {
                read_rows(&self.path)?
            } else {
                Vec::new()
            };
            state.rows = Some(rows);
        }
        Ok(state.rows.get_or_insert_with(Vec::new))
    }

    // A panic while holding the lock cannot leave the rows out of sync with the
    // file, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, LogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }
}

/// Reads every row of the log at `path`, checking the header first.
pub fn read_rows(path: &Path) -> Result<Vec<ScanRecord>, LogError> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;

    let header = reader.headers()?;
    if !header.iter().eq(LOG_HEADER) {
        return Err(LogError::Corrupt {
            path: path.to_path_buf(),
            reason: format!("unexpected header {:?}", header),
        });
    }

    reader
        .deserialize()
        .collect::<Result<Vec<ScanRecord>, _>>()
        .map_err(LogError::from)
}

fn write_atomic(path: &Path, rows: &[ScanRecord]) -> Result<(), LogError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(tmp.as_file_mut());
        writer.write_record(LOG_HEADER)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;

    tmp.persist(path).map_err(|err| LogError::Persist {
        path: path.to_path_buf(),
        source: err.error,
    })?;
    Ok(())
}
