use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::models::ProductRecord;

/// File-backed snapshot of the last observed full listing.
///
/// `load` returns `None` until the first `replace`. `replace` writes the
/// fresh listing to a staging file next to the snapshot and rotates it
/// into place, so the snapshot on disk is always a complete listing.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The previous listing, in snapshot order. `None` when no snapshot
    /// has been written yet (first run).
    pub fn load(&self) -> Result<Option<Vec<ProductRecord>>, Error> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let records = reader.deserialize().collect::<Result<Vec<_>, _>>()?;
        Ok(Some(records))
    }

    /// Replace the snapshot wholesale with `records`.
    pub fn replace(&self, records: &[ProductRecord]) -> Result<(), Error> {
        let staged = self.staging_path();
        write_records(&staged, records)?;
        self.rotate(&staged)?;
        debug!(path = %self.path.display(), count = records.len(), "snapshot replaced");
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".new");
        PathBuf::from(name)
    }

    /// Rename the staged file over the snapshot. Some platforms refuse to
    /// rename onto an existing file, so fall back to remove-then-rename.
    fn rotate(&self, staged: &Path) -> Result<(), Error> {
        if let Err(first) = fs::rename(staged, &self.path) {
            if !self.path.exists() {
                return Err(first.into());
            }
            fs::remove_file(&self.path)?;
            fs::rename(staged, &self.path)?;
        }
        Ok(())
    }
}

/// Write records as CSV with the header row, header included even when
/// there are no records.
pub fn write_records(path: &Path, records: &[ProductRecord]) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(ProductRecord::HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
