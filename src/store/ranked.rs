//! Final ranked output writer.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::types::{FreqError, FreqResult, RankRecord};

/// Writes the globally ordered result as `<count>\t<token>` lines, one
/// consolidated file, published atomically like the intermediate store.
pub struct RankedOutput {
    path: PathBuf,
}

impl RankedOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Publish the ranked records in the order given.
    pub fn write(&self, records: &[RankRecord]) -> FreqResult<()> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
        {
            let mut out = BufWriter::new(tmp.as_file_mut());
            for record in records {
                writeln!(out, "{}\t{}", record.count, record.token)?;
            }
            out.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| FreqError::Io(e.error))?;
        debug!(
            "published {} ranked records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}
