//! Durable handoff store between the counting and sorting stages.
//!
//! One `<token>\t<count>` record per line. Written once by the counting
//! stage, then read-only; the sorting stage never mutates it, so a sorting
//! retry can reuse it as-is.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::types::{CountRecord, FreqError, FreqResult};

/// Handle on the intermediate store location.
pub struct IntermediateStore {
    path: PathBuf,
}

impl IntermediateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a completed store is present.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Publish the full record set.
    ///
    /// Records are written to a temporary file in the destination directory
    /// and renamed into place once flushed, so a store visible at the final
    /// path is always complete. A failed write leaves no partial store.
    pub fn write(&self, records: &[CountRecord]) -> FreqResult<()> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
        {
            let mut out = BufWriter::new(tmp.as_file_mut());
            for record in records {
                writeln!(out, "{}\t{}", record.token, record.count)?;
            }
            out.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| FreqError::Io(e.error))?;
        debug!(
            "published {} count records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Read the complete record set back, preserving file order.
    ///
    /// A line that does not parse as `<token>\t<count>` is a hard error
    /// carrying the line number and content; it is never skipped or read as
    /// zero, so a corrupt store can never silently undercount.
    pub fn read(&self) -> FreqResult<Vec<CountRecord>> {
        let file = File::open(&self.path)?;
        let mut records = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            records.push(parse_record(idx + 1, &line)?);
        }
        Ok(records)
    }

    /// Remove a published store, e.g. before a full counting-stage retry.
    pub fn remove(&self) -> FreqResult<()> {
        if self.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Parse one `<token><whitespace><count>` line. Tokens never contain
/// whitespace, so the two-field split round-trips exactly.
fn parse_record(line_no: usize, line: &str) -> FreqResult<CountRecord> {
    let mut fields = line.split_whitespace();
    let (Some(token), Some(count)) = (fields.next(), fields.next()) else {
        return Err(malformed(line_no, line));
    };
    if fields.next().is_some() {
        return Err(malformed(line_no, line));
    }
    // Digits only: the reader accepts exactly what `write` produces, so a
    // signed count is corruption, not leniency.
    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(line_no, line));
    }
    let count: u64 = count.parse().map_err(|_| malformed(line_no, line))?;
    Ok(CountRecord {
        token: token.to_string(),
        count,
    })
}

fn malformed(line: usize, content: &str) -> FreqError {
    FreqError::MalformedRecord {
        line,
        content: content.to_string(),
    }
}
