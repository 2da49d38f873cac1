//! # Silver Dataset Codec
//!
//! JSON Lines encoding of labeled titles: one [`TitleRecord`] or
//! [`TaggedSample`] object per line.

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, info};

use crate::aggregate::label_and_aggregate;
use crate::error::{KagamiError, Result};
use crate::types::{TaggedSample, TitleRecord};

/// Labels every title with the shared labeler, in input order.
pub fn build_records<I, S>(titles: I) -> Vec<TitleRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records: Vec<TitleRecord> = titles
        .into_iter()
        .map(|title| label_and_aggregate(title.as_ref()))
        .collect();
    info!(count = records.len(), "built title records");
    records
}

/// Writes dataset lines to any byte sink.
pub struct DatasetWriter<W: Write> {
    inner: W,
    written: usize,
}

impl<W: Write> DatasetWriter<W> {
    /// Wrap a sink; nothing is written until the first record.
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Write one title record.
    pub fn write_record(&mut self, record: &TitleRecord) -> Result<()> {
        self.write_line(record)
    }

    /// Write one tagged sample.
    pub fn write_sample(&mut self, sample: &TaggedSample) -> Result<()> {
        self.write_line(sample)
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer(&mut self.inner, value)?;
        self.inner.write_all(b"\n")?;
        self.written += 1;
        debug!(line = self.written, "wrote dataset line");
        Ok(())
    }

    /// Number of lines written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(mut self) -> Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Read title records from JSON Lines.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// `KagamiError::Io` if reading fails, `KagamiError::InvalidRecord` with the
/// 1-based line number if a line is not a valid record.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<TitleRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let record = serde_json::from_str(line).map_err(|e| KagamiError::InvalidRecord {
            line: idx + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }

    debug!(count = records.len(), "read title records");
    Ok(records)
}
