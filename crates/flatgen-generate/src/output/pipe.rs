//! Pipe-delimited ASCII writer.
//!
//! Each section of a file (header, body, trailer) is its own append: the
//! file is opened, the lines are written and flushed, and the handle is
//! dropped. A failure between sections leaves the earlier sections on disk.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::errors::GenerationError;
use crate::schema::RecordSchema;
use crate::sequencer::Sequencer;
use crate::topology::RecordSet;
use crate::value::FieldValue;

pub const DELIMITER: u8 = b'|';

#[derive(Debug)]
pub struct PipeEncoder {
    path: PathBuf,
    bytes_written: u64,
}

impl PipeEncoder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bytes_written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    pub fn append_header(&mut self, set: &RecordSet) -> Result<(), GenerationError> {
        self.append_single(&set.header)
    }

    /// Write every body line in plan order, numbering each from `sequencer`.
    pub fn append_body(
        &mut self,
        set: &RecordSet,
        mut sequencer: Sequencer,
    ) -> Result<Sequencer, GenerationError> {
        let mut records = Vec::with_capacity(set.plan.len());
        for (schema, row) in set.body_rows() {
            records.push(encode_row(schema, row, Some(&mut sequencer)));
        }
        self.append_records(records)?;
        Ok(sequencer)
    }

    pub fn append_trailer(&mut self, set: &RecordSet) -> Result<(), GenerationError> {
        self.append_single(&set.trailer)
    }

    fn append_single(&mut self, schema: &RecordSchema) -> Result<(), GenerationError> {
        let records: Vec<Vec<String>> = schema
            .rows()
            .map(|row| encode_row(schema, row, None))
            .collect();
        self.append_records(records)
    }

    fn append_records(&mut self, records: Vec<Vec<String>>) -> Result<(), GenerationError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let counting = CountingWriter::new(BufWriter::new(file));
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(DELIMITER)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(counting);

        for record in &records {
            writer.write_record(record)?;
        }
        writer.flush()?;
        let mut counting = writer.into_inner().map_err(|err| err.into_error())?;
        counting.flush()?;
        self.bytes_written = self.bytes_written.saturating_add(counting.bytes_written());
        Ok(())
    }
}

/// Render one row as ASCII fields plus the empty field that yields the
/// trailing delimiter.
fn encode_row(
    schema: &RecordSchema,
    row: &[FieldValue],
    mut sequencer: Option<&mut Sequencer>,
) -> Vec<String> {
    let sequence_column = schema.sequence_column();
    let mut fields: Vec<String> = Vec::with_capacity(row.len() + 1);
    for (index, value) in row.iter().enumerate() {
        let rendered = match (&mut sequencer, sequence_column) {
            (Some(sequencer), Some(column)) if column == index => {
                sequencer.next_number().to_string()
            }
            _ => ascii_only(&value.as_text()),
        };
        fields.push(rendered);
    }
    fields.push(String::new());
    fields
}

fn ascii_only(value: &str) -> String {
    value.chars().filter(char::is_ascii).collect()
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_non_ascii_characters() {
        assert_eq!(ascii_only("Zoë Brontë"), "Zo Bront");
        assert_eq!(ascii_only("plain"), "plain");
    }
}
