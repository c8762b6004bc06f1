//! Streaming row pipeline.
//!
//! Reads one row, applies the transform, writes the result if there is one,
//! then reads the next row. Nothing is buffered beyond the reader's and
//! writer's own I/O buffers, so memory use does not grow with the input.
//!
//! Any read or write error ends the run. There is no skip-and-continue:
//! after a parse error the rest of the stream cannot be trusted.

use std::io::{self, Write};

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use tracing::{debug, trace};

use crate::Row;
use crate::config::Config;
use crate::error::{FilterError, Result};
use crate::transform::RowTransform;

/// Record counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_read: u64,
    pub rows_written: u64,
    pub rows_dropped: u64,
}

/// Reader settings: no header row, and every row must have as many fields
/// as the first one.
pub fn reader_builder(config: &Config) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(false)
        .delimiter(config.delimiter)
        .quote(config.quote)
        .comment(config.comment);
    builder
}

/// Writer settings matching the reader.
pub fn writer_builder(config: &Config) -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(config.delimiter)
        .quote(config.quote)
        .quote_style(QuoteStyle::Necessary);
    builder
}

/// Destination for kept rows.
enum RowWriter<W: io::Write> {
    /// Delimited output, quoted where needed.
    Csv(csv::Writer<W>),
    /// `--single`: the first field's bytes and a newline, never quoted.
    Bare(io::BufWriter<W>),
}

impl<W: io::Write> RowWriter<W> {
    fn new(output: W, config: &Config) -> Self {
        if config.single {
            RowWriter::Bare(io::BufWriter::new(output))
        } else {
            RowWriter::Csv(writer_builder(config).from_writer(output))
        }
    }

    fn write(&mut self, row: &Row) -> Result<()> {
        match self {
            RowWriter::Csv(writer) => writer
                .write_byte_record(row)
                .map_err(FilterError::OutputWrite),
            RowWriter::Bare(writer) => {
                writer.write_all(row.get(0).unwrap_or_default())?;
                writer.write_all(b"\n")?;
                Ok(())
            }
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            RowWriter::Csv(writer) => writer.flush()?,
            RowWriter::Bare(writer) => writer.flush()?,
        }
        Ok(())
    }
}

/// Run `transform` over every row of `input`, writing kept rows to `output`.
///
/// Output is flushed once, after the last row.
pub fn run<R, W>(
    input: R,
    output: W,
    transform: &dyn RowTransform,
    config: &Config,
) -> Result<RunSummary>
where
    R: io::Read,
    W: io::Write,
{
    let mut reader = reader_builder(config).from_reader(input);
    let mut writer = RowWriter::new(output, config);
    let mut summary = RunSummary::default();

    for result in reader.byte_records() {
        let line = summary.rows_read + 1;
        let row = result.map_err(|source| FilterError::InputParse { line, source })?;
        summary.rows_read = line;

        match transform.apply(row) {
            Some(out) => {
                writer.write(&out)?;
                summary.rows_written += 1;
            }
            None => {
                trace!(line, "dropped row");
                summary.rows_dropped += 1;
            }
        }
    }

    writer.flush()?;

    debug!(
        transform = transform.name(),
        read = summary.rows_read,
        written = summary.rows_written,
        dropped = summary.rows_dropped,
        "end of input"
    );
    Ok(summary)
}

/// Run a subcommand over in-memory text and return the output text.
///
/// Non-UTF-8 bytes in the output are replaced, so use [`run`] for binary data.
pub fn filter_text<S: AsRef<str>>(
    input: &str,
    command: &str,
    args: &[S],
    config: &Config,
) -> Result<String> {
    let transform = crate::command::build_transform(command, args, config)?;
    let mut output = Vec::new();
    run(input.as_bytes(), &mut output, transform.as_ref(), config)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
