//! End-to-end conversion from a CSV file to a TypeScript table module

use crate::error::{Error, Result};
use crate::parser::{parse_csv, parse_csv_str};
use crate::render::render_module;
use crate::table::TableArtifact;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Counts reported after a successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Number of header columns
    pub columns: usize,
    /// Number of records written (one per data row)
    pub records: usize,
}

/// Convert a CSV file into a TypeScript module, overwriting `output`
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<ConvertSummary> {
    let output = output.as_ref();

    let table = parse_csv(input)?;
    log_table(&table)?;

    let module = render_module(&table)?;
    write_output(output, &module)?;

    log::info!(
        "wrote {} records to {}",
        table.record_count(),
        output.display()
    );

    Ok(ConvertSummary {
        columns: table.column_count(),
        records: table.record_count(),
    })
}

/// Convert CSV text into the TypeScript module source
pub fn convert_str(content: &str) -> Result<String> {
    let table = parse_csv_str(content, "<memory>")?;
    log_table(&table)?;
    render_module(&table)
}

fn log_table(table: &TableArtifact) -> Result<()> {
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("header: {}", serde_json::to_string(&table.columns)?);
        log::debug!("records: {}", serde_json::to_string(&table.records)?);
    }
    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    let to_error = |e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)?;
    Ok(())
}
