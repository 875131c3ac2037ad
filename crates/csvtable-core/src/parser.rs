//! CSV parser producing a coerced table

use crate::error::{Error, Result};
use crate::table::{CellValue, TableArtifact};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parse a CSV file into a TableArtifact
pub fn parse_csv<P: AsRef<Path>>(path: P) -> Result<TableArtifact> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    read_table(BufReader::new(file), path)
}

/// Parse CSV from a string (useful for testing)
pub fn parse_csv_str(content: &str, source_name: &str) -> Result<TableArtifact> {
    read_table(content.as_bytes(), Path::new(source_name))
}

fn read_table<R: Read>(reader: R, path: &Path) -> Result<TableArtifact> {
    // Blank lines are skipped, including before the header.
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // Rows may be shorter or longer than the header
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(|e| Error::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;

    if headers.is_empty() {
        return Err(Error::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    let mut table = TableArtifact::new(columns);

    for result in csv_reader.records() {
        let record = result.map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

        if record.len() != table.column_count() {
            log::warn!(
                "line {} in {} has {} fields but the header has {}, pairing positionally",
                record.position().map_or(0, |p| p.line()),
                path.display(),
                record.len(),
                table.column_count()
            );
        }

        let cells: Vec<CellValue> = record.iter().map(CellValue::parse).collect();
        table.push_row(cells);
    }

    Ok(table)
}
