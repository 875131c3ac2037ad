//! TypeScript rendering for coerced tables
//!
//! The generated module imports `Table` from a sibling `tables` module and
//! exports one constant built with `Table.new(columns, rows)`. Every row is
//! an object literal marked `as const` so the compiler keeps literal types.

use crate::error::Result;
use crate::table::{CellValue, Record, TableArtifact};

const IMPORT_LINE: &str = "import { Table } from \"./tables\"";
const DECLARATION: &str = "export const table = Table.new(";
const ARG_INDENT: &str = "    ";
const ROW_INDENT: &str = "        ";

/// Render the full TypeScript module for a table
pub fn render_module(table: &TableArtifact) -> Result<String> {
    let mut out = String::new();

    out.push_str(IMPORT_LINE);
    out.push_str("\n\n");
    out.push_str(DECLARATION);
    out.push('\n');

    out.push_str(ARG_INDENT);
    out.push_str(&render_header(&table.columns)?);
    out.push_str(",\n");

    out.push_str(ARG_INDENT);
    out.push_str("[\n");
    for record in &table.records {
        out.push_str(ROW_INDENT);
        out.push_str(&render_record(record));
        out.push_str(" as const,\n");
    }
    out.push_str(ARG_INDENT);
    out.push_str("]\n");

    out.push_str(");\n");
    Ok(out)
}

/// Render the header as an array of double-quoted string literals
pub fn render_header(columns: &[String]) -> Result<String> {
    let items = columns
        .iter()
        .map(|name| serde_json::to_string(name))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(format!("[{}]", items.join(", ")))
}

/// Render one record as an object literal, keys in header order
pub fn render_record(record: &Record) -> String {
    let fields: Vec<String> = record
        .iter()
        .map(|(key, value)| format!("{}: {}", quote(key), render_value(value)))
        .collect();
    format!("{{{}}}", fields.join(", "))
}

/// Render a single cell as a TypeScript expression
pub fn render_value(value: &CellValue) -> String {
    match value {
        CellValue::Integer(i) => i.to_string(),
        CellValue::BigInteger(digits) => digits.clone(),
        CellValue::Float(f) => render_float(*f),
        CellValue::Text(s) => quote(s),
    }
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        // Debug output keeps a fractional part or exponent and round-trips.
        format!("{:?}", f)
    }
}

/// Wrap a value in single quotes, escaping anything that would end or
/// corrupt the literal
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
