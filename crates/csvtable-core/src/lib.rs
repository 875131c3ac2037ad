//! csvtable-core: Core library for compiling CSV files into TypeScript tables
//!
//! This library provides functionality to:
//! - Parse a CSV file whose first row is the header
//! - Coerce each cell to an integer, a float, or text
//! - Pair data rows with the header into ordered records
//! - Render the result as a module exporting a `Table.new(...)` constant

pub mod convert;
pub mod error;
pub mod parser;
pub mod render;
pub mod table;

pub use convert::{convert, convert_str, ConvertSummary};
pub use error::{Error, Result};
pub use parser::{parse_csv, parse_csv_str};
pub use render::render_module;
pub use table::{CellValue, Record, TableArtifact};
