//! Core table types for representing coerced CSV data

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// The header and records produced from a single CSV file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableArtifact {
    /// Column names, in file order
    pub columns: Vec<String>,
    /// One record per data row, in file order
    pub records: Vec<Record>,
}

impl TableArtifact {
    /// Create a table with the given header and no records
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Pair a row of coerced cells with the header and append the record
    pub fn push_row(&mut self, cells: Vec<CellValue>) {
        let record = Record::from_row(&self.columns, cells);
        self.records.push(record);
    }
}

/// A data row keyed by column name.
///
/// Keys keep insertion order. Inserting an existing key replaces its value
/// without moving it, so a repeated header name ends up holding the value of
/// its last occurrence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(String, CellValue)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip a row against the header. The shorter side decides the length.
    pub fn from_row(columns: &[String], cells: Vec<CellValue>) -> Self {
        let mut record = Self::new();
        for (name, value) in columns.iter().zip(cells) {
            record.insert(name.clone(), value);
        }
        record
    }

    /// Insert a value, replacing any existing value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: CellValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a value by column name
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Column names present in this record, in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over `(name, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of columns present in this record
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the record has no columns
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A cell value with type detection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Integer value
    Integer(i64),
    /// Integer too wide for `i64`, kept as normalized decimal digits
    BigInteger(String),
    /// Floating-point value
    Float(f64),
    /// Anything that is not a number, kept verbatim
    Text(String),
}

impl CellValue {
    /// Coerce a raw field: integer first, then float, else the text itself.
    ///
    /// The field is not trimmed, so `" 1"` stays text.
    pub fn parse(s: &str) -> Self {
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }

        if let Some(digits) = normalize_big_integer(s) {
            return CellValue::BigInteger(digits);
        }

        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }

        CellValue::Text(s.to_string())
    }
}

/// Strip a leading `+` and redundant zeros from an optionally signed run of
/// ASCII digits. Returns `None` for anything else.
fn normalize_big_integer(s: &str) -> Option<String> {
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return Some("0".to_string());
    }

    Some(if negative {
        format!("-{}", trimmed)
    } else {
        trimmed.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cell_value_parse_integer() {
        assert_eq!(CellValue::parse("42"), CellValue::Integer(42));
        assert_eq!(CellValue::parse("-123"), CellValue::Integer(-123));
        assert_eq!(CellValue::parse("+7"), CellValue::Integer(7));
        assert_eq!(CellValue::parse("007"), CellValue::Integer(7));
    }

    #[test]
    fn test_cell_value_parse_float() {
        assert_eq!(CellValue::parse("3.5"), CellValue::Float(3.5));
        assert_eq!(CellValue::parse("-2.25"), CellValue::Float(-2.25));
        assert_eq!(CellValue::parse("1e3"), CellValue::Float(1000.0));
    }

    #[test]
    fn test_cell_value_parse_integer_beyond_i64_keeps_digits() {
        assert_eq!(
            CellValue::parse("18446744073709551617"),
            CellValue::BigInteger("18446744073709551617".to_string())
        );
        assert_eq!(
            CellValue::parse("+9223372036854775809"),
            CellValue::BigInteger("9223372036854775809".to_string())
        );
        assert_eq!(
            CellValue::parse("-000099999999999999999999"),
            CellValue::BigInteger("-99999999999999999999".to_string())
        );
    }

    #[test]
    fn test_cell_value_parse_non_integer_is_not_big_integer() {
        assert_eq!(CellValue::parse("1e30"), CellValue::Float(1e30));
        assert_eq!(CellValue::parse("-"), CellValue::Text("-".to_string()));
        assert_eq!(CellValue::parse("+"), CellValue::Text("+".to_string()));
    }

    #[test]
    fn test_cell_value_parse_text() {
        assert_eq!(CellValue::parse("hello"), CellValue::Text("hello".to_string()));
        assert_eq!(CellValue::parse("0xABCD"), CellValue::Text("0xABCD".to_string()));
        assert_eq!(CellValue::parse("1,5"), CellValue::Text("1,5".to_string()));
    }

    #[test]
    fn test_cell_value_parse_keeps_whitespace_and_empty() {
        assert_eq!(CellValue::parse(""), CellValue::Text(String::new()));
        assert_eq!(CellValue::parse(" 1"), CellValue::Text(" 1".to_string()));
    }

    #[test]
    fn test_record_from_row_preserves_header_order() {
        let record = Record::from_row(
            &columns(&["b", "a", "c"]),
            vec![
                CellValue::Integer(1),
                CellValue::Integer(2),
                CellValue::Integer(3),
            ],
        );
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(record.get("a"), Some(&CellValue::Integer(2)));
    }

    #[test]
    fn test_record_from_short_row_drops_trailing_columns() {
        let record = Record::from_row(
            &columns(&["a", "b", "c"]),
            vec![CellValue::Integer(1), CellValue::Integer(2)],
        );
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("c"), None);
    }

    #[test]
    fn test_record_len_and_is_empty() {
        let mut record = Record::new();
        assert!(record.is_empty());

        record.insert("a", CellValue::Integer(1));
        assert_eq!(record.len(), 1);
        assert!(!record.is_empty());
    }

    #[test]
    fn test_record_from_long_row_drops_extra_fields() {
        let record = Record::from_row(
            &columns(&["a"]),
            vec![CellValue::Integer(1), CellValue::Integer(2)],
        );
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("a"), Some(&CellValue::Integer(1)));
    }

    #[test]
    fn test_record_duplicate_key_keeps_position_takes_last_value() {
        let record = Record::from_row(
            &columns(&["a", "b", "a"]),
            vec![
                CellValue::Integer(1),
                CellValue::Integer(2),
                CellValue::Integer(3),
            ],
        );
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&CellValue::Integer(3)));
    }

    #[test]
    fn test_table_serializes_records_as_ordered_maps() {
        let mut table = TableArtifact::new(columns(&["z", "a"]));
        table.push_row(vec![CellValue::Integer(1), CellValue::Text("x".into())]);

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"columns":["z","a"],"records":[{"z":1,"a":"x"}]}"#);
    }
}
