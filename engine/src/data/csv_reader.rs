use crate::data::raw_table::RawTable;
use crate::error::EngineError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads a whole CSV file into a [`RawTable`], keeping every cell as text.
/// Header names are whitespace-trimmed here so the schema matchers never
/// see `" date "`; flexible mode tolerates rows with a different field
/// count than the header.
pub fn read_raw_table(path: &Path) -> Result<RawTable, EngineError> {
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(BufReader::new(file));

    let columns = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_raw_table_basic() {
        let tmp = create_test_csv("state,total_kg\nGoa,5\nKerala,7");
        let table = read_raw_table(tmp.path()).unwrap();
        assert_eq!(table.columns(), ["state", "total_kg"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 0), "Goa");
        assert_eq!(table.cell(1, 1), "7");
    }

    #[test]
    fn test_read_raw_table_trims_header_whitespace() {
        let tmp = create_test_csv(" date , price_per_gram \n2020-01-01,60");
        let table = read_raw_table(tmp.path()).unwrap();
        assert_eq!(table.columns(), ["date", "price_per_gram"]);
    }

    #[test]
    fn test_read_raw_table_tolerates_ragged_rows() {
        let tmp = create_test_csv("state,total_kg\nGoa\nKerala,7,extra");
        let table = read_raw_table(tmp.path()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 1), "");
        assert_eq!(table.cell(1, 1), "7");
    }

    #[test]
    fn test_read_raw_table_missing_file() {
        let result = read_raw_table(Path::new("no_such_file.csv"));
        assert!(matches!(result, Err(EngineError::Io { .. })));
    }
}
