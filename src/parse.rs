//! CSV parsing into tabular chunks.

use crate::error::LoadError;
use crate::loader::LoadOptions;
use blobtab_table::{Table, Value};

/// Parse decoded CSV text into one or more table chunks.
///
/// Small payloads parse as a single chunk. When the decoded byte length
/// exceeds `options.chunk_threshold_bytes`, rows are flushed into chunks of
/// `options.chunk_rows` to bound peak memory. Chunking is content-preserving:
/// concatenating the chunks reproduces the single-chunk parse exactly.
///
/// Empty text yields no chunks. Text with headers but no data rows yields a
/// single rowless chunk carrying the column names.
pub(crate) fn parse_csv_chunks(text: &str, options: &LoadOptions) -> Result<Vec<Table>, LoadError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .delimiter(options.delimiter)
        .from_reader(text.as_bytes());

    let mut columns: Vec<String> = if options.has_headers {
        reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect()
    } else {
        Vec::new()
    };

    let chunk_rows = if text.len() > options.chunk_threshold_bytes {
        options.chunk_rows
    } else {
        usize::MAX
    };

    let mut chunks = Vec::new();
    let mut rows: Vec<Vec<Value>> = Vec::new();

    for result in reader.records() {
        let record = result?;

        // Without headers, the first record determines the column names
        if columns.is_empty() {
            columns = (0..record.len()).map(|i| format!("column_{i}")).collect();
        }

        rows.push(record.iter().map(Value::infer).collect());

        if rows.len() >= chunk_rows {
            chunks.push(Table::from_rows(columns.clone(), std::mem::take(&mut rows))?);
        }
    }

    if !rows.is_empty() || (chunks.is_empty() && !columns.is_empty()) {
        chunks.push(Table::from_rows(columns, rows)?);
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_chunk_below_threshold() {
        let text = "id,name\n1,alice\n2,bob\n";
        let chunks = parse_csv_chunks(text, &LoadOptions::default()).unwrap();

        assert_eq!(chunks.len(), 1);
        let table = &chunks[0];
        assert_eq!(table.columns(), ["id", "name"]);
        assert_eq!(table.num_rows(), 2);
        assert_eq!(
            table.rows()[0],
            vec![Value::Int(1), Value::String("alice".to_string())]
        );
    }

    #[test]
    fn test_chunked_above_threshold() {
        let text = "id\n1\n2\n3\n4\n5\n";
        let options = LoadOptions {
            chunk_threshold_bytes: 4,
            chunk_rows: 2,
            ..LoadOptions::default()
        };

        let chunks = parse_csv_chunks(text, &options).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].num_rows(), 2);
        assert_eq!(chunks[1].num_rows(), 2);
        assert_eq!(chunks[2].num_rows(), 1);
    }

    #[test]
    fn test_chunking_preserves_content() {
        let text = "id,word\n1,a\n2,b\n3,c\n4,d\n5,e\n";

        let whole = parse_csv_chunks(text, &LoadOptions::default()).unwrap();
        let chunked = parse_csv_chunks(
            text,
            &LoadOptions {
                chunk_threshold_bytes: 0,
                chunk_rows: 2,
                ..LoadOptions::default()
            },
        )
        .unwrap();

        assert_eq!(
            Table::concat(whole).unwrap(),
            Table::concat(chunked).unwrap()
        );
    }

    #[test]
    fn test_headerless_generates_column_names() {
        let text = "1,alice\n2,bob\n";
        let options = LoadOptions {
            has_headers: false,
            ..LoadOptions::default()
        };

        let chunks = parse_csv_chunks(text, &options).unwrap();
        assert_eq!(chunks[0].columns(), ["column_0", "column_1"]);
        assert_eq!(chunks[0].num_rows(), 2);
    }

    #[test]
    fn test_custom_delimiter() {
        let text = "id;name\n1;alice\n";
        let options = LoadOptions {
            delimiter: b';',
            ..LoadOptions::default()
        };

        let chunks = parse_csv_chunks(text, &options).unwrap();
        assert_eq!(chunks[0].columns(), ["id", "name"]);
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunks = parse_csv_chunks("", &LoadOptions::default()).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_headers_without_rows() {
        let chunks = parse_csv_chunks("id,name\n", &LoadOptions::default()).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].columns(), ["id", "name"]);
        assert!(chunks[0].is_empty());
    }

    #[test]
    fn test_ragged_row_is_a_parse_error() {
        let err = parse_csv_chunks("a,b\n1\n", &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
