//! Row/column table structure and row-wise concatenation.

use crate::value::Value;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when building or combining tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// A row's value count does not match the table's column count.
    #[error("row has {found} values, table has {expected} columns")]
    ArityMismatch { expected: usize, found: usize },

    /// Two chunks of one load disagree on their column schema.
    #[error("chunk schema mismatch: expected columns {expected:?}, found {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

/// An in-memory table: named columns and rows of [`Value`]s.
///
/// Row indices are positional, so concatenating tables reassigns them
/// sequentially.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from column names and rows, validating row arity.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, TableError> {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row, validating its arity against the column count.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), TableError> {
        if row.len() != self.columns.len() {
            return Err(TableError::ArityMismatch {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, in order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Concatenate chunks row-wise, in order.
    ///
    /// The first chunk fixes the column schema; a later chunk with different
    /// columns is a schema mismatch, surfaced as an error rather than
    /// silently repaired. An empty chunk collection yields an empty table.
    pub fn concat(chunks: Vec<Table>) -> Result<Table, TableError> {
        let mut chunks = chunks.into_iter();
        let mut combined = match chunks.next() {
            Some(first) => first,
            None => return Ok(Table::empty()),
        };
        for chunk in chunks {
            if chunk.columns != combined.columns {
                return Err(TableError::SchemaMismatch {
                    expected: combined.columns.clone(),
                    found: chunk.columns,
                });
            }
            combined.rows.extend(chunk.rows);
        }
        Ok(combined)
    }
}
