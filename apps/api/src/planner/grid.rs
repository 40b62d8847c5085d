//! Rectangular activity grid, `hours × days`.
//!
//! Row = hour slot within a day (top-to-bottom is chronological).
//! Column = day offset from the program's start date.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Why a source could not be read as a rectangular grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must be a JSON array of rows")]
    NotAnArray,

    #[error("row {row} is not an array")]
    RowNotAnArray { row: usize },

    #[error("cell at row {row}, column {col} is not a scalar value")]
    InvalidCell { row: usize, col: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    /// Validates that every row has the same length.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, GridError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: r.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Reads untyped JSON rows. Strings are taken verbatim; numbers and booleans
    /// as their JSON text. Anything else is malformed.
    pub fn from_json(value: &Value) -> Result<Self, GridError> {
        let rows = value.as_array().ok_or(GridError::NotAnArray)?;
        let rows = rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let cells = cells.as_array().ok_or(GridError::RowNotAnArray { row })?;
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| match cell {
                        Value::String(s) => Ok(s.clone()),
                        Value::Number(n) => Ok(n.to_string()),
                        Value::Bool(b) => Ok(b.to_string()),
                        _ => Err(GridError::InvalidCell { row, col }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    /// A `hours × days` grid with every cell set to `code`.
    pub fn filled(hours: usize, days: usize, code: &str) -> Self {
        Self {
            rows: vec![vec![code.to_string(); days]; hours],
        }
    }

    pub fn hours(&self) -> usize {
        self.rows.len()
    }

    pub fn days(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn cell_count(&self) -> usize {
        self.hours() * self.days()
    }

    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    pub fn get(&self, hour: usize, day: usize) -> Option<&str> {
        self.rows.get(hour)?.get(day).map(String::as_str)
    }

    pub fn set(&mut self, hour: usize, day: usize, code: &str) {
        self.rows[hour][day] = code.to_string();
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Cells of column `day`, top to bottom.
    pub fn column(&self, day: usize) -> impl Iterator<Item = &str> + '_ {
        self.rows.iter().map(move |r| r[day].as_str())
    }
}
