use std::path::PathBuf;

use anyhow::Result;
use utils::read_string;

use crate::error::RemapError;

const SEPARATOR: char = '\t';

/// Previous and future palette rows, 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSelection {
    pub prev: usize,
    pub future: usize,
}

impl RowSelection {
    /// Convert the 1-based line numbers given on the command line
    pub fn from_one_based(prev_row: usize, future_row: usize) -> Result<Self, RemapError> {
        if future_row <= prev_row {
            return Err(RemapError::InvalidRowOrder {
                prev: prev_row,
                future: future_row,
            });
        }
        if prev_row == 0 {
            return Err(RemapError::ZeroRow);
        }

        Ok(RowSelection {
            prev: prev_row - 1,
            future: future_row - 1,
        })
    }
}

/// Color schemes, one per line, tokens separated by tabs
#[derive(Debug, Default)]
pub struct PaletteTable {
    rows: Vec<Vec<String>>,
}

impl PaletteTable {
    pub fn parse(text: &str) -> Self {
        let rows = text
            .lines()
            .map(|line| {
                line.trim()
                    .split(SEPARATOR)
                    .map(|token| token.trim().to_string())
                    .collect()
            })
            .collect();

        PaletteTable { rows }
    }

    pub fn from_file(pb: &PathBuf) -> Result<Self> {
        Ok(Self::parse(&read_string(pb)?))
    }

    /// Tokens of a 0-based row
    pub fn row(&self, idx: usize) -> Result<&[String], RemapError> {
        self.rows
            .get(idx)
            .map(Vec::as_slice)
            .ok_or(RemapError::RowOutOfRange {
                row: idx + 1,
                rows: self.rows.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
