use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;
use utils::read_string;

use crate::error::TreeError;

const SEPARATOR: char = '\t';

/// One parent -> clade edge of the hierarchy table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyRow {
    pub parent: String,
    pub clade: String,
    /// Display label, empty when the row has none
    pub who: String,
}

impl HierarchyRow {
    pub fn new(parent: &str, clade: &str, who: &str) -> Self {
        HierarchyRow {
            parent: parent.to_string(),
            clade: clade.to_string(),
            who: who.to_string(),
        }
    }
}

/// Read the hierarchy table from an http(s) URL or a local path
pub fn load_source(source: &str) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        debug!("Fetching {}", source);
        reqwest::blocking::get(source)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .with_context(|| format!("Failed to fetch \"{}\"", source))
    } else {
        read_string(&PathBuf::from(source))
    }
}

/// Parse a tab separated table whose header names a `parent`, a `clade` and
/// optionally a `WHO` column. Missing cells become empty strings.
pub fn parse_hierarchy(text: &str) -> Result<Vec<HierarchyRow>, TreeError> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header: Vec<&str> = lines
        .next()
        .ok_or(TreeError::Empty)?
        .split(SEPARATOR)
        .map(str::trim)
        .collect();
    let column = |name: &'static str| header.iter().position(|&h| h == name);

    let parent_idx = column("parent").ok_or(TreeError::MissingColumn("parent"))?;
    let clade_idx = column("clade").ok_or(TreeError::MissingColumn("clade"))?;
    let who_idx = column("WHO");

    let rows = lines
        .map(|line| {
            let cells: Vec<&str> = line.split(SEPARATOR).map(str::trim).collect();
            let cell = |idx: Option<usize>| idx.and_then(|i| cells.get(i).copied()).unwrap_or("");

            HierarchyRow::new(cell(Some(parent_idx)), cell(Some(clade_idx)), cell(who_idx))
        })
        .collect();

    Ok(rows)
}
