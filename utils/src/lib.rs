use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Create a BufReader that reads from a file denoted by its PathBuf
pub fn open_read(pb: &PathBuf) -> Result<BufReader<File>> {
    let file = OpenOptions::new()
        .read(true)
        .open(pb)
        .with_context(|| format!("Failed to open file \"{}\" for reading", pb.display()))?;
    Ok(BufReader::new(file))
}

/// Create a BufWriter that writes to a file denoted by its PathBuf.
/// The file is created when missing and truncated when it exists.
pub fn open_write(pb: &PathBuf) -> Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(pb)
        .with_context(|| format!("Failed to open file \"{}\" for writing", pb.display()))?;
    Ok(BufWriter::new(file))
}

/// Read a whole file into a String
pub fn read_string(pb: &PathBuf) -> Result<String> {
    let mut content = String::new();
    open_read(pb)?
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read \"{}\"", pb.display()))?;
    Ok(content)
}

/// Replace the contents of a file with the given String
pub fn write_string(pb: &PathBuf, content: &str) -> Result<()> {
    let mut writer = open_write(pb)?;
    writer
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write \"{}\"", pb.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush \"{}\"", pb.display()))
}

pub fn now() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Error getting system time")
        .as_millis()
}

pub fn now_str() -> String {
    let n = now() / 1000;
    let dt: DateTime<Utc> = SystemTime::now().into();
    format!("{} ({})", n, dt.format("%Y-%m-%d %H:%M:%S"))
}

/// Log timestamps in the same shape as `now_str`
struct NowStr;

impl FormatTime for NowStr {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "[{}]", now_str())
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second initialisation (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(NowStr)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");

        write_string(&path, "a much longer first version").unwrap();
        write_string(&path, "short").unwrap();

        assert_eq!(read_string(&path).unwrap(), "short");
    }

    #[test]
    fn open_read_reports_the_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.tsv");

        let err = open_read(&path).unwrap_err();
        assert!(err.to_string().contains("missing.tsv"));
    }

    #[test]
    fn now_str_contains_unix_seconds_and_date() {
        let s = now_str();
        let (secs, date) = s.split_once(' ').unwrap();
        assert!(secs.parse::<u128>().is_ok());
        assert!(date.starts_with('(') && date.ends_with(')'));
    }

    #[test]
    fn init_logging_tolerates_a_second_call() {
        init_logging();
        init_logging();
    }
}
