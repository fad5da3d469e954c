//! lotto-logging: NDJSON event log for ticket checks and simulated draws.
//!
//! Events are plain structs over primitive fields so this crate does not
//! depend on `lotto-core`; callers flatten domain values on the way in.

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bumped whenever an event struct changes shape.
pub const EVENT_SCHEMA_VERSION: u32 = 1;

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// Content hash of the raw config file, recorded with draw summaries.
pub fn hash_config_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Versioning block carried by every event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionInfoV1 {
    pub event_schema_version: u32,
    pub ruleset_id: String,
}

impl VersionInfoV1 {
    pub fn new(ruleset_id: &str) -> Self {
        Self {
            event_schema_version: EVENT_SCHEMA_VERSION,
            ruleset_id: ruleset_id.to_string(),
        }
    }
}

/// One candidate ticket compared against the draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketCheckedEventV1 {
    pub event: String,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub ticket_idx: u64,
    pub numbers: [u8; 6],
    pub match_count: u32,
    pub bonus_matched: bool,
    pub prize: String,
}

/// Tally of a whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawSummaryEventV1 {
    pub event: String,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub winning: [u8; 6],
    pub bonus: u8,

    pub tickets: u64,
    /// Prize name -> ticket count.
    pub counts: BTreeMap<String, u64>,
    pub total_prize: u64,
    pub spent: u64,
    pub return_rate: f64,

    pub config_hash: Option<String>,
}

pub const EVENT_TICKET_CHECKED: &str = "ticket_checked";
pub const EVENT_DRAW_SUMMARY: &str = "draw_summary";

#[derive(Debug, Error)]
pub enum NdjsonError {
    #[error("ndjson io: {0}")]
    Io(#[from] io::Error),
    #[error("ndjson encode: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use serde_json::Value;

    fn read_ndjson_lenient(path: &Path) -> Vec<Value> {
        let s = fs::read_to_string(path).expect("read");
        let mut out = Vec::new();
        for line in s.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if let Ok(v) = serde_json::from_str::<Value>(line) {
                out.push(v);
            }
        }
        out
    }

    fn checked(idx: u64) -> TicketCheckedEventV1 {
        TicketCheckedEventV1 {
            event: EVENT_TICKET_CHECKED.to_string(),
            ts_ms: now_ms(),
            v: VersionInfoV1::new("lotto_6_45_v1"),
            ticket_idx: idx,
            numbers: [1, 2, 3, 4, 5, 7],
            match_count: 5,
            bonus_matched: false,
            prize: "third".to_string(),
        }
    }

    #[test]
    fn version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn writes_one_valid_json_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.ndjson");
        let mut w = NdjsonWriter::open_append(&path).unwrap();

        w.write_event(&checked(0)).unwrap();
        w.write_event(&checked(1)).unwrap();
        w.flush().unwrap();

        let vals = read_ndjson_lenient(&path);
        assert_eq!(vals.len(), 2);
        assert_eq!(vals[0]["ticket_idx"], 0);
        assert_eq!(vals[1]["ticket_idx"], 1);
        assert_eq!(vals[1]["event"], "ticket_checked");
        assert_eq!(vals[1]["v"]["event_schema_version"], EVENT_SCHEMA_VERSION);
        assert_eq!(vals[1]["numbers"][5], 7);
    }

    #[test]
    fn periodic_flush_makes_lines_visible() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.ndjson");
        let mut w = NdjsonWriter::open_append_with_flush(&path, 2).unwrap();

        w.write_event(&checked(0)).unwrap();
        w.write_event(&checked(1)).unwrap();
        // Flushed by the writer itself; no explicit flush() call.
        assert_eq!(read_ndjson_lenient(&path).len(), 2);
    }

    #[test]
    fn reopening_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.ndjson");
        for idx in 0..2 {
            let mut w = NdjsonWriter::open_append(&path).unwrap();
            w.write_event(&checked(idx)).unwrap();
            w.flush().unwrap();
        }
        assert_eq!(read_ndjson_lenient(&path).len(), 2);
    }

    #[test]
    fn lenient_reader_tolerates_trailing_partial_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.ndjson");

        {
            let mut w = NdjsonWriter::open_append(&path).unwrap();
            w.write_event(&checked(0)).unwrap();
            w.flush().unwrap();
        }

        // Simulate crash: append a partial JSON line (no newline, invalid JSON).
        let mut f = OpenOptions::new().append(true).open(&path).unwrap();
        f.write_all(br#"{"event":"ticket_checked","ticket_idx":"#).unwrap();
        f.flush().unwrap();

        let vals = read_ndjson_lenient(&path);
        assert_eq!(vals.len(), 1);
        assert_eq!(vals[0]["ticket_idx"], 0);
    }

    #[test]
    fn draw_summary_serializes_counts_by_name() {
        let e = DrawSummaryEventV1 {
            event: EVENT_DRAW_SUMMARY.to_string(),
            ts_ms: 1,
            v: VersionInfoV1::new("lotto_6_45_v1"),
            winning: [1, 2, 3, 4, 5, 6],
            bonus: 7,
            tickets: 3,
            counts: BTreeMap::from([("fifth".to_string(), 1), ("lose".to_string(), 2)]),
            total_prize: 5_000,
            spent: 3_000,
            return_rate: 5_000.0 / 3_000.0,
            config_hash: Some(hash_config_bytes(b"tally:\n  mode: omit_zero\n")),
        };
        let v: Value = serde_json::to_value(&e).unwrap();
        assert_eq!(v["counts"]["lose"], 2);
        assert_eq!(v["bonus"], 7);
        assert_eq!(v["config_hash"].as_str().unwrap().len(), 64);

        let back: DrawSummaryEventV1 = serde_json::from_value(v).unwrap();
        assert_eq!(back.counts, e.counts);
    }

    #[test]
    fn config_hash_is_stable() {
        assert_eq!(hash_config_bytes(b"abc"), hash_config_bytes(b"abc"));
        assert_ne!(hash_config_bytes(b"abc"), hash_config_bytes(b"abd"));
    }
}
