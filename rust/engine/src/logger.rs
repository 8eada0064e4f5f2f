use serde::{Deserialize, Serialize};

use crate::game::{Action, Phase};

/// Records a single player decision within an episode.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Phase the decision was made in
    pub phase: Phase,
    /// The action taken
    pub action: Action,
}

/// Complete record of one played hand: configuration, decisions and outcome.
/// Serialized to JSONL for episode storage and deterministic replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Unique identifier for this episode (format: YYYYMMDD-NNNNNN)
    pub episode_id: String,
    /// RNG seed the engine was constructed with (enables replay)
    pub seed: Option<u64>,
    /// Shoe size in decks
    pub num_decks: u32,
    /// Chronological list of player decisions
    pub actions: Vec<ActionRecord>,
    /// Terminal value of the hand
    pub reward: f64,
    /// Timestamp when the episode was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_episode_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct EpisodeLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl EpisodeLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: "19700101".to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_episode_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &EpisodeRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
