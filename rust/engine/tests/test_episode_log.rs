use std::fs;
use std::path::PathBuf;

use blackjack_engine::game::{Action, Phase};
use blackjack_engine::logger::{ActionRecord, EpisodeLogger, EpisodeRecord};

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn record(id: &str) -> EpisodeRecord {
    EpisodeRecord {
        episode_id: id.to_string(),
        seed: Some(42),
        num_decks: 1,
        actions: vec![
            ActionRecord {
                phase: Phase::Opening,
                action: Action::Hit,
            },
            ActionRecord {
                phase: Phase::InPlay,
                action: Action::Stand,
            },
        ],
        reward: 1.0,
        ts: None,
        meta: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("episodelog");
    let mut logger = EpisodeLogger::create(&path).expect("create logger");
    logger.write(&record("20250102-000001")).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn sequential_ids_increment() {
    let mut logger = EpisodeLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("episodelog_ts");
    let mut logger = EpisodeLogger::create(&path).expect("create logger");
    // missing ts -> logger should inject it
    logger.write(&record("20250102-000010")).expect("write");
    let line = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(line.contains("\"ts\":"), "ts should be injected");

    // preset ts should be preserved
    let preset = "2030-01-01T00:00:00Z".to_string();
    let rec2 = EpisodeRecord {
        ts: Some(preset.clone()),
        ..record("20250102-000011")
    };
    logger.write(&rec2).expect("write2");
    let content = String::from_utf8(fs::read(&path).unwrap()).unwrap();
    assert!(content.contains(&preset), "preset ts must be kept");
}

#[test]
fn records_round_trip_through_json() {
    let rec = record("20250102-000021");
    let line = serde_json::to_string(&rec).expect("serialize");
    let back: EpisodeRecord = serde_json::from_str(&line).expect("deserialize");
    assert_eq!(back, rec);
}
