//! JSON Pipeline Example
//!
//! Deserializes a play log and its player rows from JSON (the shape a sync
//! layer would hand over), aggregates, and emits the snapshot as JSON for a
//! presentation layer to consume.
//!
//! Run with: cargo run --example stats_json

use chrono::NaiveDate;
use meeple_stats::{AggregateContext, PlayLog, PlayRecord, PlayerRecord};

const PLAYS_JSON: &str = r#"[
    {
        "id": 1,
        "date": "2020-01-04",
        "quantity": 3,
        "duration": 0,
        "player_count": 4,
        "incomplete": false,
        "no_win_stats": false,
        "players": []
    },
    {
        "id": 2,
        "date": "2020-02-22",
        "quantity": 2,
        "duration": 130,
        "player_count": 4,
        "incomplete": false,
        "no_win_stats": false,
        "players": []
    }
]"#;

const PLAYERS_JSON: &str = r#"[
    { "play_id": 1, "username": "alice42", "display_name": "Alice", "win": true, "score": "61" },
    { "play_id": 1, "username": "", "display_name": "Bob", "win": false, "score": "44" },
    { "play_id": 2, "username": "alice42", "display_name": "Alice", "win": false, "score": "39" },
    { "play_id": 2, "username": "", "display_name": "Bob", "win": true, "score": "61" }
]"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let plays: Vec<PlayRecord> = serde_json::from_str(PLAYS_JSON)?;
    let players: Vec<PlayerRecord> = serde_json::from_str(PLAYERS_JSON)?;

    let mut log = PlayLog::from_plays(plays);
    log.attach_players(players)?;

    let today = NaiveDate::from_ymd_opt(2020, 6, 1).expect("valid demo date");
    let ctx = AggregateContext::new("alice42", today)
        .with_nominal_playing_time(90)
        .with_rating(7.4);

    let stats = log.aggregate(&ctx);
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
