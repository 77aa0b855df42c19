//! Play record model
//!
//! Plain value types for logged plays and their participants, plus the
//! ordered [`PlayLog`] collection that performs the player-attachment join.
//!
//! ## Schema Overview
//!
//! ```text
//! PlayLog (ordered by date) ──< PlayRecord (1) ──< PlayerRecord (N)
//! ```
//!
//! ## Usage
//!
//! ```
//! use meeple_stats::play::{PlayLog, PlayRecord, PlayerRecord, parse_play_date};
//!
//! let date = parse_play_date("2020-01-01")?;
//! let mut log = PlayLog::new();
//! log.push(PlayRecord::builder(1, date).quantity(2).player_count(4).build());
//!
//! // Join participant rows onto their owning play
//! log.attach_players(vec![
//!     PlayerRecord::builder(1, "Alice").username("alice42").win(true).score("57").build(),
//!     PlayerRecord::builder(1, "Bob").score("41").build(),
//! ])?;
//!
//! assert_eq!(log.get(1).unwrap().players().len(), 2);
//! # Ok::<(), meeple_stats::Error>(())
//! ```

mod log;
mod play_record;
mod player_record;

pub use log::PlayLog;
pub use play_record::{parse_play_date, PlayRecord, PlayRecordBuilder};
pub use player_record::{PlayerRecord, PlayerRecordBuilder};
