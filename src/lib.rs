//! # Meeple-Stats: Play-Statistics Aggregation Engine
//!
//! Meeple-stats turns a chronological log of tabletop game plays into a
//! rich statistics snapshot: milestone dates (nickel/dime/quarter), score
//! extremes with tie tracking, win rates, time-played estimates, and
//! composite engagement scores built on exponential decay and logarithmic
//! transforms of play frequency.
//!
//! The engine is a pure, synchronous, single-pass computation. The data
//! store that persists plays, the sync process that populates it, and the
//! presentation layer that formats the numbers are all external
//! collaborators: the engine consumes in-process records and returns an
//! immutable snapshot.
//!
//! ## Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use meeple_stats::{AggregateContext, PlayLog, PlayRecord, PlayerRecord};
//!
//! // Plays arrive from the store in ascending date order
//! let mut log = PlayLog::new();
//! log.push(PlayRecord::builder(1, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
//!     .quantity(4)
//!     .player_count(2)
//!     .build());
//! log.push(PlayRecord::builder(2, NaiveDate::from_ymd_opt(2020, 2, 1).unwrap())
//!     .quantity(3)
//!     .duration(95)
//!     .player_count(2)
//!     .build());
//!
//! // Participant rows join onto their owning play by id
//! log.attach_players(vec![
//!     PlayerRecord::builder(2, "Alice").username("alice42").win(true).score("57").build(),
//!     PlayerRecord::builder(2, "Bob").score("41").build(),
//! ])?;
//!
//! let ctx = AggregateContext::new("alice42", NaiveDate::from_ymd_opt(2020, 6, 1).unwrap())
//!     .with_nominal_playing_time(45)
//!     .with_rating(7.5);
//! let stats = log.aggregate(&ctx);
//!
//! assert_eq!(stats.play_count(), 7);
//! assert_eq!(stats.nickel_date(), NaiveDate::from_ymd_opt(2020, 2, 1));
//! assert_eq!(stats.high_score(), Some(57.0));
//! assert!(stats.has_wins());
//! # Ok::<(), meeple_stats::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod play;
pub mod stats;

pub use error::{Error, Result};
pub use play::{parse_play_date, PlayLog, PlayRecord, PlayerRecord};
pub use stats::{aggregate, average_rating, AggregateContext, PlayStats};
