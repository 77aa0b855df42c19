//! Play Record - one logged session of a game

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::PlayerRecord;
use crate::Result;

/// Date format supplied by the upstream store.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an upstream `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns [`crate::Error::Date`] when the text is not a valid ISO date.
pub fn parse_play_date(date: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(date, DATE_FORMAT)?)
}

/// Play Record represents one logged session of a game on a date. A single
/// record can stand for N identical plays logged together via `quantity`.
///
/// A record is immutable after construction except for incremental player
/// attachment (see [`add_player`](PlayRecord::add_player) and
/// [`PlayLog::attach_players`](super::PlayLog::attach_players)).
///
/// ## Missing data conventions
///
/// - `duration == 0` means the play length was never recorded; the
///   aggregation pass substitutes the game's nominal playing time.
/// - `player_count == 0` means the table size was never recorded.
/// - `incomplete` plays count only toward the incomplete-play tally.
/// - `no_win_stats` plays contribute to no win-related aggregate, even when
///   attached players carry win flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayRecord {
    id: u64,
    date: NaiveDate,
    quantity: u32,
    duration: u32,
    player_count: u32,
    incomplete: bool,
    no_win_stats: bool,
    players: Vec<PlayerRecord>,
}

impl PlayRecord {
    /// Create a single complete play on the given date with no recorded
    /// duration or player count.
    #[must_use]
    pub const fn new(id: u64, date: NaiveDate) -> Self {
        Self {
            id,
            date,
            quantity: 1,
            duration: 0,
            player_count: 0,
            incomplete: false,
            no_win_stats: false,
            players: Vec::new(),
        }
    }

    /// Create a builder for constructing a play record with optional fields.
    #[must_use]
    pub const fn builder(id: u64, date: NaiveDate) -> PlayRecordBuilder {
        PlayRecordBuilder::new(id, date)
    }

    /// Get the unique play id (the ownership key for player attachment).
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Get the calendar date of the play.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// How many identical plays this record stands for.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Get the recorded length in minutes; `0` means not recorded.
    #[must_use]
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    /// Get the table size; `0` means not recorded.
    #[must_use]
    pub const fn player_count(&self) -> u32 {
        self.player_count
    }

    /// Whether the play was abandoned before completion.
    #[must_use]
    pub const fn incomplete(&self) -> bool {
        self.incomplete
    }

    /// Whether win/loss outcomes are meaningless for this play.
    #[must_use]
    pub const fn no_win_stats(&self) -> bool {
        self.no_win_stats
    }

    /// Get the attached participants.
    #[must_use]
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    /// Attach a participant to this play.
    pub fn add_player(&mut self, player: PlayerRecord) {
        self.players.push(player);
    }

    /// The calendar year of the play date.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// The `(year, month)` of the play date, the key for the
    /// distinct-months-played tally.
    #[must_use]
    pub fn year_month(&self) -> (i32, u32) {
        (self.date.year(), self.date.month())
    }

    /// Whether win/loss outcomes are meaningful for this play: not flagged
    /// `no_win_stats`, and at least one attached participant actually won.
    #[must_use]
    pub fn is_win_eligible(&self) -> bool {
        if self.no_win_stats {
            return false;
        }
        self.players.iter().any(PlayerRecord::win)
    }

    /// Whether the participant with the given username won this play.
    ///
    /// Returns `false` when the play is flagged `no_win_stats` or no
    /// attached participant carries that username. The first participant
    /// with a matching username decides.
    #[must_use]
    pub fn did_user_win(&self, username: &str) -> bool {
        if self.no_win_stats {
            return false;
        }
        self.players
            .iter()
            .find(|player| player.username() == username)
            .is_some_and(PlayerRecord::win)
    }
}

/// Builder for `PlayRecord`.
#[derive(Debug)]
pub struct PlayRecordBuilder {
    id: u64,
    date: NaiveDate,
    quantity: u32,
    duration: u32,
    player_count: u32,
    incomplete: bool,
    no_win_stats: bool,
}

impl PlayRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub const fn new(id: u64, date: NaiveDate) -> Self {
        Self {
            id,
            date,
            quantity: 1,
            duration: 0,
            player_count: 0,
            incomplete: false,
            no_win_stats: false,
        }
    }

    /// Set how many identical plays the record stands for.
    #[must_use]
    pub const fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set the recorded length in minutes.
    #[must_use]
    pub const fn duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the table size.
    #[must_use]
    pub const fn player_count(mut self, player_count: u32) -> Self {
        self.player_count = player_count;
        self
    }

    /// Mark the play as abandoned before completion.
    #[must_use]
    pub const fn incomplete(mut self, incomplete: bool) -> Self {
        self.incomplete = incomplete;
        self
    }

    /// Exclude the play from all win-related aggregates.
    #[must_use]
    pub const fn no_win_stats(mut self, no_win_stats: bool) -> Self {
        self.no_win_stats = no_win_stats;
        self
    }

    /// Build the `PlayRecord`.
    #[must_use]
    pub fn build(self) -> PlayRecord {
        PlayRecord {
            id: self.id,
            date: self.date,
            quantity: self.quantity,
            duration: self.duration,
            player_count: self.player_count,
            incomplete: self.incomplete,
            no_win_stats: self.no_win_stats,
            players: Vec::new(),
        }
    }
}
