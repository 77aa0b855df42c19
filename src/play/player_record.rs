//! Player Record - one participant in a logged play

use serde::{Deserialize, Serialize};

/// Player Record represents a single participant of a play: who sat at the
/// table, what they scored, and whether they won.
///
/// The `username` is a stable site identity and is empty for anonymous
/// guests; `display_name` is always present. The `score` field is raw text
/// exactly as logged: empty or non-numeric text means "no score recorded"
/// and is routine input, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRecord {
    play_id: u64,
    username: String,
    display_name: String,
    win: bool,
    score: String,
}

impl PlayerRecord {
    /// Create a new anonymous, non-winning player record with no score.
    ///
    /// # Arguments
    ///
    /// * `play_id` - ID of the owning play
    /// * `display_name` - Human-readable participant name
    #[must_use]
    pub fn new(play_id: u64, display_name: impl Into<String>) -> Self {
        Self {
            play_id,
            username: String::new(),
            display_name: display_name.into(),
            win: false,
            score: String::new(),
        }
    }

    /// Create a builder for constructing a player record with optional fields.
    #[must_use]
    pub fn builder(play_id: u64, display_name: impl Into<String>) -> PlayerRecordBuilder {
        PlayerRecordBuilder::new(play_id, display_name)
    }

    /// Get the ID of the owning play.
    #[must_use]
    pub const fn play_id(&self) -> u64 {
        self.play_id
    }

    /// Get the stable site identity; empty for anonymous participants.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the human-readable participant name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether this participant won the play.
    #[must_use]
    pub const fn win(&self) -> bool {
        self.win
    }

    /// Get the raw score text as logged.
    #[must_use]
    pub fn score(&self) -> &str {
        &self.score
    }

    /// The score parsed as a finite number, or `None` when the text is
    /// empty, non-numeric, or non-finite.
    ///
    /// Non-finite parses (`"inf"`, `"NaN"`) are rejected so score sums and
    /// extremes stay well-defined.
    #[must_use]
    pub fn numeric_score(&self) -> Option<f64> {
        self.score
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|score| score.is_finite())
    }

    /// The participant label used in high/low scorer lists: the display
    /// name, qualified with the username when one exists.
    ///
    /// # Example
    ///
    /// ```
    /// use meeple_stats::PlayerRecord;
    ///
    /// let anon = PlayerRecord::new(1, "Alice");
    /// assert_eq!(anon.unique_name(), "Alice");
    ///
    /// let known = PlayerRecord::builder(1, "Alice").username("alice42").build();
    /// assert_eq!(known.unique_name(), "Alice (alice42)");
    /// ```
    #[must_use]
    pub fn unique_name(&self) -> String {
        if self.username.is_empty() {
            self.display_name.clone()
        } else {
            format!("{} ({})", self.display_name, self.username)
        }
    }
}

/// Builder for `PlayerRecord`.
#[derive(Debug)]
pub struct PlayerRecordBuilder {
    play_id: u64,
    username: String,
    display_name: String,
    win: bool,
    score: String,
}

impl PlayerRecordBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(play_id: u64, display_name: impl Into<String>) -> Self {
        Self {
            play_id,
            username: String::new(),
            display_name: display_name.into(),
            win: false,
            score: String::new(),
        }
    }

    /// Set the stable site identity.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Mark the participant as a winner.
    #[must_use]
    pub const fn win(mut self, win: bool) -> Self {
        self.win = win;
        self
    }

    /// Set the raw score text.
    #[must_use]
    pub fn score(mut self, score: impl Into<String>) -> Self {
        self.score = score.into();
        self
    }

    /// Build the `PlayerRecord`.
    #[must_use]
    pub fn build(self) -> PlayerRecord {
        PlayerRecord {
            play_id: self.play_id,
            username: self.username,
            display_name: self.display_name,
            win: self.win,
            score: self.score,
        }
    }
}
