//! Aggregated play statistics snapshot

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregated play statistics for one game, computed by a single pass over
/// the play log. Immutable once built.
///
/// Totals are stored; derived metrics are computed on read from the stored
/// totals, so each formula's inputs stay explicit. Metrics that are
/// undefined until their guard holds ([`has_wins`](Self::has_wins),
/// [`has_scores`](Self::has_scores)) return `Option`: absence is explicit
/// in the type, never a sentinel value that could flow into arithmetic
/// unnoticed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayStats {
    pub(crate) first_play_date: Option<NaiveDate>,
    pub(crate) last_play_date: Option<NaiveDate>,
    pub(crate) nickel_date: Option<NaiveDate>,
    pub(crate) dime_date: Option<NaiveDate>,
    pub(crate) quarter_date: Option<NaiveDate>,

    pub(crate) play_count: u32,
    pub(crate) incomplete_play_count: u32,
    pub(crate) play_count_this_year: u32,
    pub(crate) play_count_with_length: u32,
    pub(crate) player_count_sum_with_length: u32,
    pub(crate) play_count_per_player_count: BTreeMap<u32, u32>,
    pub(crate) months_played: u32,

    pub(crate) real_minutes: u64,
    pub(crate) estimated_minutes: u64,

    pub(crate) winnable_games: u32,
    pub(crate) winnable_player_count: u32,
    pub(crate) won_games: u32,
    pub(crate) won_player_count: u32,

    pub(crate) score_sum: f64,
    pub(crate) score_count: u32,
    pub(crate) high_score: Option<f64>,
    pub(crate) high_scorers: Vec<String>,
    pub(crate) low_score: Option<f64>,
    pub(crate) low_scorers: Vec<String>,
    pub(crate) winning_score_sum: f64,
    pub(crate) winning_score_count: u32,
    pub(crate) personal_score_sum: f64,
    pub(crate) personal_score_count: u32,
    pub(crate) personal_high_score: Option<f64>,
    pub(crate) personal_low_score: Option<f64>,

    pub(crate) flash_days: i64,
    pub(crate) lag_days: i64,
    pub(crate) rating: f64,
}

impl PlayStats {
    // --- pass totals -------------------------------------------------------

    /// Total quantity of complete plays.
    #[must_use]
    pub const fn play_count(&self) -> u32 {
        self.play_count
    }

    /// Total quantity of plays flagged incomplete.
    #[must_use]
    pub const fn incomplete_play_count(&self) -> u32 {
        self.incomplete_play_count
    }

    /// Quantity of complete plays dated in the reference year.
    #[must_use]
    pub const fn play_count_this_year(&self) -> u32 {
        self.play_count_this_year
    }

    /// Quantity of plays that carried a recorded length.
    #[must_use]
    pub const fn play_count_with_length(&self) -> u32 {
        self.play_count_with_length
    }

    /// Number of distinct calendar months containing at least one play.
    #[must_use]
    pub const fn months_played(&self) -> u32 {
        self.months_played
    }

    /// Date of the first complete play, if any.
    #[must_use]
    pub const fn first_play_date(&self) -> Option<NaiveDate> {
        self.first_play_date
    }

    /// Date of the most recent complete play, if any.
    #[must_use]
    pub const fn last_play_date(&self) -> Option<NaiveDate> {
        self.last_play_date
    }

    /// Date the cumulative play count first reached 5.
    #[must_use]
    pub const fn nickel_date(&self) -> Option<NaiveDate> {
        self.nickel_date
    }

    /// Date the cumulative play count first reached 10.
    #[must_use]
    pub const fn dime_date(&self) -> Option<NaiveDate> {
        self.dime_date
    }

    /// Date the cumulative play count first reached 25.
    #[must_use]
    pub const fn quarter_date(&self) -> Option<NaiveDate> {
        self.quarter_date
    }

    /// Minutes of recorded play length.
    #[must_use]
    pub const fn real_minutes(&self) -> u64 {
        self.real_minutes
    }

    /// Minutes estimated from the game's nominal playing time for plays
    /// whose length was never recorded.
    #[must_use]
    pub const fn estimated_minutes(&self) -> u64 {
        self.estimated_minutes
    }

    /// Whole days between the first and last play, floored at 1 (the active
    /// period).
    #[must_use]
    pub const fn flash_days(&self) -> i64 {
        self.flash_days
    }

    /// Whole days between the last play and the reference date, floored
    /// at 1.
    #[must_use]
    pub const fn lag_days(&self) -> i64 {
        self.lag_days
    }

    /// The external average rating supplied to the aggregation.
    #[must_use]
    pub const fn rating(&self) -> f64 {
        self.rating
    }

    /// Largest recorded table size, 0 when no play carried one.
    #[must_use]
    pub fn max_player_count(&self) -> u32 {
        self.play_count_per_player_count
            .last_key_value()
            .map_or(0, |(&player_count, _)| player_count)
    }

    /// Quantity of plays recorded at exactly the given table size.
    #[must_use]
    pub fn play_count_with(&self, player_count: u32) -> u32 {
        self.play_count_per_player_count
            .get(&player_count)
            .copied()
            .unwrap_or(0)
    }

    // --- time metrics ------------------------------------------------------

    /// Total hours played, combining recorded and estimated minutes.
    #[must_use]
    pub fn hours_played(&self) -> f64 {
        (self.real_minutes + self.estimated_minutes) as f64 / 60.0
    }

    /// Plays per month over the active period, capped at the play count so
    /// a single burst of plays on one day does not explode the rate.
    #[must_use]
    pub fn play_rate(&self) -> f64 {
        if self.flash_days <= 0 {
            return 0.0;
        }
        let rate = (f64::from(self.play_count) * 365.0 / self.flash_days as f64) / 12.0;
        rate.min(f64::from(self.play_count))
    }

    /// Mean recorded length per play, in minutes; 0 when no play carried a
    /// length.
    #[must_use]
    pub fn average_play_time(&self) -> f64 {
        if self.play_count_with_length == 0 {
            return 0.0;
        }
        self.real_minutes as f64 / f64::from(self.play_count_with_length)
    }

    /// Mean recorded length per player-seat, in minutes; 0 when no play
    /// carried both a length and a table size.
    #[must_use]
    pub fn average_play_time_per_player(&self) -> f64 {
        if self.player_count_sum_with_length == 0 {
            return 0.0;
        }
        self.real_minutes as f64 / f64::from(self.player_count_sum_with_length)
    }

    // --- win metrics -------------------------------------------------------

    /// Whether any win-eligible play was aggregated. Gates the win metrics.
    #[must_use]
    pub const fn has_wins(&self) -> bool {
        self.winnable_games > 0
    }

    /// Fraction of win-eligible plays the current user won, or `None` when
    /// nothing was win-eligible.
    #[must_use]
    pub fn win_percentage(&self) -> Option<f64> {
        self.has_wins()
            .then(|| f64::from(self.won_games) / f64::from(self.winnable_games))
    }

    /// Win rate weighted by table size: beating more opponents counts for
    /// more. `None` when nothing was win-eligible.
    #[must_use]
    pub fn win_skill(&self) -> Option<i64> {
        self.has_wins().then(|| {
            (f64::from(self.won_player_count) / f64::from(self.winnable_games) * 100.0).round()
                as i64
        })
    }

    // --- score metrics -----------------------------------------------------

    /// Whether any numeric score was aggregated. Gates the score metrics.
    #[must_use]
    pub const fn has_scores(&self) -> bool {
        self.score_count > 0
    }

    /// Mean of all numeric scores, or `None` when nothing was scored.
    #[must_use]
    pub fn average_score(&self) -> Option<f64> {
        self.has_scores()
            .then(|| self.score_sum / f64::from(self.score_count))
    }

    /// Mean of the winners' numeric scores, or `None` when no winner was
    /// scored.
    #[must_use]
    pub fn average_winning_score(&self) -> Option<f64> {
        (self.winning_score_count > 0)
            .then(|| self.winning_score_sum / f64::from(self.winning_score_count))
    }

    /// Highest numeric score seen, or `None` when nothing was scored.
    #[must_use]
    pub const fn high_score(&self) -> Option<f64> {
        self.high_score
    }

    /// Labels of the participants sharing the high score, sorted.
    #[must_use]
    pub fn high_scorers(&self) -> &[String] {
        &self.high_scorers
    }

    /// Lowest numeric score seen, or `None` when nothing was scored.
    #[must_use]
    pub const fn low_score(&self) -> Option<f64> {
        self.low_score
    }

    /// Labels of the participants sharing the low score, sorted.
    #[must_use]
    pub fn low_scorers(&self) -> &[String] {
        &self.low_scorers
    }

    /// Mean of the current user's numeric scores, or `None` when the user
    /// has no scored plays.
    #[must_use]
    pub fn personal_average_score(&self) -> Option<f64> {
        (self.personal_score_count > 0)
            .then(|| self.personal_score_sum / f64::from(self.personal_score_count))
    }

    /// The current user's best score, or `None` when the user has no scored
    /// plays.
    #[must_use]
    pub const fn personal_high_score(&self) -> Option<f64> {
        self.personal_high_score
    }

    /// The current user's worst score, or `None` when the user has no
    /// scored plays.
    #[must_use]
    pub const fn personal_low_score(&self) -> Option<f64> {
        self.personal_low_score
    }

    // --- engagement metrics ------------------------------------------------

    /// Exponential-decay saturation of a notional ownership-value curve:
    /// `1 - e^(-lambda * play_count)` with `lambda = -ln(0.1) / 10`, so ten
    /// plays reach 90% utilization.
    #[must_use]
    pub fn utilization(&self) -> f64 {
        let lambda = (0.1_f64).ln() / -10.0;
        1.0 - (-lambda * f64::from(self.play_count)).exp()
    }

    /// Friendless "hotness" metric: rating, play count, breadth of months
    /// played, and hours played blended into one engagement score.
    #[must_use]
    pub fn fhm(&self) -> i64 {
        (self.rating.mul_add(5.0, f64::from(self.play_count))
            + f64::from(4 * self.months_played)
            + self.hours_played())
        .round() as i64
    }

    /// Huber "happiness" metric: hours played weighted by how far the
    /// rating sits from the 5-point midpoint. Negative for games rated
    /// below 5.
    #[must_use]
    pub fn hhm(&self) -> i64 {
        ((self.rating - 5.0) * self.hours_played()).round() as i64
    }

    /// Logarithmic engagement score blending play recency (active period
    /// over lag), months played, and rating. Returns 0 when the product is
    /// 0; a negative product (possible only with a negative external
    /// rating) is the caller's responsibility.
    #[must_use]
    pub fn ruhm(&self) -> f64 {
        let raw = (self.flash_days as f64 / self.lag_days as f64)
            * f64::from(self.months_played)
            * self.rating;
        if raw == 0.0 {
            return 0.0;
        }
        raw.ln()
    }

    /// Whitemore score: `rating * 2 - 13`, truncated and floored at 0, so
    /// only games rated above 6.5 register.
    #[must_use]
    pub fn whitemore_score(&self) -> i64 {
        let score = self.rating.mul_add(2.0, -13.0) as i64;
        score.max(0)
    }

    /// Zefquaavius score: the square of the rating's distance from the 5.5
    /// neutral point, scaled to [-10, 10] and signed by which side of
    /// neutral the rating falls.
    #[must_use]
    pub fn zefquaavius_score(&self) -> f64 {
        let neutral_rating = 5.5;
        let distance = self.rating - neutral_rating;
        let squared = distance * distance;
        if self.rating < neutral_rating {
            -squared / 2.025
        } else {
            squared / 2.025
        }
    }

    /// Gray hotness over a recent interval of plays.
    ///
    /// Experimental: no shipped caller supplies an interval play count, and
    /// the weighting term uses the lifetime [`hhm`](Self::hhm) as an
    /// approximation. Returns 0 when no plays were aggregated.
    #[must_use]
    pub fn gray_hotness(&self, interval_play_count: u32) -> f64 {
        if self.play_count == 0 {
            return 0.0;
        }
        let s = 1.0 + f64::from(interval_play_count) / f64::from(self.play_count);
        // TODO: the hhm term should cover only the interval, not the lifetime total
        s * s * f64::from(interval_play_count).sqrt() * self.hhm() as f64
    }

    /// Gray hotness weighted by the Zefquaavius score. Experimental, see
    /// [`gray_hotness`](Self::gray_hotness).
    #[must_use]
    pub fn zefquaavius_hotness(&self, interval_play_count: u32) -> f64 {
        self.gray_hotness(interval_play_count) * self.zefquaavius_score()
    }
}
