//! Single-pass aggregation over an ordered play log
//!
//! One forward fold over the plays builds every total the snapshot needs:
//! milestone dates, duration accounting with nominal-time fallback, win and
//! score tallies, and the distinct-months set. The accumulator is a plain
//! value scoped to one [`aggregate`] call, so concurrent aggregations never
//! share state.

use chrono::{Datelike, NaiveDate};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::play::PlayRecord;
use crate::stats::extreme::ExtremeTracker;
use crate::stats::PlayStats;

// Cumulative play counts at which a milestone date is recorded
const NICKEL: u32 = 5;
const DIME: u32 = 10;
const QUARTER: u32 = 25;

/// Out-of-band inputs to an aggregation run.
///
/// The reference date and year are explicit so the engine is deterministic
/// and testable without mocking the wall clock; production callers pass
/// "today".
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateContext {
    current_user: String,
    nominal_playing_time: u32,
    rating: f64,
    today: NaiveDate,
    year: i32,
}

impl AggregateContext {
    /// Create a context for the given user and reference date. The
    /// reference year defaults to the reference date's year; nominal
    /// playing time and rating default to 0 (not available).
    #[must_use]
    pub fn new(current_user: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            current_user: current_user.into(),
            nominal_playing_time: 0,
            rating: 0.0,
            today,
            year: today.year(),
        }
    }

    /// Set the game's nominal playing time in minutes, used to estimate the
    /// time spent on plays with no recorded length.
    #[must_use]
    pub const fn with_nominal_playing_time(mut self, minutes: u32) -> Self {
        self.nominal_playing_time = minutes;
        self
    }

    /// Set the external average rating feeding the engagement metrics.
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Override the reference year used for the this-year play counter.
    #[must_use]
    pub const fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Get the current user's stable identity.
    #[must_use]
    pub fn current_user(&self) -> &str {
        &self.current_user
    }

    /// Get the nominal playing time in minutes.
    #[must_use]
    pub const fn nominal_playing_time(&self) -> u32 {
        self.nominal_playing_time
    }

    /// Get the external average rating.
    #[must_use]
    pub const fn rating(&self) -> f64 {
        self.rating
    }

    /// Get the reference date.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Get the reference year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }
}

/// Mean of the strictly positive entries of a rating collection, or `None`
/// when there are none. Unrated entries come through as 0 upstream, so they
/// are excluded rather than dragging the mean down.
#[must_use]
pub fn average_rating(ratings: &[f64]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0_u32;
    for &rating in ratings {
        if rating > 0.0 {
            sum += rating;
            count += 1;
        }
    }
    (count > 0).then(|| sum / f64::from(count))
}

/// Running totals for one aggregation pass.
#[derive(Debug, Clone)]
struct PlayTotals {
    first_play_date: Option<NaiveDate>,
    last_play_date: Option<NaiveDate>,
    nickel_date: Option<NaiveDate>,
    dime_date: Option<NaiveDate>,
    quarter_date: Option<NaiveDate>,
    play_count: u32,
    incomplete_play_count: u32,
    play_count_this_year: u32,
    play_count_with_length: u32,
    player_count_sum_with_length: u32,
    play_count_per_player_count: FxHashMap<u32, u32>,
    real_minutes: u64,
    estimated_minutes: u64,
    winnable_games: u32,
    winnable_player_count: u32,
    won_games: u32,
    won_player_count: u32,
    score_sum: f64,
    score_count: u32,
    high: ExtremeTracker,
    low: ExtremeTracker,
    winning_score_sum: f64,
    winning_score_count: u32,
    personal_score_sum: f64,
    personal_score_count: u32,
    personal_high_score: Option<f64>,
    personal_low_score: Option<f64>,
    months: FxHashSet<(i32, u32)>,
}

impl PlayTotals {
    fn new() -> Self {
        Self {
            first_play_date: None,
            last_play_date: None,
            nickel_date: None,
            dime_date: None,
            quarter_date: None,
            play_count: 0,
            incomplete_play_count: 0,
            play_count_this_year: 0,
            play_count_with_length: 0,
            player_count_sum_with_length: 0,
            play_count_per_player_count: FxHashMap::default(),
            real_minutes: 0,
            estimated_minutes: 0,
            winnable_games: 0,
            winnable_player_count: 0,
            won_games: 0,
            won_player_count: 0,
            score_sum: 0.0,
            score_count: 0,
            high: ExtremeTracker::highest(),
            low: ExtremeTracker::lowest(),
            winning_score_sum: 0.0,
            winning_score_count: 0,
            personal_score_sum: 0.0,
            personal_score_count: 0,
            personal_high_score: None,
            personal_low_score: None,
            months: FxHashSet::default(),
        }
    }

    /// Fold one play into the totals.
    fn observe(&mut self, play: &PlayRecord, ctx: &AggregateContext) {
        if play.incomplete() {
            self.incomplete_play_count += play.quantity();
            return;
        }

        if self.first_play_date.is_none() {
            self.first_play_date = Some(play.date());
        }
        self.last_play_date = Some(play.date());

        // Milestones are checked before the quantity lands, so a single
        // large record can set several at once
        let reached = self.play_count + play.quantity();
        if self.play_count < NICKEL && reached >= NICKEL {
            self.nickel_date = Some(play.date());
        }
        if self.play_count < DIME && reached >= DIME {
            self.dime_date = Some(play.date());
        }
        if self.play_count < QUARTER && reached >= QUARTER {
            self.quarter_date = Some(play.date());
        }
        self.play_count += play.quantity();
        if play.year() == ctx.year {
            self.play_count_this_year += play.quantity();
        }

        if play.duration() == 0 {
            self.estimated_minutes +=
                u64::from(ctx.nominal_playing_time) * u64::from(play.quantity());
        } else {
            self.real_minutes += u64::from(play.duration());
            self.play_count_with_length += play.quantity();
            self.player_count_sum_with_length += play.player_count() * play.quantity();
        }

        if play.player_count() > 0 {
            *self
                .play_count_per_player_count
                .entry(play.player_count())
                .or_insert(0) += play.quantity();
        }

        if play.is_win_eligible() {
            self.winnable_games += play.quantity();
            self.winnable_player_count += play.quantity() * play.player_count();
            if play.did_user_win(&ctx.current_user) {
                self.won_games += play.quantity();
                self.won_player_count += play.quantity() * play.player_count();
            }
        }

        for player in play.players() {
            let Some(score) = player.numeric_score() else {
                continue;
            };
            self.score_count += 1;
            self.score_sum += score;
            let label = player.unique_name();
            self.high.observe(score, &label);
            self.low.observe(score, &label);
            if player.win() {
                self.winning_score_count += 1;
                self.winning_score_sum += score;
            }
            if player.username() == ctx.current_user {
                self.personal_score_count += 1;
                self.personal_score_sum += score;
                self.personal_high_score =
                    Some(self.personal_high_score.map_or(score, |high| high.max(score)));
                self.personal_low_score =
                    Some(self.personal_low_score.map_or(score, |low| low.min(score)));
            }
        }

        self.months.insert(play.year_month());
    }

    /// Freeze the totals into the immutable snapshot.
    fn finish(self, ctx: &AggregateContext) -> PlayStats {
        let flash_days = days_between(self.first_play_date, self.last_play_date, ctx.today);
        let lag_days = days_between(self.last_play_date, None, ctx.today);
        let (high_score, high_scorers) = self.high.finish();
        let (low_score, low_scorers) = self.low.finish();

        PlayStats {
            first_play_date: self.first_play_date,
            last_play_date: self.last_play_date,
            nickel_date: self.nickel_date,
            dime_date: self.dime_date,
            quarter_date: self.quarter_date,
            play_count: self.play_count,
            incomplete_play_count: self.incomplete_play_count,
            play_count_this_year: self.play_count_this_year,
            play_count_with_length: self.play_count_with_length,
            player_count_sum_with_length: self.player_count_sum_with_length,
            play_count_per_player_count: self.play_count_per_player_count.into_iter().collect(),
            months_played: u32::try_from(self.months.len()).unwrap_or(u32::MAX),
            real_minutes: self.real_minutes,
            estimated_minutes: self.estimated_minutes,
            winnable_games: self.winnable_games,
            winnable_player_count: self.winnable_player_count,
            won_games: self.won_games,
            won_player_count: self.won_player_count,
            score_sum: self.score_sum,
            score_count: self.score_count,
            high_score,
            high_scorers,
            low_score,
            low_scorers,
            winning_score_sum: self.winning_score_sum,
            winning_score_count: self.winning_score_count,
            personal_score_sum: self.personal_score_sum,
            personal_score_count: self.personal_score_count,
            personal_high_score: self.personal_high_score,
            personal_low_score: self.personal_low_score,
            flash_days,
            lag_days,
            rating: ctx.rating,
        }
    }
}

/// Whole days between two optional dates, substituting the reference date
/// for a missing endpoint and flooring the result at 1.
fn days_between(first: Option<NaiveDate>, second: Option<NaiveDate>, today: NaiveDate) -> i64 {
    let first = first.unwrap_or(today);
    let second = second.unwrap_or(today);
    (second - first).num_days().max(1)
}

/// Aggregate an ordered play sequence into a [`PlayStats`] snapshot.
///
/// The plays must be in non-decreasing date order; milestone dates are
/// assigned positionally and the pass does not sort. The input is never
/// mutated, and every invocation folds into its own fresh accumulator.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use meeple_stats::{aggregate, AggregateContext, PlayRecord};
///
/// let plays = vec![
///     PlayRecord::builder(1, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
///         .quantity(4)
///         .build(),
///     PlayRecord::builder(2, NaiveDate::from_ymd_opt(2020, 2, 1).unwrap())
///         .quantity(3)
///         .build(),
/// ];
/// let ctx = AggregateContext::new("alice42", NaiveDate::from_ymd_opt(2020, 6, 1).unwrap());
///
/// let stats = aggregate(&plays, &ctx);
/// assert_eq!(stats.play_count(), 7);
/// assert_eq!(stats.nickel_date(), NaiveDate::from_ymd_opt(2020, 2, 1));
/// ```
#[must_use]
pub fn aggregate(plays: &[PlayRecord], ctx: &AggregateContext) -> PlayStats {
    let mut totals = PlayTotals::new();
    for play in plays {
        totals.observe(play, ctx);
    }
    let stats = totals.finish(ctx);
    tracing::debug!(
        records = plays.len(),
        play_count = stats.play_count(),
        incomplete = stats.incomplete_play_count(),
        months = stats.months_played(),
        "aggregated play log"
    );
    stats
}
