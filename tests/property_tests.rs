//! Property-based tests for the aggregation pass
//!
//! - Test mathematical invariants of the fold (conservation, monotonicity)
//! - Test determinism (identical snapshots on re-aggregation)
//! - Run with ProptestConfig::with_cases(100)

use chrono::{Days, NaiveDate};
use meeple_stats::{aggregate, AggregateContext, PlayLog, PlayRecord, PlayerRecord};
use proptest::prelude::*;

// ============================================================================
// Property Test Generators (Strategies)
// ============================================================================

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 1, 1).unwrap()
}

fn reference_ctx() -> AggregateContext {
    AggregateContext::new("alice42", NaiveDate::from_ymd_opt(2022, 1, 1).unwrap())
        .with_nominal_playing_time(45)
        .with_rating(7.0)
}

/// Generate an ordered play sequence (dates ascending, as the store
/// contract requires)
fn arb_plays(max_len: usize) -> impl Strategy<Value = Vec<PlayRecord>> {
    proptest::collection::vec(
        (0u64..1000, 1u32..=5, 0u32..=120, 0u32..=6, any::<bool>()),
        0..max_len,
    )
    .prop_map(|specs| {
        let mut offsets: Vec<u64> = specs.iter().map(|spec| spec.0).collect();
        offsets.sort_unstable();

        specs
            .iter()
            .zip(offsets)
            .enumerate()
            .map(|(position, (&(_, quantity, duration, player_count, incomplete), offset))| {
                PlayRecord::builder(position as u64 + 1, base_date() + Days::new(offset))
                    .quantity(quantity)
                    .duration(duration)
                    .player_count(player_count)
                    .incomplete(incomplete)
                    .build()
            })
            .collect()
    })
}

/// Generate player records for the given number of plays, with integer
/// score text and a small username pool
fn arb_players(play_ids: u64) -> impl Strategy<Value = Vec<PlayerRecord>> {
    proptest::collection::vec(
        (
            1..=play_ids.max(1),
            0u32..100,
            any::<bool>(),
            prop_oneof![Just(""), Just("alice42"), Just("bob")],
        ),
        0..32,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .map(|(play_id, score, win, username)| {
                PlayerRecord::builder(play_id, format!("Player {score}"))
                    .username(username)
                    .win(win)
                    .score(score.to_string())
                    .build()
            })
            .collect()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ========================================================================
    // Determinism
    // ========================================================================

    /// Property: aggregating the same input twice yields identical snapshots
    #[test]
    fn prop_aggregation_is_deterministic(plays in arb_plays(30)) {
        let ctx = reference_ctx();
        let first = aggregate(&plays, &ctx);
        let second = aggregate(&plays, &ctx);
        prop_assert_eq!(first, second);
    }

    // ========================================================================
    // Conservation
    // ========================================================================

    /// Property: complete + incomplete counts conserve the input quantity
    #[test]
    fn prop_quantity_is_conserved(plays in arb_plays(30)) {
        let total: u32 = plays.iter().map(PlayRecord::quantity).sum();
        let stats = aggregate(&plays, &reference_ctx());
        prop_assert_eq!(stats.play_count() + stats.incomplete_play_count(), total);
    }

    /// Property: the per-player-count tally never exceeds the play count
    #[test]
    fn prop_player_count_tally_bounded(plays in arb_plays(30)) {
        let stats = aggregate(&plays, &reference_ctx());
        let tallied: u32 = (1..=stats.max_player_count())
            .map(|player_count| stats.play_count_with(player_count))
            .sum();
        prop_assert!(tallied <= stats.play_count());
    }

    // ========================================================================
    // Milestones
    // ========================================================================

    /// Property: nickel <= dime <= quarter whenever both sides are set
    #[test]
    fn prop_milestones_are_monotonic(plays in arb_plays(30)) {
        let stats = aggregate(&plays, &reference_ctx());

        if let (Some(nickel), Some(dime)) = (stats.nickel_date(), stats.dime_date()) {
            prop_assert!(nickel <= dime);
        }
        if let (Some(dime), Some(quarter)) = (stats.dime_date(), stats.quarter_date()) {
            prop_assert!(dime <= quarter);
        }
        // A later milestone can never exist without the earlier one
        if stats.quarter_date().is_some() {
            prop_assert!(stats.dime_date().is_some());
        }
        if stats.dime_date().is_some() {
            prop_assert!(stats.nickel_date().is_some());
        }
    }

    /// Property: prepending earlier plays never moves a milestone later
    #[test]
    fn prop_prepending_plays_never_delays_milestones(
        plays in arb_plays(30),
        earlier_quantity in 1u32..=5,
    ) {
        let ctx = reference_ctx();
        let base = aggregate(&plays, &ctx);

        let earlier = PlayRecord::builder(9999, base_date() - Days::new(30))
            .quantity(earlier_quantity)
            .build();
        let mut extended = vec![earlier];
        extended.extend(plays.iter().cloned());
        let combined = aggregate(&extended, &ctx);

        if let Some(nickel) = base.nickel_date() {
            prop_assert!(combined.nickel_date().unwrap() <= nickel);
        }
        if let Some(dime) = base.dime_date() {
            prop_assert!(combined.dime_date().unwrap() <= dime);
        }
        if let Some(quarter) = base.quarter_date() {
            prop_assert!(combined.quarter_date().unwrap() <= quarter);
        }
    }

    // ========================================================================
    // Derived metric bounds
    // ========================================================================

    /// Property: the play rate is capped at the play count
    #[test]
    fn prop_play_rate_bounded(plays in arb_plays(30)) {
        let stats = aggregate(&plays, &reference_ctx());
        prop_assert!(stats.play_rate() >= 0.0);
        prop_assert!(stats.play_rate() <= f64::from(stats.play_count()));
    }

    /// Property: utilization lives in [0, 1)
    #[test]
    fn prop_utilization_bounded(plays in arb_plays(30)) {
        let stats = aggregate(&plays, &reference_ctx());
        prop_assert!(stats.utilization() >= 0.0);
        prop_assert!(stats.utilization() < 1.0);
    }

    /// Property: first/last play dates bracket every milestone
    #[test]
    fn prop_milestones_inside_active_period(plays in arb_plays(30)) {
        let stats = aggregate(&plays, &reference_ctx());
        for milestone in [stats.nickel_date(), stats.dime_date(), stats.quarter_date()]
            .into_iter()
            .flatten()
        {
            prop_assert!(stats.first_play_date().unwrap() <= milestone);
            prop_assert!(milestone <= stats.last_play_date().unwrap());
        }
    }

    // ========================================================================
    // Score extremes and guards
    // ========================================================================

    /// Property: the high score never sits below the low score, both are
    /// attained by someone, and the guards agree with the metric options
    #[test]
    fn prop_score_extremes_consistent(
        plays in arb_plays(10),
        players in arb_players(10),
    ) {
        let mut log = PlayLog::from_plays(plays);
        let players: Vec<PlayerRecord> = players
            .into_iter()
            .filter(|player| log.get(player.play_id()).is_some())
            .collect();
        log.attach_players(players).unwrap();

        let stats = log.aggregate(&reference_ctx());

        prop_assert_eq!(stats.average_score().is_some(), stats.has_scores());
        prop_assert_eq!(stats.high_score().is_some(), stats.has_scores());
        prop_assert_eq!(stats.win_percentage().is_some(), stats.has_wins());

        if let (Some(high), Some(low)) = (stats.high_score(), stats.low_score()) {
            prop_assert!(high >= low);
            prop_assert!(!stats.high_scorers().is_empty());
            prop_assert!(!stats.low_scorers().is_empty());
        }
    }
}
