//! Play Log - the ordered play collection and the player-attachment join

use rustc_hash::FxHashMap;

use super::{PlayRecord, PlayerRecord};
use crate::stats::{aggregate, AggregateContext, PlayStats};
use crate::{Error, Result};

/// Ordered collection of play records with an id index for the player join.
///
/// The upstream store supplies plays in ascending date order; the log
/// preserves that order (milestone dates depend on it) and never sorts.
/// Passing unordered plays produces incorrect milestone dates but never a
/// crash; ordering is a caller contract, not a runtime-checked invariant.
#[derive(Debug, Clone, Default)]
pub struct PlayLog {
    plays: Vec<PlayRecord>,
    index: FxHashMap<u64, usize>,
}

impl PlayLog {
    /// Create a new empty play log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from an already-ordered play sequence.
    #[must_use]
    pub fn from_plays(plays: Vec<PlayRecord>) -> Self {
        let index = plays
            .iter()
            .enumerate()
            .map(|(position, play)| (play.id(), position))
            .collect();
        Self { plays, index }
    }

    /// Append a play. Plays must arrive in non-decreasing date order.
    pub fn push(&mut self, play: PlayRecord) {
        self.index.insert(play.id(), self.plays.len());
        self.plays.push(play);
    }

    /// Get the plays in their original order.
    #[must_use]
    pub fn plays(&self) -> &[PlayRecord] {
        &self.plays
    }

    /// Get a play by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&PlayRecord> {
        self.index.get(&id).map(|&position| &self.plays[position])
    }

    /// Get the number of play records in the log (not the summed quantity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Check whether the log holds no play records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    /// Attach player records to their owning plays, keyed by play id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPlay`] on the first player record whose
    /// `play_id` matches no play in the log. That is a data-integrity bug in
    /// the upstream join; players attached before the failure remain
    /// attached, and the caller should treat the whole log as suspect.
    pub fn attach_players(
        &mut self,
        players: impl IntoIterator<Item = PlayerRecord>,
    ) -> Result<()> {
        for player in players {
            let play_id = player.play_id();
            let Some(&position) = self.index.get(&play_id) else {
                tracing::error!(play_id, "player record references a play not in the log");
                return Err(Error::UnknownPlay { play_id });
            };
            self.plays[position].add_player(player);
        }
        Ok(())
    }

    /// Run the aggregation pass over this log.
    ///
    /// Equivalent to [`aggregate`]`(self.plays(), ctx)`.
    #[must_use]
    pub fn aggregate(&self, ctx: &AggregateContext) -> PlayStats {
        aggregate(&self.plays, ctx)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_log_default() {
        let log = PlayLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }

    #[test]
    fn test_push_and_get() {
        let mut log = PlayLog::new();
        log.push(PlayRecord::new(10, date(2020, 1, 1)));
        log.push(PlayRecord::new(20, date(2020, 1, 2)));

        assert_eq!(log.len(), 2);
        assert_eq!(log.get(10).unwrap().date(), date(2020, 1, 1));
        assert!(log.get(30).is_none());
    }

    #[test]
    fn test_from_plays_preserves_order() {
        let log = PlayLog::from_plays(vec![
            PlayRecord::new(2, date(2020, 1, 1)),
            PlayRecord::new(1, date(2020, 1, 5)),
        ]);
        assert_eq!(log.plays()[0].id(), 2);
        assert_eq!(log.plays()[1].id(), 1);
    }

    #[test]
    fn test_attach_players_joins_by_id() {
        let mut log = PlayLog::from_plays(vec![
            PlayRecord::new(1, date(2020, 1, 1)),
            PlayRecord::new(2, date(2020, 1, 2)),
        ]);

        log.attach_players(vec![
            PlayerRecord::new(2, "Alice"),
            PlayerRecord::new(1, "Bob"),
            PlayerRecord::new(2, "Carol"),
        ])
        .unwrap();

        assert_eq!(log.get(1).unwrap().players().len(), 1);
        assert_eq!(log.get(2).unwrap().players().len(), 2);
    }

    #[test]
    fn test_attach_players_unknown_play_fails() {
        let mut log = PlayLog::from_plays(vec![PlayRecord::new(1, date(2020, 1, 1))]);

        let err = log
            .attach_players(vec![PlayerRecord::new(99, "Ghost")])
            .unwrap_err();
        assert!(matches!(err, Error::UnknownPlay { play_id: 99 }));
    }
}
