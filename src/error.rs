//! Error types for meeple-stats
//!
//! Per-record anomalies (unparseable scores, missing durations) are handled
//! by inclusion/exclusion rules inside the aggregation pass and never appear
//! here. Only structural problems surface as errors.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Meeple-stats error types
#[derive(Error, Debug)]
pub enum Error {
    /// A player record references a play id that is not in the log.
    ///
    /// This indicates a bug in the upstream play/player join, not bad user
    /// data, so it aborts the attach step instead of dropping the record.
    #[error("player record references unknown play {play_id}\nThe upstream play/player join is inconsistent. Please report this issue.")]
    UnknownPlay {
        /// The play id the player record pointed at
        play_id: u64,
    },

    /// A play date string from upstream failed to parse as `YYYY-MM-DD`
    #[error("invalid play date: {0}")]
    Date(#[from] chrono::ParseError),
}
