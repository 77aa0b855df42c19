//! Play-statistics aggregation
//!
//! A single forward pass over an ordered play log produces an immutable
//! [`PlayStats`] snapshot: milestone dates, time-played totals with
//! nominal-time fallback, win rates, score extremes with tie tracking, and
//! the composite engagement metrics (utilization, fhm, hhm, ruhm).
//!
//! ## Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use meeple_stats::stats::{aggregate, AggregateContext};
//! use meeple_stats::PlayRecord;
//!
//! let plays = vec![
//!     PlayRecord::builder(1, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
//!         .quantity(5)
//!         .duration(90)
//!         .build(),
//! ];
//! let ctx = AggregateContext::new("alice42", NaiveDate::from_ymd_opt(2020, 6, 1).unwrap())
//!     .with_nominal_playing_time(45)
//!     .with_rating(7.5);
//!
//! let stats = aggregate(&plays, &ctx);
//! assert_eq!(stats.play_count(), 5);
//! assert_eq!(stats.nickel_date(), NaiveDate::from_ymd_opt(2020, 1, 1));
//! assert!(stats.utilization() > 0.0);
//! ```

mod aggregator;
mod extreme;
mod result;

pub use aggregator::{aggregate, average_rating, AggregateContext};
pub use extreme::{Direction, ExtremeTracker};
pub use result::PlayStats;
