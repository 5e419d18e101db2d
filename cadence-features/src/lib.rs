//! cadence-features: recurring-transaction feature engine.
//!
//! Computes a fixed-shape row of numeric/boolean/categorical signals
//! describing how likely one transaction is to be part of a recurring
//! series, given that transaction plus the full history for its
//! account. The row feeds an external classifier; training and serving
//! of that classifier live elsewhere.
//!
//! Every component is a pure, synchronous function over its inputs, so
//! rows for different transactions may be computed in parallel without
//! coordination.

pub mod aggregates;
pub mod features;
pub mod intervals;
pub mod periodicity;
pub mod vendors;

pub use features::{FeatureRow, FeatureValue, extract_features};
pub use intervals::{IntervalStats, interval_stats};
