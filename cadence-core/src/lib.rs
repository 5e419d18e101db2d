//! cadence-core: transaction record and date utilities for the
//! recurring-transaction feature engine.

pub mod dates;
pub mod error;
pub mod transaction;

pub use error::DateFormatError;
pub use transaction::Transaction;
