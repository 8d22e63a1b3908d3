//! The day's scan log: a CSV file with a header row and one row per scan.
//!
//! All reads and writes go through [`ScanLog`], which keeps the rows in memory
//! behind a single mutex and rewrites the file atomically after every append.
//! The mutex is the only synchronization point between request workers, so
//! the order of rows in the file is the order in which appends took the lock.

mod error;
mod store;

pub use error::LogError;
pub use store::{daily_log_path, ScanLog};

#[cfg(test)]
pub use store::read_rows;
