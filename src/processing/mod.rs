//! Plan report processing.
//!
//! - [`fan_out`] - Concurrent metric fetch and join
//! - [`sort`] - Ordering of the final report

mod fan_out;
mod sort;

// Re-export public functions
pub use fan_out::fetch_all_metrics;
pub use sort::sort_by_memory;
