//! Output formatting for the plan report.
//!
//! - [`table`] - The sorted plan table
//! - [`terminal`] - Count and timing lines

mod table;
mod terminal;

pub use table::render_table;
pub use terminal::{write_elapsed, write_plan_count};
