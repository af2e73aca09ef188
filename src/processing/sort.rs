//! Report ordering.

use crate::models::PlanRecord;

/// Sort ascending by memory average.
///
/// Stable: plans with equal memory keep the order the listing returned them in.
pub fn sort_by_memory(plans: &mut [PlanRecord]) {
    plans.sort_by_key(|p| p.metrics.memory_average);
}
