//! Plan report table.

use crate::models::PlanRecord;
use tabled::{settings::Style, Table, Tabled};

/// One printed row; column names match the report header.
#[derive(Tabled)]
struct PlanRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "CPU")]
    cpu: u8,
    #[tabled(rename = "MEM")]
    mem: u8,
    #[tabled(rename = "Plan")]
    plan: &'a str,
    #[tabled(rename = "Instances")]
    instances: i32,
    #[tabled(rename = "Type")]
    kind: &'a str,
}

impl<'a> From<&'a PlanRecord> for PlanRow<'a> {
    fn from(p: &'a PlanRecord) -> Self {
        PlanRow {
            name: &p.name,
            cpu: p.metrics.cpu_average,
            mem: p.metrics.memory_average,
            plan: &p.sku_name,
            instances: p.instance_count,
            kind: &p.kind,
        }
    }
}

/// Render plans as a borderless table, one row per plan in the given order.
pub fn render_table(plans: &[PlanRecord]) -> String {
    let rows: Vec<PlanRow> = plans.iter().map(PlanRow::from).collect();
    Table::new(rows).with(Style::blank()).to_string()
}
