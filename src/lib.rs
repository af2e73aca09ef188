//! List Azure App Service plans with their 7-day CPU and memory averages.
//!
//! A run goes list plans -> fetch metrics for every plan in parallel -> join ->
//! sort by memory -> print. [`run_cli`] is the whole program minus process
//! setup; `main.rs` only wires in logging and the real Azure clients.

pub mod azure;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use azure::{MetricFetcher, PlanLister};
use error::AppError;
use models::PlanRecord;
use std::ffi::OsString;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

/// Parse `args`, then build the collaborators with `build` and run the report.
///
/// `build` is only called once the arguments are valid, so a missing
/// subscription id never touches the credential or the network.
pub async fn run_cli<I, T, B, L, F, W>(args: I, build: B, out: &mut W) -> Result<(), AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    B: FnOnce() -> Result<(L, F), AppError>,
    L: PlanLister,
    F: MetricFetcher,
    W: Write,
{
    let cli = cli::parse_args(args)?;
    let (lister, fetcher) = build()?;
    run(&cli.subscription_id, &lister, fetcher, out).await?;
    Ok(())
}

/// List, fan out, join, sort and print. Returns the plans in printed order.
pub async fn run<L, F, W>(
    subscription_id: &str,
    lister: &L,
    fetcher: F,
    out: &mut W,
) -> Result<Vec<PlanRecord>, AppError>
where
    L: PlanLister,
    F: MetricFetcher,
    W: Write,
{
    log::info!("#Start run() subscription={subscription_id}");
    let mut plans = lister.list_plans(subscription_id).await?;
    output::write_plan_count(out, plans.len())?;
    out.flush()?;

    let started = Instant::now();
    processing::fetch_all_metrics(&mut plans, Arc::new(fetcher)).await?;
    let elapsed = started.elapsed();
    processing::sort_by_memory(&mut plans);
    log::info!("metrics for {} plans in {:?}", plans.len(), elapsed);

    output::write_elapsed(out, elapsed)?;
    writeln!(out, "{}\n", output::render_table(&plans))?;
    Ok(plans)
}
