//! Concurrent metric fetch, one task per plan.

use crate::azure::MetricFetcher;
use crate::error::AppError;
use crate::models::PlanRecord;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;

/// Fetch metrics for every plan in parallel and attach them.
///
/// Each spawned task gets the index of its plan and hands back
/// `(index, result)`; only this function writes into `plans`, so the tasks
/// share nothing but the fetcher. Results are taken in completion order. The
/// first failure aborts the tasks still running and is returned at once.
pub async fn fetch_all_metrics<F: MetricFetcher>(
    plans: &mut [PlanRecord],
    fetcher: Arc<F>,
) -> Result<(), AppError> {
    let mut pending: FuturesUnordered<_> = plans
        .iter()
        .enumerate()
        .map(|(i, plan)| {
            let fetcher = Arc::clone(&fetcher);
            let resource_uri = plan.resource_uri.clone();
            tokio::spawn(async move { (i, fetcher.get_metrics(&resource_uri).await) })
        })
        .collect();
    log::debug!("spawned {} metric tasks", pending.len());

    while let Some(joined) = pending.next().await {
        let outcome = joined
            .map_err(|e| AppError::Task(e.to_string()))
            .and_then(|(i, result)| result.map(|metrics| (i, metrics)));
        match outcome {
            Ok((i, metrics)) => plans[i].metrics = metrics,
            Err(e) => {
                log::warn!("aborting {} metric task(s) after: {e}", pending.len());
                for handle in pending.iter() {
                    handle.abort();
                }
                return Err(e);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MetricSummary;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::{Duration, Instant};

    struct FailOn(&'static str);

    impl MetricFetcher for FailOn {
        async fn get_metrics(&self, resource_uri: &str) -> Result<MetricSummary, AppError> {
            if resource_uri == self.0 {
                return Err(AppError::request("finish the metrics request", "HTTP 404"));
            }
            Ok(MetricSummary {
                cpu_average: 1,
                memory_average: 2,
            })
        }
    }

    fn plans(uris: &[&str]) -> Vec<PlanRecord> {
        uris.iter()
            .map(|u| PlanRecord {
                name: u.to_string(),
                resource_uri: u.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_fetch_all_metrics_populates_every_plan() {
        let mut plans = plans(&["a", "b", "c"]);
        fetch_all_metrics(&mut plans, Arc::new(FailOn("none")))
            .await
            .expect("fetch");
        assert!(plans.iter().all(|p| p.metrics.memory_average == 2));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_fetch_all_metrics_fails_fast() {
        let mut plans = plans(&["a", "b", "c"]);
        let err = fetch_all_metrics(&mut plans, Arc::new(FailOn("b")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("HTTP 404"));
    }

    /// Fails `fail` at once, finishes everything else after `delay`.
    struct FailFastSlowRest {
        delay: Duration,
        finished: Arc<AtomicBool>,
    }

    impl MetricFetcher for FailFastSlowRest {
        async fn get_metrics(&self, resource_uri: &str) -> Result<MetricSummary, AppError> {
            if resource_uri == "fail" {
                return Err(AppError::request("finish the metrics request", "HTTP 500"));
            }
            tokio::time::sleep(self.delay).await;
            self.finished.store(true, Ordering::SeqCst);
            Ok(MetricSummary::default())
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_fetch_all_metrics_does_not_wait_for_slow_plans() {
        let finished = Arc::new(AtomicBool::new(false));
        let fetcher = Arc::new(FailFastSlowRest {
            delay: Duration::from_secs(3),
            finished: Arc::clone(&finished),
        });
        let mut plans = plans(&["slow", "fail"]);

        let started = Instant::now();
        let err = fetch_all_metrics(&mut plans, fetcher).await.unwrap_err();
        assert!(err.to_string().contains("HTTP 500"));
        assert!(
            started.elapsed() < Duration::from_secs(1),
            "error returned after {:?}",
            started.elapsed()
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_fetch_all_metrics_aborts_remaining_tasks() {
        let finished = Arc::new(AtomicBool::new(false));
        let fetcher = Arc::new(FailFastSlowRest {
            delay: Duration::from_millis(300),
            finished: Arc::clone(&finished),
        });
        let mut plans = plans(&["fail", "slow"]);

        fetch_all_metrics(&mut plans, fetcher).await.unwrap_err();
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(
            !finished.load(Ordering::SeqCst),
            "slow task should have been aborted"
        );
    }

    #[tokio::test]
    async fn test_fetch_all_metrics_no_plans() {
        let mut plans: Vec<PlanRecord> = vec![];
        fetch_all_metrics(&mut plans, Arc::new(FailOn("a")))
            .await
            .expect("nothing to fetch");
    }
}
