//! App Service plan listing.
//!
//! Follows the `nextLink` chain of `Microsoft.Web/serverfarms` and turns every
//! non function-app plan into a [`PlanRecord`].

use super::client::ArmClient;
use super::PlanLister;
use crate::config;
use crate::error::AppError;
use crate::models::{PlanPage, PlanRecord, SkuDescription};

#[derive(Clone)]
pub struct PlansClient {
    arm: ArmClient,
}

impl PlansClient {
    pub fn new(arm: ArmClient) -> Self {
        Self { arm }
    }

    fn first_page_url(&self, subscription_id: &str) -> String {
        format!(
            "{endpoint}/subscriptions/{subscription_id}/providers/Microsoft.Web/serverfarms?api-version={version}",
            endpoint = self.arm.endpoint(),
            version = config::PLANS_API_VERSION,
        )
    }
}

impl PlanLister for PlansClient {
    async fn list_plans(&self, subscription_id: &str) -> Result<Vec<PlanRecord>, AppError> {
        let mut plans = Vec::new();
        let mut url = self.first_page_url(subscription_id);
        let mut count_pages_returned = 0;

        loop {
            let page: PlanPage = self.arm.get_json("advance page", &url, &[]).await?;
            let count = page.value.len();
            let next_link = page.next_link.clone();
            plans.extend(plans_from_page(page));

            log::info!(
                "got page#{count_pages_returned:2} plan_count=+{count:3} => {total:3}",
                total = plans.len(),
            );
            count_pages_returned += 1;

            match next_link {
                Some(next) if next == url => {
                    return Err(AppError::request(
                        "advance page",
                        "nextLink not unique - possible infinite loop",
                    ));
                }
                Some(next) => url = next,
                None => break,
            }
        }

        log::info!(
            "Got {} plans from {count_pages_returned} page(s)",
            plans.len()
        );
        Ok(plans)
    }
}

/// Map one page to plan records, skipping function-app plans.
pub fn plans_from_page(page: PlanPage) -> Vec<PlanRecord> {
    page.value
        .into_iter()
        .filter(|p| p.kind.as_deref() != Some(config::EXCLUDED_PLAN_KIND))
        .map(|p| {
            let sku = p.sku.unwrap_or_else(|| {
                log::debug!("plan {} has no sku", p.name);
                SkuDescription {
                    name: None,
                    tier: None,
                    capacity: None,
                }
            });
            PlanRecord {
                sku_name: sku.name.unwrap_or_default(),
                instance_count: sku.capacity.unwrap_or_default(),
                kind: p.kind.unwrap_or_default(),
                resource_uri: normalize_resource_uri(&p.id).to_string(),
                name: p.name,
                metrics: Default::default(),
            }
        })
        .collect()
}

/// Drop the leading `/` of an ARM id so it can be placed after the endpoint.
///
/// Only that one character is removed; an id without it is returned as is.
pub fn normalize_resource_uri(id: &str) -> &str {
    id.strip_prefix('/').unwrap_or(id)
}
