//! Travel-plan pipeline: geocode the location, fan out one spatial query per
//! category, rank everything by distance.
//!
//! Category queries are independent and read-only, so they are issued
//! concurrently and joined in category order. A failed category never aborts
//! the pipeline; its failure reason is carried in the per-category outcome so
//! callers can tell an outage apart from a genuinely empty area. Only a
//! geocoding failure is pipeline-fatal.

use futures::future::join_all;
use serde::Serialize;
use std::time::Duration;

use crate::config::Config;
use crate::domain::category::PlanMode;
use crate::domain::{Coordinate, DomainError};
use crate::modules::integrations::{nominatim, overpass};
use crate::services::ranking::{self, PlaceRecord};

/// What happened to one category's query.
#[derive(Debug, Serialize)]
pub struct CategoryOutcome {
    pub category: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The full result of one pipeline run. Built fresh per request, never
/// persisted.
#[derive(Debug, Serialize)]
pub struct TravelPlan {
    pub location: String,
    pub origin: Coordinate,
    /// Ascending by distance; ties keep category insertion order.
    pub places: Vec<PlaceRecord>,
    pub categories: Vec<CategoryOutcome>,
}

pub async fn build_plan(
    client: &reqwest::Client,
    config: &Config,
    location: &str,
    mode: PlanMode,
) -> Result<TravelPlan, DomainError> {
    let origin = match nominatim::geocode(client, &config.nominatim_url, location).await {
        Ok(Some(coordinate)) => coordinate,
        Ok(None) => return Err(DomainError::LocationNotFound),
        Err(e) => {
            tracing::error!("Geocoding failed for '{}': {}", location, e);
            return Err(DomainError::External(e));
        }
    };
    tracing::info!(
        "Resolved '{}' to ({}, {})",
        location,
        origin.lat,
        origin.lon
    );

    let radius_meters = match mode {
        PlanMode::Attractions => config.nearby_radius_meters,
        PlanMode::Full => config.trip_radius_meters,
    };
    let query_timeout = Duration::from_secs(config.query_timeout_secs);

    let queries = mode.categories().iter().map(|category| {
        let client = client.clone();
        let overpass_url = config.overpass_url.clone();
        async move {
            let result = tokio::time::timeout(
                query_timeout,
                overpass::find_nearby(
                    &client,
                    &overpass_url,
                    origin,
                    category.tag_key,
                    category.tag_value,
                    radius_meters,
                ),
            )
            .await;

            match result {
                Ok(outcome) => (category, outcome),
                Err(_) => (
                    category,
                    Err(format!("timed out after {:?}", query_timeout)),
                ),
            }
        }
    });

    // join_all keeps category order, so the later stable sort ties break the
    // same way on every run
    let results = join_all(queries).await;

    let mut places: Vec<PlaceRecord> = Vec::new();
    let mut categories: Vec<CategoryOutcome> = Vec::new();

    for (category, result) in results {
        match result {
            Ok(nodes) => {
                // Cap applies before ranking: only the first N raw records
                // per category are considered, whatever their distances
                let capped = &nodes[..nodes.len().min(config.per_category_limit)];
                let ranked = ranking::rank(origin, capped, category.label);
                tracing::debug!(
                    "{}: {} of {} raw records ranked",
                    category.label,
                    ranked.len(),
                    nodes.len()
                );
                categories.push(CategoryOutcome {
                    category: category.label.to_string(),
                    count: ranked.len(),
                    error: None,
                });
                places.extend(ranked);
            }
            Err(e) => {
                tracing::warn!("{} query failed: {}", category.label, e);
                categories.push(CategoryOutcome {
                    category: category.label.to_string(),
                    count: 0,
                    error: Some(e),
                });
            }
        }
    }

    ranking::sort_by_distance(&mut places);
    if let Some(limit) = mode.result_limit() {
        places.truncate(limit);
    }

    Ok(TravelPlan {
        location: location.to_string(),
        origin,
        places,
        categories,
    })
}
