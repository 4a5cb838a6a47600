//! Overpass API client.
//!
//! Runs radius-bounded, tag-filtered node queries around a coordinate.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::Coordinate;

/// Server-side evaluation limit for one Overpass QL query, in seconds.
const QL_TIMEOUT_SECS: u32 = 25;

#[derive(Debug, Serialize, Deserialize)]
pub struct OsmNode {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub tags: Option<Value>,
}

impl OsmNode {
    /// The node's `name` tag, if it carries one.
    pub fn name(&self) -> Option<&str> {
        self.tags.as_ref()?.get("name")?.as_str()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<OsmNode>,
}

/// Fetch all nodes tagged `tag_key`=`tag_value` within `radius_meters` of
/// `origin`.
///
/// Any failure (transport, non-success status, unparsable body) is returned
/// as `Err` with the reason; the caller decides how much of that to surface.
pub async fn find_nearby(
    client: &reqwest::Client,
    base_url: &str,
    origin: Coordinate,
    tag_key: &str,
    tag_value: &str,
    radius_meters: u32,
) -> Result<Vec<OsmNode>, String> {
    let query = format!(
        r#"[out:json][timeout:{}];node(around:{},{},{})["{}"="{}"];out;"#,
        QL_TIMEOUT_SECS, radius_meters, origin.lat, origin.lon, tag_key, tag_value
    );
    query_overpass(client, base_url, &query).await
}

async fn query_overpass(
    client: &reqwest::Client,
    base_url: &str,
    query: &str,
) -> Result<Vec<OsmNode>, String> {
    let res = client
        .post(base_url)
        .body(query.to_string())
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
        return Err(format!("Overpass API error: {}", res.status()));
    }

    let data: OverpassResponse = res.json().await.map_err(|e| e.to_string())?;
    Ok(data.elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_reads_the_name_tag() {
        let node = OsmNode {
            id: 1,
            lat: 13.64,
            lon: 79.42,
            tags: Some(json!({"name": "SVIMS Hospital", "amenity": "hospital"})),
        };
        assert_eq!(node.name(), Some("SVIMS Hospital"));
    }

    #[test]
    fn name_is_none_without_tags_or_name() {
        let bare = OsmNode {
            id: 2,
            lat: 13.64,
            lon: 79.42,
            tags: None,
        };
        assert_eq!(bare.name(), None);

        let unnamed = OsmNode {
            id: 3,
            lat: 13.64,
            lon: 79.42,
            tags: Some(json!({"amenity": "hospital"})),
        };
        assert_eq!(unnamed.name(), None);
    }
}
