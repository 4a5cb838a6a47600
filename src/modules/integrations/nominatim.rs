//! Nominatim geocoding client.
//!
//! Resolves a free-text place name to a coordinate. Nominatim encodes
//! latitude and longitude as strings in its JSON output, so candidates are
//! parsed in two steps: deserialize, then parse the floats.

use serde::Deserialize;

use crate::domain::Coordinate;

#[derive(Debug, Deserialize)]
struct NominatimCandidate {
    lat: String,
    lon: String,
}

/// Resolve `place` to a coordinate.
///
/// Returns `Ok(None)` when the service has no candidate for the name, or
/// when the best candidate does not carry a usable coordinate. Transport
/// errors and non-success statuses are reported as `Err` so the caller can
/// tell an outage apart from an unknown place.
pub async fn geocode(
    client: &reqwest::Client,
    base_url: &str,
    place: &str,
) -> Result<Option<Coordinate>, String> {
    let url = format!(
        "{}/search?q={}&format=json&limit=1",
        base_url,
        urlencoding::encode(place)
    );

    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !resp.status().is_success() {
        return Err(format!("Geocoding API returned status: {}", resp.status()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    let candidates: Vec<NominatimCandidate> =
        serde_json::from_str(&body).map_err(|e| format!("Failed to parse JSON: {}", e))?;

    match candidates.first() {
        Some(candidate) => Ok(parse_candidate(candidate)),
        None => Ok(None),
    }
}

fn parse_candidate(candidate: &NominatimCandidate) -> Option<Coordinate> {
    let lat: f64 = candidate.lat.parse().ok()?;
    let lon: f64 = candidate.lon.parse().ok()?;
    Coordinate::new(lat, lon).ok()
}
