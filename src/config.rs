use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub nominatim_url: String,
    pub overpass_url: String,
    /// Identifying User-Agent required by the map services' usage policies.
    pub user_agent: String,
    /// Search radius for attractions mode, in meters.
    pub nearby_radius_meters: u32,
    /// Search radius for full mode, in meters.
    pub trip_radius_meters: u32,
    /// Raw records considered per category, applied before ranking.
    pub per_category_limit: usize,
    pub query_timeout_secs: u64,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            nominatim_url: env::var("NOMINATIM_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string()),
            overpass_url: env::var("OVERPASS_URL")
                .unwrap_or_else(|_| "https://overpass-api.de/api/interpreter".to_string()),
            user_agent: env::var("HTTP_USER_AGENT")
                .unwrap_or_else(|_| concat!("tourplan/", env!("CARGO_PKG_VERSION")).to_string()),
            nearby_radius_meters: env::var("NEARBY_RADIUS_METERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            trip_radius_meters: env::var("TRIP_RADIUS_METERS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            per_category_limit: env::var("PER_CATEGORY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            query_timeout_secs: env::var("QUERY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(Vec::new),
        }
    }
}
