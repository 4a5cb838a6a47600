//! Clients for the external map-data services.

pub mod nominatim;
pub mod overpass;
