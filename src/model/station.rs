//! Station value object
//!
//! Stations are the vertices of the rail network. Identity is the numeric
//! id; the code is the external lookup key and is matched
//! case-insensitively by the network layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ModelError;

/// A rail station record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    id: u32,
    code: String,
    name: String,
    country: String,
    station_type: String,
    geo_lat: f64,
    geo_lng: f64,
}

impl Station {
    /// Builds a station, validating every field constraint
    ///
    /// The code, name and type must be non-blank; the country code is 1 to
    /// 3 letters and is stored uppercase; coordinates must be in range.
    pub fn new(
        id: u32,
        code: &str,
        name: &str,
        country: &str,
        station_type: &str,
        geo_lat: f64,
        geo_lng: f64,
    ) -> Result<Self, ModelError> {
        if id == 0 {
            return Err(ModelError::InvalidId(id as i64));
        }
        let code = code.trim();
        if code.is_empty() {
            return Err(ModelError::BlankField { field: "code" });
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(ModelError::BlankField { field: "name" });
        }
        let country = country.trim().to_uppercase();
        if country.is_empty() || country.len() > 3 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ModelError::InvalidCountry(country));
        }
        let station_type = station_type.trim();
        if station_type.is_empty() {
            return Err(ModelError::BlankField { field: "type" });
        }
        if !(-90.0..=90.0).contains(&geo_lat) {
            return Err(ModelError::LatitudeOutOfRange(geo_lat));
        }
        if !(-180.0..=180.0).contains(&geo_lng) {
            return Err(ModelError::LongitudeOutOfRange(geo_lng));
        }

        Ok(Self {
            id,
            code: code.to_string(),
            name: name.to_string(),
            country,
            station_type: station_type.to_string(),
            geo_lat,
            geo_lng,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn station_type(&self) -> &str {
        &self.station_type
    }

    pub fn geo_lat(&self) -> f64 {
        self.geo_lat
    }

    pub fn geo_lng(&self) -> f64 {
        self.geo_lng
    }

    /// Straight-line distance to another station in coordinate degrees
    ///
    /// A lower bound on rail distance in the source dataset, which makes
    /// it an admissible A* heuristic there.
    pub fn straight_line_distance(&self, other: &Station) -> f64 {
        let d_lat = other.geo_lat - self.geo_lat;
        let d_lng = other.geo_lng - self.geo_lng;
        (d_lat * d_lat + d_lng * d_lng).sqrt()
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl Hash for Station {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code.to_uppercase())
    }
}
