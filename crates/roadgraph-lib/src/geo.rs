use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Mean Earth radius used for great-circle distances, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Geographic coordinate of a road intersection.
///
/// Equality is exact component equality, so a point is only ever equal to a
/// point built from the same latitude and longitude values. `NaN` components
/// are not valid coordinates; [`GeoPoint::from_str`] rejects them.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Great-circle distance to `other` in kilometres (haversine formula).
    pub fn distance(&self, other: &Self) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    // `-0.0 + 0.0` is `0.0`, which keeps hashing consistent with `==`.
    fn key(&self) -> (u64, u64) {
        (
            (self.latitude + 0.0).to_bits(),
            (self.longitude + 0.0).to_bits(),
        )
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.latitude == other.latitude && self.longitude == other.longitude
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl FromStr for GeoPoint {
    type Err = Error;

    /// Parse `"LAT,LON"`; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidCoordinate {
            input: s.to_string(),
        };

        let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
        let latitude: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let longitude: f64 = lon.trim().parse().map_err(|_| invalid())?;
        let point = Self::new(latitude, longitude);
        if !point.is_finite() {
            return Err(invalid());
        }

        Ok(point)
    }
}
