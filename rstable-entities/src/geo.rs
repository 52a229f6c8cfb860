use std::{fmt, num::ParseFloatError, str::FromStr};

use thiserror::Error;

const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MAX: f64 = 180.0;

/// A geographical position in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        let pos = Self::from_lat_lng_deg(lat, lng);
        pos.is_valid().then_some(pos)
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= LAT_DEG_MAX
            && self.lng.abs() <= LNG_DEG_MAX
    }

    /// Missing coordinates are stored as `(0,0)` by the data producers,
    /// so that position never counts as a real one.
    pub fn is_unknown(self) -> bool {
        !self.is_valid() || (self.lat == 0.0 && self.lng == 0.0)
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapPointParseError {
    #[error("Expected '<lat>,<lng>' but got '{0}'")]
    Format(String),
    #[error("Invalid latitude: {0}")]
    Lat(ParseFloatError),
    #[error("Invalid longitude: {0}")]
    Lng(ParseFloatError),
    #[error("Coordinates out of range: {0}")]
    OutOfRange(String),
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat, lng)) = s.split_once(',') else {
            return Err(MapPointParseError::Format(s.to_owned()));
        };
        let lat = lat.trim().parse::<f64>().map_err(MapPointParseError::Lat)?;
        let lng = lng.trim().parse::<f64>().map_err(MapPointParseError::Lng)?;
        Self::try_from_lat_lng_deg(lat, lng)
            .ok_or_else(|| MapPointParseError::OutOfRange(s.to_owned()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} m", self.0.round())
    }
}

const EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth with the haversine formula.
    ///
    /// Returns `None` if the distance is unknown, i.e. if
    /// one of both positions [is unknown](MapPoint::is_unknown).
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if p1.is_unknown() || p2.is_unknown() {
            return None;
        }

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_sin * dlat_sin + lat1_rad.cos() * lat2_rad.cos() * dlng_sin * dlng_sin;
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Some(Distance::from_meters(EARTH_RADIUS.to_meters() * c))
    }
}
