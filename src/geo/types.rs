//! Geographic data types: coordinates and venue classification.

use serde::{Deserialize, Serialize};

use super::error::{GeoError, Result};

/// A validated WGS-84 coordinate pair in decimal degrees.
///
/// Construction goes through [`Coordinates::new`], which rejects non-finite
/// values and values outside the valid degree ranges. Downstream distance
/// math can therefore stay total: once a `Coordinates` exists, it is usable.
///
/// # Example
///
/// ```
/// use eviden_core::geo::Coordinates;
///
/// let nyc = Coordinates::new(40.7128, -74.0060).unwrap();
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, in `[-90, 90]`.
    pub latitude: f64,
    /// Longitude in degrees, in `[-180, 180]`.
    pub longitude: f64,
}

impl Coordinates {
    /// Creates a validated coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidCoordinates`] if either component is
    /// non-finite, latitude is outside `[-90, 90]`, or longitude is outside
    /// `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);

        if lat_ok && lon_ok {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(GeoError::InvalidCoordinates {
                latitude,
                longitude,
            })
        }
    }
}

/// Venue enclosure type, used to scale the check-in radius.
///
/// GPS accuracy degrades indoors, so indoor venues get a tighter gate while
/// outdoor venues get a wider one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueType {
    /// Fully enclosed venue (conference hall, theater).
    Indoor,
    /// Open-air venue (festival grounds, stadium field).
    Outdoor,
    /// Partially enclosed venue (fairground with halls).
    Mixed,
}

impl VenueType {
    /// Radius multiplier for this venue type.
    #[must_use]
    pub const fn radius_multiplier(self) -> f64 {
        match self {
            Self::Indoor => 0.8,
            Self::Outdoor => 1.2,
            Self::Mixed => 1.0,
        }
    }

    /// Converts to string representation for storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Indoor => "indoor",
            Self::Outdoor => "outdoor",
            Self::Mixed => "mixed",
        }
    }

    /// Parses from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "indoor" => Some(Self::Indoor),
            "outdoor" => Some(Self::Outdoor),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }
}

/// Venue footprint size, used to scale the check-in radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueSize {
    /// Room-scale venue.
    Small,
    /// Hall-scale venue.
    Medium,
    /// Arena-scale venue.
    Large,
    /// Stadium- or fairground-scale venue.
    Massive,
}

impl VenueSize {
    /// Radius multiplier for this venue size.
    #[must_use]
    pub const fn radius_multiplier(self) -> f64 {
        match self {
            Self::Small => 0.7,
            Self::Medium => 1.0,
            Self::Large => 1.5,
            Self::Massive => 2.0,
        }
    }

    /// Converts to string representation for storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Massive => "massive",
        }
    }

    /// Parses from string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            "massive" => Some(Self::Massive),
            _ => None,
        }
    }
}
