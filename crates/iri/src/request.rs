//! Model request - the validated scalar input bundle

use crate::error::{Error, Result};
use crate::flags::FlagVector;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Coordinate system of the request location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSystem {
    /// Geographic latitude/longitude
    #[default]
    Geographic,
    /// Geomagnetic latitude/longitude
    Geomagnetic,
}

impl CoordinateSystem {
    /// Native selector: 0 = geographic, 1 = geomagnetic.
    pub(crate) fn native_selector(self) -> i32 {
        match self {
            CoordinateSystem::Geographic => 0,
            CoordinateSystem::Geomagnetic => 1,
        }
    }
}

/// Day-of-year selector within the request year.
///
/// The native call takes a single integer: month*100+day, or a negative
/// value whose magnitude is the day of year. The two forms are mutually
/// exclusive by construction here; the sign encoding is applied only at
/// the marshaling boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSpec {
    /// Calendar month and day
    MonthDay { month: u32, day: u32 },
    /// Day of year, 1..=366
    DayOfYear(u32),
}

impl DateSpec {
    /// Validate the selector ranges.
    pub fn validate(&self) -> Result<()> {
        match *self {
            DateSpec::MonthDay { month, day } => {
                if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
                    return Err(Error::InvalidDate(format!(
                        "month {} day {} outside calendar range",
                        month, day
                    )));
                }
            }
            DateSpec::DayOfYear(doy) => {
                if !(1..=366).contains(&doy) {
                    return Err(Error::InvalidDate(format!(
                        "day of year {} outside 1..=366",
                        doy
                    )));
                }
            }
        }
        Ok(())
    }

    /// Native encoding: month*100+day, or negative day-of-year.
    pub(crate) fn native_mmdd(self) -> i32 {
        match self {
            DateSpec::MonthDay { month, day } => (month * 100 + day) as i32,
            DateSpec::DayOfYear(doy) => -(doy as i32),
        }
    }

    /// Month/day selector for a calendar date.
    pub fn month_day(date: NaiveDate) -> Self {
        DateSpec::MonthDay {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Day-of-year selector for a calendar date.
    pub fn day_of_year(date: NaiveDate) -> Self {
        DateSpec::DayOfYear(date.ordinal())
    }
}

/// Decimal hour with the native clock convention.
///
/// The model reads hours of 25.0 or above as universal time minus 25.0
/// and anything below as local time. The +25 trick is the oracle's contract,
/// preserved exactly; it is applied in one place, at marshaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hour {
    /// Universal time, decimal hours 0..24
    Utc(f32),
    /// Local time, decimal hours 0..24
    Local(f32),
}

impl Hour {
    /// Native encoding: UT hours carry the +25.0 offset.
    pub(crate) fn native_hour(self) -> f32 {
        match self {
            Hour::Utc(h) => h + 25.0,
            Hour::Local(h) => h,
        }
    }
}

/// Height range of the requested profile, kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightRange {
    pub begin: f32,
    pub end: f32,
    pub step: f32,
}

impl HeightRange {
    /// Build a validated range: positive step, begin <= end, and a row
    /// count within the native profile capacity.
    pub fn new(begin: f32, end: f32, step: f32) -> Result<Self> {
        let range = Self { begin, end, step };
        range.validate()?;
        Ok(range)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(Error::InvalidHeightRange(format!(
                "step {} must be positive",
                self.step
            )));
        }
        if !self.begin.is_finite() || !self.end.is_finite() || self.begin > self.end {
            return Err(Error::InvalidHeightRange(format!(
                "begin {} must not exceed end {}",
                self.begin, self.end
            )));
        }
        // Guard the row count on the float side: the quotient can
        // overflow f32 for extreme finite bounds, and casting such a
        // value in num_rows would overflow the +1. Only a range that
        // passes here may be handed to num_rows.
        let steps = ((self.end - self.begin) / self.step).floor();
        if !steps.is_finite() || steps + 1.0 > iri_sys::OUTF_HEIGHTS as f32 {
            return Err(Error::InvalidHeightRange(format!(
                "{} to {} by {} exceeds the native capacity of {} steps",
                self.begin,
                self.end,
                self.step,
                iri_sys::OUTF_HEIGHTS
            )));
        }
        Ok(())
    }

    /// Number of height steps: `floor((end - begin) / step) + 1`.
    ///
    /// Defined for validated ranges; [`HeightRange::new`] bounds the
    /// count to the native capacity before this cast can overflow.
    pub fn num_rows(&self) -> usize {
        ((self.end - self.begin) / self.step).floor() as usize + 1
    }

    /// Height of step `i`: `begin + i * step`.
    pub fn height(&self, i: usize) -> f32 {
        self.begin + i as f32 * self.step
    }
}

/// A validated model request.
///
/// Pure value; construction validates every range before the oracle is
/// ever touched.
///
/// # Example
///
/// ```rust
/// use iri::{CoordinateSystem, DateSpec, FlagVector, HeightRange, Hour, ModelRequest};
///
/// let request = ModelRequest::new(
///     CoordinateSystem::Geographic,
///     37.8,
///     -75.4,
///     2021,
///     DateSpec::MonthDay { month: 3, day: 3 },
///     Hour::Utc(11.0),
///     HeightRange::new(600.0, 800.0, 10.0)?,
/// )?;
/// assert_eq!(request.heights.num_rows(), 21);
/// assert_eq!(request.flags, FlagVector::default_profile());
/// # Ok::<(), iri::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRequest {
    /// Coordinate system of `latitude`/`longitude`
    #[serde(default)]
    pub coordinates: CoordinateSystem,
    /// Latitude, degrees, [-90, 90]
    pub latitude: f32,
    /// Longitude, degrees, [-180, 180]
    pub longitude: f32,
    /// 4-digit year
    pub year: i32,
    /// Date within the year
    pub date: DateSpec,
    /// Decimal hour and clock convention
    pub hour: Hour,
    /// Height range of the profile
    pub heights: HeightRange,
    /// Model control switches
    #[serde(default)]
    pub flags: FlagVector,
}

impl ModelRequest {
    /// Build a request with the default switch profile.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        coordinates: CoordinateSystem,
        latitude: f32,
        longitude: f32,
        year: i32,
        date: DateSpec,
        hour: Hour,
        heights: HeightRange,
    ) -> Result<Self> {
        let request = Self {
            coordinates,
            latitude,
            longitude,
            year,
            date,
            hour,
            heights,
            flags: FlagVector::default_profile(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Replace the switch profile.
    pub fn with_flags(mut self, flags: FlagVector) -> Self {
        self.flags = flags;
        self
    }

    /// Load a request from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let request: Self = serde_json::from_str(json)?;
        request.validate()?;
        Ok(request)
    }

    /// Load a request from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("cannot read request file: {}", e)))?;
        Self::from_json(&json)
    }

    /// Check every input range.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::InvalidLatitude(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::InvalidLongitude(self.longitude));
        }
        self.date.validate()?;
        self.heights.validate()?;
        Ok(())
    }
}
