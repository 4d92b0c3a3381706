//! Time axes for generated fixtures
//!
//! A [`TimeScale`] is the integer sequence written into the `time` coordinate
//! variable. The presets count records since the epoch at a fixed cadence over
//! roughly 150 years, ignoring leap years.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of years covered by the preset time scales
pub const PRESET_YEARS: i32 = 150;

/// Named preset cadences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeResolution {
    #[default]
    Daily,
    Monthly,
    Yearly,
}

impl TimeResolution {
    /// Records per year at this cadence
    pub fn records_per_year(self) -> i32 {
        match self {
            TimeResolution::Daily => 365,
            TimeResolution::Monthly => 12,
            TimeResolution::Yearly => 1,
        }
    }

    /// The predefined time scale for this cadence
    pub fn timescale(self) -> TimeScale {
        TimeScale::from_values(0..self.records_per_year() * PRESET_YEARS)
    }
}

impl fmt::Display for TimeResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self
            .to_possible_value()
            .expect("no values are skipped");
        f.write_str(value.get_name())
    }
}

/// Ordered elapsed-time values for the `time` axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TimeScaleRepr", into = "Vec<i32>")]
pub struct TimeScale {
    values: Vec<i32>,
}

impl TimeScale {
    pub fn from_values<I: IntoIterator<Item = i32>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// 365 × 150 daily records
    pub fn daily() -> Self {
        TimeResolution::Daily.timescale()
    }

    /// 12 × 150 monthly records
    pub fn monthly() -> Self {
        TimeResolution::Monthly.timescale()
    }

    /// 150 yearly records
    pub fn yearly() -> Self {
        TimeResolution::Yearly.timescale()
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::daily()
    }
}

impl From<TimeResolution> for TimeScale {
    fn from(resolution: TimeResolution) -> Self {
        resolution.timescale()
    }
}

impl From<TimeScale> for Vec<i32> {
    fn from(timescale: TimeScale) -> Self {
        timescale.values
    }
}

/// Config files may name a preset or spell out the values
#[derive(Deserialize)]
#[serde(untagged)]
enum TimeScaleRepr {
    Preset(TimeResolution),
    Values(Vec<i32>),
}

impl From<TimeScaleRepr> for TimeScale {
    fn from(repr: TimeScaleRepr) -> Self {
        match repr {
            TimeScaleRepr::Preset(resolution) => resolution.timescale(),
            TimeScaleRepr::Values(values) => TimeScale::from_values(values),
        }
    }
}
