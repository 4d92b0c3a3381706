//! Rectangular latitude/longitude grid definitions
//!
//! A grid is described per axis by its origin, step and number of points.
//! Coordinate values are produced by [`AxisSpec::coordinates`].

use crate::errors::{NcGenError, Result};
use serde::{Deserialize, Serialize};

/// Origin, spacing and length of one grid axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub start: f64,
    pub step: f64,
    pub count: usize,
}

impl AxisSpec {
    pub fn new(start: f64, step: f64, count: usize) -> Self {
        Self { start, step, count }
    }

    /// Last coordinate value: `start + step * count`.
    ///
    /// Note this is one step past the conventional `start + step * (count - 1)`.
    /// Existing fixture consumers depend on it, so it is kept as is.
    pub fn stop(&self) -> f64 {
        self.start + self.step * self.count as f64
    }

    /// `count` evenly spaced values from `start` to [`stop`](Self::stop),
    /// both endpoints included.
    pub fn coordinates(&self) -> Vec<f32> {
        let stop = self.stop();
        match self.count {
            0 => Vec::new(),
            1 => vec![self.start as f32],
            n => {
                let delta = (stop - self.start) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            stop as f32
                        } else {
                            (self.start + i as f64 * delta) as f32
                        }
                    })
                    .collect()
            }
        }
    }

    fn validate(&self, axis: &str) -> Result<()> {
        if self.count == 0 {
            return Err(NcGenError::InvalidGrid {
                axis: axis.to_string(),
                message: "count must be greater than zero".to_string(),
            });
        }
        if self.step == 0.0 || !self.step.is_finite() {
            return Err(NcGenError::InvalidGrid {
                axis: axis.to_string(),
                message: format!("step must be finite and non-zero, got {}", self.step),
            });
        }
        Ok(())
    }
}

/// A regular lat/lon grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub lat: AxisSpec,
    pub lon: AxisSpec,
}

impl GridSpec {
    pub fn new(lat: AxisSpec, lon: AxisSpec) -> Self {
        Self { lat, lon }
    }

    /// Approximation of the ~5 km BCSD/BCCAQ grid over Canada.
    pub fn canada_5k() -> Self {
        Self {
            lon: AxisSpec::new(-141.0, 0.08333333, 1068),
            lat: AxisSpec::new(41.0, 0.08333333, 510),
        }
    }

    /// Check both axes for a positive count and a non-zero step.
    pub fn validate(&self) -> Result<()> {
        self.lat.validate("lat")?;
        self.lon.validate("lon")
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::canada_5k()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_span_one_step_past_last_point() {
        let axis = AxisSpec::new(0.0, 1.0, 5);
        // linspace(0, 5, 5), not 0..=4
        assert_eq!(axis.coordinates(), vec![0.0, 1.25, 2.5, 3.75, 5.0]);
        assert_eq!(axis.stop(), 5.0);
    }

    #[test]
    fn single_point_axis_is_its_start() {
        let axis = AxisSpec::new(41.0, 0.5, 1);
        assert_eq!(axis.coordinates(), vec![41.0]);
    }

    #[test]
    fn negative_step_runs_downward() {
        let axis = AxisSpec::new(10.0, -2.0, 3);
        assert_eq!(axis.coordinates(), vec![10.0, 7.0, 4.0]);
    }

    #[test]
    fn canada_5k_has_expected_shape() {
        let grid = GridSpec::canada_5k();
        assert_eq!(grid.lat.count, 510);
        assert_eq!(grid.lon.count, 1068);
        assert_eq!(grid.lon.start, -141.0);
        assert_eq!(grid.lat.start, 41.0);

        let lon = grid.lon.coordinates();
        assert_eq!(lon.len(), 1068);
        assert_eq!(lon[0], -141.0);
        assert_eq!(*lon.last().unwrap(), (-141.0 + 0.08333333 * 1068.0) as f32);
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_and_flat_axes() {
        let empty = GridSpec::new(AxisSpec::new(0.0, 1.0, 0), AxisSpec::new(0.0, 1.0, 4));
        match empty.validate() {
            Err(NcGenError::InvalidGrid { axis, .. }) => assert_eq!(axis, "lat"),
            other => panic!("Expected InvalidGrid error, got {:?}", other),
        }

        let flat = GridSpec::new(AxisSpec::new(0.0, 1.0, 4), AxisSpec::new(0.0, 0.0, 4));
        match flat.validate() {
            Err(NcGenError::InvalidGrid { axis, .. }) => assert_eq!(axis, "lon"),
            other => panic!("Expected InvalidGrid error, got {:?}", other),
        }
    }
}
