//! NetCDF writing for fixture files
//!
//! The three writers are called in order on one open [`FileMut`]:
//! [`create_base_file`] lays down the `lat`/`lon` axes, [`add_time_axis`]
//! appends `time`, and [`add_climate_variable`] may then be called any number
//! of times to add randomly filled data variables.

use crate::attributes::Attributes;
use crate::errors::{NcGenError, Result};
use crate::grid::{AxisSpec, GridSpec};
use crate::timescale::TimeScale;
use chrono::Utc;
use ndarray::{Array1, Array2, Axis};
use netcdf::{create, FileMut};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::{debug, info};

/// `_FillValue` declared on every data variable, outside any plausible physical range
pub const FILL_VALUE: f32 = 1e20;

/// Units of the `time` coordinate
pub const TIME_UNITS: &str = "records since 1950-01-01";

/// Layout of a data variable's dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionOrder {
    /// (time, lat, lon)
    #[default]
    TimeMajor,
    /// (lat, lon, time)
    TimeMinor,
}

impl DimensionOrder {
    pub fn dimensions(self) -> [&'static str; 3] {
        match self {
            DimensionOrder::TimeMajor => ["time", "lat", "lon"],
            DimensionOrder::TimeMinor => ["lat", "lon", "time"],
        }
    }
}

/// Create `path` (replacing whatever is there) with `lat` and `lon` axes.
pub fn create_base_file(path: &Path, grid: &GridSpec) -> Result<FileMut> {
    grid.validate()?;

    if path.exists() {
        fs::remove_file(path)?;
    }

    info!(path = %path.display(), "Creating fixture file");
    let mut file = create(path)?;

    write_axis(&mut file, "lat", &grid.lat, "Y", "degrees_north", "latitude")?;
    write_axis(&mut file, "lon", &grid.lon, "X", "degrees_east", "longitude")?;

    file.add_attribute(
        "history",
        format!("Created by ncgen on {}", Utc::now().to_rfc3339()),
    )?;

    Ok(file)
}

fn write_axis(
    file: &mut FileMut,
    name: &str,
    axis: &AxisSpec,
    axis_role: &str,
    units: &str,
    long_name: &str,
) -> Result<()> {
    file.add_dimension(name, axis.count)?;

    let mut var = file.add_variable::<f32>(name, &[name])?;
    var.put_attribute("axis", axis_role)?;
    var.put_attribute("units", units)?;
    var.put_attribute("long_name", long_name)?;

    let values = Array1::from(axis.coordinates());
    var.put(values.view(), ..)?;

    debug!(
        axis = name,
        count = axis.count,
        start = axis.start,
        stop = axis.stop(),
        "Wrote coordinate axis"
    );
    Ok(())
}

/// Append the `time` dimension and coordinate variable.
///
/// With `unlimited` the dimension is declared extensible; it still ends up
/// holding every value of `timescale`.
///
/// An empty `timescale` with `unlimited == false` still yields an unlimited
/// dimension: netcdf-c treats a length of 0 as `NC_UNLIMITED`.
pub fn add_time_axis(file: &mut FileMut, timescale: &TimeScale, unlimited: bool) -> Result<()> {
    if unlimited {
        file.add_unlimited_dimension("time")?;
    } else {
        file.add_dimension("time", timescale.len())?;
    }

    let mut var = file.add_variable::<i32>("time", &["time"])?;
    if !timescale.is_empty() {
        // explicit extent so an unlimited dimension grows to fit
        var.put_values(timescale.values(), 0..timescale.len())?;
    }
    var.put_attribute("axis", "T")?;
    var.put_attribute("units", TIME_UNITS)?;
    var.put_attribute("calendar", "gregorian")?;
    var.put_attribute("long_name", "time")?;

    debug!(len = timescale.len(), unlimited, "Wrote time axis");
    Ok(())
}

/// Add a 3-D `f32` variable filled with standard-normal noise.
///
/// Each slice along the leading dimension is drawn independently from an
/// unseeded generator, so output differs between runs. `_FillValue` is set to
/// [`FILL_VALUE`] but never appears in the data.
pub fn add_climate_variable(
    file: &mut FileMut,
    name: &str,
    attributes: &Attributes,
    order: DimensionOrder,
) -> Result<()> {
    let dims = order.dimensions();
    for dim in dims {
        if file.dimension(dim).is_none() {
            return Err(NcGenError::DimensionNotFound {
                dim: dim.to_string(),
            });
        }
    }

    let mut var = file.add_variable::<f32>(name, &dims)?;
    var.put_attribute("_FillValue", FILL_VALUE)?;
    for (key, value) in attributes {
        var.put_attribute(key, value.clone())?;
    }

    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    let (rows, cols) = (shape[1], shape[2]);

    let mut rng = rand::thread_rng();
    for i in 0..shape[0] {
        let slice: Array2<f32> =
            Array2::from_shape_simple_fn((rows, cols), || rng.sample(StandardNormal));
        let block = slice.insert_axis(Axis(0));
        var.put(block.view(), (i..i + 1, 0..rows, 0..cols))?;
    }

    info!(
        variable = name,
        dims = %dims.join(", "),
        shape = ?shape,
        "Wrote climate variable"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_order_layouts() {
        assert_eq!(DimensionOrder::default(), DimensionOrder::TimeMajor);
        assert_eq!(DimensionOrder::TimeMajor.dimensions(), ["time", "lat", "lon"]);
        assert_eq!(DimensionOrder::TimeMinor.dimensions(), ["lat", "lon", "time"]);
    }

    #[test]
    fn dimension_order_serializes_as_snake_case() {
        let order: DimensionOrder = serde_json::from_str("\"time_minor\"").unwrap();
        assert_eq!(order, DimensionOrder::TimeMinor);
    }
}
