//! Fixture orchestration
//!
//! [`FixtureConfig`] carries every knob of a generation run. The CLI only ever
//! changes the time scale; the rest is reachable programmatically or through a
//! JSON config file.

use crate::attributes::Attributes;
use crate::errors::Result;
use crate::grid::GridSpec;
use crate::netcdf_io::{add_climate_variable, add_time_axis, create_base_file, DimensionOrder};
use crate::timescale::TimeScale;
use netcdf::FileMut;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Instant};
use tracing::info;

/// Configuration for one fixture file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Number of data variables, named `var_0 .. var_{n-1}`
    pub num_vars: usize,
    pub grid: GridSpec,
    pub timescale: TimeScale,
    /// Declare `time` as an unlimited dimension
    pub unlimited_time: bool,
    pub dimension_order: DimensionOrder,
    /// Applied to every data variable
    pub variable_attributes: Attributes,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            num_vars: 1,
            grid: GridSpec::canada_5k(),
            timescale: TimeScale::daily(),
            unlimited_time: false,
            dimension_order: DimensionOrder::TimeMajor,
            variable_attributes: Attributes::new(),
        }
    }
}

impl FixtureConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn with_num_vars(mut self, num_vars: usize) -> Self {
        self.num_vars = num_vars;
        self
    }

    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_timescale(mut self, timescale: impl Into<TimeScale>) -> Self {
        self.timescale = timescale.into();
        self
    }

    pub fn with_unlimited_time(mut self, unlimited: bool) -> Self {
        self.unlimited_time = unlimited;
        self
    }

    pub fn with_dimension_order(mut self, order: DimensionOrder) -> Self {
        self.dimension_order = order;
        self
    }

    pub fn with_variable_attributes(mut self, attributes: Attributes) -> Self {
        self.variable_attributes = attributes;
        self
    }

    /// Names of the data variables this config produces
    pub fn variable_names(&self) -> Vec<String> {
        (0..self.num_vars).map(|i| format!("var_{}", i)).collect()
    }
}

/// Build the whole fixture and hand back the open file.
///
/// The file is closed and flushed when the returned handle is dropped.
pub fn make_fixture(path: &Path, config: &FixtureConfig) -> Result<FileMut> {
    let mut file = create_base_file(path, &config.grid)?;
    add_time_axis(&mut file, &config.timescale, config.unlimited_time)?;

    for name in config.variable_names() {
        add_climate_variable(
            &mut file,
            &name,
            &config.variable_attributes,
            config.dimension_order,
        )?;
    }

    Ok(file)
}

/// Build the fixture at `path` and close it before returning.
pub fn generate(path: &Path, config: &FixtureConfig) -> Result<()> {
    let start = Instant::now();
    let file = make_fixture(path, config)?;
    drop(file);

    info!(
        path = %path.display(),
        num_vars = config.num_vars,
        time_len = config.timescale.len(),
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Fixture generated"
    );
    Ok(())
}
