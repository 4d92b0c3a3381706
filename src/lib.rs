//! ncgen: synthetic gridded climate NetCDF fixtures
//!
//! Writes NetCDF files with a regular lat/lon grid, a `time` axis and one or
//! more 3-D variables filled with standard-normal noise, for exercising tools
//! that read climate model output. The data are random and carry no physical
//! meaning.
//!
//! ## Module Organization
//!
//! - [`grid`]: lat/lon axis definitions and the `canada_5k` preset
//! - [`timescale`]: time axis values and the daily/monthly/yearly presets
//! - [`attributes`]: caller-supplied variable attributes
//! - [`netcdf_io`]: the file, time axis and data variable writers
//! - [`generator`]: fixture configuration and orchestration
//! - [`metadata`]: read-back inspection of generated files
//! - [`errors`]: centralized error handling
//!
//! ## Known quirk
//!
//! Coordinate axes run from `start` to `start + step * count` inclusive, one
//! step further than a conventional evenly spaced axis. See
//! [`grid::AxisSpec::coordinates`].
//!
//! ## Usage
//! ```rust,no_run
//! use ncgen::prelude::*;
//! use std::path::Path;
//!
//! let config = FixtureConfig::default()
//!     .with_timescale(TimeResolution::Yearly)
//!     .with_num_vars(2);
//! generate(Path::new("fixture.nc"), &config).unwrap();
//! ```

pub mod attributes;
pub mod cli;
pub mod errors;
pub mod generator;
pub mod grid;
pub mod logging;
pub mod metadata;
pub mod netcdf_io;
pub mod timescale;

pub use attributes::*;
pub use errors::*;
pub use generator::*;
pub use grid::*;
pub use metadata::*;
pub use netcdf_io::*;
pub use timescale::*;

pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::attributes::{AttrValue, Attributes};
    pub use crate::errors::{NcGenError, Result};
    pub use crate::generator::{generate, make_fixture, FixtureConfig};
    pub use crate::grid::{AxisSpec, GridSpec};
    pub use crate::netcdf_io::{DimensionOrder, FILL_VALUE};
    pub use crate::timescale::{TimeResolution, TimeScale};
}
