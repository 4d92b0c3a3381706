//! Defines command-line interface options using `clap` for the ncgen application.

use crate::timescale::TimeResolution;
use clap::Parser;
use std::path::PathBuf;

/// A CLI tool for generating synthetic climate NetCDF fixtures
#[derive(Parser, Debug)]
#[command(
    version,
    name = "ncgen",
    about = "NetCDF generator"
)]
pub struct Args {
    /// Destination file to create, will be overwritten if exists
    pub outfile: PathBuf,

    /// Time resolution. Defaults to daily
    #[arg(short = 't', long, value_enum, default_value_t = TimeResolution::Daily)]
    pub tres: TimeResolution,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tres_defaults_to_daily() {
        let args = Args::try_parse_from(["ncgen", "out.nc"]).unwrap();
        assert_eq!(args.outfile, PathBuf::from("out.nc"));
        assert_eq!(args.tres, TimeResolution::Daily);
    }

    #[test]
    fn tres_accepts_short_and_long_flags() {
        let args = Args::try_parse_from(["ncgen", "out.nc", "-t", "yearly"]).unwrap();
        assert_eq!(args.tres, TimeResolution::Yearly);

        let args = Args::try_parse_from(["ncgen", "--tres", "monthly", "out.nc"]).unwrap();
        assert_eq!(args.tres, TimeResolution::Monthly);
    }

    #[test]
    fn rejects_unknown_resolution_and_missing_outfile() {
        assert!(Args::try_parse_from(["ncgen", "out.nc", "--tres", "hourly"]).is_err());
        assert!(Args::try_parse_from(["ncgen"]).is_err());
        assert!(Args::try_parse_from(["ncgen", "out.nc", "--num-vars", "2"]).is_err());
    }
}
