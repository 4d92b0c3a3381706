use std::process::Command;
use tempfile::tempdir;

fn ncgen() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ncgen"))
}

#[test]
fn test_unknown_resolution_exits_with_usage() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let out = temp_dir.path().join("out.nc");

    let output = ncgen()
        .arg(&out)
        .args(["--tres", "hourly"])
        .output()
        .expect("Failed to run ncgen");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("daily"));
    assert!(!out.exists());
}

#[test]
fn test_missing_outfile_exits_nonzero() {
    let output = ncgen().output().expect("Failed to run ncgen");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("OUTFILE"));
}

#[test]
fn test_unwritable_outfile_exits_nonzero() {
    let output = ncgen()
        .args(["/nonexistent-dir/out.nc", "-t", "yearly"])
        .output()
        .expect("Failed to run ncgen");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
#[ignore = "writes a ~330 MB file on the full canada_5k grid"]
fn test_yearly_run_is_silent_and_succeeds() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let out = temp_dir.path().join("yearly.nc");

    let output = ncgen()
        .arg(&out)
        .args(["-t", "yearly"])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ncgen");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    let file = netcdf::open(&out).expect("Failed to open output");
    assert_eq!(file.dimension("time").unwrap().len(), 150);
    assert!(file.variable("var_0").is_some());
}
