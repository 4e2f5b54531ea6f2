#![cfg(feature = "cli")]

use anyhow::Result;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_postcode(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_postcode"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_all_valid_exits_zero() -> Result<()> {
    let output = run_postcode(&["--fail-on-invalid", "W1A0AX", "m11ae"])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("W1A0AX -> W1A 0AX\n"));
    assert!(stdout.contains("m11ae -> M1 1AE\n"));
    assert!(stdout.ends_with("checked 2: 2 valid, 0 invalid\n"));
    Ok(())
}

#[test]
fn test_invalid_without_flag_exits_zero() -> Result<()> {
    let output = run_postcode(&["W1A0AX", "INVALID"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("INVALID -> invalid\n"));
    Ok(())
}

#[test]
fn test_fail_on_invalid_exits_two() -> Result<()> {
    let output = run_postcode(&["--fail-on-invalid", "-o", "csv", "W1A0AX", "INVALID"])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "input,valid,formatted\nW1A0AX,true,W1A 0AX\nINVALID,false,\n"
    );
    Ok(())
}

#[test]
fn test_fail_on_invalid_from_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("postcode.toml");
    fs::write(&config_path, "[output]\nfail_on_invalid = true\n")?;

    let output = run_postcode(&["--config", config_path.to_str().unwrap(), "TKCA 1ZZ"])?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}

#[test]
fn test_missing_input_file_exits_one() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nope.txt");

    let output = run_postcode(&["--input", missing.to_str().unwrap()])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error: Could not read or write a file"));
    Ok(())
}

#[test]
fn test_bad_config_value_exits_one() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("postcode.toml");
    fs::write(&config_path, "[validation]\ngrammar = \"loose\"\n")?;

    let output = run_postcode(&["--config", config_path.to_str().unwrap(), "W1A0AX"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    Ok(())
}
