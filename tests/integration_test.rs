use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Result};

#[test]
fn test_cli_correctly_processes_sample() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-record");
    let sample_path = Path::new("samples").join("sample.csv");

    let output = Command::new(binary_path)
        .arg(sample_path)
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();

    assert_eq!(lines.next(), Some("id,timestamp,amount,kind,category,note"));

    let mut count = 0;

    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();

        assert_eq!(fields.len(), 6);
        assert!(!fields[0].is_empty());
        assert!(fields[1].ends_with('Z'));

        let amount: f64 = fields[2].parse()?;

        match fields[3] {
            "income" => assert!(amount >= 0.0),
            "expense" => assert!(amount <= 0.0),
            kind => return Err(anyhow!("unexpected kind {kind}"))
        }

        count += 1;
    }

    assert_eq!(count, 5);

    Ok(())
}

#[test]
fn test_cli_outputs_normalized_records_and_drops_invalid_rows() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-record");
    let fixture_path = Path::new("samples").join("fixed.csv");

    let output = Command::new(binary_path)
        .arg(fixture_path)
        .arg("warn")
        .output()?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let mut results = HashMap::new();

    for line in stdout.lines().skip(1) {
        let fields: Vec<&str> = line.split(',').collect();
        results.insert(fields[0].to_string(), fields[1..].join(","));
    }

    assert_eq!(results.len(), 3);

    let food = results.get("t1").ok_or_else(|| anyhow!("t1 missing from output"))?;
    assert_eq!(food, "2024-01-01T00:00:00Z,-50,expense,Food,");

    let salary = results.get("t2").ok_or_else(|| anyhow!("t2 missing from output"))?;
    assert_eq!(salary, "2024-01-02T00:00:00Z,1200.50,income,Salary,monthly");

    let transport = results.get("t7").ok_or_else(|| anyhow!("t7 missing from output"))?;
    assert_eq!(transport, "2024-01-04T00:00:00Z,-7.25,expense,Transport,bus pass");

    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(stderr.matches("Rejected row").count(), 4);

    Ok(())
}

#[test]
fn test_cli_fails_on_missing_input_file() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-record");

    let output = Command::new(binary_path)
        .arg(Path::new("samples").join("does_not_exist.csv"))
        .output()?;

    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_cli_prints_usage_without_arguments() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-record");

    let output = Command::new(binary_path).output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("Usage: transaction-record [records].csv"));

    Ok(())
}

#[test]
fn test_cli_falls_back_to_errors_only_on_unknown_log_level() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_transaction-record");

    let output = Command::new(binary_path)
        .arg(Path::new("samples").join("fixed.csv"))
        .arg("chatty")
        .output()?;

    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("Unknown log level 'chatty'"));
    assert_eq!(stderr.matches("Rejected row").count(), 0);

    Ok(())
}
