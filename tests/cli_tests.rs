use std::fs;
use std::process::Command;

#[test]
fn selection_cli_writes_new_bank() {
    let exe = env!("CARGO_BIN_EXE_bankselect");
    let dir = tempfile::tempdir().unwrap();
    let proposals = dir.path().join("proposals.csv");
    let old_bank = dir.path().join("bank_7.csv");
    let new_bank = dir.path().join("bank_8.csv");
    let summary = dir.path().join("SummaryStatistics.dat");
    fs::write(&proposals, "simulation_id,mass1\nA,1\nB,2\nC,3\n").unwrap();
    fs::write(&old_bank, "simulation_id,mass1\nX,9\n").unwrap();
    fs::write(dir.path().join("match_0.dat"), "A B 0 0.99\nA C 0 0.5\nB C 0 0.3\n").unwrap();
    let pattern = format!("{}/match_*.dat", dir.path().display());

    let output = Command::new(exe)
        .args([
            "--proposal-file-name",
            proposals.to_str().unwrap(),
            "--old-bank-file-name",
            old_bank.to_str().unwrap(),
            "--new-bank-file-name",
            new_bank.to_str().unwrap(),
            "--match-file-name-glob",
            pattern.as_str(),
            "--summary-file",
            summary.to_str().unwrap(),
            "--minimal-match",
            "0.97",
            "-C",
            "cli test",
        ])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "7\t2\t3");
    assert_eq!(
        fs::read_to_string(&new_bank).unwrap(),
        "simulation_id,mass1\nX,9\nA,1\nC,3\n"
    );
    let process = fs::read_to_string(dir.path().join("bank_8.csv.process.json")).unwrap();
    assert!(process.contains("cli test"));
}

#[test]
fn missing_proposal_file_fails() {
    let exe = env!("CARGO_BIN_EXE_bankselect");
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(exe)
        .args([
            "--old-bank-file-name",
            dir.path().join("bank_1.csv").to_str().unwrap(),
        ])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("proposal points file-name"));
}

#[test]
fn nonexistent_proposal_file_fails() {
    let exe = env!("CARGO_BIN_EXE_bankselect");
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(exe)
        .args([
            "--proposal-file-name",
            dir.path().join("nope.csv").to_str().unwrap(),
        ])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
}

#[test]
fn histogram_tool_reports_g_values() {
    let exe = env!("CARGO_BIN_EXE_degree_histogram");
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("match_0.dat"), "A B 0 0.99\nA C 0 0.5\n").unwrap();
    let csv_out = dir.path().join("g.csv");
    let pattern = format!("{}/match_*.dat", dir.path().display());
    let output = Command::new(exe)
        .args([
            pattern.as_str(),
            "--csv",
            csv_out.to_str().unwrap(),
        ])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("G=0: 1"));
    assert!(stdout.contains("G=1: 2"));
    assert!(stdout.contains("max G: 1"));
    let csv = fs::read_to_string(&csv_out).unwrap();
    assert!(csv.starts_with("point,g_value\n"));
}
