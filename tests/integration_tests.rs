//! Integration tests for the plm CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SAMPLE_FOB: f64 = 4.012_266_666_666_667;

/// Helper to get a plm command isolated from the caller's environment
fn plm() -> Command {
    let mut cmd = Command::cargo_bin("plm").unwrap();
    cmd.env_remove("PLM_STYLE")
        .env_remove("PLM_AUTHOR")
        .env_remove("RUST_LOG")
        .env("PLM_LOG", "warn");
    cmd
}

/// Helper to create a workspace seeded with the sample style
fn setup_sample_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    plm()
        .current_dir(tmp.path())
        .args(["init", "--sample"])
        .assert()
        .success();
    tmp
}

/// Run `plm cost -f json` in `dir` and return the parsed output
fn cost_json(dir: &std::path::Path, extra: &[&str]) -> serde_json::Value {
    let output = plm()
        .current_dir(dir)
        .args(["cost", "--format", "json"])
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success(), "cost failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

fn approx(value: &serde_json::Value, expected: f64) -> bool {
    value.as_f64().is_some_and(|v| (v - expected).abs() < 1e-9)
}

// ============================================================================
// Basic CLI
// ============================================================================

#[test]
fn test_help_lists_commands() {
    plm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cost"))
        .stdout(predicate::str::contains("marker"))
        .stdout(predicate::str::contains("overhead"));
}

#[test]
fn test_version() {
    plm()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("plm"));
}

#[test]
fn test_completions_bash() {
    plm()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plm"));
}

// ============================================================================
// Outside a workspace: read-only commands use the sample style
// ============================================================================

#[test]
fn test_cost_outside_workspace_uses_sample() {
    let tmp = TempDir::new().unwrap();
    plm()
        .current_dir(tmp.path())
        .arg("cost")
        .assert()
        .success()
        .stdout(predicate::str::contains("FOB (no freight)"))
        .stdout(predicate::str::contains("$4.012"));
}

#[test]
fn test_cost_json_breakdown() {
    let tmp = TempDir::new().unwrap();
    let json = cost_json(tmp.path(), &[]);

    assert_eq!(json["style"], "STYLE-SS25-TEECREW-001");
    assert!(approx(&json["material"], 3.6516));
    assert!(approx(&json["packaging"], 0.17));
    assert!(approx(&json["cmt"], json["labor"].as_f64().unwrap() + 0.044));
    assert!(approx(&json["fob"], SAMPLE_FOB));
}

#[test]
fn test_cost_csv() {
    let tmp = TempDir::new().unwrap();
    plm()
        .current_dir(tmp.path())
        .args(["cost", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Component,Amount"))
        .stdout(predicate::str::contains("CMT,0.191"));
}

#[test]
fn test_marker_show_sample() {
    let tmp = TempDir::new().unwrap();
    plm()
        .current_dir(tmp.path())
        .args(["marker", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("16.67%"))
        .stdout(predicate::str::contains("0.42%"));
}

#[test]
fn test_unknown_style_outside_workspace_warns() {
    let tmp = TempDir::new().unwrap();
    plm()
        .current_dir(tmp.path())
        .args(["--style", "STYLE-OTHER", "cost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$4.012"))
        .stderr(predicate::str::contains("using sample data"));
}

#[test]
fn test_edit_outside_workspace_fails() {
    let tmp = TempDir::new().unwrap();
    plm()
        .current_dir(tmp.path())
        .args(["bom", "add", "--type", "Trim", "Care label"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not inside a PLM workspace"));
}

// ============================================================================
// Workspace
// ============================================================================

#[test]
fn test_init_sample_creates_structure() {
    let tmp = setup_sample_project();

    assert!(tmp.path().join(".plm/config.yaml").exists());
    assert!(tmp
        .path()
        .join("styles/STYLE-SS25-TEECREW-001.plm.yaml")
        .exists());
}

#[test]
fn test_init_twice_reports_existing() {
    let tmp = setup_sample_project();
    plm()
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_status_dashboard() {
    let tmp = setup_sample_project();
    plm()
        .current_dir(tmp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("GATES"))
        .stdout(predicate::str::contains("ECR Cycle Days"))
        .stdout(predicate::str::contains("$4.012"));
}

#[test]
fn test_style_new_and_list() {
    let tmp = TempDir::new().unwrap();
    plm().current_dir(tmp.path()).arg("init").assert().success();

    plm()
        .current_dir(tmp.path())
        .args(["style", "new", "FW25-HOODIE-001", "--title", "FW25 Hoodie"])
        .assert()
        .success();

    plm()
        .current_dir(tmp.path())
        .args(["style", "list", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("STYLE-FW25-HOODIE-001\tFW25 Hoodie"));

    plm()
        .current_dir(tmp.path())
        .args(["style", "new", "FW25-HOODIE-001", "--title", "Again"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_new_style_costs_zero() {
    let tmp = TempDir::new().unwrap();
    plm().current_dir(tmp.path()).arg("init").assert().success();
    plm()
        .current_dir(tmp.path())
        .args(["style", "new", "EMPTY-1", "--title", "Empty"])
        .assert()
        .success();

    let json = cost_json(tmp.path(), &[]);
    assert_eq!(json["style"], "STYLE-EMPTY-1");
    assert!(approx(&json["fob"], 0.0));
}

// ============================================================================
// Editing costing inputs
// ============================================================================

#[test]
fn test_bom_add_updates_fob() {
    let tmp = setup_sample_project();

    plm()
        .current_dir(tmp.path())
        .args([
            "--quiet",
            "bom",
            "add",
            "--type",
            "Trim",
            "Care label",
            "--uom",
            "pcs",
            "--consumption",
            "1",
            "--price",
            "0.1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("BOM-"));

    let json = cost_json(tmp.path(), &[]);
    assert!(approx(&json["fob"], SAMPLE_FOB + 0.1));
}

#[test]
fn test_bom_set_non_numeric_becomes_zero() {
    let tmp = setup_sample_project();

    plm()
        .current_dir(tmp.path())
        .args(["bom", "set", "1", "--price", "abc"])
        .assert()
        .success();

    // Line 1: 0.95 * 1.05 * 3.2 removed from material
    let json = cost_json(tmp.path(), &[]);
    assert!(approx(&json["material"], 3.6516 - 3.192));
}

#[test]
fn test_bom_set_unknown_line_fails() {
    let tmp = setup_sample_project();
    plm()
        .current_dir(tmp.path())
        .args(["bom", "set", "BOM-99", "--price", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("BOM-99"));
}

#[test]
fn test_op_efficiency_is_floored() {
    let tmp = setup_sample_project();

    plm()
        .current_dir(tmp.path())
        .args(["op", "set", "OP-1", "--efficiency", "0.2"])
        .assert()
        .success();

    // OP-1 (0.6 SMV) now costs at 0.5 efficiency, the rest at 0.85
    let expected = (0.6 / 0.5 + 2.8 / 0.85) / 60.0 * 2.2;
    let json = cost_json(tmp.path(), &[]);
    assert!(approx(&json["labor"], expected));
}

#[test]
fn test_negative_cli_values_become_zero() {
    let tmp = setup_sample_project();

    plm()
        .current_dir(tmp.path())
        .args(["bom", "set", "1", "--price", "-2"])
        .assert()
        .success();
    plm()
        .current_dir(tmp.path())
        .args(["op", "set", "OP-1", "--efficiency", "-0.3"])
        .assert()
        .success();

    let json = cost_json(tmp.path(), &[]);
    assert!(approx(&json["material"], 3.6516 - 3.192));
    let labor = (0.6 / 0.5 + 2.8 / 0.85) / 60.0 * 2.2;
    assert!(approx(&json["labor"], labor));
}

#[test]
fn test_overhead_per_unit_and_fallback_basis() {
    let tmp = setup_sample_project();

    plm()
        .current_dir(tmp.path())
        .args(["overhead", "set", "--basis", "per_unit"])
        .assert()
        .success();
    assert!(approx(&cost_json(tmp.path(), &[])["overhead"], 0.15));

    plm()
        .current_dir(tmp.path())
        .args(["overhead", "set", "--basis", "something-else"])
        .assert()
        .success();
    assert!(approx(&cost_json(tmp.path(), &[])["overhead"], 0.044));
}

#[test]
fn test_pack_add() {
    let tmp = setup_sample_project();

    plm()
        .current_dir(tmp.path())
        .args(["pack", "add", "Hangtag", "--amount", "0.03"])
        .assert()
        .success();

    let json = cost_json(tmp.path(), &[]);
    assert!(approx(&json["packaging"], 0.2));
}

#[test]
fn test_marker_zero_width_is_reported() {
    let tmp = setup_sample_project();

    plm()
        .current_dir(tmp.path())
        .args(["marker", "set", "--width", "0"])
        .assert()
        .success();

    plm()
        .current_dir(tmp.path())
        .args(["marker", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n/a"))
        .stdout(predicate::str::contains("inf").not());
}

// ============================================================================
// Fallback and style selection
// ============================================================================

#[test]
fn test_broken_style_file_falls_back_to_sample() {
    let tmp = TempDir::new().unwrap();
    plm().current_dir(tmp.path()).arg("init").assert().success();
    fs::write(
        tmp.path().join("styles/STYLE-BROKEN.plm.yaml"),
        "style: [unclosed\n",
    )
    .unwrap();

    plm()
        .current_dir(tmp.path())
        .args(["cost", "--style", "STYLE-BROKEN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$4.012"))
        .stderr(predicate::str::contains("using sample data"));
}

#[test]
fn test_edit_never_falls_back() {
    let tmp = setup_sample_project();
    plm()
        .current_dir(tmp.path())
        .args(["--style", "STYLE-MISSING", "pack", "add", "Box", "--amount", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_project_config_precision() {
    let tmp = setup_sample_project();
    fs::write(tmp.path().join(".plm/config.yaml"), "precision: 2\n").unwrap();

    plm()
        .current_dir(tmp.path())
        .arg("cost")
        .assert()
        .success()
        .stdout(predicate::str::contains("$4.01\n"));
}

// ============================================================================
// Sourcing and decisions
// ============================================================================

#[test]
fn test_quote_list_variance() {
    let tmp = TempDir::new().unwrap();
    plm()
        .current_dir(tmp.path())
        .args(["quote", "list", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Q-01\tFactory Z"))
        .stdout(predicate::str::contains("-6.54%"));
}

#[test]
fn test_decision_add_and_list() {
    let tmp = setup_sample_project();

    plm()
        .current_dir(tmp.path())
        .args([
            "decision",
            "add",
            "Use woven neck label",
            "--owner",
            "Sam",
            "--outcome",
            "Approved",
        ])
        .assert()
        .success();

    plm()
        .current_dir(tmp.path())
        .args(["decision", "list", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use woven neck label"))
        .stdout(predicate::str::contains("Choose jersey supplier"));
}

#[test]
fn test_config_keys() {
    plm()
        .args(["config", "keys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("currency_symbol"));
}
