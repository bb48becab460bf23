/// CLI integration tests for fitcalc.
///
/// Each test spawns the compiled binary via the `assert_cmd::cargo_bin_cmd!`
/// macro and sets `FITCALC_HOME` to a fresh `TempDir` so tests are fully
/// isolated from the developer's real `~/.fitcalc` data.
use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

// ── helpers ──────────────────────────────────────────────────────────────────

/// Returns a `Command` with `FITCALC_HOME` pointing at `dir` and logging off,
/// so stderr carries only the error envelope.
fn cmd_in(dir: &TempDir) -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("fitcalc");
    c.env("FITCALC_HOME", dir.path());
    c.env("FITCALC_LOG", "off");
    c
}

fn init_dir(dir: &TempDir) {
    cmd_in(dir).args(["init", "--skip"]).assert().success();
}

/// Store the 30 y / 80 kg / 180 cm male reference profile.
fn set_reference_profile(dir: &TempDir) {
    cmd_in(dir)
        .args([
            "profile", "set", "--age", "30", "--gender", "male", "--weight", "80", "--height",
            "180", "--activity", "moderate",
        ])
        .assert()
        .success();
}

fn parse_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stdout.clone();
    serde_json::from_slice(&bytes).expect("stdout is not valid JSON")
}

fn parse_stderr_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stderr.clone();
    serde_json::from_slice(&bytes).expect("stderr is not valid JSON")
}

// ── init ─────────────────────────────────────────────────────────────────────

#[test]
fn test_init_skip_creates_config_and_db() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["init", "--skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config initialized"));

    assert!(dir.path().join("config.toml").exists());
    assert!(dir.path().join("data.db").exists());
}

#[test]
fn test_init_skip_is_idempotent() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    cmd_in(&dir).args(["init", "--skip"]).assert().success();
}

#[test]
fn test_init_skip_saves_default_profile() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    let assert = cmd_in(&dir).args(["profile", "show"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["profile"]["demographics"]["weight"], 70.0);
}

// ── profile ──────────────────────────────────────────────────────────────────

#[test]
fn test_profile_show_without_profile_is_null() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir).args(["profile", "show"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["status"], "ok");
    assert!(json["data"]["profile"].is_null());
}

#[test]
fn test_profile_set_updates_section() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);

    let assert = cmd_in(&dir)
        .args(["profile", "set", "--goal", "cutting", "--target-weight", "75"])
        .assert()
        .success();
    let json = parse_json(&assert);
    let profile = &json["data"]["profile"];
    assert_eq!(profile["goals"]["objective"], "cutting");
    assert_eq!(profile["goals"]["targetWeight"], 75.0);
    assert_eq!(profile["demographics"]["weight"], 80.0);
}

#[test]
fn test_profile_set_without_flags_fails() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir).args(["profile", "set"]).assert().failure();
}

#[test]
fn test_profile_set_rejects_unknown_gender() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args(["profile", "set", "--gender", "robot"])
        .assert()
        .failure();
    let json = parse_stderr_json(&assert);
    assert_eq!(json["error"]["code"], "general_error");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("invalid gender")
    );
}

#[test]
fn test_profile_show_human() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);
    cmd_in(&dir)
        .args(["--human", "profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("30 y, male, 80 kg, 180 cm"));
}

// ── calculators ──────────────────────────────────────────────────────────────

#[test]
fn test_bmr_uses_stored_profile() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);

    let assert = cmd_in(&dir).args(["bmr"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["command"], "bmr");
    assert_eq!(json["data"]["result"]["bmr"], 1780.0);
    assert_eq!(json["data"]["result"]["tdee"], 2759.0);
}

#[test]
fn test_bmr_flags_override_profile() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);

    let assert = cmd_in(&dir)
        .args(["bmr", "--gender", "female"])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["result"]["bmr"], 1614.0);
}

/// Scenario: Katch-McArdle without body fat fails with a validation envelope.
#[test]
fn test_bmr_katch_without_body_fat_fails() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);

    let assert = cmd_in(&dir)
        .args(["bmr", "--method", "katch"])
        .assert()
        .failure()
        .code(1);
    let json = parse_stderr_json(&assert);
    assert_eq!(json["status"], "error");
    assert_eq!(json["command"], "bmr");
    assert_eq!(json["error"]["code"], "validation_error");
}

#[test]
fn test_bmr_katch_uses_tracked_body_fat() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);
    cmd_in(&dir)
        .args(["track", "body-fat", "20"])
        .assert()
        .success();

    let assert = cmd_in(&dir)
        .args(["bmr", "--method", "katch"])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["result"]["bmr"], 1752.0);
}

#[test]
fn test_macros_explicit_calories() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args(["macros", "--calories", "2000", "--goal", "cutting"])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["result"]["protein_g"], 175.0);
    assert_eq!(json["data"]["result"]["ratios"]["fat"], 25);
}

#[test]
fn test_macros_overfull_ratios_rejected() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args(["macros", "--calories", "2000", "--protein", "70", "--carb", "50"])
        .assert()
        .failure();
    let json = parse_stderr_json(&assert);
    assert_eq!(json["error"]["code"], "validation_error");
}

#[test]
fn test_hydration_reference() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args([
            "hydration",
            "--weight",
            "70",
            "--activity",
            "moderate",
            "--climate",
            "temperate",
            "--exercise",
            "30",
        ])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["result"]["total_ml"], 3250.0);
}

#[test]
fn test_glycemic_single_food() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args(["glycemic", "55", "30", "--fiber", "5"])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["result"]["glycemic_load"], 13.8);
    assert_eq!(json["data"]["result"]["load_band"], "medium");
}

#[test]
fn test_glycemic_meal_json() {
    let dir = TempDir::new().unwrap();
    let meal = r#"[{"name":"rice","glycemic_index":70,"carbs_g":40},
                   {"name":"lentils","glycemic_index":30,"carbs_g":20,"fiber_g":8}]"#;
    let assert = cmd_in(&dir)
        .args(["glycemic", "--meal", meal])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["meal"]["total_load"], 31.6);
}

#[test]
fn test_one_rm_json_and_human() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir).args(["one-rm", "100", "5"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["result"]["one_rep_max"], 115.1);
    assert_eq!(json["data"]["result"]["table"].as_array().unwrap().len(), 8);

    cmd_in(&dir)
        .args(["-H", "one-rm", "100", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated 1RM: 115.1 kg"));
}

#[test]
fn test_one_rm_rejects_too_many_reps() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["one-rm", "100", "31"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("validation_error"));
}

#[test]
fn test_volume_with_tempo() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args([
            "volume",
            "--set",
            "squat:100x5x3",
            "--set",
            "bench:80x8x3",
            "--one-rm",
            "120",
            "--tempo",
            "3-1-2-0",
        ])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["result"]["tonnage"], 3420.0);
    assert_eq!(json["data"]["result"]["time_under_tension_s"], 234);
}

#[test]
fn test_body_bmi_and_navy() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);
    let assert = cmd_in(&dir)
        .args(["body", "--waist", "85", "--neck", "38"])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["bmi"]["bmi"], 24.7);
    assert_eq!(json["data"]["body_fat"]["body_fat_pct"], 16.1);
}

#[test]
fn test_body_needs_both_tape_measurements() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["body", "--waist", "85"])
        .assert()
        .failure();
}

#[test]
fn test_balance_projection() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);
    let assert = cmd_in(&dir)
        .args(["balance", "--intake", "2259", "--weeks", "4"])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["tdee"], 2759.0);
    assert_eq!(json["data"]["result"]["daily_balance_kcal"], -500.0);
    assert_eq!(json["data"]["result"]["refeed_every_days"], 7);
}

#[test]
fn test_periodize_and_progress() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args(["periodize", "12", "--objective", "strength"])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["plan"]["phases"].as_array().unwrap().len(), 3);

    let assert = cmd_in(&dir)
        .args(["progress", "100", "120", "8"])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["plan"]["weeks"][7]["weight"], 120.0);
}

#[test]
fn test_periodize_too_short() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args(["periodize", "2", "--objective", "competition"])
        .assert()
        .failure();
    let json = parse_stderr_json(&assert);
    assert_eq!(json["error"]["code"], "validation_error");
}

// ── track ────────────────────────────────────────────────────────────────────

#[test]
fn test_track_weight_with_date() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args(["track", "weight", "81.5", "--date", "2026-03-01"])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["kind"], "weight");
    assert_eq!(json["data"]["entry"]["date"], "2026-03-01");
    assert_eq!(json["data"]["entry"]["weight"], 81.5);
}

#[test]
fn test_track_lift_records_estimate() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["track", "lift", "squat", "100", "5"])
        .assert()
        .success();

    let assert = cmd_in(&dir).args(["track", "show"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(
        json["data"]["tracking"]["performance"]["squat"][0]["oneRepMax"],
        115.1
    );
}

#[test]
fn test_track_show_orders_weights() {
    let dir = TempDir::new().unwrap();
    for (date, w) in [("2026-03-05", "80"), ("2026-03-01", "82")] {
        cmd_in(&dir)
            .args(["track", "weight", w, "--date", date])
            .assert()
            .success();
    }
    let assert = cmd_in(&dir).args(["track", "show"]).assert().success();
    let json = parse_json(&assert);
    let weights = json["data"]["tracking"]["weight"].as_array().unwrap();
    assert_eq!(weights[0]["date"], "2026-03-01");
    assert_eq!(weights[1]["date"], "2026-03-05");
}

#[test]
fn test_track_score_out_of_range() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["track", "score", "fatigue", "11"])
        .assert()
        .failure();
}

#[test]
fn test_track_human_output() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["--human", "track", "water", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged hydration"));
}

// ── units ────────────────────────────────────────────────────────────────────

/// Scenario: with imperial units, inputs are pounds and storage stays metric.
#[test]
fn test_imperial_input_is_stored_metric() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["profile", "set", "--units", "imperial", "--weight", "176.37"])
        .assert()
        .success();

    let assert = cmd_in(&dir).args(["profile", "show"]).assert().success();
    let json = parse_json(&assert);
    let kg = json["data"]["profile"]["demographics"]["weight"]
        .as_f64()
        .unwrap();
    assert!((kg - 80.0).abs() < 0.01);

    cmd_in(&dir)
        .args(["-H", "one-rm", "225", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lbs"));
}

// ── export / import / clear ──────────────────────────────────────────────────

#[test]
fn test_export_clear_import_round_trip() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);
    cmd_in(&dir)
        .args(["track", "weight", "80", "--date", "2026-01-01"])
        .assert()
        .success();

    let export_path = dir.path().join("backup.json");
    let export_str = export_path.to_str().unwrap();
    cmd_in(&dir)
        .args(["export", "--output", export_str])
        .assert()
        .success();
    let exported: Value = serde_json::from_str(&fs::read_to_string(&export_path).unwrap()).unwrap();
    assert_eq!(exported["version"], "1.0");

    cmd_in(&dir).args(["clear", "--yes"]).assert().success();
    let assert = cmd_in(&dir).args(["profile", "show"]).assert().success();
    assert!(parse_json(&assert)["data"]["profile"].is_null());

    cmd_in(&dir).args(["import", export_str]).assert().success();
    let assert = cmd_in(&dir).args(["profile", "show"]).assert().success();
    assert_eq!(
        parse_json(&assert)["data"]["profile"]["demographics"]["height"],
        180.0
    );
}

#[test]
fn test_export_to_stdout_is_json() {
    let dir = TempDir::new().unwrap();
    init_dir(&dir);
    let assert = cmd_in(&dir).args(["export"]).assert().success();
    let json = parse_json(&assert);
    assert!(json["userProfile"].is_object());
    assert!(json["exportDate"].is_string());
}

#[test]
fn test_import_malformed_file_fails() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ nope").unwrap();
    let assert = cmd_in(&dir)
        .args(["import", bad.to_str().unwrap()])
        .assert()
        .failure();
    let json = parse_stderr_json(&assert);
    assert_eq!(json["command"], "import");
}

#[test]
fn test_clear_requires_yes() {
    let dir = TempDir::new().unwrap();
    set_reference_profile(&dir);
    cmd_in(&dir).args(["clear"]).assert().failure();
    let assert = cmd_in(&dir).args(["profile", "show"]).assert().success();
    assert!(parse_json(&assert)["data"]["profile"].is_object());
}

// ── config ───────────────────────────────────────────────────────────────────

#[test]
fn test_config_set_and_show() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["config", "set", "defaults.climate", "hot"])
        .assert()
        .success();

    let assert = cmd_in(&dir).args(["config", "show"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["config"]["defaults"]["climate"], "hot");
}

#[test]
fn test_config_default_climate_used_without_profile() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["config", "set", "defaults.climate", "hot"])
        .assert()
        .success();
    let assert = cmd_in(&dir)
        .args(["hydration", "--weight", "70", "--activity", "moderate"])
        .assert()
        .success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["climate"], "hot");
    assert_eq!(json["data"]["result"]["total_ml"], 3540.0);
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["config", "set", "nope", "1"])
        .assert()
        .failure();
}

#[test]
fn test_config_store_file_redirects_database() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["config", "set", "store.file", "alt.db"])
        .assert()
        .success();
    set_reference_profile(&dir);
    assert!(dir.path().join("alt.db").exists());
    assert!(!dir.path().join("data.db").exists());
}

// ── completions ──────────────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fitcalc"));
}
