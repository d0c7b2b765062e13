use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tempfile::tempdir;

use netlayout_cli::Args;

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn topologies_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/topologies")
}

fn args_for(input: &Path, output: &Path) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        seed: Some(7),
        payload: None,
        log_level: "off".to_string(),
    }
}

fn read_json(path: &Path) -> Value {
    let content = fs::read_to_string(path).expect("Failed to read output");
    serde_json::from_str(&content).expect("Output is not valid JSON")
}

#[test]
fn e2e_smoke_test_valid_topologies() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_topologies = collect_json_files(topologies_dir());

    assert!(
        !valid_topologies.is_empty(),
        "No topologies found in tests/topologies"
    );

    let mut failed = Vec::new();

    for input_path in &valid_topologies {
        let output_path = temp_dir
            .path()
            .join(input_path.file_name().expect("File has a name"));

        if let Err(e) = netlayout_cli::run(&args_for(input_path, &output_path)) {
            failed.push((input_path.clone(), e));
            continue;
        }

        // Every location written must lie inside the default canvas interior.
        let output = read_json(&output_path);
        for collection in ["devices", "networks"] {
            let Some(records) = output[collection].as_array() else {
                continue;
            };
            for record in records {
                let location = &record["location"];
                if location.is_null() {
                    continue;
                }
                let x = location["x"].as_i64().expect("x is an integer");
                let y = location["y"].as_i64().expect("y is an integer");
                assert!(
                    (80..=1120).contains(&x) && (80..=720).contains(&y),
                    "{}: location out of bounds: {record}",
                    input_path.display()
                );
            }
        }
    }

    if !failed.is_empty() {
        eprintln!("\nValid topologies that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid topology(ies) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_topologies() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_topologies = collect_json_files(topologies_dir().join("errors"));

    assert!(
        !error_topologies.is_empty(),
        "No error topologies found in tests/topologies/errors"
    );

    let mut unexpectedly_passed = Vec::new();

    for input_path in &error_topologies {
        let output_path = temp_dir
            .path()
            .join(input_path.file_name().expect("File has a name"));

        if netlayout_cli::run(&args_for(input_path, &output_path)).is_ok() {
            unexpectedly_passed.push(input_path.clone());
        }
        assert!(
            !output_path.exists(),
            "{}: no output should be written on failure",
            input_path.display()
        );
    }

    assert!(
        unexpectedly_passed.is_empty(),
        "Error topologies that passed: {unexpectedly_passed:?}"
    );
}

#[test]
fn e2e_passthrough_and_locations() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = topologies_dir().join("small_office.json");
    let output_path = temp_dir.path().join("out.json");

    netlayout_cli::run(&args_for(&input_path, &output_path)).expect("Layout failed");

    let input = read_json(&input_path);
    let output = read_json(&output_path);

    assert_eq!(output["metadata"], input["metadata"]);
    assert_eq!(output["connections"], input["connections"]);
    assert_eq!(
        output["devices"][0]["properties"],
        input["devices"][0]["properties"]
    );
    for record in output["devices"].as_array().expect("devices array") {
        assert!(record["location"]["x"].is_i64(), "missing location: {record}");
    }
    assert!(output["networks"][0]["location"]["y"].is_i64());
}

#[test]
fn e2e_dropped_records_have_no_location() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = topologies_dir().join("partially_invalid.json");
    let output_path = temp_dir.path().join("out.json");

    netlayout_cli::run(&args_for(&input_path, &output_path)).expect("Layout failed");

    let input = read_json(&input_path);
    let output = read_json(&output_path);

    // r1 and vm1 are laid out; the printer, the nameless switch, the
    // duplicate router and the string record are not.
    assert!(output["devices"][0]["location"].is_object());
    assert!(output["devices"][5]["location"].is_object());
    for index in 1..=4 {
        assert_eq!(output["devices"][index], input["devices"][index]);
    }
    assert!(output["networks"][0]["location"].is_object());
    assert_eq!(output["networks"][1], input["networks"][1]);
}

#[test]
fn e2e_same_seed_same_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = topologies_dir().join("datacenter.json");
    let first = temp_dir.path().join("first.json");
    let second = temp_dir.path().join("second.json");

    netlayout_cli::run(&args_for(&input_path, &first)).expect("First run failed");
    netlayout_cli::run(&args_for(&input_path, &second)).expect("Second run failed");

    assert_eq!(read_json(&first), read_json(&second));
}

#[test]
fn e2e_writes_payload() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = topologies_dir().join("small_office.json");
    let output_path = temp_dir.path().join("out.json");
    let payload_path = temp_dir.path().join("payload.json");

    let mut args = args_for(&input_path, &output_path);
    args.payload = Some(payload_path.to_string_lossy().to_string());
    netlayout_cli::run(&args).expect("Layout failed");

    let output = read_json(&output_path);
    let payload = read_json(&payload_path);

    let devices = payload["devices"].as_array().expect("devices array");
    assert_eq!(devices.len(), 4);
    assert_eq!(devices[0]["device_id"], "router-001");
    assert_eq!(
        devices[0]["position"]["x"],
        output["devices"][0]["location"]["x"]
    );
    assert_eq!(payload["networks"][0]["network_id"], "network-nat-001");
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input_path = topologies_dir().join("datacenter.json");
    let output_path = temp_dir.path().join("out.json");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[layout]\ncanvas_width = 2000.0\ncanvas_height = 1000.0\nmargin = 40.0\n",
    )
    .expect("Failed to write config");

    let mut args = args_for(&input_path, &output_path);
    args.config = Some(config_path.to_string_lossy().to_string());
    netlayout_cli::run(&args).expect("Layout failed");

    let output = read_json(&output_path);
    for record in output["devices"].as_array().expect("devices array") {
        let x = record["location"]["x"].as_i64().expect("x is an integer");
        let y = record["location"]["y"].as_i64().expect("y is an integer");
        assert!((40..=1960).contains(&x) && (40..=960).contains(&y));
    }
}
