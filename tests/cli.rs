use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn gdmodel() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gdmodel"));
    cmd.env("NO_COLOR", "1")
        .env_remove("GDMODEL_CONFIG")
        .env_remove("GDMODEL_FORMAT")
        .env_remove("GDMODEL_DEBUG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_payload(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write payload");
    path
}

#[test]
fn enum_parse_accepts_canonical_value() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    gdmodel()
        .args(["enum", "parse", "ThreatIntelSetFormat", "OTX_CSV"])
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("OTX_CSV is a valid ThreatIntelSetFormat"));

    Ok(())
}

#[test]
fn enum_parse_rejects_unknown_value() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    gdmodel()
        .args(["enum", "parse", "ThreatIntelSetFormat", "NOT_A_REAL_VALUE"])
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"))
        .stderr(predicate::str::contains("NOT_A_REAL_VALUE"));

    Ok(())
}

#[test]
fn enum_parse_rejects_empty_value() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    gdmodel()
        .args(["enum", "parse", "FilterAction", ""])
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("FilterAction value cannot be empty"));

    Ok(())
}

#[test]
fn enum_parse_is_case_sensitive() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    gdmodel()
        .args(["enum", "parse", "DetectorStatus", "enabled"])
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("'enabled' is not a valid DetectorStatus"));

    Ok(())
}

#[test]
fn enum_values_lists_canonical_strings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    gdmodel()
        .args(["enum", "values", "IpSetFormat"])
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("TXT"))
        .stdout(predicate::str::contains("ALIEN_VAULT"));

    Ok(())
}

#[test]
fn unknown_enum_suggests_list() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    gdmodel()
        .args(["enum", "values", "Colour"])
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown enumeration: Colour"))
        .stderr(predicate::str::contains("gdmodel enum list"));

    Ok(())
}

#[test]
fn shape_show_renders_display_and_hash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let payload = write_payload(temp.path(), "ipset.json", r#"{"ipSetId": "abc-123"}"#);

    gdmodel()
        .args(["shape", "show", "CreateIPSetResult", "--file"])
        .arg(&payload)
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("{IpSetId: abc-123}"))
        .stdout(predicate::str::contains("hash: -1207981466"));

    Ok(())
}

#[test]
fn shape_show_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    gdmodel()
        .args(["shape", "show", "CreateIPSetResult"])
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(predicate::str::contains("{}"))
        .stdout(predicate::str::contains("hash: 31"));

    Ok(())
}

#[test]
fn shape_show_json_uses_envelope() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let payload = write_payload(temp.path(), "ipset.json", r#"{"ipSetId": "abc-123"}"#);

    let assert = gdmodel()
        .args(["shape", "show", "CreateIPSetResult", "--format", "json", "-f"])
        .arg(&payload)
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["data"]["shape"], "CreateIPSetResult");
    assert_eq!(json["data"]["display"], "{IpSetId: abc-123}");
    assert_eq!(json["data"]["hash"], -1207981466);
    assert_eq!(json["data"]["value"]["ipSetId"], "abc-123");
    assert_eq!(json["meta"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["meta"]["subject"], "CreateIPSetResult");

    Ok(())
}

#[test]
fn shape_show_keeps_geo_location() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let payload = write_payload(
        temp.path(),
        "remote.json",
        r#"{"ipAddressV4": "198.51.100.7", "geoLocation": {"lat": 50.1, "lon": 8.6}}"#,
    );

    let assert = gdmodel()
        .args(["shape", "show", "RemoteIpDetails", "--format", "json", "-f"])
        .arg(&payload)
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["data"]["value"]["geoLocation"]["lat"], 50.1);
    assert_eq!(json["data"]["value"]["geoLocation"]["lon"], 8.6);
    assert_eq!(
        json["data"]["display"],
        "{GeoLocation: {Lat: 50.1, Lon: 8.6}, IpAddressV4: 198.51.100.7}"
    );

    Ok(())
}

#[test]
fn shape_show_list_ip_sets_request() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    gdmodel()
        .args(["shape", "show", "ListIPSetsRequest"])
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .write_stdin(r#"{"detectorId": "d-1", "maxResults": 50}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("{DetectorId: d-1, MaxResults: 50}"));

    Ok(())
}

#[test]
fn shape_show_rejects_malformed_payload() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let payload = write_payload(temp.path(), "bad.json", r#"{"ipSetId": 42}"#);

    gdmodel()
        .args(["shape", "show", "CreateIPSetResult", "-f"])
        .arg(&payload)
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));

    Ok(())
}

#[test]
fn unknown_shape_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    gdmodel()
        .args(["shape", "show", "DescribeEverything"])
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shape: DescribeEverything"));

    Ok(())
}

#[test]
fn shape_compare_reports_equal_payloads() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let left = write_payload(
        temp.path(),
        "left.json",
        r#"{"name": "f1", "action": "ARCHIVE", "rank": 1}"#,
    );
    let right = write_payload(
        temp.path(),
        "right.json",
        r#"{"rank": 1, "action": "ARCHIVE", "name": "f1"}"#,
    );

    gdmodel()
        .args(["shape", "compare", "CreateFilterRequest"])
        .arg(&left)
        .arg(&right)
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("CreateFilterRequest payloads are equal"));

    Ok(())
}

#[test]
fn shape_compare_reports_differences() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let left = write_payload(temp.path(), "left.json", r#"{"ipSetId": "abc-123"}"#);
    let right = write_payload(temp.path(), "right.json", r#"{"ipSetId": "abc-124"}"#);

    gdmodel()
        .args(["shape", "compare", "CreateIPSetResult"])
        .arg(&left)
        .arg(&right)
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("CreateIPSetResult payloads differ"))
        .stdout(predicate::str::contains("{IpSetId: abc-124}"));

    Ok(())
}

#[test]
fn shape_list_includes_known_shapes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    gdmodel()
        .args(["shape", "list", "--format", "table"])
        .arg("--config")
        .arg(temp.path().join("config.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("CreateFilterRequest"))
        .stdout(predicate::str::contains("RemoteIpDetails"));

    Ok(())
}

#[test]
fn config_set_format_persists_preference() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = temp.path().join("nested").join("config.yaml");

    gdmodel()
        .args(["config", "set-format", "yaml"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Default format set to yaml"));

    let contents = fs::read_to_string(&config_path)?;
    assert!(contents.contains("format: yaml"));

    // Later commands pick the stored format up without a flag
    gdmodel()
        .args(["enum", "parse", "OrderBy", "ASC"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("value: ASC"));

    Ok(())
}

#[test]
fn format_flag_overrides_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = temp.path().join("config.yaml");
    fs::write(&config_path, "preferences:\n  format: yaml\n")?;

    gdmodel()
        .args(["enum", "parse", "OrderBy", "DESC", "--format", "json"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\": \"DESC\""));

    Ok(())
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = temp.path().join("config.yaml");
    fs::write(&config_path, "preferences:\n  format: table\n")?;

    let assert = gdmodel()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));
    assert!(stdout.contains("Default format: table"));
    assert!(stdout.contains("Effective format: table"));

    Ok(())
}

#[test]
fn set_format_repairs_malformed_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = temp.path().join("config.yaml");
    fs::write(&config_path, "preferences: [yaml: content")?;

    gdmodel()
        .args(["config", "set-format", "json"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring unreadable configuration"));

    let contents = fs::read_to_string(&config_path)?;
    assert!(contents.contains("format: json"));

    gdmodel()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Effective format: json"));

    Ok(())
}

#[test]
fn malformed_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = temp.path().join("config.yaml");
    fs::write(&config_path, "preferences: [yaml: content")?;

    gdmodel()
        .arg("status")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));

    Ok(())
}

#[test]
fn version_prints_package_version() {
    gdmodel()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "gdmodel version {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn completion_generates_script() {
    gdmodel()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gdmodel"));
}
