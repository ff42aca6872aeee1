//! Tests for `specdrift check`.

use predicates::prelude::*;

use super::common::{DEPLOYMENT_REORDERED_YAML, DEPLOYMENT_YAML, TestEnv};

const ANNOTATION: &str = "nvidia.com/last-applied-hash";

#[test]
fn first_check_without_current_is_changed() {
  let env = TestEnv::new();
  let desired = env.write_file("desired.yaml", DEPLOYMENT_YAML);

  env
    .cmd()
    .args(["check", "--desired"])
    .arg(&desired)
    .assert()
    .success()
    .stdout(predicate::str::contains("changed: no current object"));
}

#[test]
fn written_object_is_stamped_with_its_fingerprint() {
  let env = TestEnv::new();
  let desired = env.write_file("desired.yaml", DEPLOYMENT_YAML);
  let applied = env.path("applied.json");

  let hash = env.json(&["hash", desired.to_str().unwrap()]);
  let check = env.json(&[
    "check",
    "--desired",
    desired.to_str().unwrap(),
    "--write",
    applied.to_str().unwrap(),
  ]);

  assert_eq!(check["changed"], true);
  assert_eq!(check["change"]["reason"], "created");
  assert_eq!(check["change"]["fingerprint"], hash["fingerprint"]);

  let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&applied).unwrap()).unwrap();
  assert_eq!(written["metadata"]["annotations"][ANNOTATION], hash["fingerprint"]);
}

#[test]
fn second_pass_against_applied_object_is_unchanged() {
  let env = TestEnv::new();
  let desired = env.write_file("desired.yaml", DEPLOYMENT_YAML);
  let reordered = env.write_file("reordered.yaml", DEPLOYMENT_REORDERED_YAML);
  let applied = env.path("applied.yaml");

  env
    .cmd()
    .args(["check", "--desired"])
    .arg(&desired)
    .arg("--write")
    .arg(&applied)
    .assert()
    .success();

  env
    .cmd()
    .args(["check", "--exit-code", "--desired"])
    .arg(&reordered)
    .arg("--current")
    .arg(&applied)
    .assert()
    .success()
    .stdout(predicate::str::contains("unchanged"));
}

#[test]
fn modified_spec_exits_one_with_exit_code() {
  let env = TestEnv::new();
  let desired = env.write_file("desired.yaml", DEPLOYMENT_YAML);
  let applied = env.path("applied.yaml");

  env
    .cmd()
    .args(["check", "--desired"])
    .arg(&desired)
    .arg("--write")
    .arg(&applied)
    .assert()
    .success();

  let scaled = env.write_file("scaled.yaml", &DEPLOYMENT_YAML.replace("replicas: 1", "replicas: 3"));

  env
    .cmd()
    .args(["check", "--exit-code", "--desired"])
    .arg(&scaled)
    .arg("--current")
    .arg(&applied)
    .assert()
    .code(1)
    .stdout(predicate::str::contains("changed:"));
}

#[test]
fn unchanged_check_does_not_write() {
  let env = TestEnv::new();
  let desired = env.write_file("desired.yaml", DEPLOYMENT_YAML);
  let applied = env.path("applied.yaml");
  let second = env.path("second.yaml");

  env
    .cmd()
    .args(["check", "--desired"])
    .arg(&desired)
    .arg("--write")
    .arg(&applied)
    .assert()
    .success();

  let check = env.json(&[
    "check",
    "--desired",
    desired.to_str().unwrap(),
    "--current",
    applied.to_str().unwrap(),
    "--write",
    second.to_str().unwrap(),
  ]);

  assert_eq!(check["changed"], false);
  assert_eq!(check["written"], serde_json::Value::Null);
  assert!(!second.exists());
}

#[test]
fn annotation_key_from_environment() {
  let env = TestEnv::new();
  let desired = env.write_file("desired.yaml", DEPLOYMENT_YAML);
  let applied = env.path("applied.json");

  env
    .cmd()
    .env("SPECDRIFT_ANNOTATION_KEY", "example.com/spec-hash")
    .args(["check", "--desired"])
    .arg(&desired)
    .arg("--write")
    .arg(&applied)
    .assert()
    .success();

  let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&applied).unwrap()).unwrap();
  let annotations = written["metadata"]["annotations"].as_object().unwrap();
  assert!(annotations.contains_key("example.com/spec-hash"));
  assert!(!annotations.contains_key(ANNOTATION));
}

#[test]
fn current_without_annotation_is_changed() {
  let env = TestEnv::new();
  let desired = env.write_file("desired.yaml", DEPLOYMENT_YAML);
  let current = env.write_file("current.yaml", DEPLOYMENT_YAML);

  let check = env.json(&[
    "check",
    "--desired",
    desired.to_str().unwrap(),
    "--current",
    current.to_str().unwrap(),
  ]);

  assert_eq!(check["changed"], true);
  assert_eq!(check["change"]["reason"], "missing_annotation");
}

#[test]
fn unsortable_list_fails_with_path() {
  let env = TestEnv::new();
  let desired = env.write_file(
    "desired.json",
    r#"{"kind": "Pod", "spec": {"volumes": [{"emptyDir": {}}]}}"#,
  );

  env
    .cmd()
    .args(["check", "--desired"])
    .arg(&desired)
    .assert()
    .code(2)
    .stderr(predicate::str::contains("/spec/volumes/0"));
}

#[test]
fn non_ascii_recorded_hash_is_reported_as_modified() {
  let env = TestEnv::new();
  let desired = env.write_file("desired.yaml", DEPLOYMENT_YAML);
  let current = env.write_file(
    "current.json",
    r#"{"apiVersion":"apps/v1","kind":"Deployment","metadata":{"name":"nim","annotations":{"nvidia.com/last-applied-hash":"aéééééééééééééé"}}}"#,
  );

  env
    .cmd()
    .args(["check", "--desired"])
    .arg(&desired)
    .arg("--current")
    .arg(&current)
    .assert()
    .success()
    .stdout(predicate::str::contains("changed: aééééééééééé"));
}
