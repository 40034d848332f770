use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn order_prints_dependencies_first() {
  let env = TestEnv::engine();

  env
    .lumen_cmd()
    .arg("order")
    .assert()
    .success()
    .stdout("Core\nMath\nRenderer\nGame\n");
}

#[test]
fn order_reports_load_summary_on_stderr() {
  let env = TestEnv::engine();

  env
    .lumen_cmd()
    .arg("order")
    .assert()
    .success()
    .stdout("Core\nMath\nRenderer\nGame\n")
    .stderr(predicate::str::contains("Loaded 4 module(s) from 4 build file(s)"));
}

#[test]
fn order_json_includes_descriptors() {
  let env = TestEnv::engine();

  let output = env.lumen_cmd().args(["order", "-o", "json"]).output().unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["order"], serde_json::json!(["Core", "Math", "Renderer", "Game"]));
  assert_eq!(json["modules"][2]["name"], "Renderer");
  assert_eq!(json["modules"][2]["type"], "shared_library");
  assert_eq!(json["modules"][3]["dependencies"], serde_json::json!(["Renderer"]));
}

#[test]
fn order_with_explicit_root_and_source() {
  let env = TestEnv::engine();
  env.add_fixture("Tools/Broken.build", "broken.build");

  // Only Engine is scanned, so the broken tool is never loaded.
  env
    .lumen_cmd()
    .env_remove("LUMEN_ROOT")
    .current_dir(std::env::temp_dir())
    .arg("order")
    .arg("--root")
    .arg(env.root_path())
    .args(["--source", "Engine"])
    .assert()
    .success()
    .stdout("Core\nMath\nRenderer\n");
}

#[test]
fn order_refuses_cycles() {
  let env = TestEnv::engine();
  env.add_fixture("Cycles/CycleA.build", "cycle_a.build");
  env.add_fixture("Cycles/CycleB.build", "cycle_b.build");

  env
    .lumen_cmd()
    .arg("order")
    .assert()
    .code(84)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("dependency cycle detected: CycleA → CycleB → CycleA"));
}

#[test]
fn order_reports_parse_errors_with_position() {
  let env = TestEnv::engine();
  env.add_fixture("Plugins/Broken.build", "broken.build");

  env
    .lumen_cmd()
    .arg("order")
    .assert()
    .code(84)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("Broken.build:2:14: error: unterminated string"))
    .stderr(predicate::str::contains("1 error(s) while loading build files"));
}

#[test]
fn order_reports_duplicate_modules() {
  let env = TestEnv::engine();
  env.write_file("Legacy/Core.build", "module Core {}");

  env
    .lumen_cmd()
    .arg("order")
    .assert()
    .code(84)
    .stderr(predicate::str::contains("duplicate module 'Core'"));
}

#[test]
fn undefined_dependency_is_a_warning() {
  let env = TestEnv::empty();
  env.write_file("Game.build", "module Game { deps = [Physics] }");

  env
    .lumen_cmd()
    .arg("order")
    .assert()
    .success()
    .stdout("Physics\nGame\n")
    .stderr(predicate::str::contains("depends on 'Physics'"));
}

#[test]
fn empty_project_fails() {
  let env = TestEnv::empty();

  env
    .lumen_cmd()
    .arg("order")
    .assert()
    .code(84)
    .stderr(predicate::str::contains("No .build files found"));
}

#[test]
fn missing_source_directory_is_a_warning() {
  let env = TestEnv::engine();

  env
    .lumen_cmd()
    .args(["order", "--source", "Engine", "--source", "Plugins"])
    .assert()
    .success()
    .stderr(predicate::str::contains("directory not found"));
}
