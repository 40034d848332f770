use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn check_summarizes_valid_project() {
  let env = TestEnv::engine();

  env
    .lumen_cmd()
    .arg("check")
    .assert()
    .success()
    .stdout(predicate::str::contains("Build files are valid"))
    .stdout(predicate::str::contains("Modules: 4"));
}

#[test]
fn check_counts_undefined_dependencies() {
  let env = TestEnv::engine();
  env.write_file("Tools/Editor.build", "module Editor { deps = [Renderer, Ui] }");

  env
    .lumen_cmd()
    .arg("check")
    .assert()
    .success()
    .stdout(predicate::str::contains("Undefined dependencies: 1"));
}

#[test]
fn check_fails_on_cycle() {
  let env = TestEnv::empty();
  env.add_fixture("CycleA.build", "cycle_a.build");
  env.add_fixture("CycleB.build", "cycle_b.build");

  env
    .lumen_cmd()
    .arg("check")
    .assert()
    .code(84)
    .stderr(predicate::str::contains("Cannot compute build order"));
}
