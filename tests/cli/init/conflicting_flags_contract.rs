use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_rejects_yes_together_with_no() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "--yes", "--no"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    assert!(!ctx.exists("package.json"));
}

#[test]
fn init_rejects_missing_directory() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "does-not-exist", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Project directory does not exist"));
}
