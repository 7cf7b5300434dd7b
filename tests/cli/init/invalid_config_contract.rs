use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_reports_malformed_config_file() {
    let ctx = TestContext::new();
    ctx.write("gas-init.toml", "[project\ntitle = 1\n");

    ctx.cli()
        .args(["init", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid"))
        .stderr(predicate::str::contains("gas-init.toml"));
}

#[test]
fn init_reports_unknown_framework() {
    let ctx = TestContext::new();
    ctx.write("gas-init.toml", "[ui]\nframework = \"svelte\"\n");

    ctx.cli()
        .args(["init", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown UI framework 'svelte'"));
}

#[test]
fn init_reports_corrupt_manifest() {
    let ctx = TestContext::new();
    ctx.write("gas-init.toml", "[ui]\nframework = \"none\"\n");
    ctx.write("package.json", "{ \"name\": ");

    ctx.cli()
        .args(["init", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse manifest"))
        .stderr(predicate::str::contains("package.json"));
}
