use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_yes_fills_in_configs_for_provisioned_project() {
    let ctx = TestContext::new();
    ctx.write_provisioned_project();
    ctx.write(".gitignore", "node_modules\n.env\n");
    let manifest_before = ctx.read("package.json");

    ctx.cli()
        .args(["init", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Created tsconfig.json"))
        .stdout(predicate::str::contains("✅ Merged .gitignore"))
        .stdout(predicate::str::contains("clasp already configured (script 1EXISTING)"));

    assert_eq!(ctx.read("package.json"), manifest_before);
    assert!(ctx.exists("webpack.config.js"));
    assert!(ctx.exists(".claspignore"));
    assert!(!ctx.exists("README.md"));

    let gitignore = ctx.read(".gitignore");
    assert!(gitignore.starts_with("node_modules\n.env\n"));
    assert!(gitignore.contains("\ndist\n"));
}

#[test]
fn second_run_reports_nothing_new() {
    let ctx = TestContext::new();
    ctx.write_provisioned_project();
    ctx.cli().args(["init", "--yes"]).assert().success();

    ctx.cli()
        .args(["init", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created").not())
        .stdout(predicate::str::contains("Merged").not());
}

#[test]
fn init_reports_corrupt_clasp_project() {
    let ctx = TestContext::new();
    ctx.write_provisioned_project();
    ctx.write(".clasp.json", "{ \"scriptId\": ");

    ctx.cli()
        .args(["init", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid"))
        .stderr(predicate::str::contains(".clasp.json"));
}
