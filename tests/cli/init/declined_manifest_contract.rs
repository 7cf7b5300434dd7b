use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_no_in_empty_directory_fails_without_writing() {
    let ctx = TestContext::new();
    ctx.write("gas-init.toml", "[ui]\nframework = \"none\"\n");

    ctx.cli()
        .args(["init", "--no", "--title", "Budget"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: No package.json found"))
        .stderr(predicate::str::contains("creation was declined"));

    assert!(!ctx.exists("package.json"));
    assert!(!ctx.exists("tsconfig.json"));
}
