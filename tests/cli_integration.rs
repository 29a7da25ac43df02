//! Integration tests for the `crumbs` binary.
//!
//! Each test writes a route config into a temp directory and runs the
//! binary against it with `--config`.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

// =============================================================================
// Test Fixtures
// =============================================================================

const ROUTES: &str = r#"
[[routes]]
path = ""
name = "home"
breadcrumb = "Home"

  [[routes.children]]
  path = "users"
  name = "users"
  breadcrumb = "Users"

    [[routes.children.children]]
    path = ":id"
    name = "user"
    breadcrumb = { template = "User :id" }

[[routes]]
path = "/users/:id/edit"
name = "user-edit"
breadcrumb = { label = "Edit", parent = "user" }
"#;

/// A temp directory holding a `routes.toml`.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(contents: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        dir.child("routes.toml")
            .write_str(contents)
            .expect("failed to write config");
        Self { dir }
    }

    /// A `crumbs` command pointed at this fixture's config.
    fn crumbs(&self) -> Command {
        let mut cmd = Command::cargo_bin("crumbs").expect("binary exists");
        cmd.current_dir(self.dir.path())
            .env_remove("ROUTECRUMBS_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.dir.child("routes.toml").path());
        cmd
    }
}

// =============================================================================
// Basic
// =============================================================================

#[test]
fn version_flag_works() {
    Command::cargo_bin("crumbs")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("crumbs"));
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("crumbs")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trail"))
        .stdout(predicate::str::contains("routes"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn completion_generates_script() {
    Command::cargo_bin("crumbs")
        .unwrap()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crumbs"));
}

// =============================================================================
// trail
// =============================================================================

#[test]
fn trail_text_splices_parent_chain() {
    let fx = Fixture::new(ROUTES);

    fx.crumbs()
        .args(["trail", "user-edit", "-p", "id=42"])
        .assert()
        .success()
        .stdout("Home > Users > User 42 > Edit\n");
}

#[test]
fn trail_debug_shows_paths() {
    let fx = Fixture::new(ROUTES);

    fx.crumbs()
        .args(["--debug", "trail", "user", "-p", "id=7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Home (/)"))
        .stdout(predicate::str::contains("User 7 (/users/7)"));
}

#[test]
fn trail_html_links_all_but_last() {
    let fx = Fixture::new(ROUTES);

    fx.crumbs()
        .args(["trail", "users", "--format", "html"])
        .assert()
        .success()
        .stdout(
            "<ol class=\"breadcrumb\">\
             <li class=\"breadcrumb-item\"><a href=\"/\">Home</a></li>\
             <li class=\"breadcrumb-item\"><span>Users</span></li>\
             </ol>\n",
        );
}

#[test]
fn trail_json_has_one_slot_per_entry() {
    let fx = Fixture::new(ROUTES);

    let output = fx
        .crumbs()
        .args(["trail", "user", "-p", "id=3", "-f", "json"])
        .output()
        .expect("failed to run crumbs");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["route"], "user");
    assert_eq!(json["params"]["id"], "3");

    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2]["label"], "User 3");
    assert_eq!(items[2]["path"], "/users/3");
    assert_eq!(items[2]["current"], true);
    assert_eq!(items[0]["current"], false);
}

#[test]
fn trail_unknown_route_fails() {
    let fx = Fixture::new(ROUTES);

    fx.crumbs()
        .args(["trail", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn trail_rejects_malformed_param() {
    let fx = Fixture::new(ROUTES);

    fx.crumbs()
        .args(["trail", "user", "-p", "id"])
        .assert()
        .failure();
}

#[test]
fn trail_uses_custom_template() {
    let fx = Fixture::new(&format!(
        "[render]\ntemplate = \"[{{label}}]\"\n{}",
        ROUTES
    ));

    fx.crumbs()
        .args(["trail", "users", "-f", "html"])
        .assert()
        .success()
        .stdout("[Home][Users]\n");
}

// =============================================================================
// routes / check
// =============================================================================

#[test]
fn routes_lists_full_paths() {
    let fx = Fixture::new(ROUTES);

    fx.crumbs()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/users/:id"))
        .stdout(predicate::str::contains("parent: user"))
        .stdout(predicate::str::contains("computed"));
}

#[test]
fn routes_with_empty_config() {
    let fx = Fixture::new("");

    fx.crumbs()
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("No routes configured."));
}

#[test]
fn check_passes_on_valid_config() {
    let fx = Fixture::new(ROUTES);

    fx.crumbs()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 4 route(s) resolved"));
}

#[test]
fn check_reports_parent_cycle() {
    let fx = Fixture::new(
        r#"
[[routes]]
path = "/a"
name = "a"
breadcrumb = { label = "A", parent = "b" }

[[routes]]
path = "/b"
name = "b"
breadcrumb = { label = "B", parent = "a" }
"#,
    );

    fx.crumbs()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cycle"));
}

#[test]
fn check_warns_on_unknown_parent() {
    let fx = Fixture::new(
        r#"
[[routes]]
path = "/a"
name = "a"
breadcrumb = { label = "A", parent = "missing" }
"#,
    );

    fx.crumbs()
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn quiet_suppresses_warnings() {
    let fx = Fixture::new(
        r#"
[[routes]]
path = "/a"
name = "a"
breadcrumb = 7
"#,
    );

    fx.crumbs()
        .args(["-q", "check"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn duplicate_names_fail_to_load() {
    let fx = Fixture::new(
        r#"
[[routes]]
path = "/a"
name = "same"

[[routes]]
path = "/b"
name = "same"
"#,
    );

    fx.crumbs()
        .arg("routes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("same"));
}
