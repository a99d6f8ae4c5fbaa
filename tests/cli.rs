use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use tempfile::TempDir;

#[test]
fn about_shows_version() {
    let home = TempDir::new().expect("temp home");
    cargo_bin_cmd!("said")
        .env("HOME", home.path())
        .arg("about")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_short_id() {
    let home = TempDir::new().expect("temp home");
    cargo_bin_cmd!("said")
        .env("HOME", home.path())
        .current_dir(home.path())
        .args(["verify", "123", "--no-log"])
        .assert()
        .code(1)
        .stdout(contains("ID must be exactly 13 digits long."));
}

#[test]
fn rejects_bad_as_of_date() {
    let home = TempDir::new().expect("temp home");
    cargo_bin_cmd!("said")
        .env("HOME", home.path())
        .args(["--as-of", "2026-13-01", "about"])
        .assert()
        .failure()
        .stderr(contains("--as-of"));
}
