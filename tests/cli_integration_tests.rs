// CLI integration tests for the portfolio-book binary

use assert_cmd::Command;
use predicates::prelude::*;

fn portfolio_book() -> Command {
    let mut cmd = Command::cargo_bin("portfolio-book").unwrap();
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_no_subcommand_shows_guidance() {
    portfolio_book()
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio-book browse"))
        .stdout(predicate::str::contains("Keys:"));
}

#[test]
fn test_pages_lists_catalog() {
    portfolio_book()
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Profile"))
        .stdout(predicate::str::contains("7. Contact"));
}

#[test]
fn test_walk_finishes_on_last_page_after_end() {
    portfolio_book()
        .args(["walk", "--keys", "right,right,end,right"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Finished on page 7: Contact"))
        .stdout(predicate::str::contains("dropped: at edge of book"));
}

#[test]
fn test_walk_rejects_unknown_key() {
    portfolio_book()
        .args(["walk", "--keys", "right,sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key 'sideways'"));
}

#[test]
fn test_browse_reads_keys_from_stdin() {
    portfolio_book()
        .arg("browse")
        .write_stdin("right\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Closed on page 2: Experience"));
}
