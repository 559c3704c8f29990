//! Integration tests for the arcana CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn arcana(store: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("arcana").unwrap();
    cmd.env("NO_COLOR", "1").arg("--store").arg(store.path());
    cmd
}

/// Draw and save a reading, returning its short id.
fn saved_reading(store: &TempDir, spread: &str) -> String {
    let output = arcana(store)
        .args([
            "draw",
            spread,
            "--instant",
            "--seed",
            "7",
            "--save",
            "-q",
            "What should I focus on?",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("Saved reading "))
        .map(|id| id.trim().to_string())
        .expect("draw --save should print the reading id")
}

// -- Catalog --

#[test]
fn cards_lists_full_deck() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .arg("cards")
        .assert()
        .success()
        .stdout(predicate::str::contains("the-fool"))
        .stdout(predicate::str::contains("king-of-pentacles"))
        .stdout(predicate::str::contains("78 cards"));
}

#[test]
fn cards_filter_by_category() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["cards", "--category", "major"])
        .assert()
        .success()
        .stdout(predicate::str::contains("the-world"))
        .stdout(predicate::str::contains("22 cards"))
        .stdout(predicate::str::contains("ace-of-cups").not());
}

#[test]
fn cards_filter_by_suit() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["cards", "--suit", "cups"])
        .assert()
        .success()
        .stdout(predicate::str::contains("queen-of-cups"))
        .stdout(predicate::str::contains("14 cards"))
        .stdout(predicate::str::contains("ace-of-wands").not());
}

#[test]
fn cards_search_without_match() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["cards", "--search", "zzzz-nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cards found."));
}

#[test]
fn cards_rejects_unknown_suit() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["cards", "--suit", "coins-of-doom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn card_shows_details() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["card", "the-fool"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Fool"))
        .stdout(predicate::str::contains("element:  Air"));
}

#[test]
fn card_unknown_fails() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["card", "the-jester"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("card not found"));
}

// -- Spreads --

#[test]
fn spreads_lists_all_three() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .arg("spreads")
        .assert()
        .success()
        .stdout(predicate::str::contains("three-card"))
        .stdout(predicate::str::contains("celtic-cross"))
        .stdout(predicate::str::contains("tree-of-life"));
}

#[test]
fn spread_shows_positions() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["spread", "tree-of-life"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kether"))
        .stdout(predicate::str::contains("Malkuth"));
}

#[test]
fn spread_unknown_fails() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["spread", "horseshoe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid spread"));
}

// -- Draw --

#[test]
fn draw_three_card_instant() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["draw", "three-card", "--instant", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Past"))
        .stdout(predicate::str::contains("Present"))
        .stdout(predicate::str::contains("Future"))
        .stdout(predicate::str::contains("3 cards,"))
        .stdout(predicate::str::contains("face down").not());
}

#[test]
fn draw_is_reproducible_with_seed() {
    let store = TempDir::new().unwrap();
    let run = || {
        let output = arcana(&store)
            .args(["draw", "celtic-cross", "--instant", "--seed", "42"])
            .output()
            .unwrap();
        assert!(output.status.success());
        // The header carries the reading id, which is fresh per draw.
        String::from_utf8(output.stdout)
            .unwrap()
            .lines()
            .skip(1)
            .collect::<Vec<_>>()
            .join("\n")
    };
    assert_eq!(run(), run());
}

#[test]
fn draw_without_auto_reveal_turns_all_cards() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["draw", "three-card", "--instant", "--no-auto-reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Turning them all"))
        .stdout(predicate::str::contains("Future"));
}

#[test]
fn draw_with_short_timers() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args([
            "draw",
            "three-card",
            "--shuffle-ms",
            "5",
            "--pre-reveal-ms",
            "5",
            "--interval-ms",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shuffling the deck"))
        .stdout(predicate::str::contains("Dealing 3 cards"));
}

#[test]
fn draw_unknown_spread_fails() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["draw", "horseshoe", "--instant"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid spread"));
}

#[test]
fn draw_without_save_leaves_history_empty() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["draw", "--instant"])
        .assert()
        .success();
    arcana(&store)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved readings."));
}

#[test]
fn seeded_draws_save_separately() {
    let store = TempDir::new().unwrap();
    let first = saved_reading(&store, "three-card");
    let second = saved_reading(&store, "three-card");
    assert_ne!(first, second);
    arcana(&store)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains(first.as_str()))
        .stdout(predicate::str::contains(second.as_str()))
        .stdout(predicate::str::contains("2 saved readings"));
}

// -- History --

#[test]
fn saved_reading_appears_in_history() {
    let store = TempDir::new().unwrap();
    let id = saved_reading(&store, "three-card");
    arcana(&store)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()))
        .stdout(predicate::str::contains("What should I focus on?"))
        .stdout(predicate::str::contains("1 saved readings"));
}

#[test]
fn show_saved_reading_fully_revealed() {
    let store = TempDir::new().unwrap();
    let id = saved_reading(&store, "celtic-cross");
    arcana(&store)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Celtic Cross"))
        .stdout(predicate::str::contains("Outcome"))
        .stdout(predicate::str::contains("10 cards,"))
        .stdout(predicate::str::contains("face down").not());
}

#[test]
fn show_unknown_reading_fails() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["show", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no saved reading matches"));
}

#[test]
fn delete_removes_reading() {
    let store = TempDir::new().unwrap();
    let id = saved_reading(&store, "three-card");
    arcana(&store)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
    arcana(&store)
        .args(["show", &id])
        .assert()
        .failure();
    arcana(&store)
        .args(["delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no saved reading matches"));
}

// -- Export --

#[test]
fn export_markdown_to_stdout() {
    let store = TempDir::new().unwrap();
    let id = saved_reading(&store, "three-card");
    arcana(&store)
        .args(["export", &id, "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Three Card Reading"))
        .stdout(predicate::str::contains("> What should I focus on?"))
        .stdout(predicate::str::contains("## 1. Past"));
}

#[test]
fn export_text_to_stdout() {
    let store = TempDir::new().unwrap();
    let id = saved_reading(&store, "three-card");
    arcana(&store)
        .args(["export", &id, "txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Three Card Reading"))
        .stdout(predicate::str::contains("Question: What should I focus on?"));
}

#[test]
fn export_json_to_file() {
    let store = TempDir::new().unwrap();
    let id = saved_reading(&store, "tree-of-life");
    let out = store.path().join("reading.json");
    arcana(&store)
        .args(["export", &id, "json", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let content = fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["spread"], "tree-of-life");
    assert_eq!(value["cards"].as_array().unwrap().len(), 10);
}

#[test]
fn export_unsupported_format_fails() {
    let store = TempDir::new().unwrap();
    let id = saved_reading(&store, "three-card");
    arcana(&store)
        .args(["export", &id, "pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

// -- Profile --

#[test]
fn profile_defaults_to_unset() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn profile_set_and_show() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args([
            "profile",
            "--name",
            "Robin",
            "--birthdate",
            "1990-04-12",
            "--spread",
            "celtic-cross",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile saved."));

    arcana(&store)
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Robin"))
        .stdout(predicate::str::contains("1990-04-12"))
        .stdout(predicate::str::contains("celtic-cross"));
}

#[test]
fn profile_rejects_bad_birthdate() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["profile", "--birthdate", "12/04/1990"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid birthdate"));
}

#[test]
fn profile_drives_default_spread_and_querent() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["profile", "--name", "Robin", "--spread", "tree-of-life"])
        .assert()
        .success();
    arcana(&store)
        .args(["draw", "--instant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tree of Life"))
        .stdout(predicate::str::contains("For: Robin"))
        .stdout(predicate::str::contains("10 cards,"));
}

#[test]
fn profile_clear_conflicts_with_updates() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["profile", "--clear", "--name", "Robin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--clear"));
    arcana(&store)
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Robin").not());
}

#[test]
fn profile_clear() {
    let store = TempDir::new().unwrap();
    arcana(&store)
        .args(["profile", "--name", "Robin"])
        .assert()
        .success();
    arcana(&store)
        .args(["profile", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile cleared."));
    arcana(&store)
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Robin").not());
}
