pub mod cards;
pub mod draw;
pub mod export;
pub mod history;
pub mod profile;
pub mod spreads;

use std::path::Path;

use colored::Colorize;

use arcana_reading::{FileStore, Reading, ReadingArchive, RevealSession};

/// Open the file store rooted at `dir`.
fn open_store(dir: &Path) -> FileStore {
    FileStore::new(dir)
}

/// Load a saved reading by id prefix.
fn find_reading(dir: &Path, id: &str) -> Result<Reading, String> {
    let archive = ReadingArchive::new(open_store(dir));
    archive
        .get(id)
        .map_err(|e| format!("cannot read saved readings: {e}"))?
        .ok_or_else(|| format!("no saved reading matches \"{id}\""))
}

/// Print the header shared by fresh and saved readings.
fn print_header(reading: &Reading) {
    let spread = reading.spread.definition();
    println!(
        "  {} {}",
        spread.name.bold(),
        format!("[{}]", reading.id).dimmed()
    );
    if let Some(querent) = &reading.querent {
        println!("  For: {}", querent.name);
    }
    if let Some(question) = &reading.question {
        println!("  Question: {}", question.italic());
    }
    println!();
}

/// Print one dealt card, face up or down.
fn print_card(reading: &Reading, index: usize, face_up: bool) {
    let Some(rc) = reading.cards.get(index) else {
        return;
    };
    let slot = format!("{:>2}. {:<16}", index + 1, rc.position.name);
    if !face_up {
        println!("  {} {}", slot, "[face down]".dimmed());
        return;
    }
    let label = if rc.reversed {
        rc.label().red().to_string()
    } else {
        rc.label().green().to_string()
    };
    println!("  {slot} {label}");
    println!("      {}", rc.interpretation.dimmed());
}

/// Print every card according to the reveal session.
fn print_cards(reading: &Reading, session: Option<&RevealSession>) {
    for index in 0..reading.cards.len() {
        let face_up = session.is_none_or(|s| s.is_revealed(index));
        print_card(reading, index, face_up);
    }
    println!();
    print_summary(reading);
}

/// Print the reversed/major tally.
fn print_summary(reading: &Reading) {
    let summary = reading.summary();
    println!(
        "  {} cards, {} reversed, {} major arcana",
        summary.total, summary.reversed, summary.majors
    );
}
