use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use arcana_reading::{ReadingArchive, RevealConfig, RevealController};

pub fn list(dir: &Path) -> Result<(), String> {
    let archive = ReadingArchive::new(super::open_store(dir));
    let readings = archive
        .list()
        .map_err(|e| format!("cannot read saved readings: {e}"))?;

    if readings.is_empty() {
        println!("  No saved readings.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Date", "Spread", "Question", "Reversed"]);

    for reading in &readings {
        let summary = reading.summary();
        table.add_row(vec![
            reading.id.to_string(),
            reading.created_at.format("%Y-%m-%d %H:%M").to_string(),
            reading.spread.to_string(),
            reading.question.clone().unwrap_or_default(),
            format!("{}/{}", summary.reversed, summary.total),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} saved readings", readings.len());

    Ok(())
}

pub fn show(dir: &Path, id: &str) -> Result<(), String> {
    let reading = super::find_reading(dir, id)?;

    // Saved readings open fully revealed.
    let mut controller = RevealController::new(RevealConfig::default());
    controller.restore(&reading);

    super::print_header(&reading);
    super::print_cards(&reading, controller.session());
    Ok(())
}

pub fn delete(dir: &Path, id: &str) -> Result<(), String> {
    let mut archive = ReadingArchive::new(super::open_store(dir));
    let removed = archive
        .remove(id)
        .map_err(|e| format!("could not delete reading: {e}"))?;
    if !removed {
        return Err(format!("no saved reading matches \"{id}\""));
    }
    println!("  {} reading {id}", "Deleted".bold());
    Ok(())
}
