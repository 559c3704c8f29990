use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use arcana_core::{SpreadDefinition, SpreadKind};

pub fn list() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Cards", "Description"]);

    for kind in SpreadKind::ALL {
        let spread = kind.definition();
        table.add_row(vec![
            spread.id().to_string(),
            spread.name.clone(),
            spread.len().to_string(),
            spread.description.clone(),
        ]);
    }

    println!("{table}");
    Ok(())
}

pub fn show(id: &str) -> Result<(), String> {
    let spread = SpreadDefinition::get(id).map_err(|e| e.to_string())?;

    println!("  {} [{}]", spread.name.bold(), spread.id().dimmed());
    println!("  {}", spread.description);
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Position", "Meaning", "Esoteric", "Place"]);

    for (i, position) in spread.positions.iter().enumerate() {
        let place = match spread.placement(&position.id) {
            Some(p) if p.rotation != 0 => format!("({}, {}) ↻{}°", p.x, p.y, p.rotation),
            Some(p) => format!("({}, {})", p.x, p.y),
            None => "—".to_string(),
        };
        table.add_row(vec![
            (i + 1).to_string(),
            position.name.clone(),
            position.meaning.clone(),
            position.esoteric.clone(),
            place,
        ]);
    }

    println!("{table}");
    Ok(())
}
