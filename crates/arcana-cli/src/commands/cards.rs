use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use arcana_core::{CardFilter, Catalog, Category, Suit};

pub fn list(category: Option<&str>, suit: Option<&str>, search: Option<&str>) -> Result<(), String> {
    let catalog = Catalog::standard();

    let mut filter = CardFilter::new();
    if let Some(category) = category {
        filter = filter.category(Category::parse(category).map_err(|e| e.to_string())?);
    }
    if let Some(suit) = suit {
        filter = filter.suit(Suit::parse(suit).map_err(|e| e.to_string())?);
    }
    if let Some(text) = search {
        filter = filter.text(text);
    }

    let cards = catalog.filter(&filter);
    if cards.is_empty() {
        println!("  No cards found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Category", "Keywords"]);

    for card in &cards {
        let category = match card.suit {
            Some(suit) => format!("{} ({suit})", card.category),
            None => card.category.to_string(),
        };
        table.add_row(vec![
            card.id.clone(),
            card.name.clone(),
            category,
            card.keywords.join(", "),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", cards.len());

    Ok(())
}

pub fn show(id: &str) -> Result<(), String> {
    let catalog = Catalog::standard();
    let card = catalog
        .get(id)
        .ok_or_else(|| format!("card not found: \"{id}\""))?;

    println!("  {} [{}]", card.name.bold(), card.category.to_string().dimmed());
    println!();
    println!("  {}", card.description);
    println!();
    println!("  title:    {}", card.canonical_name);
    if let Some(number) = card.number {
        println!("  number:   {number}");
    }
    if let Some(suit) = card.suit {
        println!("  suit:     {suit}");
    }
    if let Some(element) = card.element {
        println!("  element:  {element}");
    }
    println!("  keywords: {}", card.keywords.join(", "));

    Ok(())
}
