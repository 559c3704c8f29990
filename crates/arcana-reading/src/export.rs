//! Printable renderings of a reading.

use crate::reading::Reading;

/// Render a reading as markdown.
pub fn export_markdown(reading: &Reading) -> String {
    let spread = reading.spread.definition();
    let mut out = format!("# {} Reading\n\n", spread.name);

    out.push_str(&format!(
        "*{}* · `{}`\n\n",
        reading.created_at.format("%Y-%m-%d %H:%M UTC"),
        reading.id
    ));
    if let Some(querent) = &reading.querent {
        out.push_str(&format!("**For**: {}", querent.name));
        if let Some(born) = querent.birthdate {
            out.push_str(&format!(" (born {born})"));
        }
        out.push_str("\n\n");
    }
    if let Some(question) = &reading.question {
        out.push_str(&format!("> {question}\n\n"));
    }

    for (i, rc) in reading.cards.iter().enumerate() {
        out.push_str(&format!(
            "## {}. {} — {}\n\n",
            i + 1,
            rc.position.name,
            rc.label()
        ));
        out.push_str(&format!("*{}*\n\n", rc.position.meaning));
        out.push_str(&format!("{}\n\n", rc.interpretation));
        if !rc.card.keywords.is_empty() {
            out.push_str(&format!("Keywords: {}\n\n", rc.card.keywords.join(", ")));
        }
    }

    let summary = reading.summary();
    out.push_str(&format!(
        "---\n\n{} cards, {} reversed, {} major arcana.\n",
        summary.total, summary.reversed, summary.majors
    ));
    out
}

/// Render a reading as plain text.
pub fn export_text(reading: &Reading) -> String {
    let spread = reading.spread.definition();
    let mut out = format!("{} Reading [{}]\n", spread.name, reading.id);
    out.push_str(&format!(
        "{}\n",
        reading.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    if let Some(querent) = &reading.querent {
        out.push_str(&format!("For: {}\n", querent.name));
    }
    if let Some(question) = &reading.question {
        out.push_str(&format!("Question: {question}\n"));
    }
    out.push('\n');

    for rc in &reading.cards {
        out.push_str(&format!("{:<16} {}\n", rc.position.name, rc.label()));
        out.push_str(&format!("                 {}\n", rc.interpretation));
    }
    out
}
