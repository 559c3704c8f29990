use std::path::Path;

use arcana_reading::export::{export_markdown, export_text};

pub fn run(dir: &Path, id: &str, format: &str, output: Option<&Path>) -> Result<(), String> {
    let reading = super::find_reading(dir, id)?;

    let content = match format {
        "markdown" | "md" => export_markdown(&reading),
        "text" | "txt" => export_text(&reading),
        "json" => serde_json::to_string_pretty(&reading)
            .map_err(|e| format!("JSON serialization error: {e}"))?,
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: markdown, text, json"
            ));
        }
    };

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported to {}", path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}
