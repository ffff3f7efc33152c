use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use license_detectr::License;

/// Render a colored terminal report.
pub fn render(licenses: &[License], target: &Path, verbose: bool, quiet: bool) {
    if quiet {
        for license in licenses {
            println!("{}", license.identifier());
        }
        return;
    }

    println!(
        "\n {} v{}",
        "license-detectr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Scanning: {}\n", target.display());

    let mut table = Table::new();
    let mut header = vec![
        Cell::new("Source").add_attribute(Attribute::Bold),
        Cell::new("License").add_attribute(Attribute::Bold),
    ];
    if verbose {
        header.push(Cell::new("First line").add_attribute(Attribute::Bold));
    }
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for license in licenses {
        let source = license
            .source_path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "<text>".to_string());

        let id_color = if license.is_recognized() {
            Color::Green
        } else {
            Color::DarkGrey
        };

        let mut row = vec![
            Cell::new(source),
            Cell::new(license.identifier()).fg(id_color),
        ];
        if verbose {
            row.push(Cell::new(first_line(license.text())));
        }
        table.add_row(row);
    }

    println!("{}", table);
    println!(
        " {} {} license{} identified\n",
        "✓".green(),
        licenses.len(),
        if licenses.len() == 1 { "" } else { "s" }
    );
}

fn first_line(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_skips_blank_lines() {
        assert_eq!(first_line("\n\n   Apache License\n  Version 2.0"), "Apache License");
        assert_eq!(first_line(""), "");
        assert_eq!(first_line("  \n\t\n"), "");
    }
}
