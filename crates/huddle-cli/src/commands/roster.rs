use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use crate::RosterSource;

pub fn run(source: &RosterSource, dedupe: bool) -> Result<(), String> {
    let mut roster = super::load_roster(source)?;

    if dedupe {
        let before = roster.len();
        roster = roster.dedupe();
        println!("  Removed {} repeated entries", before - roster.len());
    }

    if roster.is_empty() {
        println!("  Roster is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "ID", ""]);

    for (i, participant) in roster.iter().enumerate() {
        let mark = if roster.is_duplicate(&participant.name) {
            "repeated"
        } else {
            ""
        };
        table.add_row(vec![
            (i + 1).to_string(),
            participant.name.clone(),
            participant.id.to_string(),
            mark.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} participants", roster.len());

    let duplicates = roster.duplicate_count();
    if duplicates > 0 {
        let msg = format!(
            "{duplicates} {} more than once (use --dedupe to remove)",
            if duplicates == 1 {
                "name appears"
            } else {
                "names appear"
            }
        );
        println!("  {}", msg.yellow());
    }

    Ok(())
}
