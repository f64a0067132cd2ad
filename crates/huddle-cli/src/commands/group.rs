use std::path::{Path, PathBuf};

use chrono::Local;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use huddle_group::{Decoration, GroupingConfig, GroupingEngine, NamerClient, default_file_name};

use crate::RosterSource;

pub fn run(
    source: &RosterSource,
    config: GroupingConfig,
    output: Option<&Path>,
    name_groups: bool,
) -> Result<(), String> {
    let roster = super::load_roster(source)?;
    if roster.is_empty() {
        return Err("roster is empty: add participants before grouping".into());
    }

    let mut engine = GroupingEngine::new(config);
    println!(
        "  {} participants, {} per group, {} groups\n",
        roster.len(),
        engine.effective_group_size(&roster),
        engine.preview_count(&roster)
    );

    engine.partition(&roster);

    if name_groups {
        name(&mut engine)?;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Group", "Size", "Members"]);
    for group in engine.groups() {
        table.add_row(vec![
            group.name.clone(),
            group.len().to_string(),
            group.members.join(", "),
        ]);
    }
    println!("{table}");

    if let Some(path) = output {
        let text = engine
            .export()
            .map_err(|e| format!("cannot export groups: {e}"))?;
        std::fs::write(path, text)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("\n  Exported to {}", path.display());
    }

    Ok(())
}

/// Dated CSV file name in the current directory.
pub fn dated_output() -> PathBuf {
    PathBuf::from(default_file_name(Local::now().date_naive()))
}

fn name(engine: &mut GroupingEngine) -> Result<(), String> {
    let namer = NamerClient::from_config(&engine.config().naming);
    if !namer.is_active() {
        println!(
            "  {}\n",
            "Group naming is not configured; keeping default names.".yellow()
        );
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("cannot start async runtime: {e}"))?;

    match runtime.block_on(engine.decorate(&namer)) {
        Decoration::Renamed(n) => println!("  Named {n} groups\n"),
        Decoration::Skipped(e) => println!(
            "  {} ({e})\n",
            "Group naming unavailable; keeping default names".yellow()
        ),
    }
    Ok(())
}
