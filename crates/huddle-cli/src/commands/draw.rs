use colored::Colorize;

use huddle_draw::{DrawConfig, DrawEngine};

use crate::RosterSource;

pub fn run(source: &RosterSource, config: &DrawConfig, count: usize, spin: usize) -> Result<(), String> {
    let roster = super::load_roster(source)?;
    if roster.is_empty() {
        return Err("roster is empty: add participants before drawing".into());
    }

    let size = roster.len();
    let mut engine = DrawEngine::new(roster, config);

    println!("  {} Lucky Draw", "Starting".bold());
    println!(
        "  {size} participants | repeat winners {}\n",
        if engine.allow_duplicates() {
            "allowed"
        } else {
            "not allowed"
        }
    );

    for _ in 0..count {
        if spin > 0 {
            let flicker: Vec<String> = (0..spin)
                .filter_map(|_| engine.sample_for_display().map(|p| p.name.clone()))
                .collect();
            if !flicker.is_empty() {
                println!("  {}", flicker.join(" … ").dimmed());
            }
        }

        if let Err(e) = engine.draw() {
            println!();
            print!("{}", engine.history().export_text());
            return Err(e.to_string());
        }
        if let Some(record) = engine.history().latest() {
            println!(
                "  NO. {}  {}",
                record.drawn_at,
                record.participant.name.bold().green()
            );
        }
    }

    println!();
    print!("{}", engine.history().export_text());
    println!("  {} still eligible", engine.remaining());

    Ok(())
}
