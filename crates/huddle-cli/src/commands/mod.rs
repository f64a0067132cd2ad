pub mod draw;
pub mod group;
pub mod roster;

use std::io::{self, Read};
use std::path::Path;

use tracing::info;

use huddle_core::{LineFormat, Roster};

use crate::RosterSource;

/// Read and normalize the roster named by `source`.
///
/// Files and stdin are treated as CSV (first field per line) unless `--plain`
/// was given.
fn load_roster(source: &RosterSource) -> Result<Roster, String> {
    if source.sample {
        return Ok(Roster::sample());
    }

    let format = if source.plain {
        LineFormat::Plain
    } else {
        LineFormat::CSV
    };

    let text = match source.file.as_deref() {
        Some(path) if path == Path::new("-") => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?,
        None => return Err("no roster given: pass a FILE, '-' for stdin, or --sample".into()),
    };

    let roster = Roster::from_text(&text, format);
    info!(participants = roster.len(), "roster loaded");
    Ok(roster)
}
