//! The `gradebook validate` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::parser::{load_rosters, validate_roster};

pub fn execute(roster_path: PathBuf) -> Result<()> {
    let rosters = load_rosters(&roster_path)?;
    anyhow::ensure!(
        !rosters.is_empty(),
        "no rosters found in {}",
        roster_path.display()
    );

    let mut total_warnings = 0;

    for roster in &rosters {
        println!("Roster: {} ({} students)", roster.name, roster.students.len());

        let warnings = validate_roster(roster);
        for w in &warnings {
            let prefix = w
                .student
                .as_ref()
                .map(|name| format!("  [{name}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All rosters valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
