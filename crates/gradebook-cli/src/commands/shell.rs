//! The `gradebook shell` command.

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::config::load_config_from;
use gradebook_core::RegistryError;

use crate::commands::load_registry;
use crate::session::{Command, Flow, Session};

pub fn execute(roster: Option<PathBuf>, demo: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let registry = load_registry(roster.as_deref(), demo)?;
    let session = Session::new(registry, config);

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    let stdout = std::io::stdout();
    run(session, stdin.lock(), &mut stdout.lock(), interactive)
}

/// Read commands line by line until `quit` or end of input.
///
/// A failed command is reported and the loop carries on; the registry is
/// unchanged by it.
pub fn run(
    mut session: Session,
    input: impl BufRead,
    out: &mut impl Write,
    interactive: bool,
) -> Result<()> {
    writeln!(
        out,
        "gradebook shell: {} students loaded. Type `help` for commands.",
        session.registry().len()
    )?;

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let result = line
            .parse::<Command>()
            .and_then(|command| session.execute(command, &mut *out));
        match result {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                tracing::debug!(line = %line, "command failed: {e:#}");
                writeln!(out, "Error: {e:#}")?;
                let stale = e
                    .downcast_ref::<RegistryError>()
                    .is_some_and(|e| !e.is_input_error());
                if stale {
                    writeln!(out, "Run `list` to see current ids.")?;
                }
            }
        }
    }

    Ok(())
}
