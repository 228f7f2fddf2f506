//! CLI command implementations

use crate::config::Config;
use graphs_shell::Session;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// Read commands from `script` (or stdin) and print one reply per command.
pub fn run(config: &Config, script: Option<PathBuf>) -> anyhow::Result<()> {
    let mut session = Session::new(config.kind(), config.format());

    let input: Box<dyn BufRead> = match &script {
        Some(path) => {
            tracing::info!("Running script: {}", path.display());
            Box::new(BufReader::new(std::fs::File::open(path)?))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failures = 0usize;

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        match session.run_line(&line) {
            Ok(Some(reply)) => writeln!(out, "{reply}")?,
            Ok(None) => {}
            Err(e) => {
                failures += 1;
                tracing::warn!("line {}: {}", number + 1, e);
                writeln!(out, "error: {e}")?;
            }
        }
    }

    tracing::info!(
        "Finished with {} nodes, {} edges, {} rejected commands",
        session.graph().node_count(),
        session.graph().edge_count(),
        failures
    );
    Ok(())
}
