// src/runner.rs
use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::config::consts::DEFAULT_TEAMS;
use crate::config::options::Params;
use crate::file;
use crate::league::League;
use crate::progress::Progress;
use crate::report;

/// What one batch did. Blank lines count as neither applied nor failed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn status_line(&self) -> String {
        format!("Processed: {} lines applied, {} failed.", self.applied, self.failed)
    }
}

/// Feed a block of raw text through the league, line by line.
///
/// Empty/whitespace-only lines are skipped silently. A malformed line
/// counts as failed and the batch keeps going; it never aborts early.
pub fn process_text(
    league: &mut League,
    text: &str,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> RunSummary {
    let lines: Vec<&str> = text.lines().collect();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(lines.len());
    }

    let mut summary = RunSummary::default();
    for (ix, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let ok = league.process_line(line);
        if ok {
            summary.applied += 1;
        } else {
            summary.failed += 1;
            logd!("Runner: Rejected line {}: {:?}", ix + 1, line);
        }
        if let Some(p) = progress.as_deref_mut() {
            p.line_done(ix + 1, ok);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log(&summary.status_line());
        p.finish();
    }
    logf!("Runner: {}", summary.status_line());
    summary
}

/// Result of a full CLI run, for the frontend to render.
pub struct RunOutput {
    pub summary: RunSummary,
    pub table: String,
    pub exported_to: Option<PathBuf>,
}

/// Top-level runner: seed, ingest, rank, optionally export.
pub fn run(
    params: &Params,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunOutput, Box<dyn Error>> {
    let mut league = League::new();

    if params.seed_default {
        league.seed_teams(DEFAULT_TEAMS.iter().copied());
        logf!("Runner: Seeded {} default teams", DEFAULT_TEAMS.len());
    }
    if let Some(path) = &params.seed_file {
        let names = fs::read_to_string(path)?;
        league.seed_teams(names.lines().filter(|l| !l.trim().is_empty()));
        logf!("Runner: Seeded teams from {}", path.display());
    }

    let text = match &params.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = s!();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let summary = process_text(&mut league, &text, progress.as_deref_mut());

    let ranking = league.get_ranking();
    let table = report::render_table(&ranking);

    let exported_to = if params.export || params.out.is_some() {
        let user_o = params
            .out
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        let path = file::resolve_out_path(&user_o)?;
        let written = file::write_export(&path, &ranking)?;
        logf!("Runner: Exported ranking to {}", written.display());
        Some(written)
    } else {
        None
    };

    Ok(RunOutput { summary, table, exported_to })
}
