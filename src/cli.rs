// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::consts::DEFAULT_TEAMS;
use crate::config::options::Params;
use crate::progress::Progress;
use crate::runner;

/// Prints rejected lines to stderr as they happen; totals go through run().
struct CliProgress;

impl Progress for CliProgress {
    fn line_done(&mut self, line_no: usize, applied: bool) {
        if !applied {
            eprintln!("Line {line_no}: not a match result, skipped");
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.list_teams {
        let mut names: Vec<&str> = DEFAULT_TEAMS.to_vec();
        names.sort_by_key(|n| n.to_lowercase());
        for name in names {
            println!("{name}");
        }
        return Ok(());
    }

    let mut progress = CliProgress;
    let output = runner::run(&params, Some(&mut progress))?;

    print!("{}", output.table);
    println!("{}", output.summary.status_line());
    if let Some(path) = output.exported_to {
        println!("Exported ranking to {}", path.display());
    }

    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--input" => {
                let v = args.next().ok_or("Missing value for --input")?;
                params.input = Some(PathBuf::from(v));}
            "--seed" => params.seed_default = true,
            "--seed-file" => {
                let v = args.next().ok_or("Missing value for --seed-file")?;
                params.seed_file = Some(PathBuf::from(v));}
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
                params.export = true;}
            "--export" => params.export = true,
            "--list-teams" => params.list_teams = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
