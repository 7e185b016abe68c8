use oop_principles::config::{RunnerConfig, DEFAULT_CONFIG_FILE};
use oop_principles::{listing, logging, render_all, select};
use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "usage: oop-demos [--list] [--config <path>] [NAME...]";

#[derive(Debug, Default, PartialEq)]
struct Invocation {
    list: bool,
    config: Option<PathBuf>,
    names: Vec<String>,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Invocation, String> {
    let mut invocation = Invocation::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--list" => invocation.list = true,
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                invocation.config = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag '{flag}'")),
            _ => invocation.names.push(arg),
        }
    }
    Ok(invocation)
}

/// Produces everything the runner prints to stdout.
fn execute(invocation: &Invocation, default_config: &Path) -> Result<String, String> {
    // Listing never reads the config, so a broken file cannot hide the catalog.
    if invocation.list {
        return Ok(listing());
    }

    // An explicit --config must exist; the default file is optional.
    let loaded = match &invocation.config {
        Some(path) => RunnerConfig::load(path),
        None => RunnerConfig::load_or_default(default_config),
    };
    let config = loaded.map_err(|err| err.to_string())?;
    logging::init(&config.log_level);

    let requested = if invocation.names.is_empty() {
        &config.demos
    } else {
        &invocation.names
    };
    let demos = select(requested.as_slice()).map_err(|err| err.to_string())?;

    tracing::info!(count = demos.len(), "running demonstrations");
    Ok(render_all(&demos, config.color))
}

fn main() -> ExitCode {
    let invocation = match parse_args(env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match execute(&invocation, Path::new(DEFAULT_CONFIG_FILE)) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
