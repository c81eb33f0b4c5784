//! Command-line interface for shelfmark
//! This binary sorts, compares, renders and checks Library of Congress call numbers.
//!
//! Usage:
//!   shelfmark sort [`<path>`] [--format `<format>`] [--mode `<mode>`] [--positions]
//!   shelfmark compare `<left>` `<right>`
//!   shelfmark render `<call-number>` [--mode `<mode>`]
//!   shelfmark check [`<path>`]
//!   shelfmark list-formats
//!
//! Inputs are read one call number per line from `<path>` (or stdin when the
//! path is omitted or `-`). Blank lines are skipped; nothing else is trimmed.
//!
//! Settings come from the built-in defaults, then `shelfmark.toml` in the
//! working directory (if present), then `--config`, then per-command flags.

use clap::{Arg, ArgAction, ArgMatches, Command};
use shelfmark::{
    compare, parse, render, shelf_positions, sort_shelf, CallNumber, FormatError,
    FormatRegistry, ParseError,
};
use shelfmark_config::{ConfigError, Loader, ShelfmarkConfig};
use std::cmp::Ordering;
use std::io::{self, Read};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Picked up from the working directory when it exists
const LOCAL_CONFIG: &str = "shelfmark.toml";

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("line {line}: {source} ({text})")]
    Line {
        line: usize,
        text: String,
        source: ParseError,
    },
    #[error("{text}: {source}")]
    InvalidArgument { text: String, source: ParseError },
    #[error(transparent)]
    Format(#[from] FormatError),
}

fn cli() -> Command {
    let mode = Arg::new("mode")
        .long("mode")
        .short('m')
        .help("Display mode (default from config: separated)")
        .value_parser(["separated", "compact"]);

    Command::new("shelfmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Sort and inspect Library of Congress call numbers")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("sort")
                .about("Print call numbers in shelf order")
                .arg(
                    Arg::new("path")
                        .help("File with one call number per line (stdin if omitted)")
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: text, json or yaml (default from config: text)"),
                )
                .arg(mode.clone())
                .arg(
                    Arg::new("positions")
                        .long("positions")
                        .help("Print the 1-based input positions in shelf order (e.g. 2->1->3)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("compare")
                .about("Compare two call numbers by shelf order")
                .arg(Arg::new("left").required(true).index(1))
                .arg(Arg::new("right").required(true).index(2)),
        )
        .subcommand(
            Command::new("render")
                .about("Render a call number in a display mode")
                .arg(Arg::new("call-number").required(true).index(1))
                .arg(mode),
        )
        .subcommand(
            Command::new("check")
                .about("Report malformed call numbers")
                .arg(
                    Arg::new("path")
                        .help("File with one call number per line (stdin if omitted)")
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
}

fn main() -> ExitCode {
    let matches = cli().get_matches();

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging.filter);
    debug!(?config, "loaded configuration");

    let result = match matches.subcommand() {
        Some(("sort", sort_matches)) => handle_sort_command(sort_matches, &config),
        Some(("compare", compare_matches)) => handle_compare_command(compare_matches),
        Some(("render", render_matches)) => handle_render_command(render_matches, &config),
        Some(("check", check_matches)) => handle_check_command(check_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        ExitCode::FAILURE
    })
}

/// Layer the local config, the `--config` file and per-command flags over the defaults
fn load_config(matches: &ArgMatches) -> Result<ShelfmarkConfig, ConfigError> {
    let sub_matches = matches.subcommand().map(|(_, sub)| sub);
    let lookup = |id: &str| {
        sub_matches
            .and_then(|sub| sub.try_get_one::<String>(id).ok().flatten())
            .or_else(|| matches.try_get_one::<String>(id).ok().flatten())
            .cloned()
    };

    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = lookup("config") {
        loader = loader.with_file(path);
    }
    if let Some(mode) = lookup("mode") {
        loader = loader.set_override("display.mode", mode)?;
    }
    if let Some(format) = lookup("format") {
        loader = loader.set_override("output.format", format)?;
    }
    loader.build()
}

/// Log to stderr; `RUST_LOG` wins over the configured filter
fn init_tracing(fallback: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_source(path: Option<&String>) -> Result<String, CliError> {
    match path.map(String::as_str) {
        None | Some("-") => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        }),
    }
}

/// Non-blank lines with their 1-based line numbers
fn entries(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn parse_all(source: &str) -> Result<Vec<CallNumber>, CliError> {
    entries(source)
        .map(|(line, text)| {
            parse(text).map_err(|source| CliError::Line {
                line,
                text: text.to_string(),
                source,
            })
        })
        .collect()
}

fn parse_arg(matches: &ArgMatches, id: &str) -> Result<CallNumber, CliError> {
    let text = matches
        .get_one::<String>(id)
        .expect("positional argument is required");
    parse(text).map_err(|source| CliError::InvalidArgument {
        text: text.clone(),
        source,
    })
}

/// Handle the sort command
fn handle_sort_command(
    matches: &ArgMatches,
    config: &ShelfmarkConfig,
) -> Result<ExitCode, CliError> {
    let source = read_source(matches.get_one::<String>("path"))?;
    let mut items = parse_all(&source)?;
    debug!(count = items.len(), "parsed call numbers");

    if matches.get_flag("positions") {
        let order: Vec<String> = shelf_positions(&items)
            .into_iter()
            .map(|index| (index + 1).to_string())
            .collect();
        println!("{}", order.join("->"));
        return Ok(ExitCode::SUCCESS);
    }

    sort_shelf(&mut items);
    let registry = FormatRegistry::with_defaults();
    let output = registry.serialize(&items, &config.output.format, config.display.mode)?;
    print!("{}", output);
    Ok(ExitCode::SUCCESS)
}

/// Handle the compare command
fn handle_compare_command(matches: &ArgMatches) -> Result<ExitCode, CliError> {
    let left = parse_arg(matches, "left")?;
    let right = parse_arg(matches, "right")?;

    match compare(&left, &right) {
        Ordering::Less => println!("{} < {}", left, right),
        Ordering::Greater => println!("{} > {}", left, right),
        Ordering::Equal if left == right => println!("{} = {}", left, right),
        Ordering::Equal => {
            println!("{} = {} (same shelf position, different text)", left, right)
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Handle the render command
fn handle_render_command(
    matches: &ArgMatches,
    config: &ShelfmarkConfig,
) -> Result<ExitCode, CliError> {
    let value = parse_arg(matches, "call-number")?;
    println!("{}", render(&value, config.display.mode));
    Ok(ExitCode::SUCCESS)
}

/// Handle the check command
fn handle_check_command(matches: &ArgMatches) -> Result<ExitCode, CliError> {
    let source = read_source(matches.get_one::<String>("path"))?;

    let mut valid = 0;
    let mut malformed = 0;
    for (line, text) in entries(&source) {
        match parse(text) {
            Ok(_) => valid += 1,
            Err(error) => {
                malformed += 1;
                println!("line {}: {} ({})", line, error, text);
            }
        }
    }

    if malformed > 0 {
        warn!(malformed, valid, "malformed call numbers found");
        eprintln!("{} of {} call numbers malformed", malformed, valid + malformed);
        return Ok(ExitCode::FAILURE);
    }
    println!("{} call numbers OK", valid);
    Ok(ExitCode::SUCCESS)
}

/// Handle the list-formats command
fn handle_list_formats_command() -> Result<ExitCode, CliError> {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
        println!();
    }
    Ok(ExitCode::SUCCESS)
}
