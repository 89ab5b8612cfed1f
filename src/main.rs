use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zcalc::clipboard::copy_to_clipboard;
use zcalc::keypad::KeyError;
use zcalc::{CalculatorState, Config, DisplayFormat, Key, KeyKind, parse_keys};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Keys to press, e.g. `3 + 4 x 2 =`. Reads key lines from stdin when omitted.
    keys: Vec<String>,

    /// Print the display after every key press
    #[arg(long)]
    steps: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Copy the final display to the clipboard
    #[arg(long)]
    copy: bool,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// List the keypad keys
    Keys,
}

/// What gets printed after a line of keys.
#[derive(Serialize)]
struct Report {
    display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<Step>>,
}

#[derive(Serialize)]
struct Step {
    key: &'static str,
    display: String,
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if let Some(Command::Keys) = cli.command {
        print_legend();
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    let state = if cli.keys.is_empty() {
        run_stdin(&cli, &config.display)?
    } else {
        let (state, report) = run_line(
            CalculatorState::new(),
            &cli.keys.join(" "),
            &config.display,
            cli.steps,
        )?;
        print_report(&report, cli.json)?;
        state
    };

    if cli.copy {
        copy_to_clipboard(&config.display.format(state.display()))
            .context("failed to copy the display")?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Apply each stdin line to a running calculator, reporting after each one.
fn run_stdin(cli: &Cli, format: &DisplayFormat) -> Result<CalculatorState> {
    let mut state = CalculatorState::new();

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match run_line(state.clone(), &line, format, cli.steps) {
            Ok((next, report)) => {
                state = next;
                print_report(&report, cli.json)?;
            }
            Err(err) => tracing::error!(%err, line = %line, "skipping line"),
        }
    }

    Ok(state)
}

fn run_line(
    state: CalculatorState,
    line: &str,
    format: &DisplayFormat,
    steps: bool,
) -> Result<(CalculatorState, Report), KeyError> {
    let keys = parse_keys(line)?;

    let (state, steps) = if steps {
        let mut recorded = Vec::with_capacity(keys.len());
        let state = keys.into_iter().fold(state, |state, key| {
            let state = state.press(key);
            recorded.push(Step {
                key: key.label(),
                display: format.format(state.display()),
            });
            state
        });
        (state, Some(recorded))
    } else {
        (state.press_all(keys), None)
    };

    let report = Report {
        display: format.format(state.display()),
        steps,
    };
    Ok((state, report))
}

fn print_report(report: &Report, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string(report).context("failed to serialize result")?;
        println!("{}", text);
        return Ok(());
    }

    match &report.steps {
        Some(steps) => {
            for step in steps {
                println!("{}\t{}", step.key, step.display);
            }
        }
        None => println!("{}", report.display),
    }

    Ok(())
}

fn print_legend() {
    for kind in KeyKind::ALL {
        let labels: Vec<&str> = Key::ALL
            .iter()
            .filter(|key| key.kind() == kind)
            .map(|key| key.label())
            .collect();
        println!("{:<9}{}", kind.name(), labels.join(" "));
    }
}
