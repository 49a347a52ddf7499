use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

use clap::Parser;
use lfrt::{CompiledProgram, Engine, LfError, Program, RuntimeConfig, TraceFormat};
use owo_colors::OwoColorize;
use tracing::info;

mod logging;
mod programs;

/// Highest `--max-call-depth` the runner thread's stack is sized for.
const MAX_CALL_DEPTH_CAP: usize = 10_000;
const RUNNER_STACK_BYTES: usize = 256 * 1024 * 1024;

#[derive(Parser)]
#[command(name = "lfrt", about = "Run compiled LF programs on the lfrt runtime")]
struct Cli {
    /// Program to run, by LF name (`run-1.2`) or host name (`run451462`).
    /// Runs every bundled program when omitted.
    program: Option<String>,
    /// List the bundled programs and exit
    #[arg(long)]
    list: bool,
    /// Format of uncaught-error reports: text or json
    #[arg(long, value_name = "FORMAT")]
    trace_format: Option<TraceFormat>,
    /// Maximum nesting of tracked calls (default 256, at most 10000)
    #[arg(long, value_name = "N")]
    max_call_depth: Option<usize>,
    /// JSON runtime configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Print each program's return value after it finishes
    #[arg(long)]
    print_result: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() -> miette::Result<ExitCode> {
    logging::init_logging();
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{} {}",
            "lfrt".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return Ok(ExitCode::SUCCESS);
    }

    if cli.list {
        for program in &programs::all() {
            println!(
                "{} {}",
                program.name().bright_cyan(),
                program.host_name().bright_black()
            );
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    // Deep but bounded recursion needs more room than the main thread has.
    let runner = thread::Builder::new()
        .name("lfrt-runner".to_string())
        .stack_size(RUNNER_STACK_BYTES)
        .spawn(move || run_programs(&cli, config))
        .map_err(|err| miette::miette!("failed to start the program runner: {err}"))?;
    match runner.join() {
        Ok(result) => result,
        Err(_) => miette::bail!("the program runner panicked"),
    }
}

fn run_programs(cli: &Cli, config: RuntimeConfig) -> miette::Result<ExitCode> {
    let bundled = programs::all();
    let engine = Engine::from_config(config);
    let selected: Vec<&CompiledProgram> = match &cli.program {
        Some(name) => {
            let Some(program) = bundled
                .iter()
                .find(|p| p.name() == name.as_str() || p.host_name() == *name)
            else {
                miette::bail!("unknown program '{name}' (see --list)");
            };
            vec![program]
        }
        None => bundled.iter().collect(),
    };

    let mut failed = false;
    for program in selected {
        info!(program = program.name(), "running");
        let mut ctx = engine.new_context();
        match ctx.execute(program) {
            Ok(value) => {
                if cli.print_result {
                    println!("{value}");
                }
            }
            // Already reported on stdout by the runtime.
            Err(LfError::Runtime(_)) => {
                eprintln!(
                    "{} program '{}' stopped on an uncaught runtime error",
                    "error:".red().bold(),
                    program.name().yellow()
                );
                failed = true;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn load_config(cli: &Cli) -> Result<RuntimeConfig, LfError> {
    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::load(path)?,
        None => RuntimeConfig::default(),
    };
    config.echo_output = true;
    config.capture_output = false;
    if let Some(format) = cli.trace_format {
        config.trace_format = format;
    }
    if let Some(depth) = cli.max_call_depth {
        config.max_call_depth = depth;
    }
    if !(1..=MAX_CALL_DEPTH_CAP).contains(&config.max_call_depth) {
        return Err(LfError::Config {
            message: format!("max call depth must be between 1 and {MAX_CALL_DEPTH_CAP}"),
        });
    }
    Ok(config)
}
