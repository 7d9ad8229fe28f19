//! toolglue - front end for the shared command-line helpers
//!
//! Exposes each helper as a subcommand so shell scripts can use them and so
//! the helpers are exercised against a real process's stdin and exit codes.

mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use output::{report_error, Status};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use toolglue_core::config::Config;
use toolglue_core::error::exit_codes;
use toolglue_core::{build_info, flags, format, numeric, path, pipe, process};
use toolglue_telemetry::{TelemetryConfig, Timer};

#[derive(Parser)]
#[command(name = "toolglue")]
#[command(about = "Shared helpers for command-line tools")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to .toolglue.toml if present)
    #[arg(long, global = true, env = "TOOLGLUE_CONFIG")]
    config: Option<PathBuf>,

    /// Print errors as JSON reports
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy piped stdin to stdout
    Gulp {
        /// Give up after this many milliseconds without end-of-stream
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Refuse to read when stdin looks like a terminal or is empty.
        /// Many platforms report size 0 for pipes, so this can refuse real piped input
        #[arg(long)]
        check: bool,
    },

    /// Check a string flag argument the way front ends do
    CheckFlag {
        /// Flag name, without the dash
        name: String,

        /// Argument given to the flag (empty when absent)
        #[arg(default_value = "", allow_hyphen_values = true)]
        arg: String,

        /// The flag is required
        #[arg(short, long)]
        required: bool,
    },

    /// Print the absolute form of a path
    Abs {
        /// Path to absolutize (Cygwin /cygdrive paths supported)
        path: String,
    },

    /// Format Rust source from a file or stdin
    Fmt {
        /// Source file; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Round a number half-up
    Round {
        /// Value to round
        #[arg(allow_hyphen_values = true)]
        value: f64,

        /// Decimal places
        #[arg(short, long, default_value = "0")]
        places: i32,
    },

    /// Show what stdin looks like without reading it
    Probe,

    /// Locate a command in PATH
    Which {
        /// Command name
        command: String,
    },

    /// Print program name, build time and word size
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => std::process::exit(report_error(&e, cli.json)),
    };

    let mut telemetry = TelemetryConfig::from(&config.schema.log);
    if cli.verbose {
        telemetry = telemetry.verbose();
    }
    toolglue_telemetry::init_with_config(&telemetry)?;

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }

    let result = match cli.command {
        Commands::Gulp { timeout, check } => {
            let timeout = timeout
                .map(Duration::from_millis)
                .or_else(|| config.schema.pipe.timeout());
            run_gulp(timeout, check)
        }
        Commands::CheckFlag {
            name,
            arg,
            required,
        } => run_check_flag(&name, &arg, required),
        Commands::Abs { path } => run_abs(&path),
        Commands::Fmt { file } => run_fmt(file.as_deref(), &config, cli.verbose),
        Commands::Round { value, places } => {
            println!("{}", numeric::round(value, places));
            Ok(exit_codes::SUCCESS)
        }
        Commands::Probe => run_probe(),
        Commands::Which { command } => process::is_command_installed(&command).map(|path| {
            println!("{}", path.display());
            exit_codes::SUCCESS
        }),
        Commands::Info => {
            run_info();
            Ok(exit_codes::SUCCESS)
        }
    };

    let code = result.unwrap_or_else(|e| report_error(&e, cli.json));
    std::process::exit(code);
}

fn run_gulp(timeout: Option<Duration>, check: bool) -> toolglue_core::Result<i32> {
    if check && pipe::can_read() {
        Status::warning("No piped input on stdin");
        return Ok(exit_codes::USAGE_ERROR);
    }

    let timer = Timer::start("gulp");
    let input = pipe::read_pipe(timeout)?;
    timer.stop();

    print!("{input}");
    Ok(exit_codes::SUCCESS)
}

fn run_check_flag(name: &str, arg: &str, required: bool) -> toolglue_core::Result<i32> {
    if flags::check_string_flag(name, arg, required)? {
        println!("-{name} = {arg}");
    } else {
        println!("-{name} not given");
    }
    Ok(exit_codes::SUCCESS)
}

fn run_abs(input: &str) -> toolglue_core::Result<i32> {
    let abs = path::filepath_abs(input)?;
    println!("{}", abs.display());
    Ok(exit_codes::SUCCESS)
}

fn run_fmt(file: Option<&std::path::Path>, config: &Config, verbose: bool) -> toolglue_core::Result<i32> {
    let source = match file {
        Some(file) => std::fs::read_to_string(file)?,
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            source
        }
    };

    let formatter = format::formatter_from_config(&config.schema.format);
    let (formatted, err) = format::format_or_keep(formatter.as_ref(), &source);
    print!("{formatted}");

    match err {
        Some(err) => {
            Status::warning(&format!("Left source unformatted: {err}"));
            Ok(err.exit_code())
        }
        None => {
            if verbose {
                Status::success(&format!("Formatted with {}", formatter.name()));
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_probe() -> toolglue_core::Result<i32> {
    let probe = pipe::StdinProbe::stdin()?;
    println!("terminal: {}", probe.is_terminal);
    println!("size: {}", probe.buffered_len);
    println!("skip read: {}", probe.is_degenerate());
    Ok(exit_codes::SUCCESS)
}

fn run_info() {
    let context = toolglue_core::caller_context!();
    println!("program: {}", build_info::prog_name());
    match build_info::build_date_time() {
        Some(built) => println!("{built}"),
        None => println!("build time unknown"),
    }
    println!("word size: {} bits", numeric::word_size());
    println!("reported from: {context}");
}
