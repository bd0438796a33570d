//! bitboot - a theatrical OS boot that ends in a bitwise logic lesson
//!
//! Prints a themed sequence of simulated boot messages, then asks for
//! an operation and one or two short binary strings, hands them to
//! `bitboot-core` and shows the per-bit result.

mod boot;
mod config;
mod logger;
mod prompt;
mod render;

use std::path::PathBuf;

use clap::Parser;
use colored::*;

use bitboot_core::evaluate;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "bitboot")]
#[command(version)]
#[command(about = "Simulated OS boot with a bitwise logic lesson", long_about = None)]
struct Cli {
    /// Delay multiplier for boot theatrics (2.0 = slower, 0.5 = faster, 0 = instant)
    #[arg(long, value_name = "MULTIPLIER", default_value_t = 1.0)]
    speed: f64,

    /// Directory for the dated session log
    #[arg(long, value_name = "DIR", default_value = "logs")]
    log_dir: PathBuf,

    /// Disable the session log file
    #[arg(long)]
    no_log: bool,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = Config {
        speed: cli.speed,
        log_dir: cli.log_dir,
        no_log: cli.no_log,
        no_color: cli.no_color,
    };

    if config.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&config) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    anyhow::ensure!(
        config.speed >= 0.0 && config.speed.is_finite(),
        "--speed must be a finite multiplier >= 0 (got {})",
        config.speed
    );

    // Guard flushes the session log when it drops at the end of run()
    let _guard = logger::init(config)?;
    tracing::info!(speed = config.speed, "session starting");

    boot::run(config);

    let Some(request) = prompt::read_request()? else {
        println!();
        println!("{}", "boot aborted at prompt.".yellow());
        tracing::warn!("session aborted at prompt");
        return Ok(());
    };

    let result = evaluate(&request.a, request.b.as_ref(), request.op)?;

    println!();
    render::show(&request, &result);
    tracing::info!(
        op = %request.op,
        a = %request.a,
        b = ?request.b.as_ref().map(ToString::to_string),
        result = %result.bits,
        decimal = result.decimal,
        "evaluation complete"
    );

    boot::shutdown(config);
    Ok(())
}
