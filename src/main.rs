//! stmath — run the Structured Text external functions from a shell.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use stmath::config::Config;
use stmath::constants;
use stmath::env::Env;
use stmath::functions;
use stmath::logging;
use stmath::models::{LogRequest, OutputFormat, PrintRequest};
use stmath::output::{CallReport, CheckReport, invoke, renderer_for};

use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;

use cli::args::{CheckArgs, Cli, Command, LogArgs, PrintfArgs};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let env = Env::real();
    logging::init(&env);

    let cwd = std::env::current_dir().ok();
    let config = Config::load(cli.config.as_deref(), cwd.as_deref(), &env)
        .context("failed to load configuration")?;
    let format = cli.output_format(&config);

    match &cli.command {
        Command::Log(args) => run_log(args, &config, format),
        Command::Printf(args) => run_printf(args, format),
        Command::Check(args) => run_check(args, format),
        Command::Version => run_version(),
    }
}

/// Print a call report: text to stderr, json to stdout.
fn report(format: OutputFormat, report: &CallReport) {
    let rendered = renderer_for(format).render_call(report);
    match format {
        OutputFormat::Text => eprint!("{rendered}"),
        OutputFormat::Json => println!("{rendered}"),
    }
}

/// Truncated base-10 logarithm.
fn run_log(args: &LogArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let options = args.options(config);
    let request = LogRequest::new(args.x);

    let (ret, captured) = invoke(format, |out| {
        functions::compute_log_to(out, &request, &options).map(i64::from)
    })
    .with_context(|| format!("log of {} failed", args.x))?;

    let mut call = CallReport::new("MYLOG", request, ret);
    if let Some(output) = captured {
        call = call.with_output(output);
    }
    report(format, &call);
    Ok(())
}

/// Formatted print of one integer.
fn run_printf(args: &PrintfArgs, format: OutputFormat) -> Result<()> {
    let request = PrintRequest::new(&args.template, args.value).context("invalid template")?;

    let (ret, captured) = invoke(format, |out| {
        functions::print_formatted_to(out, &request).map(|n| n as i64)
    })
    .context("printf failed")?;

    // Text mode leaves the cursor wherever the template did; start the
    // report on a fresh stderr line.
    if format == OutputFormat::Text && !args.template.ends_with('\n') && ret > 0 {
        eprintln!();
    }

    let mut call = CallReport::new("MYPRINTF", request, ret);
    if let Some(output) = captured {
        call = call.with_output(output);
    }
    report(format, &call);
    Ok(())
}

/// Validate a template.
fn run_check(args: &CheckArgs, format: OutputFormat) -> Result<()> {
    let check = CheckReport::for_template(&args.template);
    println!("{}", renderer_for(format).render_check(&check).trim_end());

    if !check.valid {
        bail!("template rejected");
    }
    Ok(())
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    println!(
        "{}    {} bytes (incl. terminator)",
        "buffer:".dimmed(),
        constants::TEXT_CAPACITY
    );
    Ok(())
}
