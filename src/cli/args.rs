//! Clap argument types and how flags override the loaded config.

use clap::Parser;
use std::path::PathBuf;

use stmath::config::Config;
use stmath::functions::LogOptions;
use stmath::models::{NonPositivePolicy, OutputFormat};

/// Structured Text math and printing functions.
#[derive(Parser, Debug)]
#[command(
    name = "stmath",
    version = stmath::constants::VERSION,
    about = super::ABOUT,
)]
pub struct Cli {
    /// Config file to use instead of ./.stmath.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (default from config, then "text").
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Truncated base-10 logarithm of an integer (MYLOG).
    Log(LogArgs),

    /// Print a template with one integer substituted (MYPRINTF).
    Printf(PrintfArgs),

    /// Validate a template without printing it.
    Check(CheckArgs),

    /// Print version and build information.
    Version,
}

/// Arguments for the `log` subcommand.
#[derive(Parser, Debug)]
pub struct LogArgs {
    /// The operand.
    #[arg(allow_negative_numbers = true)]
    pub x: i32,

    /// What to do when the operand is zero or negative.
    #[arg(long)]
    pub policy: Option<NonPositivePolicy>,

    /// Do not print the "Calling log with" / "result :" lines.
    #[arg(long, default_value_t = false)]
    pub no_trace: bool,
}

impl LogArgs {
    /// Options for this call: flags win over the config.
    pub fn options(&self, config: &Config) -> LogOptions {
        let mut options = config.log_options();
        if let Some(policy) = self.policy {
            options.policy = policy;
        }
        if self.no_trace {
            options.trace = false;
        }
        options
    }
}

/// Arguments for the `printf` subcommand.
#[derive(Parser, Debug)]
pub struct PrintfArgs {
    /// Template with at most one %d/%i directive (max 80 bytes).
    #[arg(allow_hyphen_values = true)]
    pub template: String,

    /// Value substituted into the directive.
    #[arg(allow_negative_numbers = true)]
    pub value: i32,
}

/// Arguments for the `check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Template to validate.
    #[arg(allow_hyphen_values = true)]
    pub template: String,
}

impl Cli {
    /// The output format: flag, then config (which already folded in env).
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(config.output.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("stmath").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn log_command() {
        let cli = parse(&["log", "100"]);
        match cli.command {
            Command::Log(args) => {
                assert_eq!(args.x, 100);
                assert!(args.policy.is_none());
                assert!(!args.no_trace);
            }
            other => panic!("expected log, got {other:?}"),
        }
    }

    #[test]
    fn log_accepts_negative_operand() {
        let cli = parse(&["log", "-5", "--policy", "sentinel"]);
        match cli.command {
            Command::Log(args) => {
                assert_eq!(args.x, -5);
                assert_eq!(args.policy, Some(NonPositivePolicy::Sentinel));
            }
            other => panic!("expected log, got {other:?}"),
        }
    }

    #[test]
    fn log_rejects_non_integer() {
        assert!(Cli::try_parse_from(["stmath", "log", "ten"]).is_err());
        assert!(Cli::try_parse_from(["stmath", "log", "3000000000"]).is_err());
    }

    #[test]
    fn printf_command() {
        let cli = parse(&["printf", "Value: %d", "-42"]);
        match cli.command {
            Command::Printf(args) => {
                assert_eq!(args.template, "Value: %d");
                assert_eq!(args.value, -42);
            }
            other => panic!("expected printf, got {other:?}"),
        }
    }

    #[test]
    fn printf_template_may_start_with_dash() {
        let cli = parse(&["printf", "-%d-", "1"]);
        assert!(matches!(cli.command, Command::Printf(ref a) if a.template == "-%d-"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["check", "%d", "--format", "json", "--config", "x.toml"]);
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        config.log.policy = NonPositivePolicy::Sentinel;
        config.output.format = OutputFormat::Json;

        let cli = parse(&["--format", "text", "log", "0", "--policy", "reject", "--no-trace"]);
        assert_eq!(cli.output_format(&config), OutputFormat::Text);
        let Command::Log(args) = &cli.command else {
            panic!("expected log");
        };
        let options = args.options(&config);
        assert_eq!(options.policy, NonPositivePolicy::Reject);
        assert!(!options.trace);
    }

    #[test]
    fn config_applies_without_flags() {
        let mut config = Config::default();
        config.log.policy = NonPositivePolicy::Sentinel;
        config.output.format = OutputFormat::Json;

        let cli = parse(&["log", "0"]);
        assert_eq!(cli.output_format(&config), OutputFormat::Json);
        let Command::Log(args) = &cli.command else {
            panic!("expected log");
        };
        assert_eq!(args.options(&config).policy, NonPositivePolicy::Sentinel);
        assert!(args.options(&config).trace);
    }

    #[test]
    fn version_command() {
        assert!(matches!(parse(&["version"]).command, Command::Version));
    }
}
