//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Priosort build-queue sorter CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: priosort.toml)
    #[arg(short = 'C', long, global = true, default_value = "priosort.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented default config file
    #[command(visible_alias = "i")]
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show or update cause weights
    #[command(visible_alias = "w")]
    Weights {
        #[command(flatten)]
        args: WeightsArgs,
    },

    /// Preview dispatch order for a queue snapshot
    #[command(visible_alias = "o")]
    Order {
        #[command(flatten)]
        args: OrderArgs,
    },
}

/// Weights command arguments.
///
/// Values are taken as raw strings: non-numeric input coerces to 0 with a
/// warning instead of being rejected, and absent flags leave the current
/// value untouched. With no flags the command prints the current weights.
#[derive(clap::Args, Debug, Clone)]
pub struct WeightsArgs {
    /// Adjustment per user-initiated cause
    #[arg(short, long, value_name = "N")]
    pub user: Option<String>,

    /// Adjustment per source-control change cause
    #[arg(short, long, value_name = "N")]
    pub scm: Option<String>,

    /// Adjustment per timer cause
    #[arg(short, long, value_name = "N")]
    pub timer: Option<String>,
}

impl WeightsArgs {
    /// True when no field was given (show-only invocation).
    pub const fn is_show(&self) -> bool {
        self.user.is_none() && self.scm.is_none() && self.timer.is_none()
    }
}

/// Order command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct OrderArgs {
    /// Queue snapshot file (JSON). Use `-` to read from stdin.
    #[arg(value_name = "SNAPSHOT", value_hint = clap::ValueHint::FilePath)]
    pub snapshot: PathBuf,

    /// Output JSON instead of an aligned table
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_show_detection() {
        let show = WeightsArgs {
            user: None,
            scm: None,
            timer: None,
        };
        assert!(show.is_show());

        let update = WeightsArgs {
            user: None,
            scm: Some("5".into()),
            timer: None,
        };
        assert!(!update.is_show());
    }

    #[test]
    fn test_parse_order_command() {
        let cli = Cli::try_parse_from(["priosort", "order", "queue.json", "--json", "-p"]).unwrap();

        let Commands::Order { args } = &cli.command else {
            panic!("expected order subcommand");
        };
        assert_eq!(args.snapshot, PathBuf::from("queue.json"));
        assert!(args.json);
        assert!(args.pretty);
    }

    #[test]
    fn test_parse_weights_with_raw_values() {
        // Non-numeric values must parse at the CLI level; coercion happens later
        let cli =
            Cli::try_parse_from(["priosort", "weights", "--user", "10", "--scm", "oops"]).unwrap();

        let Commands::Weights { args } = &cli.command else {
            panic!("expected weights subcommand");
        };
        assert_eq!(args.user.as_deref(), Some("10"));
        assert_eq!(args.scm.as_deref(), Some("oops"));
        assert_eq!(args.timer, None);
    }

    #[test]
    fn test_config_flag_is_global() {
        let cli = Cli::try_parse_from(["priosort", "weights", "-C", "custom.toml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;

        // Catches argument definition conflicts, like a short flag clashing
        // with the auto-generated -V/--version
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_short_flag() {
        let cli = Cli::try_parse_from(["priosort", "weights", "-v"]).unwrap();
        assert!(cli.verbose);

        // -V stays reserved for --version
        assert!(Cli::try_parse_from(["priosort", "-V"]).is_err_and(|err| {
            err.kind() == clap::error::ErrorKind::DisplayVersion
        }));
    }
}
