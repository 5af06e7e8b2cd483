use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// CRUD service for the reference data of a pen catalog.
///
/// Serves brands, colors, materials and pen types over a JSON HTTP API,
/// backed by SurrealDB or an in-process store.
#[derive(Parser)]
#[command(
    name = "pen-catalog",
    version,
    about = "JSON CRUD service for pen catalog reference data",
    after_help = "Use 'pen-catalog <command> --help' for more information about a command.",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Global options available to all subcommands.
#[derive(Args, Debug)]
pub struct GlobalOpts {
    /// Configuration file path [env: PEN_CATALOG_CONFIG]
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "PEN_CATALOG_CONFIG"
    )]
    pub config: Option<PathBuf>,

    /// Output format: human (default), json, plain
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = ["human", "json", "plain"]
    )]
    pub format: String,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output [env: NO_COLOR]
    #[arg(long = "no-color", global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Store URL: "memory", "mem://" or ws://host:port [env: PEN_CATALOG_DB_URL]
    #[arg(long = "db-url", global = true, env = "PEN_CATALOG_DB_URL")]
    pub db_url: Option<String>,

    /// SurrealDB namespace [env: PEN_CATALOG_DB_NS]
    #[arg(long = "db-ns", global = true, env = "PEN_CATALOG_DB_NS")]
    pub db_ns: Option<String>,

    /// SurrealDB database name [env: PEN_CATALOG_DB_NAME]
    #[arg(long = "db-name", global = true, env = "PEN_CATALOG_DB_NAME")]
    pub db_name: Option<String>,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// List the HTTP routes the server mounts
    Routes(RoutesArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Arguments for `pen-catalog serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host address to bind (default from config: 127.0.0.1)
    #[arg(short = 'H', long = "host")]
    pub host: Option<String>,

    /// Port to listen on (default from config: 8080)
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// URL prefix for every route (default from config: /api)
    #[arg(long = "route-prefix")]
    pub route_prefix: Option<String>,

    /// Log filter override, e.g. "debug" or "pen_catalog_api=trace"
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}

/// Arguments for `pen-catalog routes`.
#[derive(Args, Debug)]
pub struct RoutesArgs {
    /// URL prefix to list routes under (default from config: /api)
    #[arg(long = "route-prefix")]
    pub route_prefix: Option<String>,
}

/// Arguments for `pen-catalog completions`.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_parser = ["bash", "zsh", "fish", "powershell", "elvish"])]
    pub shell: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_minimal_args() {
        let cli = Cli::try_parse_from(["pen-catalog", "completions", "bash"]).unwrap();
        assert!(matches!(cli.command, Commands::Completions(_)));
    }

    #[test]
    fn parse_global_verbose() {
        let cli = Cli::try_parse_from(["pen-catalog", "-vv", "routes"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["pen-catalog", "-q", "-v", "routes"]).is_err());
    }

    #[test]
    fn parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "pen-catalog",
            "serve",
            "--host",
            "0.0.0.0",
            "-p",
            "9000",
            "--route-prefix",
            "/v1",
            "--db-url",
            "memory",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.route_prefix.as_deref(), Some("/v1"));
        assert_eq!(cli.global.db_url.as_deref(), Some("memory"));
    }

    #[test]
    fn serve_defaults_come_from_config() {
        let cli = Cli::try_parse_from(["pen-catalog", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert!(args.host.is_none());
        assert!(args.port.is_none());
        assert!(args.route_prefix.is_none());
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(Cli::try_parse_from(["pen-catalog", "--format", "xml", "routes"]).is_err());
    }

    #[test]
    fn rejects_unknown_shell() {
        assert!(Cli::try_parse_from(["pen-catalog", "completions", "tcsh"]).is_err());
    }
}
