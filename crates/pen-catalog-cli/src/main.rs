mod cli;
mod commands;
mod config;
mod error;
mod output;
mod progress;
mod telemetry;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    let output = output::OutputContext::from_global(&cli.global);

    let result = match cli.command {
        cli::Commands::Serve(args) => commands::serve::run(args, &cli.global, &output).await,
        cli::Commands::Routes(args) => commands::routes::run(args, &cli.global, &output),
        cli::Commands::Completions(args) => commands::completions::run(args),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            output.print_error(&e);
            std::process::exit(e.exit_code() as i32);
        }
    }
}
