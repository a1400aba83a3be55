use clap::Parser;
use tracing_subscriber::EnvFilter;

use labreport::{cli, errors::LabReportError};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    let result = match cli.command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(args).await,
        cli::Commands::Show(args) => cli::show::handle_show(args).await,
        cli::Commands::Set(args) => cli::set::handle_set(args).await,
        cli::Commands::Reset(args) => cli::reset::handle_reset(args).await,
        cli::Commands::Render(args) => cli::render::handle_render(args).await,
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                LabReportError::UnknownField(_) => 2,
                LabReportError::Storage(_) => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
