use clap::{Args, Parser, Subcommand};

pub const DEFAULT_DB: &str = "./data/labreport.db";

#[derive(Parser)]
#[command(name = "labreport", version, about = "Lab report cover page builder with live preview")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the editor web server
    Serve(ServeArgs),
    /// Print the stored record to stdout
    Show(ShowArgs),
    /// Set a single record field and persist the result
    Set(SetArgs),
    /// Drop the stored record, returning to the built-in sample
    Reset(ResetArgs),
    /// Write the printable cover page to an HTML file
    Render(RenderArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Listen address
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// SQLite database path
    #[arg(long, default_value = DEFAULT_DB)]
    pub db: String,
}

#[derive(Args, Clone)]
pub struct ShowArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// SQLite database path
    #[arg(long, default_value = DEFAULT_DB)]
    pub db: String,
}

#[derive(Args, Clone)]
pub struct SetArgs {
    /// Field key (e.g. university, labTitle, courseCode)
    pub field: String,

    /// New value
    pub value: String,

    /// SQLite database path
    #[arg(long, default_value = DEFAULT_DB)]
    pub db: String,
}

#[derive(Args, Clone)]
pub struct ResetArgs {
    /// SQLite database path
    #[arg(long, default_value = DEFAULT_DB)]
    pub db: String,
}

#[derive(Args, Clone)]
pub struct RenderArgs {
    /// Output file
    #[arg(short, long, default_value = "cover.html")]
    pub output: String,

    /// SQLite database path
    #[arg(long, default_value = DEFAULT_DB)]
    pub db: String,
}
