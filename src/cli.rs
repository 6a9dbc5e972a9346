use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a TOML config file (every field optional).
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print today's prayer times as JSON.
    Today(TodayArgs),
    /// Scrape the whole month and write the snapshot file.
    Scrape(ScrapeArgs),
}

#[derive(Debug, Args)]
pub struct TodayArgs {
    /// Emit a CGI `Content-Type` header before the JSON body.
    #[arg(long)]
    pub cgi: bool,
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Override the configured snapshot output path.
    #[arg(long)]
    pub out: Option<String>,
}
