use clap::{Args, Parser, Subcommand};
use satsoil::error::AppError;

use crate::demo::{run_demo, run_search_sheet, DemoArgs, SearchArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "SATSOIL Showcase",
    about = "Serve and demonstrate the SATSOIL farmland investment showcase",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print a generated farm search result sheet
    Search(SearchArgs),
    /// Run a scripted session walk-through on the terminal
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Pin the mock search generator for reproducible sessions
    #[arg(long)]
    pub(crate) search_seed: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Search(args) => run_search_sheet(args),
        Command::Demo(args) => run_demo(args),
    }
}
