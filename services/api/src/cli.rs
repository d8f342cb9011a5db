use crate::commands::{
    run_affordability, run_emi, run_search, run_stamp_duty, AffordArgs, EmiArgs, SearchArgs,
    StampDutyArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use realty_core::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Realty Marketplace",
    about = "Serve property search and loan calculators, or run them from the command line",
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
    /// Filter a listing catalog export
    Search(SearchArgs),
    /// Quote the monthly installment for a home loan
    Emi(EmiArgs),
    /// Estimate the largest loan and property a household can afford
    Afford(AffordArgs),
    /// Estimate stamp duty and registration charges
    StampDuty(StampDutyArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Search(args) => run_search(args),
        Command::Emi(args) => run_emi(args),
        Command::Afford(args) => run_affordability(args),
        Command::StampDuty(args) => run_stamp_duty(args),
    }
}
