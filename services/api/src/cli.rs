use clap::{Args, Parser, Subcommand};

use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use factorflow::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "FactorFlow Decisioning Service",
    about = "Run the invoice-financing credit decisioning service from the command line",
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
    /// Score a single loan application from the command line
    Underwrite {
        #[command(subcommand)]
        command: UnderwriteCommand,
    },
    /// Run an end-to-end demo covering scoring and the collections ladder
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum UnderwriteCommand {
    /// Evaluate one set of borrower signals and print the decision
    Score(ScoreArgs),
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
        Command::Underwrite {
            command: UnderwriteCommand::Score(args),
        } => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
