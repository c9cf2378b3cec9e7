use crate::demo::{run_demo, run_shortlist, DemoArgs, ShortlistArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use shortlist::config::AppConfig;
use shortlist::error::AppError;
use shortlist::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Placement Shortlister",
    about = "Evaluate students against job eligibility rules and report the shortlist",
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
    /// Shortlist students from a CSV export against a rule file
    Shortlist(ShortlistArgs),
    /// Run the bundled sample dataset against the sample rules
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
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args, config).await,
        Command::Shortlist(args) => run_shortlist(args, &config.shortlist),
        Command::Demo(args) => run_demo(args, &config.shortlist),
    }
}
