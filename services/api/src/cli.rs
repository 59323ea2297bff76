use crate::demo::{run_demo, run_eligibility, run_render, DemoArgs, EligibilityArgs, RenderArgs};
use crate::server;
use cgm_care::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cgm-care-api",
    about = "Serve and demonstrate the CGM Care coverage site from the command line",
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
    /// Run the eligibility rule against a set of answers
    Eligibility(EligibilityArgs),
    /// Print the rendered HTML for a site path
    Render(RenderArgs),
    /// Walk a sample patient through the coverage wizard
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
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Eligibility(args) => run_eligibility(args),
        Command::Render(args) => run_render(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
