use crate::demo::{run_demo, run_recommend, run_sample, DemoArgs, RecommendArgs, SampleArgs};
use clap::{Parser, Subcommand};
use loan_advisor::config::AppConfig;
use loan_advisor::error::AppError;
use loan_advisor::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Advisor",
    about = "Run the conversational loan advisor from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a single loan need and print the recommendation
    Recommend(RecommendArgs),
    /// Speak a sample advisor greeting in a supported language
    Sample(SampleArgs),
    /// Run a scripted advisory chat covering intake, classification, and speech (default command)
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Recommend(args) => run_recommend(args),
        Command::Sample(args) => run_sample(args, &config),
        Command::Demo(args) => run_demo(args, &config),
    }
}
