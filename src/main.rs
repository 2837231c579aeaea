mod telemetry;

use clap::{Args, Parser, Subcommand};
use committee_ranker::commands::{self, RankOptions};
use committee_ranker::config::DEFAULT_CONFIG_PATH;
use committee_ranker::ReportFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "committee-ranker",
    about = "Rank every candidate committee by weighted selection measures"
)]
struct Cli {
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Enumerate and rank all teams
    Rank(RankArgs),
    /// Write the built-in configuration to a TOML file
    Init(InitArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct RankArgs {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    team_size: Option<usize>,
    #[arg(long)]
    top: Option<usize>,
    #[arg(long, default_value = "text")]
    format: String,
}

#[derive(Args, Debug, Clone)]
struct InitArgs {
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    path: PathBuf,
    #[arg(long)]
    force: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    let command = cli.command.unwrap_or(Command::Rank(RankArgs {
        format: "text".to_string(),
        ..RankArgs::default()
    }));

    match command {
        Command::Rank(args) => run_rank(args),
        Command::Init(args) => run_init(args),
    }
}

fn run_rank(args: RankArgs) -> Result<(), String> {
    let format = ReportFormat::from_str(&args.format)
        .ok_or_else(|| format!("invalid report format: {}", args.format))?;
    let options = RankOptions {
        config: args.config,
        team_size: args.team_size,
        top: args.top,
        format,
    };

    let rendered = commands::rank(&options).map_err(|err| err.to_string())?;
    print!("{}", rendered);
    Ok(())
}

fn run_init(args: InitArgs) -> Result<(), String> {
    commands::init(&args.path, args.force).map_err(|err| err.to_string())?;
    println!("Wrote default committee config to {}", args.path.display());
    Ok(())
}
