use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "recovery-cli", version, about = "Recovery CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full dashboard view-model
    Dashboard(commands::SnapshotArgs),
    /// Milestone table
    Milestones {
        #[command(flatten)]
        input: commands::SnapshotArgs,
        /// Only list the next N unachieved milestones
        #[arg(long)]
        upcoming: Option<usize>,
    },
    /// Savings totals and reality check
    Savings(commands::SnapshotArgs),
    /// Goal countdown and purchasable items
    Goals(commands::SnapshotArgs),
    /// Wellness averages and missed check-ins
    Wellness(commands::SnapshotArgs),
    /// Week-over-week wellness trend
    Trend(commands::SnapshotArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RECOVERY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Dashboard(input) => commands::dashboard::run(input),
        Commands::Milestones { input, upcoming } => commands::milestones::run(input, upcoming),
        Commands::Savings(input) => commands::savings::run(input),
        Commands::Goals(input) => commands::goals::run(input),
        Commands::Wellness(input) => commands::wellness::run(input),
        Commands::Trend(input) => commands::trend::run(input),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
