use clap::Parser;
use std::path::PathBuf;

use projtrack::{Ledger, Seed, logging, shell::Shell};

#[derive(Parser)]
#[command(name = "projtrack")]
#[command(about = "Track projects, their payments, and total earnings")]
struct Cli {
    /// JSON file with initial projects and payments
    #[arg(long, value_name = "FILE", conflicts_with = "empty")]
    seed: Option<PathBuf>,

    /// Start with no projects instead of the sample data
    #[arg(long)]
    empty: bool,

    /// Read commands from stdin instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn load_ledger(args: &Cli) -> anyhow::Result<Ledger> {
    let seed = match &args.seed {
        Some(path) => Seed::load(path)?,
        None if args.empty => Seed::default(),
        None => Seed::demo(),
    };
    Ok(seed.into_ledger()?)
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose);

    let ledger = load_ledger(&args)?;
    tracing::info!(
        projects = ledger.projects().len(),
        payments = ledger.payments().len(),
        total = %ledger.total_earnings(),
        "ledger ready"
    );

    #[cfg(feature = "gui")]
    if !args.headless {
        projtrack::gui::run(ledger)?;
        return Ok(());
    }
    #[cfg(not(feature = "gui"))]
    if !args.headless {
        tracing::debug!("built without the gui feature, reading commands from stdin");
    }

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    Shell::new(ledger).run(stdin.lock(), &mut stdout)
}
