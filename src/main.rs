use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use income_ledger::cli::{handle_record_command, run_menu, RecordCommands};
use income_ledger::config::{paths::LedgerPaths, settings::Settings};
use income_ledger::storage::IncomeStore;

#[derive(Parser)]
#[command(
    name = "income",
    version,
    about = "Terminal income journal backed by a plain text file",
    long_about = "Keeps dated income records (source, amount, cash or digital) \
                  in a plain text file. Run without a command for the interactive menu."
)]
struct Cli {
    /// Record file to use instead of the configured one
    #[arg(short, long, global = true, env = "INCOME_LEDGER_FILE")]
    file: Option<PathBuf>,

    /// Log filter (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "INCOME_LEDGER_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Record(RecordCommands),

    /// Launch the interactive menu
    Menu,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_level);

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let data_file = paths.data_file(&settings, cli.file.as_deref());
    debug!(data_file = %data_file.display(), "Resolved record file");

    let currency = settings.currency_label.as_str();
    let mut stdout = io::stdout();

    match cli.command {
        Some(Commands::Config) => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }
            println!("Income Ledger Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Record file:      {}", data_file.display());
            println!();
            println!("Settings:");
            println!("  Currency label: {}", currency);
        }
        Some(Commands::Record(cmd)) => {
            let mut store = IncomeStore::open(data_file)?;
            handle_record_command(&mut store, currency, cmd, &mut stdout)?;
        }
        Some(Commands::Menu) | None => {
            let mut store = IncomeStore::open(data_file)?;
            run_menu(&mut store, currency, io::stdin().lock(), &mut stdout)?;
        }
    }

    Ok(())
}

fn init_logger(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
