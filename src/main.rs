use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use contacts::audit::AuditLogger;
use contacts::cli::{format_upcoming, Shell};
use contacts::config::{ContactPaths, Settings};
use contacts::services::ContactService;
use contacts::storage::SnapshotStore;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal contact book with birthday reminders",
    long_about = "Keeps contacts with their phone numbers and birthdays. Run without \
                  a subcommand for the interactive assistant; the address book is \
                  saved when you exit."
)]
struct Cli {
    /// Address book file (defaults to data/addressbook.json in the data directory)
    #[arg(short, long, global = true, env = "CONTACTS_FILE")]
    file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive assistant (default)
    Shell,

    /// Print every contact
    #[command(alias = "all")]
    List,

    /// Print contacts with birthdays coming up
    Birthdays {
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Window length in days, defaults to the configured value
        #[arg(long)]
        days: Option<u32>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = ContactPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let snapshot_path = cli.file.clone().unwrap_or_else(|| paths.snapshot_file());
    let store = SnapshotStore::new(snapshot_path);
    let audit = settings
        .audit_enabled
        .then(|| AuditLogger::new(paths.audit_log()));

    match cli.command {
        None | Some(Commands::Shell) => {
            let mut book = store
                .load()
                .with_context(|| format!("Failed to load {}", store.path().display()))?;
            info!(contacts = book.len(), "starting shell");

            let stdin = io::stdin();
            let mut shell = Shell::new(&mut book, &store, &settings, audit.as_ref());
            shell.run(stdin.lock(), io::stdout())?;
        }
        Some(Commands::List) => {
            let book = store
                .load()
                .with_context(|| format!("Failed to load {}", store.path().display()))?;
            if book.is_empty() {
                println!("The address book is empty.");
            }
            for record in book.records() {
                println!("{}", record);
            }
        }
        Some(Commands::Birthdays { date, days }) => {
            let mut book = store
                .load()
                .with_context(|| format!("Failed to load {}", store.path().display()))?;
            let reference = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let days = days.unwrap_or(settings.upcoming_window_days);

            let service = ContactService::new(&mut book);
            println!("{}", format_upcoming(&service, reference, days));
        }
        Some(Commands::Config) => {
            println!("Contact Book Configuration");
            println!("==========================");
            println!("Base directory:   {}", paths.base_dir().display());
            let saved = if store.exists() { "" } else { " (not created yet)" };
            println!("Address book:     {}{}", store.path().display(), saved);
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Birthday window: {} days", settings.upcoming_window_days);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
    }

    Ok(())
}

/// Log to stderr so the interactive output stays clean
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
