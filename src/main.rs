//! immo-tui - Main entry point
//!
//! Parses the command line, sets up logging and dispatches to the wizard,
//! draft validation or the admin commands.

use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use immotui::admin::AdminConsole;
use immotui::api::{HttpBackend, UserUpdate};
use immotui::app::{App, AppState};
use immotui::cli::{AdminCommands, Cli, Commands, ListingCommands, UserCommands};
use immotui::config::AppConfig;
use immotui::draft::ListingDraft;
use immotui::toast::{ToastLevel, ToastQueue};
use immotui::wizard::MultiStepListingForm;

const DEFAULT_LOG_FILE: &str = "immo-tui.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Log to a file; stdout belongs to the alternate screen
fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            init_file_logging(&log_path(cli.log_file))?;
            run_wizard(cli.config.as_deref(), None)
        }
        Some(Commands::Wizard { save_draft }) => {
            init_file_logging(&log_path(cli.log_file))?;
            run_wizard(cli.config.as_deref(), save_draft)
        }
        Some(Commands::ValidateDraft { path }) => {
            init_stderr_logging();
            validate_draft(&path)
        }
        Some(Commands::Admin { command }) => {
            init_stderr_logging();
            let config = AppConfig::resolve(cli.config.as_deref())?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("Failed to start async runtime")?;
            runtime.block_on(run_admin(config, command))
        }
    }
}

fn log_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

/// Run the TUI wizard
fn run_wizard(config_path: Option<&Path>, save_draft: Option<PathBuf>) -> Result<()> {
    info!("immo-tui starting up");
    let config = AppConfig::resolve(config_path)?;
    let state = AppState::new(ToastQueue::new(config.toast_ttl()), save_draft);

    debug!("Initializing terminal for TUI mode");
    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| Ok(App::new(state).run(&mut terminal)?));

    // Always restore the terminal, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    let draft = result?;
    let complete = MultiStepListingForm::first_incomplete_step(&draft).is_none();
    info!(complete, "immo-tui finished");
    Ok(())
}

fn validate_draft(path: &Path) -> Result<()> {
    info!("Validating draft: {}", path.display());
    let draft = ListingDraft::load_from_file(path)?;

    match MultiStepListingForm::first_incomplete_step(&draft) {
        None => {
            println!("Draft is complete: {}", path.display());
            Ok(())
        }
        Some(step) => {
            let mut message = format!("{} ({}) is incomplete", step, step.title());
            if let Some(missing) = draft.missing_characteristics().filter(|m| !m.is_empty()) {
                let names: Vec<_> = missing.iter().map(|f| f.label()).collect();
                message.push_str(&format!(": missing {}", names.join(", ")));
            }
            bail!(message)
        }
    }
}

async fn run_admin(config: AppConfig, command: AdminCommands) -> Result<()> {
    let backend = HttpBackend::new(&config)?;
    let mut console = AdminConsole::new(
        backend,
        ToastQueue::new(config.toast_ttl()),
        config.page_size,
    );
    info!(api = %config.api_base_url, "Admin console ready");

    let outcome = match command {
        AdminCommands::Listings { command } => match command {
            ListingCommands::Featured { category, page } => {
                console.load_featured(category).await.map(|()| {
                    console.paginator.go_to(page.saturating_sub(1));
                    print_listings(&console);
                })
            }
            ListingCommands::Count(filter_args) => {
                let filter = filter_args.to_filter()?;
                console.count_listings(&filter).await.map(|count| {
                    println!("{}", count);
                })
            }
            ListingCommands::Status { id, status } => {
                console.set_listing_status(&id, status).await
            }
            ListingCommands::Premium { id, enable, .. } => {
                console.set_listing_premium(&id, enable).await
            }
        },
        AdminCommands::Delete { kind, id, confirm } => {
            if !confirm {
                bail!("Refusing to delete {} {} without --confirm", kind, id);
            }
            console.delete(kind, &id).await
        }
        AdminCommands::Users {
            command: UserCommands::Update { id, role, status },
        } => console.update_user(&id, &UserUpdate { role, status }).await,
    };

    print_toasts(&console.toasts);
    outcome.map_err(|e| {
        error!("Admin command failed: {}", e);
        anyhow::Error::new(e)
    })
}

fn print_listings(console: &AdminConsole<HttpBackend>) {
    let page = &console.paginator;
    for listing in console.visible_listings() {
        println!(
            "{:<26} {:<10} {:<9} {:<12} {:>12}  {}{}",
            listing.id,
            listing.category,
            listing.status,
            listing.city.as_deref().unwrap_or("-"),
            listing
                .price
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            listing.title,
            if listing.premium { "  [premium]" } else { "" },
        );
    }
    println!(
        "page {}/{} ({} listings)",
        page.page() + 1,
        page.page_count(),
        page.total()
    );
    if page.has_next() {
        println!("next: --page {}", page.page() + 2);
    }
}

fn print_toasts(toasts: &ToastQueue) {
    for toast in toasts.iter() {
        match toast.level {
            ToastLevel::Error => eprintln!("error: {}", toast.message),
            ToastLevel::Success | ToastLevel::Info => println!("{}", toast.message),
        }
    }
}
