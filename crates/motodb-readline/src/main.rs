//! `motodb`: browse, filter and compare the KYMCO line-up from the terminal,
//! with an AI advisor for open questions.

mod app;
mod command;
mod helper;
mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use motodb_core::Session;
use motodb_core::catalog::{CatalogSource, CatalogStore};
use motodb_core::secret::SecretService;
use motodb_core::view::Screen;
use motodb_infrastructure::{ConfigService, JsonCatalogSource, MotodbPaths, SecretServiceImpl};
use motodb_interaction::GeminiAssistant;

use crate::app::{App, Flow};
use crate::command::Command;
use crate::helper::CliHelper;

#[derive(Parser, Debug)]
#[command(name = "motodb", version)]
#[command(about = "Browse, compare and ask about KYMCO motorcycles", long_about = None)]
struct Cli {
    /// Catalog JSON file to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Configuration directory (default: ~/.config/motodb)
    #[arg(long, value_name = "DIR")]
    config: Option<PathBuf>,

    /// Gemini model to ask, overriding config.toml and secret.json
    #[arg(long)]
    model: Option<String>,

    /// Log filter, e.g. `debug` or `motodb_interaction=trace` (default: RUST_LOG or info)
    #[arg(long)]
    log_level: Option<String>,
}

/// Logs go to a daily file so they never interleave with the prompt.
fn init_logging(logs_dir: &Path, level: Option<&str>) -> Result<WorkerGuard> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("Invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let appender = tracing_appender::rolling::daily(logs_dir, "motodb.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();
    Ok(guard)
}

async fn bootstrap(cli: Cli, paths: &MotodbPaths) -> Result<App> {
    let config_service = ConfigService::new(paths)?;
    if let Err(e) = config_service.ensure_config_file() {
        tracing::warn!("[Startup] Could not write default config: {}", e);
    }
    let config = config_service
        .get_config()
        .with_context(|| format!("Failed to load {}", config_service.path().display()))?;

    let catalog_path = cli.catalog.or(config.catalog.path);
    let source = JsonCatalogSource::resolve(catalog_path.as_deref());
    let catalog = Arc::new(
        CatalogStore::from_source(&source)
            .with_context(|| format!("Failed to load catalog from {}", source.describe()))?,
    );

    let secrets = SecretServiceImpl::new(paths)?;
    if !secrets.secret_file_exists().await {
        if let Err(e) = paths.ensure_secret_file() {
            tracing::warn!("[Startup] Could not create secret template: {}", e);
        }
    }

    let mut assistant = GeminiAssistant::from_services(&config.assistant, &secrets, &catalog)
        .await
        .context("Failed to initialize the advisor")?;
    if let Some(model) = cli.model {
        assistant = assistant.with_model(model);
    }
    tracing::info!(
        "[Startup] Advisor model {} (api key: {})",
        assistant.model(),
        if assistant.has_api_key() { "set" } else { "missing" }
    );
    if !assistant.has_api_key() {
        println!(
            "{}",
            format!(
                "No Gemini API key in {} or GEMINI_API_KEY; the advisor is offline.",
                paths.secret_file()?.display()
            )
            .yellow()
        );
    }

    Ok(App::new(Session::new(catalog), Box::new(assistant)))
}

fn prompt(screen: Screen) -> String {
    let name = match screen {
        Screen::List => "list",
        Screen::Detail => "detail",
        Screen::Compare => "compare",
        Screen::Assistant => "advisor",
        Screen::Guide => "guide",
    };
    format!("motodb:{name}> ")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ===== Backend Initialization =====
    let paths = MotodbPaths::new(cli.config.as_deref());
    let _log_guard = init_logging(&paths.logs_dir()?, cli.log_level.as_deref())?;
    tracing::info!("[Startup] Config directory {}", paths.config_dir()?.display());

    let mut app = bootstrap(cli, &paths).await?;

    // ===== REPL Setup =====
    let product_ids = app.session().catalog().iter().map(|p| p.id.clone()).collect();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(product_ids)));

    println!("{}", "=== KYMCO Model Database ===".bright_magenta().bold());
    println!("{}", "Type 'help' for commands, or 'quit' to exit.".bright_black());
    println!("{}", app.welcome());
    println!();

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(&prompt(app.session().screen()));

        match readline {
            Ok(line) => {
                let command = match command::parse(&line, app.session().screen()) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        println!("{}", e.to_string().yellow());
                        continue;
                    }
                };
                let _ = rl.add_history_entry(line.as_str());

                if matches!(command, Command::Ask(_)) {
                    println!("{}", "advisor is thinking...".bright_black());
                }

                let mut out = Vec::new();
                let flow = app.execute(command, &mut out).await;
                for text in out {
                    println!("{text}");
                }
                if flow == Flow::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                println!();
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    tracing::info!(
        "[Session] Ended {} (started {})",
        app.session().id(),
        app.session().started_at()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_loads_catalog_from_flag() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("missing.json");
        let cli = Cli::parse_from([
            "motodb",
            "--catalog",
            catalog_path.to_str().unwrap(),
        ]);
        let paths = MotodbPaths::new(Some(dir.path()));

        // the error names the catalog file it tried to read
        let err = bootstrap(cli, &paths).await.err().unwrap();
        assert!(format!("{err:#}").contains("missing.json"));
    }

    #[tokio::test]
    async fn test_bootstrap_with_builtin_catalog_starts_on_list() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from(["motodb", "--model", "gemini-2.5-flash"]);
        let paths = MotodbPaths::new(Some(dir.path()));

        let app = bootstrap(cli, &paths).await.unwrap();
        assert_eq!(app.session().screen(), Screen::List);
        assert!(!app.session().catalog().is_empty());
        assert!(paths.config_file().unwrap().exists());
        assert!(paths.secret_file().unwrap().exists());
    }

    #[test]
    fn test_prompt_names_the_screen() {
        assert_eq!(prompt(Screen::Assistant), "motodb:advisor> ");
    }
}
