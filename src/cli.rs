//! CLI interface for console-companion

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};

use crate::assistant::OpenRouterGateway;
use crate::config::Config;
use crate::console::{BufferedIo, StdConsole};
use crate::security;
use crate::session;
use crate::tasks::TaskStore;

#[derive(Parser)]
#[command(name = "companion")]
#[command(about = "Personal console assistant with a persisted task list", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive session (default when no command given)
    Session,
    /// Manage the saved task list without starting a session
    Tasks {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Configure the assistant
    Config {
        /// Set OpenRouter API key
        #[arg(long)]
        set_api_key: Option<String>,
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Subcommand)]
enum TaskCommands {
    /// List saved tasks
    List,
    /// Add a task
    Add {
        /// Task text
        text: String,
    },
    /// Remove a task by its number (as shown by `tasks list`)
    Remove {
        /// 1-based task number
        index: usize,
    },
}

/// Parse arguments and dispatch
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Session) => run_session_command().await,
        Some(Commands::Tasks { command }) => run_tasks_command(command),
        Some(Commands::Config { set_api_key, show }) => run_config_command(set_api_key, show),
    }
}

async fn run_session_command() -> Result<()> {
    let config = Config::load()?;
    let store = TaskStore::open_default()?;
    let gateway = OpenRouterGateway::from_config(&config);

    if io::stdin().is_terminal() {
        let mut console = StdConsole::new()?;
        session::run_session(&mut console, &store, &gateway).await
    } else {
        // Piped input: plain line reads, no line editor
        let mut console = BufferedIo::new(io::stdin().lock(), io::stdout());
        session::run_session(&mut console, &store, &gateway).await
    }
}

fn run_tasks_command(command: TaskCommands) -> Result<()> {
    let store = TaskStore::open_default()?;
    let mut tasks = store.load();

    match command {
        TaskCommands::List => {
            if tasks.is_empty() {
                println!("No tasks saved.");
            } else {
                for (i, task) in tasks.iter().enumerate() {
                    println!("{}. {}", i + 1, task);
                }
            }
        }
        TaskCommands::Add { text } => {
            let text = text.trim().to_string();
            if text.is_empty() {
                bail!("Task text cannot be empty");
            }
            tasks.push(text);
            store.save(&tasks)?;
            println!("Added task {}.", tasks.len());
        }
        TaskCommands::Remove { index } => {
            if index == 0 || index > tasks.len() {
                bail!("No task number {} (the list has {} tasks)", index, tasks.len());
            }
            let removed = tasks.remove(index - 1);
            store.save(&tasks)?;
            println!("Removed: {}", removed);
        }
    }

    Ok(())
}

fn run_config_command(set_api_key: Option<String>, show: bool) -> Result<()> {
    if let Some(key) = set_api_key {
        security::set_api_key(&key)?;
        println!("API key stored securely.");
        if !show {
            return Ok(());
        }
    }

    // Showing the configuration is the default action
    let config = Config::load()?;
    println!("Model:    {}", config.model);
    println!("API base: {}", config.api_base);
    println!(
        "API key:  {}",
        if security::has_api_key() { "configured" } else { "not configured" }
    );
    println!("Tasks:    {}", TaskStore::open_default()?.path().display());

    Ok(())
}
