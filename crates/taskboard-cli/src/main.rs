mod cli;
mod console;
mod view;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use console::Console;
use taskboard_core::AppConfig;
use taskboard_domain::{TaskboardOperations, TaskboardService};
use view::ConsoleView;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load();
    let mut service = TaskboardService::new();
    if cli.sample_data || config.seed_sample_data {
        service.create_sample_data()?;
        tracing::info!("seeded sample data");
    }

    let view = ConsoleView::new();
    let stdin = std::io::stdin();
    let mut console = Console::new(&mut service, &view, config);
    console.run(stdin.lock())?;

    Ok(())
}
