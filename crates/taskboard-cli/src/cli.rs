use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "An in-memory kanban board console", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Seed the session with a sample board before starting
    #[arg(long)]
    pub sample_data: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
