use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use std::path::PathBuf;
use todostore::{FileBlobStore, FilterMode, TodoStore};

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "TodoStore CLI - to-do list with local key-value persistence")]
#[command(version)]
struct Cli {
    /// Path to the store directory (default: current directory)
    #[arg(short, long, default_value = ".")]
    store_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task text (whitespace-only input is ignored)
        text: String,
    },

    /// List tasks
    List {
        /// Restrict the view to all, active, or completed tasks
        #[arg(short, long, value_enum, default_value_t = FilterMode::All)]
        filter: FilterMode,
    },

    /// Toggle a task's completed flag
    Toggle { id: u64 },

    /// Remove a task
    Remove { id: u64 },

    /// Print the number of active tasks
    Count,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    // Open store
    let blob = FileBlobStore::open(&cli.store_path)?;
    let mut store = TodoStore::load(blob)?;

    match cli.command {
        Commands::Add { text } => match store.add_task(&text)? {
            Some(id) => println!("Added task {}", id),
            None => println!("{}", "Nothing to add (empty text)".yellow()),
        },
        Commands::List { filter } => {
            store.set_filter(filter);
            for task in store.filtered_tasks() {
                let marker = if task.completed {
                    "[x]".green()
                } else {
                    "[ ]".normal()
                };
                let text = if task.completed {
                    task.text.as_str().dimmed()
                } else {
                    task.text.as_str().normal()
                };
                println!("{:>4}  {} {}", task.id, marker, text);
            }
            println!("{} active", store.active_count());
        }
        Commands::Toggle { id } => {
            store.toggle_task(id)?;
        }
        Commands::Remove { id } => {
            store.remove_task(id)?;
        }
        Commands::Count => {
            println!("{}", store.active_count());
        }
    }

    Ok(())
}
