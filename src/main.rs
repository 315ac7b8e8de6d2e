use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use slate::commands::{ask, chat, entry, reset, transfer};
use slate::completions::{generate_completions, Shell};

#[derive(Parser)]
#[command(name = "slate")]
#[command(about = "Student-trained Q&A chatbot CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the bot a single question
    Ask {
        /// Question text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Chat with the bot interactively
    Chat,

    /// Add a question/answer entry
    Add {
        /// The question this entry answers
        question: String,

        /// The answer, returned verbatim
        answer: String,

        /// Category label (defaults to "General")
        #[arg(short, long)]
        category: Option<String>,

        /// Comma-separated tags that boost matching
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Overwrite an existing entry
    Edit {
        /// Id of the entry to overwrite
        id: String,

        /// Replacement question
        question: String,

        /// Replacement answer
        answer: String,

        /// Replacement category (defaults to "General")
        #[arg(short, long)]
        category: Option<String>,

        /// Replacement comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Delete an entry
    Rm {
        /// Id of the entry to delete
        id: String,
    },

    /// List entries, optionally filtered
    List {
        /// Substring search across category, question, answer, and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category filter
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List category labels in use
    Categories,

    /// Show knowledge base status
    Status,

    /// Export the knowledge base as JSON
    Export {
        /// Output file; '-' writes to stdout
        /// (default: student-chatbot-knowledgebase.json)
        path: Option<PathBuf>,
    },

    /// Replace the knowledge base from a JSON export
    Import {
        /// File to import
        path: PathBuf,
    },

    /// Delete all entries and restore the seeds
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { text } => ask::execute(text),
        Commands::Chat => chat::execute(),
        Commands::Add {
            question,
            answer,
            category,
            tags,
        } => entry::add(question, answer, category, tags),
        Commands::Edit {
            id,
            question,
            answer,
            category,
            tags,
        } => entry::edit(id, question, answer, category, tags),
        Commands::Rm { id } => entry::rm(id),
        Commands::List { search, category } => entry::list(search, category),
        Commands::Categories => entry::categories(),
        Commands::Status => entry::status(),
        Commands::Export { path } => transfer::export(path),
        Commands::Import { path } => transfer::import(path),
        Commands::Reset { yes } => reset::execute(yes),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell);
            Ok(())
        }
    }
}
