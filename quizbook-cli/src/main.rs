//! Quizbook CLI - Command-line interface for editing book question sets

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the library directory
const LIBRARY_ENV: &str = "QUIZBOOK_LIBRARY_PATH";

/// Library directory used when neither flag nor environment sets one
const DEFAULT_LIBRARY: &str = "./quizbook_data";

/// Parse and validate a book id (must not be negative)
fn parse_id(s: &str) -> Result<i64, String> {
    let n: i64 = s.parse().map_err(|_| format!("'{}' is not a valid id", s))?;
    if n < 0 {
        Err("id must not be negative".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "quizbook")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new book file
    New {
        /// Book id
        #[arg(long, value_parser = parse_id)]
        id: i64,

        /// Book title
        #[arg(long)]
        title: String,

        /// Book description
        #[arg(long)]
        description: Option<String>,

        /// Cover image URL
        #[arg(long)]
        image_url: Option<String>,

        /// Number of chapters
        #[arg(long)]
        chapters: Option<String>,

        /// Output file path
        #[arg(short, long)]
        output: String,
    },

    /// Display a book and one of its chapters
    Show {
        /// Input file path
        input: String,

        /// Chapter number to display
        #[arg(short, long, default_value = "1")]
        chapter: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply an edit script to a book
    Edit {
        /// Input file path
        input: String,

        /// Edit script (JSON Lines, or - for stdin)
        #[arg(short, long)]
        script: String,

        /// Output file path (defaults to the input file)
        #[arg(short, long)]
        output: Option<String>,

        /// Also store the saved book in the library
        #[arg(long)]
        save_to_library: bool,

        /// Library directory
        #[arg(long)]
        library: Option<PathBuf>,
    },

    /// Check a book for content problems
    Validate {
        /// Input file path
        input: String,

        /// Fail when any problem is found
        #[arg(long)]
        strict: bool,
    },

    /// List books stored in the library
    List {
        /// Library directory
        #[arg(long)]
        library: Option<PathBuf>,
    },
}

/// Resolve the library directory from flag, environment, then default
fn library_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(LIBRARY_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "quizbook_cli=debug,quizbook_core=debug"
    } else {
        "quizbook_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::New {
            id,
            title,
            description,
            image_url,
            chapters,
            output,
        } => commands::new_book(
            id,
            &title,
            description.as_deref(),
            image_url.as_deref(),
            chapters.as_deref(),
            &output,
        ),

        Commands::Show {
            input,
            chapter,
            json,
        } => commands::show(&input, chapter, json),

        Commands::Edit {
            input,
            script,
            output,
            save_to_library,
            library,
        } => {
            let library = save_to_library.then(|| library_path(library));
            commands::edit(&input, &script, output.as_deref(), library.as_deref()).await
        }

        Commands::Validate { input, strict } => commands::validate(&input, strict),

        Commands::List { library } => commands::list(&library_path(library)).await,
    }
}
