//! `gita`: resolve citations and fuzzy-search verse corpora from the
//! command line.
//!
//! Every command prints one JSON object on stdout, `{"content": ...}` on
//! success or `{"error": "..."}` on failure. Logs go to stderr and are
//! filtered with `RUST_LOG` (default `gita=warn`).
//!
//! Usage:
//!   gita --library library.toml reference gita 2.47
//!   gita fuzzy gita "you have a right to action" --author-id 16 --limit 5

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use gita_core::Library;
use gita_core::types::AuthorId;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "gita")]
#[command(about = "Citation lookup and fuzzy search over verse corpora")]
struct Args {
    /// Library configuration listing the corpora to load
    #[arg(long, env = "GITA_LIBRARY", default_value = "library.toml")]
    library: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the loaded corpora
    Corpora,

    /// List a corpus's authors
    Authors { corpus: String },

    /// Check a citation against a corpus's grammar without resolving it
    Validate { corpus: String, reference: String },

    /// Resolve a citation (e.g. "2", "2.47", "2.47-50")
    Reference {
        corpus: String,
        reference: String,

        /// Author to read; defaults to the corpus's default author
        #[arg(long)]
        author_id: Option<u32>,
    },

    /// Rank an author's verses against free text
    Fuzzy {
        corpus: String,
        query: String,

        /// Author to search; defaults to the corpus's default author
        #[arg(long)]
        author_id: Option<u32>,

        /// Minimum score kept (0-100, default 10)
        #[arg(long)]
        threshold: Option<u8>,

        /// Maximum number of results (default 15)
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "gita=warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let result = Library::open(&args.library)
        .map_err(commands::CliError::from)
        .and_then(|library| run(&library, args.command));

    let (body, code) = match result {
        Ok(content) => (serde_json::json!({ "content": content }), ExitCode::SUCCESS),
        Err(error) => {
            tracing::debug!(kind = error.kind(), %error, "command failed");
            (
                serde_json::json!({ "error": error.to_string() }),
                ExitCode::FAILURE,
            )
        }
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&body)
    } else {
        serde_json::to_string(&body)
    };
    match rendered {
        Ok(text) => println!("{text}"),
        Err(error) => {
            eprintln!("failed to render output: {error}");
            return ExitCode::FAILURE;
        }
    }

    code
}

fn run(library: &Library, command: Command) -> Result<serde_json::Value, commands::CliError> {
    match command {
        Command::Corpora => commands::corpora(library),
        Command::Authors { corpus } => commands::authors(library, &corpus),
        Command::Validate { corpus, reference } => commands::validate(library, &corpus, &reference),
        Command::Reference {
            corpus,
            reference,
            author_id,
        } => commands::reference(library, &corpus, &reference, author_id.map(AuthorId)),
        Command::Fuzzy {
            corpus,
            query,
            author_id,
            threshold,
            limit,
        } => commands::fuzzy(
            library,
            &corpus,
            &query,
            author_id.map(AuthorId),
            threshold,
            limit,
        ),
    }
}
