mod app;
mod books;
mod refine;
mod render;

pub const USER_AGENT: &str = concat!("octavo/", env!("CARGO_PKG_VERSION"));

use std::process::ExitCode;

use clap::Parser;
use reqwest::Client;
use tracing::debug;

use app::{AppState, Event, Field, Toggle};
use books::BooksClient;
use refine::oracle::NucleoOracle;

/// Search the Google Books catalog from the command line.
///
/// Results are filtered to English-language books published 1970 or later
/// unless the corresponding --include flags widen them, and reranked by
/// fuzzy title relevance when a title is given.
#[derive(Parser, Debug)]
#[command(name = "octavo", version, about)]
struct Cli {
    /// Author to search for
    #[arg(short, long)]
    author: Option<String>,

    /// Title to search for
    #[arg(short, long)]
    title: Option<String>,

    /// ISBN-10 or ISBN-13 to search for
    #[arg(short, long)]
    isbn: Option<String>,

    /// Keep results that are not tagged as English
    #[arg(long)]
    include_non_english: bool,

    /// Keep results published before 1970
    #[arg(long)]
    include_old_books: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("octavo=warn")),
        )
        .init();

    let cli = Cli::parse();

    let client = BooksClient::from_env(Client::new());
    let mut oracle = NucleoOracle::new();

    let mut state = AppState::default();
    for (field, value) in [
        (Field::Author, cli.author),
        (Field::Title, cli.title),
        (Field::Isbn, cli.isbn),
    ] {
        if let Some(value) = value {
            state = app::reduce(state, Event::FieldChanged(field, value));
        }
    }
    state = app::reduce(
        state,
        Event::ToggleChanged(Toggle::IncludeNonEnglish, cli.include_non_english),
    );
    state = app::reduce(
        state,
        Event::ToggleChanged(Toggle::IncludeOldBooks, cli.include_old_books),
    );

    let state = app::submit(state, &client, &mut oracle).await;
    debug!(results = state.books.len(), "submission finished");

    if let Some(error) = &state.error {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }
    print!("{}", render::format_results(&state.books));
    ExitCode::SUCCESS
}
