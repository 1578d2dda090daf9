use tracing::debug;

use crate::books::query::SearchQuery;
use crate::books::types::Volume;
use crate::books::{BooksClient, BooksError};
use crate::refine::oracle::MatchOracle;
use crate::refine::{FilterOptions, refine};

/// Message shown for any fetch or parse failure. The distinction between
/// the two is logged, not surfaced.
const FETCH_ERROR_MESSAGE: &str = "Error fetching book data.";

/// One text field of the search surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Author,
    Title,
    Isbn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    IncludeNonEnglish,
    IncludeOldBooks,
}

#[derive(Debug)]
pub enum Event {
    FieldChanged(Field, String),
    ToggleChanged(Toggle, bool),
    SearchSubmitted,
    SearchCompleted {
        generation: u64,
        outcome: Result<Vec<Volume>, BooksError>,
    },
}

/// The submission the UI is waiting on. `generation` orders submissions so
/// a superseded response is recognized and dropped instead of overwriting
/// a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight {
    pub generation: u64,
    pub query: String,
}

/// Whole-application state. Only `reduce` produces the next state; there is
/// no other writer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub query: SearchQuery,
    pub options: FilterOptions,
    pub books: Vec<Volume>,
    pub error: Option<String>,
    pub in_flight: Option<InFlight>,
    generation: u64,
}

impl AppState {
    pub fn loading(&self) -> bool {
        self.in_flight.is_some()
    }
}

/// Fold one event into the state.
pub fn reduce(mut state: AppState, event: Event) -> AppState {
    match event {
        Event::FieldChanged(field, value) => match field {
            Field::Author => state.query.author = value,
            Field::Title => state.query.title = value,
            Field::Isbn => state.query.isbn = value,
        },
        Event::ToggleChanged(toggle, on) => match toggle {
            Toggle::IncludeNonEnglish => state.options.include_non_english = on,
            Toggle::IncludeOldBooks => state.options.include_old_books = on,
        },
        Event::SearchSubmitted => {
            state.error = None;
            state.books.clear();
            match state.query.build() {
                Ok(query) => {
                    state.generation += 1;
                    state.in_flight = Some(InFlight {
                        generation: state.generation,
                        query,
                    });
                }
                Err(e) => {
                    // Validation failure is inline-only; no request opens.
                    state.error = Some(e.to_string());
                    state.in_flight = None;
                }
            }
        }
        Event::SearchCompleted { generation, outcome } => match &state.in_flight {
            Some(in_flight) if in_flight.generation == generation => {
                state.in_flight = None;
                match outcome {
                    Ok(books) => state.books = books,
                    Err(e) => {
                        debug!(error = %e, "search failed");
                        state.error = Some(FETCH_ERROR_MESSAGE.to_string());
                    }
                }
            }
            _ => {
                debug!(generation, "dropping stale search response");
            }
        },
    }
    state
}

/// Drive one full submission: dispatch the submit, fetch and refine, then
/// fold the completion back into the state. Returns without touching the
/// network when validation rejects the submission.
pub async fn submit(
    state: AppState,
    client: &BooksClient,
    oracle: &mut impl MatchOracle,
) -> AppState {
    let state = reduce(state, Event::SearchSubmitted);
    let Some(in_flight) = state.in_flight.clone() else {
        return state;
    };

    let outcome = match client.search_volumes(&in_flight.query).await {
        Ok(items) => Ok(refine(items, &state.query, &state.options, oracle)),
        Err(e) => Err(e),
    };

    let state = reduce(
        state,
        Event::SearchCompleted {
            generation: in_flight.generation,
            outcome,
        },
    );
    debug_assert!(!state.loading(), "completion must return the app to idle");
    state
}
