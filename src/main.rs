//! Suggest-RS: interactive suggestion shell
//!
//! Every stdin line is treated as the new content of the search box; lines
//! starting with `:` move the selection or pick the highlighted result.

use anyhow::Result;
use std::sync::Arc;
use suggest_rs::{
    config,
    state::{dec_selected_index, inc_selected_index, query_change, reset_selected_index},
    ApiClient, Dispatch, MemoryHistory, SearchSession, State, Store,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = config::load()?;

    // Initialize logging
    let default_level = if settings.general.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Suggest-RS v{}", suggest_rs::VERSION);

    let client = ApiClient::with_settings(&settings.remote)?;
    info!("API client initialized for {}", settings.remote.base_url);

    let history = Arc::new(MemoryHistory::new(settings.history.capacity));
    let session = SearchSession::new(history, Arc::new(client)).with_settings(&settings.search);
    let store = Arc::new(Store::new());

    let mut rx = store.subscribe();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            render(&state);
        }
    });

    print_usage();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim_end() {
            ":quit" | ":q" => break,
            ":next" => store.dispatch(inc_selected_index()),
            ":prev" => store.dispatch(dec_selected_index()),
            ":reset" => store.dispatch(reset_selected_index()),
            ":pick" => match store.selected() {
                Some(result) => {
                    println!("picked {} ({})", result.name, result.id);
                    session.record_selection(result);
                    store.dispatch(reset_selected_index());
                }
                None => println!("nothing selected"),
            },
            ":stats" => println!("{}", serde_json::to_string_pretty(&session.metrics())?),
            query => {
                store.dispatch(query_change(query));
                session.search(query, store.clone());
            }
        }
    }

    info!("Bye");
    Ok(())
}

/// Print the suggestion list for a state
fn render(state: &State) {
    println!("-- '{}'{}", state.query, if state.loading { " (loading)" } else { "" });
    if state.has_error() {
        println!("   error: {}", state.error);
        return;
    }
    for (i, result) in state.results.iter().enumerate() {
        let marker = if state.selected_index == Some(i) { '>' } else { ' ' };
        match &result.details {
            Some(details) => println!(" {} {} - {}", marker, result.name, details),
            None => println!(" {} {}", marker, result.name),
        }
    }
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
Suggest-RS v{}

Type a query and press enter to update suggestions.

COMMANDS:
    :next     Highlight the next suggestion
    :prev     Highlight the previous suggestion
    :reset    Clear the highlight
    :pick     Remember the highlighted suggestion
    :stats    Print session counters
    :quit     Exit

ENVIRONMENT VARIABLES:
    SUGGEST_SETTINGS_PATH  Path to suggest.yml
    SUGGEST_DEBUG          Enable debug logging (true/false)
    SUGGEST_API_URL        Base address of the search API
    SUGGEST_MAX_RESULTS    Number of suggestions shown
    SUGGEST_DEBOUNCE_MS    Quiet period before a remote lookup
    SUGGEST_DISCARD_STALE  Drop responses for superseded queries (true/false)
"#,
        suggest_rs::VERSION
    );
}
