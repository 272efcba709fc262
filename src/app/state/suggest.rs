use std::time::Duration;

use tokio::sync::mpsc;

use crate::{
    app::{debounce::Debouncer, events::AppEvent},
    data::client::{ClientError, WeatherClient},
    domain::weather::Suggestion,
};

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(1000);
pub const MAX_SUGGESTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Debouncing,
    Searching,
    Populated,
    Empty,
    Failed,
}

/// Drives city-search-as-you-type. Owns the free-text query, the suggestion
/// list, and the staleness rule: a search result is applied only while the
/// query that produced it is still the current one.
#[derive(Debug)]
pub struct SuggestionController {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
    pub highlighted: Option<usize>,
    pub phase: SearchPhase,
    pub error: Option<String>,
    debouncer: Debouncer,
}

impl SuggestionController {
    #[must_use]
    pub fn new(initial_query: impl Into<String>) -> Self {
        Self {
            query: initial_query.into(),
            suggestions: Vec::new(),
            highlighted: None,
            phase: SearchPhase::Idle,
            error: None,
            debouncer: Debouncer::new(SEARCH_DEBOUNCE),
        }
    }

    /// Replaces the query, as typed. Blank input clears everything; anything
    /// else re-arms the debounce timer, superseding a pending search.
    pub fn set_query(&mut self, text: String, tx: &mpsc::Sender<AppEvent>) {
        self.query = text;
        self.error = None;
        self.highlighted = None;

        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            self.debouncer.cancel();
            self.suggestions.clear();
            self.phase = SearchPhase::Idle;
            return;
        }

        self.phase = SearchPhase::Debouncing;
        let query = trimmed.to_string();
        let tx = tx.clone();
        self.debouncer.schedule(async move {
            let _ = tx.send(AppEvent::SearchDebounceElapsed { query }).await;
        });
    }

    /// The debounce timer fired: issue the search, tagged with the query
    /// that armed it.
    pub fn debounce_elapsed(
        &mut self,
        query: String,
        client: &WeatherClient,
        tx: &mpsc::Sender<AppEvent>,
    ) {
        if query != self.query.trim() {
            return;
        }

        self.phase = SearchPhase::Searching;
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = client.search(&query).await;
            let _ = tx.send(AppEvent::SearchCompleted { query, result }).await;
        });
    }

    /// Applies a completed search unless the query moved on in the meantime;
    /// stale results are dropped without a trace.
    pub fn apply_search(&mut self, query: &str, result: Result<Vec<Suggestion>, ClientError>) {
        if query != self.query.trim() {
            return;
        }

        match result {
            Ok(mut list) => {
                list.truncate(MAX_SUGGESTIONS);
                self.phase = if list.is_empty() {
                    SearchPhase::Empty
                } else {
                    SearchPhase::Populated
                };
                self.suggestions = list;
            }
            Err(err) => {
                self.suggestions.clear();
                self.phase = SearchPhase::Failed;
                self.error = Some(format!("City search failed: {err}"));
            }
        }
    }

    pub fn move_highlight(&mut self, delta: i32) {
        if self.suggestions.is_empty() {
            self.highlighted = None;
            return;
        }

        let last = self.suggestions.len() - 1;
        self.highlighted = Some(match (self.highlighted, delta >= 0) {
            (None, true) => 0,
            (None, false) => last,
            (Some(idx), true) => (idx + 1).min(last),
            (Some(idx), false) => idx.saturating_sub(1),
        });
    }

    /// Resolves an Enter press into a committed city: the highlighted
    /// suggestion when there is one, the trimmed query otherwise. A blank
    /// query yields a validation message and no commit.
    pub fn take_commit(&mut self) -> Option<String> {
        if let Some(idx) = self.highlighted
            && let Some(suggestion) = self.suggestions.get(idx)
        {
            let city = suggestion.name.clone();
            self.query = city.clone();
            self.finish_commit();
            return Some(city);
        }

        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            self.error = Some("Please enter a city name.".to_string());
            return None;
        }

        let city = trimmed.to_string();
        self.finish_commit();
        Some(city)
    }

    fn finish_commit(&mut self) {
        self.debouncer.cancel();
        self.suggestions.clear();
        self.highlighted = None;
        self.phase = SearchPhase::Idle;
        self.error = None;
    }
}
