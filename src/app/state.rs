use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::{
    app::events::AppEvent,
    cli::Cli,
    data::client::WeatherClient,
    domain::{
        series::{self, SeriesPoint},
        weather::{ForecastPayload, Metric, Suggestion},
    },
};

mod forecast;
mod input;
mod suggest;

pub use forecast::{FORECAST_DAYS, FetchPhase, ForecastController};
pub use suggest::{MAX_SUGGESTIONS, SEARCH_DEBOUNCE, SearchPhase, SuggestionController};

use input::is_city_char;

/// Top-level application state: the two controllers, the selected metric,
/// and the shared client. All mutation flows through [`AppState::handle_event`].
#[derive(Debug)]
pub struct AppState {
    pub running: bool,
    pub metric: Metric,
    pub suggest: SuggestionController,
    pub forecast: ForecastController,
    client: WeatherClient,
}

/// Read-only view handed to the render pass: raw controller state plus the
/// values derived from (payload, metric, selected day).
#[derive(Debug)]
pub struct ViewSnapshot<'a> {
    pub query: &'a str,
    pub suggestions: &'a [Suggestion],
    pub highlighted: Option<usize>,
    pub error: Option<&'a str>,
    pub payload: Option<&'a ForecastPayload>,
    pub fetching: bool,
    pub selected_day: usize,
    pub metric: Metric,
    pub current_value: String,
    pub series: Vec<SeriesPoint>,
    pub day_summaries: Vec<String>,
}

impl AppState {
    #[must_use]
    pub fn new(cli: &Cli) -> Self {
        let client = WeatherClient::with_base_urls(
            cli.api_key(),
            cli.forecast_endpoint(),
            cli.search_endpoint(),
        );

        Self {
            running: true,
            metric: Metric::Temperature,
            suggest: SuggestionController::new(cli.city.clone()),
            forecast: ForecastController::new(),
            client,
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => self.commit(tx),
            AppEvent::Input(input) => self.handle_input(input, tx).await?,
            AppEvent::SearchDebounceElapsed { query } => {
                self.suggest.debounce_elapsed(query, &self.client, tx);
            }
            AppEvent::SearchCompleted { query, result } => {
                self.suggest.apply_search(&query, result);
            }
            AppEvent::FetchCompleted { generation, result } => {
                self.forecast.apply_fetch(generation, result);
            }
            AppEvent::Quit => self.running = false,
        }

        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            self.handle_key_press(key, tx).await?;
        }
        Ok(())
    }

    async fn handle_key_press(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'C'))
        {
            tx.send(AppEvent::Quit).await?;
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => tx.send(AppEvent::Quit).await?,
            KeyCode::Enter => self.commit(tx),
            KeyCode::Up => self.suggest.move_highlight(-1),
            KeyCode::Down => self.suggest.move_highlight(1),
            KeyCode::Tab => self.metric = self.metric.next(),
            KeyCode::Left => self.forecast.select_previous_day(),
            KeyCode::Right => self.forecast.select_next_day(),
            KeyCode::Backspace => {
                let mut text = self.suggest.query.clone();
                text.pop();
                self.suggest.set_query(text, tx);
            }
            KeyCode::Char(ch) => self.push_query_char(key, ch, tx),
            _ => {}
        }

        Ok(())
    }

    fn push_query_char(&mut self, key: KeyEvent, ch: char, tx: &mpsc::Sender<AppEvent>) {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
            || !is_city_char(ch)
        {
            return;
        }
        let mut text = self.suggest.query.clone();
        text.push(ch);
        self.suggest.set_query(text, tx);
    }

    /// Commit intent: finalize the typed query (or the highlighted
    /// suggestion) into the city the forecast is fetched for.
    pub fn commit(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if let Some(city) = self.suggest.take_commit() {
            self.forecast.commit(city, &self.client, tx);
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot<'_> {
        let payload = self.forecast.payload.as_ref();
        let selected_day = self.forecast.selected_day;

        ViewSnapshot {
            query: &self.suggest.query,
            suggestions: &self.suggest.suggestions,
            highlighted: self.suggest.highlighted,
            error: self
                .suggest
                .error
                .as_deref()
                .or(self.forecast.error.as_deref()),
            payload,
            fetching: self.forecast.phase == FetchPhase::Fetching,
            selected_day,
            metric: self.metric,
            current_value: series::current_value(payload, self.metric, selected_day),
            series: payload
                .map(|p| series::hourly_series(p, self.metric, selected_day))
                .unwrap_or_default(),
            day_summaries: payload
                .map(|p| {
                    p.days
                        .iter()
                        .map(|day| series::day_summary(day, self.metric))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}
