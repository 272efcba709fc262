use tokio::sync::mpsc;

use crate::{
    app::events::AppEvent,
    data::client::{ClientError, WeatherClient},
    domain::weather::ForecastPayload,
};

pub const FORECAST_DAYS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Fetching,
    Loaded,
    Failed,
}

/// Drives forecast retrieval for the committed city. Each commit bumps a
/// generation counter; only the completion carrying the current generation
/// may touch state, so out-of-order arrivals never clobber a fresher commit.
#[derive(Debug)]
pub struct ForecastController {
    pub city: String,
    pub phase: FetchPhase,
    pub payload: Option<ForecastPayload>,
    pub selected_day: usize,
    pub error: Option<String>,
    generation: u64,
}

impl Default for ForecastController {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            city: String::new(),
            phase: FetchPhase::Idle,
            payload: None,
            selected_day: 0,
            error: None,
            generation: 0,
        }
    }

    /// Commits a city and starts its fetch. The previous payload stays on
    /// screen until the new result lands; the selected day resets to today.
    pub fn commit(&mut self, city: String, client: &WeatherClient, tx: &mpsc::Sender<AppEvent>) {
        self.city = city.clone();
        self.selected_day = 0;
        self.phase = FetchPhase::Fetching;
        self.error = None;
        self.generation += 1;

        let generation = self.generation;
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = client.forecast(&city, FORECAST_DAYS).await;
            let _ = tx.send(AppEvent::FetchCompleted { generation, result }).await;
        });
    }

    /// Applies a completed fetch unless a newer commit superseded it.
    pub fn apply_fetch(&mut self, generation: u64, result: Result<ForecastPayload, ClientError>) {
        if generation != self.generation {
            return;
        }

        match result {
            Ok(payload) => {
                self.payload = Some(payload);
                self.phase = FetchPhase::Loaded;
                self.error = None;
            }
            Err(ClientError::NotFound(_)) => {
                self.payload = None;
                self.phase = FetchPhase::Failed;
                self.error = Some("City not found. Please enter a valid city name.".to_string());
            }
            Err(_) => {
                self.payload = None;
                self.phase = FetchPhase::Failed;
                self.error = Some("An error occurred while fetching weather data.".to_string());
            }
        }
    }

    /// Day selection only reparameterizes the derived views; it never fetches.
    pub fn select_day(&mut self, index: usize) {
        if self.phase != FetchPhase::Loaded {
            return;
        }
        let Some(payload) = &self.payload else {
            return;
        };
        if index < payload.days.len() {
            self.selected_day = index;
        }
    }

    pub fn select_previous_day(&mut self) {
        let target = self.selected_day.saturating_sub(1);
        self.select_day(target);
    }

    pub fn select_next_day(&mut self) {
        self.select_day(self.selected_day + 1);
    }
}
