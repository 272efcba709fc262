use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use crate::{
    data::client::ClientError,
    domain::weather::{ForecastPayload, Suggestion},
};

/// Everything the event loop reacts to. Completion events carry the tag of
/// the state that initiated them so stale arrivals can be discarded.
#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Input(Event),
    SearchDebounceElapsed {
        query: String,
    },
    SearchCompleted {
        query: String,
        result: Result<Vec<Suggestion>, ClientError>,
    },
    FetchCompleted {
        generation: u64,
        result: Result<ForecastPayload, ClientError>,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}
