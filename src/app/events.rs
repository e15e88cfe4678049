use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use rand::Rng;
use tokio::{
    sync::mpsc::Sender,
    time::{interval, sleep},
};

use crate::domain::snapshot::WeatherSnapshot;

pub const CLOCK_TICK_SECS: u64 = 60;
const MIN_REFRESH_SECS: u64 = 10;

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickRefresh,
    TickClock,
    Input(Event),
    FetchStarted,
    FetchSucceeded(Box<WeatherSnapshot>),
    FetchFailed(String),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Re-derives `now` once a minute so the chart and list windows slide.
pub fn start_clock_task(tx: Sender<AppEvent>) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(CLOCK_TICK_SECS));
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickClock).await.is_err() {
                break;
            }
        }
    });
}

pub fn start_refresh_task(tx: Sender<AppEvent>, refresh_secs: u64) {
    tokio::spawn(async move {
        let base = refresh_secs.max(MIN_REFRESH_SECS);
        loop {
            sleep(Duration::from_secs_f64(jittered_delay(base))).await;
            if tx.send(AppEvent::TickRefresh).await.is_err() {
                break;
            }
        }
    });
}

/// `base` seconds spread by up to ten percent either way.
fn jittered_delay(base: u64) -> f64 {
    let jitter = rand::rng().random_range(-0.1_f64..0.1_f64);
    #[allow(clippy::cast_precision_loss)]
    let base = base as f64;
    (base * (1.0 + jitter)).max(1.0)
}
