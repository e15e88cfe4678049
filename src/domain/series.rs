//! Derives chart series, list points and axis metrics from a forecast snapshot.
//!
//! Every function here is pure: the same snapshot, kind and `now` always
//! produce the same output, and missing or out-of-window data degrades to an
//! empty result or a skipped point rather than an error.

use serde::Serialize;

use super::snapshot::{SeriesKind, WeatherSnapshot};

pub const HOURLY_CHART_POINTS: usize = 24;
/// Five days at hourly resolution, assuming 24 samples per day.
pub const DAILY_CHART_POINTS: usize = 120;
pub const HOURLY_LIST_POINTS: usize = 8;
pub const HOURLY_LIST_STRIDE: usize = 3;
pub const DAILY_LIST_POINTS: usize = 5;
pub const HOURLY_TICK_STEP: usize = 6;

const PADDING_RATIO: f64 = 0.2;
const FLAT_SERIES_PADDING: f64 = 5.0;
const SECONDS_PER_HOUR: i64 = 3600;
const RAIN_AXIS_MAX: f64 = 105.0;
const WIND_AXIS_HEADROOM: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSeriesPoint {
    pub time: i64,
    pub temperature: Option<f64>,
    pub rain: Option<f64>,
    pub wind: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyListPoint {
    pub time: i64,
    pub weather_code: Option<u8>,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyListPoint {
    pub time: i64,
    pub temperature: f64,
    pub weather_code: u8,
    /// Derived from the containing day's sunrise and sunset.
    pub is_day: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ForecastListPoint {
    Daily(DailyListPoint),
    Hourly(HourlyListPoint),
}

impl ForecastListPoint {
    #[must_use]
    pub fn time(&self) -> i64 {
        match self {
            Self::Daily(point) => point.time,
            Self::Hourly(point) => point.time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemperatureMetrics {
    /// Rounded true minimum of the series.
    pub min: i64,
    /// Rounded true maximum of the series.
    pub max: i64,
    /// Padded axis range, `[floor(min - pad), ceil(max + pad)]`.
    pub domain: [i64; 2],
    pub ticks: Vec<i64>,
}

impl Default for TemperatureMetrics {
    fn default() -> Self {
        Self {
            min: 0,
            max: 0,
            domain: [0, 0],
            ticks: vec![0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastOutput {
    pub chart_series: Vec<ChartSeriesPoint>,
    pub list_points: Vec<ForecastListPoint>,
    pub temperature_metrics: TemperatureMetrics,
}

#[must_use]
pub fn build_forecast(snapshot: &WeatherSnapshot, kind: SeriesKind, now: i64) -> ForecastOutput {
    let chart_series = build_chart_series(snapshot, kind, now);
    let temperature_metrics = build_temperature_metrics(&chart_series);
    ForecastOutput {
        list_points: build_list_points(snapshot, kind, now),
        chart_series,
        temperature_metrics,
    }
}

#[must_use]
pub fn chart_points(kind: SeriesKind) -> usize {
    match kind {
        SeriesKind::Hourly => HOURLY_CHART_POINTS,
        SeriesKind::Daily => DAILY_CHART_POINTS,
    }
}

/// Hourly kind starts at the first sample at or after `now`; daily kind
/// starts at the first sample of the snapshot's first day.
#[must_use]
pub fn build_chart_series(
    snapshot: &WeatherSnapshot,
    kind: SeriesKind,
    now: i64,
) -> Vec<ChartSeriesPoint> {
    let hourly = &snapshot.hourly;
    let Some(&first_day) = snapshot.daily.time.first() else {
        return Vec::new();
    };
    if hourly.is_empty() {
        return Vec::new();
    }

    let threshold = match kind {
        SeriesKind::Hourly => now,
        SeriesKind::Daily => first_day,
    };
    let Some(start) = first_index_at_or_after(&hourly.time, threshold) else {
        return Vec::new();
    };

    hourly
        .time
        .iter()
        .enumerate()
        .skip(start)
        .take(chart_points(kind))
        .map(|(idx, &time)| ChartSeriesPoint {
            time,
            temperature: hourly.temperature_at(idx),
            rain: hourly.precipitation_probability_at(idx),
            wind: hourly.wind_speed_at(idx),
        })
        .collect()
}

#[must_use]
pub fn build_temperature_metrics(series: &[ChartSeriesPoint]) -> TemperatureMetrics {
    let Some((lowest, highest)) = temperature_extremes(series) else {
        return TemperatureMetrics::default();
    };

    let spread = (highest - lowest) * PADDING_RATIO;
    let padding = if spread > 0.0 {
        spread
    } else {
        FLAT_SERIES_PADDING
    };

    let min = lowest.round() as i64;
    let max = highest.round() as i64;
    TemperatureMetrics {
        min,
        max,
        domain: [
            (lowest - padding).floor() as i64,
            (highest + padding).ceil() as i64,
        ],
        ticks: vec![min, max],
    }
}

#[must_use]
pub fn build_list_points(
    snapshot: &WeatherSnapshot,
    kind: SeriesKind,
    now: i64,
) -> Vec<ForecastListPoint> {
    match kind {
        SeriesKind::Daily => build_daily_list(snapshot)
            .into_iter()
            .map(ForecastListPoint::Daily)
            .collect(),
        SeriesKind::Hourly => build_hourly_list(snapshot, now)
            .into_iter()
            .map(ForecastListPoint::Hourly)
            .collect(),
    }
}

#[must_use]
pub fn build_daily_list(snapshot: &WeatherSnapshot) -> Vec<DailyListPoint> {
    let daily = &snapshot.daily;
    daily
        .time
        .iter()
        .take(DAILY_LIST_POINTS)
        .enumerate()
        .map(|(idx, &time)| DailyListPoint {
            time,
            weather_code: daily.weather_code_at(idx),
            temperature_max: daily.temperature_max_at(idx),
            temperature_min: daily.temperature_min_at(idx),
        })
        .collect()
}

/// Up to eight points in three-hour steps, starting at the next full hour
/// of the location's local clock.
#[must_use]
pub fn build_hourly_list(snapshot: &WeatherSnapshot, now: i64) -> Vec<HourlyListPoint> {
    let hourly = &snapshot.hourly;
    if hourly.is_empty() || snapshot.daily.is_empty() {
        return Vec::new();
    }

    let Some(start) = first_index_at_or_after(
        &hourly.time,
        align_to_next_hour(now, snapshot.utc_offset_seconds),
    ) else {
        return Vec::new();
    };

    (0..HOURLY_LIST_POINTS)
        .map(|step| start + step * HOURLY_LIST_STRIDE)
        .take_while(|&idx| idx < hourly.len())
        .filter_map(|idx| hourly_list_point(snapshot, idx))
        .collect()
}

fn hourly_list_point(snapshot: &WeatherSnapshot, idx: usize) -> Option<HourlyListPoint> {
    let time = *snapshot.hourly.time.get(idx)?;
    let day = containing_day(&snapshot.daily.time, time)?;
    let sunrise = snapshot.daily.sunrise_at(day)?;
    let sunset = snapshot.daily.sunset_at(day)?;
    let temperature = snapshot.hourly.temperature_at(idx)?;
    let weather_code = snapshot.hourly.weather_code_at(idx)?;

    Some(HourlyListPoint {
        time,
        temperature,
        weather_code,
        is_day: is_daylight(time, sunrise, sunset),
    })
}

#[must_use]
pub fn is_daylight(time: i64, sunrise: i64, sunset: i64) -> bool {
    sunrise <= time && time < sunset
}

/// Start of the next local hour after `now`, as epoch seconds. An exact
/// hour still advances by one; half-hour offsets land on the local boundary.
#[must_use]
pub fn align_to_next_hour(now: i64, utc_offset_seconds: i32) -> i64 {
    let offset = i64::from(utc_offset_seconds);
    let local = now + offset;
    local - local.rem_euclid(SECONDS_PER_HOUR) + SECONDS_PER_HOUR - offset
}

/// Index of the last day starting at or before `time`.
#[must_use]
pub fn containing_day(day_starts: &[i64], time: i64) -> Option<usize> {
    day_starts.iter().rposition(|&start| start <= time)
}

fn first_index_at_or_after(times: &[i64], threshold: i64) -> Option<usize> {
    times.iter().position(|&time| time >= threshold)
}

fn temperature_extremes(series: &[ChartSeriesPoint]) -> Option<(f64, f64)> {
    series
        .iter()
        .filter_map(|point| point.temperature)
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartLayer {
    Temperature,
    Rain,
    Wind,
}

/// Overlays drawn on a chart; temperature cannot be switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayLayers {
    pub rain: bool,
    pub wind: bool,
}

impl DisplayLayers {
    #[must_use]
    pub fn contains(&self, layer: ChartLayer) -> bool {
        match layer {
            ChartLayer::Temperature => true,
            ChartLayer::Rain => self.rain,
            ChartLayer::Wind => self.wind,
        }
    }

    pub fn toggle(&mut self, layer: ChartLayer) {
        match layer {
            ChartLayer::Temperature => {}
            ChartLayer::Rain => self.rain = !self.rain,
            ChartLayer::Wind => self.wind = !self.wind,
        }
    }

    #[must_use]
    pub fn active(&self) -> Vec<ChartLayer> {
        [ChartLayer::Temperature, ChartLayer::Rain, ChartLayer::Wind]
            .into_iter()
            .filter(|layer| self.contains(*layer))
            .collect()
    }
}

/// X-axis tick timestamps: every sixth point for hourly, interior day starts for daily.
#[must_use]
pub fn chart_time_ticks(
    series: &[ChartSeriesPoint],
    snapshot: &WeatherSnapshot,
    kind: SeriesKind,
) -> Vec<i64> {
    if series.is_empty() {
        return Vec::new();
    }
    match kind {
        SeriesKind::Hourly => series
            .iter()
            .step_by(HOURLY_TICK_STEP)
            .map(|point| point.time)
            .collect(),
        SeriesKind::Daily => {
            let days = &snapshot.daily.time;
            if days.len() < 3 {
                return Vec::new();
            }
            days[1..days.len() - 1].to_vec()
        }
    }
}

/// Day starts that fall inside the series' time range.
#[must_use]
pub fn midnight_markers(series: &[ChartSeriesPoint], snapshot: &WeatherSnapshot) -> Vec<i64> {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Vec::new();
    };
    snapshot
        .daily
        .time
        .iter()
        .copied()
        .filter(|&time| time >= first.time && time <= last.time)
        .collect()
}

#[must_use]
pub fn rain_axis_bounds() -> [f64; 2] {
    [0.0, RAIN_AXIS_MAX]
}

#[must_use]
pub fn wind_axis_bounds(series: &[ChartSeriesPoint]) -> [f64; 2] {
    let peak = series
        .iter()
        .filter_map(|point| point.wind)
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);
    [0.0, peak + WIND_AXIS_HEADROOM]
}

#[cfg(test)]
mod tests;
