#![allow(clippy::cast_precision_loss)]

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{Axis, Chart, Dataset, GraphType, LegendPosition},
};

use crate::{
    domain::{
        format::{format_hour, format_short_date, temperature_unit},
        i18n::Locale,
        series::{
            ChartLayer, ChartSeriesPoint, DisplayLayers, ForecastOutput, chart_time_ticks,
            midnight_markers, rain_axis_bounds, wind_axis_bounds,
        },
        snapshot::{SeriesKind, WeatherSnapshot},
    },
    ui::theme::Theme,
};

const MARKER_DASHES: usize = 9;

/// Plot-ready coordinates with every overlay already mapped onto the
/// temperature axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub temperature: Vec<(f64, f64)>,
    pub rain: Vec<(f64, f64)>,
    pub wind: Vec<(f64, f64)>,
    pub min_line: [(f64, f64); 2],
    pub max_line: [(f64, f64); 2],
    pub midnight_dashes: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
}

/// Linear map of `value` from one range onto another.
#[must_use]
pub fn rescale(value: f64, from: [f64; 2], to: [f64; 2]) -> f64 {
    let span = from[1] - from[0];
    if span <= 0.0 {
        return to[0];
    }
    to[0] + (value - from[0]) / span * (to[1] - to[0])
}

#[must_use]
pub fn chart_data(
    snapshot: &WeatherSnapshot,
    kind: SeriesKind,
    output: &ForecastOutput,
    layers: DisplayLayers,
    locale: Locale,
) -> Option<ChartData> {
    let series = &output.chart_series;
    let temperature = series
        .iter()
        .filter_map(|point| point.temperature.map(|temp| (point.time as f64, temp)))
        .collect::<Vec<_>>();
    if temperature.is_empty() {
        return None;
    }

    let (first, last) = (series.first()?.time as f64, series.last()?.time as f64);
    let x_bounds = [first, if last > first { last } else { first + 1.0 }];
    let metrics = &output.temperature_metrics;
    let y_bounds = [metrics.domain[0] as f64, metrics.domain[1] as f64];

    let rain = if layers.contains(ChartLayer::Rain) {
        overlay(series, |point| point.rain, rain_axis_bounds(), y_bounds)
    } else {
        Vec::new()
    };
    let wind = if layers.contains(ChartLayer::Wind) {
        overlay(series, |point| point.wind, wind_axis_bounds(series), y_bounds)
    } else {
        Vec::new()
    };

    let midnight_dashes = midnight_markers(series, snapshot)
        .into_iter()
        .flat_map(|time| {
            (0..MARKER_DASHES).map(move |step| {
                let t = step as f64 / (MARKER_DASHES - 1) as f64;
                (time as f64, y_bounds[0] + t * (y_bounds[1] - y_bounds[0]))
            })
        })
        .collect();

    let offset = snapshot.utc_offset_seconds;
    let mut ticks = chart_time_ticks(series, snapshot, kind);
    if ticks.is_empty() {
        ticks = vec![series.first()?.time, series.last()?.time];
    }
    let x_labels = ticks
        .into_iter()
        .map(|time| match kind {
            SeriesKind::Hourly => format_hour(time, offset),
            SeriesKind::Daily => format_short_date(time, offset, locale),
        })
        .collect();

    let unit = temperature_unit(snapshot.units);
    let y_labels = [metrics.domain[0], metrics.domain[1]]
        .iter()
        .map(|value| format!("{value}{unit}"))
        .collect();

    Some(ChartData {
        temperature,
        rain,
        wind,
        min_line: [(x_bounds[0], metrics.min as f64), (x_bounds[1], metrics.min as f64)],
        max_line: [(x_bounds[0], metrics.max as f64), (x_bounds[1], metrics.max as f64)],
        midnight_dashes,
        x_bounds,
        y_bounds,
        x_labels,
        y_labels,
    })
}

fn overlay(
    series: &[ChartSeriesPoint],
    pick: impl Fn(&ChartSeriesPoint) -> Option<f64>,
    from: [f64; 2],
    to: [f64; 2],
) -> Vec<(f64, f64)> {
    series
        .iter()
        .filter_map(|point| {
            pick(point).map(|value| (point.time as f64, rescale(value, from, to)))
        })
        .collect()
}

pub(super) fn render(frame: &mut Frame, area: Rect, data: &ChartData, theme: &Theme) {
    let reference = Style::default().fg(theme.reference);
    let mut datasets = vec![
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(reference)
            .data(&data.midnight_dashes),
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(reference)
            .data(&data.min_line),
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(reference)
            .data(&data.max_line),
    ];
    if !data.rain.is_empty() {
        datasets.push(
            Dataset::default()
                .name("rain %")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.rain))
                .data(&data.rain),
        );
    }
    if !data.wind.is_empty() {
        datasets.push(
            Dataset::default()
                .name("wind")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.wind))
                .data(&data.wind),
        );
    }
    datasets.push(
        Dataset::default()
            .name("temp")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.temp_line))
            .data(&data.temperature),
    );

    let axis_style = Style::default().fg(theme.muted_text);
    let chart = Chart::new(datasets)
        .legend_position(Some(LegendPosition::TopRight))
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds(data.x_bounds)
                .labels(data.x_labels.clone()),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds(data.y_bounds)
                .labels(data.y_labels.clone()),
        );
    frame.render_widget(chart, area);
}
