//! Plain-text and JSON renderings of a snapshot for `--one-shot`.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    domain::{
        conditions::IconMode,
        grid::{build_data_grid, today_summary},
        i18n::Locale,
        series::{ForecastOutput, build_forecast},
        snapshot::{Location, SeriesKind, Units, WeatherSnapshot},
    },
    ui::widgets::forecast::list_rows,
};

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    location: &'a Location,
    timezone: &'a str,
    units: Units,
    kind: SeriesKind,
    now: i64,
    #[serde(flatten)]
    output: ForecastOutput,
}

/// Builder output for one series kind, pretty-printed.
pub fn render_json(snapshot: &WeatherSnapshot, kind: SeriesKind, now: i64) -> Result<String> {
    let report = JsonReport {
        location: &snapshot.location,
        timezone: &snapshot.timezone,
        units: snapshot.units,
        kind,
        now,
        output: build_forecast(snapshot, kind, now),
    };
    serde_json::to_string_pretty(&report).context("serializing forecast report failed")
}

#[must_use]
pub fn render_text(
    snapshot: &WeatherSnapshot,
    now: i64,
    icon_mode: IconMode,
    locale: Locale,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}, {})",
        snapshot.location.display_name(),
        snapshot.timezone,
        snapshot.units.label()
    );

    if let Some(summary) = today_summary(snapshot, icon_mode, locale) {
        let _ = writeln!(
            out,
            "Now: {} {}{} {}  H {} L {}",
            summary.glyph,
            summary.temperature,
            summary.unit,
            summary.label,
            summary.high,
            summary.low
        );
    }
    let cards = build_data_grid(snapshot, now)
        .into_iter()
        .map(|card| format!("{} {}{}", card.kind.title(locale), card.value, suffix(card.unit)))
        .collect::<Vec<_>>();
    if !cards.is_empty() {
        let _ = writeln!(out, "{}", cards.join(" | "));
    }

    for kind in [SeriesKind::Hourly, SeriesKind::Daily] {
        let output = build_forecast(snapshot, kind, now);
        let metrics = &output.temperature_metrics;
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} (range {}..{}, {} chart points)",
            kind.title(locale),
            metrics.min,
            metrics.max,
            output.chart_series.len()
        );
        let rows = list_rows(snapshot, &output.list_points, icon_mode, locale);
        if rows.is_empty() {
            let _ = writeln!(out, "  no data");
        }
        for row in rows {
            let _ = writeln!(
                out,
                "  {:<10} {:<4} {:<24} {}",
                row.when, row.glyph, row.label, row.temperature
            );
        }
    }
    out
}

fn suffix(unit: &str) -> String {
    if unit.is_empty() || unit == "%" {
        unit.to_string()
    } else {
        format!(" {unit}")
    }
}
