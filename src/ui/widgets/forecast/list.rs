use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
};

use crate::{
    domain::{
        conditions::{IconMode, weather_code_to_category, weather_icon, weather_label_for_time},
        format::{format_clock, format_temperature, format_weekday},
        i18n::Locale,
        series::ForecastListPoint,
        snapshot::WeatherSnapshot,
    },
    ui::theme::{Theme, condition_color, temp_color},
};

/// Text cells for one list row: when, glyph, condition, temperature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub when: String,
    pub glyph: &'static str,
    pub label: &'static str,
    pub temperature: String,
}

#[must_use]
pub fn list_rows(
    snapshot: &WeatherSnapshot,
    points: &[ForecastListPoint],
    icon_mode: IconMode,
    locale: Locale,
) -> Vec<ListRow> {
    let units = snapshot.units;
    let offset = snapshot.utc_offset_seconds;
    points
        .iter()
        .map(|point| match point {
            ForecastListPoint::Hourly(hour) => ListRow {
                when: format_clock(hour.time, offset, units),
                glyph: weather_icon(hour.weather_code, icon_mode, hour.is_day),
                label: weather_label_for_time(hour.weather_code, hour.is_day, locale),
                temperature: joined(format_temperature(Some(hour.temperature), units)),
            },
            ForecastListPoint::Daily(day) => ListRow {
                when: format_weekday(day.time, offset, locale),
                glyph: day
                    .weather_code
                    .map_or("", |code| weather_icon(code, icon_mode, true)),
                label: day
                    .weather_code
                    .map_or("--", |code| weather_label_for_time(code, true, locale)),
                temperature: format!(
                    "{} / {}",
                    joined(format_temperature(day.temperature_max, units)),
                    joined(format_temperature(day.temperature_min, units)),
                ),
            },
        })
        .collect()
}

fn joined((value, unit): (String, &'static str)) -> String {
    format!("{value}{unit}")
}

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    snapshot: &WeatherSnapshot,
    points: &[ForecastListPoint],
    icon_mode: IconMode,
    locale: Locale,
    theme: &Theme,
) {
    let rows = list_rows(snapshot, points, icon_mode, locale)
        .into_iter()
        .zip(points)
        .map(|(row, point)| {
            let (code, temp) = match point {
                ForecastListPoint::Hourly(hour) => (Some(hour.weather_code), Some(hour.temperature)),
                ForecastListPoint::Daily(day) => (day.weather_code, day.temperature_max),
            };
            let tint = code.map_or(theme.muted_text, |code| {
                condition_color(theme, weather_code_to_category(code))
            });
            let temp_style = temp.map_or(Style::default().fg(theme.muted_text), |temp| {
                Style::default()
                    .fg(temp_color(theme, temp, snapshot.units))
                    .add_modifier(Modifier::BOLD)
            });
            Row::new(vec![
                Cell::from(row.when).style(Style::default().fg(theme.muted_text)),
                Cell::from(row.glyph).style(Style::default().fg(tint)),
                Cell::from(row.label).style(Style::default().fg(theme.text)),
                Cell::from(row.temperature).style(temp_style),
            ])
        })
        .collect::<Vec<_>>();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(4),
        Constraint::Min(12),
        Constraint::Length(14),
    ];
    frame.render_widget(Table::new(rows, widths).column_spacing(1), area);
}
