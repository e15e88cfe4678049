use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use super::shared::panel_block;
use crate::{
    app::state::AppState,
    domain::{
        conditions::weather_code_to_category,
        grid::{build_data_grid, today_summary},
        i18n::today_title,
    },
    ui::theme::{Theme, condition_color},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Some(snapshot) = &state.snapshot else {
        return;
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(1)])
        .split(area);

    let locale = state.locale();
    let block = panel_block(today_title(locale).to_string(), theme, false);
    let lines = match (today_summary(snapshot, state.icon_mode, locale), &snapshot.current) {
        (Some(summary), Some(current)) => {
            let tint = condition_color(theme, weather_code_to_category(current.weather_code));
            vec![
                Line::from(vec![
                    Span::styled(format!("{} ", summary.glyph), Style::default().fg(tint)),
                    Span::styled(
                        format!("{}{}", summary.temperature, summary.unit),
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(summary.label, Style::default().fg(tint))),
                Line::from(Span::styled(
                    format!("H {}°  L {}°", summary.high, summary.low),
                    Style::default().fg(theme.muted_text),
                )),
            ]
        }
        _ => vec![Line::from(Span::styled(
            "No current conditions",
            Style::default().fg(theme.muted_text),
        ))],
    };
    frame.render_widget(Paragraph::new(lines).block(block), columns[0]);

    let cards = build_data_grid(snapshot, state.now);
    let titles = Row::new(
        cards
            .iter()
            .map(|card| {
                Cell::from(card.kind.title(locale)).style(Style::default().fg(theme.muted_text))
            })
            .collect::<Vec<_>>(),
    );
    let values = Row::new(
        cards
            .iter()
            .map(|card| {
                let text = if card.unit.is_empty() {
                    card.value.clone()
                } else {
                    format!("{} {}", card.value, card.unit)
                };
                Cell::from(text).style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
            })
            .collect::<Vec<_>>(),
    );
    let widths = vec![Constraint::Ratio(1, 6); cards.len().max(1)];
    let table = Table::new([titles, values], widths)
        .column_spacing(1)
        .block(panel_block("Conditions".to_string(), theme, false));
    frame.render_widget(table, columns[1]);
}
