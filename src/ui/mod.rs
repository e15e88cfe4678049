pub mod layout;
pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::{AppMode, AppState},
    domain::{
        conditions::weather_code_to_category, i18n::load_failed_message, snapshot::SeriesKind,
    },
    ui::theme::{ColorCapability, Theme, detect_color_capability, theme_for},
};

const KEY_HINTS: &str = "q quit · Tab panel · v chart/list · r rain · w wind · u units · \
                         l language · f favorite · 1-9 load · R refresh";

pub fn render(frame: &mut Frame, state: &AppState) {
    render_with_capability(frame, state, detect_color_capability());
}

pub fn render_with_capability(frame: &mut Frame, state: &AppState, capability: ColorCapability) {
    let area = frame.area();
    let theme = current_theme(state, capability);

    if !layout::fits(area) {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {}x{}.",
            layout::MIN_WIDTH,
            layout::MIN_HEIGHT
        ))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("forecast-series"));
        frame.render_widget(warning, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(area);

    widgets::header::render(frame, rows[0], state, &theme);
    if state.snapshot.is_some() {
        widgets::today::render(frame, rows[1], state, &theme);
        render_panels(frame, rows[2], state, &theme);
    } else {
        render_loading(frame, rows[1].union(rows[2]), state, &theme);
    }
    render_footer(frame, rows[3], state, &theme);
}

fn current_theme(state: &AppState, capability: ColorCapability) -> Theme {
    match state.snapshot.as_ref().and_then(|s| s.current.as_ref()) {
        Some(current) => theme_for(
            weather_code_to_category(current.weather_code),
            current.is_day,
            capability,
        ),
        None => theme_for(
            crate::domain::conditions::WeatherCategory::Unknown,
            true,
            capability,
        ),
    }
}

fn render_panels(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let direction = if layout::panels_side_by_side(area.width) {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let panels = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    widgets::forecast::render(frame, panels[0], state, SeriesKind::Hourly, theme);
    widgets::forecast::render(frame, panels[1], state, SeriesKind::Daily, theme);
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Forecast")
        .border_style(Style::default().fg(theme.border));
    let message = if state.mode == AppMode::Error {
        Line::from(Span::styled(
            load_failed_message(state.locale()),
            Style::default().fg(theme.danger),
        ))
    } else {
        Line::from(Span::styled(
            state.loading_message.clone(),
            Style::default().fg(theme.accent),
        ))
    };
    frame.render_widget(Paragraph::new(message).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let line = if let Some(err) = &state.last_error {
        Line::from(Span::styled(
            format!("⚠ {err}"),
            Style::default().fg(theme.danger).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(status) = &state.status_message {
        Line::from(Span::styled(status.clone(), Style::default().fg(theme.accent)))
    } else {
        Line::from(Span::styled(KEY_HINTS, Style::default().fg(theme.muted_text)))
    };
    frame.render_widget(Paragraph::new(line), area);
}
