use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    resilience::health::{ApiHealth, RefreshMetadata},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let badge = health_badge(&state.refresh_meta);
    let badge_width = u16::try_from(badge.chars().count()).unwrap_or(u16::MAX);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(badge_width)])
        .split(area);

    let mut spans = vec![Span::styled(
        location_label(state),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )];
    if let Some(snapshot) = &state.snapshot {
        if state.settings.is_favorite(&snapshot.location) {
            spans.push(Span::styled(" ★", Style::default().fg(theme.warning)));
        }
        spans.push(Span::styled(
            format!("  {} · {}", snapshot.units.label(), snapshot.timezone),
            Style::default().fg(theme.muted_text),
        ));
    }
    if state.fetch_in_flight {
        spans.push(Span::styled("  ↻", Style::default().fg(theme.accent)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), columns[0]);

    let color = match state.refresh_meta.health {
        ApiHealth::Healthy => theme.success,
        ApiHealth::Degraded => theme.warning,
        ApiHealth::Down => theme.danger,
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            badge,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        columns[1],
    );
}

fn location_label(state: &AppState) -> String {
    state.snapshot.as_ref().map_or_else(
        || "Locating…".to_string(),
        |snapshot| snapshot.location.display_name(),
    )
}

pub(crate) fn health_badge(meta: &RefreshMetadata) -> String {
    match meta.age_minutes(Utc::now()) {
        Some(age) if age > 0 => format!("● {} ({age}m ago)", meta.health.label()),
        _ => format!("● {}", meta.health.label()),
    }
}
