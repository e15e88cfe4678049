use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use super::shared::panel_block;
use crate::{
    app::{settings::ViewMode, state::AppState},
    domain::{
        i18n::{Locale, no_data_message},
        series::build_forecast,
        snapshot::SeriesKind,
    },
    ui::{layout::effective_view, theme::Theme},
};

mod chart;
mod list;

pub use chart::{ChartData, chart_data, rescale};
pub use list::{ListRow, list_rows};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, kind: SeriesKind, theme: &Theme) {
    let Some(snapshot) = &state.snapshot else {
        return;
    };

    let locale = state.locale();
    let requested = state.view_for(kind);
    let view = effective_view(requested, panel_block(String::new(), theme, false).inner(area));
    let view_label = match view {
        ViewMode::Chart => "chart",
        ViewMode::List => "list",
    };
    let block = panel_block(
        format!(" {} · {view_label} ", kind.title(locale)),
        theme,
        state.focus == kind,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let output = build_forecast(snapshot, kind, state.now);
    match view {
        ViewMode::Chart => match chart_data(snapshot, kind, &output, state.layers, locale) {
            Some(data) => chart::render(frame, inner, &data, theme),
            None => render_empty(frame, inner, locale, theme),
        },
        ViewMode::List if output.list_points.is_empty() => {
            render_empty(frame, inner, locale, theme);
        }
        ViewMode::List => list::render(
            frame,
            inner,
            snapshot,
            &output.list_points,
            state.icon_mode,
            locale,
            theme,
        ),
    }
}

fn render_empty(frame: &mut Frame, area: Rect, locale: Locale, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(no_data_message(locale))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted_text)),
        area,
    );
}
